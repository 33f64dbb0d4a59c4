use dioxus::prelude::*;
use tracing::warn;

use crate::charts::ChartKind;
use crate::results::DashboardState;

/// Element the chart bridge paints into.
const CHART_CANVAS_ID: &str = "results-chart";

#[component]
pub fn ResultsChartPanel(state: Signal<DashboardState>) -> Element {
    let mut state = state;
    let selected = state.read().chart_kind();

    // Memoized so loading ticks and notices don't repaint the chart.
    let chart = use_memo(move || state.read().chart().cloned());
    let has_chart = chart.read().is_some();

    use_effect(move || {
        let payload = chart.read().as_ref().map(serde_json::to_string).transpose();
        match payload {
            Ok(Some(json)) => {
                let script = format!(
                    "window.greenwaveRenderChart && window.greenwaveRenderChart('{CHART_CANVAS_ID}', {json});"
                );
                document::eval(&script);
            }
            Ok(None) => {}
            Err(err) => warn!(%err, "failed to encode chart spec"),
        }
    });

    rsx! {
        section { class: "results-card results-chart",
            div { class: "results-card__header",
                h2 { class: "results-chart__title", "Charts" }
                div { class: "results-chart__kinds",
                    for kind in ChartKind::ALL {
                        button {
                            key: "{kind.id()}",
                            r#type: "button",
                            class: if kind == selected { "button button--accent" } else { "button button--ghost" },
                            onclick: move |_| state.with_mut(|s| s.select_chart(kind)),
                            "{kind.label()}"
                        }
                    }
                }
            }

            if has_chart {
                div { class: "results-chart__canvas",
                    canvas { id: CHART_CANVAS_ID }
                }
            } else {
                p { class: "results-card__placeholder", "Charts appear once results arrive." }
            }
        }
    }
}
