use std::future::Future;

use dioxus::prelude::*;

use api::{parse_sensor_count, EvaluationClient, FetchError, ResultBatch, SensorReading};

use crate::core::config::DashboardConfig;
use crate::core::rotation;
use crate::results::{
    DashboardState, MetricCardsPanel, ResultsChartPanel, ResultsExportPanel, ResultsTableView,
};

#[component]
pub fn Dashboard() -> Element {
    let config = use_hook(DashboardConfig::default);
    let client = use_hook(|| EvaluationClient::new(config.api.clone()));
    let period_ms = config.loading_message_period_ms;

    let mut state = use_signal(|| DashboardState::new(config.default_chart));

    let mut vpm = use_signal(String::new);
    let mut spd = use_signal(String::new);
    let mut den = use_signal(String::new);
    let mut sensor_count = use_signal(|| "10".to_string());

    let evaluate_single = {
        let client = client.clone();
        move |_| {
            match SensorReading::parse(&vpm(), &spd(), &den()) {
                Ok(reading) => {
                    let client = client.clone();
                    run_request(state, period_ms, move || async move {
                        client.evaluate_single(&reading).await
                    });
                }
                Err(err) => state.with_mut(|s| s.reject_input(&err)),
            }
        }
    };

    let evaluate_batch = {
        let client = client.clone();
        move |_| match parse_sensor_count(&sensor_count()) {
            Ok(count) => {
                let client = client.clone();
                run_request(state, period_ms, move || async move {
                    client.evaluate_batch(count).await
                });
            }
            Err(err) => state.with_mut(|s| s.reject_input(&err)),
        }
    };

    let snapshot = state.read();
    let is_loading = snapshot.is_loading();
    let loading_message = snapshot.loading_message();
    let notice = snapshot.notice().map(str::to_string);
    let has_results = snapshot.has_results();
    let metrics = snapshot.metrics().clone();
    let table = snapshot.table().clone();
    let batch = snapshot.batch().clone();
    drop(snapshot);

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Signal optimization" }
            p {
                "Submit sensor readings or generate a random batch, then compare congestion before and after the optimized signal timings."
            }

            div { class: "dashboard__forms",
                div { class: "results-card dashboard__form",
                    h2 { "Single sensor" }
                    label { "Vehicles per minute"
                        input { r#type: "text", inputmode: "decimal", value: "{vpm}", oninput: move |evt| vpm.set(evt.value()) }
                    }
                    label { "Speed (km/h)"
                        input { r#type: "text", inputmode: "decimal", value: "{spd}", oninput: move |evt| spd.set(evt.value()) }
                    }
                    label { "Density (veh/km)"
                        input { r#type: "text", inputmode: "decimal", value: "{den}", oninput: move |evt| den.set(evt.value()) }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: is_loading,
                        onclick: evaluate_single,
                        "Evaluate sensor"
                    }
                }

                div { class: "results-card dashboard__form",
                    h2 { "Random batch" }
                    label { "Number of sensors"
                        input { r#type: "text", inputmode: "numeric", value: "{sensor_count}", oninput: move |evt| sensor_count.set(evt.value()) }
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        disabled: is_loading,
                        onclick: evaluate_batch,
                        "Run batch"
                    }
                }
            }

            if let Some(message) = notice {
                div { class: "dashboard__notice", role: "alert",
                    span { "⚠️ {message}" }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| state.with_mut(|s| s.dismiss_notice()),
                        "Dismiss"
                    }
                }
            }

            if let Some(message) = loading_message {
                div { class: "dashboard__loading",
                    span { class: "dashboard__spinner" }
                    span { class: "dashboard__loading-text", "{message}" }
                }
            }

            if has_results {
                MetricCardsPanel { metrics, rows: table.rows.len() }
                ResultsChartPanel { state }
                ResultsTableView { table: table.clone() }
                ResultsExportPanel { batch, table }
            } else if loading_message.is_none() {
                p { class: "results-card__placeholder", "No results yet." }
            }
        }
    }
}

/// Move the dashboard into `Loading`, start the message rotation and resolve
/// `request` against the ticket issued for it.
fn run_request<F, Fut>(mut state: Signal<DashboardState>, period_ms: u64, request: F)
where
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<ResultBatch, FetchError>> + 'static,
{
    let ticket = state.with_mut(|s| s.begin_request());

    let (handle, ticker) = rotation::start(period_ms, move || {
        state.with_mut(|s| s.advance_message(ticket));
    });
    spawn(ticker);
    state.with_mut(|s| s.attach_rotation(ticket, handle));

    spawn(async move {
        let outcome = request().await;
        state.with_mut(|s| s.complete(ticket, outcome));
    });
}
