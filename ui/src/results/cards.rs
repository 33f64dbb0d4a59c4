use dioxus::prelude::*;

use crate::core::metrics::MetricCards;

#[component]
pub fn MetricCardsPanel(metrics: MetricCards, rows: usize) -> Element {
    let cards = metrics.cards();

    rsx! {
        section { class: "results-card results-metrics",
            div { class: "results-card__header",
                h2 { "Highlights" }
                if rows > 0 {
                    span { class: "results-card__meta", "{rows} sensors in latest batch" }
                }
            }

            if cards.is_empty() {
                p { class: "results-card__placeholder", "Run an optimization to populate summary metrics." }
            } else {
                div { class: "results-highlights",
                    for card in cards {
                        div { class: "results-highlight",
                            span { class: "results-highlight__label", "{card.label}" }
                            strong { class: "results-highlight__value", "{card.value}" }
                            span { class: "results-highlight__meta", "{card.meta}" }
                        }
                    }
                }
            }
        }
    }
}
