use dioxus::prelude::*;

use crate::results::table::{ResultsTable, SortDirection};

#[component]
pub fn ResultsTableView(table: ResultsTable) -> Element {
    let mut sort = use_signal(|| Option::<(String, SortDirection)>::None);

    let mut view = table.clone();
    if let Some((key, direction)) = sort() {
        view.sort_by(&key, direction);
    }

    let headers: Vec<HeaderEntry> = view
        .columns
        .iter()
        .map(|column| {
            let indicator = match sort() {
                Some((key, SortDirection::Ascending)) if key == column.key => " ▲",
                Some((key, SortDirection::Descending)) if key == column.key => " ▼",
                _ => "",
            };
            HeaderEntry {
                key: column.key.clone(),
                title: column.title.clone(),
                indicator,
            }
        })
        .collect();

    let body: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            view.columns
                .iter()
                .map(|column| row.cell(&column.key).display())
                .collect()
        })
        .collect();

    rsx! {
        section { class: "results-card results-table",
            div { class: "results-card__header",
                h2 { "Optimization results" }
                if !view.rows.is_empty() {
                    span { class: "results-card__meta", "{view.rows.len()} rows" }
                }
            }

            if view.rows.is_empty() {
                p { class: "results-card__placeholder", "The latest batch contained no results." }
            } else {
                div { class: "results-table__scroll",
                    table { class: "results-table__grid",
                        thead {
                            tr {
                                { headers.into_iter().map(|header| {
                                    let sort_key = header.key.clone();
                                    rsx! {
                                        th {
                                            key: "{header.key}",
                                            class: "results-table__heading",
                                            onclick: move |_| {
                                                let next = match sort() {
                                                    Some((key, direction)) if key == sort_key => direction.toggled(),
                                                    _ => SortDirection::Ascending,
                                                };
                                                sort.set(Some((sort_key.clone(), next)));
                                            },
                                            "{header.title}{header.indicator}"
                                        }
                                    }
                                })}
                            }
                        }
                        tbody {
                            for cells in body {
                                tr { class: "results-table__row",
                                    for cell in cells {
                                        td { "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct HeaderEntry {
    key: String,
    title: String,
    indicator: &'static str,
}
