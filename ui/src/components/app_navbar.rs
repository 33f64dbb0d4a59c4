use dioxus::prelude::*;

/// Branded header shared by the web and desktop shells. Platforms pass their
/// own `Link`s as children since only they know their `Route` enum.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Greenwave" }
                    }
                    span { class: "navbar__brand-subtitle", "Traffic signal optimization" }
                }
                nav { class: "navbar__links", {children} }
            }
        }
    }
}
