use dioxus::prelude::*;
use tracing::info;

use ui::components::AppNavbar;
use ui::views::Dashboard;
use ui::{CHART_BRIDGE_JS, CHART_JS_CDN, THEME_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
}

fn main() {
    dioxus::logger::initialize_default();
    info!(version = env!("CARGO_PKG_VERSION"), "starting greenwave web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{THEME_CSS}" }
        document::Script { src: "{CHART_JS_CDN}" }
        document::Script { "{CHART_BRIDGE_JS}" }

        Router::<Route> {}
    }
}

/// Web layout: the shared navbar around the web `Route` outlet.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Dashboard {}, "Dashboard" }
        }
        Outlet::<Route> {}
    }
}
