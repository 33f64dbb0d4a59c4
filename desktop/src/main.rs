#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing::info;

use ui::components::AppNavbar;
use ui::views::Dashboard;
use ui::{CHART_BRIDGE_JS, CHART_JS_CDN, THEME_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Dashboard {},
}

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();
    info!(version = env!("CARGO_PKG_VERSION"), "starting greenwave desktop");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Greenwave – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    info!("starting greenwave server shell");
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Theme and chart bridge are embedded so packaged builds need no asset directory.
        document::Style { "{THEME_CSS}" }
        document::Script { src: "{CHART_JS_CDN}" }
        document::Script { "{CHART_BRIDGE_JS}" }

        Router::<Route> {}
    }
}

/// Desktop layout: the shared navbar around the desktop `Route` outlet.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Dashboard {}, "Dashboard" }
        }
        Outlet::<Route> {}
    }
}
