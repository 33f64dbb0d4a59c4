//! Shared UI crate for Greenwave: result-derived views, charts and the dashboard.

pub mod charts;
pub mod core;
pub mod results;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

/// Shared theme, inlined by both platform shells.
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));

/// Paints a serialized chart config onto a canvas via `window.greenwaveRenderChart`.
pub const CHART_BRIDGE_JS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/chart_bridge.js"));

/// Chart.js build the bridge renders with.
pub const CHART_JS_CDN: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
