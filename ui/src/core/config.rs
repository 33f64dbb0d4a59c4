//! Dashboard-level settings.

use api::ApiConfig;

use crate::charts::ChartKind;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub loading_message_period_ms: u64,
    pub default_chart: ChartKind,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::from_build_env(),
            loading_message_period_ms: 2_000,
            default_chart: ChartKind::Bar,
        }
    }
}
