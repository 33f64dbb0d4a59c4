//! Wire model for optimization results returned by the evaluation backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Linguistic congestion label assigned by the backend's fuzzy evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CongestionLevel {
    #[default]
    None,
    Mild,
    Severe,
}

impl CongestionLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mild => "mild",
            Self::Severe => "severe",
        }
    }
}

/// Optimized signal split for one traffic light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct SignalTiming {
    pub green_time_sec: f64,
    pub red_time_sec: f64,
}

/// Congestion before and after applying the optimized timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Impact {
    pub original_congestion: f64,
    pub optimized_congestion: f64,
    #[serde(default)]
    pub original_category: CongestionLevel,
    #[serde(default)]
    pub optimized_category: CongestionLevel,
}

impl Impact {
    pub fn new(original_congestion: f64, optimized_congestion: f64) -> Self {
        Self {
            original_congestion,
            optimized_congestion,
            ..Self::default()
        }
    }

    pub fn improvement_pct(&self) -> f64 {
        improvement_pct(self.original_congestion, self.optimized_congestion)
    }
}

/// One optimized sensor (or sensor cluster) as reported by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OptimizationResult {
    #[serde(default)]
    pub traffic_light_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_sensors: Option<Vec<String>>,
    #[serde(default)]
    pub optimization: Option<SignalTiming>,
    #[serde(default)]
    pub impact: Option<Impact>,
    /// Scalar fields the dashboard does not interpret (timestamp, version, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OptimizationResult {
    pub fn original_congestion(&self) -> f64 {
        self.impact.map(|i| i.original_congestion).unwrap_or(0.0)
    }

    pub fn optimized_congestion(&self) -> f64 {
        self.impact.map(|i| i.optimized_congestion).unwrap_or(0.0)
    }

    pub fn green_time_sec(&self) -> f64 {
        self.optimization.map(|o| o.green_time_sec).unwrap_or(0.0)
    }

    pub fn red_time_sec(&self) -> f64 {
        self.optimization.map(|o| o.red_time_sec).unwrap_or(0.0)
    }

    /// Relative congestion reduction for this item. A missing impact counts as zero.
    pub fn improvement_pct(&self) -> f64 {
        improvement_pct(self.original_congestion(), self.optimized_congestion())
    }
}

/// Results of one request, in backend order.
pub type ResultBatch = Vec<OptimizationResult>;

/// The single definition of the improvement percentage shared by every consumer.
pub fn improvement_pct(original: f64, optimized: f64) -> f64 {
    if original > 0.0 {
        (original - optimized) / original * 100.0
    } else {
        0.0
    }
}
