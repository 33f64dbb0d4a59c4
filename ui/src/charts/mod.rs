//! Chart projections of a result batch. Every builder is a pure function of the
//! batch; the charting library only paints what it is handed.

mod congestion;
mod distribution;
pub mod model;
mod scatter;
mod stacked;

use api::OptimizationResult;

pub use congestion::{bar_chart, comparison_chart, line_chart};
pub use distribution::{category_counts, improvement_chart, pie_chart};
pub use model::{
    Axis, AxisTitle, ChartData, ChartOptions, ChartSpec, Colors, Dataset, Legend, Plugins, Point,
    Scales, Series, Title,
};
pub use scatter::{reference_line, scatter_chart};
pub use stacked::stacked_bar_chart;

pub(crate) const ORIGINAL_COLOR: &str = "rgba(239, 68, 68, 0.7)";
pub(crate) const OPTIMIZED_COLOR: &str = "rgba(34, 197, 94, 0.7)";
pub(crate) const GREEN_TIME_COLOR: &str = "rgba(34, 197, 94, 0.8)";
pub(crate) const RED_TIME_COLOR: &str = "rgba(239, 68, 68, 0.8)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    StackedBar,
    Scatter,
    Comparison,
    Improvement,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        Self::Bar,
        Self::Line,
        Self::Pie,
        Self::StackedBar,
        Self::Scatter,
        Self::Comparison,
        Self::Improvement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
            Self::StackedBar => "Signal timing",
            Self::Scatter => "Correlation",
            Self::Comparison => "Comparison",
            Self::Improvement => "Improvement %",
        }
    }

    /// Stable identifier used in form values and element ids.
    pub fn id(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::StackedBar => "stacked",
            Self::Scatter => "scatter",
            Self::Comparison => "comparison",
            Self::Improvement => "improvement",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

pub fn build_chart(kind: ChartKind, batch: &[OptimizationResult]) -> ChartSpec {
    match kind {
        ChartKind::Bar => bar_chart(batch),
        ChartKind::Line => line_chart(batch),
        ChartKind::Pie => pie_chart(batch),
        ChartKind::StackedBar => stacked_bar_chart(batch),
        ChartKind::Scatter => scatter_chart(batch),
        ChartKind::Comparison => comparison_chart(batch),
        ChartKind::Improvement => improvement_chart(batch),
    }
}

/// `Sensor 1`, `Sensor 2`, ... one per item.
pub(crate) fn sensor_labels(batch: &[OptimizationResult]) -> Vec<String> {
    (1..=batch.len()).map(|n| format!("Sensor {n}")).collect()
}
