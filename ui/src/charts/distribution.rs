//! Views over per-sensor improvement: category pie and improvement bars.

use api::OptimizationResult;

use super::{sensor_labels, Axis, ChartData, ChartOptions, ChartSpec, Colors, Dataset, Series};
use crate::core::classify::{classify, ImprovementCategory};

const GAIN_COLOR: &str = "rgba(34, 197, 94, 0.8)";
const LOSS_COLOR: &str = "rgba(239, 68, 68, 0.8)";

/// Items per improvement category, in [`ImprovementCategory::ALL`] order.
pub fn category_counts(batch: &[OptimizationResult]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for item in batch {
        counts[classify(item.improvement_pct()).index()] += 1;
    }
    counts
}

pub fn pie_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let counts = category_counts(batch);
    let categories = ImprovementCategory::ALL;

    ChartSpec {
        chart_type: "pie",
        data: ChartData {
            labels: categories.iter().map(|c| c.label().to_string()).collect(),
            datasets: vec![Dataset::new(
                "Sensors",
                Series::Values(counts.iter().map(|&n| n as f64).collect()),
                Colors::PerItem(categories.iter().map(|c| c.color().to_string()).collect()),
            )],
        },
        options: ChartOptions::titled("Improvement distribution").with_legend_position("right"),
    }
}

pub fn improvement_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let improvements: Vec<f64> = batch.iter().map(OptimizationResult::improvement_pct).collect();
    let colors = improvements
        .iter()
        .map(|&pct| if pct >= 0.0 { GAIN_COLOR } else { LOSS_COLOR }.to_string())
        .collect();

    ChartSpec {
        chart_type: "bar",
        data: ChartData {
            labels: sensor_labels(batch),
            datasets: vec![Dataset::new(
                "Improvement (%)",
                Series::Values(improvements),
                Colors::PerItem(colors),
            )],
        },
        options: ChartOptions::titled("Congestion improvement per sensor")
            .with_scales(Axis::titled("Sensor"), Axis::titled("Improvement (%)")),
    }
}
