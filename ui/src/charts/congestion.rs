//! Original-vs-optimized congestion per sensor: bar, line and comparison views.

use api::OptimizationResult;

use super::{sensor_labels, Axis, ChartData, ChartOptions, ChartSpec, Dataset, OPTIMIZED_COLOR, ORIGINAL_COLOR};

/// Congestion series are only emitted when the *first* item carries an impact;
/// otherwise the whole batch renders without series, even if later items have one.
fn first_item_has_impact(batch: &[OptimizationResult]) -> bool {
    batch.first().is_some_and(|item| item.impact.is_some())
}

fn congestion_series(batch: &[OptimizationResult]) -> (Vec<f64>, Vec<f64>) {
    batch
        .iter()
        .map(|item| (item.original_congestion(), item.optimized_congestion()))
        .unzip()
}

fn congestion_axes(options: ChartOptions) -> ChartOptions {
    options.with_scales(Axis::titled("Sensor"), Axis::titled("Congestion level"))
}

pub fn bar_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let mut datasets = Vec::new();
    if first_item_has_impact(batch) {
        let (original, optimized) = congestion_series(batch);
        datasets.push(
            Dataset::values("Original congestion", original, ORIGINAL_COLOR)
                .with_border(ORIGINAL_COLOR, 1.0),
        );
        datasets.push(
            Dataset::values("Optimized congestion", optimized, OPTIMIZED_COLOR)
                .with_border(OPTIMIZED_COLOR, 1.0),
        );
    }

    ChartSpec {
        chart_type: "bar",
        data: ChartData {
            labels: sensor_labels(batch),
            datasets,
        },
        options: congestion_axes(ChartOptions::titled("Congestion before and after optimization")),
    }
}

pub fn line_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let mut datasets = Vec::new();
    if first_item_has_impact(batch) {
        let (original, optimized) = congestion_series(batch);
        for (label, values, color) in [
            ("Original congestion", original, ORIGINAL_COLOR),
            ("Optimized congestion", optimized, OPTIMIZED_COLOR),
        ] {
            let mut dataset = Dataset::values(label, values, color).with_border(color, 2.0);
            dataset.fill = Some(true);
            dataset.tension = Some(0.4);
            datasets.push(dataset);
        }
    }

    ChartSpec {
        chart_type: "line",
        data: ChartData {
            labels: sensor_labels(batch),
            datasets,
        },
        options: congestion_axes(ChartOptions::titled("Congestion trend across sensors")),
    }
}

/// Grouped, non-stacked bars. Missing impacts count as zero congestion.
pub fn comparison_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let (original, optimized) = congestion_series(batch);

    ChartSpec {
        chart_type: "bar",
        data: ChartData {
            labels: sensor_labels(batch),
            datasets: vec![
                Dataset::values("Before optimization", original, ORIGINAL_COLOR)
                    .with_border(ORIGINAL_COLOR, 1.0),
                Dataset::values("After optimization", optimized, OPTIMIZED_COLOR)
                    .with_border(OPTIMIZED_COLOR, 1.0),
            ],
        },
        options: congestion_axes(ChartOptions::titled("Before / after comparison per sensor")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Series;
    use api::Impact;

    fn with_impact(original: f64, optimized: f64) -> OptimizationResult {
        OptimizationResult {
            impact: Some(Impact::new(original, optimized)),
            ..OptimizationResult::default()
        }
    }

    #[test]
    fn bar_emits_both_series_when_first_item_has_impact() {
        let batch = vec![with_impact(6.0, 3.0), OptimizationResult::default()];
        let spec = bar_chart(&batch);
        assert_eq!(spec.data.datasets.len(), 2);
        assert_eq!(spec.data.datasets[0].data, Series::Values(vec![6.0, 0.0]));
        assert_eq!(spec.data.datasets[1].data, Series::Values(vec![3.0, 0.0]));
        assert_eq!(spec.data.labels, vec!["Sensor 1", "Sensor 2"]);
    }

    #[test]
    fn first_item_without_impact_suppresses_series_for_whole_batch() {
        let batch = vec![OptimizationResult::default(), with_impact(6.0, 3.0)];
        assert!(bar_chart(&batch).data.datasets.is_empty());
        assert!(line_chart(&batch).data.datasets.is_empty());
        // Labels are still produced for every item.
        assert_eq!(bar_chart(&batch).data.labels.len(), 2);
    }

    #[test]
    fn line_is_smoothed_and_filled() {
        let spec = line_chart(&[with_impact(2.0, 1.0)]);
        assert_eq!(spec.chart_type, "line");
        assert!(spec
            .data
            .datasets
            .iter()
            .all(|d| d.fill == Some(true) && d.tension == Some(0.4)));
    }

    #[test]
    fn comparison_substitutes_zero_instead_of_gating() {
        let batch = vec![OptimizationResult::default(), with_impact(6.0, 3.0)];
        let spec = comparison_chart(&batch);
        assert_eq!(spec.data.datasets.len(), 2);
        assert_eq!(spec.data.datasets[0].data, Series::Values(vec![0.0, 6.0]));
        assert!(spec.data.datasets.iter().all(|d| d.stack.is_none()));
    }
}
