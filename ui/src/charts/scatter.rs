//! Original vs optimized congestion correlation with a "no change" diagonal.

use api::OptimizationResult;

use super::{Axis, ChartData, ChartOptions, ChartSpec, Colors, Dataset, Point, Series};
use crate::core::classify::classify;

const REFERENCE_COLOR: &str = "rgba(148, 163, 184, 0.9)";

/// Diagonal from `(0,0)` to `(max,max)`, where `max` spans both original and
/// optimized values. Points below it improved.
pub fn reference_line(batch: &[OptimizationResult]) -> [Point; 2] {
    let max = batch
        .iter()
        .flat_map(|item| [item.original_congestion(), item.optimized_congestion()])
        .fold(0.0_f64, f64::max);
    [Point { x: 0.0, y: 0.0 }, Point { x: max, y: max }]
}

pub fn scatter_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let points = batch
        .iter()
        .map(|item| Point {
            x: item.original_congestion(),
            y: item.optimized_congestion(),
        })
        .collect();
    let colors = batch
        .iter()
        .map(|item| classify(item.improvement_pct()).color().to_string())
        .collect();

    let mut sensors = Dataset::new("Sensors", Series::Points(points), Colors::PerItem(colors));
    sensors.point_radius = Some(6.0);

    let mut reference = Dataset::new(
        "No change",
        Series::Points(reference_line(batch).to_vec()),
        Colors::Uniform("transparent".to_string()),
    )
    .with_border(REFERENCE_COLOR, 1.5);
    reference.kind = Some("line");
    reference.show_line = Some(true);
    reference.fill = Some(false);
    reference.point_radius = Some(0.0);
    reference.border_dash = Some(vec![6.0, 4.0]);

    ChartSpec {
        chart_type: "scatter",
        data: ChartData {
            labels: Vec::new(),
            datasets: vec![sensors, reference],
        },
        options: ChartOptions::titled("Original vs optimized congestion").with_scales(
            Axis::titled("Original congestion"),
            Axis::titled("Optimized congestion"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classify::ImprovementCategory;
    use api::Impact;

    fn with_impact(original: f64, optimized: f64) -> OptimizationResult {
        OptimizationResult {
            impact: Some(Impact::new(original, optimized)),
            ..OptimizationResult::default()
        }
    }

    #[test]
    fn reference_line_spans_the_largest_value() {
        let batch = vec![with_impact(4.0, 10.0), with_impact(8.0, 2.0), OptimizationResult::default()];
        let [start, end] = reference_line(&batch);
        assert_eq!(start, Point { x: 0.0, y: 0.0 });
        assert_eq!(end, Point { x: 10.0, y: 10.0 });
    }

    #[test]
    fn reference_line_collapses_for_empty_batch() {
        let [start, end] = reference_line(&[]);
        assert_eq!(start, end);
    }

    #[test]
    fn points_are_colored_by_improvement_category() {
        let spec = scatter_chart(&[with_impact(10.0, 2.0), with_impact(10.0, 12.0)]);
        assert!(spec.data.labels.is_empty());
        let sensors = &spec.data.datasets[0];
        assert_eq!(
            sensors.data,
            Series::Points(vec![Point { x: 10.0, y: 2.0 }, Point { x: 10.0, y: 12.0 }])
        );
        assert_eq!(
            sensors.background_color,
            Colors::PerItem(vec![
                ImprovementCategory::Excellent.color().to_string(),
                ImprovementCategory::NoImprovement.color().to_string(),
            ])
        );

        let reference = &spec.data.datasets[1];
        assert_eq!(reference.kind, Some("line"));
        assert_eq!(
            reference.data,
            Series::Points(vec![Point { x: 0.0, y: 0.0 }, Point { x: 12.0, y: 12.0 }])
        );
    }
}
