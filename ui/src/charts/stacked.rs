//! Green/red split of the optimized signal cycle per sensor.

use api::OptimizationResult;

use super::{sensor_labels, Axis, ChartData, ChartOptions, ChartSpec, Dataset, GREEN_TIME_COLOR, RED_TIME_COLOR};

pub fn stacked_bar_chart(batch: &[OptimizationResult]) -> ChartSpec {
    let (green, red): (Vec<f64>, Vec<f64>) = batch
        .iter()
        .map(|item| (item.green_time_sec(), item.red_time_sec()))
        .unzip();

    let mut green = Dataset::values("Green time (s)", green, GREEN_TIME_COLOR);
    green.stack = Some("cycle");
    let mut red = Dataset::values("Red time (s)", red, RED_TIME_COLOR);
    red.stack = Some("cycle");

    ChartSpec {
        chart_type: "bar",
        data: ChartData {
            labels: sensor_labels(batch),
            datasets: vec![green, red],
        },
        options: ChartOptions::titled("Optimized signal timing").with_scales(
            Axis::titled("Sensor").stacked(),
            Axis::titled("Seconds").stacked(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Series;
    use api::SignalTiming;

    #[test]
    fn missing_timing_counts_as_zero() {
        let batch = vec![
            OptimizationResult {
                optimization: Some(SignalTiming {
                    green_time_sec: 42.0,
                    red_time_sec: 48.0,
                }),
                ..OptimizationResult::default()
            },
            OptimizationResult::default(),
        ];
        let spec = stacked_bar_chart(&batch);
        assert_eq!(spec.data.datasets[0].data, Series::Values(vec![42.0, 0.0]));
        assert_eq!(spec.data.datasets[1].data, Series::Values(vec![48.0, 0.0]));
        let scales = spec.options.scales.expect("stacked chart has scales");
        assert!(scales.x.stacked && scales.y.stacked);
    }
}
