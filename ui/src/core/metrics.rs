//! Summary statistics behind the four metric cards.

use api::{improvement_pct, OptimizationResult};

use crate::core::format;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MetricsSummary {
    pub avg_original_congestion: f64,
    pub avg_optimized_congestion: f64,
    /// Reduction of the averages, not the average of per-item reductions.
    pub avg_reduction_pct: f64,
    pub best_improvement_pct: f64,
    pub avg_green_time_sec: f64,
    pub optimized_count: usize,
    pub total_count: usize,
}

impl MetricsSummary {
    /// `None` for an empty batch.
    pub fn from_batch(batch: &[OptimizationResult]) -> Option<Self> {
        let total_count = batch.len();
        if total_count == 0 {
            return None;
        }

        let mut original_sum = 0.0;
        let mut optimized_sum = 0.0;
        let mut green_sum = 0.0;
        let mut best_improvement_pct = f64::NEG_INFINITY;
        let mut optimized_count = 0usize;

        for item in batch {
            original_sum += item.original_congestion();
            optimized_sum += item.optimized_congestion();
            green_sum += item.green_time_sec();

            let improvement = item.improvement_pct();
            best_improvement_pct = best_improvement_pct.max(improvement);
            if improvement > 0.0 {
                optimized_count += 1;
            }
        }

        let n = total_count as f64;
        let avg_original_congestion = original_sum / n;
        let avg_optimized_congestion = optimized_sum / n;

        Some(Self {
            avg_original_congestion,
            avg_optimized_congestion,
            avg_reduction_pct: improvement_pct(avg_original_congestion, avg_optimized_congestion),
            best_improvement_pct,
            avg_green_time_sec: green_sum / n,
            optimized_count,
            total_count,
        })
    }
}

/// One rendered summary card.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub meta: String,
}

/// Card values as last computed. An empty batch leaves them untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetricCards {
    summary: Option<MetricsSummary>,
}

impl MetricCards {
    /// Recompute from `batch`; returns whether the cards changed.
    pub fn apply(&mut self, batch: &[OptimizationResult]) -> bool {
        match MetricsSummary::from_batch(batch) {
            Some(summary) => {
                self.summary = Some(summary);
                true
            }
            None => false,
        }
    }

    pub fn summary(&self) -> Option<&MetricsSummary> {
        self.summary.as_ref()
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        let Some(summary) = self.summary else {
            return Vec::new();
        };

        vec![
            MetricCard {
                label: "Avg congestion reduction",
                value: format::format_percent(summary.avg_reduction_pct),
                meta: format!(
                    "{} → {}",
                    format::format_number(summary.avg_original_congestion, 2),
                    format::format_number(summary.avg_optimized_congestion, 2)
                ),
            },
            MetricCard {
                label: "Best improvement",
                value: format::format_percent(summary.best_improvement_pct),
                meta: "Largest single-sensor reduction".to_string(),
            },
            MetricCard {
                label: "Avg green time",
                value: format::format_seconds(summary.avg_green_time_sec),
                meta: "Mean optimized green phase".to_string(),
            },
            MetricCard {
                label: "Optimized sensors",
                value: format::format_ratio(summary.optimized_count, summary.total_count),
                meta: "Sensors with reduced congestion".to_string(),
            },
        ]
    }
}
