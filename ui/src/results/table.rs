//! Tabular view of a result batch: display rows, column schema and sorting.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use api::{Impact, OptimizationResult, SignalTiming};
use serde_json::Value;

use crate::core::format;

/// Columns every row has, in display order.
const SCHEMA_COLUMNS: [&str; 4] = ["traffic_light_id", "cluster_sensors", "optimization", "impact"];

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => format::format_score(*value),
            Self::Empty => String::new(),
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Empty),
            Value::String(s) => Self::Text(s.clone()),
            Value::Bool(b) => Self::Text(b.to_string()),
            other => Self::Text(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: String,
    pub title: String,
}

impl Column {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            title: column_title(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow {
    cells: BTreeMap<String, Cell>,
}

impl TableRow {
    pub fn from_result(item: &OptimizationResult) -> Self {
        let mut cells = BTreeMap::new();
        cells.insert(
            "traffic_light_id".to_string(),
            Cell::Text(item.traffic_light_id.clone()),
        );
        cells.insert(
            "cluster_sensors".to_string(),
            match &item.cluster_sensors {
                Some(sensors) => Cell::Text(sensors.join(", ")),
                None => Cell::Empty,
            },
        );
        cells.insert(
            "optimization".to_string(),
            Cell::Text(describe_timing(item.optimization.as_ref())),
        );
        cells.insert(
            "impact".to_string(),
            Cell::Text(describe_impact(item.impact.as_ref())),
        );
        for (key, value) in &item.extra {
            cells.insert(key.clone(), Cell::from_value(value));
        }
        Self { cells }
    }

    /// Cell for `key`; keys this row lacks read as empty.
    pub fn cell(&self, key: &str) -> &Cell {
        self.cells.get(key).unwrap_or(&Cell::Empty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsTable {
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

impl ResultsTable {
    /// Columns come from the result schema plus every pass-through key seen
    /// anywhere in the batch, so row order never changes the column set.
    pub fn from_batch(batch: &[OptimizationResult]) -> Self {
        let has_clusters = batch.iter().any(|item| item.cluster_sensors.is_some());
        let mut columns: Vec<Column> = SCHEMA_COLUMNS
            .iter()
            .filter(|key| **key != "cluster_sensors" || has_clusters)
            .map(|key| Column::new(key))
            .collect();

        let extra_keys: BTreeSet<&str> = batch
            .iter()
            .flat_map(|item| item.extra.keys().map(String::as_str))
            .filter(|key| !SCHEMA_COLUMNS.contains(key))
            .collect();
        columns.extend(extra_keys.into_iter().map(Column::new));

        Self {
            columns,
            rows: batch.iter().map(TableRow::from_result).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Stable sort on one column. Numbers compare numerically, text lexically,
    /// numbers before text, and empty cells always last.
    pub fn sort_by(&mut self, key: &str, direction: SortDirection) {
        self.rows.sort_by(|a, b| {
            let (left, right) = (a.cell(key), b.cell(key));
            match (left, right) {
                (Cell::Empty, Cell::Empty) => Ordering::Equal,
                (Cell::Empty, _) => Ordering::Greater,
                (_, Cell::Empty) => Ordering::Less,
                _ => {
                    let ordering = compare_cells(left, right);
                    match direction {
                        SortDirection::Ascending => ordering,
                        SortDirection::Descending => ordering.reverse(),
                    }
                }
            }
        });
    }
}

fn compare_cells(left: &Cell, right: &Cell) -> Ordering {
    match (left, right) {
        (Cell::Number(a), Cell::Number(b)) => a.total_cmp(b),
        (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
        (Cell::Number(_), Cell::Text(_)) => Ordering::Less,
        (Cell::Text(_), Cell::Number(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// `traffic_light_id` → `Traffic light id`.
pub fn column_title(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn describe_timing(timing: Option<&SignalTiming>) -> String {
    match timing {
        Some(timing) => format!(
            "Green: {}, Red: {}",
            format::format_seconds(timing.green_time_sec),
            format::format_seconds(timing.red_time_sec)
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn describe_impact(impact: Option<&Impact>) -> String {
    match impact {
        Some(impact) => format!(
            "Original: {} ({}), Optimized: {} ({}), Improvement: {}",
            format::format_score(impact.original_congestion),
            impact.original_category.as_str(),
            format::format_score(impact.optimized_congestion),
            impact.optimized_category.as_str(),
            format::format_percent(impact.improvement_pct())
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}
