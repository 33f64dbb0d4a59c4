//! Chart specifications handed to the charting library. They serialize to the
//! configuration object Chart.js expects.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ChartData {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Values(Vec<f64>),
    Points(Vec<Point>),
}

impl Series {
    pub fn len(&self) -> usize {
        match self {
            Self::Values(values) => values.len(),
            Self::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Colors {
    Uniform(String),
    PerItem(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Series,
    pub background_color: Colors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    /// Per-dataset override, used to overlay a line on a scatter plot.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<&'static str>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Series, background_color: Colors) -> Self {
        Self {
            label: label.into(),
            data,
            background_color,
            border_color: None,
            border_width: None,
            kind: None,
            fill: None,
            tension: None,
            show_line: None,
            point_radius: None,
            border_dash: None,
            stack: None,
        }
    }

    pub fn values(label: impl Into<String>, values: Vec<f64>, color: &str) -> Self {
        Self::new(label, Series::Values(values), Colors::Uniform(color.to_string()))
    }

    pub fn with_border(mut self, color: &str, width: f64) -> Self {
        self.border_color = Some(Colors::Uniform(color.to_string()));
        self.border_width = Some(width);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    #[serde(rename = "maintainAspectRatio")]
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

impl ChartOptions {
    pub fn titled(title: &str) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                title: Title {
                    display: true,
                    text: title.to_string(),
                },
                legend: Legend {
                    display: true,
                    position: "top",
                },
            },
            scales: None,
        }
    }

    pub fn with_scales(mut self, x: Axis, y: Axis) -> Self {
        self.scales = Some(Scales { x, y });
        self
    }

    pub fn with_legend_position(mut self, position: &'static str) -> Self {
        self.plugins.legend.position = position;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub title: Title,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub stacked: bool,
    pub begin_at_zero: bool,
    pub title: AxisTitle,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            stacked: false,
            begin_at_zero: true,
            title: AxisTitle {
                display: true,
                text: text.to_string(),
            },
        }
    }

    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}
