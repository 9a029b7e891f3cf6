use serde::Serialize;

use crate::chart::axes::TickFormat;
use crate::chart::color::Rgba;
use crate::chart::lollipop::LollipopStyle;

/// The declarative description of a chart the renderer consumes.
#[derive(Serialize, Debug, Clone)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: Data,
    pub options: Options,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<Plugin>,
}

impl ChartConfig {
    /// The only dataset of a single-series chart.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    /// The entries of the first dataset written as text, using the axes' tick formats.
    pub fn rows(&self) -> Vec<Row> {
        let Some(dataset) = self.dataset() else {
            return Vec::new();
        };
        let scales = &self.options.scales;

        match dataset.data {
            DataPoints::Values(ref values) => {
                let value_axis = match self.options.index_axis {
                    Some(IndexAxis::Y) => &scales.x,
                    _ => &scales.y,
                };
                let format = value_axis.tick_format();

                values
                    .iter()
                    .enumerate()
                    .map(|(idx, value)| Row {
                        label: self.data.labels.get(idx).cloned().unwrap_or_default(),
                        value: format.format(*value),
                    })
                    .collect()
            }
            DataPoints::Points(ref points) => {
                let (xformat, yformat) = (scales.x.tick_format(), scales.y.tick_format());

                points
                    .iter()
                    .map(|point| Row {
                        label: point.label.clone().unwrap_or_default(),
                        value: format!("{}, {}", xformat.format(point.x), yformat.format(point.y)),
                    })
                    .collect()
            }
        }
    }
}

/// A chart entry written as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Scatter,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct Data {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: DataPoints,
    pub background_color: Paint,
    pub border_color: Paint,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    /// Tooltip label of every data point, in data order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltips: Vec<String>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self.data {
            DataPoints::Values(ref values) => values.len(),
            DataPoints::Points(ref points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DataPoints {
    /// One value per label.
    Values(Vec<f64>),
    /// Free `{x, y}` points.
    Points(Vec<Point>),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Paint {
    Single(Rgba),
    PerPoint(Vec<Rgba>),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<IndexAxis>,
    pub plugins: PluginOptions,
    pub scales: Scales,
    pub animation: Animation,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IndexAxis {
    X,
    Y,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PluginOptions {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabels>,
}

impl Legend {
    pub fn hidden() -> Legend {
        Self {
            display: Some(false),
            labels: None,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.display == Some(false)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LegendLabels {
    pub color: String,
    pub font: Font,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub enabled: bool,
    pub background_color: String,
    pub title_color: String,
    pub body_color: String,
    pub title_font: Font,
    pub body_font: Font,
    pub padding: u32,
    pub corner_radius: u32,
    pub display_colors: bool,
    pub border_color: String,
    pub border_width: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Bold,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ScaleKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub ticks: Ticks,
    pub grid: Grid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
}

impl Axis {
    /// The formatter of the tick labels, [TickFormat::Plain] when none is set.
    pub fn tick_format(&self) -> TickFormat {
        self.ticks.formatter.unwrap_or_default()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Bottom,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub color: String,
    pub font: Font,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_skip: Option<bool>,
    /// Replaced by a tick callback in the page runtime.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<TickFormat>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub color: String,
    pub font: Font,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Animation {
    pub duration: u32,
    pub easing: Easing,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    #[serde(rename = "easeInOutQuart")]
    EaseInOutQuart,
}

/// A plugin attached to a single chart instance.
///
/// The page runtime turns each variant into a renderer plugin with the same id.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "id")]
pub enum Plugin {
    #[serde(rename = "lollipopLine")]
    Lollipop(LollipopStyle),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartTheme;
    use crate::chart::color::RED;

    fn dataset(data: DataPoints) -> Dataset {
        Dataset {
            label: String::from("test"),
            data,
            background_color: Paint::Single(RED),
            border_color: Paint::Single(RED.opaque()),
            border_width: 1,
            point_radius: None,
            point_hover_radius: None,
            tooltips: Vec::new(),
        }
    }

    #[test]
    fn rows_of_horizontal_bars_use_x_format() {
        let mut options = ChartTheme::new().options();
        options.index_axis = Some(IndexAxis::Y);
        options.scales.x.ticks.formatter = Some(TickFormat::Millions);

        let config = ChartConfig {
            kind: ChartKind::Bar,
            data: Data {
                labels: vec![String::from("Twilight"), String::from("Dune")],
                datasets: vec![dataset(DataPoints::Values(vec![2_500_000.0, 1500.0]))],
            },
            options,
            plugins: Vec::new(),
        };

        assert_eq!(
            config.rows(),
            vec![
                Row { label: String::from("Twilight"), value: String::from("2.5M") },
                Row { label: String::from("Dune"), value: String::from("1.5k") },
            ]
        );
    }

    #[test]
    fn rows_of_points_use_both_formats() {
        let mut options = ChartTheme::new().options();
        options.scales.x.ticks.formatter = Some(TickFormat::Grouped);

        let config = ChartConfig {
            kind: ChartKind::Scatter,
            data: Data {
                labels: Vec::new(),
                datasets: vec![dataset(DataPoints::Points(vec![Point {
                    x: 1234.0,
                    y: 4.5,
                    label: Some(String::from("Piranesi")),
                }]))],
            },
            options,
            plugins: Vec::new(),
        };

        assert_eq!(
            config.rows(),
            vec![Row { label: String::from("Piranesi"), value: String::from("1,234, 4.5") }]
        );
    }

    #[test]
    fn points_serialize_without_missing_labels() {
        let point = Point { x: 1.0, y: 2.5, label: None };

        assert_eq!(serde_json::to_string(&point).unwrap(), r#"{"x":1.0,"y":2.5}"#);
    }
}
