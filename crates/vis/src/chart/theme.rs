use std::sync::OnceLock;

use crate::chart::config::Animation;
use crate::chart::config::Axis;
use crate::chart::config::AxisTitle;
use crate::chart::config::Easing;
use crate::chart::config::Font;
use crate::chart::config::FontWeight;
use crate::chart::config::Grid;
use crate::chart::config::Legend;
use crate::chart::config::LegendLabels;
use crate::chart::config::Options;
use crate::chart::config::PluginOptions;
use crate::chart::config::Scales;
use crate::chart::config::Ticks;
use crate::chart::config::Tooltip;

pub const FONT_FAMILY: &str = "'Segoe UI', Tahoma, Geneva, Verdana, sans-serif";

const TEXT_COLOR: &str = "#333";
const TICK_COLOR: &str = "#555";
const GRID_COLOR: &str = "#e0e0e0";
const TOOLTIP_TEXT_COLOR: &str = "#fff";

/// The visual defaults every chart extends.
///
/// Charts never change the theme. [ChartTheme::options] hands out an owned
/// copy and each chart replaces the branches it customizes on that copy.
#[derive(Debug)]
pub struct ChartTheme {
    options: Options,
}

impl ChartTheme {
    pub fn new() -> ChartTheme {
        let options = Options {
            responsive: true,
            maintain_aspect_ratio: false,
            index_axis: None,
            plugins: PluginOptions {
                legend: Legend {
                    display: None,
                    labels: Some(LegendLabels {
                        color: TEXT_COLOR.to_owned(),
                        font: font(14, None),
                    }),
                },
                tooltip: Tooltip {
                    enabled: true,
                    background_color: "rgba(0,0,0,0.7)".to_owned(),
                    title_color: TOOLTIP_TEXT_COLOR.to_owned(),
                    body_color: TOOLTIP_TEXT_COLOR.to_owned(),
                    title_font: font(14, Some(FontWeight::Bold)),
                    body_font: font(12, None),
                    padding: 10,
                    corner_radius: 4,
                    display_colors: true,
                    border_color: "rgba(0,0,0,0.1)".to_owned(),
                    border_width: 1,
                },
            },
            scales: Scales {
                x: axis(Some(false)),
                y: axis(None),
            },
            animation: Animation {
                duration: 800,
                easing: Easing::EaseInOutQuart,
            },
        };

        Self { options }
    }

    /// The theme shared by all charts, created on first use.
    pub fn shared() -> &'static ChartTheme {
        static THEME: OnceLock<ChartTheme> = OnceLock::new();

        THEME.get_or_init(ChartTheme::new)
    }

    /// A copy of the base options for a chart to customize.
    pub fn options(&self) -> Options {
        self.options.clone()
    }

    pub fn base(&self) -> &Options {
        &self.options
    }

    /// A bold axis title in the theme colors.
    pub fn axis_title(&self, text: &str) -> AxisTitle {
        AxisTitle {
            display: true,
            text: text.to_owned(),
            color: TEXT_COLOR.to_owned(),
            font: Font {
                size: 14,
                weight: Some(FontWeight::Bold),
                family: None,
            },
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::new()
    }
}

fn font(size: u32, weight: Option<FontWeight>) -> Font {
    Font {
        size,
        weight,
        family: Some(FONT_FAMILY.to_owned()),
    }
}

// Only the y axis draws its grid lines over the chart area.
fn axis(draw_on_chart_area: Option<bool>) -> Axis {
    Axis {
        kind: None,
        position: None,
        min: None,
        max: None,
        ticks: Ticks {
            color: TICK_COLOR.to_owned(),
            font: font(12, None),
            auto_skip: None,
            formatter: None,
        },
        grid: Grid {
            color: GRID_COLOR.to_owned(),
            draw_on_chart_area,
        },
        title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_theme_is_created_once() {
        assert!(std::ptr::eq(ChartTheme::shared(), ChartTheme::shared()));
    }

    #[test]
    fn customizing_a_copy_leaves_the_theme_untouched() {
        let theme = ChartTheme::new();

        let mut options = theme.options();
        options.plugins.legend = Legend::hidden();
        options.scales.x.min = Some(4.0);

        assert_eq!(theme.base(), &ChartTheme::new().options());
        assert!(!theme.base().plugins.legend.is_hidden());
        assert_eq!(theme.base().scales.x.min, None);
    }

    #[test]
    fn only_y_grid_is_drawn_on_chart_area() {
        let options = ChartTheme::new().options();

        assert_eq!(options.scales.x.grid.draw_on_chart_area, Some(false));
        assert_eq!(options.scales.y.grid.draw_on_chart_area, None);
    }

    #[test]
    fn serializes_renderer_option_names() {
        let json = serde_json::to_value(ChartTheme::new().options()).unwrap();

        assert_eq!(json["maintainAspectRatio"], false);
        assert_eq!(json["plugins"]["tooltip"]["backgroundColor"], "rgba(0,0,0,0.7)");
        assert_eq!(json["scales"]["x"]["grid"]["drawOnChartArea"], false);
        assert_eq!(json["animation"]["easing"], "easeInOutQuart");
        assert!(json.get("indexAxis").is_none());
    }
}
