//! Hidden gems: highly rated books with few ratings, drawn as a lollipop chart.

use shelfstats_data::records::HiddenGem;

use crate::chart::ChartConfig;
use crate::chart::ChartTheme;
use crate::chart::axes::TickFormat;
use crate::chart::axes::floor_above;
use crate::chart::axes::grouped;
use crate::chart::axes::number;
use crate::chart::color::PURPLE;
use crate::chart::config::ChartKind;
use crate::chart::config::Data;
use crate::chart::config::DataPoints;
use crate::chart::config::Dataset;
use crate::chart::config::Legend;
use crate::chart::config::Paint;
use crate::chart::config::Plugin;
use crate::chart::config::Point;
use crate::chart::config::ScaleKind;
use crate::chart::lollipop::LollipopStyle;

pub fn config(gems: &[HiddenGem]) -> ChartConfig {
    let theme = ChartTheme::shared();

    let points: Vec<Point> = gems
        .iter()
        .map(|gem| Point {
            x: gem.total_ratings,
            y: gem.rating,
            label: Some(gem.title.clone()),
        })
        .collect();

    let tooltips = gems
        .iter()
        .map(|gem| {
            format!(
                "{}: Rating {}, Reviews {}",
                gem.title,
                number(gem.rating),
                grouped(gem.total_ratings)
            )
        })
        .collect();

    let mut options = theme.options();
    options.plugins.legend = Legend::hidden();

    let xaxis = &mut options.scales.x;
    xaxis.kind = Some(ScaleKind::Linear);
    xaxis.title = Some(theme.axis_title("Total Number of Ratings (Visibility)"));
    xaxis.ticks.formatter = Some(TickFormat::Grouped);

    let yaxis = &mut options.scales.y;
    yaxis.title = Some(theme.axis_title("Average Rating"));
    yaxis.min = Some(floor_above(points.iter().map(|p| p.y), 4.0, 3.0));
    yaxis.max = Some(5.0);

    let dataset = Dataset {
        label: String::from("Hidden Gem"),
        data: DataPoints::Points(points),
        background_color: Paint::Single(PURPLE),
        border_color: Paint::Single(PURPLE.opaque()),
        border_width: 1,
        point_radius: Some(6),
        point_hover_radius: Some(10),
        tooltips,
    };

    let lollipop = LollipopStyle {
        line_width: 2.0,
        fallback_color: PURPLE.with_alpha(0.5),
    };

    ChartConfig {
        kind: ChartKind::Scatter,
        data: Data {
            labels: Vec::new(),
            datasets: vec![dataset],
        },
        options,
        plugins: vec![Plugin::Lollipop(lollipop)],
    }
}
