//! Top-rated books: horizontal bars of the average rating.

use shelfstats_data::records::TopRatedBook;

use crate::builders::bars;
use crate::builders::horizontal_bar_options;
use crate::builders::single_color;
use crate::builders::single_series;
use crate::chart::ChartConfig;
use crate::chart::ChartTheme;
use crate::chart::axes::floor_above;
use crate::chart::color::TEAL;
use crate::chart::config::ChartKind;

const LABEL: &str = "Average Rating";

pub fn config(books: &[TopRatedBook]) -> ChartConfig {
    let theme = ChartTheme::shared();

    let labels = books.iter().map(|book| book.title.clone()).collect();
    let values: Vec<f64> = books.iter().map(|book| book.rating).collect();

    let mut options = horizontal_bar_options(theme);
    options.scales.x.title = Some(theme.axis_title("Average Rating (out of 5)"));
    options.scales.x.min = Some(floor_above(values.iter().copied(), 4.0, 0.0));
    options.scales.x.max = Some(5.0);

    let (background, border) = single_color(TEAL);

    ChartConfig {
        kind: ChartKind::Bar,
        data: single_series(labels, bars(LABEL, values, background, border)),
        options,
        plugins: Vec::new(),
    }
}
