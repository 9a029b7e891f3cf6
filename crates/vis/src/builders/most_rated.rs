//! Most-rated books: horizontal bars of the total number of ratings.

use shelfstats_data::records::MostRatedBook;

use crate::builders::bars;
use crate::builders::horizontal_bar_options;
use crate::builders::single_color;
use crate::builders::single_series;
use crate::chart::ChartConfig;
use crate::chart::ChartTheme;
use crate::chart::axes::TickFormat;
use crate::chart::color::ORANGE;
use crate::chart::config::ChartKind;

pub fn config(books: &[MostRatedBook]) -> ChartConfig {
    let theme = ChartTheme::shared();

    let labels = books.iter().map(|book| book.title.clone()).collect();
    let values = books.iter().map(|book| book.total_ratings).collect();

    let mut options = horizontal_bar_options(theme);
    options.scales.x.title = Some(theme.axis_title("Total Number of Ratings"));
    options.scales.x.ticks.formatter = Some(TickFormat::Millions);

    let (background, border) = single_color(ORANGE);

    ChartConfig {
        kind: ChartKind::Bar,
        data: single_series(labels, bars("Total Ratings", values, background, border)),
        options,
        plugins: Vec::new(),
    }
}
