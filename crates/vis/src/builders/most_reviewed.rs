//! Most-reviewed books by genre: one horizontal bar per genre's top book.

use shelfstats_data::records::ReviewedBook;

use crate::builders::bars;
use crate::builders::horizontal_bar_options;
use crate::builders::single_series;
use crate::chart::ChartConfig;
use crate::chart::ChartTheme;
use crate::chart::axes::TickFormat;
use crate::chart::axes::grouped;
use crate::chart::color::CATEGORICAL;
use crate::chart::config::ChartKind;
use crate::chart::config::Paint;

const LABEL: &str = "Number of Reviews";

pub fn config(books: &[ReviewedBook]) -> ChartConfig {
    let theme = ChartTheme::shared();

    let labels = books
        .iter()
        .map(|book| format!("{} ({})", book.title, book.genre))
        .collect();
    let values: Vec<f64> = books.iter().map(|book| book.reviews).collect();

    let colors = (0..books.len()).map(|idx| CATEGORICAL[idx % CATEGORICAL.len()]);
    let background = Paint::PerPoint(colors.clone().collect());
    let border = Paint::PerPoint(colors.map(|color| color.opaque()).collect());

    let mut dataset = bars(LABEL, values, background, border);
    dataset.tooltips = books
        .iter()
        .map(|book| format!("{LABEL}: {}", grouped(book.reviews)))
        .collect();

    let mut options = horizontal_bar_options(theme);
    options.scales.y.ticks.auto_skip = Some(false);
    options.scales.x.ticks.formatter = Some(TickFormat::Thousands);
    options.scales.x.title = Some(theme.axis_title(LABEL));

    ChartConfig {
        kind: ChartKind::Bar,
        data: single_series(labels, dataset),
        options,
        plugins: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::color::BLUE;
    use crate::chart::color::RED;
    use crate::chart::config::IndexAxis;

    fn book(title: &str, genre: &str, reviews: f64) -> ReviewedBook {
        ReviewedBook {
            title: title.to_owned(),
            genre: genre.to_owned(),
            reviews,
        }
    }

    #[test]
    fn labels_combine_title_and_genre() {
        let config = config(&[book("It", "Horror", 41_000.0)]);

        assert_eq!(config.data.labels, vec!["It (Horror)"]);
        assert_eq!(config.options.index_axis, Some(IndexAxis::Y));
        assert!(config.options.plugins.legend.is_hidden());
    }

    #[test]
    fn palette_is_cycled_by_index() {
        let books: Vec<ReviewedBook> = (0..8)
            .map(|idx| book(&format!("Book {idx}"), "Genre", 100.0))
            .collect();

        let config = config(&books);
        let dataset = config.dataset().unwrap();

        let Paint::PerPoint(ref colors) = dataset.background_color else {
            panic!("expected one color per bar");
        };
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[6], RED);
        assert_eq!(colors[7], BLUE);
        assert_eq!(dataset.border_color, Paint::PerPoint(colors.iter().map(|c| c.opaque()).collect()));
    }

    #[test]
    fn reviews_axis_is_abbreviated() {
        let config = config(&[book("It", "Horror", 41_000.0)]);

        assert_eq!(config.options.scales.x.tick_format(), TickFormat::Thousands);
        assert_eq!(config.options.scales.y.ticks.auto_skip, Some(false));
        assert_eq!(config.dataset().unwrap().tooltips, vec!["Number of Reviews: 41,000"]);
    }
}
