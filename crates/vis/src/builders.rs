//! One builder per dashboard chart.
//!
//! Each builder turns the records of one summary into a [ChartConfig] on top
//! of the shared [ChartTheme]. [Visualization::build] loads the summary and
//! binds the config to the chart's canvas.
//!
//! [ChartConfig]: crate::chart::ChartConfig
//! [ChartTheme]: crate::chart::ChartTheme

pub mod genre_popularity;
pub mod hidden_gems;
pub mod most_rated;
pub mod most_reviewed;
pub mod top_rated;

use shelfstats_data::Fetch;
use shelfstats_data::records::GenreRating;
use shelfstats_data::records::HiddenGem;
use shelfstats_data::records::MostRatedBook;
use shelfstats_data::records::Record;
use shelfstats_data::records::ReviewedBook;
use shelfstats_data::records::TopRatedBook;
use tracing::debug;

use crate::chart::ChartTheme;
use crate::chart::color::Rgba;
use crate::chart::config::Data;
use crate::chart::config::DataPoints;
use crate::chart::config::Dataset;
use crate::chart::config::IndexAxis;
use crate::chart::config::Legend;
use crate::chart::config::Options;
use crate::chart::config::Paint;
use crate::layout::Chart;

/// The charts of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visualization {
    MostReviewed,
    TopRated,
    MostRated,
    GenrePopularity,
    HiddenGems,
}

impl Visualization {
    pub const ALL: [Visualization; 5] = [
        Visualization::MostReviewed,
        Visualization::TopRated,
        Visualization::MostRated,
        Visualization::GenrePopularity,
        Visualization::HiddenGems,
    ];

    /// The id of the canvas the chart is drawn on.
    pub fn canvas_id(self) -> &'static str {
        match self {
            Visualization::MostReviewed => "mostReviewedChart",
            Visualization::TopRated => "topRatedChart",
            Visualization::MostRated => "mostRatedChart",
            Visualization::GenrePopularity => "genrePopularityChart",
            Visualization::HiddenGems => "hiddenGemsChart",
        }
    }

    /// The summary file the chart is built from.
    pub fn file_name(self) -> &'static str {
        match self {
            Visualization::MostReviewed => ReviewedBook::FILE_NAME,
            Visualization::TopRated => TopRatedBook::FILE_NAME,
            Visualization::MostRated => MostRatedBook::FILE_NAME,
            Visualization::GenrePopularity => GenreRating::FILE_NAME,
            Visualization::HiddenGems => HiddenGem::FILE_NAME,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Visualization::MostReviewed => "Most-Reviewed Books by Genre",
            Visualization::TopRated => "Top-Rated Books",
            Visualization::MostRated => "Most-Rated Books",
            Visualization::GenrePopularity => "Genre Popularity vs. Ratings",
            Visualization::HiddenGems => "Hidden Gems",
        }
    }

    /// Loads the chart's summary and builds the chart.
    ///
    /// Returns `None` when the summary could not be loaded; the loader has
    /// already logged why.
    pub fn build<F>(self, loader: &F) -> Option<Chart>
    where
        F: Fetch,
    {
        let config = match self {
            Visualization::MostReviewed => most_reviewed::config(&loader.fetch::<ReviewedBook>()?),
            Visualization::TopRated => top_rated::config(&loader.fetch::<TopRatedBook>()?),
            Visualization::MostRated => most_rated::config(&loader.fetch::<MostRatedBook>()?),
            Visualization::GenrePopularity => genre_popularity::config(&loader.fetch::<GenreRating>()?),
            Visualization::HiddenGems => hidden_gems::config(&loader.fetch::<HiddenGem>()?),
        };

        debug!(
            canvas = self.canvas_id(),
            points = config.dataset().map_or(0, |d| d.len()),
            "built chart"
        );

        Some(Chart::new(self.canvas_id(), config))
    }
}

/// A single-series dataset with one value per label.
fn bars(label: &str, values: Vec<f64>, color: Paint, border: Paint) -> Dataset {
    Dataset {
        label: label.to_owned(),
        data: DataPoints::Values(values),
        background_color: color,
        border_color: border,
        border_width: 1,
        point_radius: None,
        point_hover_radius: None,
        tooltips: Vec::new(),
    }
}

fn single_color(color: Rgba) -> (Paint, Paint) {
    (Paint::Single(color), Paint::Single(color.opaque()))
}

fn single_series(labels: Vec<String>, dataset: Dataset) -> Data {
    Data {
        labels,
        datasets: vec![dataset],
    }
}

/// The theme options of a horizontal bar chart without a legend.
fn horizontal_bar_options(theme: &ChartTheme) -> Options {
    let mut options = theme.options();
    options.index_axis = Some(IndexAxis::Y);
    options.plugins.legend = Legend::hidden();
    options
}
