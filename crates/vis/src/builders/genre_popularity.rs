//! Genre popularity vs. ratings: one scatter point per genre.

use shelfstats_data::records::GenreRating;

use crate::chart::ChartConfig;
use crate::chart::ChartTheme;
use crate::chart::axes::TickFormat;
use crate::chart::axes::floor_above;
use crate::chart::axes::grouped;
use crate::chart::axes::number;
use crate::chart::color::ColorMap;
use crate::chart::color::GENRES;
use crate::chart::config::ChartKind;
use crate::chart::config::Data;
use crate::chart::config::DataPoints;
use crate::chart::config::Dataset;
use crate::chart::config::Legend;
use crate::chart::config::Paint;
use crate::chart::config::Point;
use crate::chart::config::Position;
use crate::chart::config::ScaleKind;

pub fn config(genres: &[GenreRating]) -> ChartConfig {
    let theme = ChartTheme::shared();
    let colors = ColorMap::new(&GENRES, genres.iter().map(|g| g.genre.as_str()));

    let points: Vec<Point> = genres
        .iter()
        .map(|g| Point {
            x: g.popularity,
            y: g.avg_rating,
            label: Some(g.genre.clone()),
        })
        .collect();

    let background: Vec<_> = genres.iter().map(|g| colors.get(&g.genre)).collect();
    let border = background.iter().map(|color| color.opaque()).collect();
    let tooltips = genres
        .iter()
        .map(|g| {
            format!(
                "{}: Pop. {}, Rating {}",
                g.genre,
                grouped(g.popularity),
                number(g.avg_rating)
            )
        })
        .collect();

    let mut options = theme.options();
    options.plugins.legend = Legend::hidden();

    let xaxis = &mut options.scales.x;
    xaxis.kind = Some(ScaleKind::Linear);
    xaxis.position = Some(Position::Bottom);
    xaxis.title = Some(theme.axis_title("Popularity (e.g., Total Ratings in Genre)"));
    xaxis.ticks.formatter = Some(TickFormat::Thousands);

    let yaxis = &mut options.scales.y;
    yaxis.title = Some(theme.axis_title("Average Rating"));
    yaxis.min = Some(floor_above(points.iter().map(|p| p.y), 3.0, 0.0));
    yaxis.max = Some(5.0);

    let dataset = Dataset {
        label: String::from("Genre"),
        data: DataPoints::Points(points),
        background_color: Paint::PerPoint(background),
        border_color: Paint::PerPoint(border),
        border_width: 1,
        point_radius: Some(8),
        point_hover_radius: Some(12),
        tooltips,
    };

    ChartConfig {
        kind: ChartKind::Scatter,
        data: Data {
            labels: Vec::new(),
            datasets: vec![dataset],
        },
        options,
        plugins: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::color::BLUE;
    use crate::chart::color::RED;

    fn genre(name: &str, popularity: f64, avg_rating: f64) -> GenreRating {
        GenreRating {
            genre: name.to_owned(),
            popularity,
            avg_rating,
        }
    }

    #[test]
    fn one_point_per_genre() {
        let config = config(&[genre("Fantasy", 52_000.0, 4.1), genre("Poetry", 900.0, 4.3)]);
        let dataset = config.dataset().unwrap();

        assert_eq!(config.kind, ChartKind::Scatter);
        assert!(config.data.labels.is_empty());
        assert_eq!(
            dataset.data,
            DataPoints::Points(vec![
                Point { x: 52_000.0, y: 4.1, label: Some(String::from("Fantasy")) },
                Point { x: 900.0, y: 4.3, label: Some(String::from("Poetry")) },
            ])
        );
        assert_eq!(dataset.point_radius, Some(8));
    }

    #[test]
    fn colors_follow_first_seen_genre() {
        let config = config(&[
            genre("Fantasy", 1.0, 4.0),
            genre("Poetry", 2.0, 4.0),
            genre("Fantasy", 3.0, 4.0),
        ]);
        let dataset = config.dataset().unwrap();

        assert_eq!(dataset.background_color, Paint::PerPoint(vec![RED, BLUE, RED]));
        assert_eq!(
            dataset.border_color,
            Paint::PerPoint(vec![RED.opaque(), BLUE.opaque(), RED.opaque()])
        );
    }

    #[test]
    fn rating_floor_is_three_when_every_genre_is_above() {
        let above = config(&[genre("Fantasy", 1.0, 4.1), genre("Romance", 1.0, 3.2)]);
        let at = config(&[genre("Fantasy", 1.0, 4.1), genre("Romance", 1.0, 3.0)]);

        assert_eq!(above.options.scales.y.min, Some(3.0));
        assert_eq!(at.options.scales.y.min, Some(0.0));
        assert_eq!(at.options.scales.y.max, Some(5.0));
    }

    #[test]
    fn tooltips_describe_genre() {
        let config = config(&[genre("Fantasy", 52_000.0, 4.1)]);

        assert_eq!(
            config.dataset().unwrap().tooltips,
            vec!["Fantasy: Pop. 52,000, Rating 4.1"]
        );
        assert_eq!(config.options.scales.x.tick_format(), TickFormat::Thousands);
    }
}
