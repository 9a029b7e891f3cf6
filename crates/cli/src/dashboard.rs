use std::collections::HashMap;
use std::thread;

use shelfstats_data::Fetch;
use shelfstats_vis::builders::Visualization;
use shelfstats_vis::layout::Chart;
use shelfstats_vis::layout::ElementKind;
use shelfstats_vis::layout::NavBar;
use shelfstats_vis::layout::Section;
use shelfstats_vis::layout::View;
use tracing::debug;
use tracing::error;

struct SectionSpec {
    id: &'static str,
    nav_text: &'static str,
    heading: &'static str,
    description: &'static str,
    charts: &'static [Visualization],
}

const SECTIONS: [SectionSpec; 4] = [
    SectionSpec {
        id: "most-reviewed",
        nav_text: "Most Reviewed",
        heading: "Most-Reviewed Books by Genre",
        description: "The book with the most reviews in each genre.",
        charts: &[Visualization::MostReviewed],
    },
    SectionSpec {
        id: "top-vs-most-rated",
        nav_text: "Top vs. Most Rated",
        heading: "Top-Rated vs. Most-Rated Books",
        description: "The highest average ratings next to the largest numbers of ratings.",
        charts: &[Visualization::TopRated, Visualization::MostRated],
    },
    SectionSpec {
        id: "genre-popularity",
        nav_text: "Genre Popularity",
        heading: "Genre Popularity vs. Ratings",
        description: "How the popularity of a genre relates to its average rating.",
        charts: &[Visualization::GenrePopularity],
    },
    SectionSpec {
        id: "hidden-gems",
        nav_text: "Hidden Gems",
        heading: "Hidden Gems: High Rating, Low Visibility",
        description: "Highly rated books that few readers have rated.",
        charts: &[Visualization::HiddenGems],
    },
];

/// Builds every chart concurrently and waits for all of them.
///
/// Charts whose summary could not be loaded are missing from the result.
pub(crate) fn load_charts<F>(loader: &F) -> HashMap<Visualization, Chart>
where
    F: Fetch,
{
    thread::scope(|scope| {
        let tasks: Vec<_> = Visualization::ALL
            .into_iter()
            .map(|vis| (vis, scope.spawn(move || vis.build(loader))))
            .collect();

        tasks
            .into_iter()
            .filter_map(|(vis, task)| match task.join() {
                Ok(chart) => chart.map(|chart| (vis, chart)),
                Err(_) => {
                    error!(canvas = vis.canvas_id(), "building the chart panicked");
                    None
                }
            })
            .collect()
    })
}

/// Lays out the dashboard page with the charts that could be built.
pub(crate) fn build<F>(loader: &F, title: &str) -> View
where
    F: Fetch,
{
    let mut charts = load_charts(loader);
    let mut nav = NavBar::new();
    let mut view = View::new(title);

    for spec in &SECTIONS {
        nav = nav.link(spec.id, spec.nav_text);

        let mut section = Section::new(spec.id, spec.heading).describe(spec.description);
        for vis in spec.charts {
            match charts.remove(vis) {
                Some(chart) => section = section.add(ElementKind::Chart(chart)),
                None => debug!(canvas = vis.canvas_id(), "chart unavailable, leaving it out"),
            }
        }

        view = view.add(ElementKind::Section(section));
    }

    view.nav(nav)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io;
    use std::path::PathBuf;

    use shelfstats_data::error::DataError;
    use shelfstats_data::error::Result;
    use shelfstats_vis::layout::Element;

    use super::*;

    struct StaticLoader {
        files: HashMap<&'static str, &'static str>,
    }

    impl Fetch for StaticLoader {
        fn load(&self, name: &str) -> Result<Vec<u8>> {
            match self.files.get(name) {
                Some(content) => Ok(content.as_bytes().to_vec()),
                None => Err(DataError::Io {
                    path: PathBuf::from(name),
                    error: io::Error::from(io::ErrorKind::NotFound),
                }),
            }
        }
    }

    fn loader() -> StaticLoader {
        let files = HashMap::from([
            (
                "most_reviewed_by_genre.json",
                r#"[{"title": "It", "genre": "Horror", "reviews": 41000}]"#,
            ),
            (
                "top_rated_books.json",
                r#"[{"title": "A", "rating": 4.9}, {"title": "B", "rating": 4.2}]"#,
            ),
            (
                "most_rated_books.json",
                r#"[{"title": "Twilight", "totalratings": 5200000}]"#,
            ),
            (
                "genre_vs_rating.json",
                r#"[{"genre": "Fantasy", "popularity": 52000, "avg_rating": 4.1}]"#,
            ),
            (
                "hidden_gems.json",
                r#"[{"title": "Piranesi", "rating": 4.4, "totalratings": 1200}]"#,
            ),
        ]);

        StaticLoader { files }
    }

    fn canvas_ids(view: &View) -> Vec<&'static str> {
        view.charts().iter().map(|chart| chart.canvas_id()).collect()
    }

    #[test]
    fn all_charts_are_built_before_returning() {
        let charts = load_charts(&loader());

        assert_eq!(charts.len(), 5);
    }

    #[test]
    fn charts_are_laid_out_in_dashboard_order() {
        let view = build(&loader(), "Books");

        assert_eq!(
            canvas_ids(&view),
            vec![
                "mostReviewedChart",
                "topRatedChart",
                "mostRatedChart",
                "genrePopularityChart",
                "hiddenGemsChart",
            ]
        );
        assert_eq!(view.nav.links().len(), 4);
    }

    #[test]
    fn failed_summary_skips_only_its_chart() {
        let mut loader = loader();
        loader.files.remove("most_rated_books.json");
        loader.files.insert("genre_vs_rating.json", "<html>not json</html>");

        let view = build(&loader, "Books");

        assert_eq!(
            canvas_ids(&view),
            vec!["mostReviewedChart", "topRatedChart", "hiddenGemsChart"]
        );
        assert_eq!(view.elements.len(), 4);
    }

    #[test]
    fn nothing_loads_gives_an_empty_dashboard() {
        let loader = StaticLoader {
            files: HashMap::new(),
        };

        let view = build(&loader, "Books");

        assert!(view.charts().is_empty());
        assert_eq!(view.elements.len(), 4);
    }

    #[test]
    fn top_rated_scenario() {
        let view = build(&loader(), "Books");
        let chart = view
            .charts()
            .into_iter()
            .find(|chart| chart.id() == "topRatedChart")
            .unwrap();

        let config = chart.config();
        assert_eq!(config.dataset().unwrap().len(), 2);
        assert_eq!(config.options.scales.x.min, Some(4.0));
        assert_eq!(config.options.scales.x.max, Some(5.0));
    }

    #[test]
    fn nav_links_point_at_sections() {
        let mut view = build(&loader(), "Books");

        for section in ["most-reviewed", "top-vs-most-rated", "genre-popularity", "hidden-gems"] {
            assert!(view.focus(section).is_some(), "{section}");
            assert_eq!(view.nav.active().unwrap().href, format!("#{section}"));
        }
    }
}
