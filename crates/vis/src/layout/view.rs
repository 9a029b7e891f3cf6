use chrono::DateTime;
use chrono::Utc;

use crate::layout::Chart;
use crate::layout::ElementKind;
use crate::layout::NavBar;
use crate::layout::ScrollRequest;

/// The whole dashboard page.
#[derive(Debug)]
pub struct View {
    pub title: String,
    pub nav: NavBar,
    pub elements: Vec<ElementKind>,
    pub generated_at: Option<DateTime<Utc>>,
    initial_scroll: Option<ScrollRequest>,
}

impl View {
    pub fn new(title: &str) -> View {
        View {
            title: title.to_owned(),
            nav: NavBar::new(),
            elements: Vec::new(),
            generated_at: None,
            initial_scroll: None,
        }
    }

    pub fn add(mut self, element: ElementKind) -> View {
        self.elements.push(element);
        self
    }

    pub fn nav(mut self, nav: NavBar) -> View {
        self.nav = nav;
        self
    }

    pub fn generated_at(mut self, timestamp: DateTime<Utc>) -> View {
        self.generated_at = Some(timestamp);
        self
    }

    /// Opens the page on a section, as if its navigation link was clicked.
    ///
    /// Nothing changes when the section has no link or does not exist.
    pub fn focus(&mut self, section_id: &str) -> Option<&ScrollRequest> {
        let href = format!("#{section_id}");
        let request = self.nav.click(&href, self.elements.as_slice())?;

        self.initial_scroll = Some(request);
        self.initial_scroll.as_ref()
    }

    pub fn initial_scroll(&self) -> Option<&ScrollRequest> {
        self.initial_scroll.as_ref()
    }

    /// The charts of the page, in page order.
    pub fn charts(&self) -> Vec<&Chart> {
        let mut charts = Vec::new();

        for element in &self.elements {
            match element {
                ElementKind::Section(section) => charts.extend(section.charts()),
                ElementKind::Chart(chart) => charts.push(chart),
            }
        }

        charts
    }
}
