//! The structure of the dashboard page: sections, charts and navigation.

mod chart;
mod nav;
mod section;
mod view;

pub use crate::layout::chart::Chart;
pub use crate::layout::nav::AnchorTargets;
pub use crate::layout::nav::NavBar;
pub use crate::layout::nav::NavLink;
pub use crate::layout::nav::ScrollBehavior;
pub use crate::layout::nav::ScrollRequest;
pub use crate::layout::section::Section;
pub use crate::layout::view::View;

pub trait Element {
    fn id(&self) -> &str;
}

#[derive(Debug)]
pub enum ElementKind {
    Section(Section),
    Chart(Chart),
}

impl Element for ElementKind {
    fn id(&self) -> &str {
        match self {
            ElementKind::Section(s) => s.id(),
            ElementKind::Chart(c) => c.id(),
        }
    }
}

impl ElementKind {
    fn children(&self) -> &[ElementKind] {
        match self {
            ElementKind::Section(s) => &s.elements,
            ElementKind::Chart(_) => &[],
        }
    }
}

impl AnchorTargets for [ElementKind] {
    fn has_target(&self, id: &str) -> bool {
        self.iter()
            .any(|element| element.id() == id || element.children().has_target(id))
    }
}
