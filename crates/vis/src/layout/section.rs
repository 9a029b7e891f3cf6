use crate::layout::Chart;
use crate::layout::Element;
use crate::layout::ElementKind;

#[derive(Debug)]
pub struct Section {
    id: String,
    pub heading: String,
    pub description: Option<String>,
    pub elements: Vec<ElementKind>,
}

impl Section {
    pub fn new(id: &str, heading: &str) -> Section {
        Self {
            id: id.to_owned(),
            heading: heading.to_owned(),
            description: None,
            elements: Vec::new(),
        }
    }

    pub fn describe(mut self, description: &str) -> Section {
        self.description = Some(description.to_owned());
        self
    }

    pub fn add(mut self, element: ElementKind) -> Section {
        self.elements.push(element);
        self
    }

    pub fn charts(&self) -> impl Iterator<Item = &Chart> {
        self.elements.iter().filter_map(|element| match element {
            ElementKind::Chart(chart) => Some(chart),
            ElementKind::Section(_) => None,
        })
    }
}

impl Element for Section {
    fn id(&self) -> &str {
        &self.id
    }
}
