use crate::chart::ChartConfig;
use crate::layout::Element;

/// A chart bound to a named canvas.
#[derive(Debug)]
pub struct Chart {
    canvas_id: &'static str,
    config: ChartConfig,
}

impl Chart {
    pub fn new(canvas_id: &'static str, config: ChartConfig) -> Chart {
        Self { canvas_id, config }
    }

    pub fn canvas_id(&self) -> &'static str {
        self.canvas_id
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

impl Element for Chart {
    fn id(&self) -> &str {
        self.canvas_id
    }
}
