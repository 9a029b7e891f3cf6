//! Writes a [View] as a single HTML page.
//!
//! Charts are embedded as serialized configs and handed to the renderer by a
//! small runtime script, which also wires the page navigation.
//!
//! [View]: crate::layout::View

pub mod error;
pub mod output;
pub mod page;

use crate::render::error::RenderError;

pub trait OutputStream {
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

pub trait Render {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream;
}
