//! The chart configuration model, serialized into the renderer's format.

pub mod axes;
pub mod color;
pub mod config;
pub mod lollipop;
pub mod theme;

pub use crate::chart::config::ChartConfig;
pub use crate::chart::theme::ChartTheme;
