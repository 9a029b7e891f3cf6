//! shelfstats' visualization library.
//!
//! Builds the dashboard charts from the book summaries and renders them,
//! together with the page layout, as a single HTML page.
//!
//! **WARNING**: This library is the shelfstats' internal library and
//! there are no plans to stabilize it. The API may break at any time without notice.

pub mod builders;
pub mod chart;
pub mod layout;
pub mod render;
