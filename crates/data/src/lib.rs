//! shelfstats' data library.
//!
//! Loads the pre-computed book summaries that feed the dashboard charts.
//! A summary is a JSON array of records; every record type knows the file
//! it is stored in (see [`records::Record`]).
//!
//! Summaries are read either from an HTTP location or from a local
//! directory, see [`Source`]. Loading fails soft: [`Fetch::fetch`] logs
//! the failure and returns `None`, so a caller can skip the chart and
//! carry on with the rest of the page.

#![warn(missing_docs)]

mod loader;

pub mod error;
pub mod records;

pub use crate::loader::DataLoader;
pub use crate::loader::Fetch;
pub use crate::loader::Source;
