use std::fmt::Display;
use std::io;

use shelfstats_data::error::DataError;
use shelfstats_vis::render::error::RenderError;

#[derive(Debug)]
pub(crate) enum CliError {
    Data(DataError),
    Render(RenderError),
    Io(io::Error),
    Path(String),
}

impl From<DataError> for CliError {
    fn from(error: DataError) -> Self {
        CliError::Data(error)
    }
}

impl From<RenderError> for CliError {
    fn from(error: RenderError) -> Self {
        CliError::Render(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Data(error) => write!(f, "{cli_error} {error}"),
            CliError::Render(error) => write!(f, "{cli_error} {error}"),
            CliError::Io(error) => write!(f, "{cli_error} I/O error: {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}
