//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;

/// The result type that uses [DataError] as the error type.
pub type Result<T> = std::result::Result<T, DataError>;

/// The error type for loading a data summary.
#[derive(Debug)]
pub enum DataError {
    /// A [reqwest::Error] encountered while sending the request
    /// or reading the response body.
    Http(reqwest::Error),

    /// The server answered with a non-success status code.
    Status {
        /// The requested URL.
        url: String,
        /// The status code of the response.
        status_code: StatusCode,
    },

    /// A [std::io::Error] encountered while reading a summary from disk.
    Io {
        /// The path of the summary file.
        path: PathBuf,
        /// The underlying error.
        error: io::Error,
    },

    /// The summary body is not a JSON array of the expected records.
    Json {
        /// The name of the summary file.
        name: String,
        /// The underlying error.
        error: serde_json::Error,
    },
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data_error = "data error:";

        match self {
            DataError::Http(error) => write!(f, "{data_error} HTTP request error: {error}"),
            DataError::Status { url, status_code } => write!(
                f,
                "{data_error} HTTP response error: status = {status_code}, url = {url}"
            ),
            DataError::Io { path, error } => write!(
                f,
                "{data_error} could not read `{}`: {error}",
                path.display()
            ),
            DataError::Json { name, error } => {
                write!(f, "{data_error} could not parse `{name}`: {error}")
            }
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataError::Http(error) => Some(error),
            DataError::Status { .. } => None,
            DataError::Io { error, .. } => Some(error),
            DataError::Json { error, .. } => Some(error),
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(error: reqwest::Error) -> Self {
        DataError::Http(error)
    }
}
