use std::fmt;
use std::fmt::Display;
use std::fs;
use std::path::PathBuf;

use reqwest::Url;
use reqwest::blocking::Client;
use tracing::debug;
use tracing::warn;

use crate::error::DataError;
use crate::error::Result;
use crate::records::Record;

/// Loads data summaries by file name.
///
/// Implementors only provide the raw bytes of a summary; parsing and the
/// fail-soft behavior are shared.
pub trait Fetch: Sync {
    /// Reads the raw content of the summary with the given file name.
    fn load(&self, name: &str) -> Result<Vec<u8>>;

    /// Loads and parses the summary that holds `R` records, reporting why it failed.
    fn try_fetch<R: Record>(&self) -> Result<Vec<R>> {
        let bytes = self.load(R::FILE_NAME)?;

        serde_json::from_slice(&bytes).map_err(|error| DataError::Json {
            name: R::FILE_NAME.to_owned(),
            error,
        })
    }

    /// Loads and parses the summary that holds `R` records.
    ///
    /// Any failure is logged and mapped to `None`.
    fn fetch<R: Record>(&self) -> Option<Vec<R>> {
        match self.try_fetch::<R>() {
            Ok(records) => {
                debug!(name = R::FILE_NAME, count = records.len(), "loaded data summary");
                Some(records)
            }
            Err(error) => {
                warn!(name = R::FILE_NAME, %error, "could not fetch data");
                None
            }
        }
    }
}

/// The location the summaries are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A base URL ending with a slash; summaries are requested with `GET {base}{name}`.
    Http(Url),
    /// A directory holding the summary files.
    Dir(PathBuf),
}

impl Source {
    /// Parses an `http://` or `https://` URL, or a path to an existing directory.
    pub fn parse(value: &str) -> std::result::Result<Source, String> {
        if value.starts_with("http://") || value.starts_with("https://") {
            let mut url =
                Url::parse(value).map_err(|e| format!("The `{value}` URL is invalid: {e}"))?;

            // File names are appended to the base path.
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }

            return Ok(Source::Http(url));
        }

        let path = PathBuf::from(value);

        if !path.exists() {
            return Err(format!("The `{}` path does not exist.", path.display()));
        }

        if !path.is_dir() {
            return Err(format!(
                "The `{}` path must point to a directory.",
                path.display()
            ));
        }

        Ok(Source::Dir(path))
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(url) => write!(f, "{url}"),
            Source::Dir(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the data summaries from a [Source].
pub struct DataLoader {
    source: Source,
    client: Client,
}

impl DataLoader {
    /// Creates a loader that reads the summaries from `source`.
    ///
    /// Requests never time out; a host that stops answering keeps its
    /// chart waiting.
    pub fn new(source: Source) -> Result<Self> {
        let client = Client::builder().timeout(None).build()?;

        Ok(Self { source, client })
    }

    /// The location the summaries are read from.
    pub fn source(&self) -> &Source {
        &self.source
    }

    fn get(&self, base_url: &Url, name: &str) -> Result<Vec<u8>> {
        let url = summary_url(base_url, name);

        debug!(%url, "requesting data summary");
        let response = self.client.get(url.clone()).send()?;

        match response.status() {
            status if status.is_success() => Ok(response.bytes()?.to_vec()),
            status_code => Err(DataError::Status {
                url: url.to_string(),
                status_code,
            }),
        }
    }
}

// Appends the file name to the base path, keeping the query of the base URL.
fn summary_url(base_url: &Url, name: &str) -> Url {
    let mut url = base_url.clone();
    let path = format!("{}{name}", base_url.path());

    url.set_path(&path);
    url.set_fragment(None);
    url
}

impl Fetch for DataLoader {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        match self.source {
            Source::Http(ref base_url) => self.get(base_url, name),
            Source::Dir(ref dir) => {
                let path = dir.join(name);
                debug!(path = %path.display(), "reading data summary");
                fs::read(&path).map_err(|error| DataError::Io { path, error })
            }
        }
    }
}
