use std::error::Error;
use std::fmt::Display;
use std::io;

use tinytemplate::error::Error as TinyTemplateError;

#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    Io(io::Error),
    JsonSerialization(serde_json::Error),
    Template(TinyTemplateError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Io(inner) => write!(f, "{render_error} I/O error: {inner}"),
            RenderError::JsonSerialization(inner) => {
                write!(f, "{render_error} chart serialization error: {inner}")
            }
            RenderError::Template(inner) => write!(f, "{render_error} template error: {inner}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Io(inner) => Some(inner),
            RenderError::JsonSerialization(inner) => Some(inner),
            RenderError::Template(inner) => Some(inner),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        RenderError::Io(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::JsonSerialization(error)
    }
}

impl From<TinyTemplateError> for RenderError {
    fn from(error: TinyTemplateError) -> Self {
        RenderError::Template(error)
    }
}
