use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing required config key `{0}`")]
    MissingKey(&'static str),

    #[error("config key `{key}` is invalid: {reason}")]
    InvalidKey { key: &'static str, reason: String },

    #[error("{}: no front matter found", .path.display())]
    NoFrontmatter { path: PathBuf },

    #[error("{}: could not parse front matter: {source}", .path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{}: date `{date}` is not formatted as YYYY-MM-DD", .path.display())]
    BadDate { path: PathBuf, date: String },

    #[error("image has no size variants")]
    NoVariants,

    #[error("image variant `{src}` ({width}w) cannot be rendered")]
    InvalidVariant { src: String, width: u32 },

    #[error("page {page} is out of range ({pages} pages)")]
    PageOutOfRange { page: usize, pages: usize },

    #[error("template error: {0}")]
    Template(#[from] tinytemplate::error::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
