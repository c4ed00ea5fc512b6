//! Errors raised while loading content

use std::path::PathBuf;
use thiserror::Error;

use crate::content::ContentKind;

/// Failure while loading or looking up content records
#[derive(Debug, Error)]
pub enum ContentError {
    /// A front-matter field is missing, has the wrong type, or holds a value
    /// outside its closed set. Aborts the whole collection load.
    #[error("{}: invalid field `{field}`: {reason}", .path.display())]
    Validation {
        path: PathBuf,
        field: String,
        reason: String,
    },

    /// The front-matter block is not valid YAML or not a mapping
    #[error("{}: malformed front-matter: {source}", .path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no {kind} found with slug `{slug}`")]
    NotFound { kind: ContentKind, slug: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContentError {
    /// The file the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ContentError::Validation { path, .. }
            | ContentError::FrontMatter { path, .. }
            | ContentError::Io { path, .. } => Some(path.as_path()),
            ContentError::NotFound { .. } => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
