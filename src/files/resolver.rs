//! Maps request paths onto the webroot.

use crate::files::snapshot::AllowedFiles;
use crate::http::mime;
use std::path::{Path, PathBuf};
use thiserror::Error;

const LISTING_SEPARATOR: &str = "</p>\r\n<p>";

/// Why a path could not be served. Every variant is answered with a 404.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No such path {0}")]
    NotFound(String),

    #[error("Path {0} escapes the webroot")]
    TraversalRejected(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bytes to send back plus their content type, if one could be determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub content: Vec<u8>,
    pub mime_type: Option<String>,
}

/// Resolves request paths against a fixed webroot directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    root: PathBuf,
}

impl Resolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `path` using a fresh snapshot of the webroot.
    ///
    /// `/` produces the generated listing. Any other path must be a member of
    /// the snapshot and must still resolve inside the webroot once symlinks
    /// and `..` are expanded.
    pub fn resolve(&self, path: &str) -> Result<Resource, ResolveError> {
        let files = AllowedFiles::scan(&self.root);
        self.resolve_in(&files, path)
    }

    /// Resolve `path` against an explicit snapshot.
    pub fn resolve_in(&self, files: &AllowedFiles, path: &str) -> Result<Resource, ResolveError> {
        if path == "/" {
            return Ok(Resource {
                content: render_listing(files).into_bytes(),
                mime_type: Some("text/html".to_string()),
            });
        }

        if !files.contains(path) {
            return Err(ResolveError::NotFound(path.to_string()));
        }

        let full_path = self.contained_path(path)?;
        let content = std::fs::read(&full_path).map_err(|source| ResolveError::Io {
            path: path.to_string(),
            source,
        })?;

        Ok(Resource {
            content,
            mime_type: mime::guess(path).map(str::to_string),
        })
    }

    /// Canonical filesystem location for `path`, provided it lies under the
    /// canonical webroot.
    fn contained_path(&self, path: &str) -> Result<PathBuf, ResolveError> {
        let io_err = |source: std::io::Error| ResolveError::Io {
            path: path.to_string(),
            source,
        };

        let root = self.root.canonicalize().map_err(io_err)?;
        let candidate = self
            .root
            .join(path.trim_start_matches('/'))
            .canonicalize()
            .map_err(io_err)?;

        if !candidate.starts_with(&root) {
            tracing::warn!(path, "Rejected path outside webroot");
            return Err(ResolveError::TraversalRejected(path.to_string()));
        }

        Ok(candidate)
    }
}

/// HTML page listing every allowed path, one paragraph each.
pub fn render_listing(files: &AllowedFiles) -> String {
    let joined = files.iter().collect::<Vec<_>>().join(LISTING_SEPARATOR);
    format!(
        "<!DOCTYPE html>\r\n<html>\r\n<body>\r\n\r\n<h1>Welcome</h1>\r\n\r\n<p>{}</p>\r\n\r\n</body>\r\n</html>\r\n\r\n",
        joined
    )
}
