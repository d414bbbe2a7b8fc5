//! Point-in-time view of the servable files under a webroot.

use std::collections::BTreeSet;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// The set of root-relative paths (`/dir/file.ext`) that may be served.
///
/// A snapshot is taken per request and never cached, so files added or
/// removed between requests are picked up immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedFiles {
    paths: BTreeSet<String>,
}

impl AllowedFiles {
    /// Walks `root` recursively and records every regular file.
    ///
    /// Unreadable entries are skipped, so a missing webroot simply yields an
    /// empty set. Symlinks are not followed and are not servable.
    pub fn scan(root: &Path) -> Self {
        let mut paths = BTreeSet::new();

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable webroot entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };

            match to_request_path(relative) {
                Some(path) => {
                    paths.insert(path);
                }
                None => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        "Skipping file with non UTF-8 name"
                    );
                }
            }
        }

        Self { paths }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Paths in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedFiles {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Renders a root-relative filesystem path as `/a/b.ext` on every platform.
fn to_request_path(relative: &Path) -> Option<String> {
    let mut out = String::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                out.push('/');
                out.push_str(part.to_str()?);
            }
            _ => return None,
        }
    }
    (!out.is_empty()).then_some(out)
}
