//! Static file serving
//!
//! This module decides which files under the webroot may be served and
//! turns request paths into file contents or the generated root listing.

pub mod resolver;
pub mod snapshot;

pub use resolver::{ResolveError, Resource, Resolver};
pub use snapshot::AllowedFiles;
