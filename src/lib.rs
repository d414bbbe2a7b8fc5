//! rootserve - single-client static file server
//!
//! Core library for request parsing, webroot resolution and response framing.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
