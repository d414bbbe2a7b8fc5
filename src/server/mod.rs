//! Socket plumbing: the sequential accept loop.

pub mod listener;
