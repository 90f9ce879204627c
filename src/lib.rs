//! tagmark - Tag configuration embedded in markdown readmes
//!
//! Readme files for API specifications carry machine-readable settings in
//! fenced YAML code blocks: a latest tag, per-tag input-file lists and a
//! suppression directive list. tagmark parses such a readme into a
//! navigable tree, answers queries over the tag configuration and rewrites
//! individual code blocks in place without disturbing the surrounding
//! prose.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagmarkError;
