//! Utility functions for query and settings processing.
//!
//! - [`url_shape`] - Implicit URL capture and absolute URL checks
//! - [`config_lines`] - Splitting of newline-delimited settings values
//! - [`extract_domain`] - Display domain of a configured host

pub mod config_lines;
pub mod extract_domain;
pub mod url_shape;
