//! Shared helpers: terminal logging, minification and date formatting.

pub mod date;
pub mod log;
pub mod minify;
