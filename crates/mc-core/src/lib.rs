//! Shared types for the markup compactor: block categories, dialects,
//! compressor configuration and the error type.

pub mod config;
pub mod error;
pub mod types;

pub use config::{CssMinifyOptions, HtmlConfig, JsMinifyOptions, MinifyOptions, XmlConfig};
pub use error::{CompressError, Result};
pub use types::{Category, CodeKind, Dialect};

#[cfg(test)]
mod tests;
