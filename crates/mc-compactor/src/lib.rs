//! Markup compactor. Minifies HTML, JSP and XML without touching the
//! content of whitespace-sensitive blocks.
//!
//! Stages:
//! 1. Extract protected blocks (`<pre>`, `<script>`, `<style>`, `<% %>`,
//!    `<textarea>`; CDATA for XML) into per-category stores, leaving
//!    placeholder tokens behind
//! 2. Transform the remaining shell (comments, whitespace, attribute quotes)
//! 3. Optionally minify script/style bodies through a [`CodeMinifier`]
//! 4. Restore the blocks and trim the result

pub mod blocks;
pub mod html;
pub mod minifier;
pub mod patterns;
pub mod pipeline;
pub mod shell;
pub mod xml;

pub use blocks::{BlockStore, Blocks, EXTRACTION_ORDER, RESTORE_ORDER};
pub use html::HtmlCompressor;
pub use minifier::CodeMinifier;
pub use pipeline::{CompressionResult, MarkupCompressor};
pub use xml::XmlCompressor;

pub use mc_core::{
    Category, CodeKind, CompressError, Dialect, HtmlConfig, MinifyOptions, Result, XmlConfig,
};
