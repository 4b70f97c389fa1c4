//! CSS minification via lightningcss.

use anyhow::{anyhow, Result};
use lightningcss::stylesheet::{MinifyOptions, ParserOptions, PrinterOptions, StyleSheet};
use mc_core::CssMinifyOptions;

use crate::line_break::break_lines;

/// Minify a style body.
pub fn minify(code: &str, options: &CssMinifyOptions) -> Result<String> {
    let mut stylesheet = StyleSheet::parse(code, ParserOptions::default())
        .map_err(|e| anyhow!("CSS parse error: {e}"))?;
    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| anyhow!("CSS minify error: {e}"))?;
    let printed = stylesheet
        .to_css(PrinterOptions { minify: true, ..Default::default() })
        .map_err(|e| anyhow!("CSS print error: {e}"))?;

    Ok(match options.line_break {
        Some(column) => break_lines(&printed.code, '}', column),
        None => printed.code,
    })
}
