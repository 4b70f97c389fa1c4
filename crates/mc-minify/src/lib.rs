//! Native JavaScript and CSS minifiers for the markup compactor.
//!
//! [`NativeMinifier`] plugs into [`mc_compactor::HtmlCompressor`] through the
//! [`CodeMinifier`] seam: oxc handles script bodies, lightningcss handles
//! style bodies.

pub mod css;
pub mod js;
pub mod line_break;

use mc_compactor::CodeMinifier;
use mc_core::{CodeKind, MinifyOptions};

/// Minifies `<script>` bodies with oxc and `<style>` bodies with lightningcss.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeMinifier;

impl NativeMinifier {
    pub fn new() -> Self {
        Self
    }
}

impl CodeMinifier for NativeMinifier {
    fn minify(&self, kind: CodeKind, code: &str, options: &MinifyOptions) -> anyhow::Result<String> {
        match kind {
            CodeKind::Script => js::minify(code, false, &options.js),
            CodeKind::Module => js::minify(code, true, &options.js),
            CodeKind::Style => css::minify(code, &options.css),
        }
    }
}

#[cfg(test)]
mod tests;
