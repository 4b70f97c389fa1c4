//! HTML-family compressor (HTML and JSP).

use mc_core::{Category, CompressError, Dialect, HtmlConfig, Result};
use std::sync::Arc;

use crate::blocks::{Blocks, EXTRACTION_ORDER, RESTORE_ORDER};
use crate::minifier::{minify_store, CodeMinifier};
use crate::pipeline::{BlockPipeline, CompressionResult, MarkupCompressor};
use crate::shell::ShellOptions;

/// Compresses HTML while preserving `<pre>`, `<textarea>`, `<script>`,
/// `<style>` and `<% %>` blocks. Script and style bodies can optionally be
/// handed to a [`CodeMinifier`].
#[derive(Clone, Default)]
pub struct HtmlCompressor {
    config: HtmlConfig,
    minifier: Option<Arc<dyn CodeMinifier>>,
}

impl HtmlCompressor {
    pub fn new(config: HtmlConfig) -> Self {
        Self { config, minifier: None }
    }

    pub fn with_minifier(mut self, minifier: impl CodeMinifier + 'static) -> Self {
        self.minifier = Some(Arc::new(minifier));
        self
    }

    pub fn with_shared_minifier(mut self, minifier: Arc<dyn CodeMinifier>) -> Self {
        self.minifier = Some(minifier);
        self
    }

    pub fn config(&self) -> &HtmlConfig {
        &self.config
    }

    /// Compress with an explicit configuration instead of the stored one.
    pub fn compress_with(&self, document: &str, config: &HtmlConfig) -> Result<String> {
        Ok(self.compress_detailed_with(document, config)?.output)
    }

    pub fn compress_detailed_with(&self, document: &str, config: &HtmlConfig) -> Result<CompressionResult> {
        if !config.enabled || document.is_empty() {
            return Ok(CompressionResult::passthrough(document, Dialect::Html));
        }

        let minifier = match (&self.minifier, config.compresses_code()) {
            (Some(m), true) => Some(m.as_ref()),
            (None, true) => {
                return Err(CompressError::InvalidOption(
                    "JavaScript/CSS compression enabled but no minifier configured".into(),
                ))
            }
            (_, false) => None,
        };

        let pipeline = BlockPipeline {
            dialect: Dialect::Html,
            extraction_order: &EXTRACTION_ORDER,
            restore_order: &RESTORE_ORDER,
            shell: shell_options(config),
        };

        pipeline.run(document, |blocks: &mut Blocks| {
            let mut passes = Vec::new();
            let Some(minifier) = minifier else { return Ok(passes) };
            for (category, enabled, pass) in [
                (Category::Script, config.compress_js, "javascript"),
                (Category::Style, config.compress_css, "css"),
            ] {
                let (Some(kind), Some(store)) = (category.code_kind(), blocks.store_mut(category)) else {
                    continue;
                };
                if enabled {
                    minify_store(store, kind, minifier, &config.minify)?;
                    passes.push(pass.to_string());
                }
            }
            Ok(passes)
        })
    }
}

fn shell_options(config: &HtmlConfig) -> ShellOptions {
    ShellOptions {
        remove_comments: config.remove_comments,
        keep_conditional_comments: true,
        remove_template_comments: config.remove_template_comments,
        preserve_form_comments: config.preserve_form_comments,
        remove_intertag_spaces: config.remove_intertag_spaces,
        remove_multi_spaces: config.remove_multi_spaces,
        remove_quotes: config.remove_quotes,
    }
}

impl MarkupCompressor for HtmlCompressor {
    fn dialect(&self) -> Dialect {
        Dialect::Html
    }

    fn compress_detailed(&self, document: &str) -> Result<CompressionResult> {
        self.compress_detailed_with(document, &self.config)
    }
}

impl std::fmt::Debug for HtmlCompressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlCompressor")
            .field("config", &self.config)
            .field("minifier", &self.minifier.is_some())
            .finish()
    }
}
