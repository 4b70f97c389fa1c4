//! XML-family compressor.

use mc_core::{Category, Dialect, Result, XmlConfig};

use crate::pipeline::{BlockPipeline, CompressionResult, MarkupCompressor};
use crate::shell::ShellOptions;

/// XML protects only `<![CDATA[ ]]>` sections.
pub const XML_CATEGORIES: [Category; 1] = [Category::Cdata];

/// Removes comments and inter-tag whitespace from XML, leaving CDATA
/// sections untouched.
#[derive(Debug, Clone, Default)]
pub struct XmlCompressor {
    config: XmlConfig,
}

impl XmlCompressor {
    pub fn new(config: XmlConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &XmlConfig {
        &self.config
    }

    pub fn compress_with(&self, document: &str, config: &XmlConfig) -> Result<String> {
        Ok(self.compress_detailed_with(document, config)?.output)
    }

    pub fn compress_detailed_with(&self, document: &str, config: &XmlConfig) -> Result<CompressionResult> {
        if !config.enabled || document.is_empty() {
            return Ok(CompressionResult::passthrough(document, Dialect::Xml));
        }

        let pipeline = BlockPipeline {
            dialect: Dialect::Xml,
            extraction_order: &XML_CATEGORIES,
            restore_order: &XML_CATEGORIES,
            shell: ShellOptions {
                remove_comments: config.remove_comments,
                remove_intertag_spaces: config.remove_intertag_spaces,
                ..ShellOptions::default()
            },
        };
        pipeline.run(document, |_| Ok(Vec::new()))
    }
}

impl MarkupCompressor for XmlCompressor {
    fn dialect(&self) -> Dialect {
        Dialect::Xml
    }

    fn compress_detailed(&self, document: &str) -> Result<CompressionResult> {
        self.compress_detailed_with(document, &self.config)
    }
}
