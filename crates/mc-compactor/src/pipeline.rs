//! Compression pipeline: extract blocks, transform the shell, restore.

use mc_core::{Category, Dialect, Result};
use tracing::debug;

use crate::blocks::{self, Blocks};
use crate::patterns::is_markup_space;
use crate::shell::{self, ShellOptions};

/// Compression result with statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionResult {
    pub output: String,
    pub original_len: usize,
    pub compressed_len: usize,
    pub reduction_pct: f64,
    pub dialect: Dialect,
    pub passes_applied: Vec<String>,
    /// Blocks extracted per category, in extraction order.
    pub extracted: Vec<(Category, usize)>,
    /// Placeholders substituted per category, in restoration order.
    pub restored: Vec<(Category, usize)>,
}

impl CompressionResult {
    /// A result whose output is the input, untouched.
    pub fn passthrough(document: &str, dialect: Dialect) -> Self {
        Self::new(document, document.to_string(), dialect)
    }

    fn new(document: &str, output: String, dialect: Dialect) -> Self {
        let original_len = document.len();
        let compressed_len = output.len();
        let reduction_pct = if original_len > 0 {
            (original_len as f64 - compressed_len as f64) / original_len as f64 * 100.0
        } else {
            0.0
        };
        Self {
            output,
            original_len,
            compressed_len,
            reduction_pct,
            dialect,
            passes_applied: Vec::new(),
            extracted: Vec::new(),
            restored: Vec::new(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.compressed_len as f64 / self.original_len as f64
    }

    /// Blocks extracted for `category`.
    pub fn extracted_count(&self, category: Category) -> usize {
        count_for(&self.extracted, category)
    }

    /// Placeholders restored for `category`.
    pub fn restored_count(&self, category: Category) -> usize {
        count_for(&self.restored, category)
    }
}

fn count_for(counts: &[(Category, usize)], category: Category) -> usize {
    counts.iter().find(|(c, _)| *c == category).map(|(_, n)| *n).unwrap_or(0)
}

/// A markup compressor. Variants differ only in their categories and passes.
pub trait MarkupCompressor: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Compress and report statistics.
    fn compress_detailed(&self, document: &str) -> Result<CompressionResult>;

    /// Compress `document`. Empty input, or a disabled compressor, returns the
    /// input unchanged.
    fn compress(&self, document: &str) -> Result<String> {
        Ok(self.compress_detailed(document)?.output)
    }
}

/// The block-preservation engine shared by every dialect.
#[derive(Debug, Clone)]
pub struct BlockPipeline<'a> {
    pub dialect: Dialect,
    pub extraction_order: &'a [Category],
    pub restore_order: &'a [Category],
    pub shell: ShellOptions,
}

impl BlockPipeline<'_> {
    /// Run the pipeline. `process_blocks` may rewrite stored blocks (external
    /// minification) between the shell pass and restoration, and returns the
    /// names of the passes it applied.
    pub fn run<F>(&self, document: &str, process_blocks: F) -> Result<CompressionResult>
    where
        F: FnOnce(&mut Blocks) -> Result<Vec<String>>,
    {
        let (shell, mut blocks) = blocks::extract(document, self.extraction_order);
        let extracted = blocks.counts();

        let (shell, passes) = shell::transform(&shell, &self.shell);
        debug!(dialect = %self.dialect, ?passes, shell_len = shell.len(), "transformed shell");

        let mut passes_applied: Vec<String> = passes.into_iter().map(String::from).collect();
        passes_applied.extend(process_blocks(&mut blocks)?);

        let restored = blocks::restore(&shell, &blocks, self.restore_order)?;
        for (category, count) in &extracted {
            let back = count_for(&restored.counts, *category);
            if back != *count {
                debug!(%category, extracted = count, restored = back, "placeholders lost in shell");
            }
        }

        let output = restored.document.trim_matches(is_markup_space).to_string();
        let mut result = CompressionResult::new(document, output, self.dialect);
        result.passes_applied = passes_applied;
        result.extracted = extracted;
        result.restored = restored.counts;
        Ok(result)
    }
}
