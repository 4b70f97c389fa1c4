//! Block extraction and restoration.
//!
//! Protected regions are cut out of the document one category at a time and
//! replaced by indexed placeholder tokens. After the shell has been
//! transformed, the tokens are swapped back for the stored (and possibly
//! minified) blocks.

use mc_core::{Category, CompressError, Result};
use std::collections::HashMap;
use tracing::debug;

use crate::patterns::{block_pattern, placeholder, RE_PLACEHOLDER};

/// HTML extraction order. `<pre>` goes first so that script-looking text
/// inside it is never matched by a later category.
pub const EXTRACTION_ORDER: [Category; 5] = [
    Category::Preformatted,
    Category::Script,
    Category::Style,
    Category::TemplateRegion,
    Category::Textarea,
];

/// HTML restoration order. Not the reverse of [`EXTRACTION_ORDER`].
pub const RESTORE_ORDER: [Category; 5] = [
    Category::Textarea,
    Category::Style,
    Category::TemplateRegion,
    Category::Script,
    Category::Preformatted,
];

/// Extracted blocks of one category, indexed by placeholder number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStore {
    pub category: Category,
    pub blocks: Vec<String>,
}

impl BlockStore {
    pub fn new(category: Category) -> Self {
        Self { category, blocks: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// All block stores of one `compress` call, in extraction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocks {
    stores: Vec<BlockStore>,
}

impl Blocks {
    pub fn store(&self, category: Category) -> Option<&BlockStore> {
        self.stores.iter().find(|s| s.category == category)
    }

    pub fn store_mut(&mut self, category: Category) -> Option<&mut BlockStore> {
        self.stores.iter_mut().find(|s| s.category == category)
    }

    pub fn stores(&self) -> &[BlockStore] {
        &self.stores
    }

    /// Total number of extracted blocks.
    pub fn total(&self) -> usize {
        self.stores.iter().map(BlockStore::len).sum()
    }

    /// Per-category block counts, in extraction order.
    pub fn counts(&self) -> Vec<(Category, usize)> {
        self.stores.iter().map(|s| (s.category, s.len())).collect()
    }
}

/// Replace every match of `category`'s pattern in `shell` with a placeholder,
/// appending the matched text to `store`.
pub fn extract_category(shell: &str, store: &mut BlockStore) -> String {
    let category = store.category;
    block_pattern(category)
        .replace_all(shell, |caps: &regex::Captures| {
            let index = store.blocks.len();
            store.blocks.push(caps[0].to_string());
            placeholder(category, index)
        })
        .into_owned()
}

/// Extract every category in order. Each category scans the shell left
/// behind by the previous one, never the original document.
pub fn extract(document: &str, categories: &[Category]) -> (String, Blocks) {
    let mut shell = document.to_string();
    let mut blocks = Blocks::default();
    for &category in categories {
        let mut store = BlockStore::new(category);
        shell = extract_category(&shell, &mut store);
        if !store.is_empty() {
            debug!(%category, count = store.len(), "extracted blocks");
        }
        blocks.stores.push(store);
    }
    (shell, blocks)
}

/// Swap the placeholders of one store back in. Returns the new text and the
/// number of substitutions.
pub fn restore_category(shell: &str, store: &BlockStore) -> Result<(String, usize)> {
    let tag = store.category.token_tag();
    let mut out = String::with_capacity(shell.len());
    let mut last = 0;
    let mut replaced = 0;

    for caps in RE_PLACEHOLDER.captures_iter(shell) {
        let Some(whole) = caps.get(0) else { continue };
        if &caps[1] != tag {
            continue;
        }
        let len = store.len();
        // Digits only; a parse failure means an index too large for usize.
        let index = caps[2].parse::<usize>().unwrap_or(usize::MAX);
        let block = store.blocks.get(index).ok_or(CompressError::PlaceholderOutOfRange {
            category: store.category,
            index,
            len,
        })?;
        out.push_str(&shell[last..whole.start()]);
        out.push_str(block);
        last = whole.end();
        replaced += 1;
    }
    out.push_str(&shell[last..]);
    Ok((out, replaced))
}

/// Outcome of [`restore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restored {
    pub document: String,
    /// Substitutions per category, in the order categories were swept.
    pub counts: Vec<(Category, usize)>,
}

/// Restore all stores, sweeping categories in `order`.
///
/// A restored block can carry placeholders of its own (a `<script>` inside a
/// `<textarea>` was extracted first). Categories swept later pick those up;
/// if one was already swept, the whole sweep runs again, at most once per
/// category. Placeholders that survive every sweep are an error.
pub fn restore(shell: &str, blocks: &Blocks, order: &[Category]) -> Result<Restored> {
    let mut document = shell.to_string();
    let mut counts: HashMap<Category, usize> = HashMap::new();

    for round in 0..order.len().max(1) {
        let mut replaced = 0;
        for &category in order {
            let Some(store) = blocks.store(category) else { continue };
            let (next, n) = restore_category(&document, store)?;
            document = next;
            replaced += n;
            *counts.entry(category).or_default() += n;
        }
        if replaced == 0 || !has_pending_placeholder(&document, blocks) {
            break;
        }
        debug!(round, "restored blocks re-introduced placeholders, sweeping again");
    }
    let pending = pending_placeholders(&document, blocks);
    if pending > 0 {
        return Err(CompressError::UnresolvedPlaceholders { count: pending });
    }

    let counts = order
        .iter()
        .map(|c| (*c, counts.get(c).copied().unwrap_or(0)))
        .collect();
    Ok(Restored { document, counts })
}

/// True if `text` still holds a placeholder for one of the stores in `blocks`.
pub fn has_pending_placeholder(text: &str, blocks: &Blocks) -> bool {
    pending_placeholders(text, blocks) > 0
}

/// Placeholders in `text` that belong to one of the stores in `blocks`.
pub fn pending_placeholders(text: &str, blocks: &Blocks) -> usize {
    RE_PLACEHOLDER
        .captures_iter(text)
        .filter(|caps| Category::from_token_tag(&caps[1]).is_some_and(|c| blocks.store(c).is_some()))
        .count()
}
