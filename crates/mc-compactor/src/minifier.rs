//! The seam to an external JavaScript/CSS minifier.

use mc_core::{CodeKind, CompressError, MinifyOptions, Result};
use tracing::debug;

use crate::blocks::BlockStore;
use crate::patterns::{RE_MODULE_TYPE, RE_TAG_BODY};

/// Something that minifies script or style source.
///
/// Receives only the code between the tags and returns its replacement.
/// Errors fail the whole `compress` call.
pub trait CodeMinifier: Send + Sync {
    fn minify(&self, kind: CodeKind, code: &str, options: &MinifyOptions) -> anyhow::Result<String>;
}

impl<F> CodeMinifier for F
where
    F: Fn(CodeKind, &str, &MinifyOptions) -> anyhow::Result<String> + Send + Sync,
{
    fn minify(&self, kind: CodeKind, code: &str, options: &MinifyOptions) -> anyhow::Result<String> {
        self(kind, code, options)
    }
}

/// Minify the body of one extracted `<script>`/`<style>` block, keeping its
/// tags. Blocks whose body is blank are returned as-is without calling the
/// minifier. A script whose opening tag says `type="module"` is handed over
/// as [`CodeKind::Module`].
pub fn minify_block(
    block: &str,
    kind: CodeKind,
    minifier: &dyn CodeMinifier,
    options: &MinifyOptions,
) -> Result<String> {
    let Some(caps) = RE_TAG_BODY.captures(block) else {
        return Ok(block.to_string());
    };
    let body = &caps[2];
    if body.trim().is_empty() {
        return Ok(block.to_string());
    }
    let kind = match kind {
        CodeKind::Script if RE_MODULE_TYPE.is_match(&caps[1]) => CodeKind::Module,
        other => other,
    };

    let minified = minifier
        .minify(kind, body, options)
        .map_err(|e| CompressError::minify(kind, format!("{e:#}")))?;

    let mut out = String::with_capacity(caps[1].len() + minified.len() + caps[3].len());
    out.push_str(&caps[1]);
    out.push_str(&minified);
    out.push_str(&caps[3]);
    Ok(out)
}

/// Minify every block in `store` in place. Returns how many blocks changed.
pub fn minify_store(
    store: &mut BlockStore,
    kind: CodeKind,
    minifier: &dyn CodeMinifier,
    options: &MinifyOptions,
) -> Result<usize> {
    let mut minified = 0;
    for block in store.blocks.iter_mut() {
        let next = minify_block(block, kind, minifier, options)?;
        if next != *block {
            minified += 1;
        }
        *block = next;
    }
    debug!(category = %store.category, minified, total = store.len(), "minified blocks");
    Ok(minified)
}
