//! JavaScript minification via oxc.

use anyhow::{bail, Result};
use mc_core::JsMinifyOptions;
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions};
use oxc::minifier::{Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use tracing::debug;

use crate::line_break::break_lines;

/// Parse goal for a script body.
///
/// A classic script shares its top-level scope with every other script and
/// inline handler on the page, so top-level names must stay intact. Only a
/// module body gets module semantics.
pub fn source_type(module: bool) -> SourceType {
    if module {
        SourceType::mjs()
    } else {
        SourceType::cjs().with_script(true)
    }
}

/// Minify a script body, as a module when `module` is set.
///
/// `no_munge` keeps identifier names; `disable_optimizations` skips the
/// compressor and only reprints the program compactly. Top-level names are
/// never mangled.
pub fn minify(code: &str, module: bool, options: &JsMinifyOptions) -> Result<String> {
    if options.preserve_all_semicolons {
        debug!("preserve_all_semicolons has no effect on oxc codegen output");
    }

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, code, source_type(module)).parse();
    if !ret.errors.is_empty() {
        let messages: Vec<String> = ret.errors.iter().map(|e| e.to_string()).collect();
        bail!("JavaScript parse error: {}", messages.join("; "));
    }

    let mut program = ret.program;
    let mut minifier_options = MinifierOptions::default();
    if options.no_munge {
        minifier_options.mangle = None;
    }
    if options.disable_optimizations {
        minifier_options.compress = None;
    }
    let minified = Minifier::new(minifier_options).minify(&allocator, &mut program);

    let code = Codegen::new()
        .with_options(CodegenOptions { minify: true, ..Default::default() })
        .with_scoping(minified.scoping)
        .build(&program)
        .code;
    let code = code.trim_end();

    Ok(match options.line_break {
        Some(column) => break_lines(code, ';', column),
        None => code.to_string(),
    })
}
