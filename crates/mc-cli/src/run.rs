//! Read, compress, write.

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};
use mc_compactor::{HtmlCompressor, MarkupCompressor, XmlCompressor};
use mc_core::{Dialect, HtmlConfig, XmlConfig};
use mc_minify::NativeMinifier;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::cli::Cli;

pub fn run(cli: &Cli) -> Result<()> {
    let dialect = cli.dialect()?;
    let encoding = resolve_charset(cli.charset.as_deref());
    let compressor = build_compressor(cli, dialect)?;

    // Read everything first so input and output may be the same file.
    let source = read_input(cli.input.as_deref(), encoding)?;
    let result = compressor.compress_detailed(&source)?;
    debug!(
        %dialect,
        charset = encoding.name(),
        original = result.original_len,
        compressed = result.compressed_len,
        reduction_pct = result.reduction_pct,
        passes = ?result.passes_applied,
        "compressed"
    );

    write_output(cli.output.as_deref(), &result.output, encoding)
}

/// Encoding for `--charset`. UTF-8 when absent or not a known label.
pub fn resolve_charset(name: Option<&str>) -> &'static Encoding {
    let Some(name) = name else { return UTF_8 };
    match Encoding::for_label(name.trim().as_bytes()) {
        Some(encoding) => encoding,
        None => {
            warn!(charset = name, "unknown charset, using UTF-8");
            UTF_8
        }
    }
}

pub fn build_compressor(cli: &Cli, dialect: Dialect) -> Result<Box<dyn MarkupCompressor>> {
    Ok(match dialect {
        Dialect::Html => {
            let config = cli.html_config(load_config::<HtmlConfig>(cli.config.as_deref())?);
            Box::new(HtmlCompressor::new(config).with_minifier(NativeMinifier::new()))
        }
        Dialect::Xml => {
            let config = cli.xml_config(load_config::<XmlConfig>(cli.config.as_deref())?);
            Box::new(XmlCompressor::new(config))
        }
    })
}

/// Deserialize a config file, or the default config when there is none.
pub fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else { return Ok(T::default()) };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

pub fn read_input(path: Option<&Path>, encoding: &'static Encoding) -> Result<String> {
    let bytes = match path {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf).context("reading stdin")?;
            buf
        }
    };
    let text = encoding
        .decode_without_bom_handling_and_without_replacement(&bytes)
        .with_context(|| format!("input is not valid {}", encoding.name()))?;
    Ok(text.into_owned())
}

/// Characters the charset cannot represent are written as numeric character
/// references.
pub fn write_output(path: Option<&Path>, output: &str, encoding: &'static Encoding) -> Result<()> {
    let (bytes, _, unmappable) = encoding.encode(output);
    if unmappable {
        warn!(charset = encoding.name(), "unmappable characters written as character references");
    }
    match path {
        Some(path) => fs::write(path, &bytes).with_context(|| format!("writing {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes).context("writing stdout")?;
            stdout.flush().context("writing stdout")
        }
    }
}
