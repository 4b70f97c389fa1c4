//! Command-line arguments and their mapping onto compressor configs.

use anyhow::Result;
use clap::Parser;
use mc_core::{Dialect, HtmlConfig, XmlConfig};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "markup-compact", version)]
#[command(about = "Minify HTML, JSP and XML while leaving pre, textarea, script, style and template blocks intact")]
pub struct Cli {
    /// Input file. Reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Output file. Writes stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Markup type. Detected from the input file extension when omitted
    #[arg(long = "type", value_name = "html|xml")]
    pub markup_type: Option<String>,

    /// Charset of the input and output (default UTF-8)
    #[arg(long, value_name = "CHARSET")]
    pub charset: Option<String>,

    /// JSON compressor config applied before the flags below
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Preserve comments
    #[arg(long, help_heading = "HTML/XML Options")]
    pub preserve_comments: bool,

    /// Preserve multiple spaces
    #[arg(long, help_heading = "HTML Options")]
    pub preserve_multi_spaces: bool,

    /// Remove intertag spaces
    #[arg(long, help_heading = "HTML Options")]
    pub remove_intertag_spaces: bool,

    /// Remove unneeded attribute quotes
    #[arg(long, help_heading = "HTML Options")]
    pub remove_quotes: bool,

    /// Minify script bodies
    #[arg(long, help_heading = "HTML Options")]
    pub compress_js: bool,

    /// Minify style bodies
    #[arg(long, help_heading = "HTML Options")]
    pub compress_css: bool,

    /// Remove <%-- --%> comments
    #[arg(long, help_heading = "JSP Options")]
    pub remove_jsp_comments: bool,

    /// Keep comments marking <html:form> start and end tags
    #[arg(long, help_heading = "JSP Options")]
    pub preserve_struts_comments: bool,

    /// Preserve intertag spaces
    #[arg(long, help_heading = "XML Options")]
    pub preserve_intertag_spaces: bool,

    /// Minify only, do not rename identifiers
    #[arg(long, help_heading = "JavaScript/CSS Options")]
    pub nomunge: bool,

    /// Preserve all semicolons
    #[arg(long, help_heading = "JavaScript/CSS Options")]
    pub preserve_semi: bool,

    /// Disable all micro optimizations
    #[arg(long, help_heading = "JavaScript/CSS Options")]
    pub disable_optimizations: bool,

    /// Insert a line break after the given column. Negative disables
    #[arg(long, value_name = "COLUMN", allow_negative_numbers = true, help_heading = "JavaScript/CSS Options")]
    pub line_break: Option<i64>,
}

impl Cli {
    /// `--type` if given, otherwise detected from the input path. Stdin is HTML.
    pub fn dialect(&self) -> Result<Dialect> {
        if let Some(name) = &self.markup_type {
            return Ok(name.parse()?);
        }
        Ok(self.input.as_deref().map(Dialect::detect).unwrap_or_default())
    }

    /// Apply HTML flags on top of `base`. Flags only ever move a setting away
    /// from its default, so an absent flag leaves `base` alone.
    pub fn html_config(&self, base: HtmlConfig) -> HtmlConfig {
        let mut config = base;
        if self.preserve_comments {
            config.remove_comments = false;
        }
        if self.preserve_multi_spaces {
            config.remove_multi_spaces = false;
        }
        config.remove_intertag_spaces |= self.remove_intertag_spaces;
        config.remove_quotes |= self.remove_quotes;
        config.compress_js |= self.compress_js;
        config.compress_css |= self.compress_css;
        config.remove_template_comments |= self.remove_jsp_comments;
        config.preserve_form_comments |= self.preserve_struts_comments;

        let js = &mut config.minify.js;
        js.no_munge |= self.nomunge;
        js.preserve_all_semicolons |= self.preserve_semi;
        js.disable_optimizations |= self.disable_optimizations;
        if let Some(column) = self.line_break {
            config.minify = config.minify.with_line_break(column);
        }
        config
    }

    /// Apply XML flags on top of `base`.
    pub fn xml_config(&self, base: XmlConfig) -> XmlConfig {
        let mut config = base;
        if self.preserve_comments {
            config.remove_comments = false;
        }
        if self.preserve_intertag_spaces {
            config.remove_intertag_spaces = false;
        }
        config
    }
}
