//! Compressor configuration. Read-only for the duration of a `compress` call.

use serde::{Deserialize, Serialize};

/// Tuning knobs for JavaScript minification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsMinifyOptions {
    /// Insert a line break after this column. `None` keeps everything on one line.
    pub line_break: Option<usize>,
    /// Minify only, do not rename local identifiers.
    pub no_munge: bool,
    pub preserve_all_semicolons: bool,
    /// Skip all micro optimizations.
    pub disable_optimizations: bool,
}

/// Tuning knobs for CSS minification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CssMinifyOptions {
    pub line_break: Option<usize>,
}

/// Everything an external minifier is told about a call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifyOptions {
    pub js: JsMinifyOptions,
    pub css: CssMinifyOptions,
}

impl MinifyOptions {
    /// Apply the same line-break column to both JS and CSS output.
    /// Negative values disable line breaks.
    pub fn with_line_break(mut self, column: i64) -> Self {
        let line_break = usize::try_from(column).ok();
        self.js.line_break = line_break;
        self.css.line_break = line_break;
        self
    }
}

/// Configuration for the HTML-family compressor (HTML, JSP).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    /// When false, `compress` returns its input untouched.
    pub enabled: bool,
    pub remove_comments: bool,
    pub remove_multi_spaces: bool,
    pub remove_intertag_spaces: bool,
    pub remove_quotes: bool,
    pub compress_js: bool,
    pub compress_css: bool,
    /// Strip `<%-- --%>` comments too. Needs `remove_comments`.
    pub remove_template_comments: bool,
    /// Keep comments that mark Struts `html:form` boundaries.
    pub preserve_form_comments: bool,
    pub minify: MinifyOptions,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            remove_comments: true,
            remove_multi_spaces: true,
            remove_intertag_spaces: false,
            remove_quotes: false,
            compress_js: false,
            compress_css: false,
            remove_template_comments: false,
            preserve_form_comments: false,
            minify: MinifyOptions::default(),
        }
    }
}

impl HtmlConfig {
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_remove_comments(mut self, remove: bool) -> Self {
        self.remove_comments = remove;
        self
    }

    pub fn with_remove_multi_spaces(mut self, remove: bool) -> Self {
        self.remove_multi_spaces = remove;
        self
    }

    pub fn with_remove_intertag_spaces(mut self, remove: bool) -> Self {
        self.remove_intertag_spaces = remove;
        self
    }

    pub fn with_remove_quotes(mut self, remove: bool) -> Self {
        self.remove_quotes = remove;
        self
    }

    pub fn with_compress_js(mut self, compress: bool) -> Self {
        self.compress_js = compress;
        self
    }

    pub fn with_compress_css(mut self, compress: bool) -> Self {
        self.compress_css = compress;
        self
    }

    pub fn with_remove_template_comments(mut self, remove: bool) -> Self {
        self.remove_template_comments = remove;
        self
    }

    pub fn with_preserve_form_comments(mut self, preserve: bool) -> Self {
        self.preserve_form_comments = preserve;
        self
    }

    pub fn with_minify(mut self, minify: MinifyOptions) -> Self {
        self.minify = minify;
        self
    }

    /// True if any block will be handed to an external minifier.
    pub fn compresses_code(&self) -> bool {
        self.compress_js || self.compress_css
    }
}

/// Configuration for the XML-family compressor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XmlConfig {
    pub enabled: bool,
    pub remove_comments: bool,
    pub remove_intertag_spaces: bool,
}

impl Default for XmlConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            remove_comments: true,
            remove_intertag_spaces: true,
        }
    }
}

impl XmlConfig {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_remove_comments(mut self, remove: bool) -> Self {
        self.remove_comments = remove;
        self
    }

    pub fn with_remove_intertag_spaces(mut self, remove: bool) -> Self {
        self.remove_intertag_spaces = remove;
        self
    }
}
