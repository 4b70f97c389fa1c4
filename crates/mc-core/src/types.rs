use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::CompressError;

/// A class of tag body whose content must survive shell transforms verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// `<pre>...</pre>`
    Preformatted,
    /// `<textarea>...</textarea>`
    Textarea,
    /// `<script>...</script>`
    Script,
    /// `<style>...</style>`
    Style,
    /// Template directives such as `<% ... %>`.
    TemplateRegion,
    /// `<![CDATA[...]]>` sections (XML only).
    Cdata,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Preformatted,
        Self::Textarea,
        Self::Script,
        Self::Style,
        Self::TemplateRegion,
        Self::Cdata,
    ];

    /// Tag used inside placeholder tokens. Uppercase ASCII only.
    pub fn token_tag(&self) -> &'static str {
        match self {
            Self::Preformatted => "PRE",
            Self::Textarea => "TEXTAREA",
            Self::Script => "SCRIPT",
            Self::Style => "STYLE",
            Self::TemplateRegion => "JSP",
            Self::Cdata => "CDATA",
        }
    }

    pub fn from_token_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token_tag() == tag)
    }

    /// The code kind an external minifier handles for this category, if any.
    pub fn code_kind(&self) -> Option<CodeKind> {
        match self {
            Self::Script => Some(CodeKind::Script),
            Self::Style => Some(CodeKind::Style),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Preformatted => "preformatted",
            Self::Textarea => "textarea",
            Self::Script => "script",
            Self::Style => "style",
            Self::TemplateRegion => "template-region",
            Self::Cdata => "cdata",
        };
        f.write_str(name)
    }
}

/// Payload kind handed to an external code minifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    /// Classic `<script>`: top-level declarations are page globals.
    Script,
    /// `<script type="module">`.
    Module,
    Style,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script => f.write_str("JavaScript"),
            Self::Module => f.write_str("JavaScript module"),
            Self::Style => f.write_str("CSS"),
        }
    }
}

/// Markup dialect, selecting which compressor variant runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Html,
    Xml,
}

impl Dialect {
    /// Guess the dialect from a file extension. Anything but `.xml` is HTML.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xml") => Self::Xml,
            _ => Self::Html,
        }
    }
}

impl FromStr for Dialect {
    type Err = CompressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("html") {
            Ok(Self::Html)
        } else if s.eq_ignore_ascii_case("xml") {
            Ok(Self::Xml)
        } else {
            Err(CompressError::UnknownDialect(s.to_string()))
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => f.write_str("html"),
            Self::Xml => f.write_str("xml"),
        }
    }
}
