//! Pattern library: every regex the compressors use, compiled once.

use mc_core::Category;
use regex::Regex;
use std::sync::LazyLock;

/// Prefix and suffix around every placeholder token.
pub const TOKEN_MARKER: &str = "%%%";

static RE_PRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<pre\b[^>]*>.*?</pre>").unwrap());
static RE_TEXTAREA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<textarea\b[^>]*>.*?</textarea>").unwrap());
static RE_SCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b[^>]*>.*?</script>").unwrap());
static RE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>.*?</style>").unwrap());
// `<%=`, `<%@` and `<%--` are expressions, directives and comments, not regions.
static RE_TEMPLATE_REGION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<%[^-=@].+?%>").unwrap());
static RE_CDATA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!\[CDATA\[.*?\]\]>").unwrap());

/// Splits an extracted block into opening tag, body and closing tag.
pub static RE_TAG_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A(<[^>]*>)(.*)(</[^>]*>)\z").unwrap());

/// `<!-- ... -->`; group 1 is the comment body.
pub static RE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--(.*?)-->").unwrap());
/// `<%-- ... --%>`; group 1 is the comment body.
pub static RE_TEMPLATE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<%--(.*?)--%>").unwrap());
pub static RE_FORM_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\A[ \t\n\x0B\f\r]*/?html:form\b").unwrap());

/// `type="module"` (any quoting) inside a `<script>` opening tag.
pub static RE_MODULE_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)[ \t\n\x0B\f\r]type[ \t\n\x0B\f\r]*=[ \t\n\x0B\f\r]*["']?module\b"#).unwrap()
});

// Whitespace classes are ASCII only: U+00A0 and friends are content.
pub static RE_INTERTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">[ \t\n\x0B\f\r]+<").unwrap());
pub static RE_MULTISPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\x0B\f\r]{2,}").unwrap());
/// `= "value"` with a value made of ASCII letters, digits, `-` and `_` only.
pub static RE_TAG_QUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[ \t\n\x0B\f\r]*=[ \t\n\x0B\f\r]*(?:"([A-Za-z0-9_-]+)"|'([A-Za-z0-9_-]+)')"#).unwrap()
});

/// ASCII whitespace as the shell passes understand it.
pub fn is_markup_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Any placeholder token; group 1 is the category tag, group 2 the index.
pub static RE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%%COMPRESS~([A-Z]+)~([0-9]+)%%%").unwrap());

/// The detector for a protected category's full tag pair.
pub fn block_pattern(category: Category) -> &'static Regex {
    match category {
        Category::Preformatted => &RE_PRE,
        Category::Textarea => &RE_TEXTAREA,
        Category::Script => &RE_SCRIPT,
        Category::Style => &RE_STYLE,
        Category::TemplateRegion => &RE_TEMPLATE_REGION,
        Category::Cdata => &RE_CDATA,
    }
}

/// Placeholder token for block `index` of `category`.
///
/// The alphabet (`%`, `~`, uppercase ASCII, digits) contains no whitespace,
/// quotes, `=`, `<` or `>`, so no shell pass can alter a token.
pub fn placeholder(category: Category, index: usize) -> String {
    format!("{TOKEN_MARKER}COMPRESS~{}~{index}{TOKEN_MARKER}", category.token_tag())
}
