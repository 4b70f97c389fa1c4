use crate::*;
use std::path::Path;

// ========== Category ==========

#[test]
fn test_token_tags_are_uppercase_ascii() {
    for category in Category::ALL {
        let tag = category.token_tag();
        assert!(!tag.is_empty());
        assert!(tag.chars().all(|c| c.is_ascii_uppercase()), "{tag}");
    }
}

#[test]
fn test_token_tags_unique() {
    let tags: std::collections::HashSet<_> = Category::ALL.iter().map(|c| c.token_tag()).collect();
    assert_eq!(tags.len(), Category::ALL.len());
}

#[test]
fn test_from_token_tag_roundtrip() {
    for category in Category::ALL {
        assert_eq!(Category::from_token_tag(category.token_tag()), Some(category));
    }
    assert_eq!(Category::from_token_tag("DIV"), None);
}

#[test]
fn test_code_kind() {
    assert_eq!(Category::Script.code_kind(), Some(CodeKind::Script));
    assert_eq!(Category::Style.code_kind(), Some(CodeKind::Style));
    assert_eq!(Category::Preformatted.code_kind(), None);
    assert_eq!(Category::TemplateRegion.code_kind(), None);
}

// ========== Dialect ==========

#[test]
fn test_dialect_parse() {
    assert_eq!("html".parse::<Dialect>().unwrap(), Dialect::Html);
    assert_eq!("XML".parse::<Dialect>().unwrap(), Dialect::Xml);
    assert!(matches!("json".parse::<Dialect>(), Err(CompressError::UnknownDialect(s)) if s == "json"));
}

#[test]
fn test_dialect_detect() {
    assert_eq!(Dialect::detect(Path::new("feed.xml")), Dialect::Xml);
    assert_eq!(Dialect::detect(Path::new("FEED.XML")), Dialect::Xml);
    assert_eq!(Dialect::detect(Path::new("index.jsp")), Dialect::Html);
    assert_eq!(Dialect::detect(Path::new("README")), Dialect::Html);
    assert_eq!(Dialect::detect(Path::new("trailing.")), Dialect::Html);
}

// ========== Config ==========

#[test]
fn test_html_defaults() {
    let c = HtmlConfig::default();
    assert!(c.enabled);
    assert!(c.remove_comments);
    assert!(c.remove_multi_spaces);
    assert!(!c.remove_intertag_spaces);
    assert!(!c.remove_quotes);
    assert!(!c.compresses_code());
    assert_eq!(c.minify.js.line_break, None);
}

#[test]
fn test_xml_defaults() {
    let c = XmlConfig::default();
    assert!(c.enabled && c.remove_comments && c.remove_intertag_spaces);
}

#[test]
fn test_line_break_negative_disables() {
    let m = MinifyOptions::default().with_line_break(-1);
    assert_eq!(m.js.line_break, None);
    assert_eq!(m.css.line_break, None);
    let m = MinifyOptions::default().with_line_break(80);
    assert_eq!(m.js.line_break, Some(80));
    assert_eq!(m.css.line_break, Some(80));
}

#[test]
fn test_html_config_partial_json() {
    let c: HtmlConfig = serde_json::from_str(r#"{"remove_quotes":true,"minify":{"js":{"no_munge":true}}}"#).unwrap();
    assert!(c.remove_quotes);
    assert!(c.remove_comments);
    assert!(c.minify.js.no_munge);
}

#[test]
fn test_builder_chain() {
    let c = HtmlConfig::default().with_compress_js(true).with_remove_intertag_spaces(true);
    assert!(c.compresses_code());
    assert!(c.remove_intertag_spaces);
    assert!(!HtmlConfig::disabled().enabled);
}

// ========== Errors ==========

#[test]
fn test_error_display() {
    let e = CompressError::minify(CodeKind::Style, "unexpected token");
    assert_eq!(e.to_string(), "CSS minification failed: unexpected token");
    let e = CompressError::PlaceholderOutOfRange { category: Category::Script, index: 3, len: 1 };
    assert!(e.to_string().contains("script#3"));
    let e = CompressError::UnresolvedPlaceholders { count: 2 };
    assert_eq!(e.to_string(), "2 placeholder(s) still unresolved after restoration");
    assert_eq!(CodeKind::Module.to_string(), "JavaScript module");
}
