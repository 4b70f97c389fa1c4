use super::*;
use mc_compactor::{HtmlCompressor, MarkupCompressor};
use mc_core::{CompressError, CssMinifyOptions, HtmlConfig, JsMinifyOptions};

use crate::line_break::break_lines;

// ========== Line breaks ==========

#[test]
fn test_break_every_terminator() {
    assert_eq!(break_lines("a;b;c;", ';', 0), "a;\nb;\nc;");
}

#[test]
fn test_break_respects_column() {
    assert_eq!(break_lines("ab;cdefg;h;", ';', 5), "ab;cdefg;\nh;");
}

#[test]
fn test_break_skips_strings() {
    assert_eq!(break_lines("var s='a;b';x;", ';', 0), "var s='a;b';\nx;");
    assert_eq!(break_lines(r#"s="\";";t;"#, ';', 0), "s=\"\\\";\";\nt;");
}

#[test]
fn test_break_css_rules() {
    assert_eq!(break_lines("a{b:c}d{e:f}", '}', 0), "a{b:c}\nd{e:f}");
}

// ========== JavaScript ==========

#[test]
fn test_js_minifies() {
    let input = "var x = 1;\nvar y = 2;\nconsole.log(x + y);\n";
    let out = js::minify(input, false, &JsMinifyOptions::default()).unwrap();
    assert!(out.len() < input.len());
    assert!(out.contains("console"));
    assert!(!out.contains('\n'));
}

#[test]
fn test_js_no_munge_keeps_names() {
    let input = "function outer() {\n  var counter = 0;\n  return counter;\n}\nconsole.log(outer());";
    let options = JsMinifyOptions { no_munge: true, disable_optimizations: true, ..Default::default() };
    let out = js::minify(input, false, &options).unwrap();
    assert!(out.contains("counter"));
    assert!(out.len() < input.len());
}

#[test]
fn test_js_munge_renames_locals() {
    let input = "function outer() {\n  var counter = 0;\n  return counter;\n}\nconsole.log(outer());";
    let options = JsMinifyOptions { disable_optimizations: true, ..Default::default() };
    let out = js::minify(input, false, &options).unwrap();
    assert!(!out.contains("counter"));
}

#[test]
fn test_js_line_break() {
    let input = "var a = 1;\nvar b = 2;\nconsole.log(a, b);";
    let options = JsMinifyOptions {
        line_break: Some(0),
        no_munge: true,
        disable_optimizations: true,
        ..Default::default()
    };
    let out = js::minify(input, false, &options).unwrap();
    assert!(out.lines().count() >= 2, "{out}");
}

#[test]
fn test_js_keeps_top_level_declarations() {
    let out = js::minify("function greet() {\n  alert('hi');\n}\nvar counter = 0;", false, &JsMinifyOptions::default())
        .unwrap();
    assert!(out.contains("function greet("), "{out}");
    assert!(out.contains("counter"), "{out}");
}

#[test]
fn test_js_html_comment_guard() {
    let out = js::minify("\n<!--\nvar x = 010;\n//-->\n", false, &JsMinifyOptions::default()).unwrap();
    assert!(out.contains('x'), "{out}");
}

#[test]
fn test_js_module_goal() {
    let input = "import { a } from './a.js';\nconsole.log(a);";
    let out = js::minify(input, true, &JsMinifyOptions::default()).unwrap();
    assert!(out.contains("import"), "{out}");
    assert!(js::minify(input, false, &JsMinifyOptions::default()).is_err());
}

#[test]
fn test_js_syntax_error() {
    let err = js::minify("var = ;", false, &JsMinifyOptions::default()).unwrap_err();
    assert!(err.to_string().contains("JavaScript parse error"));
}

// ========== CSS ==========

#[test]
fn test_css_minifies() {
    let out = css::minify("body {\n  margin: 0;\n  padding: 0;\n}\n", &CssMinifyOptions::default()).unwrap();
    assert!(out.contains("margin:0"));
    assert!(!out.contains('\n'));
}

#[test]
fn test_css_line_break() {
    let options = CssMinifyOptions { line_break: Some(0) };
    let out = css::minify("a { color: red }\nb { margin: 1px }", &options).unwrap();
    assert_eq!(out.lines().count(), 2, "{out}");
}

// ========== Compressor integration ==========

#[test]
fn test_native_minifier_in_html() {
    let config = HtmlConfig::default().with_compress_js(true).with_compress_css(true);
    let c = HtmlCompressor::new(config).with_minifier(NativeMinifier::new());
    let html = "<div>\n  <script>\n    var  x = 1;\n    console.log(x);\n  </script>\n  <style>\n    p  {  margin: 0;  }\n  </style>\n</div>";
    let out = c.compress(html).unwrap();
    assert!(out.contains("console.log"));
    assert!(out.contains("<style>p{margin:0}</style>"), "{out}");
    assert!(!out.contains("    "));
}

#[test]
fn test_global_function_used_from_markup_survives() {
    let c = HtmlCompressor::new(HtmlConfig::default().with_compress_js(true))
        .with_minifier(NativeMinifier::new());
    let html = "<button onclick=\"greet()\">x</button><script>function greet(){ alert('hi'); }</script>";
    let out = c.compress(html).unwrap();
    assert!(out.starts_with("<button onclick=\"greet()\">x</button><script>"), "{out}");
    assert!(out.contains("function greet("), "{out}");
}

#[test]
fn test_comment_guarded_script_compresses() {
    let c = HtmlCompressor::new(HtmlConfig::default().with_compress_js(true))
        .with_minifier(NativeMinifier::new());
    let out = c.compress("<script>\n<!--\nvar x = 010;\n//-->\n</script>").unwrap();
    assert!(out.starts_with("<script>") && out.ends_with("</script>"), "{out}");
}

#[test]
fn test_module_script_uses_module_goal() {
    let c = HtmlCompressor::new(HtmlConfig::default().with_compress_js(true))
        .with_minifier(NativeMinifier::new());
    let out = c
        .compress("<script type=\"module\">import { a } from './a.js';\nconsole.log(a);</script>")
        .unwrap();
    assert!(out.contains("import"), "{out}");
}

#[test]
fn test_native_minifier_failure_fails_compress() {
    let c = HtmlCompressor::new(HtmlConfig::default().with_compress_js(true))
        .with_minifier(NativeMinifier::new());
    let err = c.compress("<p>ok</p><script>var = ;</script>").unwrap_err();
    assert!(matches!(err, CompressError::Minify { .. }), "{err}");
}

#[test]
fn test_native_minifier_dispatches_by_kind() {
    let m = NativeMinifier::new();
    let options = MinifyOptions::default();
    assert!(m.minify(CodeKind::Style, "a { color: red }", &options).unwrap().starts_with("a{"));
    assert!(m.minify(CodeKind::Script, "console.log( 1 )", &options).unwrap().starts_with("console.log(1)"));
}
