//! Shell transforms: comment removal, whitespace collapsing and quote removal.
//!
//! These run only on the shell, after protected blocks have been replaced by
//! placeholder tokens.

use crate::patterns::{
    is_markup_space, RE_COMMENT, RE_FORM_MARKER, RE_INTERTAG, RE_MULTISPACE, RE_TAG_QUOTE,
    RE_TEMPLATE_COMMENT,
};

/// Which shell passes to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOptions {
    pub remove_comments: bool,
    /// Leave `<!--[if ...]>` and `<!--<![endif]-->` markers alone.
    pub keep_conditional_comments: bool,
    pub remove_template_comments: bool,
    pub preserve_form_comments: bool,
    pub remove_intertag_spaces: bool,
    pub remove_multi_spaces: bool,
    pub remove_quotes: bool,
}

fn is_conditional(body: &str) -> bool {
    body.starts_with('[') || body.starts_with("<![")
}

fn is_form_marker(body: &str) -> bool {
    RE_FORM_MARKER.is_match(body)
}

/// Strip `<!-- ... -->` comments.
pub fn remove_comments(shell: &str, keep_conditional: bool, preserve_form: bool) -> String {
    RE_COMMENT
        .replace_all(shell, |caps: &regex::Captures| {
            let body = &caps[1];
            if (keep_conditional && is_conditional(body)) || (preserve_form && is_form_marker(body)) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Strip `<%-- ... --%>` template comments.
pub fn remove_template_comments(shell: &str, preserve_form: bool) -> String {
    RE_TEMPLATE_COMMENT
        .replace_all(shell, |caps: &regex::Captures| {
            if preserve_form && is_form_marker(&caps[1]) {
                caps[0].to_string()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Drop whitespace between `>` and the next `<`.
pub fn remove_intertag_spaces(shell: &str) -> String {
    RE_INTERTAG.replace_all(shell, "><").into_owned()
}

/// Collapse runs of two or more whitespace characters to one space.
pub fn collapse_multi_spaces(shell: &str) -> String {
    RE_MULTISPACE.replace_all(shell, " ").into_owned()
}

/// Is byte offset `pos` inside a tag, outside any quoted attribute value?
fn in_tag_unquoted(shell: &str, pos: usize) -> bool {
    let before = &shell[..pos];
    let Some(open) = before.rfind('<') else { return false };
    if before[open..].contains('>') {
        return false;
    }
    let mut quote: Option<char> = None;
    for c in before[open..].chars() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
    }
    quote.is_none()
}

/// The rest of the tag closes with `>` before any `<` opens.
fn tag_closes(rest: &str) -> bool {
    match rest.find(|c: char| c == '<' || c == '>') {
        Some(i) => rest.as_bytes()[i] == b'>',
        None => false,
    }
}

/// Remove quotes around attribute values made only of letters, digits, `-`
/// and `_`, when the closing quote is followed by whitespace or `>`.
pub fn remove_attribute_quotes(shell: &str) -> String {
    let mut out = String::with_capacity(shell.len());
    let mut last = 0;

    for caps in RE_TAG_QUOTE.captures_iter(shell) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(value) = caps.get(1).or_else(|| caps.get(2)) else { continue };
        let rest = &shell[whole.end()..];
        let followed_ok = rest.starts_with(|c: char| is_markup_space(c) || c == '>');
        if !followed_ok || !tag_closes(rest) || !in_tag_unquoted(shell, whole.start()) {
            continue;
        }
        out.push_str(&shell[last..whole.start()]);
        out.push('=');
        out.push_str(value.as_str());
        last = whole.end();
    }
    out.push_str(&shell[last..]);
    out
}

/// Run the enabled passes in order. Returns the new shell and the names of
/// the passes that ran.
pub fn transform(shell: &str, opts: &ShellOptions) -> (String, Vec<&'static str>) {
    let mut result = shell.to_string();
    let mut passes = Vec::new();

    if opts.remove_comments {
        result = remove_comments(&result, opts.keep_conditional_comments, opts.preserve_form_comments);
        passes.push("comments");
        if opts.remove_template_comments {
            result = remove_template_comments(&result, opts.preserve_form_comments);
            passes.push("template_comments");
        }
    }

    if opts.remove_intertag_spaces {
        result = remove_intertag_spaces(&result);
        passes.push("intertag_spaces");
    }

    if opts.remove_multi_spaces {
        result = collapse_multi_spaces(&result);
        passes.push("multi_spaces");
    }

    if opts.remove_quotes {
        result = remove_attribute_quotes(&result);
        passes.push("quotes");
    }

    (result, passes)
}
