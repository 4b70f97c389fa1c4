//! Column-based line wrapping for minified output.

/// Insert a newline after each `terminator` reached at or past `column`.
/// Terminators inside string literals are ignored. A column of 0 breaks
/// after every terminator.
pub fn break_lines(code: &str, terminator: char, column: usize) -> String {
    let mut out = String::with_capacity(code.len() + code.len() / column.max(1));
    let mut col = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in code.chars() {
        out.push(c);
        if c == '\n' {
            col = 0;
            continue;
        }
        col += 1;

        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            '"' | '\'' | '`' => quote = Some(c),
            c if c == terminator && col >= column => {
                out.push('\n');
                col = 0;
            }
            _ => {}
        }
    }

    // No break after the final terminator.
    if out.ends_with('\n') && !code.ends_with('\n') {
        out.pop();
    }
    out
}
