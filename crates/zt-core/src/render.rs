//! Rendering of values and trace lines for diagnostics.

/// Columns of indentation per nesting level in trace and listing output.
pub const INDENT_WIDTH: usize = 3;

#[must_use]
pub const fn boolean_as_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn quote_rune_inner(out: &mut String, c: i32, quote: char) {
    match u8::try_from(c) {
        Ok(b'\'') if quote == '\'' => out.push_str("\\'"),
        Ok(b'"') if quote == '"' => out.push_str("\\\""),
        Ok(b'\n') => out.push_str("\\n"),
        Ok(b'\r') => out.push_str("\\r"),
        Ok(b'\t') => out.push_str("\\t"),
        Ok(0x0B) => out.push_str("\\v"),
        Ok(0x08) => out.push_str("\\b"),
        Ok(b) if b == b' ' || b.is_ascii_graphic() => out.push(char::from(b)),
        _ => out.push_str(&format!("\\{c:#04x}")),
    }
}

/// Quote a rune with single quotes, escaping as needed.
#[must_use]
pub fn quote_rune(c: i32) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    quote_rune_inner(&mut out, c, '\'');
    out.push('\'');
    out
}

/// Quote a string with double quotes, escaping byte by byte.
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for b in s.bytes() {
        quote_rune_inner(&mut out, i32::from(b), '"');
    }
    out.push('"');
    out
}

/// One line of listing or verbose trace output, without the newline.
///
/// The dash is right-aligned in a field of `INDENT_WIDTH * nesting` columns.
#[must_use]
pub fn trace_line(nesting: usize, name: &str) -> String {
    format!("{:>width$} {name}", '-', width = nesting * INDENT_WIDTH)
}
