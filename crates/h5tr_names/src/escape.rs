use std::fmt::Write;

/// Escapes `literal` for use between the double quotes of a C++ string
/// literal.
///
/// Backslash, double quote, newline, carriage return and tab get their usual
/// short escapes. Any other ASCII control character becomes a three-digit
/// octal escape. Everything else, non-ASCII included, is kept verbatim.
pub fn escape(literal: &str) -> String {
    let mut out = String::with_capacity(literal.len());
    for c in literal.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                // Writing into a `String` cannot fail.
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
