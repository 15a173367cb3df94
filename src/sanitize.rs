/// Input Sanitization Module
///
/// This module provides the legacy string-escaping helper used to embed a
/// value into a quoted SQL literal, plus a reserved output-encoding hook.
///
/// Escaping a value and concatenating it into SQL text is a best-effort
/// defense only. It is NOT a substitute for parameter binding; prefer
/// `SqlClient::execute_bound`, which hands values to the server out-of-band,
/// and keep `sanitize_for_literal` for statements that must be assembled as
/// text.

/// Escapes the characters that could terminate or alter a quoted SQL string
/// literal: single quote, double quote, backslash, newline, and carriage
/// return. Each is mapped to its two-character backslash escape sequence;
/// newline and carriage return become the literal sequences `\n` and `\r`,
/// not line breaks.
///
/// Pure and deterministic: the same input always yields the same output,
/// and the output is never shorter than the input.
///
/// # Examples
///
/// ```
/// use sqlrun::sanitize::sanitize_for_literal;
///
/// assert_eq!(sanitize_for_literal("O'Brien"), "O\\'Brien");
/// assert_eq!(sanitize_for_literal("plain text"), "plain text");
/// ```
pub fn sanitize_for_literal(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for ch in data.chars() {
        match ch {
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Identity transformation reserved for future output-encoding logic.
///
/// Data read back from the database passes through here before being handed
/// to a client; today no encoding is applied.
pub fn passthrough_output(data: &str) -> String {
    data.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injection_payload_is_escaped() {
        assert_eq!(
            sanitize_for_literal("user' OR '1'='1"),
            "user\\' OR \\'1\\'=\\'1"
        );
    }

    #[test]
    fn test_newline_becomes_literal_backslash_n() {
        assert_eq!(sanitize_for_literal("O'Brien\n"), "O\\'Brien\\n");
    }

    #[test]
    fn test_carriage_return_and_double_quote() {
        assert_eq!(sanitize_for_literal("a\"b\r"), "a\\\"b\\r");
    }

    #[test]
    fn test_backslash_is_doubled() {
        assert_eq!(sanitize_for_literal("C:\\temp"), "C:\\\\temp");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(sanitize_for_literal("plain text"), "plain text");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize_for_literal(""), "");
    }

    #[test]
    fn test_passthrough_output_is_identity() {
        assert_eq!(passthrough_output("<h1>Title</h1>"), "<h1>Title</h1>");
        assert_eq!(passthrough_output(""), "");
    }
}
