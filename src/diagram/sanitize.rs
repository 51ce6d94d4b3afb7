/// Escapes free text so it can sit inside a quoted node label or a `%%` comment.
///
/// Backslashes are doubled, newlines collapse to a single space, square
/// brackets become parentheses, angle brackets and double quotes become
/// entities, and the result is trimmed. The mapping is done in one pass over
/// the input, so no substitution is ever applied to the output of another
/// (the backslashes added by escaping are never escaped again).
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => {
                // \r\n is one line break
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            '[' => out.push('('),
            ']' => out.push(')'),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("#quot;"),
            other => out.push(other),
        }
    }

    out.trim().to_string()
}

/// True if `id` can be used verbatim as a node or subgraph name.
pub fn is_markup_identifier(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
