pub fn sanitize_label(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    let out = trimmed
        .chars()
        .map(|ch| {
            if ch.is_whitespace() || is_disallowed_char(ch) {
                '_'
            } else {
                ch
            }
        })
        .collect();
    Some(out)
}

fn is_disallowed_char(ch: char) -> bool {
    matches!(ch, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        || ch == '\0'
        || ch.is_control()
}
