// Regex-metacharacter escaping shared by the tokenizer and the pattern
// compiler. `/` is deliberately not escaped: it has no meaning in the
// regex dialect and keeping it bare keeps compiled patterns readable.

fn is_meta(c: char) -> bool {
    matches!(
        c,
        '.' | '+' | '*' | '?' | '=' | '^' | '!' | ':' | '$' | '{' | '}' | '(' | ')' | '[' | ']'
            | '|'
    )
}

/// Escapes literal text for insertion into a pattern so it matches itself
/// exactly.
pub(crate) fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if is_meta(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escapes a single delimiter character (a parameter prefix).
pub(crate) fn escape_delimiter(c: char) -> String {
    if is_meta(c) {
        format!("\\{c}")
    } else {
        c.to_string()
    }
}

/// Escapes the characters that are meaningful in the host regex dialect but
/// may appear literally in a custom capture body.
pub(crate) fn escape_group(group: &str) -> String {
    let mut out = String::with_capacity(group.len());
    for c in group.chars() {
        if matches!(c, '=' | '!' | ':' | '$' | '(' | ')') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_metacharacters() {
        assert_eq!(escape_literal("/test"), "/test");
        assert_eq!(escape_literal("/test.json"), "/test\\.json");
        assert_eq!(
            escape_literal(".+*?=^!:${}()[]|"),
            "\\.\\+\\*\\?\\=\\^\\!\\:\\$\\{\\}\\(\\)\\[\\]\\|"
        );
    }

    #[test]
    fn delimiters() {
        assert_eq!(escape_delimiter('/'), "/");
        assert_eq!(escape_delimiter('.'), "\\.");
    }

    #[test]
    fn group_escapes_only_the_small_set() {
        assert_eq!(escape_group("\\d+"), "\\d+");
        assert_eq!(escape_group("a=b:c"), "a\\=b\\:c");
        assert_eq!(escape_group("[a-z]+"), "[a-z]+");
    }
}
