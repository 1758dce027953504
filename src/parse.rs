use crate::error::ParseError;
use crate::escape::escape_group;
use crate::token::{Param, Token};

use log::trace;

/// Parses a route pattern into its token sequence.
///
/// The grammar, scanned left to right with the longest match winning:
///
/// - `\x` emits `x` literally and drops the backslash. This is the only way
///   to include a syntax character (`:`, `(`, `*`) as literal text.
/// - `:name`, optionally followed by a parenthesized custom capture and a
///   `+`/`*`/`?` suffix, is a named parameter.
/// - A bare parenthesized capture (with optional suffix) is an unnamed
///   parameter; unnamed parameters and wildcards are named by a zero-based
///   counter in order of appearance.
/// - `*` is a wildcard: an unnamed parameter matching anything, delimiters
///   included. Suffixes do not apply to it.
/// - Everything else accumulates into literal text. A single `/` or `.`
///   immediately before a parameter is consumed as that parameter's prefix.
///
/// ```
/// use routex::{parse, Token};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tokens = parse("/user/:id")?;
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0], Token::Literal("/user".into()));
/// assert_eq!(tokens[1].as_param().unwrap().name, "id");
/// # Ok(())
/// # }
/// ```
///
/// Malformed captures (unclosed, nested, or empty parentheses) are
/// reported here rather than surfacing as regex errors later.
pub fn parse(path: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = path.chars().collect();

    let mut tokens = Vec::new();
    let mut literal = String::new();
    // Set when the last character pushed onto `literal` is a plain `/` or
    // `.` that a following parameter may claim as its prefix. Escaped
    // delimiters never qualify.
    let mut prefix_ready = false;
    let mut next_ordinal = 0usize;

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                let c = *chars
                    .get(i + 1)
                    .ok_or(ParseError::DanglingEscape { at: i })?;
                literal.push(c);
                prefix_ready = false;
                i += 2;
            }
            ':' if chars.get(i + 1).is_some_and(|&c| is_word(c)) => {
                let mut j = i + 1;
                while j < chars.len() && is_word(chars[j]) {
                    j += 1;
                }
                let name: String = chars[i + 1..j].iter().collect();

                let capture = if chars.get(j) == Some(&'(') {
                    let (body, end) = scan_capture(&chars, j)?;
                    j = end;
                    Some(body)
                } else {
                    None
                };
                let suffix = scan_suffix(&chars, &mut j);

                emit_param(
                    &mut tokens,
                    &mut literal,
                    &mut prefix_ready,
                    name,
                    Body::Capture(capture),
                    suffix,
                );
                i = j;
            }
            '(' => {
                let (body, mut j) = scan_capture(&chars, i)?;
                let suffix = scan_suffix(&chars, &mut j);

                let name = next_ordinal.to_string();
                next_ordinal += 1;
                emit_param(
                    &mut tokens,
                    &mut literal,
                    &mut prefix_ready,
                    name,
                    Body::Capture(Some(body)),
                    suffix,
                );
                i = j;
            }
            '*' => {
                let name = next_ordinal.to_string();
                next_ordinal += 1;
                emit_param(
                    &mut tokens,
                    &mut literal,
                    &mut prefix_ready,
                    name,
                    Body::Wildcard,
                    None,
                );
                i += 1;
            }
            c => {
                literal.push(c);
                prefix_ready = c == '/' || c == '.';
                i += 1;
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    trace!("parsed {:?} into {} tokens", path, tokens.len());
    Ok(tokens)
}

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

// What the parameter matches: a custom capture body (or the default
// "anything but the delimiter" when absent), or the wildcard catch-all.
enum Body {
    Capture(Option<String>),
    Wildcard,
}

fn emit_param(
    tokens: &mut Vec<Token>,
    literal: &mut String,
    prefix_ready: &mut bool,
    name: String,
    body: Body,
    suffix: Option<char>,
) {
    let prefix = if *prefix_ready {
        *prefix_ready = false;
        literal.pop()
    } else {
        None
    };

    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }

    let delimiter = prefix.unwrap_or('/');
    let repeat = matches!(suffix, Some('+' | '*'));
    let optional = matches!(suffix, Some('?' | '*'));
    let pattern = match body {
        Body::Capture(Some(capture)) => escape_group(&capture),
        Body::Capture(None) => format!("[^{delimiter}]+?"),
        Body::Wildcard => ".*".to_string(),
    };

    tokens.push(Token::Param(Param {
        name,
        prefix,
        delimiter: Some(delimiter),
        optional,
        repeat,
        pattern: Some(pattern),
    }));
}

// Scans a parenthesized capture starting at `start` (an opening
// parenthesis). The body keeps escape sequences verbatim; unescaped
// parentheses inside it are malformed.
fn scan_capture(chars: &[char], start: usize) -> Result<(String, usize), ParseError> {
    let mut body = String::new();
    let mut j = start + 1;
    loop {
        match chars.get(j) {
            None => return Err(ParseError::UnclosedCapture { start }),
            Some('\\') => {
                let c = *chars
                    .get(j + 1)
                    .ok_or(ParseError::DanglingEscape { at: j })?;
                body.push('\\');
                body.push(c);
                j += 2;
            }
            Some(')') => {
                if body.is_empty() {
                    return Err(ParseError::EmptyCapture { start });
                }
                return Ok((body, j + 1));
            }
            Some('(') => return Err(ParseError::CaptureInCapture { start, at: j }),
            Some(&c) => {
                body.push(c);
                j += 1;
            }
        }
    }
}

fn scan_suffix(chars: &[char], j: &mut usize) -> Option<char> {
    match chars.get(*j).copied() {
        Some(c @ ('+' | '*' | '?')) => {
            *j += 1;
            Some(c)
        }
        _ => None,
    }
}
