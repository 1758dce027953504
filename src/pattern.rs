use crate::error::PatternError;
use crate::escape::{escape_delimiter, escape_literal};
use crate::parse::parse;
use crate::token::{Param, Token};

use fancy_regex::Regex;
use log::debug;

/// Options controlling how a pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Require the match to consume through the end of the input. When
    /// false the compiled pattern instead requires the match to stop at a
    /// `/` boundary or the end of the input.
    pub end: bool,
    /// Require exact trailing-slash fidelity. When false a single trailing
    /// slash is tolerated whether or not the pattern author wrote one.
    pub strict: bool,
    /// Match literal text case-sensitively. This is applied when the
    /// pattern is handed to the regex engine, not baked into the pattern
    /// source.
    pub sensitive: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            end: true,
            strict: false,
            sensitive: false,
        }
    }
}

/// Anything that can be compiled into a matching pattern: an Express-style
/// pattern string, a pre-built regex used as-is, or a list of either whose
/// compiled forms are joined as alternatives in order.
#[derive(Debug)]
pub enum Path {
    /// An Express-style pattern string.
    Pattern(String),
    /// A native regular expression, passed through unchanged. Its capture
    /// groups are preserved positionally but carry no prefix, delimiter,
    /// or sub-pattern metadata.
    Regex(Regex),
    /// A mixed list compiled to a non-capturing alternation. The first
    /// alternative that matches wins.
    List(Vec<Path>),
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::Pattern(path.to_owned())
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path::Pattern(path)
    }
}

impl From<Regex> for Path {
    fn from(regex: Regex) -> Self {
        Path::Regex(regex)
    }
}

impl<T: Into<Path>> From<Vec<T>> for Path {
    fn from(paths: Vec<T>) -> Self {
        Path::List(paths.into_iter().map(Into::into).collect())
    }
}

// A compiled pattern source together with its parameter list, one entry
// per capture group in group order.
pub(crate) struct Compiled {
    pub(crate) source: String,
    pub(crate) keys: Vec<Param>,
}

/// Compiles a token sequence into a regex source, anchored at the start.
///
/// ```
/// use routex::{parse, tokens_to_pattern, Options};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tokens = parse("/user/:id")?;
/// let pattern = tokens_to_pattern(&tokens, &Options::default());
///
/// assert_eq!(pattern, "^/user/(?P<id>[^/]+?)(?:/(?=$))?$");
/// # Ok(())
/// # }
/// ```
pub fn tokens_to_pattern(tokens: &[Token], options: &Options) -> String {
    let mut route = String::new();
    let ends_with_slash =
        matches!(tokens.last(), Some(Token::Literal(text)) if text.ends_with('/'));

    for token in tokens {
        match token {
            Token::Literal(text) => route.push_str(&escape_literal(text)),
            Token::Param(param) => param_group(&mut route, param),
        }
    }

    if !options.strict {
        if ends_with_slash {
            route.pop();
        }
        // Tolerate one optional trailing slash, written or not.
        route.push_str("(?:/(?=$))?");
    }

    if options.end {
        route.push('$');
    } else if !(options.strict && ends_with_slash) {
        // An explicit trailing delimiter under strict already enforces the
        // boundary; otherwise the match must stop at `/` or end-of-input.
        route.push_str("(?=/|$)");
    }

    format!("^{route}")
}

fn param_group(route: &mut String, param: &Param) {
    let prefix = param.prefix.map(escape_delimiter).unwrap_or_default();
    let pattern = param.pattern.as_deref().unwrap_or_default();
    let name = if param.named() {
        format!("?P<{}>", param.name)
    } else {
        String::new()
    };

    let mut body = pattern.to_string();
    if param.repeat {
        // Repetitions after the first keep their delimiter and are absorbed
        // into the same capture span.
        body.push_str(&format!("(?:{prefix}{pattern})*"));
    }

    if param.optional {
        route.push_str(&format!("(?:{prefix}({name}{body}))?"));
    } else {
        route.push_str(&format!("{prefix}({name}{body})"));
    }
}

/// Compiles any [`Path`] form into a regex source.
///
/// Strings are parsed and compiled with the given options; native regexes
/// pass through unchanged (options do not apply to them); lists compile
/// each element and join the results as `(?:a|b|...)`.
///
/// ```
/// use routex::{pattern, Options};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let source = pattern(vec!["/one", "/two"], &Options::default())?;
///
/// assert_eq!(source, "(?:^/one(?:/(?=$))?$|^/two(?:/(?=$))?$)");
/// # Ok(())
/// # }
/// ```
pub fn pattern(path: impl Into<Path>, options: &Options) -> Result<String, PatternError> {
    let path = path.into();
    let compiled = compile_path(&path, options)?;
    debug!("compiled {:?} into {:?}", path, compiled.source);
    Ok(compiled.source)
}

pub(crate) fn compile_path(path: &Path, options: &Options) -> Result<Compiled, PatternError> {
    match path {
        Path::Pattern(path) => {
            let tokens = parse(path)?;
            let keys = tokens.iter().filter_map(Token::as_param).cloned().collect();
            Ok(Compiled {
                source: tokens_to_pattern(&tokens, options),
                keys,
            })
        }
        Path::Regex(regex) => {
            let source = regex.as_str().to_owned();
            let keys = passthrough_keys(&source);
            Ok(Compiled { source, keys })
        }
        Path::List(paths) => {
            let mut parts = Vec::with_capacity(paths.len());
            let mut keys = Vec::new();
            for path in paths {
                let compiled = compile_path(path, options)?;
                parts.push(compiled.source);
                keys.extend(compiled.keys);
            }
            Ok(Compiled {
                source: format!("(?:{})", parts.join("|")),
                keys,
            })
        }
    }
}

// Lifts the capture groups of a native regex into parameter tokens. The
// groups are named by their 0-based index within this regex; prefix,
// delimiter, and sub-pattern stay unset since the source carries no
// structure to recover them from.
fn passthrough_keys(source: &str) -> Vec<Param> {
    let chars: Vec<char> = source.chars().collect();
    let mut keys = Vec::new();
    let mut in_class = false;

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 1,
            '[' if !in_class => in_class = true,
            ']' if in_class => in_class = false,
            '(' if !in_class && is_capturing(&chars, i) => {
                keys.push(Param {
                    name: keys.len().to_string(),
                    prefix: None,
                    delimiter: None,
                    optional: false,
                    repeat: false,
                    pattern: None,
                });
            }
            _ => {}
        }
        i += 1;
    }
    keys
}

// `(` opens a capture group unless followed by `?`, except for the named
// forms `(?P<...>` and `(?<...>` (but not the lookbehinds `(?<=`/`(?<!`).
fn is_capturing(chars: &[char], open: usize) -> bool {
    if chars.get(open + 1) != Some(&'?') {
        return true;
    }
    match chars.get(open + 2) {
        Some('P') => chars.get(open + 3) == Some(&'<'),
        Some('<') => !matches!(chars.get(open + 3), Some('=') | Some('!')),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_group_counting() {
        assert_eq!(passthrough_keys("(.*)").len(), 1);
        assert_eq!(passthrough_keys("(?:.*)").len(), 0);
        assert_eq!(passthrough_keys("\\((.*)\\)").len(), 1);
        assert_eq!(passthrough_keys("[(](.*)").len(), 1);
        assert_eq!(passthrough_keys("(?P<a>x)(y)").len(), 2);
        assert_eq!(passthrough_keys("(?=x)(y)").len(), 1);
    }
}
