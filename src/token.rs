/// A single piece of a parsed route pattern.
///
/// A pattern like `/user/:id` parses into a literal token `/user` followed
/// by a parameter token named `id`. The same token sequence feeds both the
/// pattern compiler and the path builder; tokens are never mutated after
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of literal text, stored unescaped. Regex metacharacters are
    /// escaped only when the token is compiled into a pattern.
    Literal(String),
    /// A parameter descriptor.
    Param(Param),
}

impl Token {
    /// Returns the parameter descriptor if this is a parameter token.
    pub fn as_param(&self) -> Option<&Param> {
        match self {
            Token::Param(param) => Some(param),
            Token::Literal(_) => None,
        }
    }
}

/// A parameter parsed out of a route pattern.
///
/// ```
/// use routex::{parse, Token};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tokens = parse("/user/:id(\\d+)?")?;
/// let param = tokens[1].as_param().unwrap();
///
/// assert_eq!(param.name, "id");
/// assert_eq!(param.prefix, Some('/'));
/// assert_eq!(param.pattern.as_deref(), Some("\\d+"));
/// assert!(param.optional);
/// assert!(!param.repeat);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The `:name` identifier, or a zero-based ordinal rendered in decimal
    /// ("0", "1", ...) assigned left to right to unnamed groups and
    /// wildcards.
    pub name: String,
    /// The single delimiter character (`/` or `.`) consumed from the text
    /// immediately before the parameter, if any.
    pub prefix: Option<char>,
    /// The character joining repeated occurrences. Defaults to `/` when the
    /// parameter has no prefix. `None` only for capture groups lifted out
    /// of a native regex, which carry no structure to introspect.
    pub delimiter: Option<char>,
    /// The parameter may be absent entirely.
    pub optional: bool,
    /// The parameter may capture or produce several delimiter-joined
    /// occurrences.
    pub repeat: bool,
    /// The sub-pattern one occurrence must match, with the characters
    /// `= ! : $ ( )` backslash-escaped. `None` only for native-regex
    /// capture groups.
    pub pattern: Option<String>,
}

impl Param {
    // Purely numeric ordinals stay positional: most regex dialects reject
    // group names that start with a digit.
    pub(crate) fn named(&self) -> bool {
        self.name.chars().any(|c| c.is_ascii_alphabetic())
    }
}
