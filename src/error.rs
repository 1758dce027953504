use thiserror::Error;

/// Errors raised while tokenizing a route pattern.
///
/// Positions are character offsets into the pattern string. Malformed
/// syntax fails here, at parse time, never later at match or build time.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A backslash with nothing left to escape.
    #[error("dangling escape at position {at}")]
    DanglingEscape {
        /// Position of the backslash.
        at: usize,
    },
    /// A custom capture was opened but never closed.
    #[error("unclosed capture group starting at position {start}")]
    UnclosedCapture {
        /// Position of the opening parenthesis.
        start: usize,
    },
    /// An unescaped `(` inside a custom capture body. Nested groups are not
    /// part of the capture grammar; escape the parenthesis to match it
    /// literally.
    #[error("capture group at position {start} contains an unescaped '(' at position {at}")]
    CaptureInCapture {
        /// Position of the opening parenthesis of the capture.
        start: usize,
        /// Position of the offending inner parenthesis.
        at: usize,
    },
    /// A capture with an empty body, `()`.
    #[error("empty capture group at position {start}")]
    EmptyCapture {
        /// Position of the opening parenthesis.
        start: usize,
    },
}

/// Errors raised while compiling a pattern, a matcher, or a path builder.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PatternError {
    /// The route pattern itself is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The compiled pattern was rejected by the regex engine. Reachable
    /// only through custom captures carrying invalid regex syntax.
    #[error("compiled pattern is not a valid regular expression: {0}")]
    Regex(#[from] fancy_regex::Error),
    /// A parameter sub-pattern was rejected when compiling its builder-side
    /// validator.
    #[error("parameter pattern is not a valid regular expression: {0}")]
    Validator(#[from] regex::Error),
}

/// Errors raised while substituting parameter values into a path.
///
/// Every variant aborts the build at the offending parameter; no partial
/// path is returned.
///
/// ```
/// use routex::{compile, BuildError};
/// use std::collections::HashMap;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let builder = compile("/a/:b/c")?;
///
/// assert_eq!(
///     builder.render(&HashMap::new()),
///     Err(BuildError::MissingParameter { name: "b".into() }),
/// );
/// # Ok(())
/// # }
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required parameter is absent from the value mapping.
    #[error("expected {name:?} to be defined")]
    MissingParameter {
        /// Name of the missing parameter.
        name: String,
    },
    /// A list of values was supplied for a parameter that does not repeat.
    #[error("expected {name:?} to not repeat")]
    NotRepeatable {
        /// Name of the parameter.
        name: String,
    },
    /// An empty list was supplied for a required repeating parameter.
    #[error("expected {name:?} to not be empty")]
    EmptyRepeatedValue {
        /// Name of the parameter.
        name: String,
    },
    /// At least one element of a repeated value fails pattern validation.
    #[error("expected all {name:?} to match {pattern:?}")]
    RepeatedValueMismatch {
        /// Name of the parameter.
        name: String,
        /// The sub-pattern the elements must match in full.
        pattern: String,
    },
    /// A scalar value fails pattern validation.
    #[error("expected {name:?} to match {pattern:?}")]
    ValueMismatch {
        /// Name of the parameter.
        name: String,
        /// The sub-pattern the value must match in full.
        pattern: String,
    },
}
