use crate::error::{BuildError, PatternError};
use crate::parse::parse;
use crate::token::{Param, Token};

use std::collections::HashMap;

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

// Repeated-occurrence encoding: everything except alphanumerics and
// `-` `_` `.` is escaped.
const SEGMENT_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.');

// Scalar-value encoding additionally leaves `!` `~` `*` `'` `(` `)`
// readable. `/` still encodes to `%2F`.
const VALUE_ENCODE: &AsciiSet = &SEGMENT_ENCODE
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A parameter value supplied to a [`PathBuilder`].
///
/// Absence is modeled by leaving the key out of the map. Numbers convert
/// to their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single occurrence.
    Scalar(String),
    /// Multiple occurrences for a repeating parameter.
    List(Vec<String>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(value)
    }
}

impl From<Vec<&str>> for Value {
    fn from(values: Vec<&str>) -> Self {
        Value::List(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

macro_rules! value_from_int {
    ($($int:ty),*) => {$(
        impl From<$int> for Value {
            fn from(value: $int) -> Self {
                Value::Scalar(value.to_string())
            }
        }

        impl From<Vec<$int>> for Value {
            fn from(values: Vec<$int>) -> Self {
                Value::List(values.into_iter().map(|v| v.to_string()).collect())
            }
        }
    )*};
}

value_from_int!(i32, i64, u32, u64);

enum Segment {
    Literal(String),
    Param {
        param: Param,
        // Full-string validator for one occurrence; absent only for
        // native-regex passthrough params, which carry no sub-pattern.
        validator: Option<Regex>,
    },
}

/// A reusable path-building function compiled from a token sequence.
///
/// ```
/// use routex::{compile, Value};
/// use std::collections::HashMap;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let builder = compile("/user/:id")?;
/// let values = HashMap::from([("id".to_string(), Value::from(123))]);
///
/// assert_eq!(builder.render(&values)?, "/user/123");
/// # Ok(())
/// # }
/// ```
pub struct PathBuilder {
    segments: Vec<Segment>,
}

/// Compiles a token sequence into a [`PathBuilder`].
///
/// Each parameter's sub-pattern is compiled into a full-string validator
/// here, eagerly: an invalid sub-pattern fails compilation rather than a
/// later [`render`](PathBuilder::render) call.
pub fn tokens_to_builder(tokens: &[Token]) -> Result<PathBuilder, PatternError> {
    let segments = tokens
        .iter()
        .map(|token| match token {
            Token::Literal(text) => Ok(Segment::Literal(text.clone())),
            Token::Param(param) => {
                let validator = param
                    .pattern
                    .as_deref()
                    .map(|pattern| Regex::new(&format!("^(?:{pattern})$")))
                    .transpose()?;
                Ok(Segment::Param {
                    param: param.clone(),
                    validator,
                })
            }
        })
        .collect::<Result<Vec<_>, PatternError>>()?;

    Ok(PathBuilder { segments })
}

/// Parses a pattern and compiles it into a [`PathBuilder`] in one step.
pub fn compile(path: &str) -> Result<PathBuilder, PatternError> {
    let builder = tokens_to_builder(&parse(path)?)?;
    debug!("compiled {:?} into a path builder", path);
    Ok(builder)
}

impl PathBuilder {
    /// Substitutes parameter values into the pattern, producing a concrete
    /// path.
    ///
    /// Values are validated against each parameter's sub-pattern (the
    /// entire value must match) and percent-encoded. Optional parameters
    /// may be left out of the map; extra entries are ignored.
    pub fn render(&self, values: &HashMap<String, Value>) -> Result<String, BuildError> {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param { param, validator } => {
                    render_param(&mut path, param, validator.as_ref(), values)?;
                }
            }
        }
        Ok(path)
    }
}

fn render_param(
    path: &mut String,
    param: &Param,
    validator: Option<&Regex>,
    values: &HashMap<String, Value>,
) -> Result<(), BuildError> {
    let value = match values.get(&param.name) {
        Some(value) => value,
        None if param.optional => return Ok(()),
        None => {
            return Err(BuildError::MissingParameter {
                name: param.name.clone(),
            })
        }
    };

    match value {
        Value::List(items) => {
            if !param.repeat {
                return Err(BuildError::NotRepeatable {
                    name: param.name.clone(),
                });
            }
            if items.is_empty() {
                if param.optional {
                    return Ok(());
                }
                return Err(BuildError::EmptyRepeatedValue {
                    name: param.name.clone(),
                });
            }

            for (i, item) in items.iter().enumerate() {
                if !accepts(validator, item) {
                    return Err(BuildError::RepeatedValueMismatch {
                        name: param.name.clone(),
                        pattern: param.pattern.clone().unwrap_or_default(),
                    });
                }

                let separator = if i == 0 { param.prefix } else { param.delimiter };
                if let Some(c) = separator {
                    path.push(c);
                }
                path.push_str(&utf8_percent_encode(item, SEGMENT_ENCODE).to_string());
            }
        }
        Value::Scalar(value) => {
            if !accepts(validator, value) {
                return Err(BuildError::ValueMismatch {
                    name: param.name.clone(),
                    pattern: param.pattern.clone().unwrap_or_default(),
                });
            }

            if let Some(c) = param.prefix {
                path.push(c);
            }
            path.push_str(&utf8_percent_encode(value, VALUE_ENCODE).to_string());
        }
    }

    Ok(())
}

// Passthrough params have no sub-pattern and accept anything.
fn accepts(validator: Option<&Regex>, value: &str) -> bool {
    match validator {
        Some(re) => re.is_match(value),
        None => true,
    }
}
