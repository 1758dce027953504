//! Express-style route patterns compiled to regular expressions and path
//! builders.
//!
//! A pattern such as `/user/:id` is parsed once into a token sequence, and
//! the tokens feed two independent consumers: a pattern compiler producing
//! a regex that matches incoming paths, and a builder compiler producing a
//! function that substitutes parameter values back into a concrete path.
//! Routers use both sides of the pipeline to match requests and generate
//! links from the same route definition.
//!
//! ```
//! use routex::{compile, match_path, Options, Value};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Match an incoming path...
//! let matched = match_path("/user/:id", "/user/123", &Options::default())?.unwrap();
//! assert_eq!(matched.get("id"), Some("123"));
//!
//! // ...and build an outgoing link from the same pattern.
//! let builder = compile("/user/:id")?;
//! let values = HashMap::from([("id".to_string(), Value::from(42))]);
//! assert_eq!(builder.render(&values)?, "/user/42");
//! # Ok(())
//! # }
//! ```
//!
//! # Pattern syntax
//!
//! - `:name` — named parameter, one path segment (`[^/]+?`).
//! - `:name(\d+)` — named parameter with a custom sub-pattern.
//! - `(\d+)` — unnamed parameter, addressed by its zero-based ordinal.
//! - `*` — wildcard matching anything, delimiters included.
//! - `?` / `+` / `*` suffixes — optional, repeating, or both.
//! - `\(` — backslash-escape to match a syntax character literally.
//!
//! Patterns may also be supplied as pre-built [`fancy_regex::Regex`]
//! values (used as-is) or as lists mixing both forms, matched as ordered
//! alternatives.
//!
//! Matching delegates to the `fancy-regex` engine: the compiled patterns
//! use lookahead for their boundary checks, which the backtracking engine
//! supports natively.

#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod build;
mod error;
mod escape;
mod matcher;
mod parse;
mod pattern;
mod token;

pub use build::{compile, tokens_to_builder, PathBuilder, Value};
pub use error::{BuildError, ParseError, PatternError};
pub use matcher::{match_path, PathMatch};
pub use parse::parse;
pub use pattern::{pattern, tokens_to_pattern, Options, Path};
pub use token::{Param, Token};
