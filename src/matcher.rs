use crate::error::PatternError;
use crate::pattern::{compile_path, Options, Path};
use crate::token::Param;

use std::fmt;

use fancy_regex::RegexBuilder;
use log::trace;

/// A successful match of a candidate path against a pattern.
///
/// Borrows from the candidate string.
///
/// ```
/// use routex::{match_path, Options};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let matched = match_path("/:foo/:bar", "/something/another", &Options::default())?
///     .expect("should match");
///
/// assert_eq!(matched.full(), "/something/another");
/// assert_eq!(matched.get("foo"), Some("something"));
/// assert_eq!(matched.get("bar"), Some("another"));
/// # Ok(())
/// # }
/// ```
pub struct PathMatch<'p> {
    full: &'p str,
    params: Vec<(Param, Option<&'p str>)>,
}

impl<'p> PathMatch<'p> {
    /// The entire matched text. A prefix of the candidate when matching
    /// with `end = false`.
    pub fn full(&self) -> &'p str {
        self.full
    }

    /// The captured value of the first parameter registered under `name`
    /// that participated in the match. `None` when the parameter is
    /// unknown or did not participate (optional and absent, or on a
    /// non-matching list alternative).
    pub fn get(&self, name: impl AsRef<str>) -> Option<&'p str> {
        let name = name.as_ref();
        self.params
            .iter()
            .filter(|(param, _)| param.name == name)
            .find_map(|(_, value)| *value)
    }

    /// Iterates over `(name, value)` pairs in capture-group order,
    /// including parameters that did not participate in the match.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&'p str>)> {
        self.params
            .iter()
            .map(|(param, value)| (param.name.as_str(), *value))
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if the pattern has no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Debug for PathMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Compiles `path` and executes it against `candidate`, anchored at the
/// start of the candidate.
///
/// Matching is case-insensitive unless [`Options::sensitive`] is set; the
/// flag is applied at engine level so the pattern artifact from
/// [`pattern`](crate::pattern()) stays flag-free. Returns `Ok(None)` when
/// the candidate does not match.
pub fn match_path<'p>(
    path: impl Into<Path>,
    candidate: &'p str,
    options: &Options,
) -> Result<Option<PathMatch<'p>>, PatternError> {
    let path = path.into();
    let compiled = compile_path(&path, options)?;

    // Native-regex sources are not necessarily anchored; the wrapper pins
    // the match to the start of the candidate without touching group
    // numbering.
    let regex = RegexBuilder::new(&format!("^(?:{})", compiled.source))
        .case_insensitive(!options.sensitive)
        .build()?;

    let captures = match regex.captures(candidate)? {
        Some(captures) => captures,
        None => {
            trace!("{:?} did not match {:?}", path, candidate);
            return Ok(None);
        }
    };

    let full = captures.get(0).map(|m| m.as_str()).unwrap_or_default();
    let params = compiled
        .keys
        .into_iter()
        .enumerate()
        .map(|(i, key)| {
            let value = captures.get(i + 1).map(|m| m.as_str());
            (key, value)
        })
        .collect();

    Ok(Some(PathMatch { full, params }))
}
