//! Route matching logic.
//!
//! # Responsibilities
//! - Match a request path against one compiled route kind
//! - Produce the parameters bound by a successful match
//!
//! # Design Decisions
//! - `Ok(None)` is the ordinary "not this route" answer, not an error
//! - Regex routes bind nothing; the fact of a match is the whole result
//! - Regexes are applied as configured, without implicit anchoring
//! - Callback failures propagate to the caller untouched

use std::fmt;

use regex::Regex;

use crate::routing::callback::{CallbackError, RouteCallback};
use crate::routing::params::Params;
use crate::routing::pattern::PathPattern;

/// Trait for matching request paths against a compiled route.
pub trait Matcher: Send + Sync + fmt::Debug {
    /// Returns the bound parameters if the path matches this route.
    fn matches(&self, path: &str) -> Result<Option<Params>, CallbackError>;
}

impl Matcher for PathPattern {
    fn matches(&self, path: &str) -> Result<Option<Params>, CallbackError> {
        Ok(self.match_path(path))
    }
}

/// Matches the full request path against a regular expression.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
}

impl RegexMatcher {
    pub fn new(regex: Regex) -> Self {
        Self { regex }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Matcher for RegexMatcher {
    fn matches(&self, path: &str) -> Result<Option<Params>, CallbackError> {
        Ok(self.regex.is_match(path).then(Params::new))
    }
}

/// Delegates the decision to a registered predicate.
#[derive(Clone)]
pub struct CallbackMatcher {
    name: String,
    callback: RouteCallback,
}

impl CallbackMatcher {
    pub fn new(name: impl Into<String>, callback: RouteCallback) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for CallbackMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackMatcher")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Matcher for CallbackMatcher {
    fn matches(&self, path: &str) -> Result<Option<Params>, CallbackError> {
        Ok((self.callback)(path)?.map(Params::from_map))
    }
}
