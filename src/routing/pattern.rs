//! Path templates.
//!
//! # Template Syntax
//! ```text
//! cat-id-prop/:cat/:id/...
//! └────┬────┘ └─┬┘ └┬┘ └┬┘
//!   literal   named   rest-capture (last segment only)
//! ```
//!
//! # Design Decisions
//! - Templates are parsed once at table-build time; matching never re-parses
//! - Leading and trailing slashes are ignored on both sides
//! - Literal comparison is case-sensitive
//! - Segment count must match exactly unless the template ends in `...`

use smallvec::SmallVec;

use crate::routing::error::RouteErrorKind;
use crate::routing::params::{Params, REST_PARAMS};

const SLASH: char = '/';
const COLON: char = ':';
const REST: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
    rest: bool,
}

impl PathPattern {
    /// Compile a template such as `cat/:id/...`.
    pub fn parse(template: &str) -> Result<Self, RouteErrorKind> {
        let parts = split_segments(template);
        let mut segments = Vec::with_capacity(parts.len());
        let mut rest = false;

        for (i, &part) in parts.iter().enumerate() {
            if part == REST {
                if i + 1 != parts.len() {
                    return Err(RouteErrorKind::RestNotLast);
                }
                rest = true;
                continue;
            }
            if part.is_empty() {
                return Err(RouteErrorKind::EmptySegment);
            }
            match part.strip_prefix(COLON) {
                Some("") => return Err(RouteErrorKind::EmptyParamName),
                Some(REST_PARAMS) => {
                    return Err(RouteErrorKind::ReservedParam(REST_PARAMS.to_owned()))
                }
                Some(name) => {
                    let taken = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(n) if n == name));
                    if taken {
                        return Err(RouteErrorKind::DuplicateParam(name.to_owned()));
                    }
                    segments.push(Segment::Param(name.to_owned()));
                }
                None => segments.push(Segment::Literal(part.to_owned())),
            }
        }

        Ok(Self { segments, rest })
    }

    /// Whether the template ends in a rest-capture.
    pub fn has_rest(&self) -> bool {
        self.rest
    }

    /// Names of the bound parameters, in template order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match a request path, returning the bound parameters on success.
    pub fn match_path(&self, path: &str) -> Option<Params> {
        let parts = split_segments(path);
        let fixed = self.segments.len();

        if self.rest {
            if parts.len() < fixed {
                return None;
            }
        } else if parts.len() != fixed {
            return None;
        }

        let mut params = Params::new();
        for (segment, &part) in self.segments.iter().zip(parts.iter()) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name, part),
            }
        }

        if self.rest {
            params.set_rest(parts[fixed..].iter().map(|p| (*p).to_owned()).collect());
        }
        Some(params)
    }
}

/// Split on `/`, dropping the empty pieces produced by leading or trailing
/// slashes. An empty (or all-slash) input yields no segments.
pub(crate) fn split_segments(path: &str) -> SmallVec<[&str; 8]> {
    let trimmed = path.trim_matches(SLASH);
    if trimmed.is_empty() {
        SmallVec::new()
    } else {
        trimmed.split(SLASH).collect()
    }
}
