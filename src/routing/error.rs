//! Routing error types.
//!
//! # Taxonomy
//! - `RouteError`: a malformed route descriptor, raised while the route table
//!   is built. Always fatal at startup.
//! - `MatchError`: a failure raised by user code while matching a request
//!   (currently only callback predicates). Surfaces as an internal error.
//!
//! A matcher declining a path is not an error and never appears here.

use thiserror::Error;

use crate::routing::callback::CallbackError;

/// Why a single route descriptor could not be compiled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteErrorKind {
    #[error("route must set exactly one of `path`, `regex` or `callback` (found {0})")]
    KindCount(usize),

    #[error("rest-capture `...` can only appear as the last segment")]
    RestNotLast,

    #[error("empty segment in path template")]
    EmptySegment,

    #[error("parameter name can not be empty")]
    EmptyParamName,

    #[error("parameter `{0}` is bound more than once")]
    DuplicateParam(String),

    #[error("parameter name `{0}` is reserved for rest-capture segments")]
    ReservedParam(String),

    #[error("invalid regex: {0}")]
    InvalidRegex(String),

    #[error("unknown callback `{0}`")]
    UnknownCallback(String),

    #[error("handler id `{0}` must look like `target::action`")]
    InvalidHandlerId(String),
}

/// A route descriptor rejected while building the route table.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("route #{index} ({source_text:?}): {kind}")]
pub struct RouteError {
    /// Position of the descriptor in the configured route list.
    pub index: usize,
    /// The template, regex or callback name as written in the config.
    pub source_text: String,
    pub kind: RouteErrorKind,
}

impl RouteError {
    pub(crate) fn new(index: usize, source_text: impl Into<String>, kind: RouteErrorKind) -> Self {
        Self {
            index,
            source_text: source_text.into(),
            kind,
        }
    }
}

/// A failure raised while matching a request path.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("callback `{name}` failed on route #{index}: {source}")]
    Callback {
        index: usize,
        name: String,
        #[source]
        source: CallbackError,
    },
}
