//! Route definition table.
//!
//! # Responsibilities
//! - Compile `RouteConfig` descriptors into matchers
//! - Resolve callback names against the registry
//! - Split handler ids into target and action
//!
//! # Design Decisions
//! - Built once, read-only afterwards (shared without locks)
//! - Declaration order is preserved; there is no priority sorting
//! - Any malformed descriptor aborts the whole build

use std::fmt;

use regex::Regex;

use crate::config::RouteConfig;
use crate::routing::callback::CallbackRegistry;
use crate::routing::error::{RouteError, RouteErrorKind};
use crate::routing::matcher::{CallbackMatcher, Matcher, RegexMatcher};
use crate::routing::params::RouteData;
use crate::routing::pattern::PathPattern;

const HANDLER_SEPARATOR: &str = "::";

/// A handler id of the form `target::action`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId {
    target: String,
    action: String,
}

impl HandlerId {
    /// Split `test/RouterTest::printRequest` into its two halves.
    pub fn parse(id: &str) -> Option<Self> {
        let (target, action) = id.split_once(HANDLER_SEPARATOR)?;
        let target = target.trim();
        let action = action.trim();
        if target.is_empty() || action.is_empty() || action.contains(HANDLER_SEPARATOR) {
            return None;
        }
        Some(Self {
            target: target.to_owned(),
            action: action.to_owned(),
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.target, HANDLER_SEPARATOR, self.action)
    }
}

/// The compiled matcher of a route.
#[derive(Debug)]
pub enum RouteKind {
    Path(PathPattern),
    Regex(RegexMatcher),
    Callback(CallbackMatcher),
}

impl RouteKind {
    pub fn matcher(&self) -> &dyn Matcher {
        match self {
            RouteKind::Path(p) => p,
            RouteKind::Regex(r) => r,
            RouteKind::Callback(c) => c,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RouteKind::Path(_) => "path",
            RouteKind::Regex(_) => "regex",
            RouteKind::Callback(_) => "callback",
        }
    }
}

/// One immutable entry of the route table.
#[derive(Debug)]
pub struct RouteDefinition {
    index: usize,
    source: String,
    kind: RouteKind,
    handler: HandlerId,
    data: RouteData,
}

impl RouteDefinition {
    /// Compile the descriptor found at `index` in the configured list.
    pub fn compile(
        index: usize,
        config: &RouteConfig,
        callbacks: &CallbackRegistry,
    ) -> Result<Self, RouteError> {
        let (source, kind) = match (&config.path, &config.regex, &config.callback) {
            (Some(template), None, None) => {
                let pattern = PathPattern::parse(template)
                    .map_err(|kind| RouteError::new(index, template.as_str(), kind))?;
                (template.clone(), RouteKind::Path(pattern))
            }
            (None, Some(pattern), None) => {
                let regex = Regex::new(pattern).map_err(|e| {
                    RouteError::new(index, pattern.as_str(), RouteErrorKind::InvalidRegex(e.to_string()))
                })?;
                (pattern.clone(), RouteKind::Regex(RegexMatcher::new(regex)))
            }
            (None, None, Some(name)) => {
                let callback = callbacks.get(name).ok_or_else(|| {
                    RouteError::new(index, name.as_str(), RouteErrorKind::UnknownCallback(name.clone()))
                })?;
                (name.clone(), RouteKind::Callback(CallbackMatcher::new(name.as_str(), callback)))
            }
            _ => {
                return Err(RouteError::new(
                    index,
                    config.describe(),
                    RouteErrorKind::KindCount(config.kind_count()),
                ))
            }
        };

        let handler = HandlerId::parse(&config.method).ok_or_else(|| {
            RouteError::new(
                index,
                source.as_str(),
                RouteErrorKind::InvalidHandlerId(config.method.clone()),
            )
        })?;

        Ok(Self {
            index,
            source,
            kind,
            handler,
            data: config.data.clone(),
        })
    }

    /// Position in the table (declaration order).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Template, regex or callback name as configured.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    pub fn handler(&self) -> &HandlerId {
        &self.handler
    }

    pub fn data(&self) -> &RouteData {
        &self.data
    }
}

/// Ordered, immutable list of compiled routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
}

impl RouteTable {
    /// Compile every descriptor, failing on the first malformed one.
    pub fn build(configs: &[RouteConfig], callbacks: &CallbackRegistry) -> Result<Self, RouteError> {
        let routes = configs
            .iter()
            .enumerate()
            .map(|(i, config)| RouteDefinition::compile(i, config, callbacks))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { routes })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteDefinition> {
        self.routes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RouteDefinition> {
        self.routes.get(index)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteDefinition;
    type IntoIter = std::slice::Iter<'a, RouteDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
