//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Look up the first route accepting a request path
//! - Return the matched route or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; specificity is expressed by declaration order only
//! - Explicit empty `MatchResult` rather than a silent default route

use crate::config::RouteConfig;
use crate::routing::callback::CallbackRegistry;
use crate::routing::definition::{RouteDefinition, RouteTable};
use crate::routing::error::{MatchError, RouteError};
use crate::routing::params::{Params, RouteData};

/// Outcome of matching one request path.
#[derive(Debug)]
pub struct MatchResult<'r> {
    route: Option<&'r RouteDefinition>,
    params: Params,
}

impl<'r> MatchResult<'r> {
    /// A result with no route.
    pub fn none() -> Self {
        Self {
            route: None,
            params: Params::new(),
        }
    }

    pub fn route(&self) -> Option<&'r RouteDefinition> {
        self.route
    }

    pub fn is_match(&self) -> bool {
        self.route.is_some()
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The matched route's data, or `None` when nothing matched.
    pub fn data(&self) -> Option<&'r RouteData> {
        self.route.map(RouteDefinition::data)
    }

    pub fn into_parts(self) -> (Option<&'r RouteDefinition>, Params) {
        (self.route, self.params)
    }
}

/// Ordered first-match-wins router.
#[derive(Debug, Default)]
pub struct Router {
    table: RouteTable,
}

impl Router {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    /// Compile the configured routes into a router.
    pub fn from_config(
        routes: &[RouteConfig],
        callbacks: &CallbackRegistry,
    ) -> Result<Self, RouteError> {
        let table = RouteTable::build(routes, callbacks)?;
        tracing::debug!(routes = table.len(), "Route table compiled");
        Ok(Self::new(table))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Find the first route accepting `path`.
    ///
    /// Only a failing callback predicate produces an error; a path that no
    /// route accepts yields a `MatchResult` without a route.
    pub fn match_url(&self, path: &str) -> Result<MatchResult<'_>, MatchError> {
        for route in &self.table {
            let matched = route.kind().matcher().matches(path).map_err(|source| {
                MatchError::Callback {
                    index: route.index(),
                    name: route.source().to_owned(),
                    source,
                }
            })?;

            if let Some(params) = matched {
                tracing::debug!(
                    path = %path,
                    route = route.index(),
                    kind = route.kind().name(),
                    handler = %route.handler(),
                    "Route matched"
                );
                return Ok(MatchResult {
                    route: Some(route),
                    params,
                });
            }
        }

        tracing::debug!(path = %path, "No route matched");
        Ok(MatchResult::none())
    }
}
