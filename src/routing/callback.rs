//! Named route predicates.
//!
//! Callback routes refer to a predicate by name in configuration. Names are
//! resolved against a [`CallbackRegistry`] when the route table is built, so
//! an unknown name is a startup error rather than a per-request lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

/// Error type returned by a failing predicate.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync>;

/// What a predicate returns: `Ok(None)` declines the path, `Ok(Some(map))`
/// accepts it and binds `map` as the route parameters.
pub type CallbackResult = Result<Option<Map<String, Value>>, CallbackError>;

/// A shared predicate over the request path.
pub type RouteCallback = Arc<dyn Fn(&str) -> CallbackResult + Send + Sync>;

/// Registry of predicates addressable from configuration.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: HashMap<String, RouteCallback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `f` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(&str) -> CallbackResult + Send + Sync + 'static,
    {
        self.callbacks.insert(name.into(), Arc::new(f));
        self
    }

    pub fn get(&self, name: &str) -> Option<RouteCallback> {
        self.callbacks.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.callbacks.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CallbackRegistry").field("names", &names).finish()
    }
}
