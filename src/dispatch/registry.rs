//! Handler resolver.
//!
//! Maps the target half of a handler id (`test/RouterTest`) to a shared
//! controller instance. Built explicitly at startup; read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::dispatch::controller::Controller;

#[derive(Clone, Default)]
pub struct HandlerRegistry {
    controllers: HashMap<String, Arc<dyn Controller>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `controller` under `target`, replacing any previous entry.
    pub fn register<C>(&mut self, target: impl Into<String>, controller: C) -> &mut Self
    where
        C: Controller + 'static,
    {
        self.register_shared(target, Arc::new(controller))
    }

    pub fn register_shared(
        &mut self,
        target: impl Into<String>,
        controller: Arc<dyn Controller>,
    ) -> &mut Self {
        self.controllers.insert(target.into(), controller);
        self
    }

    pub fn resolve(&self, target: &str) -> Option<&dyn Controller> {
        self.controllers.get(target).map(|c| &**c)
    }

    pub fn contains(&self, target: &str) -> bool {
        self.controllers.contains_key(target)
    }

    /// Registered targets, sorted.
    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.controllers.keys().map(String::as_str).collect();
        targets.sort_unstable();
        targets
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("targets", &self.targets())
            .finish()
    }
}
