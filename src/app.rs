//! Application context.
//!
//! # Responsibilities
//! - Own the configuration, the compiled route table and the dispatcher
//! - Run one request through match → dispatch and report the outcome
//!
//! # Design Decisions
//! - Built once at startup and shared read-only (`Arc<App>`) by all requests
//! - Route compilation errors are fatal; unknown controller targets only warn
//!   (the request that reaches them ends in an internal error)

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::dispatch::{DispatchError, Dispatcher, HandlerRegistry, Outcome};
use crate::http::RequestContext;
use crate::observability::record_outcome;
use crate::routing::{CallbackRegistry, RouteError, Router};

/// A bootstrapped application: configuration, routes and controllers.
#[derive(Debug)]
pub struct App {
    config: Arc<AppConfig>,
    router: Router,
    dispatcher: Dispatcher,
}

impl App {
    /// Compile the configured routes and wire up the dispatcher.
    pub fn bootstrap(
        config: AppConfig,
        registry: HandlerRegistry,
        callbacks: &CallbackRegistry,
    ) -> Result<Self, RouteError> {
        let router = Router::from_config(&config.routes, callbacks)?;

        for route in router.table() {
            if !registry.contains(route.handler().target()) {
                tracing::warn!(
                    route = route.index(),
                    source = %route.source(),
                    handler = %route.handler(),
                    "No controller registered for route target"
                );
            }
        }

        tracing::info!(
            app = %config.app_name,
            routes = router.table().len(),
            controllers = registry.targets().len(),
            callbacks = callbacks.len(),
            base_path = %config.listener.base_path,
            "Application bootstrapped"
        );

        Ok(Self {
            config: Arc::new(config),
            router,
            dispatcher: Dispatcher::new(Arc::new(registry)),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Route and dispatch one request.
    pub fn handle(&self, request: &RequestContext) -> Outcome {
        let start = Instant::now();

        let Some(path) = request.route_path() else {
            tracing::info!(path = %request.path(), "Outside mount base");
            let outcome = Outcome::NotFound;
            record_outcome(&outcome, None, start);
            return outcome;
        };

        let matched = match self.router.match_url(path) {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!(path = %request.path(), error = %e, "Route matching failed");
                let outcome = Outcome::InternalError(DispatchError::Match(e));
                record_outcome(&outcome, None, start);
                return outcome;
            }
        };

        let handler = matched.route().map(|route| route.handler().to_string());
        let outcome = self.dispatcher.dispatch(matched, request);
        record_outcome(&outcome, handler.as_deref(), start);
        outcome
    }
}
