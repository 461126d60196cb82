//! Route dispatch.
//!
//! # State Machine (per request)
//! ```text
//! Unmatched → Matching ─┬→ Matched → Dispatched
//!                       ├→ Matched → Failed      (resolution or handler error)
//!                       └→ NotFound
//! ```
//!
//! # Design Decisions
//! - Exactly one controller invocation per matched request, none on NotFound
//! - Failures become `Outcome::InternalError`; nothing is retried
//! - Diagnostics are logged here; callers only see the outcome kind

use std::sync::Arc;

use thiserror::Error;

use crate::dispatch::controller::{ActionContext, HandlerError};
use crate::dispatch::registry::HandlerRegistry;
use crate::dispatch::reply::Reply;
use crate::http::RequestContext;
use crate::routing::{HandlerId, MatchError, MatchResult};

/// Why a request ended in an internal error.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("no controller registered for `{handler}`")]
    UnknownTarget { handler: HandlerId },

    #[error("controller has no action for `{handler}`")]
    UnknownAction { handler: HandlerId },

    #[error("handler `{handler}` failed: {source}")]
    Handler {
        handler: HandlerId,
        #[source]
        source: HandlerError,
    },

    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Terminal state of one request.
#[derive(Debug)]
pub enum Outcome {
    Dispatched(Reply),
    NotFound,
    InternalError(DispatchError),
}

impl Outcome {
    /// Label used in logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Dispatched(_) => "dispatched",
            Outcome::NotFound => "not_found",
            Outcome::InternalError(_) => "internal_error",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Outcome::Dispatched(reply) => reply.status_code(),
            Outcome::NotFound => 404,
            Outcome::InternalError(_) => 500,
        }
    }
}

/// Resolves matched routes to controllers and invokes them.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<HandlerRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn dispatch(&self, matched: MatchResult<'_>, request: &RequestContext) -> Outcome {
        let (route, params) = matched.into_parts();
        let route = match route {
            Some(route) => route,
            None => {
                tracing::info!(path = %request.path(), "Not found");
                return Outcome::NotFound;
            }
        };

        let cx = ActionContext {
            request,
            params: &params,
            data: route.data(),
        };

        match self.invoke(route.handler(), cx) {
            Ok(reply) => Outcome::Dispatched(reply),
            Err(e) => {
                tracing::error!(
                    path = %request.path(),
                    route = route.index(),
                    handler = %route.handler(),
                    error = %e,
                    "Dispatch failed"
                );
                Outcome::InternalError(e)
            }
        }
    }

    fn invoke(&self, handler: &HandlerId, cx: ActionContext<'_>) -> Result<Reply, DispatchError> {
        let controller = self
            .registry
            .resolve(handler.target())
            .ok_or_else(|| DispatchError::UnknownTarget {
                handler: handler.clone(),
            })?;

        if !controller.has_action(handler.action()) {
            return Err(DispatchError::UnknownAction {
                handler: handler.clone(),
            });
        }

        controller
            .call(handler.action(), cx)
            .map_err(|source| DispatchError::Handler {
                handler: handler.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::config::RouteConfig;
    use crate::dispatch::controller::ActionController;
    use crate::routing::{CallbackRegistry, Router};

    fn router() -> Router {
        let routes = vec![
            RouteConfig::path("post/:id", "blog/Post::show"),
            RouteConfig::path("broken", "blog/Post::explode"),
            RouteConfig::path("typo", "blog/Post::shw"),
            RouteConfig::path("ghost", "blog/Ghost::show"),
        ];
        Router::from_config(&routes, &CallbackRegistry::new()).unwrap()
    }

    fn dispatcher(calls: Arc<AtomicUsize>) -> Dispatcher {
        let explode_calls = calls.clone();
        let mut registry = HandlerRegistry::new();
        registry.register(
            "blog/Post",
            ActionController::new()
                .action("show", move |cx| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    let id = cx.params.get_str("id").unwrap_or_default();
                    Ok(Reply::html(format!("<h1>Post {}</h1>", id)))
                })
                .action("explode", move |_| {
                    explode_calls.fetch_add(1, Ordering::SeqCst);
                    Err("template missing".into())
                }),
        );
        Dispatcher::new(Arc::new(registry))
    }

    fn run(path: &str) -> (Outcome, usize) {
        let calls = Arc::new(AtomicUsize::new(0));
        let dispatcher = dispatcher(calls.clone());
        let router = router();
        let request = RequestContext::new(path);
        let matched = router.match_url(path).unwrap();
        (dispatcher.dispatch(matched, &request), calls.load(Ordering::SeqCst))
    }

    #[test]
    fn test_dispatched() {
        let (outcome, calls) = run("post/7");
        assert_eq!(calls, 1);
        match outcome {
            Outcome::Dispatched(reply) => assert_eq!(reply, Reply::html("<h1>Post 7</h1>")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_not_found_invokes_nothing() {
        let (outcome, calls) = run("nowhere");
        assert_eq!(calls, 0);
        assert!(matches!(outcome, Outcome::NotFound));
        assert_eq!(outcome.status_code(), 404);
    }

    #[test]
    fn test_handler_error() {
        let (outcome, calls) = run("broken");
        assert_eq!(calls, 1);
        match outcome {
            Outcome::InternalError(DispatchError::Handler { handler, source }) => {
                assert_eq!(handler.to_string(), "blog/Post::explode");
                assert_eq!(source.to_string(), "template missing");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_resolution_errors() {
        let (outcome, calls) = run("typo");
        assert_eq!(calls, 0);
        assert!(matches!(
            outcome,
            Outcome::InternalError(DispatchError::UnknownAction { .. })
        ));

        let (outcome, _) = run("ghost");
        assert!(matches!(
            outcome,
            Outcome::InternalError(DispatchError::UnknownTarget { .. })
        ));
        assert_eq!(outcome.status_code(), 500);
        assert_eq!(outcome.label(), "internal_error");
    }
}
