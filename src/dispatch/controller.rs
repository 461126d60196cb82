//! Controllers: the invocable targets behind handler ids.
//!
//! A handler id `target::action` names a controller registered under
//! `target` and one of its actions. Controllers either implement
//! [`Controller`] directly (matching on the action name) or are assembled
//! from closures with [`ActionController`].

use std::collections::HashMap;
use std::fmt;

use crate::dispatch::reply::Reply;
use crate::http::RequestContext;
use crate::routing::{Params, RouteData};

/// Error type returned by a failing action.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Everything an action is invoked with.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub request: &'a RequestContext,
    pub params: &'a Params,
    pub data: &'a RouteData,
}

/// A handler target exposing named actions.
pub trait Controller: Send + Sync {
    /// Whether `action` can be invoked on this controller.
    fn has_action(&self, action: &str) -> bool;

    /// Invoke `action`. Only called after `has_action` returned true.
    fn call(&self, action: &str, cx: ActionContext<'_>) -> Result<Reply, HandlerError>;
}

type Action = Box<dyn Fn(ActionContext<'_>) -> Result<Reply, HandlerError> + Send + Sync>;

/// A controller built from named closures.
#[derive(Default)]
pub struct ActionController {
    actions: HashMap<String, Action>,
}

impl ActionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the action `name`.
    pub fn action<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(ActionContext<'_>) -> Result<Reply, HandlerError> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Box::new(f));
        self
    }

    pub fn action_names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }
}

impl Controller for ActionController {
    fn has_action(&self, action: &str) -> bool {
        self.actions.contains_key(action)
    }

    fn call(&self, action: &str, cx: ActionContext<'_>) -> Result<Reply, HandlerError> {
        match self.actions.get(action) {
            Some(f) => f(cx),
            None => Err(format!("no action `{}`", action).into()),
        }
    }
}

impl fmt::Debug for ActionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.action_names().collect();
        names.sort_unstable();
        f.debug_struct("ActionController").field("actions", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_parts() -> (RequestContext, Params, RouteData) {
        (RequestContext::new("/hello"), Params::new(), RouteData::new())
    }

    #[test]
    fn test_action_controller() {
        let controller = ActionController::new()
            .action("hello", |cx| Ok(Reply::text(format!("hello from {}", cx.request.path()))))
            .action("fail", |_| Err("nope".into()));

        assert!(controller.has_action("hello"));
        assert!(!controller.has_action("missing"));

        let (request, params, data) = context_parts();
        let cx = ActionContext {
            request: &request,
            params: &params,
            data: &data,
        };
        assert_eq!(controller.call("hello", cx).unwrap(), Reply::text("hello from /hello"));
        assert_eq!(controller.call("fail", cx).unwrap_err().to_string(), "nope");
        assert!(controller.call("missing", cx).is_err());
    }

    #[test]
    fn test_debug_lists_actions() {
        let controller = ActionController::new()
            .action("b", |_| Ok(Reply::text("")))
            .action("a", |_| Ok(Reply::text("")));
        assert_eq!(format!("{:?}", controller), r#"ActionController { actions: ["a", "b"] }"#);
    }
}
