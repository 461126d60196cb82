//! Built-in controllers and route callbacks.
//!
//! The blog ships one controller, `test/RouterTest`, used to exercise every
//! route kind end to end, plus the `route_callback_test` callback that the
//! default route table refers to.


use crate::dispatch::HandlerRegistry;
use crate::routing::CallbackRegistry;

pub use router_test::{route_callback_test, RouterTestController, ROUTER_TEST_TARGET};

/// Controllers available to the default route table.
pub fn default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    registry.register(ROUTER_TEST_TARGET, RouterTestController);
    registry
}

/// Callbacks available to the default route table.
pub fn default_callbacks() -> CallbackRegistry {
    let mut callbacks = CallbackRegistry::new();
    callbacks.register("route_callback_test", route_callback_test);
    callbacks
}
