//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! MatchResult { route, params }
//!     → dispatcher.rs (split handler id, report NotFound)
//!     → registry.rs (target → controller)
//!     → controller.rs (invoke action with params + route data)
//!     → Outcome: Dispatched(Reply) | NotFound | InternalError
//! ```

pub mod controller;
pub mod dispatcher;
pub mod registry;
pub mod reply;

pub use controller::{ActionContext, ActionController, Controller, HandlerError};
pub use dispatcher::{DispatchError, Dispatcher, Outcome};
pub use registry::HandlerRegistry;
pub use reply::Reply;
