//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (ordered route scan)
//!     → matcher.rs (path / regex / callback matcher of each route)
//!     → Return: MatchResult { route, params } or an empty MatchResult
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → definition.rs (parse templates, compile regexes, resolve callbacks)
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic: same input always matches same route
//! - First match wins, in declaration order (no priority sorting)
//! - Malformed routes abort startup instead of degrading matching

pub mod callback;
pub mod definition;
pub mod error;
pub mod matcher;
pub mod params;
pub mod pattern;
pub mod router;

pub use callback::{CallbackError, CallbackRegistry, CallbackResult};
pub use definition::{HandlerId, RouteDefinition, RouteKind, RouteTable};
pub use error::{MatchError, RouteError, RouteErrorKind};
pub use params::{Params, RouteData, REST_PARAMS};
pub use router::{MatchResult, Router};
