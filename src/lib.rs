//! Blog routing and dispatch engine.
//!
//! Maps request paths to controller actions through an ordered table of
//! path, regex and callback routes, then invokes the first match.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ───────────────▶ http::server ──▶ App::handle
//!                                         │
//!                                         ▼
//!                              routing::Router (first match wins)
//!                                         │  MatchResult { route, params }
//!                                         ▼
//!                              dispatch::Dispatcher ──▶ Controller::call
//!                                         │
//!                                         ▼  Outcome
//!     Client Response ◀──── http::response
//! ```

// Core subsystems
pub mod app;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod routing;

// Application
pub mod controllers;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use app::App;
pub use config::AppConfig;
pub use dispatch::{Dispatcher, HandlerRegistry, Outcome};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::Router;
