//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with a single catch-all handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Hand every request to the application's routing engine
//! - Turn panics in controllers or callbacks into the standard 500 page
//! - Stop gracefully on the shutdown broadcast

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::app::App;
use crate::http::request::{request_id_header, MakeRequestUuid, RequestContext};
use crate::http::response::INTERNAL_ERROR_PAGE;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub app: Arc<App>,
}

/// HTTP host for the application.
pub struct HttpServer {
    router: Router,
    app: Arc<App>,
}

impl HttpServer {
    pub fn new(app: App) -> Self {
        let app = Arc::new(app);
        let state = AppState { app: app.clone() };
        let router = Self::build_router(&app, state);
        Self { router, app }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(app: &App, state: AppState) -> Router {
        let timeout = Duration::from_secs(app.config().listener.request_timeout_secs);

        Router::new()
            .route("/", any(dispatch_handler))
            .route("/{*path}", any(dispatch_handler))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(request_id_header()))
                    .layer(TimeoutLayer::with_status_code(
                        StatusCode::REQUEST_TIMEOUT,
                        timeout,
                    ))
                    .layer(CatchPanicLayer::custom(panic_response)),
            )
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            app = %self.app.config().app_name,
            routes = self.app.router().table().len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all handler: every request goes through the routing engine.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let base = &state.app.config().listener.base_path;
    let cx = RequestContext::from_request(&request, base);
    state.app.handle(&cx).into_response()
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_owned());
    tracing::error!(panic = %message, "Request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
}
