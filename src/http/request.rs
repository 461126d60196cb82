//! Request handling.
//!
//! # Responsibilities
//! - Generate unique request ID (UUID v4)
//! - Extract routing-relevant information (path relative to the mount base)
//! - Expose request details (URL, query, method) to controllers
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - The route path has the base, the query and surrounding slashes removed
//! - Paths outside the mount base never reach the router

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 request ID for requests that do not carry one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

pub(crate) fn request_id_header() -> HeaderName {
    HeaderName::from_static(X_REQUEST_ID)
}

/// Per-request information handed to the router and to controllers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: String,
    path: String,
    query: Option<String>,
    base: String,
    request_id: Option<String>,
}

impl RequestContext {
    /// A GET request for `path` mounted at `/`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.into(),
            query: None,
            base: String::new(),
            request_id: None,
        }
    }

    /// Build from an incoming HTTP request.
    pub fn from_request<B>(request: &Request<B>, base_path: &str) -> Self {
        let request_id = request
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Self::new(request.uri().path())
            .with_method(request.method().as_str())
            .with_query(request.uri().query())
            .with_base(base_path)
            .with_request_id(request_id)
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_query(mut self, query: Option<&str>) -> Self {
        self.query = query.filter(|q| !q.is_empty()).map(str::to_owned);
        self
    }

    /// Mount the application under `base` (`/` or `/blog`, trailing slash
    /// optional).
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = base.trim_end_matches('/').to_owned();
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The full request path as received.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Mount base with a trailing slash, e.g. `/blog/`.
    pub fn base_url(&self) -> String {
        format!("{}/", self.base)
    }

    /// Path plus query string.
    pub fn url(&self) -> String {
        match &self.query {
            Some(q) => format!("{}?{}", self.path, q),
            None => self.path.clone(),
        }
    }

    /// Decoded query pairs, in order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        match &self.query {
            Some(q) => url::form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
            None => Vec::new(),
        }
    }

    /// The path the router sees: base removed, surrounding slashes trimmed.
    ///
    /// `None` when the request lies outside the mount base.
    pub fn route_path(&self) -> Option<&str> {
        let rest = self.path.strip_prefix(self.base.as_str())?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        Some(rest.trim_matches('/'))
    }
}
