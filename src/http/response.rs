//! Response handling.
//!
//! # Responsibilities
//! - Turn a controller `Reply` into an HTTP response
//! - Map `NotFound` and `InternalError` outcomes to standardized pages
//!
//! # Design Decisions
//! - Internal error details never reach the client (they are logged)
//! - Redirects use `302 Found`
//! - Unknown status codes from controllers degrade to `500`

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};

use crate::dispatch::{Outcome, Reply};

pub const NOT_FOUND_PAGE: &str = "<h2>Not Found</h2>";
pub const INTERNAL_ERROR_PAGE: &str = "<h2>Internal Server Error</h2>";

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Html(body) => Html(body).into_response(),
            Reply::Text(body) => body.into_response(),
            Reply::Json(value) => Json(value).into_response(),
            Reply::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
            Reply::Status { code, body } => {
                let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, body).into_response()
            }
        }
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Outcome::Dispatched(reply) => reply.into_response(),
            Outcome::NotFound => (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response(),
            Outcome::InternalError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
            }
        }
    }
}
