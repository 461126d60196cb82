//! What a controller action hands back to the host.

use serde_json::Value;

/// A controller's response, independent of the HTTP stack.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Html(String),
    Text(String),
    Json(Value),
    /// Temporary redirect to the given location.
    Redirect(String),
    /// Explicit status with a plain-text body.
    Status { code: u16, body: String },
}

impl Reply {
    pub fn html(body: impl Into<String>) -> Self {
        Reply::Html(body.into())
    }

    pub fn text(body: impl Into<String>) -> Self {
        Reply::Text(body.into())
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Reply::Redirect(location.into())
    }

    pub fn status(code: u16, body: impl Into<String>) -> Self {
        Reply::Status {
            code,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Reply::Html(_) | Reply::Text(_) | Reply::Json(_) => 200,
            Reply::Redirect(_) => 302,
            Reply::Status { code, .. } => *code,
        }
    }
}
