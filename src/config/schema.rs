//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! application. All types derive Serde traits for deserialization from
//! config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::routing::RouteData;

/// Root configuration for the blog application.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application name, used as the default page title.
    pub app_name: String,

    /// Debug mode raises the default log level to `debug`.
    pub debug: bool,

    /// Listener configuration (bind address, mount base).
    pub listener: ListenerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, in matching order.
    pub routes: Vec<RouteConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "blog".to_string(),
            debug: false,
            listener: ListenerConfig::default(),
            observability: ObservabilityConfig::default(),
            routes: Vec::new(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// URL prefix the application is mounted under. Stripped from request
    /// paths before routing.
    pub base_path: String,

    /// Request timeout (total time for one request) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            base_path: "/".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Line format of the log output.
    pub log_format: LogFormat,

    /// Write logs to `<log_dir>/<app_name>.log` instead of stdout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            log_dir: None,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, one event per line.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// One route descriptor.
///
/// Exactly one of `path`, `regex` and `callback` must be set.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RouteConfig {
    /// Path template, e.g. `cat-id-prop/:cat/:id/...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Regular expression matched against the request path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,

    /// Name of a registered callback predicate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback: Option<String>,

    /// Handler id, `target::action`.
    pub method: String,

    /// Metadata passed verbatim to the handler.
    #[serde(default, skip_serializing_if = "RouteData::is_empty")]
    pub data: RouteData,
}

impl RouteConfig {
    pub fn path(template: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: Some(template.into()),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn regex(pattern: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            regex: Some(pattern.into()),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn callback(name: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            callback: Some(name.into()),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, data: RouteData) -> Self {
        self.data = data;
        self
    }

    /// How many of `path`, `regex` and `callback` are set.
    pub fn kind_count(&self) -> usize {
        [self.path.is_some(), self.regex.is_some(), self.callback.is_some()]
            .iter()
            .filter(|set| **set)
            .count()
    }

    /// Short human-readable summary for error messages.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if let Some(p) = &self.path {
            parts.push(format!("path={}", p));
        }
        if let Some(r) = &self.regex {
            parts.push(format!("regex={}", r));
        }
        if let Some(c) = &self.callback {
            parts.push(format!("callback={}", c));
        }
        if parts.is_empty() {
            parts.push(format!("method={}", self.method));
        }
        parts.join(", ")
    }
}
