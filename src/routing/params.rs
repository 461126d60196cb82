//! Parameters extracted from a matched route.

use std::str::FromStr;

use serde_json::{Map, Value};

/// Key under which rest-capture segments are exposed in [`Params::to_json`].
///
/// Named path parameters may not use this name.
pub const REST_PARAMS: &str = "rest_params";

/// Arbitrary key/value metadata attached to a route in configuration.
pub type RouteData = Map<String, Value>;

/// Values bound by a matcher.
///
/// Path routes bind strings; callback routes may bind any JSON value.
/// Rest-capture segments are kept apart from named values so that the two
/// can never shadow each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    named: Map<String, Value>,
    rest: Option<Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(named: Map<String, Value>) -> Self {
        Self { named, rest: None }
    }

    pub(crate) fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.named.insert(name.to_owned(), value.into());
    }

    pub(crate) fn set_rest(&mut self, rest: Vec<String>) {
        self.rest = Some(rest);
    }

    /// Raw value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Value bound to `name` if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.named.get(name).and_then(Value::as_str)
    }

    /// Parse the string bound to `name`.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get_str(name).map(T::from_str)
    }

    /// Segments collected by a trailing `...`, `None` when the route has no
    /// rest-capture.
    pub fn rest(&self) -> Option<&[String]> {
        self.rest.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.named.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of named values (rest segments excluded).
    pub fn len(&self) -> usize {
        self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.rest.is_none()
    }

    /// Flatten into a single JSON object, rest segments under [`REST_PARAMS`].
    pub fn to_json(&self) -> Value {
        let mut map = self.named.clone();
        if let Some(rest) = &self.rest {
            map.insert(
                REST_PARAMS.to_owned(),
                Value::Array(rest.iter().cloned().map(Value::String).collect()),
            );
        }
        Value::Object(map)
    }
}
