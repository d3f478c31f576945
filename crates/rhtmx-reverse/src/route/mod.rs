/// Route module for named URL patterns
///
/// Contains the compiled route type and the pure placeholder scanner.
/// A route is built once from its pattern and never changes afterwards.

pub mod pattern;

pub use pattern::{scan_pattern, Parameter};

use crate::reverse::reverse;
use crate::Result;

/// A compiled route pattern
///
/// # Examples
///
/// ```
/// use rhtmx_reverse::Route;
///
/// let route = Route::compile("/avatar/{hash:[0-9A-Z]+}");
/// assert_eq!(route.pattern(), "/avatar/{hash:[0-9A-Z]+}");
/// assert_eq!(route.param_names(), vec!["hash"]);
///
/// let url = route.reverse(&["hash", "123ABC", "quality", "95"]).unwrap();
/// assert_eq!(url, "/avatar/123ABC?quality=95");
/// ```
///
/// Fields are read-only: the parameter list always matches the pattern it
/// was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Name the route was registered under (used in error messages)
    name: Option<String>,
    /// Raw pattern, e.g. "/users/{id}"
    pattern: String,
    /// Placeholders in pattern order
    params: Vec<Parameter>,
}

impl Route {
    /// Compiles a pattern into a route
    ///
    /// Never fails: any string is a valid pattern. Patterns without
    /// placeholders compile to a route with no parameters.
    pub fn compile(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let params = scan_pattern(&pattern);
        tracing::trace!(pattern = %pattern, params = params.len(), "compiled route pattern");

        Self {
            name: None,
            pattern,
            params,
        }
    }

    /// Sets the name used to identify this route in errors
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name the route was registered under, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Raw pattern, e.g. "/users/{id}"
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Placeholders in pattern order
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Label for diagnostics: the name if set, otherwise the pattern
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.pattern)
    }

    /// Parameter names in pattern order
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    /// Whether the pattern has no placeholders
    pub fn is_static(&self) -> bool {
        self.params.is_empty()
    }

    /// Generates a URL from flat key/value pairs
    ///
    /// See [`crate::reverse()`].
    pub fn reverse<S: AsRef<str>>(&self, pairs: &[S]) -> Result<String> {
        reverse(self, pairs)
    }
}
