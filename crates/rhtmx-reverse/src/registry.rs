//! Named route registry
//!
//! Owns compiled routes keyed by name and delegates URL generation to
//! [`crate::reverse()`]. The registry is an ordinary value: create one with
//! [`UrlRegistry::new`], pass it where it is needed, and [`UrlRegistry::clear`]
//! it to start over.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::RoutesConfig;
use crate::error::{RegistryError, ReverseError};
use crate::route::Route;
use crate::Result;

/// Registry of named routes
///
/// # Examples
///
/// ```
/// use rhtmx_reverse::UrlRegistry;
///
/// let mut urls = UrlRegistry::new();
/// urls.add("photos", "/photos/{year}/{month}").unwrap();
///
/// let url = urls.reverse("photos", &["year", "2019", "month", "07"]).unwrap();
/// assert_eq!(url, "/photos/2019/07");
///
/// assert!(urls.reverse("photos", &["year", "2019"]).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UrlRegistry {
    routes: HashMap<String, Route>,
}

impl UrlRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a routes configuration
    ///
    /// Entries are registered in file order; the first duplicate name aborts.
    pub fn from_config(config: &RoutesConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for entry in &config.routes {
            let group = entry.group.as_deref().unwrap_or("");
            registry.add_group(&entry.name, group, &entry.pattern)?;
        }

        debug!(routes = registry.len(), "loaded routes from config");
        Ok(registry)
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Registers a route and returns its pattern
    pub fn add(&mut self, name: &str, pattern: &str) -> Result<String, RegistryError> {
        self.add_group(name, "", pattern)
    }

    /// Registers a route under a group prefix
    ///
    /// The stored pattern is `group + pattern`; the return value is `pattern`
    /// alone, so call sites can mount it inside the group unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_reverse::UrlRegistry;
    ///
    /// let mut urls = UrlRegistry::new();
    /// let local = urls.add_group("admin.users", "/admin", "/users/{id}").unwrap();
    ///
    /// assert_eq!(local, "/users/{id}");
    /// assert_eq!(urls.get("admin.users"), Some("/admin/users/{id}"));
    /// ```
    pub fn add_group(
        &mut self,
        name: &str,
        group: &str,
        pattern: &str,
    ) -> Result<String, RegistryError> {
        if self.routes.contains_key(name) {
            warn!(route = name, "route already registered");
            return Err(RegistryError::DuplicateRoute {
                name: name.to_string(),
            });
        }

        let route = Route::compile(format!("{group}{pattern}")).with_name(name);
        debug!(
            route = name,
            pattern = route.pattern(),
            params = route.params().len(),
            "registered route"
        );
        self.routes.insert(name.to_string(), route);

        Ok(pattern.to_string())
    }

    /// Registers a route, panicking if the name is taken
    ///
    /// # Panics
    ///
    /// Panics with the [`RegistryError`] message on a duplicate name.
    pub fn must_add(&mut self, name: &str, pattern: &str) -> String {
        self.add(name, pattern).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Registers a grouped route, panicking if the name is taken
    ///
    /// # Panics
    ///
    /// Panics with the [`RegistryError`] message on a duplicate name.
    pub fn must_add_group(&mut self, name: &str, group: &str, pattern: &str) -> String {
        self.add_group(name, group, pattern)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Removes every route
    pub fn clear(&mut self) {
        debug!(routes = self.routes.len(), "clearing route registry");
        self.routes.clear();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Stored pattern (group prefix included) for a route name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(|route| route.pattern())
    }

    /// Compiled route for a name
    pub fn route(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Whether a route is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Number of registered routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the registry has no routes
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered route names (arbitrary order)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// All routes as name → stored pattern
    pub fn all_urls(&self) -> BTreeMap<String, String> {
        self.routes
            .iter()
            .map(|(name, route)| (name.clone(), route.pattern().to_string()))
            .collect()
    }

    /// All routes as name → parameter names in pattern order
    pub fn all_params(&self) -> BTreeMap<String, Vec<String>> {
        self.routes
            .iter()
            .map(|(name, route)| {
                let params = route.params().iter().map(|p| p.name.clone()).collect();
                (name.clone(), params)
            })
            .collect()
    }

    // ========================================================================
    // URL Generation
    // ========================================================================

    /// Generates the URL for a named route from flat key/value pairs
    ///
    /// # Errors
    ///
    /// - [`ReverseError::UnknownRoute`] if nothing is registered under `name`
    /// - [`ReverseError::InvalidArity`] if `pairs` has odd length
    /// - [`ReverseError::MissingParameter`] if a placeholder has no value
    pub fn reverse<S: AsRef<str>>(&self, name: &str, pairs: &[S]) -> Result<String> {
        let route = self.routes.get(name).ok_or_else(|| ReverseError::UnknownRoute {
            name: name.to_string(),
        })?;

        let url = route.reverse(pairs)?;
        trace!(route = name, url = %url, "reversed route");
        Ok(url)
    }

    /// Generates a URL from `(key, value)` tuples
    ///
    /// Same as [`UrlRegistry::reverse`] but the pair list can never be odd.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let pairs: Vec<&str> = params.iter().flat_map(|(k, v)| [*k, *v]).collect();
        self.reverse(name, &pairs)
    }

    /// Generates a URL, panicking on any error
    ///
    /// # Panics
    ///
    /// Panics with the [`ReverseError`] message.
    pub fn must_reverse<S: AsRef<str>>(&self, name: &str, pairs: &[S]) -> String {
        self.reverse(name, pairs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl fmt::Display for UrlRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, pattern) in self.all_urls() {
            writeln!(f, "{name} => {pattern}")?;
        }
        Ok(())
    }
}
