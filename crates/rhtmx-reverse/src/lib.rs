//! # RHTMX Reverse
//!
//! Named routes with reverse URL generation:
//! - Placeholders in patterns (`/users/{id}`)
//! - Embedded constraints carried as text (`/avatar/{hash:[0-9A-Z]+}`)
//! - Nested braces inside constraints (`/books/{rid:^[0-9]{5,6}}`)
//! - Leftover values appended as a sorted query string
//! - Route groups (prefix concatenated before compilation)
//!
//! ## How it works
//!
//! Patterns are compiled once, when a route is registered. URL generation
//! takes a flat `[key, value, key, value, ...]` list, fills placeholders in
//! pattern order and turns everything else into `?key=value&...`, sorted so
//! output is deterministic.
//!
//! Constraints after `:` are never checked against the values supplied.
//!
//! ## Example
//!
//! ```
//! use rhtmx_reverse::UrlRegistry;
//!
//! let mut urls = UrlRegistry::new();
//! urls.add("avatar", "/avatar/{hash}").unwrap();
//! urls.add_group("api.posts", "/api/v1", "/posts/{slug}").unwrap();
//!
//! assert_eq!(
//!     urls.reverse("avatar", &["hash", "123ABC", "quality", "95"]).unwrap(),
//!     "/avatar/123ABC?quality=95"
//! );
//! assert_eq!(
//!     urls.url_for("api.posts", &[("slug", "hello world")]).unwrap(),
//!     "/api/v1/posts/hello%20world"
//! );
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
mod error;
pub mod registry;
pub mod reverse;
pub mod route;

pub use config::{RouteEntry, RoutesConfig};
pub use error::{RegistryError, ReverseError};
pub use registry::UrlRegistry;
pub use reverse::reverse;
pub use route::{scan_pattern, Parameter, Route};

/// Result of URL generation
pub type Result<T, E = ReverseError> = std::result::Result<T, E>;
