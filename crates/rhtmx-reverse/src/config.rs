// File: src/config.rs
// Purpose: Route definitions parsed from routes.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Route definitions loaded from a TOML file
///
/// ```toml
/// [[routes]]
/// name = "user.profile"
/// pattern = "/users/{id}"
///
/// [[routes]]
/// name = "api.posts"
/// group = "/api/v1"
/// pattern = "/posts/{slug}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RoutesConfig {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// A single named route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteEntry {
    /// Name used for URL generation
    pub name: String,

    /// Pattern with `{name}` / `{name:constraint}` placeholders
    pub pattern: String,

    /// Prefix prepended to the pattern (e.g. "/api/v1")
    #[serde(default)]
    pub group: Option<String>,
}

impl RoutesConfig {
    /// Load route definitions from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means no routes
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read routes file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse routes file: {:?}", path))
    }

    /// Load route definitions from the default path (./routes.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("routes.toml")
    }

    /// Parse route definitions from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: RoutesConfig = toml::from_str(content)?;
        Ok(config)
    }
}
