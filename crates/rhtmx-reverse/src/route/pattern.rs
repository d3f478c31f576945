//! Placeholder scanning for route patterns
//!
//! Pure functional scanning of `{name}` / `{name:constraint}` placeholders.
//! All functions are **pure**: same input → same output, no side effects.

/// A single placeholder found in a route pattern
///
/// `placeholder` is the exact text (braces included) that gets replaced
/// during URL generation; `name` is the key looked up in the supplied values.
///
/// # Examples
///
/// ```
/// use rhtmx_reverse::route::pattern::Parameter;
///
/// let param = Parameter::from_placeholder("{id:[0-9]+}");
/// assert_eq!(param.name, "id");
/// assert_eq!(param.placeholder, "{id:[0-9]+}");
/// assert_eq!(param.constraint(), Some("[0-9]+"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Lookup key, e.g. "id"
    pub name: String,
    /// Exact placeholder text, e.g. "{id:[0-9]+}"
    pub placeholder: String,
}

impl Parameter {
    /// Builds a parameter from a complete placeholder token (pure function)
    ///
    /// The name is everything before the first `:` when that colon is not the
    /// first inner character; otherwise the whole inner content.
    pub fn from_placeholder(placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        let name = split_placeholder(&placeholder).0.to_string();
        Self { name, placeholder }
    }

    /// Constraint text after the first `:`, if any
    ///
    /// Carried through substitution as literal text, never validated.
    pub fn constraint(&self) -> Option<&str> {
        split_placeholder(&self.placeholder).1
    }
}

/// Splits a placeholder token into (name, constraint)
fn split_placeholder(placeholder: &str) -> (&str, Option<&str>) {
    let inner = strip_braces(placeholder);

    match inner.split_once(':') {
        Some((name, constraint)) if !name.is_empty() => (name, Some(constraint)),
        _ => (inner, None),
    }
}

fn strip_braces(placeholder: &str) -> &str {
    let inner = placeholder.strip_prefix('{').unwrap_or(placeholder);
    inner.strip_suffix('}').unwrap_or(inner)
}

/// Scans a pattern for placeholders (pure function)
///
/// Walks the pattern once, tracking brace depth so that nested braces inside
/// a placeholder (regex quantifiers like `{5,6}`) stay part of it.
///
/// # Rules
///
/// 1. `{` raises the depth; going from 0 to 1 opens a placeholder
/// 2. Every character at depth > 0 belongs to the open placeholder
/// 3. `}` lowers the depth; going from 1 to 0 closes the placeholder
/// 4. A `}` with nothing open drives the depth negative, so no later
///    placeholder can open
/// 5. A placeholder still open at the end of the pattern is dropped
///
/// # Examples
///
/// ```
/// use rhtmx_reverse::route::pattern::scan_pattern;
///
/// let params = scan_pattern("/books/{rid:^[0-9]{5,6}}/{page}");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params[0].name, "rid");
/// assert_eq!(params[0].placeholder, "{rid:^[0-9]{5,6}}");
/// assert_eq!(params[1].name, "page");
///
/// // Unclosed placeholders are ignored
/// assert!(scan_pattern("/broken/{id").is_empty());
/// ```
///
/// # Performance
///
/// - O(n) where n is pattern length
/// - Zero-copy while scanning; one allocation per placeholder found
pub fn scan_pattern(pattern: &str) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut depth = 0isize;
    let mut start = 0usize;

    for (idx, ch) in pattern.char_indices() {
        match ch {
            '{' => {
                depth += 1;
                if depth == 1 {
                    start = idx;
                }
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    params.push(Parameter::from_placeholder(&pattern[start..=idx]));
                }
            }
            _ => {}
        }
    }

    params
}
