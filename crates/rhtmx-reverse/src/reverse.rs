//! Reverse URL generation
//!
//! Substitutes values into a compiled [`Route`] and appends whatever is left
//! over as a sorted query string.

use std::collections::{HashMap, HashSet};

use crate::error::ReverseError;
use crate::route::Route;
use crate::Result;

/// Sub-delimiters that stay literal inside a path segment
const PATH_SAFE: [char; 6] = ['$', '&', '+', ':', '=', '@'];

/// Generates a URL for `route` from flat key/value pairs
///
/// # Algorithm
///
/// 1. `pairs` is read as `[key, value, key, value, ...]`; odd length fails
///    with [`ReverseError::InvalidArity`]. Later duplicates overwrite earlier
///    ones.
/// 2. Each placeholder, in pattern order, has its first remaining occurrence
///    replaced by the path-escaped value. A missing key fails with
///    [`ReverseError::MissingParameter`].
/// 3. Unused pairs are query-escaped, rendered as `key=value`, sorted and
///    joined with `&` after a `?`.
///
/// Generation is all-or-nothing: on error no partial URL is produced.
///
/// # Examples
///
/// ```
/// use rhtmx_reverse::{reverse, Route};
///
/// let route = Route::compile("/query");
/// let url = reverse(&route, &["z", "123", "foo", "bar"]).unwrap();
/// assert_eq!(url, "/query?foo=bar&z=123");
/// ```
pub fn reverse<S: AsRef<str>>(route: &Route, pairs: &[S]) -> Result<String> {
    let values = value_dictionary(pairs)?;

    let mut used: HashSet<&str> = HashSet::with_capacity(route.params().len());
    let mut url = route.pattern().to_string();

    for param in route.params() {
        let value = values
            .get(param.name.as_str())
            .ok_or_else(|| ReverseError::MissingParameter {
                route: route.label().to_string(),
                parameter: param.name.clone(),
            })?;

        url = url.replacen(&param.placeholder, &escape_path(value), 1);
        used.insert(param.name.as_str());
    }

    let mut query: Vec<String> = values
        .iter()
        .filter(|(key, _)| !used.contains(*key))
        .map(|(key, value)| format!("{}={}", escape_query(key), escape_query(value)))
        .collect();

    if !query.is_empty() {
        query.sort();
        url.push('?');
        url.push_str(&query.join("&"));
    }

    Ok(url)
}

/// Groups a flat pair list into a lookup table (last write wins)
fn value_dictionary<S: AsRef<str>>(pairs: &[S]) -> Result<HashMap<&str, &str>> {
    if pairs.len() % 2 != 0 {
        return Err(ReverseError::InvalidArity {
            pairs: pairs.iter().map(|p| p.as_ref().to_string()).collect(),
        });
    }

    Ok(pairs
        .chunks_exact(2)
        .map(|pair| (pair[0].as_ref(), pair[1].as_ref()))
        .collect())
}

/// Percent-encodes a value for use inside a path segment
///
/// Unreserved characters and `$ & + : = @` are kept; everything else,
/// including `/`, `?` and spaces, is escaped.
pub fn escape_path(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut buf = [0u8; 4];

    for ch in value.chars() {
        if PATH_SAFE.contains(&ch) {
            escaped.push(ch);
        } else {
            escaped.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }

    escaped
}

/// Percent-encodes a query key or value (space becomes `+`)
pub fn escape_query(value: &str) -> String {
    urlencoding::encode(value).replace("%20", "+")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NO_PAIRS: [&str; 0] = [];

    #[test]
    fn test_static_route_unchanged() {
        let route = Route::compile("/about");
        assert_eq!(reverse(&route, &NO_PAIRS).unwrap(), "/about");
    }

    #[test]
    fn test_single_param() {
        let route = Route::compile("/users/{id}");
        assert_eq!(reverse(&route, &["id", "42"]).unwrap(), "/users/42");
    }

    #[test]
    fn test_accepts_owned_strings() {
        let route = Route::compile("/users/{id}");
        let pairs = vec!["id".to_string(), "7".to_string()];
        assert_eq!(reverse(&route, &pairs).unwrap(), "/users/7");
    }

    #[test]
    fn test_query_sorted() {
        let route = Route::compile("/query");
        assert_eq!(
            reverse(&route, &["z", "123", "foo", "bar"]).unwrap(),
            "/query?foo=bar&z=123"
        );
    }

    #[test]
    fn test_odd_pairs_rejected() {
        let route = Route::compile("/about");
        assert_eq!(
            reverse(&route, &["lonely"]),
            Err(ReverseError::InvalidArity {
                pairs: vec!["lonely".to_string()],
            })
        );
    }

    #[test]
    fn test_odd_pairs_checked_before_params() {
        let route = Route::compile("/users/{id}");
        assert!(matches!(
            reverse(&route, &["id", "1", "extra"]),
            Err(ReverseError::InvalidArity { .. })
        ));
    }

    #[test]
    fn test_missing_param_uses_pattern_when_unnamed() {
        let route = Route::compile("/photos/{year}/{month}");
        assert_eq!(
            reverse(&route, &["year", "2019"]),
            Err(ReverseError::MissingParameter {
                route: "/photos/{year}/{month}".to_string(),
                parameter: "month".to_string(),
            })
        );
    }

    #[test]
    fn test_last_duplicate_key_wins() {
        let route = Route::compile("/users/{id}");
        assert_eq!(reverse(&route, &["id", "1", "id", "2"]).unwrap(), "/users/2");
    }

    #[test]
    fn test_repeated_name_gets_same_value() {
        let route = Route::compile("/{lang}/docs/{lang:[a-z]{2}}/{lang}");
        assert_eq!(reverse(&route, &["lang", "en"]).unwrap(), "/en/docs/en/en");
    }

    #[test]
    fn test_escape_path() {
        assert_eq!(escape_path("plain-value_1.2~"), "plain-value_1.2~");
        assert_eq!(escape_path("a b"), "a%20b");
        assert_eq!(escape_path("a/b?c;d,e"), "a%2Fb%3Fc%3Bd%2Ce");
        assert_eq!(escape_path("$&+:=@"), "$&+:=@");
        assert_eq!(escape_path("{x}"), "%7Bx%7D");
        assert_eq!(escape_path("é"), "%C3%A9");
    }

    #[test]
    fn test_escape_query() {
        assert_eq!(escape_query("hello world"), "hello+world");
        assert_eq!(escape_query("a&b=c"), "a%26b%3Dc");
        assert_eq!(escape_query("a+b"), "a%2Bb");
        assert_eq!(escape_query("100%"), "100%25");
        assert_eq!(escape_query("/path"), "%2Fpath");
    }
}
