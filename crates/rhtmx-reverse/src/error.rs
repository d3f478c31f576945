//! Error types for URL generation and route registration

/// Errors returned when generating a URL
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReverseError {
    /// The flat pair list had an odd number of elements
    #[error("the number of parameters must be even, got {pairs:?}")]
    InvalidArity { pairs: Vec<String> },

    /// A placeholder had no matching key in the supplied pairs
    #[error("missing parameter `{parameter}` for route `{route}`")]
    MissingParameter { route: String, parameter: String },

    /// No route is registered under this name
    #[error("no route named `{name}`")]
    UnknownRoute { name: String },
}

/// Errors returned when registering routes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A route with this name is already registered
    #[error("route `{name}` already exists")]
    DuplicateRoute { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arity_message_lists_pairs() {
        let err = ReverseError::InvalidArity {
            pairs: vec!["id".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "the number of parameters must be even, got [\"id\"]"
        );
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = ReverseError::MissingParameter {
            route: "photos".to_string(),
            parameter: "month".to_string(),
        };
        assert_eq!(err.to_string(), "missing parameter `month` for route `photos`");
    }

    #[test]
    fn test_duplicate_route_message() {
        let err = RegistryError::DuplicateRoute {
            name: "home".to_string(),
        };
        assert_eq!(err.to_string(), "route `home` already exists");
    }
}
