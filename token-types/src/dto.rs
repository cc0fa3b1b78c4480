//! Data Transfer Objects for the HTTP boundary.

use serde::{Deserialize, Serialize};

/// Query string of `GET /validate`. `token` wins over the short form `t`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateQuery {
    pub token: Option<String>,
    pub t: Option<String>,
}

impl ValidateQuery {
    /// The supplied token, if any and non-empty.
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or(self.t.as_deref())
            .filter(|token| !token.is_empty())
    }
}

/// Generic body returned for every refused validation.
///
/// Deliberately carries no detail about why the token was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnauthorizedResponse {
    pub error: String,
}

impl Default for UnauthorizedResponse {
    fn default() -> Self {
        Self {
            error: "Unauthorized".to_string(),
        }
    }
}

/// Response for the health check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_prefers_long_form() {
        let query = ValidateQuery {
            token: Some("long".into()),
            t: Some("short".into()),
        };
        assert_eq!(query.token(), Some("long"));
    }

    #[test]
    fn test_token_falls_back_to_short_form() {
        let query = ValidateQuery {
            token: None,
            t: Some("short".into()),
        };
        assert_eq!(query.token(), Some("short"));
    }

    #[test]
    fn test_empty_token_is_absent() {
        let query = ValidateQuery {
            token: Some(String::new()),
            t: None,
        };
        assert_eq!(query.token(), None);
        assert_eq!(ValidateQuery::default().token(), None);
    }

    #[test]
    fn test_unauthorized_body() {
        let body = serde_json::to_value(UnauthorizedResponse::default()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
    }
}
