use serde::{Deserialize, Serialize};

/// Content type used for every error body returned by the API.
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

/// Error payload returned by the API with the `application/problem+json`
/// content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Always `"error"`.
    pub object: String,
    pub status: u16,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invalid_parameters: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub see_also: Option<String>,
}

impl Problem {
    pub fn new(status: u16, details: impl Into<String>) -> Self {
        Problem {
            object: "error".to_string(),
            status,
            details: details.into(),
            invalid_parameters: None,
            see_also: None,
        }
    }

    pub fn with_invalid_parameters(mut self, params: Vec<String>) -> Self {
        self.invalid_parameters = Some(params);
        self
    }

    pub fn with_see_also(mut self, link: impl Into<String>) -> Self {
        self.see_also = Some(link.into());
        self
    }
}
