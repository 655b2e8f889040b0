use serde::Serialize;
use std::fmt;

/// Domain reported for every error the point of sale app sends back in a
/// callback.
pub const ERROR_DOMAIN: &str = "register_sdk.response_error";

/// Details of the API error that occurred during the payment request,
/// decoded from the error branch of a callback URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseError {
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl ResponseError {
    pub(crate) fn new(code: String, description: Option<String>) -> ResponseError {
        ResponseError { code, description }
    }

    pub fn domain(&self) -> &str {
        ERROR_DOMAIN
    }

    /// Machine-readable error code as sent by the point of sale app.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message, when the app included one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match &self.description {
            Some(d) => write!(f, "{} ({}): {}", self.code, ERROR_DOMAIN, d),
            None => write!(f, "{} ({})", self.code, ERROR_DOMAIN),
        }
    }
}
