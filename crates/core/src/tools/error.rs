use std::time::Duration;

use thiserror::Error;

/// Why a tool call did not succeed.
///
/// The `Display` form is what the agent sees, so every variant renders as a
/// complete sentence starting with the failure marker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// A required argument was missing or blank; no request was sent
    #[error("❌ {0}")]
    Validation(String),

    /// The service answered 404 for a lookup
    #[error("❌ {0}")]
    NotFound(String),

    /// The service answered with an unexpected status
    #[error("❌ {context}. Status code: {status}, Response: {body}")]
    Remote {
        context: &'static str,
        status: u16,
        body: String,
    },

    /// Nothing was listening at the configured address
    #[error(
        "❌ Error: Could not connect to {service} service at {location}. \
         Please ensure the mock {service} service is running."
    )]
    Connect {
        service: &'static str,
        location: String,
    },

    #[error("❌ Error: Request to {service} service timed out after {timeout:?}.")]
    Timeout {
        service: &'static str,
        timeout: Duration,
    },

    /// Any other transport or decoding failure
    #[error("❌ Error {action}: {message}")]
    Transport {
        action: &'static str,
        message: String,
    },
}

impl ToolError {
    /// Reject the call when any named argument is blank
    pub(crate) fn require(fields: &[(&str, &str)]) -> Result<(), ToolError> {
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        match missing.as_slice() {
            [] => Ok(()),
            [one] => Err(ToolError::Validation(format!(
                "Missing required parameter: {}",
                one
            ))),
            many => Err(ToolError::Validation(format!(
                "Missing required parameters: {}",
                many.join(", ")
            ))),
        }
    }

    /// True when the call was rejected before any request was made
    pub fn is_validation(&self) -> bool {
        matches!(self, ToolError::Validation(_))
    }
}
