//! OpenStack client error types

use nova_inventory_cloud::CloudError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenStackError {
    #[error("environment variable {0} is not defined")]
    MissingCredential(String),

    #[error("environment variable {0} is not valid unicode")]
    InvalidCredential(String),

    #[error("Keystone authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("No '{service_type}' endpoint in service catalog (interface: {interface}, region: {region})")]
    EndpointNotFound {
        service_type: String,
        interface: String,
        region: String,
    },

    #[error("Invalid endpoint type: {0} (expected publicURL, internalURL or adminURL)")]
    InvalidEndpointType(String),

    #[error("OpenStack API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OpenStackError>;

impl From<OpenStackError> for CloudError {
    fn from(err: OpenStackError) -> Self {
        match err {
            OpenStackError::AuthenticationFailed(msg) => CloudError::AuthenticationFailed(msg),
            OpenStackError::Http(e) => CloudError::Network(e.to_string()),
            OpenStackError::JsonError(e) => CloudError::Json(e),
            other => CloudError::ApiError(other.to_string()),
        }
    }
}
