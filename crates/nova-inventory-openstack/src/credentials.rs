//! OpenStack credentials loaded from the process environment

use crate::error::{OpenStackError, Result};
use crate::identity::EndpointInterface;
use std::env::VarError;
use std::fmt;

pub const OS_USERNAME: &str = "OS_USERNAME";
pub const OS_PASSWORD: &str = "OS_PASSWORD";
pub const OS_TENANT_NAME: &str = "OS_TENANT_NAME";
pub const OS_AUTH_URL: &str = "OS_AUTH_URL";
pub const OS_REGION_NAME: &str = "OS_REGION_NAME";
pub const OS_USER_DOMAIN_NAME: &str = "OS_USER_DOMAIN_NAME";
pub const OS_PROJECT_DOMAIN_NAME: &str = "OS_PROJECT_DOMAIN_NAME";
pub const OS_ENDPOINT_TYPE: &str = "OS_ENDPOINT_TYPE";

/// Required variables, in the order they are checked
pub const REQUIRED_VARS: [&str; 4] = [OS_USERNAME, OS_PASSWORD, OS_TENANT_NAME, OS_AUTH_URL];

const DEFAULT_DOMAIN: &str = "Default";

/// Connection parameters for Keystone and Nova
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub tenant_name: String,
    pub auth_url: String,
    pub region_name: Option<String>,
    pub user_domain_name: String,
    pub project_domain_name: String,
    pub endpoint_type: EndpointInterface,
}

impl Credentials {
    /// Create Credentials from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Create Credentials from an arbitrary variable lookup
    ///
    /// The four required variables are checked in order and the first
    /// missing one is reported. Optional variables fall back to defaults.
    /// A variable that is set but not valid unicode is rejected rather than
    /// treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let var = |name: &str| match lookup(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => {
                Err(OpenStackError::InvalidCredential(name.to_string()))
            }
        };
        let required = |name: &str| {
            var(name)?.ok_or_else(|| OpenStackError::MissingCredential(name.to_string()))
        };

        let username = required(OS_USERNAME)?;
        let password = required(OS_PASSWORD)?;
        let tenant_name = required(OS_TENANT_NAME)?;
        let auth_url = required(OS_AUTH_URL)?;

        let endpoint_type = match var(OS_ENDPOINT_TYPE)? {
            Some(value) => value.parse()?,
            None => EndpointInterface::default(),
        };

        Ok(Self {
            username,
            password,
            tenant_name,
            auth_url,
            region_name: var(OS_REGION_NAME)?.filter(|r| !r.is_empty()),
            user_domain_name: var(OS_USER_DOMAIN_NAME)?
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            project_domain_name: var(OS_PROJECT_DOMAIN_NAME)?
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            endpoint_type,
        })
    }

    /// Whether the auth URL points at the Keystone v3 API
    pub fn is_identity_v3(&self) -> bool {
        self.auth_url.trim_end_matches('/').ends_with("/v3")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .field("tenant_name", &self.tenant_name)
            .field("auth_url", &self.auth_url)
            .field("region_name", &self.region_name)
            .field("endpoint_type", &self.endpoint_type)
            .finish()
    }
}
