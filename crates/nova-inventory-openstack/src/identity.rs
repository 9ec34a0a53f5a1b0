//! Keystone identity API client
//!
//! Issues a scoped token for the configured tenant and returns it together
//! with the service catalog. Both the v2.0 (`/tokens`) and v3
//! (`/auth/tokens`) APIs are supported; the version is picked from the auth
//! URL.

use crate::credentials::Credentials;
use crate::error::{OpenStackError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

/// Which endpoint of a catalog entry to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndpointInterface {
    #[default]
    Public,
    Internal,
    Admin,
}

impl EndpointInterface {
    /// v3 catalog `interface` value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for EndpointInterface {
    type Err = OpenStackError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "publicURL" | "public" => Ok(Self::Public),
            "internalURL" | "internal" => Ok(Self::Internal),
            "adminURL" | "admin" => Ok(Self::Admin),
            other => Err(OpenStackError::InvalidEndpointType(other.to_string())),
        }
    }
}

/// One endpoint of a catalog service, normalized across API versions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub interface: EndpointInterface,
    pub region: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogService {
    pub service_type: String,
    pub endpoints: Vec<Endpoint>,
}

/// Service catalog returned alongside a token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    pub services: Vec<CatalogService>,
}

impl ServiceCatalog {
    /// Find the URL of a service endpoint
    ///
    /// When `region` is `None` the first endpoint with the right interface
    /// is used.
    pub fn find_endpoint(
        &self,
        service_type: &str,
        interface: EndpointInterface,
        region: Option<&str>,
    ) -> Option<&str> {
        self.services
            .iter()
            .filter(|s| s.service_type == service_type)
            .flat_map(|s| s.endpoints.iter())
            .filter(|e| e.interface == interface)
            .find(|e| match region {
                Some(r) => e.region.as_deref() == Some(r),
                None => true,
            })
            .map(|e| e.url.trim_end_matches('/'))
    }

    /// Same as `find_endpoint`, but a miss is an error
    pub fn require_endpoint(
        &self,
        service_type: &str,
        interface: EndpointInterface,
        region: Option<&str>,
    ) -> Result<&str> {
        self.find_endpoint(service_type, interface, region)
            .ok_or_else(|| OpenStackError::EndpointNotFound {
                service_type: service_type.to_string(),
                interface: interface.as_str().to_string(),
                region: region.unwrap_or("*").to_string(),
            })
    }
}

/// Scoped token
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub id: String,
    pub catalog: ServiceCatalog,
}

/// Keystone client
pub struct Keystone {
    client: reqwest::Client,
}

impl Keystone {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Authenticate with username/password scoped to the tenant
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthToken> {
        if credentials.is_identity_v3() {
            self.authenticate_v3(credentials).await
        } else {
            self.authenticate_v2(credentials).await
        }
    }

    async fn authenticate_v2(&self, credentials: &Credentials) -> Result<AuthToken> {
        let url = format!("{}/tokens", credentials.auth_url.trim_end_matches('/'));
        let body = V2AuthRequest {
            auth: V2Auth {
                tenant_name: credentials.tenant_name.clone(),
                password_credentials: V2PasswordCredentials {
                    username: credentials.username.clone(),
                    password: credentials.password.clone(),
                },
            },
        };

        tracing::debug!("POST {} (identity v2.0)", url);

        let response = self.client.post(&url).json(&body).send().await?;
        let response = check_auth_status(response).await?;
        let access: V2AccessResponse = response.json().await?;

        Ok(access.into_token())
    }

    async fn authenticate_v3(&self, credentials: &Credentials) -> Result<AuthToken> {
        let url = format!("{}/auth/tokens", credentials.auth_url.trim_end_matches('/'));
        let body = V3AuthRequest::password(credentials);

        tracing::debug!("POST {} (identity v3)", url);

        let response = self.client.post(&url).json(&body).send().await?;
        let response = check_auth_status(response).await?;

        let token_id = response
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                OpenStackError::AuthenticationFailed(format!(
                    "response carries no {} header",
                    SUBJECT_TOKEN_HEADER
                ))
            })?;

        let token: V3TokenResponse = response.json().await?;
        Ok(AuthToken {
            id: token_id,
            catalog: token.token.into_catalog(),
        })
    }
}

async fn check_auth_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(OpenStackError::AuthenticationFailed(format!(
            "{}: {}",
            status, message
        )));
    }

    Err(OpenStackError::ApiError {
        status: status.as_u16(),
        message,
    })
}

// ============ v2.0 API Types ============

#[derive(Debug, Serialize)]
struct V2AuthRequest {
    auth: V2Auth,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct V2Auth {
    tenant_name: String,
    password_credentials: V2PasswordCredentials,
}

#[derive(Debug, Serialize)]
struct V2PasswordCredentials {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct V2AccessResponse {
    access: V2Access,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct V2Access {
    token: V2Token,
    #[serde(default)]
    service_catalog: Vec<V2Service>,
}

#[derive(Debug, Deserialize)]
struct V2Token {
    id: String,
}

#[derive(Debug, Deserialize)]
struct V2Service {
    #[serde(rename = "type")]
    r#type: String,
    #[serde(default)]
    endpoints: Vec<V2Endpoint>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct V2Endpoint {
    region: Option<String>,
    #[serde(rename = "publicURL")]
    public_url: Option<String>,
    #[serde(rename = "internalURL")]
    internal_url: Option<String>,
    #[serde(rename = "adminURL")]
    admin_url: Option<String>,
}

impl V2AccessResponse {
    fn into_token(self) -> AuthToken {
        let services = self
            .access
            .service_catalog
            .into_iter()
            .map(|s| CatalogService {
                service_type: s.r#type,
                endpoints: s
                    .endpoints
                    .into_iter()
                    .flat_map(|e| {
                        let region = e.region;
                        [
                            (EndpointInterface::Public, e.public_url),
                            (EndpointInterface::Internal, e.internal_url),
                            (EndpointInterface::Admin, e.admin_url),
                        ]
                        .into_iter()
                        .filter_map(move |(interface, url)| {
                            url.map(|url| Endpoint {
                                interface,
                                region: region.clone(),
                                url,
                            })
                        })
                    })
                    .collect(),
            })
            .collect();

        AuthToken {
            id: self.access.token.id,
            catalog: ServiceCatalog { services },
        }
    }
}

// ============ v3 API Types ============

#[derive(Debug, Serialize)]
struct V3AuthRequest {
    auth: V3Auth,
}

#[derive(Debug, Serialize)]
struct V3Auth {
    identity: V3Identity,
    scope: V3Scope,
}

#[derive(Debug, Serialize)]
struct V3Identity {
    methods: Vec<String>,
    password: V3Password,
}

#[derive(Debug, Serialize)]
struct V3Password {
    user: V3User,
}

#[derive(Debug, Serialize)]
struct V3User {
    name: String,
    domain: V3Named,
    password: String,
}

#[derive(Debug, Serialize)]
struct V3Scope {
    project: V3Project,
}

#[derive(Debug, Serialize)]
struct V3Project {
    name: String,
    domain: V3Named,
}

#[derive(Debug, Serialize)]
struct V3Named {
    name: String,
}

impl V3AuthRequest {
    fn password(credentials: &Credentials) -> Self {
        Self {
            auth: V3Auth {
                identity: V3Identity {
                    methods: vec!["password".to_string()],
                    password: V3Password {
                        user: V3User {
                            name: credentials.username.clone(),
                            domain: V3Named {
                                name: credentials.user_domain_name.clone(),
                            },
                            password: credentials.password.clone(),
                        },
                    },
                },
                scope: V3Scope {
                    project: V3Project {
                        name: credentials.tenant_name.clone(),
                        domain: V3Named {
                            name: credentials.project_domain_name.clone(),
                        },
                    },
                },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct V3TokenResponse {
    token: V3Token,
}

#[derive(Debug, Deserialize)]
struct V3Token {
    #[serde(default)]
    catalog: Vec<V3Service>,
}

#[derive(Debug, Deserialize)]
struct V3Service {
    #[serde(rename = "type")]
    r#type: String,
    #[serde(default)]
    endpoints: Vec<V3Endpoint>,
}

#[derive(Debug, Deserialize)]
struct V3Endpoint {
    interface: String,
    region: Option<String>,
    url: String,
}

impl V3Token {
    fn into_catalog(self) -> ServiceCatalog {
        let services = self
            .catalog
            .into_iter()
            .map(|s| CatalogService {
                service_type: s.r#type,
                endpoints: s
                    .endpoints
                    .into_iter()
                    .filter_map(|e| {
                        let interface = e.interface.parse().ok()?;
                        Some(Endpoint {
                            interface,
                            region: e.region,
                            url: e.url,
                        })
                    })
                    .collect(),
            })
            .collect();

        ServiceCatalog { services }
    }
}
