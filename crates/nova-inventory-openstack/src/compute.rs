//! Nova compute API client

use crate::error::{OpenStackError, Result};
use nova_inventory_cloud::Instance;
use serde::Deserialize;

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Nova client bound to one compute endpoint and token
pub struct Nova {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl Nova {
    pub fn new(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// List all servers with addresses and metadata in one call
    pub async fn list_servers_detail(&self) -> Result<Vec<Instance>> {
        let url = format!("{}/servers/detail", self.endpoint.trim_end_matches('/'));

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(OpenStackError::AuthenticationFailed(message));
            }
            return Err(OpenStackError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_servers(&body)
    }
}

// ============ API Types ============

#[derive(Debug, Deserialize)]
struct ServersResponse {
    servers: Vec<Instance>,
}

fn parse_servers(body: &str) -> Result<Vec<Instance>> {
    let response: ServersResponse = serde_json::from_str(body)?;
    Ok(response.servers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_servers_keeps_listing_order() {
        let body = r#"{
            "servers": [
                {"id": "b", "name": "web-02", "addresses": {}, "metadata": {}},
                {"id": "a", "name": "web-01", "addresses": {}, "metadata": {}}
            ]
        }"#;

        let servers = parse_servers(body).unwrap();
        let ids: Vec<_> = servers.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_parse_servers_empty() {
        let servers = parse_servers(r#"{"servers": []}"#).unwrap();
        assert!(servers.is_empty());
    }

    #[test]
    fn test_parse_servers_rejects_unexpected_shape() {
        let err = parse_servers(r#"{"server": {}}"#).unwrap_err();
        assert!(matches!(err, OpenStackError::JsonError(_)));
    }
}
