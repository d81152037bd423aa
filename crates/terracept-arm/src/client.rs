use std::time::Duration;

use serde_json::Value;
use terracept_config::Credentials;
use terracept_domain::ResourceId;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::ArmError;
use crate::token::{AzureCliTokenProvider, ServicePrincipalTokenProvider, StaticToken, TokenProvider};

/// API version used for every `Microsoft.Network` resource the harness
/// checks.
pub const NETWORK_API_VERSION: &str = "2023-11-01";

// ── Base URLs (overridden in tests) ───────────────────────────────────────────

#[derive(Clone)]
pub struct BaseUrls {
    pub management: String,
    pub login: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            management: "https://management.azure.com".into(),
            login: "https://login.microsoftonline.com".into(),
        }
    }
}

// ── ArmClient ─────────────────────────────────────────────────────────────────

pub struct ArmClient {
    client: reqwest::Client,
    token: Box<dyn TokenProvider>,
    base: BaseUrls,
    pub subscription_id: String,
}

impl ArmClient {
    /// Create an `ArmClient`, auto-selecting the token provider:
    /// 1. `client_id` + `client_secret` in credentials → Service Principal
    /// 2. Otherwise → Azure CLI (`az account get-access-token`)
    pub fn new(credentials: &Credentials) -> Self {
        let client = reqwest::Client::new();
        let base = BaseUrls::default();

        let token: Box<dyn TokenProvider> = if let (Some(cid), Some(cs)) = (
            credentials.client_id.as_deref(),
            credentials.client_secret.as_deref(),
        ) {
            Box::new(ServicePrincipalTokenProvider {
                tenant_id: credentials.tenant_id.clone(),
                client_id: cid.to_string(),
                client_secret: cs.to_string(),
                login_base: base.login.clone(),
                client: client.clone(),
                cache: Mutex::new(None),
            })
        } else {
            Box::new(AzureCliTokenProvider {
                tenant_id: credentials.tenant_id.clone(),
            })
        };

        Self {
            client,
            token,
            base,
            subscription_id: credentials.subscription_id.clone(),
        }
    }

    /// Construct against a fixed bearer token and custom base URLs.
    /// Only useful for tests running against a mock server.
    pub fn with_static_token(subscription_id: &str, token: &str, base: BaseUrls) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: Box::new(StaticToken(token.to_string())),
            base,
            subscription_id: subscription_id.to_string(),
        }
    }

    async fn bearer(&self) -> Result<String, ArmError> {
        self.token.token().await
    }

    fn resource_url(&self, id: &ResourceId, api_version: &str) -> String {
        format!("{}{}?api-version={}", self.base.management, id.to_arm_path(), api_version)
    }

    // ── ARM error parsing ─────────────────────────────────────────────────────

    fn parse_arm_error(body: &Value) -> String {
        let err = body.get("error").or_else(|| body.get("Error")).unwrap_or(body);
        let code = err["code"].as_str().unwrap_or("Unknown");
        let message = err["message"].as_str().unwrap_or("unknown error");
        format!("{}: {}", code, message)
    }

    // ── Read ──────────────────────────────────────────────────────────────────

    /// GET a resource by ID. `Ok(None)` on 404 — absence is an expected
    /// outcome for destruction checks, not an error.
    pub async fn get_by_id(&self, id: &ResourceId) -> Result<Option<Value>, ArmError> {
        self.get_by_id_at(id, NETWORK_API_VERSION).await
    }

    pub async fn get_by_id_at(
        &self,
        id: &ResourceId,
        api_version: &str,
    ) -> Result<Option<Value>, ArmError> {
        let url = self.resource_url(id, api_version);
        let token = self.bearer().await?;
        debug!(%url, "ARM GET");

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ArmError::Request { url: url.clone(), source: e })?;

        let status = resp.status().as_u16();
        if status == 404 {
            return Ok(None);
        }

        let body: Value = resp.json().await.unwrap_or(Value::Null);
        if (200..300).contains(&status) {
            return Ok(Some(body));
        }

        Err(ArmError::Api {
            url,
            status,
            message: Self::parse_arm_error(&body),
        })
    }

    // ── Delete ────────────────────────────────────────────────────────────────

    /// DELETE a resource by ID, polling any async operation to completion.
    /// 404 counts as success — the resource is gone either way.
    pub async fn delete_by_id(&self, id: &ResourceId) -> Result<(), ArmError> {
        self.delete_by_id_at(id, NETWORK_API_VERSION).await
    }

    pub async fn delete_by_id_at(&self, id: &ResourceId, api_version: &str) -> Result<(), ArmError> {
        let url = self.resource_url(id, api_version);
        let token = self.bearer().await?;
        debug!(%url, "ARM DELETE");

        let resp = self
            .client
            .delete(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| ArmError::Request { url: url.clone(), source: e })?;

        let status = resp.status().as_u16();
        if status == 404 || status == 204 || (200..300).contains(&status) {
            if status == 202 {
                // 202 inside the 2xx range still carries an async operation
                if let Some(op_url) = Self::async_operation_url(&resp) {
                    self.wait_for_operation(&op_url).await?;
                }
            }
            return Ok(());
        }

        let body: Value = resp.json().await.unwrap_or(Value::Null);
        Err(ArmError::Api {
            url,
            status,
            message: Self::parse_arm_error(&body),
        })
    }

    fn async_operation_url(resp: &reqwest::Response) -> Option<String> {
        resp.headers()
            .get("Azure-AsyncOperation")
            .or_else(|| resp.headers().get("Location"))
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
    }

    // ── ARM async polling ─────────────────────────────────────────────────────

    /// Poll an ARM async operation URL until it completes or times out.
    ///
    /// Azure 202 responses carry `Azure-AsyncOperation` or `Location`.
    /// Backoff: `[1, 2, 4, 8, 16, 30]` cycling, max 120 polls.
    pub async fn wait_for_operation(&self, op_url: &str) -> Result<Value, ArmError> {
        let token = self.bearer().await?;
        let delays = [1u64, 2, 4, 8, 16, 30];
        let max_polls = 120;

        for (i, &delay) in delays.iter().cycle().take(max_polls).enumerate() {
            let resp = self
                .client
                .get(op_url)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| ArmError::Request { url: op_url.to_string(), source: e })?;

            let body: Value = resp.json().await.unwrap_or(Value::Null);

            let status = body["status"].as_str().unwrap_or("Unknown");
            match status {
                "Succeeded" => return Ok(body),
                "Failed" | "Canceled" => {
                    return Err(ArmError::OperationFailed {
                        status: status.to_string(),
                        message: Self::parse_arm_error(&body),
                    });
                }
                _ => {}
            }

            let poll = i + 1;
            if poll % 10 == 0 {
                info!(poll, op_url, "still waiting for ARM operation");
            } else {
                debug!(poll, op_url, delay, "ARM operation pending, waiting");
            }
            tokio::time::sleep(Duration::from_secs(delay)).await;
        }

        warn!(op_url, "ARM operation did not complete");
        Err(ArmError::OperationTimedOut {
            polls: max_polls,
            url: op_url.to_string(),
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn test_base(url: &str) -> BaseUrls {
        BaseUrls {
            management: url.to_string(),
            login: url.to_string(),
        }
    }

    fn client(server: &MockServer) -> ArmClient {
        ArmClient::with_static_token("test-sub", "fake-token", test_base(&server.uri()))
    }

    fn vnet_id() -> ResourceId {
        ResourceId::network("test-sub", "acctestRG-1234", "virtualNetworks", "acctestvn-1234")
    }

    const VNET_PATH: &str =
        "/subscriptions/test-sub/resourceGroups/acctestRG-1234/providers/Microsoft.Network/virtualNetworks/acctestvn-1234";

    #[tokio::test]
    async fn get_by_id_returns_body_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(VNET_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "acctestvn-1234",
                "properties": { "addressSpace": { "addressPrefixes": ["10.0.0.0/16"] } }
            })))
            .mount(&server)
            .await;

        let body = client(&server).get_by_id(&vnet_id()).await.unwrap().unwrap();
        assert_eq!(body["name"], "acctestvn-1234");
    }

    #[tokio::test]
    async fn get_by_id_returns_none_on_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(VNET_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": { "code": "ResourceNotFound", "message": "not found" }
            })))
            .mount(&server)
            .await;

        assert!(client(&server).get_by_id(&vnet_id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_by_id_surfaces_arm_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(VNET_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": { "code": "AuthorizationFailed", "message": "denied" }
            })))
            .mount(&server)
            .await;

        let err = client(&server).get_by_id(&vnet_id()).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("AuthorizationFailed: denied"));
    }

    #[tokio::test]
    async fn delete_by_id_treats_404_as_success() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(VNET_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        assert!(client(&server).delete_by_id(&vnet_id()).await.is_ok());
    }

    #[tokio::test]
    async fn delete_by_id_polls_async_operation() {
        let server = MockServer::start().await;
        let op_path = "/operations/op-1";
        Mock::given(method("DELETE"))
            .and(path(VNET_PATH))
            .respond_with(
                ResponseTemplate::new(202)
                    .append_header("Azure-AsyncOperation", format!("{}{}", server.uri(), op_path)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(op_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "Succeeded" })))
            .mount(&server)
            .await;

        assert!(client(&server).delete_by_id(&vnet_id()).await.is_ok());
    }

    #[tokio::test]
    async fn wait_for_operation_fails_on_failed_status() {
        let server = MockServer::start().await;
        let op_path = "/operations/op-2";
        Mock::given(method("GET"))
            .and(path(op_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "Failed",
                "error": { "code": "InternalServerError", "message": "boom" }
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .wait_for_operation(&format!("{}{}", server.uri(), op_path))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("InternalServerError: boom"));
    }

    #[test]
    fn parse_arm_error_missing_fields_gives_fallback() {
        let msg = ArmClient::parse_arm_error(&json!({}));
        assert_eq!(msg, "Unknown: unknown error");
    }

    #[test]
    fn resource_url_appends_api_version() {
        let arm = ArmClient::with_static_token("test-sub", "t", test_base("https://example"));
        let url = arm.resource_url(&vnet_id(), NETWORK_API_VERSION);
        assert_eq!(url, format!("https://example{}?api-version={}", VNET_PATH, NETWORK_API_VERSION));
    }
}
