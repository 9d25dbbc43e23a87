use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::redis_enterprise::{
    domain::model::value_objects::{
        database_access_keys::DatabaseAccessKeys,
        redis_enterprise_cluster_id::REDIS_ENTERPRISE_PROVIDER, subscription_id::SubscriptionId,
    },
    infrastructure::management::repositories::redis_enterprise_database_keys_repository::{
        RedisEnterpriseDatabaseKeysRepository, RemoteOperationError,
    },
};

pub const DEFAULT_MANAGEMENT_ENDPOINT: &str = "https://management.azure.com";
pub const DEFAULT_API_VERSION: &str = "2021-03-01";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListKeysResponse {
    primary_key: Option<String>,
    secondary_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArmErrorEnvelope {
    error: ArmErrorBody,
}

#[derive(Debug, Deserialize)]
struct ArmErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Calls `databases/{name}/listKeys` on Azure Resource Manager.
pub struct ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl {
    client: Client,
    endpoint: Url,
    subscription_id: SubscriptionId,
    api_version: String,
    access_token: String,
}

impl std::fmt::Debug for ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl")
            .field("endpoint", &self.endpoint.as_str())
            .field("subscription_id", &self.subscription_id)
            .field("api_version", &self.api_version)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl {
    pub fn new(
        client: Client,
        endpoint: &str,
        subscription_id: SubscriptionId,
        api_version: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, String> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| format!("invalid management endpoint {endpoint:?}: {e}"))?;

        if endpoint.cannot_be_a_base() {
            return Err(format!(
                "management endpoint {endpoint} cannot be used as a base URL"
            ));
        }

        Ok(Self {
            client,
            endpoint,
            subscription_id,
            api_version: api_version.into(),
            access_token: access_token.into(),
        })
    }

    fn list_keys_url(
        &self,
        resource_group: &str,
        cluster_name: &str,
        database_name: &str,
    ) -> Result<Url, RemoteOperationError> {
        let mut url = self.endpoint.clone();

        url.path_segments_mut()
            .map_err(|_| {
                RemoteOperationError::Connection(format!(
                    "management endpoint {} cannot be used as a base URL",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .extend([
                "subscriptions",
                self.subscription_id.value(),
                "resourceGroups",
                resource_group,
                "providers",
                REDIS_ENTERPRISE_PROVIDER,
                "redisEnterprise",
                cluster_name,
                "databases",
                database_name,
                "listKeys",
            ]);

        url.query_pairs_mut().append_pair("api-version", &self.api_version);

        Ok(url)
    }
}

#[async_trait]
impl RedisEnterpriseDatabaseKeysRepository for ReqwestRedisEnterpriseDatabaseKeysRepositoryImpl {
    #[instrument(skip(self), fields(subscription_id = %self.subscription_id))]
    async fn list_keys(
        &self,
        resource_group: &str,
        cluster_name: &str,
        database_name: &str,
    ) -> Result<DatabaseAccessKeys, RemoteOperationError> {
        let url = self.list_keys_url(resource_group, cluster_name, database_name)?;
        debug!(url = %url, "requesting database access keys");

        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RemoteOperationError::Timeout
                } else {
                    RemoteOperationError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            let body: ListKeysResponse = response
                .json()
                .await
                .map_err(|e| RemoteOperationError::InvalidResponse(e.to_string()))?;

            return Ok(DatabaseAccessKeys::new(
                body.primary_key.unwrap_or_default(),
                body.secondary_key.unwrap_or_default(),
            ));
        }

        let response_text = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "management API rejected listKeys");

        Err(classify_failure(status, &response_text))
    }
}

fn classify_failure(status: StatusCode, response_text: &str) -> RemoteOperationError {
    let (code, message) = match serde_json::from_str::<ArmErrorEnvelope>(response_text) {
        Ok(envelope) => (
            envelope.error.code.unwrap_or_default(),
            envelope.error.message.unwrap_or_default(),
        ),
        Err(_) => (String::new(), response_text.to_string()),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            RemoteOperationError::Unauthorized(message)
        }
        StatusCode::NOT_FOUND => RemoteOperationError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => RemoteOperationError::Throttled,
        _ => RemoteOperationError::Service {
            status: status.as_u16(),
            code,
            message,
        },
    }
}
