use async_trait::async_trait;
use thiserror::Error;

use crate::redis_enterprise::domain::model::value_objects::database_access_keys::DatabaseAccessKeys;

#[derive(Debug, Error)]
pub enum RemoteOperationError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("authorization failed: {0}")]
    Unauthorized(String),

    #[error("request throttled by the management API")]
    Throttled,

    #[error("management API request timed out")]
    Timeout,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("management API returned status {status} ({code}): {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    #[error("invalid response from management API: {0}")]
    InvalidResponse(String),
}

/// Remote "list access keys" operation scoped to one database.
///
/// Implementations perform exactly one request per call and never retry.
#[async_trait]
pub trait RedisEnterpriseDatabaseKeysRepository: Send + Sync {
    async fn list_keys(
        &self,
        resource_group: &str,
        cluster_name: &str,
        database_name: &str,
    ) -> Result<DatabaseAccessKeys, RemoteOperationError>;
}
