use std::time::Duration;

use thiserror::Error;

use crate::{
    redis_enterprise::infrastructure::management::repositories::redis_enterprise_database_keys_repository::RemoteOperationError,
    shared::domain::model::value_objects::azure_resource_id::AzureResourceIdError,
};

#[derive(Debug, Error)]
pub enum RedisEnterpriseDomainError {
    #[error("parsing Redis Enterprise Cluster ID: {0}")]
    InvalidClusterId(AzureResourceIdError),

    #[error("parsing Redis Enterprise Database ID: {0}")]
    InvalidDatabaseId(AzureResourceIdError),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "listing keys for Redis Enterprise Database {database_name:?} (Resource Group {resource_group:?} / Cluster Name {cluster_name:?}): {source}"
    )]
    ListKeysFailed {
        database_name: String,
        resource_group: String,
        cluster_name: String,
        #[source]
        source: RemoteOperationError,
    },

    #[error(
        "timed out after {timeout:?} listing keys for Redis Enterprise Database {database_name:?} (Resource Group {resource_group:?} / Cluster Name {cluster_name:?})"
    )]
    ReadTimedOut {
        database_name: String,
        resource_group: String,
        cluster_name: String,
        timeout: Duration,
    },

    #[error(
        "read cancelled while listing keys for Redis Enterprise Database {database_name:?} (Resource Group {resource_group:?} / Cluster Name {cluster_name:?})"
    )]
    ReadCancelled {
        database_name: String,
        resource_group: String,
        cluster_name: String,
    },
}
