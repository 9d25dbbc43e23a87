use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use crate::redis_enterprise::{
    domain::{
        model::{
            entities::redis_enterprise_database::RedisEnterpriseDatabase,
            enums::redis_enterprise_domain_error::RedisEnterpriseDomainError,
            queries::get_redis_enterprise_database_query::GetRedisEnterpriseDatabaseQuery,
            value_objects::{
                redis_enterprise_database_id::RedisEnterpriseDatabaseId,
                subscription_id::SubscriptionId,
            },
        },
        services::redis_enterprise_database_query_service::RedisEnterpriseDatabaseQueryService,
    },
    infrastructure::management::repositories::redis_enterprise_database_keys_repository::RedisEnterpriseDatabaseKeysRepository,
};

pub struct RedisEnterpriseDatabaseQueryServiceImpl {
    keys_repository: Arc<dyn RedisEnterpriseDatabaseKeysRepository>,
    subscription_id: SubscriptionId,
}

impl RedisEnterpriseDatabaseQueryServiceImpl {
    pub fn new(
        keys_repository: Arc<dyn RedisEnterpriseDatabaseKeysRepository>,
        subscription_id: SubscriptionId,
    ) -> Self {
        Self {
            keys_repository,
            subscription_id,
        }
    }
}

#[async_trait]
impl RedisEnterpriseDatabaseQueryService for RedisEnterpriseDatabaseQueryServiceImpl {
    #[instrument(
        skip(self, query, cancellation),
        fields(
            database_name = %query.database_name(),
            resource_group = %query.resource_group_name(),
            cluster_name = %query.cluster_id().cluster_name(),
        )
    )]
    async fn handle_get(
        &self,
        query: GetRedisEnterpriseDatabaseQuery,
        cancellation: CancellationToken,
    ) -> Result<RedisEnterpriseDatabase, RedisEnterpriseDomainError> {
        let id = RedisEnterpriseDatabaseId::new(
            self.subscription_id.value(),
            query.resource_group_name(),
            query.cluster_id().cluster_name(),
            query.database_name(),
        );

        let list_keys = self.keys_repository.list_keys(
            id.resource_group(),
            id.cluster_name(),
            id.database_name(),
        );

        let outcome = tokio::select! {
            _ = cancellation.cancelled() => None,
            result = tokio::time::timeout(query.read_timeout(), list_keys) => Some(result),
        };

        let access_keys = match outcome {
            None => {
                warn!("database key lookup cancelled");
                return Err(RedisEnterpriseDomainError::ReadCancelled {
                    database_name: id.database_name().to_string(),
                    resource_group: id.resource_group().to_string(),
                    cluster_name: id.cluster_name().to_string(),
                });
            }
            Some(Err(_elapsed)) => {
                warn!(timeout = ?query.read_timeout(), "database key lookup timed out");
                return Err(RedisEnterpriseDomainError::ReadTimedOut {
                    database_name: id.database_name().to_string(),
                    resource_group: id.resource_group().to_string(),
                    cluster_name: id.cluster_name().to_string(),
                    timeout: query.read_timeout(),
                });
            }
            Some(Ok(Err(source))) => {
                warn!(error = %source, "listing database access keys failed");
                return Err(RedisEnterpriseDomainError::ListKeysFailed {
                    database_name: id.database_name().to_string(),
                    resource_group: id.resource_group().to_string(),
                    cluster_name: id.cluster_name().to_string(),
                    source,
                });
            }
            Some(Ok(Ok(access_keys))) => access_keys,
        };

        info!(id = %id, "read Redis Enterprise database access keys");

        Ok(RedisEnterpriseDatabase::new(
            id,
            query.database_name().to_string(),
            query.resource_group_name().to_string(),
            query.cluster_id().clone(),
            access_keys,
        ))
    }
}
