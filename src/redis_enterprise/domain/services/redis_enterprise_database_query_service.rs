use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::redis_enterprise::domain::model::{
    entities::redis_enterprise_database::RedisEnterpriseDatabase,
    enums::redis_enterprise_domain_error::RedisEnterpriseDomainError,
    queries::get_redis_enterprise_database_query::GetRedisEnterpriseDatabaseQuery,
};

#[async_trait]
pub trait RedisEnterpriseDatabaseQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetRedisEnterpriseDatabaseQuery,
        cancellation: CancellationToken,
    ) -> Result<RedisEnterpriseDatabase, RedisEnterpriseDomainError>;
}
