use std::time::Duration;

use crate::redis_enterprise::domain::model::{
    enums::redis_enterprise_domain_error::RedisEnterpriseDomainError,
    value_objects::redis_enterprise_cluster_id::RedisEnterpriseClusterId,
};

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Inputs of one database key lookup.
///
/// `database_name` and `resource_group_name` are kept exactly as supplied so
/// they can be echoed back on success.
#[derive(Clone, Debug)]
pub struct GetRedisEnterpriseDatabaseQuery {
    database_name: String,
    resource_group_name: String,
    cluster_id: RedisEnterpriseClusterId,
    read_timeout: Duration,
}

impl GetRedisEnterpriseDatabaseQuery {
    pub fn new(
        database_name: String,
        resource_group_name: String,
        cluster_id: String,
        read_timeout: Duration,
    ) -> Result<Self, RedisEnterpriseDomainError> {
        if database_name.trim().is_empty() {
            return Err(RedisEnterpriseDomainError::InvalidInput(
                "name is required".to_string(),
            ));
        }

        if resource_group_name.trim().is_empty() {
            return Err(RedisEnterpriseDomainError::InvalidInput(
                "resource_group_name is required".to_string(),
            ));
        }

        if read_timeout.is_zero() {
            return Err(RedisEnterpriseDomainError::InvalidInput(
                "read timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            database_name,
            resource_group_name,
            cluster_id: RedisEnterpriseClusterId::parse(&cluster_id)?,
            read_timeout,
        })
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn resource_group_name(&self) -> &str {
        &self.resource_group_name
    }

    pub fn cluster_id(&self) -> &RedisEnterpriseClusterId {
        &self.cluster_id
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }
}
