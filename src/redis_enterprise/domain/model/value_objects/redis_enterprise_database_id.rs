use std::fmt;

use crate::{
    redis_enterprise::domain::model::{
        enums::redis_enterprise_domain_error::RedisEnterpriseDomainError,
        value_objects::redis_enterprise_cluster_id::{
            REDIS_ENTERPRISE_PROVIDER, RedisEnterpriseClusterId,
        },
    },
    shared::domain::model::value_objects::azure_resource_id::{
        AzureResourceId, AzureResourceIdError,
    },
};

/// Addresses one database within one cluster within one subscription.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct RedisEnterpriseDatabaseId {
    subscription_id: String,
    resource_group: String,
    cluster_name: String,
    database_name: String,
}

impl RedisEnterpriseDatabaseId {
    pub fn new(
        subscription_id: impl Into<String>,
        resource_group: impl Into<String>,
        cluster_name: impl Into<String>,
        database_name: impl Into<String>,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            resource_group: resource_group.into(),
            cluster_name: cluster_name.into(),
            database_name: database_name.into(),
        }
    }

    pub fn parse(input: &str) -> Result<Self, RedisEnterpriseDomainError> {
        Self::parse_segments(input).map_err(RedisEnterpriseDomainError::InvalidDatabaseId)
    }

    fn parse_segments(input: &str) -> Result<Self, AzureResourceIdError> {
        let mut id = AzureResourceId::parse(input)?;

        if id.resource_group().is_empty() {
            return Err(AzureResourceIdError::MissingSegment(
                "resourceGroups".to_string(),
            ));
        }

        let cluster_name = id.pop_segment("redisEnterprise")?;
        let database_name = id.pop_segment("databases")?;
        id.validate_no_remaining_segments(input)?;

        Ok(Self::new(
            id.subscription_id(),
            id.resource_group(),
            cluster_name,
            database_name,
        ))
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn cluster_id(&self) -> RedisEnterpriseClusterId {
        RedisEnterpriseClusterId::new(
            self.subscription_id.as_str(),
            self.resource_group.as_str(),
            self.cluster_name.as_str(),
        )
    }
}

impl fmt::Display for RedisEnterpriseDatabaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/subscriptions/{}/resourceGroups/{}/providers/{}/redisEnterprise/{}/databases/{}",
            self.subscription_id,
            self.resource_group,
            REDIS_ENTERPRISE_PROVIDER,
            self.cluster_name,
            self.database_name
        )
    }
}
