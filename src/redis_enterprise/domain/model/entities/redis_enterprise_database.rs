use crate::redis_enterprise::domain::model::value_objects::{
    database_access_keys::DatabaseAccessKeys, redis_enterprise_cluster_id::RedisEnterpriseClusterId,
    redis_enterprise_database_id::RedisEnterpriseDatabaseId,
};

#[derive(Clone, Debug)]
pub struct RedisEnterpriseDatabase {
    id: RedisEnterpriseDatabaseId,
    name: String,
    resource_group_name: String,
    cluster_id: RedisEnterpriseClusterId,
    access_keys: DatabaseAccessKeys,
}

impl RedisEnterpriseDatabase {
    pub fn new(
        id: RedisEnterpriseDatabaseId,
        name: String,
        resource_group_name: String,
        cluster_id: RedisEnterpriseClusterId,
        access_keys: DatabaseAccessKeys,
    ) -> Self {
        Self {
            id,
            name,
            resource_group_name,
            cluster_id,
            access_keys,
        }
    }

    pub fn id(&self) -> &RedisEnterpriseDatabaseId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resource_group_name(&self) -> &str {
        &self.resource_group_name
    }

    pub fn cluster_id(&self) -> &RedisEnterpriseClusterId {
        &self.cluster_id
    }

    pub fn access_keys(&self) -> &DatabaseAccessKeys {
        &self.access_keys
    }
}
