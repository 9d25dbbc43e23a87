use serde::{Deserialize, Serialize};

/// Output record of a successful read. Built only from a complete lookup.
#[derive(Clone, Deserialize, Serialize, Eq, PartialEq)]
pub struct RedisEnterpriseDatabaseDataSourceResource {
    pub id: String,
    pub name: String,
    pub resource_group_name: String,
    pub cluster_id: String,
    pub primary_access_key: String,
    pub secondary_access_key: String,
}

impl std::fmt::Debug for RedisEnterpriseDatabaseDataSourceResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisEnterpriseDatabaseDataSourceResource")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("resource_group_name", &self.resource_group_name)
            .field("cluster_id", &self.cluster_id)
            .field("primary_access_key", &"[REDACTED]")
            .field("secondary_access_key", &"[REDACTED]")
            .finish()
    }
}
