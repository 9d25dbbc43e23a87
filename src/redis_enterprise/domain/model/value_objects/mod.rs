pub mod database_access_keys;
pub mod redis_enterprise_cluster_id;
pub mod redis_enterprise_database_id;
pub mod subscription_id;
