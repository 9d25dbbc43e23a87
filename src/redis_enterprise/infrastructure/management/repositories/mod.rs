pub mod arm;
pub mod redis_enterprise_database_keys_repository;
