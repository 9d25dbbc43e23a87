pub mod redis_enterprise_database;
