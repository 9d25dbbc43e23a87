pub mod get_redis_enterprise_database_query;
