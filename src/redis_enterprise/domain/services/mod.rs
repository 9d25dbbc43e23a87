pub mod redis_enterprise_database_query_service;
