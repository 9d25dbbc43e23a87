pub mod reqwest_redis_enterprise_database_keys_repository_impl;
