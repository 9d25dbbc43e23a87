pub mod redis_enterprise_database_data_source_controller;
