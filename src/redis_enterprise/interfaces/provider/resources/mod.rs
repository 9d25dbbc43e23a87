pub mod error_response_resource;
pub mod redis_enterprise_database_data_source_request_resource;
pub mod redis_enterprise_database_data_source_resource;
