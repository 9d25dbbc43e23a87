
mod query_service_tests;
