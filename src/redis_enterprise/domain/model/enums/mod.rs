pub mod redis_enterprise_domain_error;
