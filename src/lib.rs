pub mod config;
pub mod redis_enterprise;
pub mod shared;
