pub mod timeouts_resource;
