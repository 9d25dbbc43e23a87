pub mod azure_resource_id;
pub mod duration_literal;
