pub mod resources;
pub mod schema;
