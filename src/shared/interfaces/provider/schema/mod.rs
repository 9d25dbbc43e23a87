pub mod data_source_schema;
