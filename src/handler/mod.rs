pub mod schema_init;
