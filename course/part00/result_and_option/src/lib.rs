pub mod config;
pub mod driver;
pub mod option;
pub mod result;
pub mod tracing_init;
