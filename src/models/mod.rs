pub mod args;
pub mod fetch_config;
pub mod result;
