pub mod config_loader;
pub mod converter;
pub mod filesystem;
