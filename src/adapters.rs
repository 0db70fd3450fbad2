pub mod cli;
pub mod config_loader;
pub mod converter;
pub mod filesystem;
pub mod progress;
