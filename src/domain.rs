pub mod config;
pub mod errors;
pub mod options;
pub mod resources;
pub mod validation;
