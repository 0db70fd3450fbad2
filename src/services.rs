pub mod error_reporter;
pub mod parse_toluis_command;
pub mod validation_service;
pub mod validator;
