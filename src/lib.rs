// src/lib.rs

pub mod adapters;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;
