pub mod config;
pub mod devices;
pub mod scan;
