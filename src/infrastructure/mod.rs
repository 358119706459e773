pub mod collectors;
pub mod os;
pub mod sinks;
