pub mod interrupt;
pub mod privilege;
