pub mod entities;
pub mod ports;
pub mod report_parser;
pub mod rules;
pub mod value_objects;
