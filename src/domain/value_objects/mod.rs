pub mod severity;
pub mod verbosity;

pub use severity::Severity;
pub use verbosity::Verbosity;
