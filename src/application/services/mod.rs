pub mod reporter;
pub mod session;

pub use reporter::Reporter;
pub use session::Session;
