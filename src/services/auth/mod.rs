pub mod basic;
pub mod credentials;

pub use basic::{AuthRejection, authenticate};
pub use credentials::Credentials;
