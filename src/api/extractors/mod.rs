pub mod identity;
pub mod student_id;

pub use identity::{CurrentUser, Identity};
pub use student_id::StudentId;
