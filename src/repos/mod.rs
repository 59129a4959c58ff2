pub mod error;
pub mod student_repo;
