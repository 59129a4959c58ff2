pub mod greeting;
pub mod students;
