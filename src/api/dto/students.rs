/*
 * Responsibility
 * - request/response DTOs for students
 * - validate() does shape checks only (uniqueness is the DB's job)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::repos::student_repo::StudentRow;

const MAX_NAME_LEN: usize = 255;
const MAX_BIO_LEN: usize = 2000;
const MAX_AGE: i32 = 150;

/// Form body for `/create/` and `/{student_id}/edit/` (application/x-www-form-urlencoded).
///
/// Also returned by the GET side of those routes as the current form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct StudentForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i32,
    pub bio: String,
}

impl StudentForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.firstname.trim().is_empty() {
            return Err("firstname is required");
        }
        if self.lastname.trim().is_empty() {
            return Err("lastname is required");
        }
        if self.email.trim().is_empty() {
            return Err("email is required");
        }
        if !self.email.contains('@') {
            return Err("email must contain '@'");
        }
        if [&self.firstname, &self.lastname, &self.email]
            .iter()
            .any(|v| v.chars().count() > MAX_NAME_LEN)
        {
            return Err("firstname, lastname and email must be <= 255 chars");
        }
        if !(0..=MAX_AGE).contains(&self.age) {
            return Err("age must be between 0 and 150");
        }
        if self.bio.chars().count() > MAX_BIO_LEN {
            return Err("bio must be <= 2000 chars");
        }

        Ok(())
    }
}

impl From<StudentRow> for StudentForm {
    fn from(row: StudentRow) -> Self {
        Self {
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            age: row.age,
            bio: row.bio,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i32,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

impl From<StudentRow> for StudentResponse {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            age: row.age,
            bio: row.bio,
            created_at: row.created_at,
        }
    }
}
