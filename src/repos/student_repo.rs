/*
 * Responsibility
 * - students CRUD against PgPool
 * - DB errors are returned as RepoError (handlers map them to AppError)
 * - duplicate email on insert/update surfaces as RepoError::Conflict
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct StudentRow {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: i32,
    pub bio: String,
    pub created_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool) -> RepoResult<Vec<StudentRow>> {
    let rows = sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, email, age, bio, created_at
        FROM students
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get(db: &PgPool, student_id: i64) -> RepoResult<Option<StudentRow>> {
    let row = sqlx::query_as::<_, StudentRow>(
        r#"
        SELECT id, firstname, lastname, email, age, bio, created_at
        FROM students
        WHERE id = $1
        "#,
    )
    .bind(student_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn create(
    db: &PgPool,
    firstname: &str,
    lastname: &str,
    email: &str,
    age: i32,
    bio: &str,
) -> RepoResult<StudentRow> {
    let row = sqlx::query_as::<_, StudentRow>(
        r#"
        INSERT INTO students (firstname, lastname, email, age, bio)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, firstname, lastname, email, age, bio, created_at
        "#,
    )
    .bind(firstname)
    .bind(lastname)
    .bind(email)
    .bind(age)
    .bind(bio)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

// Full replacement of the editable fields (the edit form always posts all of them).
pub async fn update(
    db: &PgPool,
    student_id: i64,
    firstname: &str,
    lastname: &str,
    email: &str,
    age: i32,
    bio: &str,
) -> RepoResult<Option<StudentRow>> {
    let row = sqlx::query_as::<_, StudentRow>(
        r#"
        UPDATE students
        SET
            firstname = $2,
            lastname = $3,
            email = $4,
            age = $5,
            bio = $6
        WHERE id = $1
        RETURNING id, firstname, lastname, email, age, bio, created_at
        "#,
    )
    .bind(student_id)
    .bind(firstname)
    .bind(lastname)
    .bind(email)
    .bind(age)
    .bind(bio)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn delete(db: &PgPool, student_id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM students
        WHERE id = $1
        "#,
    )
    .bind(student_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
