/*
 * Responsibility
 * - students CRUD handlers
 * - Path/Form extraction → DTO validation → repo call
 * - write operations answer with a 302 back to the list (form-post flow)
 */
use axum::{
    Form, Json,
    extract::State,
    response::Response,
};

use super::{STUDENTS_PATH, found};
use crate::{
    api::{
        dto::students::{StudentForm, StudentResponse},
        extractors::StudentId,
    },
    error::AppError,
    repos::student_repo,
    state::AppState,
};

const RESOURCE: &str = "student";

fn validated(form: &StudentForm) -> Result<(), AppError> {
    form.validate()
        .map_err(|msg| AppError::bad_request("INVALID_STUDENT", msg))
}

#[utoipa::path(
    get,
    path = "/students/",
    tag = "students",
    responses((status = 200, description = "List all students", body = [StudentResponse]))
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, AppError> {
    let rows = student_repo::list(&state.db).await?;

    Ok(Json(rows.into_iter().map(StudentResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/{student_id}/",
    tag = "students",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Fetch student details", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
) -> Result<Json<StudentResponse>, AppError> {
    let row = student_repo::get(&state.db, student_id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

#[utoipa::path(
    get,
    path = "/create/",
    tag = "students",
    responses((status = 200, description = "Blank student form", body = StudentForm))
)]
pub async fn create_form() -> Json<StudentForm> {
    Json(StudentForm::default())
}

#[utoipa::path(
    post,
    path = "/create/",
    tag = "students",
    request_body(content = StudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Redirect to student list after creation"),
        (status = 400, description = "Invalid form values"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    Form(form): Form<StudentForm>,
) -> Result<Response, AppError> {
    validated(&form)?;

    let row = student_repo::create(
        &state.db,
        &form.firstname,
        &form.lastname,
        &form.email,
        form.age,
        &form.bio,
    )
    .await?;
    tracing::info!(student_id = row.id, "student created");

    Ok(found(STUDENTS_PATH))
}

#[utoipa::path(
    get,
    path = "/{student_id}/edit/",
    tag = "students",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 200, description = "Current form values of the student", body = StudentForm),
        (status = 404, description = "Student not found")
    )
)]
pub async fn edit_form(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
) -> Result<Json<StudentForm>, AppError> {
    let row = student_repo::get(&state.db, student_id)
        .await?
        .ok_or(AppError::not_found(RESOURCE))?;

    Ok(Json(row.into()))
}

#[utoipa::path(
    post,
    path = "/{student_id}/edit/",
    tag = "students",
    params(("student_id" = i64, Path, description = "Student id")),
    request_body(content = StudentForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Student updated, redirect to students list"),
        (status = 400, description = "Invalid form values"),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Email already in use")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
    Form(form): Form<StudentForm>,
) -> Result<Response, AppError> {
    validated(&form)?;

    student_repo::update(
        &state.db,
        student_id,
        &form.firstname,
        &form.lastname,
        &form.email,
        form.age,
        &form.bio,
    )
    .await?
    .ok_or(AppError::not_found(RESOURCE))?;
    tracing::info!(student_id, "student updated");

    Ok(found(STUDENTS_PATH))
}

#[utoipa::path(
    post,
    path = "/{student_id}/delete/",
    tag = "students",
    params(("student_id" = i64, Path, description = "Student id")),
    responses(
        (status = 302, description = "Student deleted and redirected"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    StudentId(student_id): StudentId,
) -> Result<Response, AppError> {
    if !student_repo::delete(&state.db, student_id).await? {
        return Err(AppError::not_found(RESOURCE));
    }
    tracing::info!(student_id, "student deleted");

    Ok(found(STUDENTS_PATH))
}
