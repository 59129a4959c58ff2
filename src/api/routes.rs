/*
 * Responsibility
 * - URL layout of the service (trailing slashes are part of the paths)
 * - authentication is NOT applied here: app.rs wraps the finished router
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::handlers::{
    docs::{self, SPEC_PATH},
    greeting::{goodbye, hello, index},
    students::{
        create_form, create_student, delete_student, edit_form, get_student, list_students,
        update_student,
    },
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/hello", get(hello))
        .route("/goodbye", get(goodbye))
        .route("/students/", get(list_students))
        .route("/create/", get(create_form).post(create_student))
        .route("/{student_id}/", get(get_student))
        .route("/{student_id}/edit/", get(edit_form).post(update_student))
        .route("/{student_id}/delete/", post(delete_student))
        .route("/docs/", get(docs::swagger_ui))
        .route(SPEC_PATH, get(docs::openapi_json))
}
