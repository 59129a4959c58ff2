pub mod docs;
pub mod greeting;
pub mod students;

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

pub const STUDENTS_PATH: &str = "/students/";

/// 302 Found with a Location header (`Redirect::to` answers 303).
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
