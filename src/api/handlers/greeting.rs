/*
 * Responsibility
 * - GET /, /hello, /goodbye
 * - /hello reads the identity put in place by the basic auth gate
 */
use axum::{Json, response::Response};

use super::{STUDENTS_PATH, found};
use crate::api::{dto::greeting::GreetingResponse, extractors::CurrentUser};

#[utoipa::path(
    get,
    path = "/",
    tag = "navigation",
    responses((status = 302, description = "Redirect to students list"))
)]
pub async fn index() -> Response {
    found(STUDENTS_PATH)
}

#[utoipa::path(
    get,
    path = "/hello",
    tag = "navigation",
    responses((status = 200, description = "Greets the authenticated user", body = GreetingResponse))
)]
pub async fn hello(CurrentUser(user): CurrentUser) -> Json<GreetingResponse> {
    Json(GreetingResponse::hello(&user.name))
}

#[utoipa::path(
    get,
    path = "/goodbye",
    tag = "navigation",
    responses((status = 302, description = "Redirect to students list"))
)]
pub async fn goodbye() -> Response {
    found(STUDENTS_PATH)
}
