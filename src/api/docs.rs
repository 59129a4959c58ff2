//! OpenAPI document for every route behind the gate.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::{greeting::GreetingResponse, students::{StudentForm, StudentResponse}};
use crate::api::handlers::{docs, greeting, students};

pub const SECURITY_SCHEME: &str = "basic_auth";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Management API",
        description = "Student records behind HTTP Basic authentication."
    ),
    paths(
        greeting::index,
        greeting::hello,
        greeting::goodbye,
        students::list_students,
        students::get_student,
        students::create_form,
        students::create_student,
        students::edit_form,
        students::update_student,
        students::delete_student,
        docs::swagger_ui,
        docs::openapi_json,
    ),
    components(schemas(GreetingResponse, StudentForm, StudentResponse)),
    modifiers(&BasicAuthScheme),
    security(("basic_auth" = [])),
    tags(
        (name = "navigation", description = "Redirects and greeting"),
        (name = "students", description = "Student records"),
        (name = "docs", description = "API documentation"),
    )
)]
pub struct ApiDoc;

struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            SECURITY_SCHEME,
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
        );
    }
}
