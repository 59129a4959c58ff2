/*
 * Responsibility
 * - GET /docs/swagger.json (generated OpenAPI document)
 * - GET /docs/ (Swagger UI page that loads the document)
 */
use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::api::docs::ApiDoc;

pub const SPEC_PATH: &str = "/docs/swagger.json";

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Student Management API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/docs/swagger.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

#[utoipa::path(
    get,
    path = "/docs/swagger.json",
    tag = "docs",
    responses((status = 200, description = "This OpenAPI document"))
)]
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[utoipa::path(
    get,
    path = "/docs/",
    tag = "docs",
    responses((status = 200, description = "Swagger UI page", body = String, content_type = "text/html"))
)]
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}
