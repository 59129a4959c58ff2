//! Basic auth gate: validate `Authorization` on every request → put `Identity`
//! into extensions → run the wrapped router.
//!
//! Rejections are terminal: the wrapped router is never called. Bodies are plain
//! text and part of the observable contract. This layer does not log.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::extractors::Identity;
use crate::services::auth::{AuthRejection, Credentials, authenticate};

pub const CHALLENGE: &str = r#"Basic realm="Login Required""#;

/// Wrap the whole router with the gate.
///
/// Call this after every route and nested router has been added so nothing is
/// reachable without credentials.
pub fn apply(router: Router, credentials: Arc<Credentials>) -> Router {
    router.layer(middleware::from_fn_with_state(credentials, basic_auth_middleware))
}

async fn basic_auth_middleware(
    State(credentials): State<Arc<Credentials>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthRejection> {
    let username = authenticate(&credentials, req.headers())?;

    req.extensions_mut().insert(Identity::new(username));

    Ok(next.run(req).await)
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let status = match self {
            AuthRejection::MissingOrInvalidScheme | AuthRejection::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AuthRejection::MalformedCredentials => StatusCode::BAD_REQUEST,
        };

        // String body → text/plain; charset=utf-8
        let mut res = (status, self.to_string()).into_response();

        if self == AuthRejection::MissingOrInvalidScheme {
            res.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(CHALLENGE),
            );
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use axum::{Json, routing::get};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::api::extractors::CurrentUser;

    fn gated(hits: Arc<AtomicUsize>) -> Router {
        let router = Router::new().route(
            "/whoami",
            get(move |CurrentUser(identity): CurrentUser| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (
                        StatusCode::IM_A_TEAPOT,
                        [("x-downstream", "yes")],
                        Json(json!({ "name": identity.name })),
                    )
                }
            }),
        );
        apply(router, Arc::new(Credentials::new("alice", "secret")))
    }

    async fn call(app: Router, authorization: Option<&str>) -> Response {
        let mut builder = Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(res: Response) -> String {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn no_header_gets_challenge() {
        let hits = Arc::new(AtomicUsize::new(0));
        let res = call(gated(hits.clone()), None).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            res.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            r#"Basic realm="Login Required""#
        );
        assert!(
            res.headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(body_text(res).await, "Missing or invalid authentication");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn bearer_scheme_gets_challenge() {
        let hits = Arc::new(AtomicUsize::new(0));
        let res = call(gated(hits.clone()), Some("Bearer xyz")).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(res.headers().contains_key(header::WWW_AUTHENTICATE));
        assert_eq!(body_text(res).await, "Missing or invalid authentication");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn undecodable_token_is_bad_request() {
        let hits = Arc::new(AtomicUsize::new(0));
        for value in ["Basic %%%not-base64%%%", "Basic bm9jb2xvbmhlcmU="] {
            let res = call(gated(hits.clone()), Some(value)).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{value}");
            assert!(!res.headers().contains_key(header::WWW_AUTHENTICATE));
            assert_eq!(body_text(res).await, "Malformed authentication credentials");
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let hits = Arc::new(AtomicUsize::new(0));
        // alice:wrong
        let res = call(gated(hits.clone()), Some("Basic YWxpY2U6d3Jvbmc=")).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert!(!res.headers().contains_key(header::WWW_AUTHENTICATE));
        assert_eq!(body_text(res).await, "Unauthorized: Invalid credentials");
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_pair_reaches_downstream_unchanged() {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = gated(hits.clone());

        for _ in 0..2 {
            let res = call(app.clone(), Some("Basic YWxpY2U6c2VjcmV0")).await;
            assert_eq!(res.status(), StatusCode::IM_A_TEAPOT);
            assert_eq!(res.headers().get("x-downstream").unwrap(), "yes");

            let body: Value = serde_json::from_str(&body_text(res).await).unwrap();
            assert_eq!(body, json!({ "name": "alice" }));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn gate_covers_unknown_paths() {
        let hits = Arc::new(AtomicUsize::new(0));
        let res = gated(hits)
            .oneshot(
                Request::builder()
                    .uri("/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
