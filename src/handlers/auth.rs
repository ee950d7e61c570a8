use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use cookie::{time::Duration as CookieDuration, Cookie, SameSite};

use crate::{
    error::AppError,
    models::{LoginPayload, LoginResponse, Session, SessionToken, SESSION_COOKIE},
    AppState,
};

const SESSION_MAX_AGE_SECONDS: i64 = 86_400;

/// `POST /api/auth/login`. A body that does not parse is a bad request,
/// never an authentication failure.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|_| AppError::BadRequest)?;

    let token = state
        .credentials
        .authenticate(&payload.email, &payload.password)
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE, token.as_str()))
        .http_only(true)
        .secure(state.config.is_production)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::seconds(SESSION_MAX_AGE_SECONDS))
        .path("/")
        .build();

    let mut response = Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        redirect_to: "/dashboard".to_string(),
    })
    .into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        HeaderValue::from_str(&cookie.to_string()).map_err(|_| AppError::Internal)?,
    );

    Ok(response)
}

/// `GET /api/auth/validate`. A missing or non-bearer header short-circuits
/// before any token comparison.
pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Session>, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .and_then(SessionToken::new)
        .ok_or(AppError::Unauthorized)?;

    let session = state.credentials.resolve(&token).await?;
    Ok(Json(session))
}

#[cfg(test)]
mod tests {
    use crate::rest::router;
    use crate::test_support::state_with_base_url;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> axum::Router {
        router(state_with_base_url("http://unused.invalid/api"))
    }

    fn login_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn login_sets_the_session_cookie() {
        let body = json!({"email": "demo@example.com", "password": "password123"});
        let response = app().oneshot(login_request(&body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("cookie set on success")
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("session=mock-session-token"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("Path=/"));
        assert!(!cookie.contains("Secure"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["redirectTo"], "/dashboard");
    }

    #[tokio::test]
    async fn login_rejects_any_other_pair() {
        let body = json!({"email": "demo@example.com", "password": "wrong"});
        let response = app().oneshot(login_request(&body.to_string())).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(body_json(response).await["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn unparsable_login_body_is_a_bad_request_not_auth_failure() {
        let response = app().oneshot(login_request("not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid request");
    }

    #[tokio::test]
    async fn validate_requires_a_bearer_header() {
        for auth in [None, Some("Token abc"), Some("Bearer")] {
            let mut builder = Request::builder().uri("/api/auth/validate");
            if let Some(value) = auth {
                builder = builder.header(header::AUTHORIZATION, value);
            }
            let response = app()
                .oneshot(builder.body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
            assert_eq!(body_json(response).await["error"], "Unauthorized");
        }
    }

    #[tokio::test]
    async fn validate_accepts_the_fixture_token() {
        let before = chrono::Utc::now();
        let request = Request::builder()
            .uri("/api/auth/validate")
            .header(header::AUTHORIZATION, "Bearer mock-session-token")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["userId"], "user-123");
        assert_eq!(body["email"], "john@example.com");
        let expires_at: chrono::DateTime<chrono::Utc> =
            body["expiresAt"].as_str().unwrap().parse().unwrap();
        assert!(expires_at > before);
    }

    #[tokio::test]
    async fn validate_rejects_other_tokens() {
        let request = Request::builder()
            .uri("/api/auth/validate")
            .header(header::AUTHORIZATION, "Bearer forged")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid token");
    }
}
