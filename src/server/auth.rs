//! Shared-secret authentication.
//!
//! API clients send the secret in the `x-catsite-auth` header; browsers log in
//! once through `POST /auth` and send it back as the `catsite` cookie.

use axum::extract::rejection::FormRejection;
use axum::extract::{Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};

use super::types::{AppState, LoginForm};
use crate::config::{AUTH_COOKIE, AUTH_HEADER};

/// Served with 403 to unauthenticated requests.
pub const LOGIN_PAGE: &str = include_str!("login.html");

fn forbidden() -> Response {
    (StatusCode::FORBIDDEN, Html(LOGIN_PAGE)).into_response()
}

/// Values of the named cookie across all `Cookie` headers.
fn cookie_values<'a>(headers: &'a HeaderMap, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .filter(move |(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Whether the request carries the secret in the header or the cookie.
pub fn is_authorized(headers: &HeaderMap, secret: &str) -> bool {
    let header_ok = headers
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == secret);
    header_ok || cookie_values(headers, AUTH_COOKIE).any(|value| value == secret)
}

/// Rejects unauthenticated requests with the login page.
pub async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if is_authorized(request.headers(), &state.auth_secret) {
        next.run(request).await
    } else {
        log::debug!("Rejected unauthenticated {} {}", request.method(), request.uri().path());
        forbidden()
    }
}

/// `POST /auth`: sets the auth cookie when the submitted secret matches.
pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(form)) if form.auth == *state.auth_secret => {
            let cookie = format!(
                "{AUTH_COOKIE}={}; Path=/; HttpOnly; SameSite=Strict",
                state.auth_secret
            );
            (
                [(SET_COOKIE, cookie)],
                Json(serde_json::json!({ "success": "authenticated" })),
            )
                .into_response()
        }
        Ok(_) => {
            log::info!("Login attempt with wrong secret");
            forbidden()
        }
        Err(rejection) => {
            log::debug!("Malformed login form: {rejection}");
            forbidden()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_header_secret() {
        assert!(is_authorized(&headers(&[("x-catsite-auth", "s3cret")]), "s3cret"));
        assert!(!is_authorized(&headers(&[("x-catsite-auth", "wrong")]), "s3cret"));
        assert!(!is_authorized(&HeaderMap::new(), "s3cret"));
    }

    #[test]
    fn test_cookie_secret_among_other_cookies() {
        let h = headers(&[("cookie", "theme=dark; catsite=s3cret; lang=en")]);
        assert!(is_authorized(&h, "s3cret"));

        let h = headers(&[("cookie", "theme=dark"), ("cookie", "catsite=s3cret")]);
        assert!(is_authorized(&h, "s3cret"));

        let h = headers(&[("cookie", "notcatsite=s3cret; catsite=nope")]);
        assert!(!is_authorized(&h, "s3cret"));
    }

    #[test]
    fn test_login_page_posts_to_auth() {
        assert!(LOGIN_PAGE.contains("\"/auth\""));
        assert!(LOGIN_PAGE.contains("name=\"auth\""));
    }
}
