//! Session extractor — resolve or mint the browser-session cookie.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::services::session::{generate_token, is_valid_token, token_tag};
use crate::state::AppState;

pub const COOKIE_NAME: &str = "neocel_session";

/// The caller's session. Every handler takes one and returns `jar` with its
/// response so a freshly minted token reaches the browser.
pub struct Session {
    pub token: String,
    /// Empty for known sessions; carries `Set-Cookie` for new ones.
    pub jar: CookieJar,
}

impl<S> FromRequestParts<S> for Session
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(token) = jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| is_valid_token(t)) {
            return Ok(Self { token: token.to_owned(), jar: CookieJar::new() });
        }

        let app_state = AppState::from_ref(state);
        let token = generate_token();
        tracing::debug!(session = token_tag(&token), "issuing session cookie");
        let cookie = Cookie::build((COOKIE_NAME, token.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(app_state.cookie_secure);

        Ok(Self { token, jar: CookieJar::new().add(cookie) })
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
