//! Session identity resolution.
//!
//! Sessions are anonymous per-browser identifiers carried in a long-lived
//! cookie. The resolver never touches storage: the id is purely a partition
//! key for the bookmark collection. Resolution returns a single structure
//! holding the id plus an optional cookie directive for the transport layer
//! to apply, so handlers never deal with a dual-shaped return value.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "sessionId";

/// Cookie lifetime, 7 days.
const SESSION_TTL_SECONDS: i64 = 60 * 60 * 24 * 7;

#[derive(Debug)]
pub struct SessionResolution {
    pub session_id: String,
    /// Present only when a new session was issued on this request.
    pub cookie: Option<Cookie<'static>>,
}

/// Returns the session id from the jar when present, otherwise issues a
/// fresh UUID v4 together with the cookie to set on the response.
///
/// A present-but-empty cookie value yields an empty `session_id`; callers
/// must treat that as an unresolvable session and reject the request.
pub fn resolve_session(jar: &CookieJar, secure: bool) -> SessionResolution {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return SessionResolution {
            session_id: cookie.value().to_string(),
            cookie: None,
        };
    }

    let session_id = Uuid::new_v4().to_string();
    let cookie = build_session_cookie(&session_id, secure);

    SessionResolution {
        session_id,
        cookie: Some(cookie),
    }
}

fn build_session_cookie(session_id: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(SESSION_TTL_SECONDS))
        .build()
}
