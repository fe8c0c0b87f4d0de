use actix_session::{config::CookieContentSecurity, storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::cookie::{Key, SameSite};

use crate::types::{error::AppError, session::SessionUser};

pub const SESSION_COOKIE: &str = "time_bank_session";
const SESSION_USER_KEY: &str = "user";

/// Cookie signing/encryption needs at least 64 bytes of key material.
pub fn session_key(secret: &str) -> Result<Key, AppError> {
    Key::try_from(secret.as_bytes()).map_err(|_| {
        AppError::Internal("SESSION_SECRET must be at least 64 bytes long".to_string())
    })
}

/// Whole session lives client-side in one private (encrypted) cookie.
pub fn session_middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(SESSION_COOKIE.to_string())
        .cookie_secure(secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .cookie_content_security(CookieContentSecurity::Private)
        .build()
}

pub fn store_user(session: &Session, user: &SessionUser) -> Result<(), AppError> {
    session.renew();
    session
        .insert(SESSION_USER_KEY, user)
        .map_err(|e| AppError::Internal(format!("failed to write session: {e}")))
}

/// A cookie that cannot be decoded is treated the same as no cookie.
pub fn load_user(session: &Session) -> Option<SessionUser> {
    session
        .get::<SessionUser>(SESSION_USER_KEY)
        .ok()
        .flatten()
        .filter(|u| u.is_logged_in)
}

pub fn clear(session: &Session) {
    session.purge();
}
