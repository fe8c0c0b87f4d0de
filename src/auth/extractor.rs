//! Session extractor
//!
//! Handlers that take a `SessionUser` argument are protected: the request is
//! rejected with 401 before the handler runs when no valid session cookie is
//! present.

use std::future::{ready, Ready};

use actix_session::SessionExt;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use tracing::debug;

use crate::types::{error::AppError, session::SessionUser};
use crate::utils::session::load_user;

impl FromRequest for SessionUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = load_user(&req.get_session());
        if user.is_none() {
            debug!("no session for {} {}", req.method(), req.path());
        }
        ready(user.ok_or(AppError::Unauthorized))
    }
}
