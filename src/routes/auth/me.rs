use actix_session::Session;
use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionStatus;
use crate::utils::session::load_user;

/// Never fails: a missing or unreadable session reports `isLoggedIn: false`.
#[get("/me")]
pub async fn me(session: Session) -> ApiResult<SessionStatus> {
    let status = match load_user(&session) {
        Some(user) => SessionStatus::LoggedIn(user),
        None => SessionStatus::logged_out(),
    };
    Ok(ApiResponse::Ok(status))
}
