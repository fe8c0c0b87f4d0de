use actix_session::Session;
use actix_web::post;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionStatus;
use crate::utils::session::clear;

#[post("/logout")]
pub async fn logout(session: Session) -> ApiResult<SessionStatus> {
    clear(&session);
    Ok(ApiResponse::Ok(SessionStatus::logged_out()))
}
