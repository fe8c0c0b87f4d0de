use actix_session::Session;
use actix_web::{post, web};
use std::sync::Arc;
use tracing::warn;

use crate::auth::authenticate;
use crate::db::postgres_service::PostgresService;
use crate::types::auth::{LoginRes, LoginUser, RLogin};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::session::store_user;

#[post("/login")]
pub async fn login(
    db: web::Data<Arc<PostgresService>>,
    session: Session,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    let user = match authenticate(&db, body.identifier.trim(), &body.secret).await {
        Ok(user) => user,
        Err(AppError::InvalidCredentials) => {
            warn!("rejected login attempt");
            return Err(AppError::InvalidCredentials);
        }
        Err(e) => return Err(e),
    };

    store_user(&session, &user)?;

    Ok(ApiResponse::Ok(LoginRes {
        user: LoginUser {
            id: user.id,
            name: user.name,
            role: user.role,
        },
    }))
}
