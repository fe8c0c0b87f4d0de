use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::session::SessionUser;
use actix_web::{delete, web};
use std::sync::Arc;

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    authorize(&user, Action::ManageUsers)?;
    let target = path.into_inner();
    if target == user.id {
        return Err(AppError::BadRequest("you cannot delete your own account".into()));
    }

    db.delete_user(target).await?;
    Ok(ApiResponse::Ok(MessageRes::new("User deleted")))
}
