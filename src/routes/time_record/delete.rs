use actix_web::{delete, web};
use std::sync::Arc;

use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::session::SessionUser;

#[delete("/{id}")]
pub async fn delete(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    authorize(&user, Action::DeleteRecord)?;
    db.delete_time_record(path.into_inner()).await?;
    Ok(ApiResponse::Ok(MessageRes::new("Deleted successfully")))
}
