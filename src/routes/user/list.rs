use actix_web::{get, web};
use std::sync::Arc;

use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::user::UserView;

#[get("")]
pub async fn list(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
) -> ApiResult<Vec<UserView>> {
    authorize(&user, Action::ManageUsers)?;
    Ok(ApiResponse::Ok(db.list_users().await?))
}
