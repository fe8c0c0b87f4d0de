use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::user::{DBUserCreate, RUserCreate};
use crate::utils::password::hash_password;
use actix_web::{post, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserModel> {
    authorize(&user, Action::ManageUsers)?;
    body.validate()?;

    let body = body.into_inner();
    let password_hash = hash_password(&body.password)?;
    let created = db
        .create_user(DBUserCreate {
            name: body.name.trim().to_string(),
            email: body.email.trim().to_string(),
            password_hash,
            role: body.role,
            unit_id: body.unit_id,
        })
        .await?;

    Ok(ApiResponse::Created(created))
}
