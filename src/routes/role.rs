use actix_web::{delete, get, post, put, web};
use entity::role::Model as RoleModel;
use std::sync::Arc;

use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::role::RRoleUpsert;
use crate::types::session::SessionUser;

#[get("")]
pub async fn list_roles(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
) -> ApiResult<Vec<RoleModel>> {
    authorize(&user, Action::ManageReference)?;
    Ok(ApiResponse::Ok(db.list_roles().await?))
}

#[post("")]
pub async fn create_role(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<RRoleUpsert>,
) -> ApiResult<RoleModel> {
    authorize(&user, Action::ManageReference)?;
    body.validate()?;
    Ok(ApiResponse::Created(db.create_role(&body.name).await?))
}

#[put("/{id}")]
pub async fn update_role(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
    body: web::Json<RRoleUpsert>,
) -> ApiResult<RoleModel> {
    authorize(&user, Action::ManageReference)?;
    body.validate()?;
    Ok(ApiResponse::Ok(db.rename_role(path.into_inner(), &body.name).await?))
}

#[delete("/{id}")]
pub async fn delete_role(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    authorize(&user, Action::ManageReference)?;
    db.delete_role(path.into_inner()).await?;
    Ok(ApiResponse::Ok(MessageRes::new("Role deleted successfully")))
}
