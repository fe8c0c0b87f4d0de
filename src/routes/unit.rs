use actix_web::{delete, get, post, put, web};
use entity::unit::Model as UnitModel;
use std::sync::Arc;

use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::session::SessionUser;
use crate::types::unit::{RUnitCreate, RUnitUpdate};

#[get("")]
pub async fn list_units(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
) -> ApiResult<Vec<UnitModel>> {
    authorize(&user, Action::ManageReference)?;
    Ok(ApiResponse::Ok(db.list_units().await?))
}

#[post("")]
pub async fn create_unit(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<RUnitCreate>,
) -> ApiResult<UnitModel> {
    authorize(&user, Action::ManageReference)?;
    body.validate()?;
    Ok(ApiResponse::Created(db.create_unit(body.into_inner()).await?))
}

#[put("/{id}")]
pub async fn update_unit(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
    body: web::Json<RUnitUpdate>,
) -> ApiResult<UnitModel> {
    authorize(&user, Action::ManageReference)?;
    Ok(ApiResponse::Ok(db.update_unit(path.into_inner(), body.into_inner()).await?))
}

#[delete("/{id}")]
pub async fn delete_unit(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    authorize(&user, Action::ManageReference)?;
    db.delete_unit(path.into_inner()).await?;
    Ok(ApiResponse::Ok(MessageRes::new("Unit deleted successfully")))
}
