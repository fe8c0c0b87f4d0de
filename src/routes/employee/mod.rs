use actix_web::{delete, get, post, put, web};
use entity::employee::Model as EmployeeModel;
use std::sync::Arc;

use crate::auth::{authorize, Action, Scope};
use crate::db::postgres_service::PostgresService;
use crate::types::employee::{DBEmployeeCreate, EmployeeSummary, EmployeeView, REmployeeCreate, REmployeeUpdate};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::types::session::SessionUser;
use crate::utils::cpf::normalize_cpf;

pub mod batch;

#[get("")]
pub async fn list_employees(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
) -> ApiResult<Vec<EmployeeView>> {
    authorize(&user, Action::ManageReference)?;
    let scope = Scope::for_user(&user)?;
    Ok(ApiResponse::Ok(db.list_employees(scope).await?))
}

#[get("/list")]
pub async fn list_compact(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
) -> ApiResult<Vec<EmployeeSummary>> {
    authorize(&user, Action::ManageReference)?;
    let scope = Scope::for_user(&user)?;
    Ok(ApiResponse::Ok(db.list_employee_summaries(scope).await?))
}

#[post("")]
pub async fn create_employee(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<REmployeeCreate>,
) -> ApiResult<EmployeeModel> {
    authorize(&user, Action::ManageReference)?;
    body.validate()?;
    if !Scope::for_user(&user)?.permits_unit(body.unit_id) {
        return Err(AppError::Forbidden);
    }

    let body = body.into_inner();
    let employee = db
        .create_employee(DBEmployeeCreate {
            cpf: normalize_cpf(&body.cpf)?,
            name: body.name,
            role_id: body.role_id,
            unit_id: body.unit_id,
        })
        .await?;

    Ok(ApiResponse::Created(employee))
}

#[put("/{id}")]
pub async fn update_employee(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
    body: web::Json<REmployeeUpdate>,
) -> ApiResult<EmployeeModel> {
    authorize(&user, Action::ManageReference)?;
    let scope = Scope::for_user(&user)?;
    let current = db.get_employee(path.into_inner()).await?;
    scope.ensure(&current)?;
    // Moving an employee out of the coordinator's own unit is not allowed either.
    if let Some(unit_id) = body.unit_id {
        if !scope.permits_unit(unit_id) {
            return Err(AppError::Forbidden);
        }
    }

    Ok(ApiResponse::Ok(db.update_employee(current.id, body.into_inner()).await?))
}

#[delete("/{id}")]
pub async fn delete_employee(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
) -> ApiResult<MessageRes> {
    authorize(&user, Action::ManageReference)?;
    let current = db.get_employee(path.into_inner()).await?;
    Scope::for_user(&user)?.ensure(&current)?;

    db.delete_employee(current.id).await?;
    Ok(ApiResponse::Ok(MessageRes::new("Employee deleted successfully")))
}
