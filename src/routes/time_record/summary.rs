use actix_web::{get, web};
use std::sync::Arc;

use crate::auth::{authorize, Action, Scope};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::time_record::{HourSummary, RecordQuery};

/// Approved/pending totals over `employeeId`, `unitId`, `from` and `to`,
/// within the caller's scope.
#[get("/summary")]
pub async fn summary(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    query: web::Query<RecordQuery>,
) -> ApiResult<HourSummary> {
    if !user.is_staff() {
        return Err(AppError::Forbidden);
    }
    authorize(&user, Action::ReadRecords)?;
    let scope = Scope::for_user(&user)?;
    Ok(ApiResponse::Ok(db.summarize_hours(&query, scope).await?))
}

#[get("/me/summary")]
pub async fn own_summary(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    query: web::Query<RecordQuery>,
) -> ApiResult<HourSummary> {
    let employee_id = user.employee_id.ok_or(AppError::Forbidden)?;
    authorize(&user, Action::ReadRecords)?;

    let query = RecordQuery { employee_id: None, unit_id: None, ..query.into_inner() };
    Ok(ApiResponse::Ok(db.summarize_hours(&query, Scope::Employee(employee_id)).await?))
}
