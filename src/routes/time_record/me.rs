use actix_web::{get, post, web};
use entity::time_record::{Model as RecordModel, RecordStatus};
use std::sync::Arc;

use crate::auth::{authorize, Action, Scope};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::time_record::{DBTimeRecordCreate, ROwnTimeRecordCreate, RecordQuery, TimeRecordView};
use crate::utils::time::shift_span;

#[get("/me")]
pub async fn list_own(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
) -> ApiResult<Vec<TimeRecordView>> {
    let employee_id = user.employee_id.ok_or(AppError::Forbidden)?;
    authorize(&user, Action::ReadRecords)?;

    let records = db
        .list_time_records(&RecordQuery::default(), Scope::Employee(employee_id))
        .await?;
    Ok(ApiResponse::Ok(records))
}

/// Employees always submit PENDING records for themselves.
#[post("/me")]
pub async fn create_own(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<ROwnTimeRecordCreate>,
) -> ApiResult<RecordModel> {
    authorize(&user, Action::SubmitOwnRecord)?;
    let employee_id = user.employee_id.ok_or(AppError::Forbidden)?;
    let (start_time, end_time) = shift_span(body.date, body.start_time, body.end_time)?;

    let body = body.into_inner();
    let record = db
        .create_time_record(DBTimeRecordCreate {
            employee_id,
            date: body.date,
            start_time,
            end_time,
            description: body.description,
            status: RecordStatus::Pending,
            validator_id: None,
        })
        .await?;

    Ok(ApiResponse::Created(record))
}
