use actix_web::{post, web};
use entity::time_record::{Model as RecordModel, RecordStatus};
use std::sync::Arc;

use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::time_record::{DBTimeRecordCreate, RTimeRecordCreate};
use crate::utils::time::shift_span;

/// Staff entry point, for any employee. Without a status the record starts
/// PENDING; with one, the caller is recorded as its validator.
#[post("")]
pub async fn create(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    body: web::Json<RTimeRecordCreate>,
) -> ApiResult<RecordModel> {
    authorize(&user, Action::CreateRecord)?;
    let (start_time, end_time) = shift_span(body.date, body.start_time, body.end_time)?;

    let employee = db.get_employee(body.employee_id).await?;

    let body = body.into_inner();
    let record = db
        .create_time_record(DBTimeRecordCreate {
            employee_id: employee.id,
            date: body.date,
            start_time,
            end_time,
            description: body.description,
            status: body.status.unwrap_or(RecordStatus::Pending),
            validator_id: body.status.map(|_| user.id),
        })
        .await?;

    Ok(ApiResponse::Created(record))
}
