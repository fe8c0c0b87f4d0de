use actix_web::{put, web};
use entity::time_record::{Model as RecordModel, RecordStatus};
use std::sync::Arc;

use crate::auth::{authorize, Action, Scope};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::time_record::{RTimeRecordUpdate, RecordChange};
use crate::utils::time::shift_span;

/// Turns the request body into a decision or an edit. Decided records never
/// go back to PENDING.
fn parse_change(
    body: RTimeRecordUpdate,
    current: &RecordModel,
    validator_id: i32,
) -> Result<RecordChange, AppError> {
    match (body.date, body.start_time, body.end_time) {
        (None, None, None) => match body.status {
            Some(RecordStatus::Pending) => Err(AppError::BadRequest(
                "a record can only be decided as APPROVED or REJECTED".into(),
            )),
            Some(status) => Ok(RecordChange::Decide { status, validator_id }),
            None => Err(AppError::BadRequest(
                "send a status, or date/startTime/endTime to edit".into(),
            )),
        },
        (Some(date), Some(start), Some(end)) => {
            let (start_time, end_time) = shift_span(date, start, end)?;
            let decision = match body.status {
                Some(RecordStatus::Pending) if current.status != RecordStatus::Pending => {
                    return Err(AppError::BadRequest(
                        "a decided record cannot be returned to PENDING".into(),
                    ))
                }
                Some(RecordStatus::Pending) | None => None,
                Some(status) => Some((status, validator_id)),
            };
            Ok(RecordChange::Edit {
                date,
                start_time,
                end_time,
                description: body.description,
                decision,
            })
        }
        _ => Err(AppError::BadRequest(
            "date, startTime and endTime must be sent together".into(),
        )),
    }
}

#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
    body: web::Json<RTimeRecordUpdate>,
) -> ApiResult<RecordModel> {
    let body = body.into_inner();
    let is_edit = body.date.is_some() || body.start_time.is_some() || body.end_time.is_some();
    authorize(&user, if is_edit { Action::EditRecord } else { Action::DecideRecord })?;

    // Deciding is limited to the caller's scope; plain edits are not.
    let decides = !is_edit
        || matches!(body.status, Some(RecordStatus::Approved | RecordStatus::Rejected));

    let record = db.get_time_record(path.into_inner()).await?;
    if decides {
        let employee = db.get_employee(record.employee_id).await?;
        Scope::for_user(&user)?.ensure(&employee)?;
    }
    let change = parse_change(body, &record, user.id)?;

    Ok(ApiResponse::Ok(db.apply_record_change(record, change).await?))
}
