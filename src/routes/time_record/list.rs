use actix_web::{get, web};
use std::sync::Arc;

use crate::auth::{authorize, Action, Scope};
use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::time_record::{RecordQuery, TimeRecordView};

/// Filters come from the query string; the session's scope is always added
/// on top of them.
#[get("")]
pub async fn list(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    query: web::Query<RecordQuery>,
) -> ApiResult<Vec<TimeRecordView>> {
    authorize(&user, Action::ReadRecords)?;
    let scope = Scope::for_user(&user)?;
    Ok(ApiResponse::Ok(db.list_time_records(&query, scope).await?))
}
