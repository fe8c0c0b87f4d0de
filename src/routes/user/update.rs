use crate::auth::{authorize, Action};
use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::SessionUser;
use crate::types::user::{DBUserUpdate, RUserUpdate};
use crate::utils::password::hash_password;
use actix_web::{put, web};
use entity::user::Model as UserModel;
use std::sync::Arc;

/// Absent fields are left alone. A new password is hashed before it reaches
/// the database.
#[put("/{id}")]
pub async fn update(
    db: web::Data<Arc<PostgresService>>,
    user: SessionUser,
    path: web::Path<i32>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserModel> {
    authorize(&user, Action::ManageUsers)?;
    let body = body.into_inner();

    let name = match body.name {
        Some(name) if name.trim().is_empty() => {
            return Err(AppError::Validation("name cannot be empty".into()))
        }
        other => other.map(|n| n.trim().to_string()),
    };
    let password_hash = match body.password.as_deref() {
        Some("") | None => None,
        Some(password) => Some(hash_password(password)?),
    };

    let updated = db
        .update_user(
            path.into_inner(),
            DBUserUpdate {
                name,
                password_hash,
                role: body.role,
                unit_id: body.unit_id,
            },
        )
        .await?;

    Ok(ApiResponse::Ok(updated))
}
