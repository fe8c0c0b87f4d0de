use tracing::debug;

use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    session::{AccountRole, SessionUser},
};
use crate::utils::{cpf::digits_only, password::verify_password};

/// Resolves login credentials to a session identity.
///
/// Staff users are tried first (exact email + argon2 password). Failing that,
/// the identifier is read as a CPF and the secret must be that same CPF.
/// Both paths fail with the same `InvalidCredentials` error.
pub async fn authenticate(
    db: &PostgresService,
    identifier: &str,
    secret: &str,
) -> Result<SessionUser, AppError> {
    if let Some(user) = db.find_user_by_email(identifier).await? {
        if verify_password(secret, &user.password_hash) {
            debug!("staff login: user {}", user.id);
            return Ok(SessionUser {
                id: user.id,
                name: user.name,
                email: Some(user.email.clone()),
                username: user.email,
                role: user.role.into(),
                unit_id: user.unit_id,
                employee_id: None,
                is_logged_in: true,
            });
        }
    }

    let cpf = digits_only(identifier);
    let secret_digits = digits_only(secret);
    if cpf.is_empty() {
        return Err(AppError::InvalidCredentials);
    }

    if let Some(employee) = db.find_employee_by_cpf(&cpf).await? {
        if secret_digits == employee.cpf {
            debug!("employee login: employee {}", employee.id);
            return Ok(SessionUser {
                id: employee.id,
                name: employee.name,
                email: None,
                username: employee.cpf,
                role: AccountRole::Employee,
                unit_id: Some(employee.unit_id),
                employee_id: Some(employee.id),
                is_logged_in: true,
            });
        }
    }

    Err(AppError::InvalidCredentials)
}
