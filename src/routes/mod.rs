use crate::types::error::AppError;
use actix_web::web;

pub mod auth;
pub mod employee;
pub mod health;
pub mod role;
pub mod time_record;
pub mod unit;
pub mod user;

/// Malformed bodies, paths and query strings get the same JSON error shape
/// as every other failure.
fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    extractor_configs(cfg);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/auth")
            .service(auth::login::login)
            .service(auth::logout::logout)
            .service(auth::me::me),
    );
    cfg.service(
        web::scope("/units")
            .service(unit::list_units)
            .service(unit::create_unit)
            .service(unit::update_unit)
            .service(unit::delete_unit),
    );
    cfg.service(
        web::scope("/roles")
            .service(role::list_roles)
            .service(role::create_role)
            .service(role::update_role)
            .service(role::delete_role),
    );
    cfg.service(
        web::scope("/employees")
            .service(employee::batch::import)
            .service(employee::list_compact)
            .service(employee::list_employees)
            .service(employee::create_employee)
            .service(employee::update_employee)
            .service(employee::delete_employee),
    );
    cfg.service(
        web::scope("/time-records")
            .service(time_record::me::list_own)
            .service(time_record::me::create_own)
            .service(time_record::summary::own_summary)
            .service(time_record::summary::summary)
            .service(time_record::list::list)
            .service(time_record::create::create)
            .service(time_record::update::update)
            .service(time_record::delete::delete),
    );
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::create::create)
            .service(user::update::update)
            .service(user::delete::delete),
    );
}
