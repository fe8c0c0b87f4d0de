pub mod employee;
pub mod postgres_service;
pub mod role;
pub mod time_record;
pub mod unit;
pub mod user;
