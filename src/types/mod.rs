pub mod auth;
pub mod employee;
pub mod error;
pub mod response;
pub mod role;
pub mod session;
pub mod time_record;
pub mod unit;
pub mod user;
