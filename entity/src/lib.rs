pub mod employee;
pub mod role;
pub mod time_record;
pub mod unit;
pub mod user;

/*
 Units own employees and optionally scope staff users (coordinators).
 Roles are job titles, not access levels: access comes from user.role (staff)
 or from logging in with a CPF (employee).
 Employees own their time records, staff users show up on a record as its validator.
 */
