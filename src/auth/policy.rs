//! Access policy
//!
//! | role        | read records | create | decide   | edit     | delete | reference data | users |
//! |-------------|--------------|--------|----------|----------|--------|----------------|-------|
//! | EMPLOYEE    | own          | own    | -        | -        | -      | -              | -     |
//! | COORDINATOR | own unit     | yes    | own unit | yes      | -      | yes            | -     |
//! | ADMIN       | all          | yes    | yes      | yes      | yes    | yes            | yes   |
//!
//! `authorize` answers the role column; `Scope` answers the row filter.

use entity::employee;

use crate::types::{
    error::AppError,
    session::{AccountRole, SessionUser},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ReadRecords,
    /// Employee submitting a record for themselves.
    SubmitOwnRecord,
    /// Staff creating a record for any employee.
    CreateRecord,
    DecideRecord,
    EditRecord,
    DeleteRecord,
    ManageReference,
    ManageUsers,
}

pub fn authorize(user: &SessionUser, action: Action) -> Result<(), AppError> {
    use Action::*;

    let allowed = match user.role {
        AccountRole::Admin => match action {
            ReadRecords | CreateRecord | DecideRecord | EditRecord | DeleteRecord
            | ManageReference | ManageUsers => true,
            SubmitOwnRecord => false,
        },
        AccountRole::Coordinator => match action {
            ReadRecords | CreateRecord | DecideRecord | EditRecord | ManageReference => true,
            SubmitOwnRecord | DeleteRecord | ManageUsers => false,
        },
        AccountRole::Employee => match action {
            ReadRecords | SubmitOwnRecord => user.employee_id.is_some(),
            CreateRecord | DecideRecord | EditRecord | DeleteRecord | ManageReference
            | ManageUsers => false,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Rows a session may see. Applied server-side to every list query and
/// checked against single rows before mutating them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Unit(i32),
    Employee(i32),
}

impl Scope {
    pub fn for_user(user: &SessionUser) -> Result<Self, AppError> {
        match user.role {
            AccountRole::Admin => Ok(Scope::All),
            // A coordinator without a unit is not restricted to one.
            AccountRole::Coordinator => Ok(user.unit_id.map_or(Scope::All, Scope::Unit)),
            AccountRole::Employee => user
                .employee_id
                .map(Scope::Employee)
                .ok_or(AppError::Unauthorized),
        }
    }

    pub fn permits(&self, employee: &employee::Model) -> bool {
        match self {
            Scope::All => true,
            Scope::Unit(unit_id) => employee.unit_id == *unit_id,
            Scope::Employee(employee_id) => employee.id == *employee_id,
        }
    }

    /// Whether rows attached to `unit_id` fall inside this scope.
    pub fn permits_unit(&self, unit_id: i32) -> bool {
        match self {
            Scope::All => true,
            Scope::Unit(own) => *own == unit_id,
            Scope::Employee(_) => false,
        }
    }

    pub fn ensure(&self, employee: &employee::Model) -> Result<(), AppError> {
        if self.permits(employee) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}
