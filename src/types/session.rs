use entity::user::StaffRole;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who is behind a session. Staff roles come from the user table, employees
/// log in with their CPF and always get `Employee`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountRole {
    Admin,
    Coordinator,
    Employee,
}

impl From<StaffRole> for AccountRole {
    fn from(role: StaffRole) -> Self {
        match role {
            StaffRole::Admin => AccountRole::Admin,
            StaffRole::Coordinator => AccountRole::Coordinator,
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Admin => write!(f, "ADMIN"),
            AccountRole::Coordinator => write!(f, "COORDINATOR"),
            AccountRole::Employee => write!(f, "EMPLOYEE"),
        }
    }
}

/// Identity stored in the encrypted session cookie.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// User id for staff, employee id for employees.
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    /// Email for staff, CPF for employees.
    pub username: String,
    pub role: AccountRole,
    pub unit_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub employee_id: Option<i32>,
    pub is_logged_in: bool,
}

impl SessionUser {
    pub fn is_staff(&self) -> bool {
        match self.role {
            AccountRole::Admin | AccountRole::Coordinator => true,
            AccountRole::Employee => false,
        }
    }
}

/// `GET /auth/me` body: the session itself or a bare logged-out marker.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum SessionStatus {
    LoggedIn(SessionUser),
    LoggedOut {
        #[serde(rename = "isLoggedIn")]
        is_logged_in: bool,
    },
}

impl SessionStatus {
    pub fn logged_out() -> Self {
        SessionStatus::LoggedOut { is_logged_in: false }
    }
}
