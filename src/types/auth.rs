use serde::{Deserialize, Serialize};

use crate::types::session::AccountRole;

/// Login form. `identifier` is an email for staff or a CPF for employees.
#[derive(Serialize, Deserialize, Debug)]
pub struct RLogin {
    #[serde(alias = "email")]
    pub identifier: String,
    #[serde(alias = "password")]
    pub secret: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginUser {
    pub id: i32,
    pub name: String,
    pub role: AccountRole,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub user: LoginUser,
}
