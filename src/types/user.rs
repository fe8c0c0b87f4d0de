use chrono::{DateTime, Utc};
use entity::user::StaffRole;
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RUserCreate {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: StaffRole,
    pub unit_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RUserUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<StaffRole>,
    /// `Some(None)` detaches the user from its unit.
    #[serde(default, with = "double_option")]
    pub unit_id: Option<Option<i32>>,
}

pub struct DBUserCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: StaffRole,
    pub unit_id: Option<i32>,
}

pub struct DBUserUpdate {
    pub name: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<StaffRole>,
    pub unit_id: Option<Option<i32>>,
}

/// System user as listed to admins, with the unit name resolved.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub unit_id: Option<i32>,
    pub unit_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl RUserCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::Validation("name, email and password are required".into()));
        }
        if !self.email.contains('@') {
            return Err(AppError::Validation("email is not valid".into()));
        }
        Ok(())
    }
}

mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Option<i32>>, s: S) -> Result<S::Ok, S::Error> {
        value.flatten().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Option<i32>>, D::Error> {
        Option::<i32>::deserialize(d).map(Some)
    }
}
