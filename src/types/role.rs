use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

/// Create and rename share the same body.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RRoleUpsert {
    pub name: String,
}

impl RRoleUpsert {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("role name is required".into()));
        }
        Ok(())
    }
}
