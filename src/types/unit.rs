use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RUnitCreate {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RUnitUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl RUnitCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("unit name is required".into()));
        }
        Ok(())
    }
}
