use entity::{employee, role, unit};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct REmployeeCreate {
    pub name: String,
    pub cpf: String,
    pub role_id: i32,
    pub unit_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct REmployeeUpdate {
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub role_id: Option<i32>,
    pub unit_id: Option<i32>,
}

pub struct DBEmployeeCreate {
    pub name: String,
    /// Already normalized to digits.
    pub cpf: String,
    pub role_id: i32,
    pub unit_id: i32,
}

impl REmployeeCreate {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("employee name is required".into()));
        }
        Ok(())
    }
}

/// One spreadsheet row (NOME, CPF) after client-side parsing.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RBatchRow {
    #[serde(alias = "nome", alias = "NOME")]
    pub name: String,
    #[serde(alias = "CPF")]
    pub cpf: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RBatchImport {
    pub employees: Vec<RBatchRow>,
    pub default_unit_id: i32,
    pub default_role_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BatchRowError {
    pub name: String,
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BatchImportRes {
    pub message: String,
    pub count: usize,
    pub errors: Vec<BatchRowError>,
}

/// Employee with its job title and unit resolved.
#[derive(Serialize, Debug, Clone)]
pub struct EmployeeView {
    #[serde(flatten)]
    pub employee: employee::Model,
    pub role: Option<role::Model>,
    pub unit: Option<unit::Model>,
}

/// Compact row for pickers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeSummary {
    pub id: i32,
    pub name: String,
    pub cpf: String,
}

impl From<employee::Model> for EmployeeSummary {
    fn from(e: employee::Model) -> Self {
        EmployeeSummary { id: e.id, name: e.name, cpf: e.cpf }
    }
}
