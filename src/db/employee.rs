use std::collections::HashMap;

use crate::auth::Scope;
use crate::db::postgres_service::PostgresService;
use crate::types::{
    employee::{BatchRowError, DBEmployeeCreate, EmployeeSummary, EmployeeView, RBatchRow, REmployeeUpdate},
    error::AppError,
};
use crate::utils::cpf::normalize_cpf;
use chrono::Utc;
use entity::employee::{ActiveModel as EmployeeActive, Column, Entity as Employee, Model as EmployeeModel};
use entity::{role::Entity as Role, time_record::Entity as TimeRecord, unit::Entity as Unit};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Select, Set, TransactionTrait,
};
use tracing::warn;

pub(crate) fn scoped(select: Select<Employee>, scope: Scope) -> Select<Employee> {
    match scope {
        Scope::All => select,
        Scope::Unit(unit_id) => select.filter(Column::UnitId.eq(unit_id)),
        Scope::Employee(employee_id) => select.filter(Column::Id.eq(employee_id)),
    }
}

impl PostgresService {
    pub async fn employee_exists_by_cpf(&self, cpf: &str) -> Result<bool, AppError> {
        Ok(Employee::find()
            .filter(Column::Cpf.eq(cpf))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_employee(&self, id: i32) -> Result<EmployeeModel, AppError> {
        Ok(Employee::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Employee not found".into()))?)
    }

    pub async fn find_employee_by_cpf(&self, cpf: &str) -> Result<Option<EmployeeModel>, AppError> {
        Ok(Employee::find()
            .filter(Column::Cpf.eq(cpf))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn list_employees(&self, scope: Scope) -> Result<Vec<EmployeeView>, AppError> {
        let employees = scoped(Employee::find(), scope)
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?;

        // Both tables are small reference data.
        let roles: HashMap<_, _> = Role::find()
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|r| (r.id, r))
            .collect();
        let units: HashMap<_, _> = Unit::find()
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(employees
            .into_iter()
            .map(|e| EmployeeView {
                role: roles.get(&e.role_id).cloned(),
                unit: units.get(&e.unit_id).cloned(),
                employee: e,
            })
            .collect())
    }

    pub async fn list_employee_summaries(&self, scope: Scope) -> Result<Vec<EmployeeSummary>, AppError> {
        Ok(scoped(Employee::find(), scope)
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(EmployeeSummary::from)
            .collect())
    }

    pub async fn create_employee(&self, payload: DBEmployeeCreate) -> Result<EmployeeModel, AppError> {
        // Validate related records so we can send domain errors instead of 500s
        self.get_unit(payload.unit_id).await?;
        self.get_role(payload.role_id).await?;

        if self.employee_exists_by_cpf(&payload.cpf).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        Ok(EmployeeActive {
            name: Set(payload.name.trim().to_string()),
            cpf: Set(payload.cpf),
            role_id: Set(payload.role_id),
            unit_id: Set(payload.unit_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_employee(&self, id: i32, patch: REmployeeUpdate) -> Result<EmployeeModel, AppError> {
        let current = self.get_employee(id).await?;
        let mut am: EmployeeActive = current.clone().into();

        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("employee name is required".into()));
            }
            am.name = Set(name.trim().to_string());
        }
        if let Some(raw) = patch.cpf {
            let cpf = normalize_cpf(&raw)?;
            if cpf != current.cpf && self.employee_exists_by_cpf(&cpf).await? {
                return Err(AppError::AlreadyExists);
            }
            am.cpf = Set(cpf);
        }
        if let Some(role_id) = patch.role_id {
            self.get_role(role_id).await?;
            am.role_id = Set(role_id);
        }
        if let Some(unit_id) = patch.unit_id {
            self.get_unit(unit_id).await?;
            am.unit_id = Set(unit_id);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Refuses while time records reference the employee.
    pub async fn delete_employee(&self, id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        let records = TimeRecord::find()
            .filter(entity::time_record::Column::EmployeeId.eq(id))
            .count(&txn)
            .await?;
        if records > 0 {
            txn.rollback().await?;
            return Err(AppError::Conflict(format!(
                "employee {id} has {records} time record(s)"
            )));
        }
        let res = Employee::delete_by_id(id).exec(&txn).await?;
        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound("Employee not found".into()).into());
        }
        txn.commit().await?;
        Ok(())
    }

    /// Creates one employee per row. Rows fail independently; the caller gets
    /// the number created plus one error entry per rejected row.
    pub async fn import_employees(
        &self,
        rows: Vec<RBatchRow>,
        unit_id: i32,
        role_id: i32,
    ) -> Result<(usize, Vec<BatchRowError>), AppError> {
        self.get_unit(unit_id).await?;
        self.get_role(role_id).await?;

        let mut created = 0;
        let mut errors = Vec::new();

        for row in rows {
            let outcome = match normalize_cpf(&row.cpf) {
                Ok(cpf) if row.name.trim().is_empty() => {
                    Err(AppError::Validation(format!("missing name for CPF {cpf}")))
                }
                Ok(cpf) => {
                    self.create_employee(DBEmployeeCreate {
                        name: row.name.clone(),
                        cpf,
                        role_id,
                        unit_id,
                    })
                    .await
                }
                Err(e) => Err(e),
            };

            match outcome {
                Ok(_) => created += 1,
                Err(e) => {
                    warn!("import of {} failed: {}", row.name, e);
                    let error = match e {
                        AppError::AlreadyExists => "CPF already registered".to_string(),
                        other => other.to_string(),
                    };
                    errors.push(BatchRowError { name: row.name, error });
                }
            }
        }

        Ok((created, errors))
    }
}
