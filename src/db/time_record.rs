use std::collections::HashMap;

use crate::auth::Scope;
use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    time_record::{DBTimeRecordCreate, HourSummary, RecordChange, RecordEmployee, RecordQuery, TimeRecordView},
};
use crate::utils::time::{duration_minutes, format_hm, total_hours};
use chrono::Utc;
use entity::employee::Entity as Employee;
use entity::time_record::{
    ActiveModel as RecordActive, Column, Entity as TimeRecord, Model as RecordModel, RecordStatus,
};
use entity::unit::Entity as Unit;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

/// Row filter for record queries. The scope clause is always present, so a
/// client-supplied `unitId` can only narrow what the session may already see.
fn record_condition(query: &RecordQuery, scope: Scope) -> Condition {
    let mut cond = Condition::all();
    if let Some(status) = query.status {
        cond = cond.add(Column::Status.eq(status));
    }
    if let Some(employee_id) = query.employee_id {
        cond = cond.add(Column::EmployeeId.eq(employee_id));
    }
    if let Some(unit_id) = query.unit_id {
        cond = cond.add(entity::employee::Column::UnitId.eq(unit_id));
    }
    if let Some(from) = query.from {
        cond = cond.add(Column::Date.gte(from));
    }
    if let Some(to) = query.to {
        cond = cond.add(Column::Date.lte(to));
    }
    match scope {
        Scope::All => cond,
        Scope::Unit(unit_id) => cond.add(entity::employee::Column::UnitId.eq(unit_id)),
        Scope::Employee(employee_id) => cond.add(Column::EmployeeId.eq(employee_id)),
    }
}

impl PostgresService {
    pub async fn create_time_record(&self, payload: DBTimeRecordCreate) -> Result<RecordModel, AppError> {
        if payload.end_time <= payload.start_time {
            return Err(AppError::InvalidTimeRange);
        }
        self.get_employee(payload.employee_id).await?;

        let minutes = duration_minutes(payload.start_time, payload.end_time);
        let now = Utc::now();
        let record = RecordActive {
            employee_id: Set(payload.employee_id),
            date: Set(payload.date),
            start_time: Set(payload.start_time),
            end_time: Set(payload.end_time),
            description: Set(payload.description),
            total_hours: Set(total_hours(minutes)),
            status: Set(payload.status),
            validator_id: Set(payload.validator_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?;

        info!("time record {} created for employee {}", record.id, record.employee_id);
        Ok(record)
    }

    pub async fn get_time_record(&self, id: i32) -> Result<RecordModel, AppError> {
        Ok(TimeRecord::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Time record not found".into()))?)
    }

    /// Newest first, each row with its employee's name, CPF and unit.
    pub async fn list_time_records(&self, query: &RecordQuery, scope: Scope) -> Result<Vec<TimeRecordView>, AppError> {
        let rows = TimeRecord::find()
            .find_also_related(Employee)
            .filter(record_condition(query, scope))
            .order_by_desc(Column::Date)
            .order_by_desc(Column::StartTime)
            .all(&self.database_connection)
            .await?;

        let units: HashMap<_, _> = Unit::find()
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(record, employee)| TimeRecordView {
                duration: format_hm(duration_minutes(record.start_time, record.end_time)),
                employee: employee.map(|e| RecordEmployee {
                    unit_name: units.get(&e.unit_id).cloned(),
                    name: e.name,
                    cpf: e.cpf,
                }),
                record,
            })
            .collect())
    }

    /// Sums worked minutes of approved and pending records. Rejected records
    /// and the query's `status` filter are ignored.
    pub async fn summarize_hours(&self, query: &RecordQuery, scope: Scope) -> Result<HourSummary, AppError> {
        let query = RecordQuery { status: None, ..query.clone() };
        let rows = TimeRecord::find()
            .find_also_related(Employee)
            .filter(record_condition(&query, scope))
            .filter(Column::Status.is_in([RecordStatus::Approved, RecordStatus::Pending]))
            .all(&self.database_connection)
            .await?;

        let (mut approved, mut pending) = (0i64, 0i64);
        for (record, _) in rows {
            let minutes = duration_minutes(record.start_time, record.end_time);
            match record.status {
                RecordStatus::Approved => approved += minutes,
                RecordStatus::Pending => pending += minutes,
                RecordStatus::Rejected => {}
            }
        }

        Ok(HourSummary {
            approved_minutes: approved,
            pending_minutes: pending,
            approved: format_hm(approved),
            pending: format_hm(pending),
        })
    }

    pub async fn apply_record_change(&self, record: RecordModel, change: RecordChange) -> Result<RecordModel, AppError> {
        let id = record.id;
        let mut am: RecordActive = record.into();
        match change {
            RecordChange::Decide { status, validator_id } => {
                am.status = Set(status);
                am.validator_id = Set(Some(validator_id));
            }
            RecordChange::Edit { date, start_time, end_time, description, decision } => {
                if end_time <= start_time {
                    return Err(AppError::InvalidTimeRange);
                }
                am.date = Set(date);
                am.start_time = Set(start_time);
                am.end_time = Set(end_time);
                am.total_hours = Set(total_hours(duration_minutes(start_time, end_time)));
                if let Some(description) = description {
                    am.description = Set(description);
                }
                if let Some((status, validator_id)) = decision {
                    am.status = Set(status);
                    am.validator_id = Set(Some(validator_id));
                }
            }
        }
        am.updated_at = Set(Utc::now());
        let updated = am.update(&self.database_connection).await?;
        info!("time record {} updated, status {:?}", id, updated.status);
        Ok(updated)
    }

    /// Deleting an id that does not exist is a conflict, not a silent no-op.
    pub async fn delete_time_record(&self, id: i32) -> Result<(), AppError> {
        let res = TimeRecord::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::Conflict(format!("time record {id} does not exist")));
        }
        info!("time record {} deleted", id);
        Ok(())
    }
}
