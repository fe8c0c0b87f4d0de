use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    unit::{RUnitCreate, RUnitUpdate},
};
use chrono::Utc;
use entity::unit::{ActiveModel as UnitActive, Entity as Unit, Model as UnitModel};
use entity::{employee::Entity as Employee, user::Entity as User};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl PostgresService {
    pub async fn list_units(&self) -> Result<Vec<UnitModel>, AppError> {
        Ok(Unit::find()
            .order_by_asc(entity::unit::Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_unit(&self, id: i32) -> Result<UnitModel, AppError> {
        Ok(Unit::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Unit not found".into()))?)
    }

    pub async fn create_unit(&self, payload: RUnitCreate) -> Result<UnitModel, AppError> {
        let now = Utc::now();
        Ok(UnitActive {
            name: Set(payload.name.trim().to_string()),
            address: Set(clean_address(payload.address)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_unit(&self, id: i32, patch: RUnitUpdate) -> Result<UnitModel, AppError> {
        let mut am: UnitActive = self.get_unit(id).await?.into();
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(AppError::Validation("unit name is required".into()));
            }
            am.name = Set(name.trim().to_string());
        }
        if patch.address.is_some() {
            am.address = Set(clean_address(patch.address));
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Refuses while employees or staff users are still attached to the unit.
    pub async fn delete_unit(&self, id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        let employees = Employee::find()
            .filter(entity::employee::Column::UnitId.eq(id))
            .count(&txn)
            .await?;
        let users = User::find()
            .filter(entity::user::Column::UnitId.eq(id))
            .count(&txn)
            .await?;
        if employees > 0 || users > 0 {
            txn.rollback().await?;
            return Err(AppError::Conflict(format!(
                "unit {id} still has {employees} employee(s) and {users} user(s) attached"
            )));
        }
        let res = Unit::delete_by_id(id).exec(&txn).await?;
        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound("Unit not found".into()).into());
        }
        txn.commit().await?;
        Ok(())
    }
}

fn clean_address(address: Option<String>) -> Option<String> {
    address
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}
