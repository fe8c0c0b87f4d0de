use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::employee::Entity as Employee;
use entity::role::{ActiveModel as RoleActive, Entity as Role, Model as RoleModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl PostgresService {
    pub async fn list_roles(&self) -> Result<Vec<RoleModel>, AppError> {
        Ok(Role::find()
            .order_by_asc(entity::role::Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn get_role(&self, id: i32) -> Result<RoleModel, AppError> {
        Ok(Role::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Role not found".into()))?)
    }

    pub async fn create_role(&self, name: &str) -> Result<RoleModel, AppError> {
        let now = Utc::now();
        Ok(RoleActive {
            name: Set(name.trim().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn rename_role(&self, id: i32, name: &str) -> Result<RoleModel, AppError> {
        let mut am: RoleActive = self.get_role(id).await?.into();
        am.name = Set(name.trim().to_string());
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Delete only if no employee holds the role.
    pub async fn delete_role(&self, id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        let holders = Employee::find()
            .filter(entity::employee::Column::RoleId.eq(id))
            .count(&txn)
            .await?;
        if holders > 0 {
            txn.rollback().await?;
            return Err(AppError::Conflict(format!(
                "role {id} is still held by {holders} employee(s)"
            )));
        }
        let res = Role::delete_by_id(id).exec(&txn).await?;
        if res.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound("Role not found".into()).into());
        }
        txn.commit().await?;
        Ok(())
    }
}
