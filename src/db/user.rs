use crate::db::postgres_service::PostgresService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, DBUserUpdate, UserView},
};
use chrono::Utc;
use entity::unit::Entity as Unit;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, StaffRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::info;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Login lookup: absence is not an error here.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserView>, AppError> {
        let rows = User::find()
            .find_also_related(Unit)
            .order_by_asc(entity::user::Column::Name)
            .all(&self.database_connection)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(u, unit)| UserView {
                id: u.id,
                name: u.name,
                email: u.email,
                role: u.role,
                unit_id: u.unit_id,
                unit_name: unit.map(|unit| unit.name),
                created_at: u.created_at,
            })
            .collect())
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        if let Some(unit_id) = payload.unit_id {
            self.get_unit(unit_id).await?;
        }
        let now = Utc::now();

        Ok(UserActive {
            name: Set(payload.name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            role: Set(payload.role),
            unit_id: Set(payload.unit_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn update_user(&self, user_id: i32, patch: DBUserUpdate) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(user_id).await?.into();
        if let Some(name) = patch.name {
            am.name = Set(name);
        }
        if let Some(hash) = patch.password_hash {
            am.password_hash = Set(hash);
        }
        if let Some(role) = patch.role {
            am.role = Set(role);
        }
        if let Some(unit_id) = patch.unit_id {
            if let Some(id) = unit_id {
                self.get_unit(id).await?;
            }
            am.unit_id = Set(unit_id);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    pub async fn delete_user(&self, user_id: i32) -> Result<(), AppError> {
        let res = User::delete_by_id(user_id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(DbErr::RecordNotFound("User does not exist".into()).into());
        }
        Ok(())
    }

    /// Creates the bootstrap admin, or resets its password/role when the
    /// email already exists.
    pub async fn ensure_admin(&self, email: &str, name: &str, password_hash: String) -> Result<UserModel, AppError> {
        match self.find_user_by_email(email).await? {
            Some(existing) => {
                let mut am: UserActive = existing.into();
                am.name = Set(name.to_string());
                am.password_hash = Set(password_hash);
                am.role = Set(StaffRole::Admin);
                am.updated_at = Set(Utc::now());
                let user = am.update(&self.database_connection).await?;
                info!("bootstrap admin {} refreshed", user.id);
                Ok(user)
            }
            None => {
                let user = self
                    .create_user(DBUserCreate {
                        name: name.to_string(),
                        email: email.to_string(),
                        password_hash,
                        role: StaffRole::Admin,
                        unit_id: None,
                    })
                    .await?;
                info!("bootstrap admin {} created", user.id);
                Ok(user)
            }
        }
    }
}
