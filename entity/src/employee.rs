use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Digits only. Doubles as the login identifier and default secret.
    #[sea_orm(unique)]
    pub cpf: String,
    pub role_id: i32,                    // FK -> role.id
    pub unit_id: i32,                    // FK -> unit.id
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to   = "super::role::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Role,
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to   = "super::unit::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Unit,
    #[sea_orm(has_many = "super::time_record::Entity")]
    TimeRecord,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl Related<super::time_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TimeRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
