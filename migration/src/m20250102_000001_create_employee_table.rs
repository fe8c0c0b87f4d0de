use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_unit_and_role_tables::{Role, Unit};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Employee {
    Table,
    Id,
    Name,
    Cpf,
    RoleId,
    UnitId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Employee::Table)
                .if_not_exists()
                .col(ColumnDef::new(Employee::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Employee::Name).string().not_null())
                .col(ColumnDef::new(Employee::Cpf).string_len(11).not_null().unique_key())
                .col(ColumnDef::new(Employee::RoleId).integer().not_null())
                .col(ColumnDef::new(Employee::UnitId).integer().not_null())
                .col(ColumnDef::new(Employee::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Employee::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_role")
                        .from(Employee::Table, Employee::RoleId)
                        .to(Role::Table, Role::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_unit")
                        .from(Employee::Table, Employee::UnitId)
                        .to(Unit::Table, Unit::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_unit_id")
                .table(Employee::Table)
                .col(Employee::UnitId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("idx_employee_unit_id").table(Employee::Table).to_owned()).await?;
        m.drop_table(Table::drop().table(Employee::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
