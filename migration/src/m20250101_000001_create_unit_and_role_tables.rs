use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Unit {
    Table,
    Id,
    Name,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Role {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Unit::Table)
                .if_not_exists()
                .col(ColumnDef::new(Unit::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Unit::Name).string().not_null())
                .col(ColumnDef::new(Unit::Address).string().null())
                .col(ColumnDef::new(Unit::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Unit::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        m.create_table(
            Table::create()
                .table(Role::Table)
                .if_not_exists()
                .col(ColumnDef::new(Role::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Role::Name).string().not_null())
                .col(ColumnDef::new(Role::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Role::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Role::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Unit::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
