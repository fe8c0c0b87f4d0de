use sea_orm_migration::prelude::*;

use crate::m20250101_000002_create_user_table::User;
use crate::m20250102_000001_create_employee_table::Employee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum TimeRecord {
    Table,
    Id,
    EmployeeId,
    Date,
    StartTime,
    EndTime,
    Description,
    TotalHours,
    Status,
    ValidatorId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(TimeRecord::Table)
                .if_not_exists()
                .col(ColumnDef::new(TimeRecord::Id).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(TimeRecord::EmployeeId).integer().not_null())
                .col(ColumnDef::new(TimeRecord::Date).date().not_null())
                .col(ColumnDef::new(TimeRecord::StartTime).date_time().not_null())
                .col(ColumnDef::new(TimeRecord::EndTime).date_time().not_null())
                .col(ColumnDef::new(TimeRecord::Description).text().not_null())
                .col(ColumnDef::new(TimeRecord::TotalHours).double().not_null())
                .col(ColumnDef::new(TimeRecord::Status).string_len(16).not_null().default("PENDING"))
                .col(ColumnDef::new(TimeRecord::ValidatorId).integer().null())
                .col(ColumnDef::new(TimeRecord::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(TimeRecord::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_time_record_employee")
                        .from(TimeRecord::Table, TimeRecord::EmployeeId)
                        .to(Employee::Table, Employee::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_time_record_validator")
                        .from(TimeRecord::Table, TimeRecord::ValidatorId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // Listing and summaries filter on (employee, date)
        m.create_index(
            Index::create()
                .name("idx_time_record_employee_date")
                .table(TimeRecord::Table)
                .col(TimeRecord::EmployeeId)
                .col(TimeRecord::Date)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_index(Index::drop().name("idx_time_record_employee_date").table(TimeRecord::Table).to_owned()).await?;
        m.drop_table(Table::drop().table(TimeRecord::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
