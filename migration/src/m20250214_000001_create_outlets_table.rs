use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Outlets::Table)
                    .if_not_exists()
                    .col(pk_auto(Outlets::Id))
                    .col(string(Outlets::Name))
                    .col(string(Outlets::Address))
                    .col(string_null(Outlets::Telephone))
                    .col(double_null(Outlets::Lat))
                    .col(double_null(Outlets::Lng))
                    .col(string_null(Outlets::WazeLink))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Outlets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Outlets {
    Table,
    Id,
    Name,
    Address,
    Telephone,
    Lat,
    Lng,
    WazeLink,
}
