use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Title))
                    .col(text_null(Event::Description))
                    .col(string_len(Event::Status, 16))
                    .col(boolean(Event::RequiresRegistration).default(true))
                    .col(integer_null(Event::MaxParticipants))
                    .col(integer(Event::CurrentParticipants).default(0))
                    .col(timestamp_null(Event::RegistrationOpensAt))
                    .col(timestamp_null(Event::RegistrationClosesAt))
                    .col(boolean(Event::AllowCancellation).default(true))
                    .col(integer_null(Event::CancellationDeadlineHours))
                    .col(timestamp(Event::StartTime))
                    .col(
                        timestamp(Event::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Title,
    Description,
    Status,
    RequiresRegistration,
    MaxParticipants,
    CurrentParticipants,
    RegistrationOpensAt,
    RegistrationClosesAt,
    AllowCancellation,
    CancellationDeadlineHours,
    StartTime,
    CreatedAt,
}
