use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_app_user_table::AppUser, m20260110_000002_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registration::Table)
                    .if_not_exists()
                    .col(pk_auto(Registration::Id))
                    .col(integer(Registration::EventId))
                    .col(integer_null(Registration::UserId))
                    .col(string_uniq(Registration::RegistrationNumber))
                    .col(string(Registration::FirstName))
                    .col(string(Registration::LastName))
                    .col(string(Registration::Email))
                    .col(string_null(Registration::Phone))
                    .col(string_null(Registration::Address))
                    .col(string_null(Registration::University))
                    .col(string_null(Registration::AcademicUnit))
                    .col(string_null(Registration::Level))
                    .col(text_null(Registration::DietaryRequirements))
                    .col(text_null(Registration::AccessibilityNeeds))
                    .col(json_null(Registration::CustomAnswers))
                    .col(string_len(Registration::Status, 16))
                    .col(timestamp_null(Registration::CheckedInAt))
                    .col(integer_null(Registration::CheckedInBy))
                    .col(timestamp_null(Registration::CancelledAt))
                    .col(text_null(Registration::CancellationReason))
                    .col(boolean(Registration::ConfirmationSent).default(false))
                    .col(boolean(Registration::ReminderWeekSent).default(false))
                    .col(boolean(Registration::ReminderDaySent).default(false))
                    .col(boolean(Registration::ReminderDayOfSent).default(false))
                    .col(
                        timestamp(Registration::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_event_id")
                            .from(Registration::Table, Registration::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_user_id")
                            .from(Registration::Table, Registration::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registration_checked_in_by")
                            .from(Registration::Table, Registration::CheckedInBy)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per (event, email). Enforced here so that a racing
        // duplicate insert fails at the storage layer, not just in the
        // application-level pre-check.
        manager
            .create_index(
                Index::create()
                    .name("idx_registration_event_email")
                    .table(Registration::Table)
                    .col(Registration::EventId)
                    .col(Registration::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Registration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registration {
    Table,
    Id,
    EventId,
    UserId,
    RegistrationNumber,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    University,
    AcademicUnit,
    Level,
    DietaryRequirements,
    AccessibilityNeeds,
    CustomAnswers,
    Status,
    CheckedInAt,
    CheckedInBy,
    CancelledAt,
    CancellationReason,
    ConfirmationSent,
    ReminderWeekSent,
    ReminderDaySent,
    ReminderDayOfSent,
    CreatedAt,
}
