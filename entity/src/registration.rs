use sea_orm::entity::prelude::*;

/// One participant's signup record for one event.
///
/// `registration_number` is globally unique and immutable after creation.
/// The waitlist is ordered by `created_at` (oldest promoted first). The four
/// notification flags are write-once: they are set when the corresponding
/// message goes out and never reset.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registration")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    /// Identity user, when the participant registered while authenticated.
    pub user_id: Option<i32>,
    #[sea_orm(unique)]
    pub registration_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub university: Option<String>,
    pub academic_unit: Option<String>,
    pub level: Option<String>,
    pub dietary_requirements: Option<String>,
    pub accessibility_needs: Option<String>,
    /// Answers to event-specific custom questions, keyed by question label.
    #[sea_orm(column_type = "Json", nullable)]
    pub custom_answers: Option<Json>,
    pub status: RegistrationStatus,
    pub checked_in_at: Option<DateTimeUtc>,
    pub checked_in_by: Option<i32>,
    pub cancelled_at: Option<DateTimeUtc>,
    pub cancellation_reason: Option<String>,
    pub confirmation_sent: bool,
    pub reminder_week_sent: bool,
    pub reminder_day_sent: bool,
    pub reminder_day_of_sent: bool,
    pub created_at: DateTimeUtc,
}

/// Registration lifecycle status.
///
/// `Cancelled` is terminal. `Present`/`Absent` are only reached through
/// check-in handling of a non-cancelled registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum RegistrationStatus {
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "waitlist")]
    Waitlist,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "present")]
    Present,
    #[sea_orm(string_value = "absent")]
    Absent,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::UserId",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::app_user::Entity",
        from = "Column::CheckedInBy",
        to = "super::app_user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    CheckedInActor,
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
