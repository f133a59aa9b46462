use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use entity::app_user;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds an identity user by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<app_user::Model>, DbErr> {
        entity::prelude::AppUser::find_by_id(id).one(self.db).await
    }

    /// Finds an identity user by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<app_user::Model>, DbErr> {
        entity::prelude::AppUser::find()
            .filter(app_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}
