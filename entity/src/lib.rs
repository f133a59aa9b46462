pub mod app_user;
pub mod event;
pub mod prelude;
pub mod registration;
