//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Factories automatically handle
//! foreign key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::app_user::create_user(&db).await?;
//!     let event = factory::event::create_event(&db).await?;
//!
//!     // Create an event plus a registration in one call
//!     let (event, registration) = factory::helpers::create_event_with_registration(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let event = factory::event::EventFactory::new(&db)
//!     .title("Welcome Gala")
//!     .max_participants(Some(50))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `app_user` - Create identity user entities
//! - `event` - Create event entities
//! - `registration` - Create registration entities
//! - `helpers` - Convenience methods for entities with dependencies

pub mod app_user;
pub mod event;
pub mod helpers;
pub mod registration;

// Re-export commonly used factory functions for concise usage
pub use app_user::create_user;
pub use event::create_event;
pub use registration::create_registration;
