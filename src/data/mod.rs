//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over SeaORM's `ConnectionTrait` so
//! the registration engine can run several of them inside a single transaction. All
//! database queries, inserts, and updates are performed through these repositories.

pub mod event;
pub mod registration;
pub mod user;
