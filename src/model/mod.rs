//! Domain models, operation parameter types, and API DTOs.
//!
//! Parameter structs cross the service/repository boundary with typed fields;
//! DTOs cross the HTTP boundary and carry the derived view values (`full_name`,
//! `is_confirmed`, ...) computed from stored state at serialization time.

pub mod api;
pub mod event;
pub mod registration;
