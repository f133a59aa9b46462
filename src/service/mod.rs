//! Business logic layer orchestrating between controllers and repositories.
//!
//! `RegistrationService` is the registration engine: the state machine that
//! governs creation, waitlisting, cancellation, check-in, and promotion of
//! registrations. The other services are thin collaborators around it.

pub mod event;
pub mod notification;
pub mod registration;
pub mod stats;
