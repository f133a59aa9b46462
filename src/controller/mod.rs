//! HTTP handlers. Thin layer: extract, delegate to a service, convert to a
//! response. No business rules live here.

pub mod event;
pub mod registration;
