//! Server application models and type definitions.
//!
//! Application state, database model aliases, pagination and the parameter structs passed
//! from services into repositories.

pub mod admin_notification;
pub mod app;
pub mod db;
pub mod job;
pub mod page;
