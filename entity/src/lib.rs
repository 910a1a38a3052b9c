//! SeaORM entities for the job board schema.

pub mod prelude;

pub mod admin_notification;
pub mod employer;
pub mod job;
pub mod job_application;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod user;
