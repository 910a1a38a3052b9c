use entity::sea_orm_active_enums::{AdminAction, ApplicationStatus, JobStatus};
use sea_orm::{ActiveEnum, Iterable};

use crate::server::error::validation::ValidationError;

/// Finds the enum variant whose persisted name matches `value`, ignoring case and
/// surrounding whitespace.
pub fn parse_active_enum<E>(value: &str) -> Option<E>
where
    E: ActiveEnum<Value = String> + Iterable,
{
    let value = value.trim();
    E::iter().find(|variant| variant.to_value().eq_ignore_ascii_case(value))
}

pub fn parse_job_status(value: &str) -> Result<JobStatus, ValidationError> {
    parse_active_enum(value).ok_or_else(|| ValidationError::InvalidJobStatus(value.to_string()))
}

pub fn parse_application_status(value: &str) -> Result<ApplicationStatus, ValidationError> {
    parse_active_enum(value)
        .ok_or_else(|| ValidationError::InvalidApplicationStatus(value.to_string()))
}

pub fn parse_admin_action(value: &str) -> Result<AdminAction, ValidationError> {
    parse_active_enum(value).ok_or_else(|| ValidationError::InvalidActionType(value.to_string()))
}
