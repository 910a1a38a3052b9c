//! Server application core modules.
//!
//! This module contains the job board backend: HTTP routing, job moderation, the application
//! workflow, user and admin notifications, and the email gateway used to inform applicants.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
