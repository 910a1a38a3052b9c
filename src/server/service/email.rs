//! Outbound email for application status changes.
//!
//! The application workflow talks to an [`EmailGateway`] trait object so the delivery
//! mechanism can be swapped: [`WebhookEmailGateway`] posts JSON to an HTTP endpoint and
//! [`LogEmailGateway`] only logs.

use async_trait::async_trait;
use entity::sea_orm_active_enums::ApplicationStatus;
use serde::Serialize;

use crate::server::{
    error::email::EmailError,
    model::db::{EmployerModel, JobModel, UserModel},
};

/// Rendered status email for one applicant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ApplicationStatusEmail {
    pub to: String,
    pub subject: String,
    pub applicant_name: String,
    pub job_title: String,
    pub company_name: String,
    pub status: ApplicationStatus,
    pub approved: bool,
}

impl ApplicationStatusEmail {
    pub fn new(
        applicant: &UserModel,
        job: &JobModel,
        employer: &EmployerModel,
        status: ApplicationStatus,
    ) -> Self {
        let approved = status == ApplicationStatus::Approved;
        let subject = if approved {
            format!("Your application for {} has been accepted", job.title)
        } else {
            format!("Update on your application for {}", job.title)
        };

        Self {
            to: applicant.email.clone(),
            subject,
            applicant_name: applicant.full_name.clone(),
            job_title: job.title.clone(),
            company_name: employer.company_name.clone(),
            status,
            approved,
        }
    }
}

#[async_trait]
pub trait EmailGateway: Send + Sync {
    async fn send_application_status_email(
        &self,
        email: &ApplicationStatusEmail,
    ) -> Result<(), EmailError>;
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    from: &'a str,
    #[serde(flatten)]
    email: &'a ApplicationStatusEmail,
}

/// Delivers emails by POSTing them as JSON to a webhook.
pub struct WebhookEmailGateway {
    client: reqwest::Client,
    url: String,
    from: String,
}

impl WebhookEmailGateway {
    pub fn new(url: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            from: from.into(),
        }
    }
}

#[async_trait]
impl EmailGateway for WebhookEmailGateway {
    async fn send_application_status_email(
        &self,
        email: &ApplicationStatusEmail,
    ) -> Result<(), EmailError> {
        let payload = WebhookPayload {
            from: &self.from,
            email,
        };

        let response = self.client.post(&self.url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailError::Rejected {
                to: email.to.clone(),
                status: status.as_u16(),
            });
        }

        tracing::debug!(to = %email.to, "Sent application status email");

        Ok(())
    }
}

/// Gateway used when no webhook is configured.
pub struct LogEmailGateway;

#[async_trait]
impl EmailGateway for LogEmailGateway {
    async fn send_application_status_email(
        &self,
        email: &ApplicationStatusEmail,
    ) -> Result<(), EmailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "No email webhook configured, logging application status email"
        );

        Ok(())
    }
}
