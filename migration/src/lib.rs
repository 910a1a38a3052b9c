pub use sea_orm_migration::prelude::*;

mod m20250601_000001_users;
mod m20250601_000002_employers;
mod m20250601_000003_jobs;
mod m20250601_000004_job_applications;
mod m20250601_000005_admin_notifications;
mod m20250601_000006_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_users::Migration),
            Box::new(m20250601_000002_employers::Migration),
            Box::new(m20250601_000003_jobs::Migration),
            Box::new(m20250601_000004_job_applications::Migration),
            Box::new(m20250601_000005_admin_notifications::Migration),
            Box::new(m20250601_000006_notifications::Migration),
        ]
    }
}
