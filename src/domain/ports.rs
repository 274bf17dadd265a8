use crate::domain::model::Resume;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The single remote call the app makes.
#[async_trait]
pub trait ResumeApi: Send + Sync {
    async fn get_resume(&self, name: &str) -> Result<Resume>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn resume_name(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}
