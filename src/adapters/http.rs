use crate::domain::model::Resume;
use crate::domain::ports::{ConfigProvider, ResumeApi};
use crate::utils::error::{ResumeError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest-backed client for `GET <base>/resume?name=<name>`.
#[derive(Debug, Clone)]
pub struct HttpResumeApi {
    client: Client,
    base_url: Url,
}

impl HttpResumeApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: normalize_base(base_url)?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn resume_url(&self) -> Result<Url> {
        Ok(self.base_url.join("resume")?)
    }
}

#[async_trait]
impl ResumeApi for HttpResumeApi {
    async fn get_resume(&self, name: &str) -> Result<Resume> {
        let url = self.resume_url()?;
        tracing::debug!("Making API request to: {} (name={})", url, name);

        let response = self
            .client
            .get(url)
            .query(&[("name", name)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ResumeError::StatusError {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        tracing::trace!("API response body: {}", body);

        let resume: Resume = serde_json::from_str(&body)?;
        tracing::debug!(
            "Fetched resume for {} ({} skills, {} projects)",
            resume.name,
            resume.skills.len(),
            resume.projects.len()
        );
        Ok(resume)
    }
}

// `Url::join` drops the last path segment unless the base ends with a slash.
fn normalize_base(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "name": "Vivek Sachan",
            "phone": "555-0100",
            "email": "vivek@example.com",
            "twitter": "@vivek",
            "address": "Bengaluru",
            "skills": ["Go", "Rust"],
            "projects": [{"title": "X", "description": "Y"}]
        })
    }

    #[test]
    fn test_resume_url_keeps_base_path() {
        let api = HttpResumeApi::new("https://api.example.com/v1", None).unwrap();
        assert_eq!(
            api.resume_url().unwrap().as_str(),
            "https://api.example.com/v1/resume"
        );

        let api = HttpResumeApi::new("https://api.example.com/", None).unwrap();
        assert_eq!(
            api.resume_url().unwrap().as_str(),
            "https://api.example.com/resume"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            HttpResumeApi::new("not a url", None),
            Err(ResumeError::UrlError(_))
        ));
    }

    #[tokio::test]
    async fn test_get_resume_sends_name_query() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/resume")
                .query_param("name", "Vivek Sachan");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(sample_body());
        });

        let api = HttpResumeApi::new(&server.base_url(), None).unwrap();
        let resume = api.get_resume("Vivek Sachan").await.unwrap();

        api_mock.assert();
        assert_eq!(resume.name, "Vivek Sachan");
        assert_eq!(resume.projects.len(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/resume");
            then.status(404);
        });

        let api = HttpResumeApi::new(&server.base_url(), None).unwrap();
        let err = api.get_resume("nobody").await.unwrap_err();

        api_mock.assert();
        assert!(matches!(err, ResumeError::StatusError { status: 404 }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/resume");
            then.status(200).body("{\"name\": 42}");
        });

        let api = HttpResumeApi::new(&server.base_url(), None).unwrap();
        let err = api.get_resume("Vivek Sachan").await.unwrap_err();

        assert!(matches!(err, ResumeError::SerializationError(_)));
    }
}
