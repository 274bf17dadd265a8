use crate::domain::model::Resume;
use crate::domain::ports::ResumeApi;
use crate::utils::error::Result;

/// Lifecycle of the one resume request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Resume),
    Failed(String),
}

impl FetchState {
    pub fn from_result(result: Result<Resume>) -> Self {
        match result {
            Ok(resume) => FetchState::Loaded(resume),
            Err(e) => FetchState::Failed(format!("Failed to load resume: {}", e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn resume(&self) -> Option<&Resume> {
        match self {
            FetchState::Loaded(resume) => Some(resume),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Move out of `Loading`. Returns false once a terminal state was reached.
    pub fn complete(&mut self, result: Result<Resume>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Ignoring fetch completion, request already settled");
            return false;
        }
        *self = FetchState::from_result(result);
        true
    }
}

/// Issues the single resume request for a configured name.
pub struct ResumeLoader<A: ResumeApi> {
    api: A,
    name: String,
}

impl<A: ResumeApi> ResumeLoader<A> {
    pub fn new(api: A, name: impl Into<String>) -> Self {
        Self {
            api,
            name: name.into(),
        }
    }

    pub async fn fetch(&self) -> Result<Resume> {
        tracing::info!("Fetching resume for {}", self.name);
        let result = self.api.get_resume(&self.name).await;
        match &result {
            Ok(resume) => tracing::info!("Fetched resume: {}", resume.name),
            Err(e) => tracing::error!("Error fetching resume: {}", e),
        }
        result
    }

    pub async fn load(&self) -> FetchState {
        FetchState::from_result(self.fetch().await)
    }
}
