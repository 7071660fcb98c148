// src/session.rs
//! Submission state machine: holds the current analysis, gates concurrent
//! submissions, and routes file/URL input to the transport client.
//!
//! Lifecycle of the held result: starts empty, set on every successful
//! submission, cleared by [`AnalysisSession::reset`].

use std::path::Path;
use tracing::{info, warn};

use crate::core::AnalysisClient;
use crate::error::ClientError;
use crate::types::AnalysisResult;

pub const ALLOWED_RESUME_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Which input the submission form currently accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadMode {
    #[default]
    Resume,
    LinkedIn,
}

impl UploadMode {
    pub fn toggled(self) -> Self {
        match self {
            UploadMode::Resume => UploadMode::LinkedIn,
            UploadMode::LinkedIn => UploadMode::Resume,
        }
    }
}

pub struct AnalysisSession {
    client: AnalysisClient,
    current: Option<AnalysisResult>,
    busy: bool,
}

impl AnalysisSession {
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            current: None,
            busy: false,
        }
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    pub fn current(&self) -> Option<&AnalysisResult> {
        self.current.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Upload a resume file. Preconditions (file present, PDF or DOCX)
    /// fail before any network call.
    pub async fn submit_resume(&mut self, path: &Path) -> Result<&AnalysisResult, ClientError> {
        self.ensure_idle()?;

        if !path.exists() {
            return Err(ClientError::validation(format!(
                "Please select a resume file, not found: {}",
                path.display()
            )));
        }
        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        crate::utils::validate_file_extension(file_name, ALLOWED_RESUME_EXTENSIONS)?;

        info!("Submitting resume: {}", path.display());

        self.busy = true;
        let outcome = self.client.upload_resume(path).await;
        self.finish_submission(outcome)
    }

    /// Analyze a LinkedIn profile URL. Empty (trimmed) input fails before
    /// any network call.
    pub async fn submit_linkedin(&mut self, url: &str) -> Result<&AnalysisResult, ClientError> {
        self.ensure_idle()?;

        let url = url.trim();
        if url.is_empty() {
            return Err(ClientError::validation("Please enter a LinkedIn URL"));
        }

        info!("Submitting LinkedIn profile: {}", url);

        self.busy = true;
        let outcome = self.client.analyze_linkedin_url(url).await;
        self.finish_submission(outcome)
    }

    /// Discard the current analysis, returning control to the submission
    /// form.
    pub fn reset(&mut self) {
        self.current = None;
    }

    fn ensure_idle(&self) -> Result<(), ClientError> {
        if self.busy {
            warn!("Submission rejected: another analysis is in flight");
            return Err(ClientError::validation(
                "Please wait for the current analysis to finish",
            ));
        }
        Ok(())
    }

    // The busy flag must clear on every outcome so the session can never
    // stick busy; it is dropped before the outcome is inspected.
    fn finish_submission(
        &mut self,
        outcome: Result<AnalysisResult, ClientError>,
    ) -> Result<&AnalysisResult, ClientError> {
        self.busy = false;

        match outcome {
            Ok(result) => Ok(self.current.insert(result)),
            Err(e) => {
                warn!("Submission failed: {}", e);
                Err(e)
            }
        }
    }
}
