use serde::Serialize;
use serde_json::Value;

use super::domain::{ApplicantProfile, ApplicationId, Disposition, ResolvedAnswers};
use super::notice::ApplicantNotice;

/// Everything the export collaborator needs to write one application row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningReport {
    pub profile: ApplicantProfile,
    pub answers: ResolvedAnswers,
    pub disposition: Disposition,
    pub rationale: String,
    pub missing: Vec<String>,
    pub status_label: Option<String>,
    /// `None` when no notice was due, otherwise whether delivery succeeded.
    pub notice_delivered: Option<bool>,
}

impl ScreeningReport {
    pub fn status_view(&self) -> ScreeningStatusView {
        ScreeningStatusView {
            application_id: self.profile.application_id.clone(),
            disposition: self.disposition.label(),
            rationale: self.rationale.clone(),
            missing: self.missing.clone(),
            status: self.status_label.clone(),
        }
    }
}

/// Sanitized view of a screening result for API responses and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreeningStatusView {
    pub application_id: ApplicationId,
    pub disposition: &'static str,
    pub rationale: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Paged supplier of raw applicant documents (e.g. an applicant-tracking export).
pub trait ApplicationSource: Send + Sync {
    /// Documents on `page` (1-based). An empty page ends the batch.
    fn fetch_page(&self, page: u32) -> Result<Vec<Value>, CollaboratorError>;
}

/// Destination for per-application screening rows.
pub trait ResultSink: Send + Sync {
    fn record(&self, report: &ScreeningReport) -> Result<(), CollaboratorError>;

    fn finish(&self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

/// Outbound applicant messaging (e.g. an e-mail adapter).
pub trait ApplicantNotifier: Send + Sync {
    fn notify(&self, notice: &ApplicantNotice) -> Result<(), CollaboratorError>;
}

/// Remote candidate status updates.
pub trait StatusUpdater: Send + Sync {
    fn update_status(
        &self,
        application_id: &ApplicationId,
        status: &str,
    ) -> Result<(), CollaboratorError>;
}

/// Failure reported by any collaborator adapter.
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("collaborator rejected the request: {0}")]
    Rejected(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
