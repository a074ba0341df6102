use applicant_screening::workflows::screening::{
    ApplicantNotice, ApplicantNotifier, ApplicationId, ApplicationSource, CollaboratorError,
    ResultSink, ScreeningReport, StatusUpdater,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Applicant documents read from a JSON export and served in fixed-size pages.
///
/// The export is either a bare array of documents or an object wrapping them under `data`.
#[derive(Debug, Clone)]
pub(crate) struct JsonDocumentSource {
    documents: Vec<Value>,
    page_size: usize,
}

impl JsonDocumentSource {
    pub(crate) fn from_path(path: &Path, page_size: usize) -> Result<Self, CollaboratorError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw, page_size)
    }

    pub(crate) fn from_json(raw: &str, page_size: usize) -> Result<Self, CollaboratorError> {
        let documents = match serde_json::from_str::<Value>(raw)? {
            Value::Array(documents) => documents,
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Array(documents)) => documents,
                _ => {
                    return Err(CollaboratorError::Rejected(
                        "export object has no `data` array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(CollaboratorError::Rejected(
                    "export must be an array of applicant documents".to_string(),
                ))
            }
        };

        Ok(Self {
            documents,
            page_size: page_size.max(1),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.documents.len()
    }
}

impl ApplicationSource for JsonDocumentSource {
    fn fetch_page(&self, page: u32) -> Result<Vec<Value>, CollaboratorError> {
        let start = (page.saturating_sub(1) as usize).saturating_mul(self.page_size);
        Ok(self
            .documents
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect())
    }
}

/// Notifier for dry runs: notices are logged instead of sent.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LogNotifier;

impl ApplicantNotifier for LogNotifier {
    fn notify(&self, notice: &ApplicantNotice) -> Result<(), CollaboratorError> {
        info!(
            application_id = %notice.application_id,
            recipient = notice.recipient.as_deref().unwrap_or("<none>"),
            subject = notice.subject(),
            "applicant notice"
        );
        Ok(())
    }
}

/// Status updater for dry runs: updates are logged instead of applied remotely.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LogStatusUpdater;

impl StatusUpdater for LogStatusUpdater {
    fn update_status(
        &self,
        application_id: &ApplicationId,
        status: &str,
    ) -> Result<(), CollaboratorError> {
        info!(application_id = %application_id, status, "candidate status update");
        Ok(())
    }
}

/// Result sink used when no export file is requested.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct LogResultSink;

impl ResultSink for LogResultSink {
    fn record(&self, report: &ScreeningReport) -> Result<(), CollaboratorError> {
        let view = serde_json::to_string(&report.status_view())?;
        info!(result = %view, "screening result");
        Ok(())
    }
}
