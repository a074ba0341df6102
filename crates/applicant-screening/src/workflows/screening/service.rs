use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::collaborators::{
    ApplicantNotifier, ApplicationSource, CollaboratorError, ResultSink, ScreeningReport,
    StatusUpdater,
};
use super::domain::Disposition;
use super::engine::{ScreeningEngine, Verdict};
use super::notice::ApplicantNotice;
use super::payload::{ApplicantDocument, ApplicationIntake, PayloadError};

const DEFAULT_MAX_PAGES: u32 = 50;

/// Limits for one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub max_pages: u32,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Counts reported at the end of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub pages: u32,
    pub accepted: usize,
    pub rejected: usize,
    pub incomplete: usize,
    pub undecodable: usize,
}

impl BatchSummary {
    pub fn screened(&self) -> usize {
        self.accepted + self.rejected + self.incomplete
    }

    fn count(&mut self, disposition: Disposition) {
        match disposition {
            Disposition::Accepted => self.accepted += 1,
            Disposition::Rejected => self.rejected += 1,
            Disposition::Incomplete => self.incomplete += 1,
        }
    }
}

/// Orchestrator composing the screening engine with its I/O collaborators.
pub struct ScreeningService<S, X, N, U> {
    engine: Arc<ScreeningEngine>,
    source: Arc<S>,
    sink: Arc<X>,
    notifier: Arc<N>,
    statuses: Arc<U>,
}

impl<S, X, N, U> ScreeningService<S, X, N, U>
where
    S: ApplicationSource + 'static,
    X: ResultSink + 'static,
    N: ApplicantNotifier + 'static,
    U: StatusUpdater + 'static,
{
    pub fn new(
        engine: Arc<ScreeningEngine>,
        source: Arc<S>,
        sink: Arc<X>,
        notifier: Arc<N>,
        statuses: Arc<U>,
    ) -> Self {
        Self {
            engine,
            source,
            sink,
            notifier,
            statuses,
        }
    }

    pub fn engine(&self) -> &ScreeningEngine {
        &self.engine
    }

    /// Screen every document the source yields, page by page.
    pub fn run_batch(&self, options: BatchOptions) -> Result<BatchSummary, ScreeningServiceError> {
        let mut summary = BatchSummary::default();

        for page in 1..=options.max_pages {
            let documents = self.source.fetch_page(page)?;
            if documents.is_empty() {
                break;
            }
            summary.pages = page;
            info!(page, documents = documents.len(), "screening page");

            for document in documents {
                match self.process(document) {
                    Ok(report) => summary.count(report.disposition),
                    Err(ScreeningServiceError::Payload(err)) => {
                        warn!(page, error = %err, "skipping undecodable applicant document");
                        summary.undecodable += 1;
                    }
                    Err(other) => return Err(other),
                }
            }
        }

        self.sink.finish()?;
        info!(
            pages = summary.pages,
            accepted = summary.accepted,
            rejected = summary.rejected,
            incomplete = summary.incomplete,
            undecodable = summary.undecodable,
            "screening batch finished"
        );
        Ok(summary)
    }

    /// Decode and screen one raw applicant document.
    pub fn process(&self, document: Value) -> Result<ScreeningReport, ScreeningServiceError> {
        let intake = ApplicantDocument::from_value(document)?.into_intake()?;
        self.process_intake(intake)
    }

    /// Screen one decoded application and route the outcome to the collaborators.
    ///
    /// Incomplete applications get a notice and no status change; rejected ones get a
    /// rejection notice and the rejected status; accepted ones only get the accepted status.
    pub fn process_intake(
        &self,
        intake: ApplicationIntake,
    ) -> Result<ScreeningReport, ScreeningServiceError> {
        let ApplicationIntake {
            profile,
            schema,
            answers,
        } = intake;

        let screening = self.engine.screen(&profile, &schema, &answers);
        let disposition = screening.disposition();
        let rationale = screening.rationale();
        let missing = screening.missing();

        let (notice, status_label) = match &screening.verdict {
            Verdict::Incomplete { validation } => {
                warn!(
                    application_id = %profile.application_id,
                    open_items = validation.len(),
                    "application incomplete"
                );
                (Some(ApplicantNotice::incomplete(&profile, missing.clone())), None)
            }
            Verdict::Decided { decision } => {
                info!(
                    application_id = %profile.application_id,
                    outcome = ?decision.outcome(),
                    rationale = %rationale,
                    "application decided"
                );
                let notice = (!decision.is_accepted())
                    .then(|| ApplicantNotice::rejection(&profile, decision.summary()));
                (notice, Some(self.engine.status_label(decision).to_string()))
            }
        };

        let notice_delivered = notice.map(|notice| self.deliver(&notice));

        if let Some(status) = &status_label {
            self.statuses.update_status(&profile.application_id, status)?;
        }

        let report = ScreeningReport {
            profile,
            answers: screening.answers,
            disposition,
            rationale,
            missing,
            status_label,
            notice_delivered,
        };
        self.sink.record(&report)?;

        Ok(report)
    }

    fn deliver(&self, notice: &ApplicantNotice) -> bool {
        match self.notifier.notify(notice) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    application_id = %notice.application_id,
                    subject = notice.subject(),
                    error = %err,
                    "applicant notice failed"
                );
                false
            }
        }
    }
}

/// Error raised by the screening orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}
