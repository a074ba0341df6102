//! Caregiver application screening.
//!
//! An application is screened in three steps: answers are resolved against the canonical
//! questionnaire, the resolved answers are checked for completeness, and complete applications
//! run through the eligibility rules. [`ScreeningEngine`] wires the steps together for one
//! configuration; [`ScreeningService`] adds the paged source, export, notification and status
//! collaborators around it.

pub mod collaborators;
pub mod completeness;
pub mod config;
pub mod domain;
pub mod engine;
pub mod evaluation;
pub mod export;
pub mod notice;
pub mod payload;
pub mod questionnaire;
pub mod resolver;
pub mod router;
pub mod service;
pub mod signals;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use collaborators::{
    ApplicantNotifier, ApplicationSource, CollaboratorError, ResultSink, ScreeningReport,
    ScreeningStatusView, StatusUpdater,
};
pub use completeness::{
    CompletenessPolicy, CompletenessValidator, ValidationIssue, ValidationResult,
};
pub use config::{RulesFileError, ScreeningConfig, StatusLabels};
pub use domain::{
    AnswerSet, ApplicantProfile, ApplicationId, CanonicalQuestion, Disposition, ProfileField,
    QuestionId, QuestionSchema, ResolvedAnswer, ResolvedAnswers,
};
pub use engine::{Screening, ScreeningEngine, ScreeningError, Verdict};
pub use evaluation::{Decision, Disqualifier, EvaluationConfig, EvaluationEngine, Highlight, Outcome};
pub use export::CsvResultSink;
pub use notice::{ApplicantNotice, NoticeKind};
pub use payload::{ApplicantDocument, ApplicationIntake, PayloadError};
pub use questionnaire::{QuestionRole, Questionnaire, QuestionnaireError, QuestionnaireItem};
pub use router::screening_router;
pub use service::{BatchOptions, BatchSummary, ScreeningService, ScreeningServiceError};
pub use transcript::{parse_transcript, transcript_intake, QaPair};
