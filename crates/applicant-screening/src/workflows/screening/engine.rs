use serde::Serialize;
use tracing::debug;

use super::completeness::{CompletenessValidator, ValidationResult};
use super::config::ScreeningConfig;
use super::domain::{
    AnswerSet, ApplicantProfile, ApplicationId, Disposition, QuestionSchema, ResolvedAnswers,
};
use super::evaluation::{Decision, EvaluationEngine, Outcome};
use super::questionnaire::Questionnaire;
use super::resolver;

/// Failure raised by the engine's guarded entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreeningError {
    #[error("eligibility evaluated on an incomplete application ({} open item(s))", .0.len())]
    InvalidatedPrecondition(ValidationResult),
}

/// Result of screening one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum Verdict {
    Incomplete { validation: ValidationResult },
    Decided { decision: Decision },
}

/// Resolved answers plus the verdict for one application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screening {
    pub application_id: ApplicationId,
    pub answers: ResolvedAnswers,
    pub verdict: Verdict,
}

impl Screening {
    pub fn disposition(&self) -> Disposition {
        match &self.verdict {
            Verdict::Incomplete { .. } => Disposition::Incomplete,
            Verdict::Decided { decision } => match decision.outcome() {
                Outcome::Accepted => Disposition::Accepted,
                Outcome::Rejected => Disposition::Rejected,
            },
        }
    }

    pub fn decision(&self) -> Option<&Decision> {
        match &self.verdict {
            Verdict::Decided { decision } => Some(decision),
            Verdict::Incomplete { .. } => None,
        }
    }

    pub fn missing(&self) -> Vec<String> {
        match &self.verdict {
            Verdict::Incomplete { validation } => validation.messages(),
            Verdict::Decided { .. } => Vec::new(),
        }
    }

    /// Decision summary, or the open completeness items for incomplete applications.
    pub fn rationale(&self) -> String {
        match &self.verdict {
            Verdict::Decided { decision } => decision.summary(),
            Verdict::Incomplete { validation } => {
                format!("Incomplete: {}", validation.messages().join("; "))
            }
        }
    }
}

/// Facade wiring the resolver, completeness validator and rule evaluator for one configuration.
///
/// Every method is a pure computation over its arguments, so a single engine can be shared
/// across threads and reused for any number of applications.
#[derive(Debug, Clone)]
pub struct ScreeningEngine {
    config: ScreeningConfig,
    validator: CompletenessValidator,
    evaluator: EvaluationEngine,
}

impl ScreeningEngine {
    pub fn new(config: ScreeningConfig) -> Self {
        let validator =
            CompletenessValidator::new(config.questionnaire.clone(), config.completeness.clone());
        let evaluator =
            EvaluationEngine::new(config.questionnaire.clone(), config.evaluation.clone());

        Self {
            config,
            validator,
            evaluator,
        }
    }

    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.config.questionnaire
    }

    pub fn resolve(&self, schema: &QuestionSchema, answers: &AnswerSet) -> ResolvedAnswers {
        resolver::resolve(schema, answers, self.config.questionnaire.questions())
    }

    pub fn validate(&self, answers: &ResolvedAnswers) -> ValidationResult {
        self.validator.validate(answers)
    }

    /// Evaluate eligibility. Fails when the application is not complete.
    pub fn evaluate(
        &self,
        profile: &ApplicantProfile,
        answers: &ResolvedAnswers,
    ) -> Result<Decision, ScreeningError> {
        let validation = self.validate(answers);
        if !validation.is_complete() {
            return Err(ScreeningError::InvalidatedPrecondition(validation));
        }

        Ok(self.evaluator.decide(profile, answers))
    }

    /// Resolve, validate and, when complete, evaluate one application.
    pub fn screen(
        &self,
        profile: &ApplicantProfile,
        schema: &QuestionSchema,
        answers: &AnswerSet,
    ) -> Screening {
        let resolved = self.resolve(schema, answers);
        let validation = self.validate(&resolved);

        let verdict = if validation.is_complete() {
            let decision = self.evaluator.decide(profile, &resolved);
            debug!(
                application_id = %profile.application_id,
                outcome = ?decision.outcome(),
                "application evaluated"
            );
            Verdict::Decided { decision }
        } else {
            debug!(
                application_id = %profile.application_id,
                open_items = validation.len(),
                "application incomplete"
            );
            Verdict::Incomplete { validation }
        };

        Screening {
            application_id: profile.application_id.clone(),
            answers: resolved,
            verdict,
        }
    }

    /// Remote status label for a decided application.
    pub fn status_label(&self, decision: &Decision) -> &str {
        match decision.outcome() {
            Outcome::Accepted => &self.config.statuses.accepted,
            Outcome::Rejected => &self.config.statuses.rejected,
        }
    }
}

impl Default for ScreeningEngine {
    fn default() -> Self {
        Self::new(ScreeningConfig::default())
    }
}
