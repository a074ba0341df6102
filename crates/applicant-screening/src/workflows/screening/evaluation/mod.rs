mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{
    Decision, Disqualifier, Highlight, Outcome, ACCEPTANCE_MARKER, DEFAULT_ACCEPTANCE_NOTE,
    REJECTION_MARKER,
};

use super::domain::{ApplicantProfile, ResolvedAnswers};
use super::questionnaire::Questionnaire;
use policy::decide_outcome;

/// Stateless evaluator that applies the rule set to one complete application.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    questionnaire: Questionnaire,
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(questionnaire: Questionnaire, config: EvaluationConfig) -> Self {
        Self {
            questionnaire,
            config,
        }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Run every rule against the profile and resolved answers.
    ///
    /// Callers are expected to have checked completeness first; see
    /// [`ScreeningEngine::evaluate`](super::ScreeningEngine::evaluate) for the guarded entry point.
    pub(crate) fn decide(&self, profile: &ApplicantProfile, answers: &ResolvedAnswers) -> Decision {
        let signals = rules::collect_signals(profile, answers, &self.questionnaire, &self.config);
        decide_outcome(&signals)
    }
}
