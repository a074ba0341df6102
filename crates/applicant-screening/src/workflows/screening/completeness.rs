use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::{CanonicalQuestion, ResolvedAnswers};
use super::questionnaire::{QuestionRole, Questionnaire};

/// Message relayed to applicants whose supervisor references are not usable.
pub const SUPERVISOR_REFERENCES_MESSAGE: &str =
    "Please provide at least 2 former supervisors with their names and phone numbers. \
     Supervisors cannot be co-workers, family members, or friends.";

const DEFAULT_MIN_SUPERVISOR_REFERENCES: usize = 2;

/// Policy dial for what counts as a complete application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletenessPolicy {
    /// Canonical questions that may be left unanswered.
    pub ignored_questions: BTreeSet<CanonicalQuestion>,
    /// Minimum number of supervisor names and of distinct phone numbers.
    pub min_supervisor_references: usize,
}

impl Default for CompletenessPolicy {
    fn default() -> Self {
        Self {
            ignored_questions: BTreeSet::new(),
            min_supervisor_references: DEFAULT_MIN_SUPERVISOR_REFERENCES,
        }
    }
}

/// One reason an application cannot be evaluated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    Missing { question: CanonicalQuestion },
    InvalidFormat { question: CanonicalQuestion, message: String },
}

impl ValidationIssue {
    pub fn question(&self) -> &CanonicalQuestion {
        match self {
            ValidationIssue::Missing { question } => question,
            ValidationIssue::InvalidFormat { question, .. } => question,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::Missing { question } => question.display_text().to_string(),
            ValidationIssue::InvalidFormat { message, .. } => message.clone(),
        }
    }
}

/// Ordered completeness findings for one application; empty means complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ValidationIssue::message).collect()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks that every required canonical question was answered, and answered usefully.
#[derive(Debug, Clone)]
pub struct CompletenessValidator {
    questionnaire: Questionnaire,
    policy: CompletenessPolicy,
}

impl CompletenessValidator {
    pub fn new(questionnaire: Questionnaire, policy: CompletenessPolicy) -> Self {
        Self {
            questionnaire,
            policy,
        }
    }

    pub fn policy(&self) -> &CompletenessPolicy {
        &self.policy
    }

    pub fn validate(&self, answers: &ResolvedAnswers) -> ValidationResult {
        let mut issues = Vec::new();

        for question in self.questionnaire.questions() {
            if self.policy.ignored_questions.contains(question) {
                continue;
            }

            let Some(text) = answers.text(question) else {
                issues.push(ValidationIssue::Missing {
                    question: question.clone(),
                });
                continue;
            };

            if self.questionnaire.role_of(question) == Some(QuestionRole::SupervisorReferences)
                && !has_supervisor_references(text, self.policy.min_supervisor_references)
            {
                issues.push(ValidationIssue::InvalidFormat {
                    question: question.clone(),
                    message: SUPERVISOR_REFERENCES_MESSAGE.to_string(),
                });
            }
        }

        ValidationResult { issues }
    }
}

/// At least `minimum` distinct phone numbers and `minimum` capitalized names.
pub fn has_supervisor_references(text: &str, minimum: usize) -> bool {
    let phones: HashSet<String> = phone_pattern()
        .find_iter(text)
        .map(|found| {
            found
                .as_str()
                .chars()
                .filter(char::is_ascii_digit)
                .collect()
        })
        .collect();
    let names = name_pattern().find_iter(text).count();

    phones.len() >= minimum && names >= minimum
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\+?[0-9](?:[ \-]?[0-9]){8,}").expect("valid phone regex")
    })
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)?\b").expect("valid name regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_names_and_two_phones_pass() {
        assert!(has_supervisor_references(
            "Jane Smith 555-123-4567, John Doe 555-987-6543",
            2
        ));
        assert!(has_supervisor_references(
            "Maria Lopez +1 312 555 0101; Tom Reed 3125550199",
            2
        ));
    }

    #[test]
    fn one_reference_fails() {
        assert!(!has_supervisor_references("Jane Smith 555-123-4567", 2));
    }

    #[test]
    fn repeated_phone_number_counts_once() {
        assert!(!has_supervisor_references(
            "Jane Smith 555-123-4567, John Doe 555 123 4567",
            2
        ));
    }

    #[test]
    fn only_ascii_digits_count_as_phones() {
        assert!(!has_supervisor_references(
            "Jane Smith \u{665}\u{665}\u{665}\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}, \
             John Doe \u{665}\u{665}\u{665}\u{669}\u{668}\u{667}\u{666}\u{665}\u{664}\u{663}",
            2
        ));
        assert!(has_supervisor_references(
            "Jane Smith 5551234567 \u{661}\u{662}, John Doe 5559876543",
            2
        ));
    }

    #[test]
    fn short_numbers_are_not_phones() {
        assert!(!has_supervisor_references(
            "Jane Smith ext 1234, John Doe ext 5678",
            2
        ));
    }
}
