use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::domain::CanonicalQuestion;

/// Part a canonical question plays in completeness checks and eligibility rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionRole {
    SupervisorReferences,
    CriminalHistory,
    DrugScreen,
    DriversLicense,
    ExperienceYears,
    Certifications,
    RoleDescription,
    Availability,
    PayRate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    pub role: QuestionRole,
    pub question: CanonicalQuestion,
}

impl QuestionnaireItem {
    pub fn new(role: QuestionRole, question: impl Into<String>) -> Self {
        Self {
            role,
            question: CanonicalQuestion::new(question),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("question role {0:?} is assigned more than once")]
    DuplicateRole(QuestionRole),
    #[error("question '{0}' appears more than once")]
    DuplicateQuestion(String),
    #[error("question for role {0:?} has no text")]
    EmptyQuestion(QuestionRole),
}

/// Ordered canonical question set for one screening run.
///
/// Each question carries a [`QuestionRole`] so rules look answers up by role instead of
/// by question wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<QuestionnaireItem>", into = "Vec<QuestionnaireItem>")]
pub struct Questionnaire {
    items: Vec<QuestionnaireItem>,
}

impl Questionnaire {
    pub fn new(items: Vec<QuestionnaireItem>) -> Result<Self, QuestionnaireError> {
        let mut roles = HashSet::new();
        let mut texts = HashSet::new();

        for item in &items {
            if item.question.text().trim().is_empty() {
                return Err(QuestionnaireError::EmptyQuestion(item.role));
            }
            if !roles.insert(item.role) {
                return Err(QuestionnaireError::DuplicateRole(item.role));
            }
            if !texts.insert(item.question.text()) {
                return Err(QuestionnaireError::DuplicateQuestion(
                    item.question.display_text().to_string(),
                ));
            }
        }

        Ok(Self { items })
    }

    /// Caregiver screening form as authored on the hiring site.
    pub fn caregiving() -> Self {
        Self {
            items: vec![
                QuestionnaireItem::new(
                    QuestionRole::SupervisorReferences,
                    "Please provide the contact name and phone number of 2-3 former supervisors. ",
                ),
                QuestionnaireItem::new(
                    QuestionRole::CriminalHistory,
                    "Have you been arrested, convicted of a felony, or misdemeanor? ",
                ),
                QuestionnaireItem::new(
                    QuestionRole::DrugScreen,
                    "Are you able to pass a drug screen? ",
                ),
                QuestionnaireItem::new(
                    QuestionRole::DriversLicense,
                    "Do you have a valid driver's license, and car insurance?",
                ),
                QuestionnaireItem::new(
                    QuestionRole::ExperienceYears,
                    "How many years of professional caregiving experience do you have?",
                ),
                QuestionnaireItem::new(
                    QuestionRole::Certifications,
                    "Do you currently hold any caregiving-related certifications (CNA, PCT, LPN, RN, MedTech, etc.)?",
                ),
                QuestionnaireItem::new(
                    QuestionRole::RoleDescription,
                    "Can you briefly describe your previous caregiving roles, including your main responsibilities and the care settings you worked in?",
                ),
                QuestionnaireItem::new(
                    QuestionRole::Availability,
                    "What is your availability to start? Immediately or within a required timeframe?",
                ),
                QuestionnaireItem::new(
                    QuestionRole::PayRate,
                    "What was/ is your most recent pay rate?",
                ),
            ],
        }
    }

    pub fn items(&self) -> &[QuestionnaireItem] {
        &self.items
    }

    pub fn questions(&self) -> impl Iterator<Item = &CanonicalQuestion> {
        self.items.iter().map(|item| &item.question)
    }

    pub fn question(&self, role: QuestionRole) -> Option<&CanonicalQuestion> {
        self.items
            .iter()
            .find(|item| item.role == role)
            .map(|item| &item.question)
    }

    pub fn role_of(&self, question: &CanonicalQuestion) -> Option<QuestionRole> {
        self.items
            .iter()
            .find(|item| &item.question == question)
            .map(|item| item.role)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::caregiving()
    }
}

impl TryFrom<Vec<QuestionnaireItem>> for Questionnaire {
    type Error = QuestionnaireError;

    fn try_from(items: Vec<QuestionnaireItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Questionnaire> for Vec<QuestionnaireItem> {
    fn from(questionnaire: Questionnaire) -> Self {
        questionnaire.items
    }
}
