use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for screened applications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-application identifier the form builder assigned to one question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Questionnaire item the engine expects to find, by meaning, on every application form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalQuestion(String);

impl CanonicalQuestion {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    /// Text used when the question is surfaced to applicants or reviewers.
    pub fn display_text(&self) -> &str {
        self.0.trim()
    }
}

impl From<&str> for CanonicalQuestion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for CanonicalQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Raw answers for one application keyed by dynamic question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, Option<String>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: QuestionId, answer: Option<String>) {
        self.answers.insert(id, answer);
    }

    /// Answer text for `id`, or `None` when the id is unknown or was left unanswered.
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).and_then(|answer| answer.as_deref())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl FromIterator<(QuestionId, Option<String>)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Option<String>)>>(iter: T) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Form labels, in authoring order, mapped to their per-application question ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSchema {
    entries: Vec<(String, QuestionId)>,
}

impl QuestionSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a label. Blank labels are dropped; a repeated label keeps its original
    /// position and takes the newer id.
    pub fn insert(&mut self, label: impl Into<String>, id: QuestionId) {
        let label = label.into();
        if label.trim().is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = id,
            None => self.entries.push((label, id)),
        }
    }

    pub fn exact(&self, label: &str) -> Option<&QuestionId> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, id)| id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &QuestionId)> {
        self.entries.iter().map(|(label, id)| (label.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, QuestionId)> for QuestionSchema {
    fn from_iter<T: IntoIterator<Item = (L, QuestionId)>>(iter: T) -> Self {
        let mut schema = Self::new();
        for (label, id) in iter {
            schema.insert(label, id);
        }
        schema
    }
}

/// Value a canonical question resolved to for one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ResolvedAnswer {
    Answered(String),
    Absent,
}

impl ResolvedAnswer {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            ResolvedAnswer::Answered(text) => Some(text.as_str()),
            ResolvedAnswer::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, ResolvedAnswer::Absent)
    }
}

/// Exactly one resolved entry per canonical question, in questionnaire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAnswers {
    entries: Vec<(CanonicalQuestion, ResolvedAnswer)>,
}

impl ResolvedAnswers {
    pub(crate) fn from_entries(entries: Vec<(CanonicalQuestion, ResolvedAnswer)>) -> Self {
        Self { entries }
    }

    pub fn answer(&self, question: &CanonicalQuestion) -> Option<&ResolvedAnswer> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == question)
            .map(|(_, answer)| answer)
    }

    /// Answer text, treating unknown questions the same as absent ones.
    pub fn text(&self, question: &CanonicalQuestion) -> Option<&str> {
        self.answer(question).and_then(ResolvedAnswer::as_deref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalQuestion, &ResolvedAnswer)> {
        self.entries.iter().map(|(question, answer)| (question, answer))
    }

    pub fn questions(&self) -> impl Iterator<Item = &CanonicalQuestion> {
        self.entries.iter().map(|(question, _)| question)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Structured applicant fields read straight from the application payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub application_id: ApplicationId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub job_name: Option<String>,
    pub years_of_experience: Option<String>,
    pub work_authorization: Option<String>,
    pub desired_hourly_pay: Option<String>,
    pub recent_employer: Option<String>,
    pub recent_title: Option<String>,
    pub employment_start: Option<NaiveDate>,
    pub employment_end: Option<NaiveDate>,
}

impl ApplicantProfile {
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            format!("applicant {}", self.application_id)
        } else {
            parts.join(" ")
        }
    }

    pub fn field(&self, field: ProfileField) -> Option<String> {
        match field {
            ProfileField::ApplicationId => Some(self.application_id.0.clone()),
            ProfileField::FirstName => self.first_name.clone(),
            ProfileField::LastName => self.last_name.clone(),
            ProfileField::Email => self.email.clone(),
            ProfileField::Phone => self.phone.clone(),
            ProfileField::Street => self.street.clone(),
            ProfileField::City => self.city.clone(),
            ProfileField::State => self.state.clone(),
            ProfileField::Zip => self.zip.clone(),
            ProfileField::JobName => self.job_name.clone(),
            ProfileField::YearsOfExperience => self.years_of_experience.clone(),
            ProfileField::WorkAuthorization => self.work_authorization.clone(),
            ProfileField::DesiredHourlyPay => self.desired_hourly_pay.clone(),
            ProfileField::RecentEmployer => self.recent_employer.clone(),
            ProfileField::RecentTitle => self.recent_title.clone(),
            ProfileField::EmploymentStart => self.employment_start.map(|date| date.to_string()),
            ProfileField::EmploymentEnd => self.employment_end.map(|date| date.to_string()),
        }
    }
}

/// Column identifiers for the structured profile, in export order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    ApplicationId,
    FirstName,
    LastName,
    Email,
    Phone,
    Street,
    City,
    State,
    Zip,
    JobName,
    YearsOfExperience,
    WorkAuthorization,
    DesiredHourlyPay,
    RecentEmployer,
    RecentTitle,
    EmploymentStart,
    EmploymentEnd,
}

impl ProfileField {
    pub const ALL: [ProfileField; 17] = [
        ProfileField::ApplicationId,
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Street,
        ProfileField::City,
        ProfileField::State,
        ProfileField::Zip,
        ProfileField::JobName,
        ProfileField::YearsOfExperience,
        ProfileField::WorkAuthorization,
        ProfileField::DesiredHourlyPay,
        ProfileField::RecentEmployer,
        ProfileField::RecentTitle,
        ProfileField::EmploymentStart,
        ProfileField::EmploymentEnd,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            ProfileField::ApplicationId => "id",
            ProfileField::FirstName => "first_name",
            ProfileField::LastName => "last_name",
            ProfileField::Email => "email",
            ProfileField::Phone => "phone",
            ProfileField::Street => "street",
            ProfileField::City => "city",
            ProfileField::State => "state",
            ProfileField::Zip => "zip",
            ProfileField::JobName => "job_name",
            ProfileField::YearsOfExperience => "years_of_experience",
            ProfileField::WorkAuthorization => "work_permit_in_us",
            ProfileField::DesiredHourlyPay => "desired_compensation_hourly",
            ProfileField::RecentEmployer => "company_name",
            ProfileField::RecentTitle => "job_title_held",
            ProfileField::EmploymentStart => "start_date",
            ProfileField::EmploymentEnd => "end_date",
        }
    }
}

/// Where an application ended up after one screening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Incomplete,
    Accepted,
    Rejected,
}

impl Disposition {
    pub const fn label(self) -> &'static str {
        match self {
            Disposition::Incomplete => "incomplete",
            Disposition::Accepted => "accepted",
            Disposition::Rejected => "rejected",
        }
    }
}
