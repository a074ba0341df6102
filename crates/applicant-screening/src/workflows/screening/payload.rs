//! Decoding of applicant documents exported by the applicant-tracking system.
//!
//! One document carries the candidate contact block, the job name and the application form
//! (sections of labelled questions, answers keyed by question id, and the structured
//! profile/work-history blocks). Decoding turns it into the engine's typed inputs.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::domain::{AnswerSet, ApplicantProfile, ApplicationId, QuestionId, QuestionSchema};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("malformed applicant document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("applicant document has no candidate id")]
    MissingCandidateId,
    #[error("form section '{section}' is not a list of questions")]
    InvalidSection {
        section: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Engine inputs decoded from one applicant document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationIntake {
    pub profile: ApplicantProfile,
    pub schema: QuestionSchema,
    pub answers: AnswerSet,
}

/// Applicant document as exported per candidate/job pairing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicantDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate: CandidateContact,
    #[serde(default, deserialize_with = "flexible_string")]
    pub job_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub application: ApplicationBlock,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContact {
    #[serde(default, deserialize_with = "flexible_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub email: Option<String>,
    #[serde(default, alias = "home_phone", deserialize_with = "flexible_string")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub street_address: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_form_data: FormData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_work_history: Vec<WorkHistoryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormData {
    /// Answers keyed by question id; the tracking system sends `null` for cleared answers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_answers: BTreeMap<String, Option<CustomAnswer>>,
    /// Section name to question list, kept in authoring order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub form_sections: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_profile: CandidateProfileBlock,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_hr_attributes: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_work_history: Vec<WorkHistoryEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomAnswer {
    #[serde(default, deserialize_with = "flexible_string")]
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateProfileBlock {
    #[serde(default, deserialize_with = "flexible_string")]
    pub years_of_experience: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub work_permit_in_us: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkHistoryEntry {
    #[serde(default, deserialize_with = "flexible_string")]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub job_title_held: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FormQuestion {
    #[serde(default, deserialize_with = "flexible_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "flexible_string")]
    name: Option<String>,
}

const HOURLY_PAY_ATTRIBUTE: &str = "candidate.desired_compensation.hourly";

impl ApplicantDocument {
    pub fn from_json(raw: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self, PayloadError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn into_intake(self) -> Result<ApplicationIntake, PayloadError> {
        let ApplicantDocument {
            candidate,
            job_name,
            application,
        } = self;
        let ApplicationBlock {
            application_form_data: form,
            candidate_work_history: outer_history,
        } = application;

        let application_id = candidate
            .id
            .map(ApplicationId)
            .ok_or(PayloadError::MissingCandidateId)?;

        let schema = build_schema(&form.form_sections)?;
        let answers = form
            .custom_answers
            .into_iter()
            .map(|(id, answer)| (QuestionId(id), answer.and_then(|answer| answer.answer)))
            .collect::<AnswerSet>();

        let recent = form
            .candidate_work_history
            .into_iter()
            .next()
            .or_else(|| outer_history.into_iter().next())
            .unwrap_or_default();

        let desired_hourly_pay = form
            .candidate_hr_attributes
            .get(HOURLY_PAY_ATTRIBUTE)
            .and_then(value_to_string);

        let profile = ApplicantProfile {
            application_id,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            email: candidate.email,
            phone: candidate.phone_number,
            street: candidate.street_address,
            city: candidate.city,
            state: candidate.state,
            zip: candidate.zip_code,
            job_name,
            years_of_experience: form.candidate_profile.years_of_experience,
            work_authorization: form.candidate_profile.work_permit_in_us,
            desired_hourly_pay,
            recent_employer: recent.company_name,
            recent_title: recent.job_title_held,
            employment_start: recent.start_date.as_deref().and_then(parse_date),
            employment_end: recent.end_date.as_deref().and_then(parse_date),
        };

        Ok(ApplicationIntake {
            profile,
            schema,
            answers,
        })
    }
}

fn build_schema(sections: &Map<String, Value>) -> Result<QuestionSchema, PayloadError> {
    let mut schema = QuestionSchema::new();

    for (section, questions) in sections {
        if questions.is_null() {
            continue;
        }

        let questions: Vec<FormQuestion> = serde_json::from_value(questions.clone())
            .map_err(|source| PayloadError::InvalidSection {
                section: section.clone(),
                source,
            })?;

        for question in questions {
            if let (Some(label), Some(id)) = (question.name, question.id) {
                schema.insert(label, QuestionId(id));
            }
        }
    }

    Ok(schema)
}

/// Treat an explicit `null` block like a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accept strings, numbers, booleans and string lists; blank and null values become `None`.
fn flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_string))
}

fn value_to_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(true) => "yes".to_string(),
        Value::Bool(false) => "no".to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(value_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null | Value::Object(_) => return None,
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
