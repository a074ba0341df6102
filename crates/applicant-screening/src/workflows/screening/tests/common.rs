use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::screening::collaborators::{
    ApplicantNotifier, ApplicationSource, CollaboratorError, ResultSink, ScreeningReport,
    StatusUpdater,
};
use crate::workflows::screening::domain::{
    AnswerSet, ApplicantProfile, ApplicationId, QuestionId, QuestionSchema,
};
use crate::workflows::screening::notice::ApplicantNotice;
use crate::workflows::screening::questionnaire::{QuestionRole, Questionnaire};
use crate::workflows::screening::{ScreeningEngine, ScreeningService};

pub(super) const REFERENCES: &str = "Jane Smith 555-123-4567, John Doe 555-987-6543";

/// Answers for the caregiving questionnaire, keyed by role.
pub(super) fn cna_answers() -> Vec<(QuestionRole, &'static str)> {
    vec![
        (QuestionRole::SupervisorReferences, REFERENCES),
        (QuestionRole::CriminalHistory, "No"),
        (QuestionRole::DrugScreen, "Yes"),
        (QuestionRole::DriversLicense, "Yes, both"),
        (
            QuestionRole::ExperienceYears,
            "I have 4 years, previously 10 in retail",
        ),
        (QuestionRole::Certifications, "CNA since 2019"),
        (
            QuestionRole::RoleDescription,
            "Assisted living aide handling bathing, medication reminders and meal prep",
        ),
        (QuestionRole::Availability, "Immediately"),
        (QuestionRole::PayRate, "$17/hr"),
    ]
}

pub(super) fn cna_profile() -> ApplicantProfile {
    ApplicantProfile {
        application_id: ApplicationId("cand-100".to_string()),
        first_name: Some("Ana".to_string()),
        last_name: Some("Lopez".to_string()),
        email: Some("ana.lopez@example.com".to_string()),
        job_name: Some("Home Caregiver".to_string()),
        years_of_experience: Some("3".to_string()),
        work_authorization: Some("Yes".to_string()),
        recent_employer: Some("Sunrise Home Health".to_string()),
        recent_title: Some("CNA".to_string()),
        ..ApplicantProfile::default()
    }
}

/// Schema whose labels are exactly the canonical question texts.
pub(super) fn exact_intake(
    answers: &[(QuestionRole, &str)],
) -> (QuestionSchema, AnswerSet) {
    let questionnaire = Questionnaire::caregiving();
    let mut schema = QuestionSchema::new();
    let mut set = AnswerSet::new();

    for (index, item) in questionnaire.items().iter().enumerate() {
        let id = QuestionId(format!("q{}", index + 1));
        schema.insert(item.question.text(), id.clone());
        let answer = answers
            .iter()
            .find(|(role, _)| *role == item.role)
            .map(|(_, text)| text.to_string());
        set.insert(id, answer);
    }

    (schema, set)
}

pub(super) fn with_answer(
    role: QuestionRole,
    text: &'static str,
) -> Vec<(QuestionRole, &'static str)> {
    cna_answers()
        .into_iter()
        .map(|(r, t)| if r == role { (r, text) } else { (r, t) })
        .collect()
}

pub(super) fn engine() -> ScreeningEngine {
    ScreeningEngine::default()
}

/// Applicant-tracking document with every caregiving question answered.
pub(super) fn applicant_document(id: &str, answers: &[(QuestionRole, &str)]) -> Value {
    let questionnaire = Questionnaire::caregiving();
    let mut questions = Vec::new();
    let mut custom_answers = serde_json::Map::new();

    for (index, item) in questionnaire.items().iter().enumerate() {
        let question_id = 500 + index;
        questions.push(json!({ "id": question_id, "name": item.question.text() }));
        if let Some((_, text)) = answers.iter().find(|(role, _)| *role == item.role) {
            custom_answers.insert(question_id.to_string(), json!({ "answer": text }));
        }
    }

    json!({
        "candidate": {
            "id": id,
            "first_name": "Ana",
            "last_name": "Lopez",
            "email": format!("{id}@example.com"),
        },
        "job_name": "Home Caregiver",
        "application": {
            "application_form_data": {
                "form_sections": { "Screening": questions },
                "custom_answers": custom_answers,
                "candidate_profile": {
                    "years_of_experience": 3,
                    "work_permit_in_us": true
                },
                "candidate_hr_attributes": {
                    "candidate.desired_compensation.hourly": 18
                },
                "candidate_work_history": [
                    { "company_name": "Sunrise Home Health", "job_title_held": "CNA" }
                ]
            }
        }
    })
}

#[derive(Default, Clone)]
pub(super) struct MemorySource {
    pages: Vec<Vec<Value>>,
    requested: Arc<Mutex<Vec<u32>>>,
}

impl MemorySource {
    pub(super) fn with_pages(pages: Vec<Vec<Value>>) -> Self {
        Self {
            pages,
            requested: Arc::default(),
        }
    }

    pub(super) fn requested(&self) -> Vec<u32> {
        self.requested.lock().expect("source mutex poisoned").clone()
    }
}

impl ApplicationSource for MemorySource {
    fn fetch_page(&self, page: u32) -> Result<Vec<Value>, CollaboratorError> {
        self.requested
            .lock()
            .expect("source mutex poisoned")
            .push(page);
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}

pub(super) struct UnavailableSource;

impl ApplicationSource for UnavailableSource {
    fn fetch_page(&self, _page: u32) -> Result<Vec<Value>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("ats offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    reports: Arc<Mutex<Vec<ScreeningReport>>>,
}

impl MemorySink {
    pub(super) fn reports(&self) -> Vec<ScreeningReport> {
        self.reports.lock().expect("sink mutex poisoned").clone()
    }
}

impl ResultSink for MemorySink {
    fn record(&self, report: &ScreeningReport) -> Result<(), CollaboratorError> {
        self.reports
            .lock()
            .expect("sink mutex poisoned")
            .push(report.clone());
        Ok(())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    notices: Arc<Mutex<Vec<ApplicantNotice>>>,
}

impl MemoryNotifier {
    pub(super) fn notices(&self) -> Vec<ApplicantNotice> {
        self.notices.lock().expect("notifier mutex poisoned").clone()
    }
}

impl ApplicantNotifier for MemoryNotifier {
    fn notify(&self, notice: &ApplicantNotice) -> Result<(), CollaboratorError> {
        self.notices
            .lock()
            .expect("notifier mutex poisoned")
            .push(notice.clone());
        Ok(())
    }
}

pub(super) struct BouncingNotifier;

impl ApplicantNotifier for BouncingNotifier {
    fn notify(&self, _notice: &ApplicantNotice) -> Result<(), CollaboratorError> {
        Err(CollaboratorError::Rejected("mailbox full".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStatuses {
    updates: Arc<Mutex<Vec<(ApplicationId, String)>>>,
}

impl MemoryStatuses {
    pub(super) fn updates(&self) -> Vec<(ApplicationId, String)> {
        self.updates.lock().expect("status mutex poisoned").clone()
    }
}

impl StatusUpdater for MemoryStatuses {
    fn update_status(
        &self,
        application_id: &ApplicationId,
        status: &str,
    ) -> Result<(), CollaboratorError> {
        self.updates
            .lock()
            .expect("status mutex poisoned")
            .push((application_id.clone(), status.to_string()));
        Ok(())
    }
}

pub(super) type MemoryService =
    ScreeningService<MemorySource, MemorySink, MemoryNotifier, MemoryStatuses>;

pub(super) fn build_service(
    source: MemorySource,
) -> (MemoryService, MemorySink, MemoryNotifier, MemoryStatuses) {
    let sink = MemorySink::default();
    let notifier = MemoryNotifier::default();
    let statuses = MemoryStatuses::default();
    let service = ScreeningService::new(
        Arc::new(engine()),
        Arc::new(source),
        Arc::new(sink.clone()),
        Arc::new(notifier.clone()),
        Arc::new(statuses.clone()),
    );
    (service, sink, notifier, statuses)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
