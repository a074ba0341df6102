use serde::{Deserialize, Serialize};

use super::domain::{ApplicantProfile, ApplicationId};

pub const INCOMPLETE_SUBJECT: &str = "Incomplete Application – Action Required";
pub const REJECTION_SUBJECT: &str = "Application Status – Rejection";

/// What the applicant is being told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoticeKind {
    Incomplete { items: Vec<String> },
    Rejection { reason: String },
}

/// Message relayed to an applicant by the notification collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantNotice {
    pub application_id: ApplicationId,
    pub recipient: Option<String>,
    pub job_name: Option<String>,
    pub kind: NoticeKind,
}

impl ApplicantNotice {
    pub fn incomplete(profile: &ApplicantProfile, items: Vec<String>) -> Self {
        Self::for_profile(profile, NoticeKind::Incomplete { items })
    }

    pub fn rejection(profile: &ApplicantProfile, reason: String) -> Self {
        Self::for_profile(profile, NoticeKind::Rejection { reason })
    }

    fn for_profile(profile: &ApplicantProfile, kind: NoticeKind) -> Self {
        Self {
            application_id: profile.application_id.clone(),
            recipient: profile.email.clone(),
            job_name: profile.job_name.clone(),
            kind,
        }
    }

    pub fn subject(&self) -> &'static str {
        match self.kind {
            NoticeKind::Incomplete { .. } => INCOMPLETE_SUBJECT,
            NoticeKind::Rejection { .. } => REJECTION_SUBJECT,
        }
    }

    /// Plain-text body ready for an e-mail adapter.
    pub fn body(&self) -> String {
        let job = self.job_name.as_deref().unwrap_or("the position");
        let mut body = String::from("Dear Applicant,\n\n");

        match &self.kind {
            NoticeKind::Incomplete { items } => {
                body.push_str(&format!("Your application for {job} is incomplete.\n\n"));
                body.push_str("Please complete the following required information:\n");
                for item in items {
                    body.push_str(&format!("  - {item}\n"));
                }
                body.push_str(
                    "\nOnce completed, your application will proceed for further review.\n",
                );
            }
            NoticeKind::Rejection { reason } => {
                body.push_str(&format!("Thank you for applying for {job}.\n\n"));
                body.push_str("We regret to inform you that your application has not been successful.\n\n");
                body.push_str(&format!("Reason: {reason}\n\n"));
                body.push_str(
                    "We encourage you to apply for future opportunities that match your skills.\n",
                );
            }
        }

        body.push_str("\nThank you,\nHiring Team\n");
        body
    }
}
