use serde::{Deserialize, Serialize};

use super::rules::{ScreeningSignals, DISQUALIFYING_RULES, HIGHLIGHT_RULES};

pub const REJECTION_MARKER: &str = "Rejected";
pub const ACCEPTANCE_MARKER: &str = "Accepted";
pub const DEFAULT_ACCEPTANCE_NOTE: &str = "meets basic qualifications";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Accepted,
    Rejected,
}

/// Enumerates the rules that disqualify an applicant, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disqualifier {
    NoWorkAuthorization,
    CriminalHistory,
    FailsDrugScreen,
    NoDriversLicense,
    NoExperience,
    NoRelevantBackground,
}

impl Disqualifier {
    pub fn summary(&self) -> String {
        match self {
            Disqualifier::NoWorkAuthorization => "Not authorized to work in the US",
            Disqualifier::CriminalHistory => "Has a criminal record",
            Disqualifier::FailsDrugScreen => "Unable to pass a drug screen",
            Disqualifier::NoDriversLicense => {
                "Does not have a valid driver's license and car insurance"
            }
            Disqualifier::NoExperience => "No professional caregiving experience",
            Disqualifier::NoRelevantBackground => {
                "No relevant caregiver experience or certification found"
            }
        }
        .to_string()
    }
}

/// Positive evidence noted for reviewers. Never affects the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Highlight {
    DeclaredExperience { years: f64 },
    ReportedExperience { years: u32 },
    RelevantTitle { keyword: String },
    RelevantEmployer { keyword: String },
    Certification { keyword: String },
    SubstantiveDescription,
}

impl Highlight {
    pub fn summary(&self) -> String {
        match self {
            Highlight::DeclaredExperience { years } => {
                format!("{years} year(s) of declared experience")
            }
            Highlight::ReportedExperience { years } => {
                format!("reports {years} year(s) of caregiving experience")
            }
            Highlight::RelevantTitle { keyword } => format!("job title matches '{keyword}'"),
            Highlight::RelevantEmployer { keyword } => format!("employer matches '{keyword}'"),
            Highlight::Certification { keyword } => format!("certification mentions '{keyword}'"),
            Highlight::SubstantiveDescription => "describes previous caregiving roles".to_string(),
        }
    }
}

/// Accept/reject verdict together with the findings that produced it.
///
/// The outcome is derived from the findings: an applicant is rejected exactly when at least
/// one disqualifier fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    outcome: Outcome,
    disqualifiers: Vec<Disqualifier>,
    highlights: Vec<Highlight>,
}

impl Decision {
    pub fn from_findings(disqualifiers: Vec<Disqualifier>, highlights: Vec<Highlight>) -> Self {
        let outcome = if disqualifiers.is_empty() {
            Outcome::Accepted
        } else {
            Outcome::Rejected
        };

        Self {
            outcome,
            disqualifiers,
            highlights,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_accepted(&self) -> bool {
        self.outcome == Outcome::Accepted
    }

    pub fn disqualifiers(&self) -> &[Disqualifier] {
        &self.disqualifiers
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Rejection causes when rejected, otherwise the positive highlights.
    pub fn reasons(&self) -> Vec<String> {
        match self.outcome {
            Outcome::Rejected => self.disqualifiers.iter().map(Disqualifier::summary).collect(),
            Outcome::Accepted => self.highlights.iter().map(Highlight::summary).collect(),
        }
    }

    /// Human-readable rationale, e.g. `Rejected: Has a criminal record; ...`.
    pub fn summary(&self) -> String {
        let reasons = self.reasons();
        match self.outcome {
            Outcome::Rejected => format!("{REJECTION_MARKER}: {}", reasons.join("; ")),
            Outcome::Accepted if reasons.is_empty() => {
                format!("{ACCEPTANCE_MARKER}: {DEFAULT_ACCEPTANCE_NOTE}")
            }
            Outcome::Accepted => format!("{ACCEPTANCE_MARKER}: {}", reasons.join("; ")),
        }
    }
}

pub(crate) fn decide_outcome(signals: &ScreeningSignals<'_>) -> Decision {
    let disqualifiers = DISQUALIFYING_RULES
        .iter()
        .filter_map(|rule| rule(signals))
        .collect();
    let highlights = HIGHLIGHT_RULES
        .iter()
        .filter_map(|rule| rule(signals))
        .collect();

    Decision::from_findings(disqualifiers, highlights)
}
