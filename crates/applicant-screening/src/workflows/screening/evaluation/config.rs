use serde::{Deserialize, Serialize};

const DEFAULT_MIN_DESCRIPTION_CHARS: usize = 20;

/// Keyword lists and thresholds backing the eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Role and industry terms matched against job title and employer name.
    pub background_keywords: Vec<String>,
    /// Credential terms matched against the certifications answer.
    pub certification_keywords: Vec<String>,
    /// Trimmed length a role description must exceed to count as substantive.
    pub min_description_chars: usize,
}

impl EvaluationConfig {
    pub fn caregiving() -> Self {
        Self {
            background_keywords: to_strings(&[
                "cna",
                "rna",
                "pct",
                "lpn",
                "rn",
                "medtech",
                "nurse",
                "nursing",
                "caregiver",
                "care giver",
                "care",
                "medical",
                "health care",
                "healthcare",
                "health assistant",
                "certified nursing",
                "home health",
                "patient care",
                "hospice",
                "assisted living",
                "memory care",
            ]),
            certification_keywords: to_strings(&[
                "cna",
                "pct",
                "lpn",
                "rn",
                "medtech",
                "certified",
                "license",
            ]),
            min_description_chars: DEFAULT_MIN_DESCRIPTION_CHARS,
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::caregiving()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
