use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::completeness::CompletenessPolicy;
use super::evaluation::EvaluationConfig;
use super::questionnaire::Questionnaire;

/// Remote status labels applied after a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    pub accepted: String,
    pub rejected: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self {
            accepted: "Candidate".to_string(),
            rejected: "Inactive".to_string(),
        }
    }
}

/// Everything one screening run is configured with: questions, completeness rules,
/// eligibility keywords and status labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    pub questionnaire: Questionnaire,
    pub completeness: CompletenessPolicy,
    pub evaluation: EvaluationConfig,
    pub statuses: StatusLabels,
}

impl ScreeningConfig {
    /// Load a JSON rules file. Omitted sections fall back to the caregiving defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RulesFileError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RulesFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| RulesFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesFileError {
    #[error("failed to read screening rules from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid screening rules in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
