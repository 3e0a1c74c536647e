use thiserror::Error;

use crate::workflow::FeatureStep;

#[derive(Error, Debug)]
pub enum ShipError {
    #[error("Failed to list commits between {base} and {head}: {reason}")]
    RangeQueryFailed {
        base: String,
        head: String,
        reason: String,
    },

    #[error("Description generation failed: {0}")]
    GenerationFailed(String),

    #[error("PR creation failed: {0}")]
    SubmissionFailed(String),

    #[error("Aborted while {step}: {output}")]
    SequenceAborted { step: FeatureStep, output: String },

    #[error("Invalid branch name: '{0}'")]
    InvalidBranchName(String),

    #[error("`{command}` failed: {output}")]
    Command { command: String, output: String },

    #[error("{0}")]
    Prerequisite(String),

    #[error("Credential store error: {0}")]
    Credential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ShipError {
    /// Raw output carried by a failed subprocess, or the error text otherwise.
    pub fn raw_output(&self) -> String {
        match self {
            ShipError::Command { output, .. } => output.clone(),
            ShipError::SequenceAborted { output, .. } => output.clone(),
            ShipError::SubmissionFailed(output) => output.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_aborted_names_the_step() {
        let err = ShipError::SequenceAborted {
            step: FeatureStep::Push,
            output: "remote rejected".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Aborted while pushing branch to origin: remote rejected"
        );
    }

    #[test]
    fn test_raw_output_prefers_command_output() {
        let err = ShipError::Command {
            command: "gh pr create".to_string(),
            output: "a pull request already exists".to_string(),
        };
        assert_eq!(err.raw_output(), "a pull request already exists");
    }

    #[test]
    fn test_range_query_failed_message() {
        let err = ShipError::RangeQueryFailed {
            base: "main".to_string(),
            head: "feature/x".to_string(),
            reason: "unknown revision".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("main"));
        assert!(msg.contains("feature/x"));
        assert!(msg.contains("unknown revision"));
    }
}
