//! PR description generation.
//!
//! One generation attempt per call, with a deterministic commit list as the
//! fallback. [`DescriptionGenerator::generate`] cannot fail.

use std::time::Duration;

use tracing::{debug, info};

use crate::credentials::{Credential, CredentialSource};
use crate::error::{Result, ShipError};
use crate::llm::{GeminiClient, TextGenerator};
use crate::prompts::build_pr_body_prompt;

/// How a description was produced. Only used to label the review frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Generated,
    FromCommits,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrDescription {
    pub text: String,
    pub provenance: Provenance,
}

impl PrDescription {
    pub fn used_generation(&self) -> bool {
        self.provenance == Provenance::Generated
    }
}

type Connect<'a> = Box<dyn Fn(&str) -> Result<Box<dyn TextGenerator>> + 'a>;

/// Produces PR bodies from commit summaries.
pub struct DescriptionGenerator<'a> {
    credentials: &'a dyn CredentialSource,
    connect: Connect<'a>,
}

impl<'a> DescriptionGenerator<'a> {
    /// `connect` builds a generator for a resolved API key.
    pub fn new<F>(credentials: &'a dyn CredentialSource, connect: F) -> Self
    where
        F: Fn(&str) -> Result<Box<dyn TextGenerator>> + 'a,
    {
        Self {
            credentials,
            connect: Box::new(connect),
        }
    }

    /// Generator talking to Gemini with the given model and request timeout.
    pub fn gemini(credentials: &'a dyn CredentialSource, model: String, timeout: Duration) -> Self {
        Self::new(credentials, move |key| {
            let client = GeminiClient::new(key, &model, timeout)?;
            Ok(Box::new(client) as Box<dyn TextGenerator>)
        })
    }

    /// Describe the commits, falling back to a bullet list on any failure.
    ///
    /// The credential is resolved on every call.
    pub fn generate(&self, commits: &[String]) -> PrDescription {
        match self.credentials.resolve() {
            Credential::Absent => {
                debug!("no API key configured, using commit list");
            }
            Credential::Present { key, source } => {
                debug!(%source, "API key resolved");
                match self.try_generate(&key, commits) {
                    Ok(text) => {
                        info!(commits = commits.len(), "description generated");
                        return PrDescription {
                            text,
                            provenance: Provenance::Generated,
                        };
                    }
                    Err(e) => debug!(error = %e, "generation failed, using commit list"),
                }
            }
        }

        PrDescription {
            text: format_fallback_body(commits),
            provenance: Provenance::FromCommits,
        }
    }

    fn try_generate(&self, key: &str, commits: &[String]) -> Result<String> {
        let generator = (self.connect)(key)?;
        let text = generator.generate_text(&build_pr_body_prompt(commits))?;

        if text.trim().is_empty() {
            return Err(ShipError::GenerationFailed("empty response".to_string()));
        }

        Ok(text)
    }
}

/// Render commits as a `## Changes` bullet list, preserving their order.
pub fn format_fallback_body(commits: &[String]) -> String {
    let mut output = String::from("## Changes\n\n");
    for commit in commits {
        output.push_str("- ");
        output.push_str(commit);
        output.push('\n');
    }
    output
}
