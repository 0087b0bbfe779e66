//! Idea input and canonical components.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Sentinel used for a component that could not be determined.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Request body accepted by the validation entry point.
///
/// Either `description` (free text) or `problem` (structured) must be present
/// and non-blank. A non-blank description wins when both are given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationRequest {
    pub description: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
    pub market: Option<String>,
    pub competition: Option<String>,
    pub team: Option<String>,
}

impl ValidationRequest {
    /// Free-text request.
    pub fn description(text: impl Into<String>) -> Self {
        Self {
            description: Some(text.into()),
            ..Default::default()
        }
    }

    /// Resolve the request into one of the two accepted input shapes.
    pub fn into_input(self) -> Result<IdeaInput, DomainError> {
        if let Some(description) = self.description.filter(|d| !d.trim().is_empty()) {
            return Ok(IdeaInput::Description(description));
        }

        match self.problem.filter(|p| !p.trim().is_empty()) {
            Some(problem) => Ok(IdeaInput::Structured(StructuredIdea {
                problem,
                solution: self.solution.unwrap_or_default(),
                market: self.market.unwrap_or_default(),
                competition: self.competition.unwrap_or_default(),
                team: self.team.unwrap_or_default(),
            })),
            None => Err(DomainError::ValidationInput),
        }
    }
}

/// Structured five-field idea as supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StructuredIdea {
    pub problem: String,
    pub solution: String,
    pub market: String,
    pub competition: String,
    pub team: String,
}

/// Validated raw input: free text or structured fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaInput {
    Description(String),
    Structured(StructuredIdea),
}

/// Canonical representation of a business idea.
///
/// Built exactly once per validation request and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaComponents {
    pub problem: String,
    pub solution: String,
    pub market: String,
    pub competition: String,
    pub team: String,
    /// `true` when the fields were derived from a free-text description
    pub extracted_from_text: bool,
    /// The description the fields were extracted from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_description: Option<String>,
}

impl IdeaComponents {
    /// Copy structured fields through unchanged.
    pub fn from_structured(idea: StructuredIdea) -> Self {
        Self {
            problem: idea.problem,
            solution: idea.solution,
            market: idea.market,
            competition: idea.competition,
            team: idea.team,
            extracted_from_text: false,
            original_description: None,
        }
    }

    /// Build from fields extracted out of a description.
    ///
    /// Blank fields are replaced with [`NOT_SPECIFIED`].
    pub fn from_extracted(idea: StructuredIdea, description: &str) -> Self {
        let fill = |s: String| {
            if s.trim().is_empty() {
                NOT_SPECIFIED.to_string()
            } else {
                s.trim().to_string()
            }
        };
        Self {
            problem: fill(idea.problem),
            solution: fill(idea.solution),
            market: fill(idea.market),
            competition: fill(idea.competition),
            team: fill(idea.team),
            extracted_from_text: true,
            original_description: Some(description.to_string()),
        }
    }

    /// A field's text, or `""` when it holds the [`NOT_SPECIFIED`] sentinel.
    pub fn meaningful(field: &str) -> &str {
        if field == NOT_SPECIFIED { "" } else { field }
    }

    /// Problem, solution and market text used for keyword and industry work.
    pub fn idea_text(&self) -> String {
        [
            Self::meaningful(&self.problem),
            Self::meaningful(&self.solution),
            Self::meaningful(&self.market),
        ]
        .join(" ")
    }

    /// The five fields as a structured record (for reporting).
    pub fn as_structured(&self) -> StructuredIdea {
        StructuredIdea {
            problem: self.problem.clone(),
            solution: self.solution.clone(),
            market: self.market.clone(),
            competition: self.competition.clone(),
            team: self.team.clone(),
        }
    }
}
