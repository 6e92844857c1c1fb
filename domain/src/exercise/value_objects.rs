//! Action and skill-level value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The operation requested by the caller.
///
/// Wire values use the caller-facing camelCase spelling
/// (`conversation`, `vocabulary`, `grammar`, `fillerWords`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Conversation,
    Vocabulary,
    Grammar,
    FillerWords,
}

/// Error returned when an action string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid action")]
pub struct ParseActionError;

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Conversation => "conversation",
            Action::Vocabulary => "vocabulary",
            Action::Grammar => "grammar",
            Action::FillerWords => "fillerWords",
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "conversation" => Ok(Action::Conversation),
            "vocabulary" => Ok(Action::Vocabulary),
            "grammar" => Ok(Action::Grammar),
            "fillerWords" => Ok(Action::FillerWords),
            _ => Err(ParseActionError),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Learner proficiency tier controlling prompt difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Error returned when a skill-level string is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid skill level: {0}")]
pub struct ParseSkillLevelError(pub String);

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = ParseSkillLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(ParseSkillLevelError(s.to_string())),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
