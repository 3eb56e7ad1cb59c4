//! Session profile captured by the intake questionnaire.
//!
//! Answers ride along with the uploaded dataset as explicit configuration.
//! Nothing here is ambient: a report call only sees a questionnaire answer
//! when the caller folds it into the operation's parameters.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Multiple-choice role answer, with a free-text escape hatch for anything
/// off the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BusinessRole {
    Planner,
    Buyer,
    OperationsManager,
    Analyst,
    Other(String),
}

impl BusinessRole {
    /// Map a questionnaire answer onto a role, tolerating the spellings the
    /// intake form produces. Unrecognized answers are kept verbatim.
    pub fn from_answer(answer: &str) -> Self {
        let trimmed = answer.trim();
        match trimmed.to_lowercase().as_str() {
            "planner" => Self::Planner,
            "buyer" => Self::Buyer,
            "operations manager" | "operations_manager" | "ops manager" => Self::OperationsManager,
            "analyst" => Self::Analyst,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for BusinessRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planner => write!(f, "planner"),
            Self::Buyer => write!(f, "buyer"),
            Self::OperationsManager => write!(f, "operations manager"),
            Self::Analyst => write!(f, "analyst"),
            Self::Other(role) => write!(f, "{role}"),
        }
    }
}

/// Questionnaire answers stored against a dataset. Everything is optional;
/// report calls fall back to configured defaults for whatever is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct SessionProfile {
    pub role: Option<BusinessRole>,
    #[validate(length(max = 120, message = "Industry must be at most 120 characters"))]
    pub industry: Option<String>,
    /// Days of forward demand a purchase order should cover.
    #[validate(range(min = 0, message = "Target days of inventory cannot be negative"))]
    pub target_days_of_inventory: Option<i64>,
}

impl SessionProfile {
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.industry.is_none() && self.target_days_of_inventory.is_none()
    }
}
