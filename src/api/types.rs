//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::scoring::{RawTask, ScoredTask};

/// Request to analyze a list of tasks.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Tasks to score; must be non-empty. Missing and explicit null are
    /// both treated as empty.
    #[serde(default)]
    pub tasks: Option<Vec<RawTask>>,

    /// Weighting strategy name (defaults to `smart_balance`)
    pub strategy: Option<String>,
}

/// Ranked result of an analyze request.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    /// Scored tasks, sorted descending by score
    pub tasks: Vec<ScoredTask>,

    /// The strategy actually used (after fallback)
    pub strategy: String,
}

/// Result of a suggest request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SuggestResponse {
    /// The store holds no tasks
    Empty {
        suggestions: Vec<ScoredTask>,
        message: String,
    },
    /// Top suggestions over all stored tasks
    Ranked {
        /// At most 3 scored tasks, highest score first
        suggestions: Vec<ScoredTask>,
        /// Total number of stored tasks considered
        total_tasks: usize,
    },
}

impl SuggestResponse {
    /// The fixed empty-store response body.
    pub fn no_tasks() -> Self {
        SuggestResponse::Empty {
            suggestions: Vec::new(),
            message: "No tasks found".to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
