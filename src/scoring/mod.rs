//! Task normalization and priority scoring.
//!
//! The scoring core is a deterministic, side-effect-free transformation from
//! a task's raw attributes (due date, importance, estimated effort, dependency
//! fan-in) into a numeric priority score and a coarse priority tier. `today`
//! is passed in explicitly so results are reproducible in tests.

mod strategy;

pub use strategy::Strategy;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Externally supplied task - every field may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub importance: Option<f64>,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
}

/// Canonical task record produced by [`normalize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    /// ISO `YYYY-MM-DD` date string
    pub due_date: String,
    /// Always >= 1
    pub estimated_hours: f64,
    /// Clamped to [1, 10]
    pub importance: f64,
    /// Ids of tasks that list this task as a dependency source
    pub dependencies: Vec<String>,
}

/// Coarse priority bucket derived from score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    fn from_score(score: f64) -> Self {
        if score >= 25.0 {
            Priority::High
        } else if score >= 15.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// Canonical task plus its computed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    /// Weighted sum of sub-scores, rounded to one decimal place
    pub score: f64,
    pub priority: Priority,
    pub explanation: String,
}

/// Fill in defaults and clamp raw fields into a canonical task.
///
/// Missing ids get a fresh UUID v4; missing due dates default to `today`.
pub fn normalize(raw: &RawTask, today: NaiveDate) -> Task {
    let id = raw
        .id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Task {
        id,
        title: raw
            .title
            .clone()
            .unwrap_or_else(|| "Untitled Task".to_string()),
        due_date: raw
            .due_date
            .clone()
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
        estimated_hours: raw.estimated_hours.unwrap_or(1.0).max(1.0),
        importance: raw.importance.unwrap_or(5.0).clamp(1.0, 10.0),
        dependencies: raw.dependencies.clone().unwrap_or_default(),
    }
}

/// Signed number of days from `today` to the due date.
fn days_until_due(due_date: &str, today: NaiveDate) -> Option<i64> {
    let due = NaiveDate::parse_from_str(due_date, "%Y-%m-%d").ok()?;
    Some((due - today).num_days())
}

/// Urgency sub-score from days until due.
///
/// Overdue tasks score above 10, growing with overdue-ness and capped at 15.
/// A due date that does not parse as `YYYY-MM-DD` is treated as due today
/// rather than failing the whole batch.
pub fn urgency_score(due_date: &str, today: NaiveDate) -> f64 {
    let days = match days_until_due(due_date, today) {
        Some(days) => days,
        None => {
            tracing::warn!("Unparseable due_date {:?}, scoring as due today", due_date);
            return 10.0;
        }
    };

    if days < 0 {
        10.0 + (days.unsigned_abs() as f64 * 0.5).min(5.0)
    } else if days == 0 {
        10.0
    } else if days == 1 {
        9.0
    } else if days <= 3 {
        8.0
    } else if days <= 7 {
        6.0
    } else if days <= 14 {
        4.0
    } else if days <= 30 {
        2.0
    } else {
        1.0
    }
}

/// Effort sub-score, inverse of estimated hours - smaller tasks score higher.
pub fn effort_score(estimated_hours: f64) -> f64 {
    if estimated_hours <= 1.0 {
        10.0
    } else if estimated_hours <= 2.0 {
        8.0
    } else if estimated_hours <= 4.0 {
        6.0
    } else if estimated_hours <= 8.0 {
        4.0
    } else if estimated_hours <= 16.0 {
        2.0
    } else {
        1.0
    }
}

/// Dependency sub-score: how many tasks in the batch are blocked on this one.
///
/// Counts tasks whose `dependencies` list contains `task_id`. This measures
/// fan-in (who depends on me), not this task's own dependency count.
pub fn dependency_score(task_id: &str, batch: &[RawTask]) -> f64 {
    let count = batch
        .iter()
        .filter_map(|t| t.dependencies.as_ref())
        .filter(|deps| deps.iter().any(|d| d == task_id))
        .count();

    match count {
        0 => 1.0,
        1 => 4.0,
        2 => 7.0,
        _ => 10.0,
    }
}

/// Score a single raw task against the full batch under a strategy.
///
/// All four sub-scores are always computed; the strategy only selects the
/// coefficients of the weighted sum.
pub fn score_task(
    raw: &RawTask,
    batch: &[RawTask],
    strategy: Strategy,
    today: NaiveDate,
) -> ScoredTask {
    let task = normalize(raw, today);

    let urgency = urgency_score(&task.due_date, today);
    let importance = task.importance;
    let effort = effort_score(task.estimated_hours);
    let dependency = dependency_score(&task.id, batch);

    let w = strategy.weights();
    let score = urgency * w.urgency
        + importance * w.importance
        + effort * w.effort
        + dependency * w.dependency;
    let score = (score * 10.0).round() / 10.0;

    ScoredTask {
        task,
        score,
        priority: Priority::from_score(score),
        explanation: format!("Score computed with {} strategy.", strategy.as_str()),
    }
}

/// Score every task in the batch and sort descending by score.
///
/// Each task is scored against the same full batch, so dependency fan-in is
/// batch-relative. The sort is stable: ties keep their submission order.
pub fn rank_tasks(batch: &[RawTask], strategy: Strategy, today: NaiveDate) -> Vec<ScoredTask> {
    let mut scored: Vec<ScoredTask> = batch
        .iter()
        .map(|raw| score_task(raw, batch, strategy, today))
        .collect();
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
