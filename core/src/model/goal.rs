use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

/// A user-defined date range tracked for elapsed/total-day progress.
///
/// Both `start` and `end` are inclusive calendar days. A goal whose end
/// precedes its start is degenerate: its progress is defined as all zeros
/// rather than an error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Goal {
    pub fn new(title: String, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            start,
            end,
        }
    }
}

/// Result of evaluating a goal against a reference day.
///
/// `elapsed_days` is clamped to `[0, total_days]`, so `percent` stays within
/// `[0, 100]`. `Default` is the degenerate all-zero result.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalProgress {
    pub elapsed_days: i64,
    pub total_days: i64,
    pub percent: f64,
}
