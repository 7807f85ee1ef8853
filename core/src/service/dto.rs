use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::attendance::{AttendanceSheet, AttendanceStatus};
use crate::model::goal::{Goal, GoalProgress};
use crate::service::attendance_service::{
    compute_counts, compute_goal_progress, ATTENDANCE_GOAL_DAYS, LEAVE_CAP_PER_YEAR,
};

/// Flattened goal + progress fields for display.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GoalDto {
    pub id: Uuid,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub elapsed_days: i64,
    pub total_days: i64,
    pub percent: f64,
}

impl GoalDto {
    pub fn from_entity(goal: Goal, progress: GoalProgress) -> Self {
        Self {
            id: goal.id,
            title: goal.title,
            start: goal.start,
            end: goal.end,
            elapsed_days: progress.elapsed_days,
            total_days: progress.total_days,
            percent: progress.percent,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct StatusCount {
    pub status: AttendanceStatus,
    pub days: u64,
}

/// Attendance figures ready for rendering: per-status tallies in display
/// order plus the countable total measured against the running goal.
///
/// `percent` is derived from the uncapped countable total, so values above
/// 100 are possible and are handed to the renderer as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub counts: Vec<StatusCount>,
    pub countable_days: u64,
    pub goal_days: u64,
    pub percent: f64,
}

impl AttendanceSummary {
    pub fn from_sheet(sheet: &AttendanceSheet) -> Self {
        let tallies = compute_counts(sheet);
        let counts = AttendanceStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: *status,
                days: tallies[status],
            })
            .collect();

        let countable_days = compute_goal_progress(sheet, LEAVE_CAP_PER_YEAR);
        let percent = (countable_days as f64 / ATTENDANCE_GOAL_DAYS as f64) * 100.0;

        Self {
            counts,
            countable_days,
            goal_days: ATTENDANCE_GOAL_DAYS,
            percent,
        }
    }

    pub fn count_for(&self, status: AttendanceStatus) -> u64 {
        self.counts
            .iter()
            .find(|c| c.status == status)
            .map(|c| c.days)
            .unwrap_or(0)
    }
}
