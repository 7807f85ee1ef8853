use crate::model::attendance::{attendance_year, AttendanceSheet, AttendanceStatus};
use crate::repository::AttendanceRepository;
use crate::service::dto::AttendanceSummary;
use anyhow::Result;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The running target attendance is measured against. Presentation only:
/// the progress computation never clamps to it.
pub const ATTENDANCE_GOAL_DAYS: u64 = 730;

/// Countable leave days per attendance-year.
pub const LEAVE_CAP_PER_YEAR: u64 = 30;

/// Tallies how many days carry each status.
///
/// Every status appears in the map; ones with no entries read 0. The sum of
/// all counts equals the number of marked days.
pub fn compute_counts(sheet: &AttendanceSheet) -> HashMap<AttendanceStatus, u64> {
    let mut counts: HashMap<AttendanceStatus, u64> = AttendanceStatus::ALL
        .iter()
        .map(|status| (*status, 0))
        .collect();

    for (_, status) in sheet.iter() {
        *counts.entry(status).or_insert(0) += 1;
    }

    counts
}

/// Countable progress: present days plus leave days, with leave capped at
/// `leave_cap_per_year` within each attendance-year bucket.
///
/// WeeklyOff and Transfer days never contribute. The result is not clamped
/// to the goal; exceeding it is a valid state and callers must not assume
/// the value is bounded.
pub fn compute_goal_progress(sheet: &AttendanceSheet, leave_cap_per_year: u64) -> u64 {
    let mut present_days: u64 = 0;
    let mut leave_by_year: HashMap<i32, u64> = HashMap::new();

    for (date, status) in sheet.iter() {
        match status {
            AttendanceStatus::Present => present_days += 1,
            AttendanceStatus::CasualLeave | AttendanceStatus::EarnedOrSickLeave => {
                *leave_by_year.entry(attendance_year(date)).or_insert(0) += 1;
            }
            AttendanceStatus::WeeklyOff | AttendanceStatus::Transfer => {}
        }
    }

    let countable_leave: u64 = leave_by_year
        .values()
        .map(|&days| days.min(leave_cap_per_year))
        .sum();

    present_days + countable_leave
}

pub struct AttendanceService<R: AttendanceRepository> {
    repo: R,
}

impl<R: AttendanceRepository> AttendanceService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Marks a day, returning the status it replaced if the day was already
    /// marked.
    pub fn mark(&self, date: NaiveDate, status: AttendanceStatus) -> Result<Option<AttendanceStatus>> {
        let mut sheet = self.repo.load()?;
        let previous = sheet.mark(date, status);
        self.repo.save(&sheet)?;
        Ok(previous)
    }

    pub fn clear(&self, date: NaiveDate) -> Result<Option<AttendanceStatus>> {
        let mut sheet = self.repo.load()?;
        let previous = sheet.clear(date);
        self.repo.save(&sheet)?;
        Ok(previous)
    }

    pub fn sheet(&self) -> Result<AttendanceSheet> {
        self.repo.load()
    }

    pub fn summary(&self) -> Result<AttendanceSummary> {
        let sheet = self.repo.load()?;
        Ok(AttendanceSummary::from_sheet(&sheet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn mark_run(sheet: &mut AttendanceSheet, from: NaiveDate, days: u64, status: AttendanceStatus) {
        for i in 0..days {
            sheet.mark(from + Duration::days(i as i64), status);
        }
    }

    #[test]
    fn test_counts_cover_all_statuses() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark(d(2025, 7, 1), AttendanceStatus::Present);
        sheet.mark(d(2025, 7, 2), AttendanceStatus::Present);
        sheet.mark(d(2025, 7, 3), AttendanceStatus::CasualLeave);
        sheet.mark(d(2025, 7, 6), AttendanceStatus::WeeklyOff);

        let counts = compute_counts(&sheet);
        assert_eq!(counts[&AttendanceStatus::Present], 2);
        assert_eq!(counts[&AttendanceStatus::CasualLeave], 1);
        assert_eq!(counts[&AttendanceStatus::WeeklyOff], 1);
        // Absent statuses still read zero
        assert_eq!(counts[&AttendanceStatus::EarnedOrSickLeave], 0);
        assert_eq!(counts[&AttendanceStatus::Transfer], 0);
    }

    #[test]
    fn test_counts_sum_to_entry_count() {
        let mut sheet = AttendanceSheet::new();
        mark_run(&mut sheet, d(2025, 7, 1), 10, AttendanceStatus::Present);
        mark_run(&mut sheet, d(2025, 7, 11), 4, AttendanceStatus::EarnedOrSickLeave);
        mark_run(&mut sheet, d(2025, 7, 15), 2, AttendanceStatus::Transfer);

        let counts = compute_counts(&sheet);
        let total: u64 = counts.values().sum();
        assert_eq!(total, sheet.len() as u64);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = AttendanceSheet::new();
        let counts = compute_counts(&sheet);
        assert_eq!(counts.len(), AttendanceStatus::ALL.len());
        assert!(counts.values().all(|&c| c == 0));
        assert_eq!(compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR), 0);
    }

    #[test]
    fn test_leave_caps_within_one_year() {
        // One present day, then 31 casual-leave days starting July 2, 2025.
        // All the leave lands in attendance-year 2025 and caps at 30.
        let mut sheet = AttendanceSheet::new();
        sheet.mark(d(2025, 7, 1), AttendanceStatus::Present);
        mark_run(&mut sheet, d(2025, 7, 2), 31, AttendanceStatus::CasualLeave);

        assert_eq!(compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR), 31);
    }

    #[test]
    fn test_year_boundary_splits_buckets() {
        // June 30, 2025 closes attendance-year 2024; July 1, 2025 opens 2025.
        // With a cap of 1 per year, both days still count.
        let mut sheet = AttendanceSheet::new();
        sheet.mark(d(2025, 6, 30), AttendanceStatus::CasualLeave);
        sheet.mark(d(2025, 7, 1), AttendanceStatus::CasualLeave);

        assert_eq!(compute_goal_progress(&sheet, 1), 2);
    }

    #[test]
    fn test_cap_applies_per_year_not_globally() {
        // 20 leave days in each of two attendance-years: under the default
        // cap nothing is lost, under a cap of 15 each bucket trims to 15.
        let mut sheet = AttendanceSheet::new();
        mark_run(&mut sheet, d(2025, 6, 1), 20, AttendanceStatus::EarnedOrSickLeave);
        mark_run(&mut sheet, d(2025, 7, 1), 20, AttendanceStatus::CasualLeave);

        assert_eq!(compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR), 40);
        assert_eq!(compute_goal_progress(&sheet, 15), 30);
    }

    #[test]
    fn test_off_and_transfer_do_not_accrue() {
        let mut sheet = AttendanceSheet::new();
        mark_run(&mut sheet, d(2025, 7, 5), 8, AttendanceStatus::WeeklyOff);
        mark_run(&mut sheet, d(2025, 7, 20), 3, AttendanceStatus::Transfer);

        assert_eq!(compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR), 0);

        // They still show up in the tallies
        let counts = compute_counts(&sheet);
        assert_eq!(counts[&AttendanceStatus::WeeklyOff], 8);
        assert_eq!(counts[&AttendanceStatus::Transfer], 3);
    }

    #[test]
    fn test_progress_is_not_clamped_to_goal() {
        // Three years of present days overshoot the 730-day goal; the raw
        // figure is preserved.
        let mut sheet = AttendanceSheet::new();
        mark_run(&mut sheet, d(2023, 1, 1), 1096, AttendanceStatus::Present);

        let progress = compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR);
        assert_eq!(progress, 1096);
        assert!(progress > ATTENDANCE_GOAL_DAYS);
    }

    #[test]
    fn test_calculators_are_idempotent() {
        let mut sheet = AttendanceSheet::new();
        mark_run(&mut sheet, d(2025, 7, 1), 12, AttendanceStatus::Present);
        mark_run(&mut sheet, d(2025, 7, 13), 5, AttendanceStatus::CasualLeave);

        assert_eq!(compute_counts(&sheet), compute_counts(&sheet));
        assert_eq!(
            compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR),
            compute_goal_progress(&sheet, LEAVE_CAP_PER_YEAR)
        );
    }
}
