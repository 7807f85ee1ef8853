use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};

/// The closed set of per-day attendance categories.
///
/// Serde names match the strings the original data files use, so an exported
/// sheet deserializes as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present,
    #[serde(rename = "Casual Leave")]
    CasualLeave,
    #[serde(rename = "Earned/Sick Leave")]
    EarnedOrSickLeave,
    #[serde(rename = "Weekly Off")]
    WeeklyOff,
    Transfer,
}

impl AttendanceStatus {
    /// Fixed display order for tables and summaries.
    pub const ALL: [AttendanceStatus; 5] = [
        AttendanceStatus::Present,
        AttendanceStatus::CasualLeave,
        AttendanceStatus::EarnedOrSickLeave,
        AttendanceStatus::WeeklyOff,
        AttendanceStatus::Transfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::CasualLeave => "Casual Leave",
            AttendanceStatus::EarnedOrSickLeave => "Earned/Sick Leave",
            AttendanceStatus::WeeklyOff => "Weekly Off",
            AttendanceStatus::Transfer => "Transfer",
        }
    }

    /// Whether the status counts against the per-year leave cap.
    /// WeeklyOff and Transfer are display-only and never accrue.
    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::CasualLeave | AttendanceStatus::EarnedOrSickLeave
        )
    }
}

/// A date-keyed attendance sheet: one status per calendar day.
///
/// Marking a day that already has a status overwrites it; there is no
/// history. Serializes transparently as a `{"YYYY-MM-DD": "Status"}` object,
/// the same shape the original sheet exports carry.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct AttendanceSheet {
    days: BTreeMap<NaiveDate, AttendanceStatus>,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status for a day, returning the overwritten status if any.
    pub fn mark(&mut self, date: NaiveDate, status: AttendanceStatus) -> Option<AttendanceStatus> {
        self.days.insert(date, status)
    }

    /// Removes a day's status, returning it if one was set.
    pub fn clear(&mut self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.days.remove(&date)
    }

    pub fn status_on(&self, date: NaiveDate) -> Option<AttendanceStatus> {
        self.days.get(&date).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, AttendanceStatus)> + '_ {
        self.days.iter().map(|(d, s)| (*d, *s))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// The attendance-year a date belongs to, named by the calendar year it
/// starts in. The year runs July 1 through June 30: July-December dates keep
/// their calendar year, January-June dates belong to the previous one.
pub fn attendance_year(date: NaiveDate) -> i32 {
    if date.month() >= 7 {
        date.year()
    } else {
        date.year() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_attendance_year_boundaries() {
        // July 1 starts the new year; June 30 closes the old one
        assert_eq!(attendance_year(d(2025, 7, 1)), 2025);
        assert_eq!(attendance_year(d(2025, 6, 30)), 2024);
        assert_eq!(attendance_year(d(2025, 12, 31)), 2025);
        assert_eq!(attendance_year(d(2026, 1, 1)), 2025);
        assert_eq!(attendance_year(d(2026, 6, 30)), 2025);
    }

    #[test]
    fn test_mark_overwrites() {
        let mut sheet = AttendanceSheet::new();
        let day = d(2025, 7, 4);

        assert_eq!(sheet.mark(day, AttendanceStatus::Present), None);
        assert_eq!(
            sheet.mark(day, AttendanceStatus::CasualLeave),
            Some(AttendanceStatus::Present)
        );
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.status_on(day), Some(AttendanceStatus::CasualLeave));
    }

    #[test]
    fn test_clear() {
        let mut sheet = AttendanceSheet::new();
        let day = d(2025, 7, 4);
        sheet.mark(day, AttendanceStatus::WeeklyOff);

        assert_eq!(sheet.clear(day), Some(AttendanceStatus::WeeklyOff));
        assert_eq!(sheet.clear(day), None);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_sheet_serde_shape() {
        let mut sheet = AttendanceSheet::new();
        sheet.mark(d(2025, 7, 4), AttendanceStatus::EarnedOrSickLeave);

        let json = serde_json::to_string(&sheet).unwrap();
        assert_eq!(json, r#"{"2025-07-04":"Earned/Sick Leave"}"#);

        let parsed: AttendanceSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sheet);
    }
}
