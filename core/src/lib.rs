pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;
pub mod usecase;

pub use model::attendance::{attendance_year, AttendanceSheet, AttendanceStatus};
pub use model::goal::{Goal, GoalProgress};
pub use model::habit::Habit;
pub use repository::{
    AttendanceRepository, FileAttendanceRepository, FileGoalRepository, FileHabitRepository,
    GoalRepository, HabitRepository,
};
pub use input::{expand_key, parse_args, ParsedInput};
pub use time::{format_date_key, parse_date_key};
pub use service::attendance_service::{
    compute_counts, compute_goal_progress, AttendanceService, ATTENDANCE_GOAL_DAYS,
    LEAVE_CAP_PER_YEAR,
};
pub use service::dto::{AttendanceSummary, GoalDto, StatusCount};
pub use service::goal_service::{compute_progress, GoalService};
pub use service::habit_service::HabitService;
