pub mod attendance;
pub mod file;
pub mod habit;
pub mod traits;

// Re-export
pub use attendance::{AttendanceRepository, FileAttendanceRepository};
pub use file::FileGoalRepository;
pub use habit::{FileHabitRepository, HabitRepository};
pub use traits::GoalRepository;
