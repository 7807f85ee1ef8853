use crate::model::habit::Habit;
use crate::repository::{AttendanceRepository, GoalRepository, HabitRepository};
use crate::service::dto::{AttendanceSummary, GoalDto};
use crate::service::goal_service::compute_progress;
use anyhow::Result;
use chrono::NaiveDate;

/// Everything the home screen shows: goals with progress, the attendance
/// summary, and the habit streaks.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub goals: Vec<GoalDto>,
    pub attendance: AttendanceSummary,
    pub habits: Vec<Habit>,
}

pub struct DashboardUseCase<'a, G, A, H>
where
    G: GoalRepository,
    A: AttendanceRepository,
    H: HabitRepository,
{
    goal_repo: &'a G,
    attendance_repo: &'a A,
    habit_repo: &'a H,
}

impl<'a, G, A, H> DashboardUseCase<'a, G, A, H>
where
    G: GoalRepository,
    A: AttendanceRepository,
    H: HabitRepository,
{
    pub fn new(goal_repo: &'a G, attendance_repo: &'a A, habit_repo: &'a H) -> Self {
        Self {
            goal_repo,
            attendance_repo,
            habit_repo,
        }
    }

    /// Read-only composition over the three stores, evaluated at `today`.
    pub fn load(&self, today: NaiveDate) -> Result<DashboardView> {
        let mut goals = self.goal_repo.list()?;
        goals.sort_by_key(|g| g.end);
        let goals = goals
            .into_iter()
            .map(|g| {
                let progress = compute_progress(g.start, g.end, today);
                GoalDto::from_entity(g, progress)
            })
            .collect();

        let sheet = self.attendance_repo.load()?;
        let attendance = AttendanceSummary::from_sheet(&sheet);

        let habits = self.habit_repo.list()?;

        Ok(DashboardView {
            goals,
            attendance,
            habits,
        })
    }
}
