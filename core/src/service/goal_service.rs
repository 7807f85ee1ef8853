use crate::model::goal::{Goal, GoalProgress};
use crate::repository::GoalRepository;
use crate::service::dto::GoalDto;
use crate::time;
use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;

/// Evaluates a goal's date range against a reference day.
///
/// Both ends of the range are inclusive, so a single-day goal has a total of
/// one day. An inverted range (`end < start`) is a defined edge case and
/// yields the all-zero result. Elapsed days clamp to `[0, total]`: a goal
/// that has not started reads 0, a finished goal reads its total. Every
/// input combination yields a defined numeric result.
pub fn compute_progress(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> GoalProgress {
    if end < start {
        return GoalProgress::default();
    }

    let total_days = (end - start).num_days() + 1;
    let elapsed_raw = (today - start).num_days() + 1;
    let elapsed_days = elapsed_raw.clamp(0, total_days);

    let percent = if total_days > 0 {
        (elapsed_days as f64 / total_days as f64) * 100.0
    } else {
        0.0
    };

    GoalProgress {
        elapsed_days,
        total_days,
        percent,
    }
}

pub struct GoalService<R: GoalRepository> {
    repo: R,
}

impl<R: GoalRepository> GoalService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_goal(&self, title: String, start: NaiveDate, end: NaiveDate) -> Result<GoalDto> {
        let created = self.repo.create(Goal::new(title, start, end))?;
        let progress = compute_progress(created.start, created.end, time::today());
        Ok(GoalDto::from_entity(created, progress))
    }

    /// All goals with progress evaluated at `today`, nearest deadline first.
    pub fn list_goals(&self, today: NaiveDate) -> Result<Vec<GoalDto>> {
        let mut goals = self.repo.list()?;
        goals.sort_by_key(|g| g.end);

        let dtos = goals
            .into_iter()
            .map(|g| {
                let progress = compute_progress(g.start, g.end, today);
                GoalDto::from_entity(g, progress)
            })
            .collect();

        Ok(dtos)
    }

    pub fn get_goal(&self, id: &Uuid) -> Result<Goal> {
        self.repo.get(id)
    }

    pub fn update_goal(&self, goal: &Goal) -> Result<()> {
        self.repo.update(goal)
    }

    pub fn delete_goal(&self, id: &Uuid) -> Result<()> {
        self.repo.delete(id)
    }
}
