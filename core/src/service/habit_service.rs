use crate::model::habit::Habit;
use crate::repository::HabitRepository;
use anyhow::Result;
use uuid::Uuid;

pub struct HabitService<R: HabitRepository> {
    repo: R,
}

impl<R: HabitRepository> HabitService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add_habit(&self, title: String, icon: Option<String>) -> Result<Habit> {
        self.repo.create(Habit::new(title, icon))
    }

    pub fn list_habits(&self) -> Result<Vec<Habit>> {
        self.repo.list()
    }

    /// Flips a habit's completion and persists the streak change.
    pub fn toggle(&self, id: &Uuid) -> Result<Habit> {
        let mut habit = self.repo.get(id)?;
        habit.toggle();
        self.repo.update(&habit)?;
        Ok(habit)
    }

    pub fn delete_habit(&self, id: &Uuid) -> Result<()> {
        self.repo.delete(id)
    }
}
