use crate::model::goal::Goal;
use anyhow::Result;
use uuid::Uuid;

pub trait GoalRepository {
    fn create(&self, goal: Goal) -> Result<Goal>;
    fn list(&self) -> Result<Vec<Goal>>;
    fn get(&self, id: &Uuid) -> Result<Goal>;
    fn update(&self, goal: &Goal) -> Result<()>;
    fn delete(&self, id: &Uuid) -> Result<()>;
}
