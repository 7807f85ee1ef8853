use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde_json;
use uuid::Uuid;

use crate::model::goal::Goal;
use crate::repository::traits::GoalRepository;

const GOALS_FILE_NAME: &str = "goals.json";

#[derive(Clone)]
pub struct FileGoalRepository {
    file_path: PathBuf,
}

impl FileGoalRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".chronozen")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(GOALS_FILE_NAME);

        // Initialize with an empty list on first use
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Goal>::new())?;
            writer.flush()?;
        }

        Ok(FileGoalRepository { file_path: path })
    }

    fn read_goals(&self) -> Result<Vec<Goal>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let goals = serde_json::from_reader(reader)?;
        Ok(goals)
    }

    fn write_goals(&self, goals: &[Goal]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, goals)?;
        writer.flush()?;
        Ok(())
    }
}

impl GoalRepository for FileGoalRepository {
    fn create(&self, goal: Goal) -> Result<Goal> {
        let mut goals = self.read_goals()?;
        goals.push(goal.clone());
        self.write_goals(&goals)?;
        Ok(goal)
    }

    fn list(&self) -> Result<Vec<Goal>> {
        self.read_goals()
    }

    fn get(&self, id: &Uuid) -> Result<Goal> {
        let goals = self.read_goals()?;
        goals
            .into_iter()
            .find(|g| g.id == *id)
            .ok_or_else(|| anyhow!("Goal with ID {} not found", id))
    }

    fn update(&self, goal: &Goal) -> Result<()> {
        let mut goals = self.read_goals()?;
        if let Some(pos) = goals.iter().position(|g| g.id == goal.id) {
            goals[pos] = goal.clone();
            self.write_goals(&goals)?;
            Ok(())
        } else {
            Err(anyhow!("Goal with ID {} not found", goal.id))
        }
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let mut goals = self.read_goals()?;
        let initial_len = goals.len();
        goals.retain(|g| g.id != *id);

        if goals.len() == initial_len {
            return Err(anyhow!("Goal with ID {} not found", id));
        }

        self.write_goals(&goals)?;
        Ok(())
    }
}
