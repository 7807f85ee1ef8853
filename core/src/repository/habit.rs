use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde_json;
use uuid::Uuid;

use crate::model::habit::Habit;

const HABITS_FILE_NAME: &str = "habits.json";

pub trait HabitRepository {
    fn create(&self, habit: Habit) -> Result<Habit>;
    fn list(&self) -> Result<Vec<Habit>>;
    fn get(&self, id: &Uuid) -> Result<Habit>;
    fn update(&self, habit: &Habit) -> Result<()>;
    fn delete(&self, id: &Uuid) -> Result<()>;
}

#[derive(Clone)]
pub struct FileHabitRepository {
    file_path: PathBuf,
}

impl FileHabitRepository {
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
        path.push(HABITS_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Habit>::new())?;
            writer.flush()?;
        }

        Ok(FileHabitRepository { file_path: path })
    }

    fn read_habits(&self) -> Result<Vec<Habit>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let habits = serde_json::from_reader(reader)?;
        Ok(habits)
    }

    fn write_habits(&self, habits: &[Habit]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, habits)?;
        writer.flush()?;
        Ok(())
    }
}

impl HabitRepository for FileHabitRepository {
    fn create(&self, habit: Habit) -> Result<Habit> {
        let mut habits = self.read_habits()?;
        habits.push(habit.clone());
        self.write_habits(&habits)?;
        Ok(habit)
    }

    fn list(&self) -> Result<Vec<Habit>> {
        self.read_habits()
    }

    fn get(&self, id: &Uuid) -> Result<Habit> {
        let habits = self.read_habits()?;
        habits
            .into_iter()
            .find(|h| h.id == *id)
            .ok_or_else(|| anyhow!("Habit with ID {} not found", id))
    }

    fn update(&self, habit: &Habit) -> Result<()> {
        let mut habits = self.read_habits()?;
        if let Some(pos) = habits.iter().position(|h| h.id == habit.id) {
            habits[pos] = habit.clone();
            self.write_habits(&habits)?;
            Ok(())
        } else {
            Err(anyhow!("Habit with ID {} not found", habit.id))
        }
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let mut habits = self.read_habits()?;
        let initial_len = habits.len();
        habits.retain(|h| h.id != *id);

        if habits.len() == initial_len {
            return Err(anyhow!("Habit with ID {} not found", id));
        }

        self.write_habits(&habits)?;
        Ok(())
    }
}
