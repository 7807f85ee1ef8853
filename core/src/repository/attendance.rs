use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde_json;

use crate::model::attendance::AttendanceSheet;

const ATTENDANCE_FILE_NAME: &str = "attendance.json";

/// The sheet is a single snapshot: callers load it whole, compute over it,
/// and save it back. Computation never goes through this trait.
pub trait AttendanceRepository {
    fn load(&self) -> Result<AttendanceSheet>;
    fn save(&self, sheet: &AttendanceSheet) -> Result<()>;
}

#[derive(Clone)]
pub struct FileAttendanceRepository {
    file_path: PathBuf,
}

impl FileAttendanceRepository {
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
        path.push(ATTENDANCE_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &AttendanceSheet::new())?;
            writer.flush()?;
        }

        Ok(FileAttendanceRepository { file_path: path })
    }
}

impl AttendanceRepository for FileAttendanceRepository {
    fn load(&self) -> Result<AttendanceSheet> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let sheet = serde_json::from_reader(reader)?;
        Ok(sheet)
    }

    fn save(&self, sheet: &AttendanceSheet) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, sheet)?;
        writer.flush()?;
        Ok(())
    }
}
