use super::DataStore;
use crate::codec;
use crate::error::Result;
use crate::model::Todo;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = ".todos.dat";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self, capacity: usize) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = BufReader::new(File::open(&self.path)?);
        codec::decode(&mut reader, capacity)
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_parent()?;
        let mut writer = BufWriter::new(File::create(&self.path)?);
        codec::encode(&mut writer, todos)?;
        writer.flush()?;
        Ok(())
    }
}
