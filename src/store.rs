//! File-backed persistence for the display mode.
//!
//! The file holds the raw mode as a decimal integer followed by a newline.
//! Writes go to a sibling `.tmp` file that is synced and then renamed over
//! the target, so a crash mid-write leaves the previous mode in place.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use insquare_common::ModeStore;
use log::debug;

/// Mode store backed by a small text file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }

    fn temp_path(&self) -> PathBuf { self.path.with_extension("tmp") }
}

impl ModeStore for FileStore {
    type Error = io::Error;

    fn read_mode(&mut self) -> Result<Option<i32>, Self::Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        contents
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn write_mode(
        &mut self,
        mode: i32,
    ) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.temp_path();
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;
            writeln!(file, "{mode}")?;
            file.sync_all()?;
        }
        fs::rename(&temp_path, &self.path)?;

        debug!("saved display mode {mode} to {}", self.path.display());
        Ok(())
    }
}
