//! File system repository

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileStorage, MoodStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for mood journal operations
pub trait MoodlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of MoodlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let repo = FileSystemRepository::new(PathBuf::from(root_path));
            if repo.is_initialized() {
                return Ok(repo);
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    repo.root.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut candidate = FileSystemRepository::new(start.to_path_buf());

        loop {
            if candidate.is_initialized() {
                return Ok(candidate);
            }

            match candidate.root.parent() {
                Some(parent) => candidate = FileSystemRepository::new(parent.to_path_buf()),
                None => {
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Directory holding persisted store values
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".moodlog").join("data")
    }

    /// Open the mood store configured for this journal
    pub fn open_store(&self, config: &Config) -> MoodStore<FileStorage> {
        MoodStore::new(FileStorage::new(self.data_dir()), config.storage_key.clone())
    }
}

impl MoodlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        self.root.join(".moodlog").is_dir()
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        fs::create_dir(self.data_dir())?;
        Ok(())
    }
}
