//! Key-value persistence boundary

use crate::error::{MoodlogError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Durable string storage addressed by key
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: PathBuf) -> Self {
        FileStorage { dir }
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MoodlogError::StorageUnavailable(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(MoodlogError::StorageUnavailable(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Best-effort atomic replace: write a temp file in the same directory,
    /// then rename it over the destination. The previous value stays in
    /// place until the rename succeeds.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let unavailable = |e: std::io::Error| {
            MoodlogError::StorageUnavailable(format!("Failed to write {}: {}", path.display(), e))
        };

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(unavailable)?;
        }

        let tmp_path = self
            .dir
            .join(format!("{}.json.moodlog-tmp-{}", key, std::process::id()));

        fs::write(&tmp_path, value).map_err(unavailable)?;

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(unavailable(e));
        }

        Ok(())
    }
}

/// In-memory storage for tests and ephemeral use
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    #[cfg(test)]
    fail_reads: bool,
    #[cfg(test)]
    fail_writes: bool,
    #[cfg(test)]
    reads: std::cell::Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Raw stored value
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl MemoryStorage {
    /// Make every `get` fail with `StorageUnavailable`
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every `set` fail with `StorageUnavailable`
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of `get` calls served so far
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        #[cfg(test)]
        {
            self.reads.set(self.reads.get() + 1);
            if self.fail_reads {
                return Err(MoodlogError::StorageUnavailable(format!(
                    "read of '{}' refused",
                    key
                )));
            }
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        #[cfg(test)]
        if self.fail_writes {
            return Err(MoodlogError::StorageUnavailable(format!(
                "write of '{}' refused",
                key
            )));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
