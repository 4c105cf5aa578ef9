//! Infrastructure layer - Persistence and configuration

pub mod config;
pub mod repository;
pub mod storage;
pub mod store;

pub use config::Config;
pub use repository::{FileSystemRepository, MoodlogRepository};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{MoodStore, DEFAULT_STORAGE_KEY};
