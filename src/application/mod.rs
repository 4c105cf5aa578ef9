//! Application layer - Use cases and orchestration

pub mod clock;
pub mod dashboard;
pub mod history;
pub mod init;
pub mod log_mood;
pub mod manage_config;
pub mod stats;

pub use clock::today;
pub use dashboard::{Dashboard, DashboardService};
pub use history::list_history;
pub use log_mood::LogMoodService;
pub use manage_config::ConfigService;
pub use stats::mood_stats;
