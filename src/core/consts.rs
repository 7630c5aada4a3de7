use std::time::Duration;

pub const DEFAULT_LEVEL_NAME: &str = "Unnamed Level";
pub const UNKNOWN_LEVEL_NAME: &str = "Unknown";
pub const DEFAULT_LOG_FILE: &str = "sokoban.log";
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);
