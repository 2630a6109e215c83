mod announcement_config;
mod config;
mod log_config;

pub use announcement_config::AnnouncementConfig;
pub use config::{Config, get_config_manager};
pub use log_config::LogConfig;
