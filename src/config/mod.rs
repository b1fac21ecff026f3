pub mod organizer_config;
pub mod user_settings;

pub use organizer_config::{ArrangementConfig, MoverConfig, OrganizerConfig};
pub use user_settings::{default_data_dir, UserSettings};
