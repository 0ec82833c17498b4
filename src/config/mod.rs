//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, ResolvedConfig,
};

use crate::view_state::{MountOptions, NavBar};
use std::time::Duration;

impl ResolvedConfig {
    /// Mount-time options derived from this configuration.
    pub fn mount_options(&self) -> MountOptions {
        MountOptions {
            reveal_delay: Duration::from_millis(self.typewriter_delay_ms),
            reveal_interval: Duration::from_millis(self.typewriter_interval_ms),
            reveal_threshold: self.reveal_threshold,
            nav_bar: NavBar::new(self.nav_bar_height, self.narrow_width),
        }
    }
}
