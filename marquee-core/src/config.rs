use serde::{Deserialize, Serialize};
use std::sync::{OnceLock, RwLock};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config directory not found")]
    NoConfigDir,
}

/// Process-wide venue settings.
///
/// Usable as a plain value (construct with `default()` and pass it around),
/// or through the shared process instance returned by [`VenueConfig::instance`].
#[derive(Debug, Default)]
pub struct VenueConfig {
    name: String,
    screen_count: i32,
}

static VENUE: OnceLock<RwLock<VenueConfig>> = OnceLock::new();

impl VenueConfig {
    /// The shared process-wide settings instance.
    ///
    /// Created with default (empty) fields on first access and never torn
    /// down. Initialization is at-most-once even if the first calls race;
    /// ordering of mutations across threads is up to the caller through the
    /// returned lock.
    pub fn instance() -> &'static RwLock<VenueConfig> {
        VENUE.get_or_init(|| RwLock::new(VenueConfig::default()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn screen_count(&self) -> i32 {
        self.screen_count
    }

    /// No validation; zero and negative counts are stored verbatim.
    pub fn set_screen_count(&mut self, screen_count: i32) {
        self.screen_count = screen_count;
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub venue: VenueSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct VenueSection {
    pub name: String,
    pub screens: i32,
}

impl Default for VenueSection {
    fn default() -> Self {
        Self {
            name: "Marquee".to_string(),
            screens: 1,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSection {
    /// Registry key of the widget theme to use.
    pub theme: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl ConfigFile {
    pub fn load() -> Result<Self, ConfigError> {
        // Priority: ./marquee.toml -> ~/.config/marquee/marquee.toml -> default
        let paths = [
            std::env::current_dir()?.join("marquee.toml"),
            dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("marquee/marquee.toml"),
        ];

        for path in paths {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                return toml::from_str(&content).map_err(ConfigError::Parse);
            }
        }

        Ok(Self::default())
    }

    /// Copy the venue section into `venue`.
    pub fn apply_to(&self, venue: &mut VenueConfig) {
        venue.set_name(self.venue.name.clone());
        venue.set_screen_count(self.venue.screens);
    }

    /// Copy the venue section into the process-wide settings instance.
    pub fn apply(&self) {
        let mut venue = VenueConfig::instance().write().unwrap();
        self.apply_to(&mut venue);
    }
}
