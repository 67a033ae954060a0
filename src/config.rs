//! Configuration file handling.
//!
//! Reads from `~/.config/onda-animal/onda-animal.toml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::Role;
use crate::router::View;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Who is using the client; controls staff-only menu entries.
    #[serde(default)]
    pub role: Role,
    /// Screen shown at startup, by view id.
    #[serde(default = "default_start_view")]
    pub start_view: String,
    /// WhatsApp number of the adoption team, digits only with country code.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,
    /// Text pre-filled in the WhatsApp conversation.
    #[serde(default = "default_whatsapp_message")]
    pub whatsapp_message: String,
    /// PIX "copia e cola" code shown in the payment modal.
    #[serde(default = "default_pix_code")]
    pub pix_code: String,
    /// Number shown on the chat badge of the bottom bar.
    #[serde(default = "default_unread_messages")]
    pub unread_messages: u32,
    /// Window width (points) under which the bottom navigation bar is shown.
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: f32,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_start_view() -> String {
    View::Home.id().to_owned()
}

fn default_whatsapp_number() -> String {
    "5551999119352".to_owned()
}

fn default_whatsapp_message() -> String {
    "Olá! Vim através do app ONDA ANIMAL e gostaria de conversar sobre adoção.".to_owned()
}

fn default_pix_code() -> String {
    "00020126580014BR.GOV.BCB.PIX013636843698-4444-4444-8888-12345678901052040000530398654071000.005802BR5917ONDA ANIMAL6009Xangri-la62090505123456304B2CA".to_owned()
}

fn default_unread_messages() -> u32 {
    3
}

fn default_compact_breakpoint() -> f32 {
    1024.0
}

fn default_window_width() -> f32 {
    420.0
}

fn default_window_height() -> f32 {
    860.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role: Role::default(),
            start_view: default_start_view(),
            whatsapp_number: default_whatsapp_number(),
            whatsapp_message: default_whatsapp_message(),
            pix_code: default_pix_code(),
            unread_messages: default_unread_messages(),
            compact_breakpoint: default_compact_breakpoint(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Config {
    /// Load configuration from the config file.
    ///
    /// If `custom_path` is provided, load from that path.
    /// Otherwise, load from the default XDG config location.
    /// Creates a default config file if it doesn't exist (only for default path).
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self> {
        let is_custom = custom_path.is_some();
        let config_path = match custom_path {
            Some(path) => path,
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            if !is_custom {
                let config = Config::default();
                config.save()?;
                tracing::info!("Created default config at {}", config_path.display());
                return Ok(config);
            } else {
                anyhow::bail!("Config file not found: {}", config_path.display());
            }
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        tracing::info!("Loaded config from {}: {:?}", config_path.display(), config);
        Ok(config)
    }

    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))
    }

    /// Startup screen; unknown ids fall back to home.
    pub fn start_view(&self) -> View {
        match View::from_id(&self.start_view) {
            View::AnimalDetail => View::Home,
            view => view,
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("onda-animal").join("onda-animal.toml"))
    }
}
