//! Site configuration.
//!
//! The landing page embeds `site.toml` at build time and parses it once at
//! start. Every field has a default, so an empty file is a valid config.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timing: TimingConfig,
    pub reveal: RevealConfig,
    pub avatars: AvatarConfig,
}

/// Delays of the simulated submission and the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fake network latency of a waitlist submission
    pub submit_delay_ms: u64,
    /// How long the success message stays up
    pub success_display_ms: u64,
    /// Time each mockup screen is shown
    pub carousel_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            success_display_ms: 3000,
            carousel_interval_ms: 5000,
        }
    }
}

impl TimingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_display(&self) -> Duration {
        Duration::from_millis(self.success_display_ms)
    }

    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }
}

/// Scroll-reveal settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible fraction of the features section that starts the animation
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: crate::reveal::DEFAULT_THRESHOLD,
        }
    }
}

/// Avatar image service for testimonials
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub base_url: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.dicebear.com/9.x/avataaars/svg".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site config `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `content`, falling back to defaults (with a warning) when it is unusable.
    pub fn load_or_default(content: &str) -> Self {
        match Self::from_toml_str(content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[megift][config] {e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let timings = [
            ("timing.submit_delay_ms", self.timing.submit_delay_ms),
            ("timing.success_display_ms", self.timing.success_display_ms),
            ("timing.carousel_interval_ms", self.timing.carousel_interval_ms),
        ];
        for (field, value) in timings {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".into(),
                });
            }
        }

        let threshold = self.reveal.threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "reveal.threshold",
                reason: format!("{threshold} is outside (0, 1]"),
            });
        }

        if self.avatars.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "avatars.base_url",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
