use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_MINIMUM_HEIGHT, DEFAULT_PIXELS_PER_MINUTE, DEFAULT_WEEK_STARTS_ON,
    WEEKDAY_CODES,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    pub pixels_per_minute: f64,
    pub minimum_height: f64,
    pub week_starts_on: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pixels_per_minute: DEFAULT_PIXELS_PER_MINUTE,
            minimum_height: DEFAULT_MINIMUM_HEIGHT,
            week_starts_on: DEFAULT_WEEK_STARTS_ON.to_string(),
        }
    }
}

impl LayoutConfig {
    /// ## Summary
    /// Checks that the layout values can produce a drawable grid.
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` for a non-positive scale, a negative
    /// minimum height, or an unknown weekday code.
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.pixels_per_minute.is_finite() && self.pixels_per_minute > 0.0) {
            return Err(CoreError::ValidationError(format!(
                "layout.pixels_per_minute must be positive, got {}",
                self.pixels_per_minute
            )));
        }
        if !(self.minimum_height.is_finite() && self.minimum_height >= 0.0) {
            return Err(CoreError::ValidationError(format!(
                "layout.minimum_height must not be negative, got {}",
                self.minimum_height
            )));
        }
        self.week_start_index()?;
        Ok(())
    }

    /// ## Summary
    /// Returns the position of `week_starts_on` in [`WEEKDAY_CODES`] (Sunday = 0).
    ///
    /// ## Errors
    /// Returns `CoreError::ValidationError` if the code is not a two-letter weekday.
    pub fn week_start_index(&self) -> CoreResult<usize> {
        let code = self.week_starts_on.trim().to_ascii_uppercase();
        WEEKDAY_CODES
            .iter()
            .position(|candidate| *candidate == code)
            .ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "layout.week_starts_on must be one of {WEEKDAY_CODES:?}, got {:?}",
                    self.week_starts_on
                ))
            })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("layout.pixels_per_minute", DEFAULT_PIXELS_PER_MINUTE)?
            .set_default("layout.minimum_height", DEFAULT_MINIMUM_HEIGHT)?
            .set_default("layout.week_starts_on", DEFAULT_WEEK_STARTS_ON)?
            .set_default("logging.level", DEFAULT_LOG_LEVEL)?)
    }

    /// ## Summary
    /// Loads configuration from `weekgrid.toml` and `WEEKGRID_*` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing or validating the configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name("weekgrid.toml").required(false))
            // Env, e.g. WEEKGRID_LAYOUT__PIXELS_PER_MINUTE
            .add_source(
                config::Environment::with_prefix("WEEKGRID")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.layout.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        let settings = Self::defaults()?
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.layout.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and `weekgrid.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        week_starts_on = %settings.layout.week_starts_on,
        pixels_per_minute = settings.layout.pixels_per_minute,
        "Settings loaded"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_defaults_apply_to_empty_file() {
        let settings = Settings::from_toml("").expect("empty config should load");

        assert!((settings.layout.pixels_per_minute - DEFAULT_PIXELS_PER_MINUTE).abs() < f64::EPSILON);
        assert!((settings.layout.minimum_height - DEFAULT_MINIMUM_HEIGHT).abs() < f64::EPSILON);
        assert_eq!(settings.layout.week_starts_on, "MO");
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_file_values_override_defaults() {
        let settings = Settings::from_toml(
            r#"
            [layout]
            pixels_per_minute = 0.8
            week_starts_on = "su"

            [logging]
            level = "trace"
            "#,
        )
        .expect("config should load");

        assert!((settings.layout.pixels_per_minute - 0.8).abs() < f64::EPSILON);
        assert_eq!(settings.layout.week_start_index().expect("valid code"), 0);
        assert_eq!(settings.logging.level, "trace");
    }

    #[test]
    fn test_unknown_week_start_is_rejected() {
        let result = Settings::from_toml("[layout]\nweek_starts_on = \"XX\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_scale_is_rejected() {
        let layout = LayoutConfig {
            pixels_per_minute: 0.0,
            ..LayoutConfig::default()
        };
        assert!(matches!(layout.validate(), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn test_negative_minimum_height_is_rejected() {
        let layout = LayoutConfig {
            minimum_height: -1.0,
            ..LayoutConfig::default()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_week_start_index_positions() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.week_start_index().expect("default is valid"), 1);

        let saturday = LayoutConfig {
            week_starts_on: " sa ".to_string(),
            ..LayoutConfig::default()
        };
        assert_eq!(saturday.week_start_index().expect("valid code"), 6);
    }
}
