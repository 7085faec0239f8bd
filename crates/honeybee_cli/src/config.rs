//! Honeybee configuration file handling
//!
//! `honeybee.toml` is optional. Every section and key falls back to the same
//! defaults the library components use, so an empty file and no file at all
//! behave identically.

use anyhow::{Context, Result};
use honeybee_gallery::{COPY_FEEDBACK_MS, DEFAULT_API_BASE, GOOGLE_FONTS_CSS};
use honeybee_interact::SCRAMBLE_TICK_MS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "honeybee.toml";

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct HoneybeeConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub fonts: FontsConfig,
}

// =============================================================================
// [site]
// =============================================================================

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Base URL the agent-access endpoints are advertised under
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_name() -> String {
    "honeybee".to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

// =============================================================================
// [motion]
// =============================================================================

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct MotionConfig {
    #[serde(default = "default_scramble_tick_ms")]
    pub scramble_tick_ms: f64,
    /// How long the "Copied" indicator stays up
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: f64,
    /// Fixed seed for reproducible scramble previews
    #[serde(default)]
    pub scramble_seed: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scramble_tick_ms: default_scramble_tick_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
            scramble_seed: None,
        }
    }
}

fn default_scramble_tick_ms() -> f64 {
    SCRAMBLE_TICK_MS
}

fn default_copy_feedback_ms() -> f64 {
    COPY_FEEDBACK_MS
}

// =============================================================================
// [fonts]
// =============================================================================

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct FontsConfig {
    #[serde(default = "default_stylesheet_base")]
    pub stylesheet_base: String,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            stylesheet_base: default_stylesheet_base(),
        }
    }
}

fn default_stylesheet_base() -> String {
    GOOGLE_FONTS_CSS.to_string()
}

impl HoneybeeConfig {
    /// Load `path`, or `honeybee.toml` from `dir` when no path is given
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        let config_path = match path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} not found", path.display());
                }
                path.to_path_buf()
            }
            None => {
                let path = dir.join(CONFIG_FILE);
                if !path.exists() {
                    tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        tracing::debug!("loaded {}", config_path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: HoneybeeConfig = toml::from_str(content)?;
        let tick = config.motion.scramble_tick_ms;
        if tick.is_nan() || tick <= 0.0 {
            anyhow::bail!(
                "motion.scramble_tick_ms must be positive, got {}",
                config.motion.scramble_tick_ms
            );
        }
        if config.motion.copy_feedback_ms < 0.0 {
            anyhow::bail!(
                "motion.copy_feedback_ms must not be negative, got {}",
                config.motion.copy_feedback_ms
            );
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("honeybee-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = HoneybeeConfig::parse("").unwrap();
        assert_eq!(config, HoneybeeConfig::default());
        assert_eq!(config.site.name, "honeybee");
        assert_eq!(config.site.api_base_url, "https://ui-hub.dev");
        assert_eq!(config.motion.scramble_tick_ms, 30.0);
        assert_eq!(config.motion.copy_feedback_ms, 2000.0);
        assert_eq!(config.motion.scramble_seed, None);
        assert_eq!(
            config.fonts.stylesheet_base,
            "https://fonts.googleapis.com/css2"
        );
    }

    #[test]
    fn test_partial_sections() {
        let config = HoneybeeConfig::parse(
            r#"
[site]
api_base_url = "http://localhost:4000"

[motion]
scramble_seed = 42
"#,
        )
        .unwrap();
        assert_eq!(config.site.name, "honeybee");
        assert_eq!(config.site.api_base_url, "http://localhost:4000");
        assert_eq!(config.motion.scramble_seed, Some(42));
        assert_eq!(config.motion.scramble_tick_ms, 30.0);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(HoneybeeConfig::parse("[motion]\nscramble_tick_ms = 0").is_err());
        assert!(HoneybeeConfig::parse("[motion]\ncopy_feedback_ms = -1").is_err());
        assert!(HoneybeeConfig::parse("[site\nname = 1").is_err());
    }

    #[test]
    fn test_missing_implicit_file_is_default() {
        let dir = scratch_dir("missing");
        let config = HoneybeeConfig::load(None, &dir).unwrap();
        assert_eq!(config, HoneybeeConfig::default());

        let err = HoneybeeConfig::load(Some(&dir.join("nope.toml")), &dir).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reports_the_path_on_parse_errors() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join(CONFIG_FILE), "[motion]\nscramble_tick_ms = \"fast\"").unwrap();

        let err = HoneybeeConfig::load(None, &dir).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE));

        fs::write(dir.join(CONFIG_FILE), "[site]\nname = \"hive\"").unwrap();
        let config = HoneybeeConfig::load(None, &dir).unwrap();
        assert_eq!(config.site.name, "hive");
    }

    #[test]
    fn test_serialized_defaults_parse_back() {
        let text = HoneybeeConfig::default().to_toml().unwrap();
        assert!(text.contains("[motion]"));
        assert_eq!(
            HoneybeeConfig::parse(&text).unwrap(),
            HoneybeeConfig::default()
        );
    }
}
