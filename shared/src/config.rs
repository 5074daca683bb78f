use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Everything the upload form needs to know about its endpoint and looks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub title: String,
    pub endpoint: String,
    pub field_name: String,
    pub timeout_ms: u32,
    pub accept: String,
    pub positive_label: String,
    pub palette: Palette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub alarm: BannerStyle,
    pub clear: BannerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerStyle {
    pub background: String,
    pub foreground: String,
    pub icon: String,
}

impl BannerStyle {
    pub fn inline_css(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background, self.foreground
        )
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: "🩺 Breast Cancer Detection".to_string(),
            endpoint: "/predict".to_string(),
            field_name: "image".to_string(),
            timeout_ms: 30_000,
            accept: "image/*".to_string(),
            positive_label: "Cancerous".to_string(),
            palette: Palette::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alarm: BannerStyle {
                background: "#ffe5e5".to_string(),
                foreground: "#c0392b".to_string(),
                icon: "⚠".to_string(),
            },
            clear: BannerStyle {
                background: "#e5ffe9".to_string(),
                foreground: "#27ae60".to_string(),
                icon: "✅".to_string(),
            },
        }
    }
}

impl FormConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.field_name.trim().is_empty() {
            return Err(ConfigError::Invalid("field_name must not be empty".into()));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("timeout_ms must be positive".into()));
        }
        Ok(())
    }

    /// Exact match on the positive label; every other label is "clear".
    pub fn banner_style(&self, label: &str) -> &BannerStyle {
        if label == self.positive_label {
            &self.palette.alarm
        } else {
            &self.palette.clear
        }
    }
}
