use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use yell_engine::{CallerRegistry, CustomClass, LineMode};
use yell_style::{ColorName, Theme};
use yell_types::CallerState;

pub const CONFIG_FILE_NAME: &str = "yell.toml";

/// Pre-registered settings for one caller identity (a source file stem).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleSettings {
    pub on: bool,
    pub lvl: usize,
}

impl Default for ModuleSettings {
    fn default() -> Self {
        Self {
            on: true,
            lvl: CallerState::DEFAULT_LEVEL,
        }
    }
}

/// Facade configuration, usually read from `yell.toml`.
///
/// ```toml
/// width = 100
/// truncate = true
/// custom_class_a = "Point"
/// custom_color_a = "bright_magenta"
///
/// [modules.network]
/// on = false
///
/// [theme]
/// string = "white"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub width: usize,
    pub indent: usize,
    pub wrap: bool,
    pub truncate: bool,
    pub all_quiet: bool,
    pub use_theme: bool,
    pub show_timestamp: bool,

    pub custom_class_a: Option<String>,
    pub custom_color_a: Option<String>,
    pub custom_class_b: Option<String>,
    pub custom_color_b: Option<String>,
    pub custom_class_c: Option<String>,
    pub custom_color_c: Option<String>,

    pub modules: HashMap<String, ModuleSettings>,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 80,
            indent: 3,
            wrap: true,
            truncate: false,
            all_quiet: false,
            use_theme: true,
            show_timestamp: true,
            custom_class_a: None,
            custom_color_a: None,
            custom_class_b: None,
            custom_color_b: None,
            custom_class_c: None,
            custom_color_c: None,
            modules: HashMap::new(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    /// Settings from the first config file found, or defaults.
    pub fn discover() -> Result<Self> {
        match Self::search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => {
                log::debug!("loading settings from {}", path.display());
                Self::load_from(&path)
            }
            None => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok(Self::default())
            }
        }
    }

    /// Candidate config files in priority order:
    /// 1. `./yell.toml`
    /// 2. `<config dir>/yell/config.toml`
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("yell").join("config.toml"));
        }
        paths
    }

    pub fn line_mode(&self) -> LineMode {
        LineMode::from_flags(self.truncate, self.wrap)
    }

    /// Custom class bindings in slot order a, b, c. A slot needs both a
    /// class and a valid color; a bad color drops the slot with a warning.
    pub fn custom_classes(&self) -> Vec<CustomClass> {
        let slots = [
            (&self.custom_class_a, &self.custom_color_a),
            (&self.custom_class_b, &self.custom_color_b),
            (&self.custom_class_c, &self.custom_color_c),
        ];

        slots
            .into_iter()
            .filter_map(|(class, color)| {
                let (class, color) = (class.as_deref()?, color.as_deref()?);
                match ColorName::parse(color) {
                    Some(color) => Some(CustomClass::new(class, color)),
                    None => {
                        log::warn!("ignoring custom class '{}': unknown color '{}'", class, color);
                        None
                    }
                }
            })
            .collect()
    }

    /// A registry pre-seeded with every `[modules.*]` entry.
    pub fn registry(&self) -> CallerRegistry {
        let mut registry = CallerRegistry::new();
        for (identity, module) in &self.modules {
            registry.register(CallerState::with_settings(
                identity.as_str(),
                module.on,
                module.lvl,
            ));
        }
        registry
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::Config("width must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.width, 80);
        assert_eq!(settings.indent, 3);
        assert_eq!(settings.line_mode(), LineMode::Wrap);
        assert!(settings.custom_classes().is_empty());
        assert!(settings.registry().is_empty());
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let settings = Settings::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(settings, Settings::default());
        Ok(())
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
width = 60
truncate = true

[modules.network]
on = false

[modules.worker]
lvl = 4

[theme]
string = "white"
"#,
        )?;

        let settings = Settings::load_from(&path)?;
        assert_eq!(settings.width, 60);
        assert_eq!(settings.indent, 3);
        assert_eq!(settings.line_mode(), LineMode::Truncate);
        assert_eq!(settings.theme.string, ColorName::White);
        assert_eq!(settings.theme.number, Theme::default().number);

        let registry = settings.registry();
        assert!(!registry.is_enabled("network"));
        assert!(registry.is_enabled("worker"));
        assert!(registry.is_enabled("never_seen"));
        assert_eq!(registry.get("worker").map(|c| c.level), Some(4));
        assert_eq!(registry.get("network").map(|c| c.level), Some(1));
        Ok(())
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Settings::from_toml("width = \"wide\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_theme_color_is_rejected() {
        let err = Settings::from_toml("[theme]\nstring = \"plaid\"").unwrap_err();
        assert!(err.to_string().contains("plaid"));
    }

    #[test]
    fn test_custom_classes_keep_slot_order_and_skip_bad_colors() {
        let settings = Settings {
            custom_class_a: Some("Point".to_string()),
            custom_color_a: Some("bright_magenta".to_string()),
            custom_class_b: Some("Vector".to_string()),
            custom_color_b: Some("plaid".to_string()),
            custom_class_c: Some("Matrix".to_string()),
            custom_color_c: Some("green".to_string()),
            ..Settings::default()
        };

        let classes = settings.custom_classes();
        assert_eq!(
            classes,
            vec![
                CustomClass::new("Point", ColorName::BrightMagenta),
                CustomClass::new("Matrix", ColorName::Green),
            ]
        );
    }

    #[test]
    fn test_class_without_color_is_ignored() {
        let settings = Settings {
            custom_class_a: Some("Point".to_string()),
            ..Settings::default()
        };
        assert!(settings.custom_classes().is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let settings = Settings {
            width: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
        assert!(Settings::default().validate().is_ok());
    }
}
