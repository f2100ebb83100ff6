//! Preset options: the color theme and corner radius.
//!
//! Options are usually the built-in hyrd theme, but can be loaded from YAML
//! so an application can ship its own palette:
//!
//! ```yaml
//! radius: 0.75
//! color:
//!   name: ocean
//!   light:
//!     background: 0 0% 100%
//!     primary: 200 90% 40%
//!   dark:
//!     background: 220 20% 10%
//!     primary: 200 90% 55%
//! ```
//!
//! Loading validates the values of recognized roles. Unrecognized roles are
//! accepted and ignored when CSS is generated.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::constants::DEFAULT_RADIUS;
use crate::error::{PresetError, Result};
use crate::theme_vars::{is_theme_role, ColorTheme, ThemeCssVars};

static HSL_TRIPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(?:\.\d+)? -?\d+(?:\.\d+)?% -?\d+(?:\.\d+)?%$")
        .expect("hsl triple pattern is valid")
});

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

/// Options for building a preset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresetOptions {
    /// Light/dark color variables. Defaults to the hyrd theme.
    #[serde(default = "ColorTheme::hyrd")]
    pub color: ColorTheme,
    /// Corner radius in rem.
    #[serde(default = "default_radius")]
    pub radius: f64,
}

impl PresetOptions {
    /// Options for `color` with the default radius.
    pub fn new(color: ColorTheme) -> Self {
        Self {
            color,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Sets the radius, returning `self` for chaining.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Parses and validates options from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Parse`] for malformed YAML and the errors of
    /// [`validate`](Self::validate) for bad values.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let options: PresetOptions =
            serde_yaml::from_str(yaml).map_err(|e| PresetError::Parse {
                path: None,
                message: e.to_string(),
            })?;
        options.validate()?;
        Ok(options)
    }

    /// Reads, parses and validates options from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::Load`] if the file cannot be read, otherwise
    /// the same errors as [`from_yaml`](Self::from_yaml) with the path attached.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PresetError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let options = Self::from_yaml(&content).map_err(|e| match e {
            PresetError::Parse { message, .. } => PresetError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })?;
        debug!(path = %path.display(), theme = %options.color.name, "loaded preset options");
        Ok(options)
    }

    /// Checks the radius and every recognized role value.
    ///
    /// # Errors
    ///
    /// - [`PresetError::InvalidRadius`] for a negative or non-finite radius
    /// - [`PresetError::InvalidColor`] for a role that is not `H S% L%`
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(PresetError::InvalidRadius(self.radius));
        }
        validate_variant("light", &self.color.light)?;
        validate_variant("dark", &self.color.dark)
    }
}

fn validate_variant(variant: &'static str, vars: &ThemeCssVars) -> Result<()> {
    for (role, value) in vars.iter().filter(|(role, _)| is_theme_role(role)) {
        if !HSL_TRIPLE_RE.is_match(value) {
            return Err(PresetError::InvalidColor {
                variant,
                role: role.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

impl Default for PresetOptions {
    /// The hyrd theme with a `0.625rem` radius.
    fn default() -> Self {
        Self::new(ColorTheme::hyrd()).with_radius(0.625)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = PresetOptions::default();
        assert_eq!(options.radius, 0.625);
        assert_eq!(options.color.name, "hyrd");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_defaults() {
        let options = PresetOptions::from_yaml("{}").unwrap();
        assert_eq!(options.radius, 0.5);
        assert_eq!(options.color, ColorTheme::hyrd());
    }

    #[test]
    fn test_from_yaml_custom_theme() {
        let options = PresetOptions::from_yaml(
            r#"
radius: 1
color:
  name: ocean
  light:
    primary: 200 90% 40%
    sidebar: anything goes
  dark:
    primary: 200 90% 55%
"#,
        )
        .unwrap();
        assert_eq!(options.radius, 1.0);
        assert_eq!(options.color.name, "ocean");
        assert_eq!(options.color.light.get("primary"), Some("200 90% 40%"));
        assert_eq!(options.color.light.get("sidebar"), Some("anything goes"));
    }

    #[test]
    fn test_from_yaml_rejects_bad_color() {
        let err = PresetOptions::from_yaml(
            r#"
color:
  name: broken
  light:
    primary: blue
  dark: {}
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            PresetError::InvalidColor { variant: "light", ref role, .. } if role == "primary"
        ));
    }

    #[test]
    fn test_from_yaml_rejects_negative_radius() {
        let err = PresetOptions::from_yaml("radius: -1").unwrap_err();
        assert!(matches!(err, PresetError::InvalidRadius(r) if r == -1.0));
    }

    #[test]
    fn test_from_yaml_parse_error() {
        let err = PresetOptions::from_yaml("radius: [").unwrap_err();
        assert!(matches!(err, PresetError::Parse { path: None, .. }));
    }
}
