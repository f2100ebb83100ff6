//! Color theme variables and the CSS blocks that declare them.
//!
//! A [`ColorTheme`] carries light and dark values for a fixed set of
//! semantic roles ([`THEME_CSS_VAR_KEYS`]). [`generate_css_vars`] turns it
//! into two CSS blocks: one for light mode (which also carries `--radius`)
//! and one scoped to `.dark`.
//!
//! ```rust
//! use hyrd_ui_preset::{generate_css_vars, ColorTheme, PresetOptions, ThemeCssVars, ThemeScope};
//!
//! let options = PresetOptions::new(ColorTheme::new(
//!     "ocean",
//!     ThemeCssVars::from_iter([("primary", "210 100% 45%")]),
//!     ThemeCssVars::from_iter([("primary", "210 100% 30%")]),
//! ))
//! .with_radius(0.75);
//!
//! let css = generate_css_vars(&options, ThemeScope::Named);
//! assert!(css.starts_with(".theme-ocean {\n  --primary: 210 100% 45%;\n  --radius: 0.75rem;\n}"));
//! assert!(css.ends_with(".dark .theme-ocean {\n  --primary: 210 100% 30%;\n}"));
//! ```

use serde::Deserialize;

use crate::config::PresetOptions;
use crate::units::format_number;

/// The semantic color roles a theme may define.
pub const THEME_CSS_VAR_KEYS: [&str; 23] = [
    "background",
    "foreground",
    "card",
    "card-foreground",
    "popover",
    "popover-foreground",
    "primary",
    "primary-foreground",
    "secondary",
    "secondary-foreground",
    "muted",
    "muted-foreground",
    "accent",
    "accent-foreground",
    "destructive",
    "destructive-foreground",
    "border",
    "input",
    "ring",
    "success",
    "success-foreground",
    "warning",
    "warning-foreground",
];

/// Returns true if `key` is one of [`THEME_CSS_VAR_KEYS`].
pub fn is_theme_role(key: &str) -> bool {
    THEME_CSS_VAR_KEYS.contains(&key)
}

/// Role → HSL triple (`"210 100% 45%"`), in insertion order.
///
/// Keys outside [`THEME_CSS_VAR_KEYS`] are kept here and dropped when the
/// CSS is generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "serde_yaml::Mapping")]
pub struct ThemeCssVars {
    entries: Vec<(String, String)>,
}

impl ThemeCssVars {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets a role, replacing any earlier value in place.
    pub fn insert(&mut self, role: impl Into<String>, value: impl Into<String>) {
        let role = role.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((role, value)),
        }
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(r, _)| r == role)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(r, v)| (r.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ThemeCssVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut vars = ThemeCssVars::new();
        for (role, value) in iter {
            vars.insert(role, value);
        }
        vars
    }
}

impl TryFrom<serde_yaml::Mapping> for ThemeCssVars {
    type Error = String;

    fn try_from(mapping: serde_yaml::Mapping) -> Result<Self, Self::Error> {
        let mut vars = ThemeCssVars::new();
        for (key, value) in mapping {
            let role = key
                .as_str()
                .ok_or_else(|| format!("color role must be a string, got {:?}", key))?;
            let value = match value {
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Number(n) => n.to_string(),
                other => return Err(format!("color '{}' must be a string, got {:?}", role, other)),
            };
            vars.insert(role, value);
        }
        Ok(vars)
    }
}

/// A named theme with light and dark variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColorTheme {
    pub name: String,
    pub light: ThemeCssVars,
    pub dark: ThemeCssVars,
}

impl ColorTheme {
    pub fn new(name: impl Into<String>, light: ThemeCssVars, dark: ThemeCssVars) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    /// The built-in hyrd theme.
    pub fn hyrd() -> Self {
        let light = ThemeCssVars::from_iter([
            ("background", "0 0% 100%"),
            ("foreground", "222.2 84% 4.9%"),
            ("card", "0 0% 100%"),
            ("card-foreground", "222.2 84% 4.9%"),
            ("popover", "0 0% 100%"),
            ("popover-foreground", "222.2 84% 4.9%"),
            ("primary", "210 100% 45%"),
            ("primary-foreground", "210 40% 98%"),
            ("secondary", "180 5% 96%"),
            ("secondary-foreground", "212.5 12.37% 38.04%"),
            ("muted", "225 4% 62%"),
            ("muted-foreground", "215.4 16.3% 46.9%"),
            ("accent", "180 5% 96%"),
            ("accent-foreground", "222.2 47.4% 11.2%"),
            ("destructive", "0 89% 62%"),
            ("destructive-foreground", "210 40% 98%"),
            ("border", "213 15% 86%"),
            ("input", "213 15% 86%"),
            ("ring", "213 15% 86%"),
            ("success", "143 54% 35%"),
            ("success-foreground", "210 40% 98%"),
            ("warning", "40 92% 53%"),
            ("warning-foreground", "210 40% 98%"),
        ]);
        let dark = ThemeCssVars::from_iter([
            ("background", "220 7% 18%"),
            ("foreground", "210 40% 98%"),
            ("card", "220 7% 18%"),
            ("card-foreground", "210 40% 98%"),
            ("popover", "220 7% 18%"),
            ("primary", "210 100% 45%"),
            ("primary-foreground", "210 40% 98%"),
            ("popover-foreground", "210 40% 98%"),
            ("secondary", "223 7% 20%"),
            ("secondary-foreground", "210 40% 98%"),
            ("muted", "221 11% 34%"),
            ("muted-foreground", "215 20.2% 65.1%"),
            ("accent", "228 7% 15%"),
            ("accent-foreground", "210 40% 98%"),
            ("destructive", "0 89% 31%"),
            ("destructive-foreground", "210 40% 98%"),
            ("border", "221 12% 30%"),
            ("input", "221 12% 30%"),
            ("ring", "221 12% 30%"),
            ("success", "143 54% 35%"),
            ("success-foreground", "210 40% 98%"),
            ("warning", "40 92% 53%"),
            ("warning-foreground", "210 40% 98%"),
        ]);
        Self::new("hyrd", light, dark)
    }
}

/// Where the generated variable blocks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeScope {
    /// One global theme: `:root` and `.dark`.
    #[default]
    Root,
    /// One of several themes: `.theme-<name>` and `.dark .theme-<name>`.
    Named,
}

/// `  --role: value;` lines for every recognized role, in insertion order.
pub fn generate_color_css_vars(vars: &ThemeCssVars) -> String {
    vars.iter()
        .filter(|(role, _)| is_theme_role(role))
        .map(|(role, value)| format!("  --{}: {};", role, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `--radius` line.
pub fn generate_radius_css_vars(radius: f64) -> String {
    format!("  --radius: {}rem;", format_number(radius))
}

/// Light and dark variable blocks for `options`, separated by a blank line.
pub fn generate_css_vars(options: &PresetOptions, scope: ThemeScope) -> String {
    let color = &options.color;
    let light_vars = generate_color_css_vars(&color.light);
    let dark_vars = generate_color_css_vars(&color.dark);
    let radius = generate_radius_css_vars(options.radius);

    let (light_selector, dark_selector) = match scope {
        ThemeScope::Root => (":root".to_string(), ".dark".to_string()),
        ThemeScope::Named => (
            format!(".theme-{}", color.name),
            format!(".dark .theme-{}", color.name),
        ),
    };

    format!(
        "{} {{\n{}\n{}\n}}\n\n{} {{\n{}\n}}",
        light_selector, light_vars, radius, dark_selector, dark_vars
    )
}
