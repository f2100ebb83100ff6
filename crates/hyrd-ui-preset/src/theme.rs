//! Theme data the preset contributes to the host generator.
//!
//! Unlike the color variables in [`theme_vars`](crate::theme_vars), which
//! become CSS custom properties, this is lookup data: the keyframes the
//! `keyframes-*` utility emits, the default animation duration, and the
//! color and radius tokens that map utility names onto those variables.
//! Host generators and the `hyrd-css theme` command read the color and
//! radius tables; the rules here only consume keyframes and duration.

use crate::constants::{css_var, DEFAULT_DURATION, ENTER_ANIMATION_NAME, EXIT_ANIMATION_NAME};

/// A color token: either one value or a default/foreground pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeColor {
    Single(String),
    Pair { default: String, foreground: String },
}

/// Keyframes, colors, radii and durations exposed by the preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTheme {
    keyframes: Vec<(String, String)>,
    colors: Vec<(String, ThemeColor)>,
    border_radius: Vec<(String, String)>,
    duration: String,
}

fn hsl_var(role: &str) -> String {
    format!("hsl(var(--{}))", role)
}

fn animation_body(edge: &str, phase: &str) -> String {
    let v = |name: &str, fallback: &str| {
        format!("var({},{})", css_var(&format!("{}-{}", phase, name)), fallback)
    };
    let scale = v("scale", "1");
    format!(
        "{{{}{{opacity:{};transform:translate3d({},{},0) scale3d({},{},{}) rotate({})}}}}",
        edge,
        v("opacity", "1"),
        v("translate-x", "0"),
        v("translate-y", "0"),
        scale,
        scale,
        scale,
        v("rotate", "0"),
    )
}

impl PresetTheme {
    /// The hyrd preset theme.
    pub fn hyrd() -> Self {
        let keyframes = vec![
            (
                ENTER_ANIMATION_NAME.to_string(),
                animation_body("from", "enter"),
            ),
            (EXIT_ANIMATION_NAME.to_string(), animation_body("to", "exit")),
        ];

        let mut colors: Vec<(String, ThemeColor)> = ["border", "input", "ring", "background", "foreground"]
            .iter()
            .map(|role| (role.to_string(), ThemeColor::Single(hsl_var(role))))
            .collect();
        colors.extend(
            [
                "primary",
                "secondary",
                "destructive",
                "muted",
                "accent",
                "popover",
                "card",
                "success",
                "warning",
            ]
            .iter()
            .map(|role| {
                (
                    role.to_string(),
                    ThemeColor::Pair {
                        default: hsl_var(role),
                        foreground: hsl_var(&format!("{}-foreground", role)),
                    },
                )
            }),
        );

        let border_radius = vec![
            ("lg".to_string(), "var(--radius)".to_string()),
            ("md".to_string(), "calc(var(--radius) - 2px)".to_string()),
            ("sm".to_string(), "calc(var(--radius) - 4px)".to_string()),
        ];

        Self {
            keyframes,
            colors,
            border_radius,
            duration: DEFAULT_DURATION.to_string(),
        }
    }

    /// Registers (or replaces) a keyframes body, returning `self` for chaining.
    pub fn with_keyframes(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        let name = name.into();
        let body = body.into();
        match self.keyframes.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = body,
            None => self.keyframes.push((name, body)),
        }
        self
    }

    /// Sets the default animation duration.
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    /// The keyframes body registered under `name`.
    pub fn keyframes(&self, name: &str) -> Option<&str> {
        self.keyframes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| body.as_str())
    }

    /// Names of all registered keyframes.
    pub fn keyframe_names(&self) -> impl Iterator<Item = &str> {
        self.keyframes.iter().map(|(n, _)| n.as_str())
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Looks up a color token.
    ///
    /// `primary` resolves to the pair's default, `primary-foreground` to its
    /// foreground; single colors resolve only by their exact name.
    pub fn color(&self, name: &str) -> Option<&str> {
        if let Some((_, color)) = self.colors.iter().find(|(n, _)| n == name) {
            return match color {
                ThemeColor::Single(value) => Some(value),
                ThemeColor::Pair { default, .. } => Some(default),
            };
        }
        let base = name.strip_suffix("-foreground")?;
        match self.colors.iter().find(|(n, _)| n == base) {
            Some((_, ThemeColor::Pair { foreground, .. })) => Some(foreground),
            _ => None,
        }
    }

    pub fn colors(&self) -> impl Iterator<Item = (&str, &ThemeColor)> {
        self.colors.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Looks up a border radius token (`lg`, `md`, `sm`).
    pub fn border_radius(&self, size: &str) -> Option<&str> {
        self.border_radius
            .iter()
            .find(|(n, _)| n == size)
            .map(|(_, v)| v.as_str())
    }

    /// All border radius tokens, in registration order.
    pub fn border_radii(&self) -> impl Iterator<Item = (&str, &str)> {
        self.border_radius
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl Default for PresetTheme {
    fn default() -> Self {
        Self::hyrd()
    }
}
