//! Names and defaults shared across the preset.

/// Prefix for every custom property the animation utilities write.
pub const CSS_VARIABLE_PREFIX: &str = "--una";

/// Keyframes name for enter animations.
pub const ENTER_ANIMATION_NAME: &str = "una-in";

/// Keyframes name for exit animations.
pub const EXIT_ANIMATION_NAME: &str = "una-out";

/// Slide offset used when a slide utility carries no magnitude.
pub const DEFAULT_SLIDE_TRANSLATE: &str = "100%";

pub const DEFAULT_FADE_OPACITY: &str = "0";
pub const DEFAULT_ZOOM_SCALE: &str = "0";
pub const DEFAULT_SPIN_DEGREE: &str = "30deg";

/// Corner radius, in rem, used when options do not set one.
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Animation duration used by `animate-in`/`animate-out`.
pub const DEFAULT_DURATION: &str = "150ms";

pub(crate) const DIRECTIONS_AUTOCOMPLETE: &str = "(t|b|l|r|top|bottom|left|right)";

/// Builds `--una-<suffix>`.
pub fn css_var(suffix: &str) -> String {
    format!("{}-{}", CSS_VARIABLE_PREFIX, suffix)
}
