//! Direction normalization and slide offsets.
//!
//! Slide utilities accept both short (`t`, `b`, `l`, `r`) and long
//! (`top`, `bottom`, `left`, `right`) direction names. The offset is signed
//! so that sliding in from the top or left starts on the negative side of
//! the axis.
//!
//! ```rust
//! use hyrd_ui_preset::slide::handle_slide;
//!
//! let slide = handle_slide(None, Some("l")).unwrap();
//! assert_eq!(slide.value, "-100%");
//! assert_eq!(slide.direction.as_deref(), Some("left"));
//!
//! let slide = handle_slide(Some("50%"), Some("bottom")).unwrap();
//! assert_eq!(slide.value, "50%");
//! ```

use crate::constants::DEFAULT_SLIDE_TRANSLATE;
use crate::units::CSSVAR_FRACTION_REM;

/// One of the four canonical directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

/// The translation axis a direction moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Direction {
    /// Parses any of the eight accepted spellings.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "t" | "top" => Some(Direction::Top),
            "b" | "bottom" => Some(Direction::Bottom),
            "l" | "left" => Some(Direction::Left),
            "r" | "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// The canonical long-form name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Top | Direction::Bottom => Axis::Y,
            Direction::Left | Direction::Right => Axis::X,
        }
    }

    /// Whether motion from this side runs against the axis.
    pub fn is_negative(self) -> bool {
        matches!(self, Direction::Top | Direction::Left)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expands a short direction to its long form.
///
/// Unrecognized tokens pass through unchanged; absent or empty input gives
/// `None`, which callers treat as "emit nothing".
pub fn normalize_direction(dir: Option<&str>) -> Option<String> {
    let dir = dir.filter(|d| !d.is_empty())?;
    let long = match dir {
        "t" => "top",
        "b" => "bottom",
        "l" => "left",
        "r" => "right",
        other => other,
    };
    Some(long.to_string())
}

/// A resolved slide offset and the direction it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideResult {
    /// The signed CSS length or percentage.
    pub value: String,
    /// The normalized direction, if one was given.
    pub direction: Option<String>,
}

impl SlideResult {
    /// The axis for the direction, or `None` when it is not one of the four.
    pub fn axis(&self) -> Option<Axis> {
        self.direction
            .as_deref()
            .and_then(Direction::parse)
            .map(Direction::axis)
    }
}

/// Resolves a slide magnitude and direction.
///
/// Returns `None` when the magnitude is not a length the unit handlers
/// understand; the calling rule then reports no match.
pub fn handle_slide(value: Option<&str>, dir: Option<&str>) -> Option<SlideResult> {
    let raw = value
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SLIDE_TRANSLATE);
    let value = CSSVAR_FRACTION_REM.apply(raw)?;
    let direction = normalize_direction(dir);

    let negative = direction
        .as_deref()
        .and_then(Direction::parse)
        .is_some_and(Direction::is_negative);

    Some(SlideResult {
        value: if negative {
            apply_negative_sign(value)
        } else {
            value
        },
        direction,
    })
}

/// Flips the sign of a top/left offset.
///
/// Variable references are opaque and zero has no sign, so both are
/// returned untouched. An already negated value has its sign removed.
pub fn apply_negative_sign(value: String) -> String {
    if value.starts_with("var(--") {
        return value;
    }
    if let Some(stripped) = value.strip_prefix('-') {
        return stripped.to_string();
    }
    if value == "0" {
        return value;
    }
    format!("-{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_short_forms() {
        assert_eq!(normalize_direction(Some("t")).as_deref(), Some("top"));
        assert_eq!(normalize_direction(Some("b")).as_deref(), Some("bottom"));
        assert_eq!(normalize_direction(Some("l")).as_deref(), Some("left"));
        assert_eq!(normalize_direction(Some("r")).as_deref(), Some("right"));
    }

    #[test]
    fn test_normalize_passes_through() {
        assert_eq!(normalize_direction(Some("top")).as_deref(), Some("top"));
        assert_eq!(
            normalize_direction(Some("diagonal")).as_deref(),
            Some("diagonal")
        );
    }

    #[test]
    fn test_normalize_absent() {
        assert_eq!(normalize_direction(None), None);
        assert_eq!(normalize_direction(Some("")), None);
    }

    #[test]
    fn test_direction_parse_and_axis() {
        assert_eq!(Direction::parse("t"), Some(Direction::Top));
        assert_eq!(Direction::parse("right"), Some(Direction::Right));
        assert_eq!(Direction::parse("up"), None);
        assert_eq!(Direction::Top.axis(), Axis::Y);
        assert_eq!(Direction::Left.axis(), Axis::X);
        assert!(Direction::Left.is_negative());
        assert!(!Direction::Bottom.is_negative());
    }

    #[test]
    fn test_slide_default_magnitude() {
        let slide = handle_slide(None, Some("top")).unwrap();
        assert_eq!(slide.value, "-100%");
        let slide = handle_slide(Some(""), Some("r")).unwrap();
        assert_eq!(slide.value, "100%");
        assert_eq!(slide.direction.as_deref(), Some("right"));
    }

    #[test]
    fn test_slide_sign_follows_direction() {
        for dir in ["t", "b", "l", "r", "top", "bottom", "left", "right"] {
            let slide = handle_slide(Some("2px"), Some(dir)).unwrap();
            let negative = Direction::parse(dir).unwrap().is_negative();
            let expected = if negative { "-2px" } else { "2px" };
            assert_eq!(slide.value, expected, "direction {}", dir);
        }
        assert_eq!(handle_slide(Some("2px"), Some("up")).unwrap().value, "2px");
    }

    #[test]
    fn test_slide_zero_is_never_negated() {
        let slide = handle_slide(Some("0"), Some("left")).unwrap();
        assert_eq!(slide.value, "0");
    }

    #[test]
    fn test_slide_pre_negated_value_is_stripped() {
        let slide = handle_slide(Some("-50%"), Some("t")).unwrap();
        assert_eq!(slide.value, "50%");
    }

    #[test]
    fn test_slide_cssvar_untouched() {
        let slide = handle_slide(Some("$offset"), Some("left")).unwrap();
        assert_eq!(slide.value, "var(--offset)");
    }

    #[test]
    fn test_slide_unknown_unit_is_no_match() {
        assert_eq!(handle_slide(Some("sideways"), Some("left")), None);
    }

    #[test]
    fn test_slide_rem_steps() {
        let slide = handle_slide(Some("4"), Some("l")).unwrap();
        assert_eq!(slide.value, "-1rem");
        assert_eq!(slide.axis(), Some(Axis::X));
    }

    #[test]
    fn test_slide_unknown_direction_has_no_axis() {
        let slide = handle_slide(Some("full"), Some("diagonal")).unwrap();
        assert_eq!(slide.value, "100%");
        assert_eq!(slide.axis(), None);
    }

    #[test]
    fn test_apply_negative_sign_is_an_involution() {
        let once = apply_negative_sign("2rem".to_string());
        assert_eq!(once, "-2rem");
        assert_eq!(apply_negative_sign(once), "2rem");
    }
}
