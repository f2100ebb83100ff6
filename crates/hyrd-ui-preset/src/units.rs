//! Value handlers that turn utility arguments into CSS values.
//!
//! Every handler takes the raw argument from a utility token and returns
//! `Some(css_value)` when it understands the argument, `None` otherwise.
//! `None` is not an error: callers chain handlers with [`Chain`] and the
//! first handler that recognizes the input wins. When no handler does, the
//! rule using the chain reports "no match" and the next rule gets a chance.
//!
//! | Handler | Accepts | Example |
//! |---------|---------|---------|
//! | [`cssvar`] | `$name`, `$name,fallback` | `$x` → `var(--x)` |
//! | [`fraction`] | `full`, `a/b` | `1/2` → `50%` |
//! | [`rem`] | bare numbers, numbers with a length unit | `4` → `1rem` |
//! | [`percent`] | numbers, optionally with `%` | `25` → `25%` |
//! | [`degree`] | numbers, optionally with an angle unit | `45` → `45deg` |

use once_cell::sync::Lazy;
use regex::Regex;

use crate::css::escape_selector;

/// A value handler.
pub type Handler = fn(&str) -> Option<String>;

static NUMBER_WITH_UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(-?\d*(?:\.\d+)?)(px|pt|pc|%|r?(?:em|ex|lh|cap|ch|ic)|(?:[sld]?v|cq)(?:[whib]|min|max)|in|cm|mm|rpx)?$",
    )
    .expect("number-with-unit pattern is valid")
});

static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d*(?:\.\d+)?)$").expect("number pattern is valid"));

static UNIT_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(px|[sld]?v[wh])$").expect("unit-only pattern is valid"));

static ANGLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(-?\d*(?:\.\d+)?)(deg|rad|grad|turn)?$").expect("angle pattern is valid")
});

static CSSVAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\$[^\s'"`;{}]"#).expect("cssvar pattern is valid"));

// Leading numeric prefix, the part of a string a lenient float parser reads.
static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("float prefix is valid")
});

/// An ordered list of handlers; the first one returning a value wins.
///
/// ```rust
/// use hyrd_ui_preset::units::{cssvar, fraction, rem, Chain, Handler};
///
/// const LENGTH: &[Handler] = &[cssvar, fraction, rem];
/// let chain = Chain::new(LENGTH);
/// assert_eq!(chain.apply("full").as_deref(), Some("100%"));
/// assert_eq!(chain.apply("4").as_deref(), Some("1rem"));
/// assert_eq!(chain.apply("$offset").as_deref(), Some("var(--offset)"));
/// assert_eq!(chain.apply("sideways"), None);
/// ```
#[derive(Clone, Copy)]
pub struct Chain {
    handlers: &'static [Handler],
}

impl Chain {
    pub const fn new(handlers: &'static [Handler]) -> Self {
        Self { handlers }
    }

    /// Runs the handlers in order and returns the first value produced.
    pub fn apply(&self, value: &str) -> Option<String> {
        self.handlers.iter().find_map(|handler| handler(value))
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// `cssvar → fraction → rem`, used for translations.
pub const CSSVAR_FRACTION_REM: Chain = Chain::new(&[cssvar, fraction, rem]);
/// `cssvar → percent`, used for opacity.
pub const CSSVAR_PERCENT: Chain = Chain::new(&[cssvar, percent]);
/// `cssvar → fraction → percent`, used for scale.
pub const CSSVAR_FRACTION_PERCENT: Chain = Chain::new(&[cssvar, fraction, percent]);
/// `cssvar → degree`, used for rotation.
pub const CSSVAR_DEGREE: Chain = Chain::new(&[cssvar, degree]);

/// Formats a number the way CSS values are written: rounded to ten
/// fractional digits, no trailing zeros, and never `-0`.
pub fn format_number(num: f64) -> String {
    let rounded: f64 = format!("{:.10}", num).parse().unwrap_or(num);
    if rounded == 0.0 {
        return "0".to_string();
    }
    rounded.to_string()
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let caps = FLOAT_PREFIX_RE.captures(s)?;
    caps[1].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `$name` → `var(--name)`, `$name,fallback` → `var(--name, fallback)`.
pub fn cssvar(value: &str) -> Option<String> {
    if !CSSVAR_RE.is_match(value) {
        return None;
    }
    let mut parts = value[1..].split(',');
    let name = parts.next().unwrap_or_default();
    match parts.next() {
        Some(fallback) if !fallback.is_empty() => Some(format!(
            "var(--{}, {})",
            escape_selector(name),
            fallback
        )),
        _ => Some(format!("var(--{})", escape_selector(name))),
    }
}

/// `full` → `100%`, `a/b` → the ratio as a percentage.
pub fn fraction(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value == "full" {
        return Some("100%".to_string());
    }
    let mut parts = value.split('/');
    let numerator = parse_float_prefix(parts.next()?)?;
    let denominator = parse_float_prefix(parts.next()?)?;
    let num = numerator / denominator;
    if num == 0.0 {
        return Some("0".to_string());
    }
    let pct = num * 100.0;
    if !pct.is_finite() {
        return None;
    }
    Some(format!("{}%", format_number(pct)))
}

/// Lengths. Bare numbers are quarter-rem steps (`4` → `1rem`); numbers
/// with a unit keep it; a lone `px`/viewport unit means one of it.
pub fn rem(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if UNIT_ONLY_RE.is_match(value) {
        return Some(format!("1{}", value));
    }
    let caps = NUMBER_WITH_UNIT_RE.captures(value)?;
    let num = parse_number(caps.get(1)?.as_str())?;
    if num == 0.0 {
        return Some("0".to_string());
    }
    match caps.get(2) {
        Some(unit) => Some(format!("{}{}", format_number(num), unit.as_str())),
        None => Some(format!("{}rem", format_number(num / 4.0))),
    }
}

/// Percentages: `25` and `25%` both give `25%`.
pub fn percent(value: &str) -> Option<String> {
    let value = value.strip_suffix('%').unwrap_or(value);
    if !NUMBER_RE.is_match(value) {
        return None;
    }
    let num = parse_number(value)?;
    Some(format!("{}%", format_number(num)))
}

/// Angles; unitless numbers are degrees.
pub fn degree(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let caps = ANGLE_RE.captures(value)?;
    let num = parse_number(caps.get(1)?.as_str())?;
    if num == 0.0 {
        return Some("0".to_string());
    }
    let unit = caps.get(2).map(|m| m.as_str()).unwrap_or("deg");
    Some(format!("{}{}", format_number(num), unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(0.625), "0.625");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(100.0 / 3.0), "33.3333333333");
    }

    #[test]
    fn test_cssvar() {
        assert_eq!(cssvar("$gap").as_deref(), Some("var(--gap)"));
        assert_eq!(cssvar("$gap,4px").as_deref(), Some("var(--gap, 4px)"));
        assert_eq!(cssvar("$a.b").as_deref(), Some("var(--a\\.b)"));
        assert_eq!(cssvar("gap"), None);
        assert_eq!(cssvar("$ gap"), None);
        assert_eq!(cssvar("$"), None);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction("full").as_deref(), Some("100%"));
        assert_eq!(fraction("1/2").as_deref(), Some("50%"));
        assert_eq!(fraction("1/3").as_deref(), Some("33.3333333333%"));
        assert_eq!(fraction("0/4").as_deref(), Some("0"));
        assert_eq!(fraction("50%"), None);
        assert_eq!(fraction("1/0"), None);
        assert_eq!(fraction("a/b"), None);
        assert_eq!(fraction(""), None);
    }

    #[test]
    fn test_rem() {
        assert_eq!(rem("4").as_deref(), Some("1rem"));
        assert_eq!(rem("2.5").as_deref(), Some("0.625rem"));
        assert_eq!(rem("50%").as_deref(), Some("50%"));
        assert_eq!(rem("-50%").as_deref(), Some("-50%"));
        assert_eq!(rem("12px").as_deref(), Some("12px"));
        assert_eq!(rem("3EM").as_deref(), Some("3EM"));
        assert_eq!(rem("10dvh").as_deref(), Some("10dvh"));
        assert_eq!(rem("px").as_deref(), Some("1px"));
        assert_eq!(rem("svw").as_deref(), Some("1svw"));
        assert_eq!(rem("0").as_deref(), Some("0"));
        assert_eq!(rem("0px").as_deref(), Some("0"));
        assert_eq!(rem("em"), None);
        assert_eq!(rem("-"), None);
        assert_eq!(rem("12parsecs"), None);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent("0").as_deref(), Some("0%"));
        assert_eq!(percent("25").as_deref(), Some("25%"));
        assert_eq!(percent("25%").as_deref(), Some("25%"));
        assert_eq!(percent("12.5").as_deref(), Some("12.5%"));
        assert_eq!(percent("half"), None);
        assert_eq!(percent(""), None);
    }

    #[test]
    fn test_degree() {
        assert_eq!(degree("30deg").as_deref(), Some("30deg"));
        assert_eq!(degree("45").as_deref(), Some("45deg"));
        assert_eq!(degree("0.5turn").as_deref(), Some("0.5turn"));
        assert_eq!(degree("-90").as_deref(), Some("-90deg"));
        assert_eq!(degree("0").as_deref(), Some("0"));
        assert_eq!(degree("north"), None);
    }

    #[test]
    fn test_overflowing_magnitudes_do_not_convert() {
        let huge = "9".repeat(400);
        assert_eq!(rem(&huge), None);
        assert_eq!(rem(&format!("{}px", huge)), None);
        assert_eq!(percent(&huge), None);
        assert_eq!(percent(&format!("{}%", huge)), None);
        assert_eq!(degree(&format!("{}deg", huge)), None);
        assert_eq!(fraction(&format!("{}/1", huge)), None);
        assert_eq!(fraction("1e308/0.001"), None);
        assert_eq!(CSSVAR_FRACTION_REM.apply(&huge), None);
    }

    #[test]
    fn test_chain_first_match_wins() {
        // `full` is claimed by fraction before rem gets a look at it
        assert_eq!(CSSVAR_FRACTION_REM.apply("full").as_deref(), Some("100%"));
        assert_eq!(CSSVAR_FRACTION_REM.apply("1/4").as_deref(), Some("25%"));
        assert_eq!(CSSVAR_FRACTION_PERCENT.apply("0").as_deref(), Some("0%"));
        assert_eq!(CSSVAR_DEGREE.apply("$spin").as_deref(), Some("var(--spin)"));
        assert_eq!(CSSVAR_PERCENT.apply("oops"), None);
    }
}
