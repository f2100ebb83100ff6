//! Enter/exit animation utilities: fade, zoom, spin and slide.
//!
//! Each utility writes one `--una-*` custom property that the `una-in` and
//! `una-out` keyframes read. Fade, zoom and spin take an optional argument
//! and fall back to a default; slide takes a direction and an optional
//! offset.

use crate::constants::{
    css_var, DEFAULT_FADE_OPACITY, DEFAULT_SPIN_DEGREE, DEFAULT_ZOOM_SCALE,
    DIRECTIONS_AUTOCOMPLETE,
};
use crate::css::{Declarations, RuleOutput};
use crate::slide::{handle_slide, Axis};
use crate::units::{Chain, CSSVAR_DEGREE, CSSVAR_FRACTION_PERCENT, CSSVAR_PERCENT};

use super::{compile, Rule, RuleContext, RuleMatch};

/// Animation phase a utility configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Enter,
    Exit,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Phase::Enter => "enter",
            Phase::Exit => "exit",
        }
    }
}

/// A utility that maps an optional argument onto one custom property.
fn value_rule(
    pattern: &str,
    phase: Phase,
    property: &'static str,
    default: &'static str,
    chain: Chain,
) -> Rule {
    let name = css_var(&format!("{}-{}", phase.as_str(), property));
    Rule::from_regex(compile(pattern), move |m, _| {
        let raw = m.group(1).unwrap_or(default);
        let value = chain.apply(raw)?;
        Some(Declarations::new().with(name.clone(), value).into())
    })
}

pub fn fade_rules() -> Vec<Rule> {
    vec![
        value_rule(
            r"^fade-in(?:-(.+))?$",
            Phase::Enter,
            "opacity",
            DEFAULT_FADE_OPACITY,
            CSSVAR_PERCENT,
        )
        .with_autocomplete(["fade-(in|out)-<percent>"]),
        value_rule(
            r"^fade-out(?:-(.+))?$",
            Phase::Exit,
            "opacity",
            DEFAULT_FADE_OPACITY,
            CSSVAR_PERCENT,
        ),
    ]
}

pub fn zoom_rules() -> Vec<Rule> {
    vec![
        value_rule(
            r"^zoom-in(?:-(.+))?$",
            Phase::Enter,
            "scale",
            DEFAULT_ZOOM_SCALE,
            CSSVAR_FRACTION_PERCENT,
        )
        .with_autocomplete(["zoom-(in|out)-<percent>"]),
        value_rule(
            r"^zoom-out(?:-(.+))?$",
            Phase::Exit,
            "scale",
            DEFAULT_ZOOM_SCALE,
            CSSVAR_FRACTION_PERCENT,
        ),
    ]
}

pub fn spin_rules() -> Vec<Rule> {
    vec![
        value_rule(
            r"^spin-in(?:-(.+))?$",
            Phase::Enter,
            "rotate",
            DEFAULT_SPIN_DEGREE,
            CSSVAR_DEGREE,
        )
        .with_autocomplete(["spin-(in|out)-<percent>"]),
        value_rule(
            r"^spin-out(?:-(.+))?$",
            Phase::Exit,
            "rotate",
            DEFAULT_SPIN_DEGREE,
            CSSVAR_DEGREE,
        ),
    ]
}

fn slide_output(phase: Phase, m: &RuleMatch<'_>) -> Option<RuleOutput> {
    let slide = handle_slide(m.group(2), m.group(1))?;
    let axis = match slide.axis()? {
        Axis::X => "x",
        Axis::Y => "y",
    };
    let name = css_var(&format!("{}-translate-{}", phase.as_str(), axis));
    Some(Declarations::new().with(name, slide.value).into())
}

pub fn slide_rules() -> Vec<Rule> {
    let dirs = DIRECTIONS_AUTOCOMPLETE;
    vec![
        Rule::from_regex(
            compile(r"^slide-in(?:-from)?-(t|b|l|r|top|bottom|left|right)(?:-(.+))?$"),
            |m: &RuleMatch<'_>, _: &RuleContext<'_>| slide_output(Phase::Enter, m),
        )
        .with_autocomplete([
            format!("slide-(in|out)-{}-<percent>", dirs),
            format!("slide-(in|out)-{}-full", dirs),
            format!("slide-in-from-{}-<percent>", dirs),
            format!("slide-in-from-{}-full", dirs),
        ]),
        Rule::from_regex(
            compile(r"^slide-out(?:-to)?-(t|b|l|r|top|bottom|left|right)(?:-(.+))?$"),
            |m: &RuleMatch<'_>, _: &RuleContext<'_>| slide_output(Phase::Exit, m),
        )
        .with_autocomplete([
            format!("slide-out-to-{}-<percent>", dirs),
            format!("slide-out-to-{}-full", dirs),
        ]),
    ]
}

/// Fade, zoom, spin and slide rules, in that order.
pub fn animation_rules() -> Vec<Rule> {
    let mut rules = fade_rules();
    rules.extend(zoom_rules());
    rules.extend(spin_rules());
    rules.extend(slide_rules());
    rules
}
