//! Keyframe-backed utilities.

use crate::css::{Declarations, Keyframes};

use super::{compile, Rule};

/// `animate-accordion-*` and `animate-collapsible-*` utilities. The
/// matching keyframes are emitted by the preflight.
pub fn collapsible_rules() -> Vec<Rule> {
    [
        ("animate-accordion-down", "shadcn-down"),
        ("animate-accordion-up", "shadcn-up"),
        ("animate-collapsible-down", "shadcn-collapsible-down"),
        ("animate-collapsible-up", "shadcn-collapsible-up"),
    ]
    .into_iter()
    .map(|(name, keyframes)| {
        Rule::fixed(
            name,
            Declarations::new().with("animation", format!("{} 0.2s ease-out", keyframes)),
        )
    })
    .collect()
}

/// `keyframes-<name>` emits the theme's keyframes for `<name>`.
///
/// Names the theme does not define are no match.
pub fn keyframes_rule() -> Rule {
    Rule::from_regex(compile(r"^keyframes-(.+)$"), |m, ctx| {
        let name = m.group(1)?;
        let body = ctx.theme.keyframes(name)?;
        Some(Keyframes::new(name, body).into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleContext;
    use crate::theme::PresetTheme;

    #[test]
    fn test_accordion_rule() {
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        let rule = &collapsible_rules()[0];
        let out = rule.apply("animate-accordion-down", &ctx).unwrap();
        assert_eq!(
            out.declarations().unwrap().get("animation"),
            Some("shadcn-down 0.2s ease-out")
        );
    }

    #[test]
    fn test_collapsible_up_rule() {
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        let found = collapsible_rules()
            .iter()
            .find_map(|r| r.apply("animate-collapsible-up", &ctx))
            .unwrap();
        assert_eq!(
            found.declarations().unwrap().get("animation"),
            Some("shadcn-collapsible-up 0.2s ease-out")
        );
    }

    #[test]
    fn test_keyframes_rule_uses_theme() {
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        let out = keyframes_rule().apply("keyframes-una-in", &ctx).unwrap();
        let kf = out.keyframes().unwrap();
        assert_eq!(kf.name, "una-in");
        assert!(kf.body.starts_with("{from{opacity:var(--una-enter-opacity,1);"));
    }

    #[test]
    fn test_keyframes_rule_unknown_name() {
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        assert!(keyframes_rule().apply("keyframes-wobble", &ctx).is_none());
    }
}
