//! Shortcuts: one utility name standing for several.
//!
//! A shortcut expands a token into a list of [`ShortcutItem`]s, each either
//! another utility to resolve through the rules or declarations to apply
//! directly. `animate-in` and `animate-out` use this to pull in their
//! keyframes and reset every animation variable in one class.

use regex::Regex;

use crate::constants::{css_var, ENTER_ANIMATION_NAME, EXIT_ANIMATION_NAME};
use crate::css::Declarations;
use crate::error::Result;
use crate::rules::{compile, RuleContext, RuleMatch, RuleMeta};

type BoxedExpand =
    Box<dyn Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<Vec<ShortcutItem>> + Send + Sync>;

/// One piece of a shortcut expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutItem {
    /// Another utility token, resolved through the rule set.
    Utility(String),
    /// Declarations applied to the shortcut's own selector.
    Declarations(Declarations),
}

/// A pattern that expands into other utilities.
pub struct Shortcut {
    pattern: Regex,
    expand: BoxedExpand,
    meta: RuleMeta,
}

impl Shortcut {
    /// # Errors
    ///
    /// Returns [`PresetError::InvalidPattern`](crate::PresetError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn new<F>(pattern: &str, expand: F) -> Result<Self>
    where
        F: Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<Vec<ShortcutItem>>
            + Send
            + Sync
            + 'static,
    {
        Ok(Self::from_regex(Regex::new(pattern)?, expand))
    }

    pub fn from_regex<F>(pattern: Regex, expand: F) -> Self
    where
        F: Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<Vec<ShortcutItem>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            pattern,
            expand: Box::new(expand),
            meta: RuleMeta::default(),
        }
    }

    pub fn with_autocomplete<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta
            .autocomplete
            .extend(hints.into_iter().map(Into::into));
        self
    }

    pub fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    /// Expands `token`, or returns `None` if this shortcut does not apply.
    pub fn expand(&self, token: &str, ctx: &RuleContext<'_>) -> Option<Vec<ShortcutItem>> {
        let m = RuleMatch::capture(&self.pattern, token)?;
        (self.expand)(&m, ctx)
    }
}

impl std::fmt::Debug for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shortcut")
            .field("pattern", &self.pattern.as_str())
            .field("meta", &self.meta)
            .finish()
    }
}

fn animate(animation: &'static str, phase: &'static str, ctx: &RuleContext<'_>) -> Vec<ShortcutItem> {
    let mut decls = Declarations::new()
        .with("animation-name", animation)
        .with("animation-duration", ctx.theme.duration());
    for var in ["opacity", "scale", "rotate", "translate-x", "translate-y"] {
        decls.set(css_var(&format!("{}-{}", phase, var)), "initial");
    }
    vec![
        ShortcutItem::Utility(format!("keyframes-{}", animation)),
        ShortcutItem::Declarations(decls),
    ]
}

/// `animate-in` and `animate-out`.
pub fn animation_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::from_regex(compile(r"^animate-in$"), |_, ctx| {
            Some(animate(ENTER_ANIMATION_NAME, "enter", ctx))
        })
        .with_autocomplete(["animate-in"]),
        Shortcut::from_regex(compile(r"^animate-out$"), |_, ctx| {
            Some(animate(EXIT_ANIMATION_NAME, "exit", ctx))
        })
        .with_autocomplete(["animate-out"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::PresetTheme;

    #[test]
    fn test_animate_in_expansion() {
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        let items = animation_shortcuts()[0].expand("animate-in", &ctx).unwrap();
        assert_eq!(items[0], ShortcutItem::Utility("keyframes-una-in".into()));
        let ShortcutItem::Declarations(decls) = &items[1] else {
            panic!("expected declarations");
        };
        assert_eq!(decls.get("animation-name"), Some("una-in"));
        assert_eq!(decls.get("animation-duration"), Some("150ms"));
        assert_eq!(decls.get("--una-enter-translate-y"), Some("initial"));
        assert_eq!(decls.len(), 7);
    }

    #[test]
    fn test_animate_out_uses_theme_duration() {
        let theme = PresetTheme::default().with_duration("500ms");
        let ctx = RuleContext::new(&theme);
        let items = animation_shortcuts()[1].expand("animate-out", &ctx).unwrap();
        assert_eq!(items[0], ShortcutItem::Utility("keyframes-una-out".into()));
        let ShortcutItem::Declarations(decls) = &items[1] else {
            panic!("expected declarations");
        };
        assert_eq!(decls.get("animation-duration"), Some("500ms"));
        assert_eq!(decls.get("--una-exit-opacity"), Some("initial"));
    }

    #[test]
    fn test_shortcut_requires_exact_token() {
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        assert!(animation_shortcuts()[0].expand("animate-in-fast", &ctx).is_none());
    }

    #[test]
    fn test_custom_shortcut() {
        let shortcut = Shortcut::new(r"^btn-(\w+)$", |m, _| {
            Some(vec![
                ShortcutItem::Utility("animate-in".into()),
                ShortcutItem::Utility(format!("fade-in-{}", m.group(1)?.len())),
            ])
        })
        .unwrap();
        let theme = PresetTheme::default();
        let ctx = RuleContext::new(&theme);
        let items = shortcut.expand("btn-abc", &ctx).unwrap();
        assert_eq!(items[1], ShortcutItem::Utility("fade-in-3".into()));
    }
}
