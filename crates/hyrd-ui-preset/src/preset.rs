//! The preset: rules, shortcuts, theme data and preflight in one value.
//!
//! [`Preset`] is what a host generator consumes. It also carries a small
//! generator of its own, [`Preset::generate`], which turns a list of utility
//! tokens into a stylesheet using only this preset's rules.
//!
//! ```rust
//! use hyrd_ui_preset::Preset;
//!
//! let preset = Preset::hyrd();
//! let css = preset.generate(["fade-in", "slide-in-from-left", "not-a-utility"]);
//!
//! assert_eq!(css.unmatched, vec!["not-a-utility".to_string()]);
//! assert!(css.utilities_css().contains(".slide-in-from-left{--una-enter-translate-x:-100%;}"));
//! ```

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::config::PresetOptions;
use crate::css::{escape_selector, Declarations, Keyframes, RuleOutput};
use crate::preflight::preflight_css;
use crate::rules::{animation_rules, collapsible_rules, keyframes_rule, Rule, RuleContext, RuleSet};
use crate::shortcuts::{animation_shortcuts, Shortcut, ShortcutItem};
use crate::theme::PresetTheme;
use crate::theme_vars::{generate_css_vars, ThemeScope};

/// Name the preset registers under.
pub const PRESET_NAME: &str = "unocss-preset-hyrd-ui";

/// How deeply shortcuts may nest inside other shortcuts.
pub const MAX_SHORTCUT_DEPTH: usize = 8;

/// Rules, shortcuts and theme for the hyrd UI library.
#[derive(Debug)]
pub struct Preset {
    options: PresetOptions,
    scope: ThemeScope,
    theme: PresetTheme,
    shortcuts: Vec<Shortcut>,
    rules: RuleSet,
}

/// A utility selector and its declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtilityRule {
    pub token: String,
    pub selector: String,
    pub declarations: Declarations,
}

impl UtilityRule {
    pub fn to_css(&self) -> String {
        format!("{}{{{}}}", self.selector, self.declarations.to_css_body())
    }
}

/// Output of [`Preset::generate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedCss {
    pub preflight: String,
    /// Keyframes pulled in by utilities, deduplicated by name.
    pub keyframes: Vec<Keyframes>,
    /// One entry per token that produced declarations, in input order.
    pub utilities: Vec<UtilityRule>,
    /// Tokens no shortcut or rule understood, including utilities named by
    /// a shortcut expansion.
    pub unmatched: Vec<String>,
}

impl GeneratedCss {
    /// Keyframes and utility rules, one per line.
    pub fn utilities_css(&self) -> String {
        self.keyframes
            .iter()
            .map(Keyframes::to_css)
            .chain(self.utilities.iter().map(UtilityRule::to_css))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The preflight followed by [`utilities_css`](Self::utilities_css).
    pub fn css(&self) -> String {
        let utilities = self.utilities_css();
        if utilities.is_empty() {
            return self.preflight.clone();
        }
        format!("{}\n{}\n", self.preflight, utilities)
    }
}

impl Preset {
    /// Builds the preset for `options` with the built-in rules and shortcuts.
    pub fn new(options: PresetOptions) -> Self {
        let mut rules: RuleSet = animation_rules().into_iter().collect();
        rules.extend(collapsible_rules());
        rules.push(keyframes_rule());

        Self {
            options,
            scope: ThemeScope::Root,
            theme: PresetTheme::hyrd(),
            shortcuts: animation_shortcuts(),
            rules,
        }
    }

    /// The preset with the built-in hyrd color theme.
    pub fn hyrd() -> Self {
        Self::new(PresetOptions::default())
    }

    /// Sets how theme variables are scoped in the preflight.
    pub fn with_scope(mut self, scope: ThemeScope) -> Self {
        self.scope = scope;
        self
    }

    /// Replaces the theme data.
    pub fn with_theme(mut self, theme: PresetTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Appends a rule after the built-in ones.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends a shortcut after the built-in ones.
    pub fn with_shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcuts.push(shortcut);
        self
    }

    pub fn name(&self) -> &'static str {
        PRESET_NAME
    }

    pub fn options(&self) -> &PresetOptions {
        &self.options
    }

    pub fn scope(&self) -> ThemeScope {
        self.scope
    }

    pub fn theme(&self) -> &PresetTheme {
        &self.theme
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext::new(&self.theme)
    }

    /// Resolves a token through the rules (not shortcuts).
    pub fn resolve(&self, token: &str) -> Option<RuleOutput> {
        self.rules.resolve(token, &self.context())
    }

    /// Expands a token through the first matching shortcut.
    pub fn expand(&self, token: &str) -> Option<Vec<ShortcutItem>> {
        let ctx = self.context();
        self.shortcuts.iter().find_map(|s| s.expand(token, &ctx))
    }

    /// The theme variable blocks.
    pub fn css_vars(&self) -> String {
        generate_css_vars(&self.options, self.scope)
    }

    pub fn preflight(&self) -> String {
        preflight_css(&self.options, self.scope)
    }

    /// Autocomplete templates from shortcuts, then rules.
    pub fn autocomplete(&self) -> Vec<&str> {
        self.shortcuts
            .iter()
            .flat_map(|s| s.meta().autocomplete.iter().map(String::as_str))
            .chain(self.rules.autocomplete())
            .collect()
    }

    /// Generates CSS for `tokens`.
    ///
    /// Tokens are trimmed and deduplicated. Shortcuts are tried before
    /// rules; a shortcut's utilities are expanded (when they are shortcuts
    /// themselves) or resolved through the rules, and merged onto the
    /// shortcut's own selector. Utilities that resolve to nothing are
    /// reported in [`GeneratedCss::unmatched`].
    pub fn generate<I, S>(&self, tokens: I) -> GeneratedCss
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = GeneratedCss {
            preflight: self.preflight(),
            ..GeneratedCss::default()
        };
        let mut seen = HashSet::new();

        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() || !seen.insert(token.to_string()) {
                continue;
            }

            let declarations = if let Some(items) = self.expand(token) {
                let mut merged = Declarations::new();
                self.apply_shortcut_items(items, 1, &mut merged, &mut out);
                Some(merged)
            } else {
                match self.resolve(token) {
                    Some(RuleOutput::Declarations(decls)) => Some(decls),
                    Some(RuleOutput::Keyframes(kf)) => {
                        push_keyframes(&mut out, kf);
                        None
                    }
                    None => {
                        push_unmatched(&mut out, token);
                        None
                    }
                }
            };

            if let Some(declarations) = declarations.filter(|d| !d.is_empty()) {
                out.utilities.push(UtilityRule {
                    token: token.to_string(),
                    selector: format!(".{}", escape_selector(token)),
                    declarations,
                });
            }
        }

        out
    }

    /// Folds a shortcut expansion into `merged`. Utilities that are
    /// shortcuts themselves expand in place, up to [`MAX_SHORTCUT_DEPTH`].
    fn apply_shortcut_items(
        &self,
        items: Vec<ShortcutItem>,
        depth: usize,
        merged: &mut Declarations,
        out: &mut GeneratedCss,
    ) {
        for item in items {
            let utility = match item {
                ShortcutItem::Declarations(decls) => {
                    merged.extend(decls);
                    continue;
                }
                ShortcutItem::Utility(utility) => utility,
            };

            if depth < MAX_SHORTCUT_DEPTH {
                if let Some(nested) = self.expand(&utility) {
                    self.apply_shortcut_items(nested, depth + 1, merged, out);
                    continue;
                }
            }

            match self.resolve(&utility) {
                Some(RuleOutput::Declarations(decls)) => merged.extend(decls),
                Some(RuleOutput::Keyframes(kf)) => push_keyframes(out, kf),
                None => {
                    debug!(utility = %utility, depth, "shortcut utility did not resolve");
                    push_unmatched(out, &utility);
                }
            }
        }
    }
}

fn push_unmatched(out: &mut GeneratedCss, token: &str) {
    if !out.unmatched.iter().any(|t| t == token) {
        out.unmatched.push(token.to_string());
    }
}

fn push_keyframes(out: &mut GeneratedCss, keyframes: Keyframes) {
    if !out.keyframes.iter().any(|k| k.name == keyframes.name) {
        out.keyframes.push(keyframes);
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::hyrd()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_rules() {
        let preset = Preset::hyrd();
        let out = preset.resolve("fade-in").unwrap();
        assert_eq!(
            out.declarations().unwrap().get("--una-enter-opacity"),
            Some("0%")
        );
        assert!(preset.resolve("animate-accordion-up").is_some());
        assert!(preset.resolve("animate-in").is_none());
    }

    #[test]
    fn test_generate_shortcut_merges_and_hoists_keyframes() {
        let preset = Preset::hyrd();
        let css = preset.generate(["animate-in", "animate-in", "fade-in-50"]);
        assert_eq!(css.keyframes.len(), 1);
        assert_eq!(css.keyframes[0].name, "una-in");
        assert_eq!(css.utilities.len(), 2);
        assert_eq!(css.utilities[0].selector, ".animate-in");
        assert_eq!(
            css.utilities[0].declarations.get("animation-name"),
            Some("una-in")
        );
        assert!(css.unmatched.is_empty());
    }

    #[test]
    fn test_generate_escapes_selectors() {
        let css = Preset::hyrd().generate(["slide-out-to-bottom-50%"]);
        assert_eq!(
            css.utilities[0].to_css(),
            ".slide-out-to-bottom-50\\%{--una-exit-translate-y:50%;}"
        );
    }

    #[test]
    fn test_generate_keyframes_utility_has_no_selector() {
        let css = Preset::hyrd().generate(["keyframes-una-out"]);
        assert!(css.utilities.is_empty());
        assert_eq!(css.keyframes.len(), 1);
        assert!(css.utilities_css().starts_with("@keyframes una-out{to{"));
    }

    #[test]
    fn test_generate_reports_unmatched() {
        let css = Preset::hyrd().generate(["  ", "bogus", "slide-in-from-left-sideways"]);
        assert_eq!(css.unmatched, vec!["bogus", "slide-in-from-left-sideways"]);
        assert!(css.utilities_css().is_empty());
        assert_eq!(css.css(), css.preflight);
    }

    #[test]
    fn test_generate_expands_nested_shortcuts() {
        let preset = Preset::hyrd().with_shortcut(
            Shortcut::new(r"^dialog-in$", |_, _| {
                Some(vec![
                    ShortcutItem::Utility("animate-in".into()),
                    ShortcutItem::Utility("fade-in".into()),
                    ShortcutItem::Utility("wobble".into()),
                ])
            })
            .unwrap(),
        );
        let css = preset.generate(["dialog-in"]);

        assert_eq!(css.keyframes.len(), 1);
        assert_eq!(css.keyframes[0].name, "una-in");
        assert_eq!(css.utilities.len(), 1);
        let decls = &css.utilities[0].declarations;
        assert_eq!(decls.get("animation-name"), Some("una-in"));
        assert_eq!(decls.get("animation-duration"), Some("150ms"));
        // fade-in comes after animate-in's reset and overrides it
        assert_eq!(decls.get("--una-enter-opacity"), Some("0%"));
        assert_eq!(css.unmatched, vec!["wobble"]);
    }

    #[test]
    fn test_generate_self_referencing_shortcut_terminates() {
        let preset = Preset::hyrd().with_shortcut(
            Shortcut::new(r"^spin-forever$", |_, _| {
                Some(vec![ShortcutItem::Utility("spin-forever".into())])
            })
            .unwrap(),
        );
        let css = preset.generate(["spin-forever"]);
        assert!(css.utilities.is_empty());
        assert_eq!(css.unmatched, vec!["spin-forever"]);
    }

    #[test]
    fn test_custom_rule_runs_after_builtins() {
        let preset = Preset::hyrd().with_rule(
            Rule::new(r"^fade-(.+)$", |_, _| {
                Some(Declarations::new().with("custom", "1").into())
            })
            .unwrap(),
        );
        // builtin wins for fade-in
        assert!(preset
            .resolve("fade-in")
            .unwrap()
            .declarations()
            .unwrap()
            .get("custom")
            .is_none());
        // custom catches what builtins decline
        assert!(preset.resolve("fade-sideways").is_some());
    }

    #[test]
    fn test_autocomplete_starts_with_shortcuts() {
        let preset = Preset::hyrd();
        let hints = preset.autocomplete();
        assert_eq!(hints[0], "animate-in");
        assert_eq!(hints[1], "animate-out");
        assert!(hints.contains(&"fade-(in|out)-<percent>"));
        assert!(hints.contains(&"slide-in-from-(t|b|l|r|top|bottom|left|right)-full"));
    }

    #[test]
    fn test_named_scope_css_vars() {
        let preset = Preset::hyrd().with_scope(ThemeScope::Named);
        assert!(preset.css_vars().starts_with(".theme-hyrd {"));
        assert!(preset.preflight().contains(".dark .theme-hyrd {"));
    }

    #[test]
    fn test_preset_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Preset>();
    }
}
