//! Utility rules: token patterns mapped to CSS output.
//!
//! A [`Rule`] pairs a matcher with a handler. Rules live in an ordered
//! [`RuleSet`] and are tried first to last. A rule whose pattern matches but
//! whose handler returns `None` does not stop the search: the token simply
//! falls through to the next rule. Only when every rule declines does
//! resolution report no match.
//!
//! # Example
//!
//! ```rust
//! use hyrd_ui_preset::rules::{Rule, RuleContext, RuleSet};
//! use hyrd_ui_preset::{Declarations, PresetTheme};
//!
//! let mut rules = RuleSet::new();
//! rules.push(
//!     Rule::new(r"^blur-(\d+)$", |m, _| {
//!         let px = m.group(1)?;
//!         Some(Declarations::new().with("filter", format!("blur({}px)", px)).into())
//!     })
//!     .unwrap(),
//! );
//!
//! let theme = PresetTheme::default();
//! let ctx = RuleContext::new(&theme);
//! let out = rules.resolve("blur-4", &ctx).unwrap();
//! assert_eq!(out.declarations().unwrap().get("filter"), Some("blur(4px)"));
//! assert!(rules.resolve("blur-x", &ctx).is_none());
//! ```

mod animation;
mod keyframes;

use regex::Regex;
use tracing::{debug, trace};

use crate::css::RuleOutput;
use crate::error::Result;
use crate::theme::PresetTheme;

pub use animation::{animation_rules, fade_rules, slide_rules, spin_rules, zoom_rules};
pub use keyframes::{collapsible_rules, keyframes_rule};

type BoxedHandler =
    Box<dyn Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<RuleOutput> + Send + Sync>;

/// Read-only state handed to every rule handler.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub theme: &'a PresetTheme,
}

impl<'a> RuleContext<'a> {
    pub fn new(theme: &'a PresetTheme) -> Self {
        Self { theme }
    }
}

/// A successful pattern match against a token.
#[derive(Debug, Clone)]
pub struct RuleMatch<'t> {
    token: &'t str,
    groups: Vec<Option<&'t str>>,
}

impl<'t> RuleMatch<'t> {
    pub(crate) fn capture(regex: &Regex, token: &'t str) -> Option<Self> {
        let caps = regex.captures(token)?;
        let groups = caps
            .iter()
            .skip(1)
            .map(|g| g.map(|m| m.as_str()))
            .collect();
        Some(Self { token, groups })
    }

    /// The full token that matched.
    pub fn token(&self) -> &'t str {
        self.token
    }

    /// Capture group `index` (1-based, like regex groups). Empty captures
    /// are reported as absent.
    pub fn group(&self, index: usize) -> Option<&'t str> {
        index
            .checked_sub(1)
            .and_then(|i| self.groups.get(i).copied().flatten())
            .filter(|g| !g.is_empty())
    }
}

/// Extra information attached to a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMeta {
    /// Completion templates for editor tooling, e.g. `fade-(in|out)-<percent>`.
    pub autocomplete: Vec<String>,
}

enum Matcher {
    Exact(String),
    Pattern(Regex),
}

/// A single utility rule.
pub struct Rule {
    matcher: Matcher,
    handler: BoxedHandler,
    meta: RuleMeta,
}

impl Rule {
    /// Creates a rule from a regular expression and a handler.
    ///
    /// # Errors
    ///
    /// Returns [`PresetError::InvalidPattern`](crate::PresetError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn new<F>(pattern: &str, handler: F) -> Result<Self>
    where
        F: Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<RuleOutput> + Send + Sync + 'static,
    {
        Ok(Self::from_regex(Regex::new(pattern)?, handler))
    }

    /// Creates a rule from an already compiled expression.
    pub fn from_regex<F>(regex: Regex, handler: F) -> Self
    where
        F: Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<RuleOutput> + Send + Sync + 'static,
    {
        Self::build(Matcher::Pattern(regex), handler)
    }

    /// Creates a rule that matches one exact token and always yields `output`.
    pub fn fixed(name: impl Into<String>, output: impl Into<RuleOutput>) -> Self {
        let output = output.into();
        Self::build(Matcher::Exact(name.into()), move |_, _| Some(output.clone()))
    }

    fn build<F>(matcher: Matcher, handler: F) -> Self
    where
        F: Fn(&RuleMatch<'_>, &RuleContext<'_>) -> Option<RuleOutput> + Send + Sync + 'static,
    {
        Self {
            matcher,
            handler: Box::new(handler),
            meta: RuleMeta::default(),
        }
    }

    /// Attaches autocomplete templates, returning `self` for chaining.
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

    /// Matches the token against this rule's pattern without running the handler.
    pub fn matches<'t>(&self, token: &'t str) -> Option<RuleMatch<'t>> {
        match &self.matcher {
            Matcher::Exact(name) => (name == token).then(|| RuleMatch {
                token,
                groups: Vec::new(),
            }),
            Matcher::Pattern(regex) => RuleMatch::capture(regex, token),
        }
    }

    /// Matches and runs the handler.
    pub fn apply(&self, token: &str, ctx: &RuleContext<'_>) -> Option<RuleOutput> {
        let m = self.matches(token)?;
        (self.handler)(&m, ctx)
    }

    fn describe(&self) -> &str {
        match &self.matcher {
            Matcher::Exact(name) => name,
            Matcher::Pattern(regex) => regex.as_str(),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("matcher", &self.describe())
            .field("meta", &self.meta)
            .finish()
    }
}

/// An ordered collection of rules, evaluated first match wins.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Resolves a token against the rules in order.
    ///
    /// Returns the output of the first rule that both matches and produces
    /// a value, or `None` when no rule does.
    pub fn resolve(&self, token: &str, ctx: &RuleContext<'_>) -> Option<RuleOutput> {
        for rule in &self.rules {
            if let Some(output) = rule.apply(token, ctx) {
                trace!(token, rule = rule.describe(), "rule matched");
                return Some(output);
            }
        }
        debug!(token, "no rule matched");
        None
    }

    /// All autocomplete templates, in rule order.
    pub fn autocomplete(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .flat_map(|r| r.meta.autocomplete.iter().map(String::as_str))
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<Rule> for RuleSet {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in rule pattern is valid")
}
