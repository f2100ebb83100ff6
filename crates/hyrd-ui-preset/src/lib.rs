//! # hyrd-ui-preset - Animation Utilities and Theme Variables
//!
//! `hyrd-ui-preset` is a preset for utility-first CSS generation. It
//! provides:
//!
//! - Enter/exit animation utilities (`fade-in-50`, `zoom-out-95`,
//!   `spin-in-90`, `slide-in-from-left-1/2`) that write `--una-*` custom
//!   properties read by the `una-in`/`una-out` keyframes
//! - `animate-in`/`animate-out` shortcuts that wire those keyframes up
//! - Accordion and collapsible animation utilities
//! - Light/dark theme color variables generated from a [`ColorTheme`]
//!
//! ## Quick Start
//!
//! ```rust
//! use hyrd_ui_preset::Preset;
//!
//! let preset = Preset::hyrd();
//!
//! let out = preset.resolve("slide-in-from-top-50%").unwrap();
//! let decls = out.declarations().unwrap();
//! assert_eq!(decls.get("--una-enter-translate-y"), Some("-50%"));
//!
//! // Unknown tokens are not errors, just no match
//! assert!(preset.resolve("slide-in-from-nowhere").is_none());
//! ```
//!
//! ## Resolution Model
//!
//! Rules are tried in order and the first one that produces output wins. A
//! rule whose pattern matches but whose argument makes no sense (say
//! `slide-in-t-sideways`) declines, and resolution moves on. When nothing
//! matches the result is `None`; resolution itself never fails.
//!
//! ## Theme Variables
//!
//! ```rust
//! use hyrd_ui_preset::{generate_css_vars, PresetOptions, ThemeScope};
//!
//! let css = generate_css_vars(&PresetOptions::default(), ThemeScope::Root);
//! assert!(css.starts_with(":root {\n  --background: 0 0% 100%;"));
//! assert!(css.contains("  --radius: 0.625rem;\n}\n\n.dark {"));
//! ```

pub mod config;
pub mod constants;
pub mod css;
mod error;
pub mod preflight;
mod preset;
pub mod rules;
pub mod shortcuts;
pub mod slide;
pub mod theme;
pub mod theme_vars;
pub mod units;

pub use config::PresetOptions;
pub use css::{escape_selector, Declarations, Keyframes, RuleOutput};
pub use error::{PresetError, Result};
pub use preflight::preflight_css;
pub use preset::{GeneratedCss, Preset, UtilityRule, MAX_SHORTCUT_DEPTH, PRESET_NAME};
pub use rules::{Rule, RuleContext, RuleMatch, RuleMeta, RuleSet};
pub use shortcuts::{Shortcut, ShortcutItem};
pub use slide::{handle_slide, normalize_direction, Axis, Direction, SlideResult};
pub use theme::{PresetTheme, ThemeColor};
pub use theme_vars::{
    generate_css_vars, ColorTheme, ThemeCssVars, ThemeScope, THEME_CSS_VAR_KEYS,
};
