//! Base CSS emitted ahead of any utility.

use crate::config::PresetOptions;
use crate::theme_vars::{generate_css_vars, ThemeScope};

const COLLAPSIBLE_KEYFRAMES: &str = "\
@keyframes shadcn-down { from{ height: 0 } to { height: var(--radix-accordion-content-height)} }
@keyframes shadcn-up { from{ height: var(--radix-accordion-content-height)} to { height: 0 } }
@keyframes shadcn-collapsible-down { from{ height: 0 } to { height: var(--radix-collapsible-content-height)} }
@keyframes shadcn-collapsible-up { from{ height: var(--radix-collapsible-content-height)} to { height: 0 } }";

const BASE_STYLES: &str = "\
* {
  border-color: hsl(var(--border));
}

body {
  color: hsl(var(--foreground));
  background: hsl(var(--background));
}";

/// Accordion/collapsible keyframes, the theme variable blocks and the base
/// border and body colors.
pub fn preflight_css(options: &PresetOptions, scope: ThemeScope) -> String {
    format!(
        "{}\n\n{}\n\n{}\n",
        COLLAPSIBLE_KEYFRAMES,
        generate_css_vars(options, scope),
        BASE_STYLES
    )
}
