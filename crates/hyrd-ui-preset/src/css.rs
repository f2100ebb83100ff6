//! CSS output primitives shared by rules, shortcuts and the generator.
//!
//! Rules never build stylesheet text directly. They return a [`RuleOutput`],
//! which is either an ordered list of declarations for the utility's own
//! selector or a `@keyframes` at-rule that the generator hoists to the top
//! of the stylesheet.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// An ordered list of `property: value` pairs.
///
/// Order is preserved so that generated CSS is stable and matches the
/// order handlers declared their properties in. Setting a property that is
/// already present replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    /// Creates an empty declaration list.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a declaration, returning `self` for chaining.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a declaration, replacing any previous value for the property.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Returns the value for `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Appends every declaration from `other`, later values winning.
    pub fn extend(&mut self, other: Declarations) {
        for (property, value) in other.entries {
            self.set(property, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(property, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Renders the declarations as a rule body: `a:1;b:2;`.
    pub fn to_css_body(&self) -> String {
        self.entries
            .iter()
            .map(|(p, v)| format!("{}:{};", p, v))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut decls = Declarations::new();
        for (property, value) in iter {
            decls.set(property, value);
        }
        decls
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, value) in &self.entries {
            map.serialize_entry(property, value)?;
        }
        map.end()
    }
}

/// A named `@keyframes` block.
///
/// The body is stored verbatim, braces included: `{from{opacity:0}}`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Keyframes {
    pub name: String,
    pub body: String,
}

impl Keyframes {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Renders the full at-rule.
    pub fn to_css(&self) -> String {
        format!("@keyframes {}{}", self.name, self.body)
    }
}

/// What a matching rule produces.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "css", rename_all = "snake_case")]
pub enum RuleOutput {
    /// Declarations for the utility's own selector.
    Declarations(Declarations),
    /// A keyframes at-rule with no selector of its own.
    Keyframes(Keyframes),
}

impl RuleOutput {
    /// Returns the declarations, if this output carries any.
    pub fn declarations(&self) -> Option<&Declarations> {
        match self {
            RuleOutput::Declarations(decls) => Some(decls),
            RuleOutput::Keyframes(_) => None,
        }
    }

    /// Returns the keyframes, if this output is an at-rule.
    pub fn keyframes(&self) -> Option<&Keyframes> {
        match self {
            RuleOutput::Keyframes(kf) => Some(kf),
            RuleOutput::Declarations(_) => None,
        }
    }
}

impl From<Declarations> for RuleOutput {
    fn from(decls: Declarations) -> Self {
        RuleOutput::Declarations(decls)
    }
}

impl From<Keyframes> for RuleOutput {
    fn from(kf: Keyframes) -> Self {
        RuleOutput::Keyframes(kf)
    }
}

/// Escapes a string for use as a CSS identifier, following `CSS.escape`.
///
/// Used both for class selectors built from utility tokens and for custom
/// property names coming from `$name` arguments.
pub fn escape_selector(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());

    for (index, &ch) in chars.iter().enumerate() {
        let code = ch as u32;
        if code == 0 {
            out.push('\u{FFFD}');
        } else if (0x01..=0x1F).contains(&code)
            || code == 0x7F
            || (index == 0 && ch.is_ascii_digit())
            || (index == 1 && ch.is_ascii_digit() && chars[0] == '-')
        {
            out.push_str(&format!("\\{:x} ", code));
        } else if index == 0 && ch == '-' && chars.len() == 1 {
            out.push_str("\\-");
        } else if code >= 0x80 || ch == '-' || ch == '_' || ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else {
            out.push('\\');
            out.push(ch);
        }
    }

    out
}
