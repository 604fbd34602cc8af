//! Function Name Value Object
//!
//! A legal, lower-case identifier derived from an asset name. Every embedded
//! asset gets one accessor named after it in the generated module.

use std::fmt;

/// Sanitized identifier for an asset accessor.
///
/// Always matches `^[a-z_][a-z0-9_]*$` and never contains `__`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FuncName(String);

impl FuncName {
    /// Derive an identifier from a non-empty logical asset name.
    ///
    /// `CSS/Style-1.css` becomes `css_style_1_css`, `1abc` becomes `_1abc`.
    pub fn from_name(name: &str) -> Self {
        let lowered = name.to_lowercase();
        let mut out: String = lowered
            .chars()
            .map(|c| {
                if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        while out.contains("__") {
            out = out.replace("__", "_");
        }

        // Leading underscores only survive when they are all there is.
        let trimmed = out.trim_start_matches('_');
        if !trimmed.is_empty() {
            out = trimmed.to_string();
        } else if out.is_empty() {
            out.push('_');
        }

        if out.starts_with(|c: char| c.is_ascii_digit()) {
            out.insert(0, '_');
        }

        Self(out)
    }

    /// Check whether `s` already is a legal identifier of this shape.
    pub fn is_valid(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FuncName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FuncName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
