//! Core type definitions shared by the tokenizer, parser and layout engine.

mod parse_error;
mod settings;
mod tokens;

use rapidhash::{RapidHashMap, RapidHashSet};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub use parse_error::{ErrorListener, LatexSyntaxError, ParseError, ParseErrorCode};
pub use settings::Settings;
pub use tokens::{Token, TokenKind, tokens_to_string};

/// Make it easier to switch between different hash backends.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
/// Alias for the default hash set.
pub type KeySet<K> = RapidHashSet<K>;

/// Parsing mode.
///
/// Math and text mode decide how characters are interpreted and which
/// commands are available. Latex mode keeps the source verbatim, one atom
/// per token, and is used for raw LaTeX editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Math mode, the default.
    #[default]
    Math,
    /// Text mode, as inside `\text{}`.
    Text,
    /// Verbatim LaTeX.
    Latex,
}

/// A byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl SourceLocation {
    /// Creates a location spanning `start..end`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the smallest location covering both `self` and `other`.
    #[must_use]
    pub fn range(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Merges two optional locations.
    #[must_use]
    pub fn merge(a: Option<Self>, b: Option<Self>) -> Option<Self> {
        match (a, b) {
            (Some(a), Some(b)) => Some(a.range(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// The source text covered by this location, if it lies within `input`.
    #[must_use]
    pub fn slice(self, input: &str) -> Option<&str> {
        input.get(self.start..self.end)
    }
}

/// The shape of an argument a command expects.
///
/// The parser dispatches to a sub-grammar for each shape. The string form
/// matches the names used in LaTeX package documentation (`balanced-string`,
/// `colspec`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ArgType {
    /// A math-mode group or single token.
    Math,
    /// A text-mode group.
    Text,
    /// Verbatim LaTeX, one atom per token.
    Latex,
    /// A dimension such as `3pt` or `-1.5em`.
    Dimen,
    /// A dimension with optional `plus` and `minus` components.
    Glue,
    /// A delimiter such as `(`, `\langle` or `.`.
    Delim,
    /// An array column specification such as `lc|r`.
    Colspec,
    /// An integer or decimal number, including `"` hex, `'` octal and
    /// `` ` `` alphabetic constants.
    Number,
    /// Literal characters with all macros expanded.
    String,
    /// Raw LaTeX between balanced braces.
    BalancedString,
    /// Everything up to the end of the enclosing group.
    Rest,
    /// `math` in math mode, `text` in text mode.
    Auto,
}

impl ArgType {
    /// The mode an argument of this type switches the parser into, if any.
    #[must_use]
    pub const fn mode(self, current: Mode) -> Mode {
        match self {
            Self::Math => Mode::Math,
            Self::Text => Mode::Text,
            Self::Latex => Mode::Latex,
            _ => current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr as _;

    #[test]
    fn arg_type_names_are_kebab_case() {
        assert_eq!(ArgType::BalancedString.as_ref(), "balanced-string");
        assert_eq!(ArgType::from_str("colspec"), Ok(ArgType::Colspec));
        assert_eq!(ArgType::Auto.to_string(), "auto");
    }

    #[test]
    fn locations_merge() {
        let a = SourceLocation::new(2, 4);
        let b = SourceLocation::new(7, 9);
        assert_eq!(a.range(b), SourceLocation::new(2, 9));
        assert_eq!(SourceLocation::merge(None, Some(b)), Some(b));
        assert_eq!(a.slice("0123456"), Some("23"));
    }
}
