//! Syntax error codes and the error values reported to listeners.
//!
//! The parser never aborts on a syntax error. Errors travel internally as
//! [`ParseError`] values through `Result`; the smallest enclosing group or
//! argument turns them into a [`LatexSyntaxError`], hands that to the
//! caller's listener and substitutes an error atom.

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};
use thiserror::Error;

use crate::types::{SourceLocation, Token};

/// The closed set of syntax conditions the parser can report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter, EnumCount,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ParseErrorCode {
    /// A command that is neither a macro, a function nor a symbol.
    UnknownCommand,
    /// A command that exists but is not valid in the current mode.
    InvalidCommand,
    /// A `{` without matching `}`, or the reverse.
    UnbalancedBraces,
    /// `\begin{name}` with an unknown `name`.
    UnknownEnvironment,
    /// `\begin` without matching `\end`, or a mismatched `\end`.
    UnbalancedEnvironment,
    /// `$`, `$$`, `\(` or `\[` without its closing counterpart.
    UnbalancedModeShift,
    /// A required argument is missing.
    MissingArgument,
    /// More than one infix command (`\over`, `\choose`, ...) in a group, or
    /// a duplicate superscript or subscript.
    TooManyInfixCommands,
    /// A `string` argument contained a command.
    UnexpectedCommandInString,
    /// A dimension without a recognized unit.
    MissingUnit,
    /// A token that is not a valid delimiter where one is required.
    UnexpectedDelimiter,
    /// A token that cannot appear here.
    UnexpectedToken,
    /// The input ended in the middle of a construct.
    UnexpectedEndOfString,
    /// `` ` `` not followed by a letter or single-token command.
    ImproperAlphabeticConstant,
    /// Macro expansion or group nesting exceeded the configured limit.
    RecursionLimit,
}

/// A syntax error as seen by the caller's listener.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}{}", fmt_arg(.arg.as_deref()))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatexSyntaxError {
    /// What went wrong.
    pub code: ParseErrorCode,
    /// The offending command, token or argument, when there is one.
    pub arg: Option<String>,
    /// The LaTeX being parsed.
    pub latex: Option<String>,
    /// Source text preceding the error.
    pub before: Option<String>,
    /// Source text following the error.
    pub after: Option<String>,
}

fn fmt_arg(arg: Option<&str>) -> String {
    arg.map(|a| format!(" ({a})")).unwrap_or_default()
}

/// Callback invoked once per reported syntax error.
pub type ErrorListener<'a> = dyn FnMut(LatexSyntaxError) + 'a;

/// Internal parse failure, converted to a [`LatexSyntaxError`] where it is
/// recovered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}{}", fmt_arg(.arg.as_deref()))]
pub struct ParseError {
    /// What went wrong.
    pub code: ParseErrorCode,
    /// The offending command, token or argument, when there is one.
    pub arg: Option<String>,
    /// Where it went wrong.
    pub loc: Option<SourceLocation>,
}

impl ParseError {
    /// Creates an error with no argument or location.
    #[must_use]
    pub const fn new(code: ParseErrorCode) -> Self {
        Self {
            code,
            arg: None,
            loc: None,
        }
    }

    /// Creates an error pointing at `token`, using its text as the argument.
    #[must_use]
    pub fn at(code: ParseErrorCode, token: &Token) -> Self {
        let arg = (!token.is_eof()).then(|| token.to_string());
        Self {
            code,
            arg,
            loc: token.loc,
        }
    }

    /// Replaces the argument.
    #[must_use]
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    /// Replaces the location.
    #[must_use]
    pub const fn with_loc(mut self, loc: Option<SourceLocation>) -> Self {
        self.loc = loc;
        self
    }

    /// Builds the listener payload, splitting `input` around the error
    /// location.
    #[must_use]
    pub fn to_syntax_error(&self, input: &str) -> LatexSyntaxError {
        let (before, after) = self
            .loc
            .and_then(|loc| {
                Some((
                    input.get(..loc.start)?.to_owned(),
                    input.get(loc.end..)?.to_owned(),
                ))
            })
            .unzip();
        LatexSyntaxError {
            code: self.code,
            arg: self.arg.clone(),
            latex: Some(input.to_owned()),
            before,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TokenKind;
    use core::str::FromStr as _;
    use strum::IntoEnumIterator as _;

    #[test]
    fn codes_round_trip_through_their_names() {
        assert_eq!(ParseErrorCode::COUNT, 15);
        for code in ParseErrorCode::iter() {
            assert_eq!(ParseErrorCode::from_str(code.as_ref()), Ok(code));
        }
        assert_eq!(
            ParseErrorCode::UnexpectedCommandInString.to_string(),
            "unexpected-command-in-string"
        );
    }

    #[test]
    fn syntax_error_splits_source() {
        let token = Token::new(
            TokenKind::Command("\\foo".to_owned()),
            Some(SourceLocation::new(2, 6)),
        );
        let err = ParseError::at(ParseErrorCode::UnknownCommand, &token).to_syntax_error("x+\\foo+y");
        assert_eq!(err.arg.as_deref(), Some("\\foo"));
        assert_eq!(err.before.as_deref(), Some("x+"));
        assert_eq!(err.after.as_deref(), Some("+y"));
        assert_eq!(err.to_string(), "unknown-command (\\foo)");
    }
}
