use core::fmt;

use crate::types::SourceLocation;

/// The lexical shape of a [`Token`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Any single character that is not otherwise special.
    Literal(char),
    /// A control sequence, stored with its leading backslash (`\frac`, `\,`).
    Command(String),
    /// `{`
    BeginGroup,
    /// `}`
    EndGroup,
    /// `$`, which both opens and closes inline math.
    InlineMath,
    /// `$$`, which both opens and closes display math.
    DisplayMath,
    /// `\(`, or `\[` when `display` is set.
    BeginMath {
        /// Whether this opens display math.
        display: bool,
    },
    /// `\)`, or `\]` when `display` is set.
    EndMath {
        /// Whether this closes display math.
        display: bool,
    },
    /// A numbered macro parameter, `#1` to `#9`. `#0` refers to the current
    /// selection when a macro body is inserted by an editor.
    Argument(u8),
    /// `#?`, a generic placeholder.
    Placeholder,
    /// A run of whitespace.
    Space,
    /// End of input, or the end of a spliced argument.
    Eof,
}

/// A single unit of parser input.
///
/// Tokens produced by the lexer carry the byte range they came from. Tokens
/// produced by macro expansion carry the range of the macro invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// What this token is.
    pub kind: TokenKind,
    /// Where it came from, if known.
    pub loc: Option<SourceLocation>,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, loc: Option<SourceLocation>) -> Self {
        Self { kind, loc }
    }

    /// Creates a command token; `name` includes the leading backslash.
    #[must_use]
    pub fn command(name: &str, loc: Option<SourceLocation>) -> Self {
        Self::new(TokenKind::Command(name.to_owned()), loc)
    }

    /// Creates a literal character token.
    #[must_use]
    pub const fn literal(ch: char, loc: Option<SourceLocation>) -> Self {
        Self::new(TokenKind::Literal(ch), loc)
    }

    /// The end-of-input token.
    #[must_use]
    pub const fn eof(loc: Option<SourceLocation>) -> Self {
        Self::new(TokenKind::Eof, loc)
    }

    /// The command name, if this is a command token.
    #[must_use]
    pub fn as_command(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Command(name) => Some(name),
            _ => None,
        }
    }

    /// The character, if this is a literal token.
    #[must_use]
    pub const fn as_literal(&self) -> Option<char> {
        match self.kind {
            TokenKind::Literal(ch) => Some(ch),
            _ => None,
        }
    }

    /// Returns `true` if this is the command `name`.
    #[must_use]
    pub fn is_command(&self, name: &str) -> bool {
        self.as_command() == Some(name)
    }

    /// Returns `true` if this is the literal `ch`.
    #[must_use]
    pub fn is_literal(&self, ch: char) -> bool {
        self.as_literal() == Some(ch)
    }

    /// Returns `true` for the end-of-input marker.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns `true` for whitespace.
    #[must_use]
    pub const fn is_space(&self) -> bool {
        matches!(self.kind, TokenKind::Space)
    }

    /// Returns `true` if this command is a control word (backslash followed
    /// by letters), as opposed to a control symbol such as `\,`.
    #[must_use]
    pub fn is_control_word(&self) -> bool {
        self.as_command()
            .and_then(|name| name.chars().nth(1))
            .is_some_and(|ch| ch.is_ascii_alphabetic())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenKind::Literal(ch) => write!(f, "{ch}"),
            TokenKind::Command(name) => f.write_str(name),
            TokenKind::BeginGroup => f.write_str("{"),
            TokenKind::EndGroup => f.write_str("}"),
            TokenKind::InlineMath => f.write_str("$"),
            TokenKind::DisplayMath => f.write_str("$$"),
            TokenKind::BeginMath { display: false } => f.write_str("\\("),
            TokenKind::BeginMath { display: true } => f.write_str("\\["),
            TokenKind::EndMath { display: false } => f.write_str("\\)"),
            TokenKind::EndMath { display: true } => f.write_str("\\]"),
            TokenKind::Argument(n) => write!(f, "#{n}"),
            TokenKind::Placeholder => f.write_str("#?"),
            TokenKind::Space => f.write_str(" "),
            TokenKind::Eof => Ok(()),
        }
    }
}

/// Serializes a token sequence back to LaTeX.
///
/// A space is inserted after a control word only when the next token is a
/// letter, which would otherwise be absorbed into the command name.
#[must_use]
pub fn tokens_to_string(tokens: &[Token]) -> String {
    let mut result = String::new();
    let mut after_control_word = false;
    for token in tokens {
        if after_control_word
            && token
                .as_literal()
                .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '*')
        {
            result.push(' ');
        }
        after_control_word = token.is_control_word();
        result.push_str(&token.to_string());
    }
    result
}
