//! The lexer turns LaTeX source into [`Token`]s.
//!
//! It only looks at lexical shape: no command is interpreted and no error is
//! raised here. Tokens are produced lazily, one per call to [`Lexer::lex`],
//! and lexing can restart from any byte position with
//! [`Lexer::set_position`].

use crate::types::{SourceLocation, Token, TokenKind};

fn match_space(s: &str) -> Option<usize> {
    let len = s
        .chars()
        .take_while(|c| matches!(*c, ' ' | '\r' | '\n' | '\t'))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

/// Matches a comment up to, but not including, the end of the line.
fn match_comment(s: &str) -> Option<usize> {
    s.starts_with('%').then(|| s.find('\n').unwrap_or(s.len()))
}

/// Matches `\` followed by one or more letters and an optional `*`.
fn match_control_word(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let letters = rest
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .count();
    if letters == 0 {
        return None;
    }
    let star = usize::from(rest[letters..].starts_with('*'));
    Some(1 + letters + star)
}

fn match_control_symbol(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    if chars.next()? != '\\' {
        return None;
    }
    chars.next().map(|c| 1 + c.len_utf8())
}

/// Matches `#1`..`#9`, `#0` and `#?`.
fn match_parameter(s: &str) -> Option<TokenKind> {
    let mut chars = s.chars();
    if chars.next()? != '#' {
        return None;
    }
    match chars.next()? {
        '?' => Some(TokenKind::Placeholder),
        c => c
            .to_digit(10)
            .map(|n| TokenKind::Argument(n as u8)),
    }
}

/// The tokenizer.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    last_index: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            last_index: 0,
        }
    }

    /// The text being tokenized.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.input
    }

    /// Tokenizes and returns the next token. Returns an [`TokenKind::Eof`]
    /// token, repeatedly, once the input is exhausted.
    pub fn lex(&mut self) -> Token {
        loop {
            let start = self.last_index;
            let Some(slice) = self.input.get(start..).filter(|s| !s.is_empty()) else {
                return Token::eof(Some(SourceLocation::new(start, start)));
            };

            // Comments vanish, along with the newline that ends them.
            if let Some(len) = match_comment(slice) {
                self.last_index += len;
                if let Some(len) = match_space(&self.input[self.last_index..]) {
                    self.last_index += len;
                }
                continue;
            }

            let (kind, len) = Self::next_kind(slice);
            self.last_index += len;
            let token = Token::new(kind, Some(SourceLocation::new(start, self.last_index)));

            // A control word absorbs the whitespace that follows it.
            if token.is_control_word()
                && let Some(space) = match_space(&self.input[self.last_index..])
            {
                self.last_index += space;
            }
            return token;
        }
    }

    fn next_kind(slice: &str) -> (TokenKind, usize) {
        if let Some(len) = match_space(slice) {
            return (TokenKind::Space, len);
        }
        if slice.starts_with("$$") {
            return (TokenKind::DisplayMath, 2);
        }
        if let Some(len) = match_control_word(slice) {
            return (TokenKind::Command(slice[..len].to_owned()), len);
        }
        if let Some(len) = match_control_symbol(slice) {
            let kind = match &slice[..len] {
                "\\(" => TokenKind::BeginMath { display: false },
                "\\[" => TokenKind::BeginMath { display: true },
                "\\)" => TokenKind::EndMath { display: false },
                "\\]" => TokenKind::EndMath { display: true },
                name => TokenKind::Command(name.to_owned()),
            };
            return (kind, len);
        }
        if let Some(kind) = match_parameter(slice) {
            return (kind, 2);
        }
        if slice.starts_with("##") {
            return (TokenKind::Literal('#'), 2);
        }
        // `slice` is non-empty
        let ch = slice.chars().next().unwrap_or('\u{fffd}');
        let kind = match ch {
            '{' => TokenKind::BeginGroup,
            '}' => TokenKind::EndGroup,
            '$' => TokenKind::InlineMath,
            c => TokenKind::Literal(c),
        };
        (kind, ch.len_utf8())
    }

    /// Current byte position in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.last_index
    }

    /// Restarts lexing from byte position `last_index`.
    pub const fn set_position(&mut self, last_index: usize) {
        self.last_index = last_index;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.lex();
        (!token.is_eof()).then_some(token)
    }
}

/// Tokenizes all of `input`, without the trailing end-of-input token.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn cmd(name: &str) -> TokenKind {
        TokenKind::Command(name.to_owned())
    }

    #[test]
    fn control_words_and_symbols() {
        assert_eq!(
            kinds("\\frac12\\,\\operatorname*"),
            vec![
                cmd("\\frac"),
                TokenKind::Literal('1'),
                TokenKind::Literal('2'),
                cmd("\\,"),
                cmd("\\operatorname*"),
            ]
        );
    }

    #[test]
    fn control_word_swallows_following_space() {
        assert_eq!(
            kinds("\\alpha  x y"),
            vec![
                cmd("\\alpha"),
                TokenKind::Literal('x'),
                TokenKind::Space,
                TokenKind::Literal('y'),
            ]
        );
    }

    #[test]
    fn groups_shifts_and_parameters() {
        assert_eq!(
            kinds("{$$#1#?\\(}$##"),
            vec![
                TokenKind::BeginGroup,
                TokenKind::DisplayMath,
                TokenKind::Argument(1),
                TokenKind::Placeholder,
                TokenKind::BeginMath { display: false },
                TokenKind::EndGroup,
                TokenKind::InlineMath,
                TokenKind::Literal('#'),
            ]
        );
    }

    #[test]
    fn bracketed_shifts_know_their_side() {
        assert_eq!(
            kinds("\\(\\)\\[\\]"),
            vec![
                TokenKind::BeginMath { display: false },
                TokenKind::EndMath { display: false },
                TokenKind::BeginMath { display: true },
                TokenKind::EndMath { display: true },
            ]
        );
    }

    #[test]
    fn comments_are_dropped() {
        assert_eq!(
            kinds("x% comment\ny"),
            vec![TokenKind::Literal('x'), TokenKind::Literal('y')]
        );
    }

    #[test]
    fn tokens_carry_locations_and_lexing_restarts() {
        let mut lexer = Lexer::new("ab\\cd");
        assert_eq!(lexer.lex().loc, Some(SourceLocation::new(0, 1)));
        let second = lexer.lex();
        lexer.set_position(1);
        assert_eq!(lexer.lex(), second);
        assert_eq!(lexer.lex().loc, Some(SourceLocation::new(2, 5)));
        assert!(lexer.lex().is_eof());
        assert!(lexer.lex().is_eof());
    }

    #[test]
    fn trailing_backslash_is_a_literal() {
        assert_eq!(kinds("\\"), vec![TokenKind::Literal('\\')]);
    }
}
