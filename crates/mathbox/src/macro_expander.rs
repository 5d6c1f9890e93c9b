//! The macro expander, the "gullet" between the lexer and the parser.
//!
//! Tokens wait on a stack in reverse order: the next token is on top. The
//! parser pulls tokens one at a time; a command with an expanding macro
//! definition is replaced on the stack by its body, with the `#n`
//! parameters already substituted by the argument tokens that followed the
//! command. Nothing is expanded ahead of the parser.

use crate::lexer::Lexer;
use crate::macros::MacroDefinition;
use crate::types::{ParseError, ParseErrorCode, Settings, SourceLocation, Token, TokenKind};

/// Most expanded tokens that may wait on the stack at once. Expansions that
/// grow their own arguments hit this long before the expansion count.
const MAX_PENDING_TOKENS: usize = 1 << 16;

/// The tokens of one macro argument.
#[derive(Debug, Clone)]
pub struct MacroArg {
    /// The argument, in reading order, without its outer braces.
    pub tokens: Vec<Token>,
    /// First token read, which may be an opening brace.
    pub start: Token,
    /// Last token read, which may be a closing brace.
    pub end: Token,
}

/// A token waiting on the stack, and whether it came out of an expansion.
#[derive(Debug, Clone)]
struct Pending {
    token: Token,
    expanded: bool,
}

/// A call to a macro that is kept as a unit instead of being spliced in.
#[derive(Debug, Clone)]
pub struct MacroCall {
    /// The definition that was invoked.
    pub definition: MacroDefinition,
    /// Each argument's tokens, verbatim.
    pub args: Vec<Vec<Token>>,
    /// Span of the invocation, from the command to its last argument.
    pub loc: Option<SourceLocation>,
}

/// Expands macros until only non-macro tokens remain.
pub struct MacroExpander<'a> {
    settings: &'a Settings,
    lexer: Lexer<'a>,
    stack: Vec<Pending>,
    expansion_count: usize,
    exhausted: bool,
    popped: usize,
}

impl<'a> MacroExpander<'a> {
    /// Creates an expander reading `input`.
    #[must_use]
    pub fn new(input: &'a str, settings: &'a Settings) -> Self {
        Self {
            settings,
            lexer: Lexer::new(input),
            stack: Vec::new(),
            expansion_count: 0,
            exhausted: false,
            popped: 0,
        }
    }

    /// The source text.
    #[must_use]
    pub const fn input(&self) -> &'a str {
        self.lexer.input()
    }

    /// Looks up a macro by command name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&'a MacroDefinition> {
        self.settings.macros.get(name)
    }

    /// Puts a token back, so it is the next one read.
    pub fn push_token(&mut self, token: Token) {
        self.stack.push(Pending {
            token,
            expanded: false,
        });
    }

    /// Puts tokens back, given in reading order.
    pub fn push_tokens(&mut self, tokens: Vec<Token>, expanded: bool) {
        self.stack.extend(
            tokens
                .into_iter()
                .rev()
                .map(|token| Pending { token, expanded }),
        );
    }

    /// The next token, without consuming or expanding it.
    pub fn future(&mut self) -> &Token {
        if self.stack.is_empty() {
            let token = self.lexer.lex();
            self.push_token(token);
        }
        // the stack was just refilled
        &self.stack[self.stack.len() - 1].token
    }

    /// Number of tokens taken off the stack so far, expanded or not.
    #[must_use]
    pub const fn tokens_read(&self) -> usize {
        self.popped
    }

    fn pop_pending(&mut self) -> Pending {
        self.future();
        self.popped += 1;
        self.stack.pop().unwrap_or_else(|| Pending {
            token: Token::eof(None),
            expanded: false,
        })
    }

    /// Consumes and returns the next token, without expanding it.
    pub fn pop_token(&mut self) -> Token {
        self.pop_pending().token
    }

    /// Skips whitespace tokens.
    pub fn consume_spaces(&mut self) {
        while self.future().is_space() {
            self.stack.pop();
        }
    }

    /// Reads one undelimited macro argument: a single token, or a balanced
    /// `{...}` group whose outer braces are dropped.
    pub fn consume_arg(&mut self) -> Result<MacroArg, ParseError> {
        Ok(self.consume_pending_arg()?.0)
    }

    fn consume_pending_arg(&mut self) -> Result<(MacroArg, Vec<bool>), ParseError> {
        self.consume_spaces();
        let start = self.future().clone();
        if matches!(start.kind, TokenKind::Eof | TokenKind::EndGroup) {
            return Err(ParseError::at(ParseErrorCode::MissingArgument, &start));
        }

        let mut tokens = Vec::new();
        let mut flags = Vec::new();
        let mut depth = 0usize;
        let end = loop {
            let Pending { token, expanded } = self.pop_pending();
            match token.kind {
                TokenKind::BeginGroup => depth += 1,
                TokenKind::EndGroup => depth = depth.saturating_sub(1),
                TokenKind::Eof => {
                    // an unterminated group; leave the marker for the caller
                    self.push_token(token.clone());
                    return Err(ParseError::at(ParseErrorCode::UnbalancedBraces, &start));
                }
                _ => {}
            }
            tokens.push(token.clone());
            flags.push(expanded);
            if depth == 0 {
                break token;
            }
        };

        if matches!(start.kind, TokenKind::BeginGroup) {
            tokens.pop();
            flags.pop();
            if !tokens.is_empty() {
                tokens.remove(0);
                flags.remove(0);
            }
        }
        Ok((MacroArg { tokens, start, end }, flags))
    }

    /// Reads `count` undelimited arguments.
    pub fn consume_args(&mut self, count: usize) -> Result<Vec<Vec<Token>>, ParseError> {
        (0..count)
            .map(|_| self.consume_arg().map(|arg| arg.tokens))
            .collect()
    }

    /// Finds an argument without expanding it and stacks its tokens, followed
    /// by an end-of-input marker, so the parser can read it as a complete
    /// expression.
    ///
    /// An optional argument is an `[...]` group; `Ok(None)` means it was
    /// absent. Returns the span of the argument.
    pub fn scan_argument(
        &mut self,
        optional: bool,
    ) -> Result<Option<Option<SourceLocation>>, ParseError> {
        let (tokens, flags, start, end) = if optional {
            self.consume_spaces();
            if !self.future().is_literal('[') {
                return Ok(None);
            }
            let start = self.pop_token();
            let mut tokens = Vec::new();
            let mut flags = Vec::new();
            let mut depth = 0usize;
            let end = loop {
                let Pending { token, expanded } = self.pop_pending();
                match token.kind {
                    TokenKind::BeginGroup => depth += 1,
                    TokenKind::EndGroup if depth == 0 => {
                        self.push_token(token);
                        return Err(ParseError::at(ParseErrorCode::UnbalancedBraces, &start)
                            .with_arg("]"));
                    }
                    TokenKind::EndGroup => depth -= 1,
                    TokenKind::Literal(']') if depth == 0 => break token,
                    TokenKind::Eof => {
                        self.push_token(token);
                        return Err(ParseError::at(ParseErrorCode::UnexpectedEndOfString, &start)
                            .with_arg("]"));
                    }
                    _ => {}
                }
                tokens.push(token);
                flags.push(expanded);
            };
            (tokens, flags, start, end)
        } else {
            let (arg, flags) = self.consume_pending_arg()?;
            (arg.tokens, flags, arg.start, arg.end)
        };

        self.push_token(Token::eof(end.loc));
        self.stack.extend(
            tokens
                .into_iter()
                .zip(flags)
                .rev()
                .map(|(token, expanded)| Pending { token, expanded }),
        );
        Ok(Some(SourceLocation::merge(start.loc, end.loc)))
    }

    fn count_expansion(&mut self, name: &str, amount: usize) -> Result<(), ParseError> {
        self.expansion_count += amount;
        if self.expansion_count > self.settings.max_expand {
            log::debug!("expansion limit of {} reached at {name}", self.settings.max_expand);
            self.exhausted = true;
            return Err(ParseError::new(ParseErrorCode::RecursionLimit).with_arg(name));
        }
        Ok(())
    }

    fn check_pending(&mut self, name: &str, incoming: usize) -> Result<(), ParseError> {
        if self.stack.len() + incoming > MAX_PENDING_TOKENS {
            log::debug!(
                "expanding {name} would leave more than {MAX_PENDING_TOKENS} tokens pending"
            );
            self.exhausted = true;
            return Err(ParseError::new(ParseErrorCode::RecursionLimit).with_arg(name));
        }
        Ok(())
    }

    /// Whether a recursion limit was hit since expansions were last
    /// discarded.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Expands the next token once, if it is a macro.
    ///
    /// Macros flagged `expand = false` are only expanded when `force` is set.
    /// Returns the number of tokens the expansion produced, or `None` if the
    /// next token was left alone.
    pub fn expand_once(&mut self, force: bool) -> Result<Option<usize>, ParseError> {
        let Pending { token, expanded } = self.pop_pending();
        let definition = token
            .as_command()
            .and_then(|name| self.definition(name))
            .filter(|def| force || def.expand);
        let Some(definition) = definition else {
            self.stack.push(Pending { token, expanded });
            return Ok(None);
        };
        let name = token.to_string();
        if !expanded {
            // a token straight from the source starts a fresh budget
            self.expansion_count = 0;
        }
        self.count_expansion(&name, 1)?;

        let args = self.consume_args(usize::from(definition.args))?;
        let body = substitute(&definition.def, &args, token.loc);
        log::trace!("expanding {name} to {} token(s)", body.len());
        let len = body.len();
        self.check_pending(&name, len)?;
        self.push_tokens(body, true);
        Ok(Some(len))
    }

    /// Expands macros until the next token is not one, then consumes it.
    pub fn expand_next_token(&mut self) -> Result<Token, ParseError> {
        while self.expand_once(false)?.is_some() {}
        Ok(self.pop_token())
    }

    /// Fully expands `tokens`, including macros that are normally kept as
    /// units. The result is in reading order.
    pub fn expand_tokens(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        let floor = self.stack.len();
        self.push_tokens(tokens, false);
        let mut output = Vec::new();
        while self.stack.len() > floor {
            if self.expand_once(true)?.is_none()
                && let Some(Pending { token, .. }) = self.stack.pop()
            {
                output.push(token);
            }
        }
        Ok(output)
    }

    /// Drops the pending tokens produced by macro expansion, so a runaway
    /// expansion cannot be resumed.
    pub fn discard_expansions(&mut self) {
        let before = self.stack.len();
        while self
            .stack
            .last()
            .is_some_and(|pending| pending.expanded && !pending.token.is_eof())
        {
            self.stack.pop();
        }
        self.expansion_count = 0;
        self.exhausted = false;
        log::trace!("discarded {} expanded token(s)", before - self.stack.len());
    }

    /// Reads the arguments of a macro that is kept as a unit, and stacks its
    /// expansion followed by an end-of-input marker.
    ///
    /// Returns `None`, consuming nothing, if `token` does not name such a
    /// macro.
    pub fn begin_macro_call(&mut self, token: &Token) -> Result<Option<MacroCall>, ParseError> {
        let Some(definition) = token
            .as_command()
            .and_then(|name| self.definition(name))
            .filter(|def| !def.expand)
        else {
            return Ok(None);
        };
        self.expansion_count = 0;
        self.count_expansion(&token.to_string(), 1)?;

        let mut loc = token.loc;
        let mut args = Vec::with_capacity(usize::from(definition.args));
        for _ in 0..definition.args {
            let arg = self.consume_arg()?;
            loc = SourceLocation::merge(loc, arg.end.loc);
            args.push(arg.tokens);
        }
        let body = substitute(&definition.def, &args, token.loc);
        self.check_pending(&token.to_string(), body.len() + 1)?;
        self.push_token(Token::eof(loc));
        self.push_tokens(body, true);
        Ok(Some(MacroCall {
            definition: definition.clone(),
            args,
            loc,
        }))
    }
}

/// Tokenizes a macro body and replaces `#n` by the `n`th argument. Tokens of
/// the body take the location of the invocation.
fn substitute(body: &str, args: &[Vec<Token>], loc: Option<SourceLocation>) -> Vec<Token> {
    let mut result = Vec::new();
    for token in Lexer::new(body) {
        match token.kind {
            TokenKind::Argument(n) if n >= 1 => {
                if let Some(arg) = args.get(usize::from(n) - 1) {
                    result.extend(arg.iter().cloned());
                }
            }
            kind => result.push(Token::new(kind, loc)),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::{MacroDictionary, MacroEntry};

    fn settings(entries: &[(&str, &str)]) -> Settings {
        let macros = MacroDictionary::new(
            entries
                .iter()
                .map(|(name, body)| (*name, MacroEntry::from(*body))),
        );
        Settings::builder().macros(macros).build()
    }

    fn expand_all(input: &str, settings: &Settings) -> Result<String, ParseError> {
        let mut gullet = MacroExpander::new(input, settings);
        let mut out = Vec::new();
        loop {
            let token = gullet.expand_next_token()?;
            if token.is_eof() {
                break;
            }
            out.push(token);
        }
        Ok(crate::types::tokens_to_string(&out))
    }

    #[test]
    fn arguments_are_substituted() {
        let settings = settings(&[("pair", "(#1,#2)")]);
        assert_eq!(expand_all("\\pair{a}b", &settings), Ok("(a,b)".to_owned()));
        assert_eq!(expand_all("\\pair {x y}{\\alpha}", &settings), Ok("(x y,\\alpha)".to_owned()));
    }

    #[test]
    fn nested_macros_expand_lazily() {
        let settings = settings(&[("a", "\\b\\b"), ("b", "x")]);
        assert_eq!(expand_all("\\a+\\ne", &settings), Ok("xx+\\neq".to_owned()));
    }

    #[test]
    fn self_reference_hits_the_limit() {
        let settings = settings(&[("loop", "\\loop")]);
        let err = expand_all("\\loop", &settings).err();
        assert_eq!(err.map(|e| e.code), Some(ParseErrorCode::RecursionLimit));

        let settings = self::settings(&[("ping", "\\pong"), ("pong", "x\\ping")]);
        let err = expand_all("\\ping", &settings).err();
        assert_eq!(err.map(|e| e.code), Some(ParseErrorCode::RecursionLimit));
    }

    #[test]
    fn the_budget_restarts_for_each_source_token() {
        let settings = Settings::builder().max_expand(2).build();
        assert_eq!(
            expand_all("\\ne\\ne\\ne\\ne", &settings),
            Ok("\\neq\\neq\\neq\\neq".to_owned())
        );
    }

    #[test]
    fn growing_arguments_hit_the_limit() {
        let settings = settings(&[("g", "\\g{#1#1}")]);
        let mut gullet = MacroExpander::new("\\g{x}", &settings);
        let err = gullet.expand_next_token().err();
        assert_eq!(err.map(|e| e.code), Some(ParseErrorCode::RecursionLimit));
        assert!(gullet.is_exhausted());

        gullet.discard_expansions();
        assert!(!gullet.is_exhausted());
        assert!(gullet.pop_token().is_eof());
    }

    #[test]
    fn missing_macro_argument() {
        let settings = settings(&[("half", "\\frac{#1}{2}")]);
        let err = expand_all("\\half", &settings).err();
        assert_eq!(err.map(|e| e.code), Some(ParseErrorCode::MissingArgument));
    }

    #[test]
    fn scanned_arguments_end_with_a_marker() {
        let settings = Settings::default();
        let mut gullet = MacroExpander::new("{ab}c", &settings);
        assert_eq!(gullet.scan_argument(false), Ok(Some(Some(SourceLocation::new(0, 4)))));
        assert!(gullet.pop_token().is_literal('a'));
        assert!(gullet.pop_token().is_literal('b'));
        assert!(gullet.pop_token().is_eof());
        assert!(gullet.pop_token().is_literal('c'));

        let mut gullet = MacroExpander::new("x", &settings);
        assert_eq!(gullet.scan_argument(true), Ok(None));
    }

    #[test]
    fn kept_macros_expand_only_when_forced() {
        let settings = Settings::default();
        let mut gullet = MacroExpander::new("\\rd", &settings);
        assert_eq!(gullet.expand_next_token().map(|t| t.to_string()), Ok("\\rd".to_owned()));

        let mut gullet = MacroExpander::new("", &settings);
        let expanded = gullet.expand_tokens(vec![Token::command("\\rd", None)]);
        assert_eq!(
            expanded.map(|t| crate::types::tokens_to_string(&t)),
            Ok("\\mathrm{d}".to_owned())
        );
    }
}
