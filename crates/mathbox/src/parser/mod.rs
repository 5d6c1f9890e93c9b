//! The recursive-descent parser.
//!
//! The parser pulls tokens from the [`MacroExpander`] one at a time and
//! builds an [`AtomTree`]. It never aborts: every syntax error is reported to
//! the caller's listener, the offending source becomes an error atom, and
//! parsing resumes with the next token.

mod args;
pub mod atom;
mod latex;

use phf::phf_set;

use crate::define_function::{Argument, FunctionContext, FunctionSpec};
use crate::macro_expander::MacroExpander;
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::symbols::{LIGATURES, MATH_SYMBOLS, OPERATORS, TEXT_SYMBOLS, math_char};
use crate::types::{
    ErrorListener, Mode, ParseError, ParseErrorCode, Settings, SourceLocation, Token, TokenKind,
    tokens_to_string,
};
use crate::units::{Dimension, DimensionUnit, Glue};
use atom::{AtomId, AtomKind, AtomTree, Limits, OperatorName, SpacingAmount};

/// Commands that end the expression they appear in.
const END_OF_EXPRESSION: phf::Set<&'static str> = phf_set! {
    "\\end",
    "\\right",
    "\\\\",
    "\\cr",
};

/// An infix command seen in the current expression.
struct Infix {
    spec: &'static FunctionSpec,
    token: Token,
    position: usize,
    args: Vec<Argument>,
}

/// The LaTeX parser.
///
/// A parser is single-use: create one per input with [`Parser::new`] and
/// consume it with [`Parser::parse`].
pub struct Parser<'a> {
    /// Current mode.
    pub mode: Mode,
    /// Token source.
    pub gullet: MacroExpander<'a>,
    /// Parse-time configuration.
    pub settings: &'a Settings,
    /// The tree being built.
    pub tree: AtomTree,
    /// Nesting depth of `\left`..`\right` pairs.
    pub leftright_depth: usize,
    listener: &'a mut ErrorListener<'a>,
    next_token: Option<Token>,
    depth: usize,
    consumed: usize,
    last_loc: Option<SourceLocation>,
    error_count: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for `input`. Syntax errors go to `listener`.
    #[must_use]
    pub fn new(input: &'a str, settings: &'a Settings, listener: &'a mut ErrorListener<'a>) -> Self {
        Self {
            mode: settings.default_mode,
            gullet: MacroExpander::new(input, settings),
            settings,
            tree: AtomTree::default(),
            leftright_depth: 0,
            listener,
            next_token: None,
            depth: 0,
            consumed: 0,
            last_loc: None,
            error_count: 0,
        }
    }

    /// Parses the whole input.
    #[must_use]
    pub fn parse(mut self) -> AtomTree {
        let input = self.gullet.input();
        log::debug!("parsing {} byte(s) in {} mode", input.len(), self.mode);
        let body = self.parse_until_eof();
        let root = self.tree.push(
            AtomKind::Group {
                body,
                braced: false,
            },
            self.mode,
            Some(SourceLocation::new(0, input.len())),
        );
        self.tree.set_root(root);
        log::debug!(
            "parsed {} atom(s) with {} error(s)",
            self.tree.len(),
            self.error_count
        );
        self.tree
    }

    /// The next token, after macro expansion, without consuming it.
    pub fn fetch(&mut self) -> Result<&Token, ParseError> {
        if self.next_token.is_none() {
            self.next_token = Some(self.gullet.expand_next_token()?);
        }
        Ok(self.next_token.get_or_insert_with(|| Token::eof(None)))
    }

    /// Consumes the token returned by the last [`Parser::fetch`].
    pub fn consume(&mut self) {
        if let Some(token) = self.next_token.take() {
            if token.loc.is_some() {
                self.last_loc = token.loc;
            }
            self.consumed += 1;
        }
    }

    /// Fetches and consumes the next token.
    pub fn next(&mut self) -> Result<Token, ParseError> {
        let token = self.fetch()?.clone();
        self.consume();
        Ok(token)
    }

    /// Returns a fetched but unconsumed token to the gullet, so the gullet
    /// can be read directly.
    pub fn unfetch(&mut self) {
        if let Some(token) = self.next_token.take() {
            self.gullet.push_token(token);
        }
    }

    /// Records that the gullet was read directly.
    pub(crate) fn note_consumed(&mut self, loc: Option<SourceLocation>) {
        if loc.is_some() {
            self.last_loc = loc;
        }
        self.consumed += 1;
    }

    /// Skips whitespace tokens.
    pub fn consume_spaces(&mut self) -> Result<(), ParseError> {
        while self.fetch()?.is_space() {
            self.consume();
        }
        Ok(())
    }

    /// Switches between math and text mode.
    pub const fn switch_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Span from `start` to the end of the last consumed token.
    #[must_use]
    pub fn span_from(&self, start: Option<SourceLocation>) -> Option<SourceLocation> {
        match (start, self.last_loc) {
            (Some(start), Some(last)) if last.end >= start.start => {
                Some(SourceLocation::new(start.start, last.end))
            }
            (start, _) => start,
        }
    }

    /// Adds an atom in the current mode.
    pub fn push(&mut self, kind: AtomKind, loc: Option<SourceLocation>) -> AtomId {
        self.tree.push(kind, self.mode, loc)
    }

    /// Hands an error to the listener.
    pub fn report(&mut self, err: &ParseError) {
        log::warn!("recovering from {err}");
        self.error_count += 1;
        let payload = err.to_syntax_error(self.gullet.input());
        (self.listener)(payload);
    }

    /// Enters one level of nesting.
    pub(crate) fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.settings.max_nesting {
            return Err(ParseError::new(ParseErrorCode::RecursionLimit)
                .with_loc(self.last_loc)
                .with_arg(format!("nesting deeper than {}", self.settings.max_nesting)));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting.
    pub(crate) const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn is_end_of_expression(&self, token: &Token, break_on: Option<&TokenKind>) -> bool {
        if break_on.is_some_and(|kind| *kind == token.kind) {
            return true;
        }
        match &token.kind {
            TokenKind::Eof | TokenKind::EndGroup => true,
            // a mismatched closer still ends the shift it was meant for
            TokenKind::EndMath { .. } => matches!(break_on, Some(TokenKind::EndMath { .. })),
            TokenKind::Literal('&') => self.mode != Mode::Latex,
            TokenKind::Command(name) => {
                self.mode != Mode::Latex && END_OF_EXPRESSION.contains(name.as_str())
            }
            _ => false,
        }
    }

    /// Parses a list of atoms up to the end of the current group, or up to a
    /// token of kind `break_on`. The terminating token is not consumed.
    ///
    /// Errors are recovered here: each is reported and replaced by an error
    /// atom, and parsing continues.
    pub fn parse_expression(&mut self, break_on: Option<&TokenKind>) -> Vec<AtomId> {
        let mut body = Vec::new();
        let mut infix: Option<Infix> = None;
        loop {
            let mark = self.mark();
            let start_loc = match self.fetch() {
                Ok(token) => token.loc,
                Err(err) => {
                    self.recover(&err, &mut body, mark, None);
                    continue;
                }
            };
            let mark = self.mark();
            match self.parse_step(&mut body, &mut infix, break_on) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => self.recover(&err, &mut body, mark, start_loc),
            }
        }

        if let Some(infix) = infix {
            match self.apply_infix(infix, &mut body) {
                Ok(frac) => body = vec![frac],
                Err(err) => {
                    self.report(&err);
                }
            }
        }
        if self.mode == Mode::Math && self.settings.smart_fence {
            body = self.smart_fences(body);
        }
        body
    }

    /// Parses one item of an expression. Returns `Ok(false)` at the end of
    /// the expression.
    fn parse_step(
        &mut self,
        body: &mut Vec<AtomId>,
        infix: &mut Option<Infix>,
        break_on: Option<&TokenKind>,
    ) -> Result<bool, ParseError> {
        if self.mode == Mode::Math {
            self.consume_spaces()?;
        }
        let token = self.fetch()?.clone();
        if self.is_end_of_expression(&token, break_on) {
            return Ok(false);
        }
        if self.mode == Mode::Latex {
            self.consume();
            let id = self.push(
                AtomKind::Latex {
                    value: token.to_string(),
                },
                token.loc,
            );
            body.push(id);
            if matches!(token.kind, TokenKind::BeginGroup) {
                if let Err(err) = self.enter() {
                    self.skip_group();
                    return Err(err);
                }
                // keep braces balanced inside verbatim runs
                body.extend(self.parse_expression(None));
                self.leave();
                let close = self.fetch()?.clone();
                if matches!(close.kind, TokenKind::EndGroup) {
                    self.consume();
                    body.push(self.push(AtomKind::Latex { value: "}".to_owned() }, close.loc));
                }
            }
            return Ok(true);
        }

        if let Some(spec) = token
            .as_command()
            .and_then(|name| Registry::global().functions.get(name))
            .filter(|spec| spec.props.infix)
        {
            self.consume();
            let (args, _) = self.parse_arguments(&token, &spec.props)?;
            if infix.is_some() {
                return Err(ParseError::at(ParseErrorCode::TooManyInfixCommands, &token));
            }
            *infix = Some(Infix {
                spec,
                token,
                position: body.len(),
                args,
            });
            return Ok(true);
        }

        if self.mode == Mode::Math {
            match &token.kind {
                TokenKind::Literal('^' | '_') => {
                    self.parse_script(body)?;
                    return Ok(true);
                }
                TokenKind::Literal('\'') => {
                    self.parse_primes(body)?;
                    return Ok(true);
                }
                TokenKind::Command(name) if name == "\\limits" || name == "\\nolimits" => {
                    self.consume();
                    return self.set_limits(body, &token).map(|()| true);
                }
                _ => {}
            }
        }

        if let Some(id) = self.parse_atom()? {
            body.push(id);
        }
        Ok(true)
    }

    /// Progress marker: tokens consumed by the parser and read from the
    /// gullet.
    fn mark(&self) -> (usize, usize) {
        (self.consumed, self.gullet.tokens_read())
    }

    fn recover(
        &mut self,
        err: &ParseError,
        body: &mut Vec<AtomId>,
        mark: (usize, usize),
        start_loc: Option<SourceLocation>,
    ) {
        self.report(err);
        if err.code == ParseErrorCode::RecursionLimit && self.gullet.is_exhausted() {
            self.unfetch();
            self.gullet.discard_expansions();
        }
        if self.mark() == mark {
            // make progress past the offending token
            match self.fetch() {
                Ok(token) if !token.is_eof() && !matches!(token.kind, TokenKind::EndGroup) => {
                    self.consume();
                }
                Ok(_) => {}
                Err(_) => {
                    self.gullet.discard_expansions();
                    let token = self.gullet.pop_token();
                    if token.is_eof() {
                        self.gullet.push_token(token);
                    } else {
                        self.note_consumed(token.loc);
                    }
                }
            }
        }
        let loc = self.span_from(start_loc.or(err.loc));
        let latex = loc
            .and_then(|loc| loc.slice(self.gullet.input()))
            .map_or_else(|| err.arg.clone().unwrap_or_default(), ToOwned::to_owned);
        let id = self.push(
            AtomKind::Error {
                code: err.code,
                latex,
            },
            loc,
        );
        body.push(id);
    }

    /// Parses up to the end of input, or of a scanned argument, and consumes
    /// the end marker. Stray closing tokens are reported and skipped.
    pub fn parse_until_eof(&mut self) -> Vec<AtomId> {
        let mut body = self.parse_expression(None);
        loop {
            let mark = self.mark();
            let token = match self.fetch() {
                Ok(token) => token.clone(),
                Err(err) => {
                    self.recover(&err, &mut body, mark, None);
                    continue;
                }
            };
            if token.is_eof() {
                self.consume();
                return body;
            }
            let mark = self.mark();
            let err = self.skip_stray(&token);
            self.recover(&err, &mut body, mark, token.loc);
            body.extend(self.parse_expression(None));
        }
    }

    /// Consumes a token that ended an expression where nothing expected it.
    fn skip_stray(&mut self, token: &Token) -> ParseError {
        self.consume();
        let code = match &token.kind {
            TokenKind::EndGroup => ParseErrorCode::UnbalancedBraces,
            TokenKind::InlineMath
            | TokenKind::DisplayMath
            | TokenKind::BeginMath { .. }
            | TokenKind::EndMath { .. } => ParseErrorCode::UnbalancedModeShift,
            TokenKind::Command(name) if name == "\\end" => {
                // drop the environment name with it
                self.unfetch();
                if self.gullet.scan_argument(false).is_ok() {
                    self.skip_to_eof();
                }
                ParseErrorCode::UnbalancedEnvironment
            }
            _ => ParseErrorCode::UnexpectedToken,
        };
        ParseError::at(code, token)
    }

    /// Discards tokens up to and including the next end-of-input marker.
    pub(crate) fn skip_to_eof(&mut self) {
        self.unfetch();
        loop {
            let token = self.gullet.pop_token();
            if token.is_eof() {
                break;
            }
            self.note_consumed(token.loc);
        }
    }

    /// Discards unexpanded tokens up to the end of the current expression.
    /// Nested groups, `\left`..`\right` pairs and environments are skipped
    /// whole; the token that ends the expression is left in place.
    pub(crate) fn skip_expression(&mut self) {
        self.unfetch();
        let mut depth = 0usize;
        loop {
            let token = self.gullet.pop_token();
            if token.is_eof() || (depth == 0 && self.is_end_of_expression(&token, None)) {
                self.gullet.push_token(token);
                return;
            }
            match &token.kind {
                TokenKind::BeginGroup => depth += 1,
                TokenKind::Command(name) if name == "\\left" || name == "\\begin" => depth += 1,
                TokenKind::EndGroup => depth = depth.saturating_sub(1),
                TokenKind::Command(name) if name == "\\right" || name == "\\end" => {
                    depth = depth.saturating_sub(1);
                }
                _ => {}
            }
            self.note_consumed(token.loc);
        }
    }

    /// Parses a single atom: a group, a command with its arguments or a
    /// character.
    fn parse_atom(&mut self) -> Result<Option<AtomId>, ParseError> {
        let token = self.fetch()?.clone();
        match &token.kind {
            TokenKind::BeginGroup => self.parse_braced_group().map(Some),
            TokenKind::InlineMath | TokenKind::DisplayMath | TokenKind::BeginMath { .. } => {
                self.parse_math_shift(&token)
            }
            TokenKind::EndMath { .. } => {
                self.consume();
                Err(ParseError::at(ParseErrorCode::UnbalancedModeShift, &token))
            }
            TokenKind::Command(_) => self.parse_command(&token),
            TokenKind::Literal(ch) => self.parse_literal(*ch, &token).map(Some),
            TokenKind::Argument(_) | TokenKind::Placeholder => {
                self.consume();
                let value = matches!(token.kind, TokenKind::Argument(_)).then(|| token.to_string());
                Ok(Some(self.push(AtomKind::Placeholder { value }, token.loc)))
            }
            TokenKind::Space => {
                self.consume();
                Ok((self.mode == Mode::Text).then(|| self.text_symbol(' ', None, token.loc)))
            }
            TokenKind::EndGroup | TokenKind::Eof => Ok(None),
        }
    }

    fn parse_braced_group(&mut self) -> Result<AtomId, ParseError> {
        let open = self.next()?;
        if let Err(err) = self.enter() {
            self.skip_group();
            return Err(err);
        }
        let body = self.parse_expression(None);
        self.leave();
        let close = self.fetch()?.clone();
        if matches!(close.kind, TokenKind::EndGroup) {
            self.consume();
        } else {
            self.report(&ParseError::at(ParseErrorCode::UnbalancedBraces, &open).with_arg("{"));
        }
        let loc = self.span_from(open.loc);
        Ok(self.push(AtomKind::Group { body, braced: true }, loc))
    }

    /// Skips the rest of a group whose `{` was just consumed.
    fn skip_group(&mut self) {
        self.unfetch();
        let mut depth = 1usize;
        while depth > 0 {
            let token = self.gullet.pop_token();
            match token.kind {
                TokenKind::BeginGroup => depth += 1,
                TokenKind::EndGroup => depth -= 1,
                TokenKind::Eof => {
                    self.gullet.push_token(token);
                    return;
                }
                _ => {}
            }
            self.note_consumed(token.loc);
        }
    }

    fn parse_math_shift(&mut self, token: &Token) -> Result<Option<AtomId>, ParseError> {
        self.consume();
        if self.mode != Mode::Text {
            return Err(ParseError::at(ParseErrorCode::UnbalancedModeShift, token));
        }
        let (closer, display) = match token.kind {
            TokenKind::BeginMath { display } => (TokenKind::EndMath { display }, display),
            TokenKind::DisplayMath => (TokenKind::DisplayMath, true),
            _ => (TokenKind::InlineMath, false),
        };
        if let Err(err) = self.enter() {
            self.skip_expression();
            return Err(err);
        }
        self.switch_mode(Mode::Math);
        let mut body = self.parse_expression(Some(&closer));
        let close = self.fetch().cloned();
        self.switch_mode(Mode::Text);
        self.leave();
        match close {
            Ok(close) if close.kind == closer => self.consume(),
            Ok(close) if matches!(close.kind, TokenKind::EndMath { .. }) => {
                self.consume();
                self.report(&ParseError::at(ParseErrorCode::UnbalancedModeShift, &close));
            }
            _ => self.report(&ParseError::at(ParseErrorCode::UnbalancedModeShift, token)),
        }
        let loc = self.span_from(token.loc);
        if display {
            let styled = self.tree.push(
                AtomKind::Styling {
                    mathstyle: crate::style::MathstyleName::Displaystyle,
                    body,
                },
                Mode::Math,
                loc,
            );
            body = vec![styled];
        }
        Ok(Some(self.tree.push(
            AtomKind::Group {
                body,
                braced: false,
            },
            Mode::Math,
            loc,
        )))
    }

    fn parse_command(&mut self, token: &Token) -> Result<Option<AtomId>, ParseError> {
        let name = token.as_command().unwrap_or_default();
        self.consume();

        if let Some(call) = self.gullet.begin_macro_call(token)? {
            let mut args = String::new();
            for arg in &call.args {
                args.push('{');
                args.push_str(&tokens_to_string(arg));
                args.push('}');
            }
            self.note_consumed(call.loc);
            if let Err(err) = self.enter() {
                // drop the expansion through its end marker
                self.skip_to_eof();
                return Err(err);
            }
            let body = self.parse_until_eof();
            self.leave();
            let loc = SourceLocation::merge(token.loc, call.loc);
            return Ok(Some(self.push(
                AtomKind::Macro {
                    command: name.to_owned(),
                    args,
                    body,
                    capture_selection: call.definition.capture_selection,
                },
                loc,
            )));
        }

        if let Some(spec) = Registry::global().functions.get(name) {
            let allowed = match self.mode {
                Mode::Math => spec.props.allowed_in_math,
                Mode::Text => spec.props.allowed_in_text,
                Mode::Latex => false,
            };
            if !allowed {
                return Err(ParseError::at(ParseErrorCode::InvalidCommand, token));
            }
            return self.call_function(token, spec).map(Some);
        }

        match self.mode {
            Mode::Math => {
                if let Some(op) = OPERATORS.get(name) {
                    let op_name = op
                        .glyph
                        .map_or_else(|| OperatorName::Text(name[1..].to_owned()), OperatorName::Glyph);
                    return Ok(Some(self.push(
                        AtomKind::Operator {
                            command: name.to_owned(),
                            name: op_name,
                            limits: Limits::Auto,
                            display_limits: op.limits,
                        },
                        token.loc,
                    )));
                }
                if let Some(symbol) = MATH_SYMBOLS.get(name) {
                    return Ok(Some(self.push(
                        AtomKind::Symbol {
                            class: symbol.class,
                            value: symbol.glyph,
                            command: Some(name.to_owned()),
                        },
                        token.loc,
                    )));
                }
                if TEXT_SYMBOLS.contains_key(name) {
                    return Err(ParseError::at(ParseErrorCode::InvalidCommand, token));
                }
            }
            Mode::Text => {
                if let Some(ch) = TEXT_SYMBOLS.get(name) {
                    return Ok(Some(self.text_symbol(*ch, Some(name), token.loc)));
                }
                if MATH_SYMBOLS.contains_key(name) || OPERATORS.contains_key(name) {
                    return Err(ParseError::at(ParseErrorCode::InvalidCommand, token));
                }
            }
            Mode::Latex => {}
        }
        Err(ParseError::at(ParseErrorCode::UnknownCommand, token))
    }

    /// Parses the arguments of a function whose token was consumed, and calls
    /// its handler.
    pub fn call_function(
        &mut self,
        token: &Token,
        spec: &'static FunctionSpec,
    ) -> Result<AtomId, ParseError> {
        let name = token.as_command().unwrap_or_default();
        let (args, optional) = self.parse_arguments(token, &spec.props)?;
        let loc = self.span_from(token.loc);
        (spec.handler)(
            FunctionContext {
                func_name: name,
                parser: self,
                token,
                loc,
            },
            args,
            optional,
        )
    }

    fn text_symbol(&mut self, ch: char, command: Option<&str>, loc: Option<SourceLocation>) -> AtomId {
        self.push(
            AtomKind::Symbol {
                class: AtomClass::Ord,
                value: ch,
                command: command.map(ToOwned::to_owned),
            },
            loc,
        )
    }

    fn parse_literal(&mut self, ch: char, token: &Token) -> Result<AtomId, ParseError> {
        self.consume();
        if self.mode == Mode::Text {
            return self.parse_text_literal(ch, token);
        }
        if ch == '~' {
            return Ok(self.push(
                AtomKind::Spacing {
                    command: "~".to_owned(),
                    amount: SpacingAmount::Glue(Glue::fixed(Dimension::new(
                        1.0 / 3.0,
                        DimensionUnit::Em,
                    ))),
                },
                token.loc,
            ));
        }
        let info = math_char(ch);
        Ok(self.push(
            AtomKind::Symbol {
                class: info.class,
                value: info.glyph,
                command: None,
            },
            token.loc,
        ))
    }

    /// Text-mode characters, combining `--`, `---`, ` `` ` and `''` into
    /// ligatures.
    fn parse_text_literal(&mut self, ch: char, token: &Token) -> Result<AtomId, ParseError> {
        let mut text = String::from(ch);
        if matches!(ch, '-' | '`' | '\'') {
            while text.len() < 3 && self.fetch()?.is_literal(ch) {
                let candidate = format!("{text}{ch}");
                if !LIGATURES.keys().any(|lig| lig.starts_with(candidate.as_str())) {
                    break;
                }
                self.consume();
                text = candidate;
            }
        }
        let value = match text.as_str() {
            "~" => '\u{a0}',
            s => LIGATURES.get(s).copied().unwrap_or(ch),
        };
        let command = (text.len() > 1).then_some(text.as_str());
        let loc = self.span_from(token.loc);
        Ok(self.text_symbol(value, command, loc))
    }

    fn parse_script(&mut self, body: &mut Vec<AtomId>) -> Result<(), ParseError> {
        let token = self.next()?;
        let is_sup = token.is_literal('^');
        let script = self.parse_script_argument(&token)?;
        self.attach_script(body, &token, is_sup, script)
    }

    fn parse_script_argument(&mut self, token: &Token) -> Result<AtomId, ParseError> {
        match self.parse_argument(crate::types::ArgType::Math, false) {
            Ok(Some(Argument::Atom(id))) => Ok(id),
            Ok(_) => Err(ParseError::at(ParseErrorCode::MissingArgument, token)),
            Err(err) if err.code == ParseErrorCode::MissingArgument => {
                self.report(&err.with_arg(token.to_string()));
                Ok(self.push(AtomKind::Placeholder { value: None }, token.loc))
            }
            Err(err) => Err(err),
        }
    }

    /// Attaches a script to the last atom of `body`.
    fn attach_script(
        &mut self,
        body: &mut Vec<AtomId>,
        token: &Token,
        is_sup: bool,
        script: AtomId,
    ) -> Result<(), ParseError> {
        let (base, mut sup, mut sub) = match body.last().map(|id| (*id, &self.tree[*id].kind)) {
            Some((_, AtomKind::SupSub { base, sup, sub })) => {
                if (is_sup && sup.is_some()) || (!is_sup && sub.is_some()) {
                    return Err(ParseError::at(ParseErrorCode::TooManyInfixCommands, token)
                        .with_loc(self.span_from(token.loc)));
                }
                let parts = (*base, *sup, *sub);
                body.pop();
                parts
            }
            Some((id, _)) => {
                body.pop();
                (Some(id), None, None)
            }
            None => (None, None, None),
        };
        if is_sup {
            sup = Some(script);
        } else {
            sub = Some(script);
        }
        let start = base.and_then(|id| self.tree[id].loc).or(token.loc);
        let loc = self.span_from(start);
        let id = self.push(AtomKind::SupSub { base, sup, sub }, loc);
        body.push(id);
        Ok(())
    }

    /// `x'` is `x^{\prime}`; primes may be followed by a superscript, which
    /// joins them.
    fn parse_primes(&mut self, body: &mut Vec<AtomId>) -> Result<(), ParseError> {
        let first = self.fetch()?.clone();
        let mut primes = Vec::new();
        while self.fetch()?.is_literal('\'') {
            let token = self.next()?;
            primes.push(self.push(
                AtomKind::Symbol {
                    class: AtomClass::Ord,
                    value: '\u{2032}',
                    command: Some("\\prime".to_owned()),
                },
                token.loc,
            ));
        }
        if self.fetch()?.is_literal('^') {
            let caret = self.next()?;
            primes.push(self.parse_script_argument(&caret)?);
        }
        let loc = self.span_from(first.loc);
        let script = self.push(
            AtomKind::Group {
                body: primes,
                braced: true,
            },
            loc,
        );
        self.attach_script(body, &first, true, script)
    }

    fn set_limits(&mut self, body: &[AtomId], token: &Token) -> Result<(), ParseError> {
        let target = body.last().and_then(|id| match &self.tree[*id].kind {
            AtomKind::Operator { .. } => Some(*id),
            AtomKind::SupSub {
                base: Some(base), ..
            } if matches!(self.tree[*base].kind, AtomKind::Operator { .. }) => Some(*base),
            _ => None,
        });
        let Some(AtomKind::Operator { limits, .. }) =
            target.and_then(|id| self.tree.get_mut(id)).map(|atom| &mut atom.kind)
        else {
            return Err(ParseError::at(ParseErrorCode::InvalidCommand, token));
        };
        *limits = if token.is_command("\\limits") {
            Limits::Limits
        } else {
            Limits::NoLimits
        };
        Ok(())
    }

    fn apply_infix(&mut self, infix: Infix, body: &mut Vec<AtomId>) -> Result<AtomId, ParseError> {
        let Infix {
            spec,
            token,
            position,
            args,
        } = infix;
        let denom_body = body.split_off(position.min(body.len()));
        let numer_body = core::mem::take(body);
        let group = |parser: &mut Self, body: Vec<AtomId>| {
            let loc = body
                .iter()
                .filter_map(|id| parser.tree[*id].loc)
                .reduce(SourceLocation::range);
            parser.push(
                AtomKind::Group {
                    body,
                    braced: false,
                },
                loc,
            )
        };
        let numer = group(self, numer_body);
        let denom = group(self, denom_body);
        let mut all = vec![Argument::Atom(numer), Argument::Atom(denom)];
        all.extend(args);
        let loc = SourceLocation::merge(self.tree[numer].loc, self.tree[denom].loc);
        let name = token.as_command().unwrap_or_default();
        (spec.handler)(
            FunctionContext {
                func_name: name,
                parser: self,
                token: &token,
                loc,
            },
            all,
            Vec::new(),
        )
    }

    /// Turns literal `(`..`)` pairs into fences.
    fn smart_fences(&mut self, body: Vec<AtomId>) -> Vec<AtomId> {
        let is = |tree: &AtomTree, id: AtomId, ch: char| {
            matches!(
                tree[id].kind,
                AtomKind::Symbol { value, command: None, .. } if value == ch
            )
        };
        let mut result = Vec::with_capacity(body.len());
        let mut i = 0;
        while i < body.len() {
            let id = body[i];
            if is(&self.tree, id, '(') {
                let mut depth = 0usize;
                let close = body[i + 1..].iter().position(|other| {
                    if is(&self.tree, *other, '(') {
                        depth += 1;
                    } else if is(&self.tree, *other, ')') {
                        if depth == 0 {
                            return true;
                        }
                        depth -= 1;
                    }
                    false
                });
                if let Some(offset) = close {
                    let end = i + 1 + offset;
                    let inner = self.smart_fences(body[i + 1..end].to_vec());
                    let loc = SourceLocation::merge(self.tree[id].loc, self.tree[body[end]].loc);
                    result.push(self.push(
                        AtomKind::LeftRight {
                            left: "(".to_owned(),
                            right: ")".to_owned(),
                            body: inner,
                        },
                        loc,
                    ));
                    i = end + 1;
                    continue;
                }
            }
            result.push(id);
            i += 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LatexSyntaxError;

    fn parse(input: &str) -> (AtomTree, Vec<LatexSyntaxError>) {
        let settings = Settings::default();
        parse_with(input, &settings)
    }

    fn parse_with(input: &str, settings: &Settings) -> (AtomTree, Vec<LatexSyntaxError>) {
        let mut errors = Vec::new();
        let mut listener = |err| errors.push(err);
        let tree = Parser::new(input, settings, &mut listener).parse();
        (tree, errors)
    }

    fn codes(errors: &[LatexSyntaxError]) -> Vec<ParseErrorCode> {
        errors.iter().map(|e| e.code).collect()
    }

    fn root_types(tree: &AtomTree) -> Vec<String> {
        tree[tree.root()]
            .kind
            .children()
            .into_iter()
            .map(|id| tree[id].atom_type().to_string())
            .collect()
    }

    #[test]
    fn symbols_and_scripts() {
        let (tree, errors) = parse("x^2+y_1");
        assert!(errors.is_empty());
        assert_eq!(root_types(&tree), ["sup-sub", "symbol", "sup-sub"]);
    }

    #[test]
    fn both_scripts_share_one_atom() {
        let (tree, errors) = parse("x_1^2");
        assert!(errors.is_empty());
        let supsub = tree.find(atom::AtomType::SupSub);
        assert_eq!(supsub.len(), 1);
        assert!(matches!(
            tree[supsub[0]].kind,
            AtomKind::SupSub {
                base: Some(_),
                sup: Some(_),
                sub: Some(_)
            }
        ));
    }

    #[test]
    fn double_superscript_is_rejected() {
        let (tree, errors) = parse("x^2^3");
        assert_eq!(codes(&errors), [ParseErrorCode::TooManyInfixCommands]);
        assert_eq!(root_types(&tree), ["sup-sub", "error"]);
        let error = tree.find(atom::AtomType::Error)[0];
        assert!(matches!(&tree[error].kind, AtomKind::Error { latex, .. } if latex == "^3"));
    }

    #[test]
    fn unknown_commands_become_error_atoms() {
        let (tree, errors) = parse("a+\\foo+b");
        assert_eq!(codes(&errors), [ParseErrorCode::UnknownCommand]);
        assert_eq!(errors[0].arg.as_deref(), Some("\\foo"));
        assert_eq!(root_types(&tree), ["symbol", "symbol", "error", "symbol", "symbol"]);
    }

    #[test]
    fn unbalanced_braces_are_reported_once() {
        let (tree, errors) = parse("a}b");
        assert_eq!(codes(&errors), [ParseErrorCode::UnbalancedBraces]);
        assert_eq!(root_types(&tree), ["symbol", "error", "symbol"]);

        let (_, errors) = parse("{a");
        assert_eq!(codes(&errors), [ParseErrorCode::UnbalancedBraces]);
    }

    #[test]
    fn text_only_symbols_are_invalid_in_math() {
        let (_, errors) = parse("\\textbackslash");
        assert_eq!(codes(&errors), [ParseErrorCode::InvalidCommand]);
    }

    #[test]
    fn primes_join_a_following_superscript() {
        let (tree, errors) = parse("f'^2");
        assert!(errors.is_empty());
        assert_eq!(root_types(&tree), ["sup-sub"]);
    }

    #[test]
    fn smart_fences_pair_parentheses() {
        let settings = Settings::builder().smart_fence(true).build();
        let (tree, errors) = parse_with("(a(b))c", &settings);
        assert!(errors.is_empty());
        assert_eq!(root_types(&tree), ["left-right", "symbol"]);
        assert_eq!(tree.find(atom::AtomType::LeftRight).len(), 2);
    }

    #[test]
    fn deep_nesting_is_bounded() {
        let settings = Settings::builder().max_nesting(8).build();
        let input = format!("{}x{}", "{".repeat(20), "}".repeat(20));
        let (_, errors) = parse_with(&input, &settings);
        assert_eq!(codes(&errors), [ParseErrorCode::RecursionLimit]);
    }

    #[test]
    fn fences_and_switches_count_as_nesting() {
        let settings = Settings::builder().max_nesting(8).build();
        for input in [
            format!("{}x{}", "\\left(".repeat(20), "\\right)".repeat(20)),
            format!("{}x", "\\displaystyle ".repeat(20)),
            format!("{}x", "\\color{red}".repeat(20)),
            format!("{}x", "\\large ".repeat(20)),
            format!("{}x", "{\\bf ".repeat(20) + &"}".repeat(20)),
        ] {
            let (_, errors) = parse_with(&input, &settings);
            assert_eq!(codes(&errors), [ParseErrorCode::RecursionLimit], "{input}");
        }
    }

    #[test]
    fn nesting_limit_keeps_the_fences_balanced() {
        let settings = Settings::builder().max_nesting(4).build();
        let input = format!("{}x{}y", "\\left(".repeat(6), "\\right)".repeat(6));
        let (tree, errors) = parse_with(&input, &settings);
        assert_eq!(codes(&errors), [ParseErrorCode::RecursionLimit]);
        assert_eq!(root_types(&tree), ["left-right", "symbol"]);
    }

    #[test]
    fn math_shifts_in_text() {
        for input in ["\\text{a $x$ b}", "\\text{\\(x\\)}", "\\text{$$x$$}", "\\text{\\[x\\]}"] {
            let (_, errors) = parse(input);
            assert!(errors.is_empty(), "{input}: {errors:?}");
        }
        let (tree, _) = parse("\\text{\\[x\\]}");
        assert_eq!(tree.find(atom::AtomType::Styling).len(), 1);
    }

    #[test]
    fn mismatched_math_shifts_are_reported_once() {
        for input in ["\\text{$x}", "\\text{\\(x\\]}", "\\text{\\[x\\)}", "\\text{\\)x}"] {
            let (_, errors) = parse(input);
            assert_eq!(codes(&errors), [ParseErrorCode::UnbalancedModeShift], "{input}");
        }
        let (_, errors) = parse("\\text{\\)x\\(}");
        assert_eq!(
            codes(&errors),
            [ParseErrorCode::UnbalancedModeShift, ParseErrorCode::UnbalancedModeShift]
        );
    }

    #[test]
    fn latex_mode_keeps_tokens() {
        let settings = Settings::builder().default_mode(Mode::Latex).build();
        let (tree, errors) = parse_with("\\frac{a}{b}", &settings);
        assert!(errors.is_empty());
        assert_eq!(tree.find(atom::AtomType::Latex).len(), 7);
    }
}
