//! Argument sub-grammars.
//!
//! Each [`ArgType`] has its own small grammar. Group-like arguments are
//! located by the gullet without expansion and then parsed as a complete
//! expression; the others are read token by token.

use core::str::FromStr as _;

use crate::define_function::{Argument, FunctionPropSpec};
use crate::parser::Parser;
use crate::parser::atom::{AtomKind, ColumnAlign, ColumnSpec};
use crate::symbols::DELIMITERS;
use crate::types::{
    ArgType, Mode, ParseError, ParseErrorCode, SourceLocation, Token, TokenKind, tokens_to_string,
};
use crate::units::{Dimension, DimensionUnit, Glue};

impl Parser<'_> {
    /// Parses the arguments of a function whose token was consumed.
    ///
    /// A missing required argument is reported once, naming the function;
    /// it and every argument after it are replaced by placeholders, so the
    /// handler always receives a full argument list.
    pub fn parse_arguments(
        &mut self,
        token: &Token,
        props: &FunctionPropSpec,
    ) -> Result<(Vec<Argument>, Vec<Option<Argument>>), ParseError> {
        let total = props.num_args + props.num_optional_args;
        let mut args = Vec::with_capacity(props.num_args);
        let mut opt_args = Vec::with_capacity(props.num_optional_args);
        let mut missing = false;

        for i in 0..total {
            let arg_type = props.arg_type(i);
            if i < props.num_optional_args {
                opt_args.push(if missing {
                    None
                } else {
                    self.parse_argument(arg_type, true)?
                });
                continue;
            }
            if !missing {
                match self.parse_argument(arg_type, false) {
                    Ok(Some(arg)) => {
                        args.push(arg);
                        continue;
                    }
                    Ok(None) => {}
                    Err(err) if err.code == ParseErrorCode::MissingArgument => {}
                    Err(err) if err.code == ParseErrorCode::UnexpectedDelimiter => {
                        // carry on with the null delimiter
                        self.report(&err);
                        args.push(Argument::Delim(".".to_owned()));
                        continue;
                    }
                    Err(err) => return Err(err),
                }
                self.report(&ParseError::at(ParseErrorCode::MissingArgument, token));
                missing = true;
            }
            args.push(self.default_argument(arg_type, token.loc));
        }
        Ok((args, opt_args))
    }

    /// Stand-in for an argument that was not supplied.
    fn default_argument(&mut self, arg_type: ArgType, loc: Option<SourceLocation>) -> Argument {
        match arg_type {
            ArgType::Math | ArgType::Text | ArgType::Latex | ArgType::Auto => {
                Argument::Atom(self.push(AtomKind::Placeholder { value: None }, loc))
            }
            ArgType::Rest => Argument::Atoms(Vec::new()),
            ArgType::Dimen => Argument::Dimension(Dimension::default()),
            ArgType::Glue => Argument::Glue(Glue::default()),
            ArgType::Number => Argument::Number(0.0),
            ArgType::Delim => Argument::Delim(".".to_owned()),
            ArgType::Colspec => Argument::Colspec {
                spec: Vec::new(),
                latex: String::new(),
            },
            ArgType::String | ArgType::BalancedString => Argument::String(String::new()),
        }
    }

    /// Parses one argument. Returns `Ok(None)` for an absent optional
    /// argument.
    pub fn parse_argument(
        &mut self,
        arg_type: ArgType,
        optional: bool,
    ) -> Result<Option<Argument>, ParseError> {
        match arg_type {
            ArgType::Math | ArgType::Text | ArgType::Latex | ArgType::Auto => {
                let mode = arg_type.mode(self.mode);
                Ok(self.scan_group(optional, mode)?.map(Argument::Atom))
            }
            ArgType::Rest => {
                if let Err(err) = self.enter() {
                    self.skip_expression();
                    return Err(err);
                }
                let body = self.parse_expression(None);
                self.leave();
                Ok(Some(Argument::Atoms(body)))
            }
            ArgType::Dimen | ArgType::Glue | ArgType::Number => {
                self.parse_quantity(arg_type, optional)
            }
            ArgType::Delim => self.parse_delim().map(|d| Some(Argument::Delim(d))),
            ArgType::String => Ok(self.parse_string(optional)?.map(Argument::String)),
            ArgType::BalancedString => Ok(self
                .scan_raw(optional)?
                .map(|tokens| Argument::String(tokens_to_string(&tokens)))),
            ArgType::Colspec => self.parse_colspec().map(Some),
        }
    }

    /// Locates an argument with the gullet, then parses it in `mode` as a
    /// braced group.
    fn scan_group(
        &mut self,
        optional: bool,
        mode: Mode,
    ) -> Result<Option<crate::parser::atom::AtomId>, ParseError> {
        self.unfetch();
        let Some(loc) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        self.note_consumed(loc);
        if let Err(err) = self.enter() {
            self.skip_to_eof();
            return Err(err);
        }
        let outer = self.mode;
        self.switch_mode(mode);
        let body = self.parse_until_eof();
        self.switch_mode(outer);
        self.leave();
        Ok(Some(self.tree.push(
            AtomKind::Group { body, braced: true },
            mode,
            loc,
        )))
    }

    /// Locates an argument and returns its tokens unexpanded.
    fn scan_raw(&mut self, optional: bool) -> Result<Option<Vec<Token>>, ParseError> {
        self.unfetch();
        let Some(loc) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        self.note_consumed(loc);
        let mut tokens = Vec::new();
        loop {
            let token = self.gullet.pop_token();
            if token.is_eof() {
                return Ok(Some(tokens));
            }
            tokens.push(token);
        }
    }

    /// Reads a `string` argument: characters only, with every macro
    /// expanded.
    fn parse_string(&mut self, optional: bool) -> Result<Option<String>, ParseError> {
        self.unfetch();
        let Some(loc) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        self.note_consumed(loc);
        let mut result = String::new();
        loop {
            if let Err(err) = self.gullet.expand_once(true) {
                self.skip_to_eof();
                return Err(err);
            }
            let token = self.gullet.pop_token();
            match &token.kind {
                TokenKind::Eof => return Ok(Some(result)),
                TokenKind::Literal(ch) => result.push(*ch),
                TokenKind::Space => result.push(' '),
                TokenKind::BeginGroup | TokenKind::EndGroup => {}
                _ => {
                    self.skip_to_eof();
                    return Err(
                        ParseError::at(ParseErrorCode::UnexpectedCommandInString, &token)
                            .with_loc(loc),
                    );
                }
            }
        }
    }

    /// Reads a delimiter: `.`, a delimiter character or command, or either
    /// of those in braces.
    fn parse_delim(&mut self) -> Result<String, ParseError> {
        self.consume_spaces()?;
        let mut token = self.fetch()?.clone();
        if matches!(token.kind, TokenKind::EndGroup | TokenKind::Eof) {
            return Err(ParseError::at(ParseErrorCode::MissingArgument, &token));
        }
        self.consume();
        let braced = matches!(token.kind, TokenKind::BeginGroup);
        if braced {
            self.consume_spaces()?;
            token = self.next()?;
        }
        let text = token.to_string();
        let valid = text == "." || DELIMITERS.contains_key(text.as_str());
        if braced {
            self.consume_spaces()?;
            if matches!(self.fetch()?.kind, TokenKind::EndGroup) {
                self.consume();
            } else {
                return Err(ParseError::at(ParseErrorCode::UnexpectedDelimiter, &token));
            }
        }
        if valid {
            Ok(text)
        } else {
            Err(ParseError::at(ParseErrorCode::UnexpectedDelimiter, &token))
        }
    }

    /// Reads a `dimen`, `glue` or `number` argument, in braces or inline.
    fn parse_quantity(
        &mut self,
        arg_type: ArgType,
        optional: bool,
    ) -> Result<Option<Argument>, ParseError> {
        self.consume_spaces()?;
        let scanned = if optional {
            self.unfetch();
            match self.gullet.scan_argument(true)? {
                Some(loc) => {
                    self.note_consumed(loc);
                    true
                }
                None => return Ok(None),
            }
        } else if matches!(self.fetch()?.kind, TokenKind::BeginGroup) {
            self.unfetch();
            let loc = self.gullet.scan_argument(false)?;
            self.note_consumed(loc.flatten());
            true
        } else {
            false
        };

        let value = match arg_type {
            ArgType::Glue => self.read_glue().map(Argument::Glue),
            ArgType::Number => self.read_number().map(Argument::Number),
            _ => self.read_dimension().map(Argument::Dimension),
        };
        if !scanned {
            return value.map(Some);
        }
        let value = match value {
            Ok(value) => value,
            Err(err) => {
                self.skip_to_eof();
                return Err(err);
            }
        };
        self.consume_spaces()?;
        let trailing = self.fetch()?.clone();
        if trailing.is_eof() {
            self.consume();
            Ok(Some(value))
        } else {
            self.skip_to_eof();
            Err(ParseError::at(ParseErrorCode::UnexpectedToken, &trailing))
        }
    }

    /// Reads a number: an optional sign, then decimal digits, or `"` hex,
    /// `'` octal or `` ` `` character constants.
    pub(crate) fn read_number(&mut self) -> Result<f64, ParseError> {
        let mut negative = false;
        loop {
            self.consume_spaces()?;
            match self.fetch()?.as_literal() {
                Some('-') => negative = !negative,
                Some('+') => {}
                _ => break,
            }
            self.consume();
        }

        let first = self.fetch()?.clone();
        let value = match first.as_literal() {
            Some('"') => {
                self.consume();
                self.read_digits(16, &first)?
            }
            Some('\'') => {
                self.consume();
                self.read_digits(8, &first)?
            }
            Some('`') => {
                self.consume();
                self.read_alphabetic_constant(&first)?
            }
            Some(ch) if ch.is_ascii_digit() || ch == '.' || ch == ',' => {
                let mut text = String::new();
                while let Some(ch) = self.fetch()?.as_literal() {
                    match ch {
                        '0'..='9' | '.' => text.push(ch),
                        ',' => text.push('.'),
                        _ => break,
                    }
                    self.consume();
                }
                text.parse::<f64>()
                    .map_err(|_| ParseError::at(ParseErrorCode::UnexpectedToken, &first))?
            }
            _ => return Err(ParseError::at(ParseErrorCode::UnexpectedToken, &first)),
        };
        Ok(if negative { -value } else { value })
    }

    fn read_digits(&mut self, radix: u32, prefix: &Token) -> Result<f64, ParseError> {
        let mut value: u32 = 0;
        let mut any = false;
        while let Some(digit) = self.fetch()?.as_literal().and_then(|ch| ch.to_digit(radix)) {
            self.consume();
            value = value.saturating_mul(radix).saturating_add(digit);
            any = true;
        }
        if any {
            Ok(f64::from(value))
        } else {
            Err(ParseError::at(ParseErrorCode::UnexpectedToken, prefix))
        }
    }

    /// `` `a `` and `` `\a `` stand for the code point of `a`.
    fn read_alphabetic_constant(&mut self, prefix: &Token) -> Result<f64, ParseError> {
        self.unfetch();
        let token = self.gullet.pop_token();
        self.note_consumed(token.loc);
        let ch = match &token.kind {
            TokenKind::Literal(ch) => Some(*ch),
            TokenKind::Command(name) => {
                let mut chars = name.chars().skip(1);
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => None,
                }
            }
            TokenKind::BeginGroup => Some('{'),
            TokenKind::EndGroup => Some('}'),
            _ => None,
        };
        ch.map(|ch| f64::from(u32::from(ch))).ok_or_else(|| {
            ParseError::at(ParseErrorCode::ImproperAlphabeticConstant, prefix)
                .with_loc(SourceLocation::merge(prefix.loc, token.loc))
        })
    }

    /// Reads a number followed by a unit.
    pub(crate) fn read_dimension(&mut self) -> Result<Dimension, ParseError> {
        let number = self.read_number()?;
        self.consume_spaces()?;
        let start = self.fetch()?.clone();
        let mut unit = String::new();
        while unit.len() < 2 {
            match self.fetch()?.as_literal() {
                Some(ch) if ch.is_ascii_alphabetic() => {
                    unit.push(ch.to_ascii_lowercase());
                    self.consume();
                }
                _ => break,
            }
        }
        if unit == "fi" {
            while unit.len() < 5 && self.fetch()?.is_literal('l') {
                unit.push('l');
                self.consume();
            }
        }
        DimensionUnit::from_str(&unit)
            .map(|unit| Dimension::new(number, unit))
            .map_err(|_| {
                ParseError::at(ParseErrorCode::MissingUnit, &start)
                    .with_arg(format!("{number}{unit}"))
            })
    }

    /// Reads a dimension with optional `plus` and `minus` parts.
    pub(crate) fn read_glue(&mut self) -> Result<Glue, ParseError> {
        let glue = self.read_dimension()?;
        let grow = if self.scan_keyword("plus")? {
            Some(self.read_dimension()?)
        } else {
            None
        };
        let shrink = if self.scan_keyword("minus")? {
            Some(self.read_dimension()?)
        } else {
            None
        };
        Ok(Glue { glue, shrink, grow })
    }

    /// Consumes `keyword` if it comes next, letter by letter. On a mismatch
    /// the letters read so far are put back.
    fn scan_keyword(&mut self, keyword: &str) -> Result<bool, ParseError> {
        self.consume_spaces()?;
        let mut read = Vec::new();
        for expected in keyword.chars() {
            let token = self.fetch()?.clone();
            if token
                .as_literal()
                .is_some_and(|ch| ch.eq_ignore_ascii_case(&expected))
            {
                self.consume();
                read.push(token);
            } else {
                self.unfetch();
                self.gullet.push_tokens(read, false);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Reads an array column specification.
    fn parse_colspec(&mut self) -> Result<Argument, ParseError> {
        self.unfetch();
        let loc = self.gullet.scan_argument(false)?;
        let loc = loc.flatten();
        self.note_consumed(loc);
        let latex = loc
            .and_then(|loc| loc.slice(self.gullet.input()))
            .map(|s| {
                s.strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                    .unwrap_or(s)
                    .to_owned()
            })
            .unwrap_or_default();

        let mut spec = Vec::new();
        loop {
            let token = self.gullet.pop_token();
            self.note_consumed(token.loc);
            match &token.kind {
                TokenKind::Eof => break,
                TokenKind::Space => {}
                TokenKind::Literal('l') => spec.push(ColumnSpec::Column(ColumnAlign::Left)),
                TokenKind::Literal('c') => spec.push(ColumnSpec::Column(ColumnAlign::Center)),
                TokenKind::Literal('r') => spec.push(ColumnSpec::Column(ColumnAlign::Right)),
                TokenKind::Literal('|') => spec.push(ColumnSpec::Rule { dashed: false }),
                TokenKind::Literal(':') => spec.push(ColumnSpec::Rule { dashed: true }),
                TokenKind::Literal('@') => {
                    let gap = match self.scan_group(false, Mode::Math) {
                        Ok(Some(group)) => group,
                        Ok(None) => continue,
                        Err(err) => {
                            self.skip_to_eof();
                            return Err(err);
                        }
                    };
                    spec.push(ColumnSpec::Gap(vec![gap]));
                }
                _ => {
                    self.skip_to_eof();
                    return Err(ParseError::at(ParseErrorCode::UnexpectedToken, &token));
                }
            }
        }
        Ok(Argument::Colspec { spec, latex })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::parser::atom::{AtomKind, AtomTree, AtomType, SpacingAmount};
    use crate::types::{LatexSyntaxError, ParseErrorCode, Settings};
    use crate::units::{Dimension, DimensionUnit};

    fn parse(input: &str) -> (AtomTree, Vec<ParseErrorCode>) {
        let settings = Settings::default();
        let mut errors: Vec<LatexSyntaxError> = Vec::new();
        let mut listener = |err| errors.push(err);
        let tree = Parser::new(input, &settings, &mut listener).parse();
        (tree, errors.into_iter().map(|e| e.code).collect())
    }

    fn spacing(tree: &AtomTree) -> Option<SpacingAmount> {
        tree.find(AtomType::Spacing).first().and_then(|id| match &tree[*id].kind {
            AtomKind::Spacing { amount, .. } => Some(amount.clone()),
            _ => None,
        })
    }

    #[test]
    fn missing_argument_is_reported_once() {
        let (tree, errors) = parse("\\frac{2}");
        assert_eq!(errors, [ParseErrorCode::MissingArgument]);
        assert_eq!(tree.find(AtomType::Fraction).len(), 1);
        assert_eq!(tree.find(AtomType::Placeholder).len(), 1);

        let (tree, errors) = parse("\\frac");
        assert_eq!(errors, [ParseErrorCode::MissingArgument]);
        assert_eq!(tree.find(AtomType::Placeholder).len(), 2);
    }

    #[test]
    fn dimensions_in_braces_and_inline() {
        let (tree, errors) = parse("\\hspace{1.5em}");
        assert!(errors.is_empty());
        let Some(SpacingAmount::Glue(glue)) = spacing(&tree) else {
            panic!("no glue");
        };
        assert_eq!(glue.glue, Dimension::new(1.5, DimensionUnit::Em));

        let (tree, errors) = parse("\\kern -3 pt x");
        assert!(errors.is_empty());
        let Some(SpacingAmount::Glue(glue)) = spacing(&tree) else {
            panic!("no glue");
        };
        assert_eq!(glue.glue, Dimension::pt(-3.0));
    }

    #[test]
    fn glue_with_stretch() {
        let (tree, errors) = parse("\\hskip 2pt plus 1fill minus 1pt");
        assert!(errors.is_empty());
        let Some(SpacingAmount::Glue(glue)) = spacing(&tree) else {
            panic!("no glue");
        };
        assert_eq!(glue.grow, Some(Dimension::new(1.0, DimensionUnit::Fill)));
        assert_eq!(glue.shrink, Some(Dimension::pt(1.0)));
    }

    #[test]
    fn dimension_errors() {
        let (_, errors) = parse("\\hspace{3}");
        assert_eq!(errors, [ParseErrorCode::MissingUnit]);
        let (_, errors) = parse("\\hspace{pt}");
        assert_eq!(errors, [ParseErrorCode::UnexpectedToken]);
    }

    #[test]
    fn character_constants() {
        let (tree, errors) = parse("\\char\"41\\char'101\\char`A");
        assert!(errors.is_empty());
        let chars: Vec<char> = tree
            .find(AtomType::Symbol)
            .into_iter()
            .filter_map(|id| match tree[id].kind {
                AtomKind::Symbol { value, .. } => Some(value),
                _ => None,
            })
            .collect();
        assert_eq!(chars, ['A', 'A', 'A']);

        let (_, errors) = parse("\\char`\\alpha");
        assert_eq!(errors, [ParseErrorCode::ImproperAlphabeticConstant]);
    }

    #[test]
    fn bad_delimiters() {
        let (_, errors) = parse("\\left x a \\right)");
        assert_eq!(errors, [ParseErrorCode::UnexpectedDelimiter]);
    }

    #[test]
    fn commands_in_strings() {
        let (_, errors) = parse("\\color{\\alpha}x");
        assert_eq!(errors, [ParseErrorCode::UnexpectedCommandInString]);
    }

    #[test]
    fn column_specifications() {
        let (tree, errors) = parse("\\begin{array}{l|c@{:}r}a&b&c\\end{array}");
        assert!(errors.is_empty());
        let array = tree.find(AtomType::Array)[0];
        let AtomKind::Array {
            colspec,
            colspec_latex,
            ..
        } = &tree[array].kind
        else {
            panic!("not an array");
        };
        assert_eq!(colspec.len(), 5);
        assert_eq!(colspec_latex.as_deref(), Some("l|c@{:}r"));
    }
}
