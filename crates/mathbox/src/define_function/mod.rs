//! Function definition utilities.
//!
//! A function is a command with a fixed argument signature and a handler
//! that turns the parsed arguments into an atom. Functions that introduce
//! their own atom type also register a box builder for it.

use crate::build_box::BoxBuilder;
use crate::parser::Parser;
use crate::parser::atom::{AtomId, AtomKind, AtomType, ColumnSpec, Style};
use crate::types::{ArgType, Mode, ParseError, ParseErrorCode, SourceLocation, Token};
use crate::units::{Dimension, Glue};

/// A parsed function argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A group: `math`, `text`, `latex` and `auto` arguments.
    Atom(AtomId),
    /// The rest of the enclosing group.
    Atoms(Vec<AtomId>),
    /// A `dimen` argument.
    Dimension(Dimension),
    /// A `glue` argument.
    Glue(Glue),
    /// A `number` argument.
    Number(f64),
    /// A `string` or `balanced-string` argument.
    String(String),
    /// A `delim` argument, `.` for the null delimiter.
    Delim(String),
    /// A `colspec` argument.
    Colspec {
        /// The parsed columns.
        spec: Vec<ColumnSpec>,
        /// The specification as written.
        latex: String,
    },
}

impl Argument {
    /// The argument as a string, for string-like arguments.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Delim(s) => Some(s),
            _ => None,
        }
    }

    /// The argument as a single atom.
    #[must_use]
    pub const fn as_atom(&self) -> Option<AtomId> {
        match self {
            Self::Atom(id) => Some(*id),
            _ => None,
        }
    }
}

/// Argument `index`, which must be a group.
pub fn atom_argument(args: &[Argument], index: usize) -> Result<AtomId, ParseError> {
    args.get(index)
        .and_then(Argument::as_atom)
        .ok_or_else(|| ParseError::new(ParseErrorCode::MissingArgument))
}

/// Argument `index` as a string, or an empty string.
#[must_use]
pub fn string_argument(args: &[Argument], index: usize) -> String {
    args.get(index)
        .and_then(Argument::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Context passed to function handlers.
pub struct FunctionContext<'c, 'a> {
    /// Function name, with backslash.
    pub func_name: &'c str,
    /// Parser instance.
    pub parser: &'c mut Parser<'a>,
    /// The token that invoked the function.
    pub token: &'c Token,
    /// Span of the invocation and its arguments.
    pub loc: Option<SourceLocation>,
}

impl FunctionContext<'_, '_> {
    /// Adds an atom spanning the invocation.
    pub fn push(&mut self, kind: AtomKind) -> AtomId {
        self.parser.push(kind, self.loc)
    }

    /// Adds an atom with style overrides.
    pub fn push_styled(&mut self, kind: AtomKind, style: Style) -> AtomId {
        let mode = self.parser.mode;
        self.parser.tree.push_styled(kind, mode, style, self.loc)
    }

    /// The current parser mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.parser.mode
    }

    /// The function name without its backslash.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.func_name.trim_start_matches('\\')
    }
}

/// Turns parsed arguments into an atom.
pub type FunctionHandler = fn(
    context: FunctionContext,
    args: Vec<Argument>,
    opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError>;

/// Properties that control how a function's arguments are parsed.
#[derive(Debug, Clone, Copy)]
pub struct FunctionPropSpec {
    /// The number of required arguments.
    pub num_args: usize,
    /// The type of each argument, optional ones first. Missing entries are
    /// [`ArgType::Auto`].
    pub arg_types: &'static [ArgType],
    /// Whether the function is allowed in text mode.
    pub allowed_in_text: bool,
    /// Whether the function is allowed in math mode.
    pub allowed_in_math: bool,
    /// The number of optional `[...]` arguments, which precede the required
    /// ones.
    pub num_optional_args: usize,
    /// Whether the function splits its group in two, like `\over`.
    pub infix: bool,
}

impl Default for FunctionPropSpec {
    fn default() -> Self {
        Self {
            num_args: 0,
            arg_types: &[],
            allowed_in_text: false,
            allowed_in_math: true,
            num_optional_args: 0,
            infix: false,
        }
    }
}

impl FunctionPropSpec {
    /// The type of argument `index`, counting optional arguments first.
    #[must_use]
    pub fn arg_type(&self, index: usize) -> ArgType {
        self.arg_types.get(index).copied().unwrap_or(ArgType::Auto)
    }
}

/// A function definition, as written in the `functions` modules.
pub struct FunctionDefSpec<'b> {
    /// Atom type produced, when the function has its own box builder.
    pub atom_type: Option<AtomType>,
    /// Command names, with backslash.
    pub names: &'b [&'b str],
    /// Argument parsing properties.
    pub props: FunctionPropSpec,
    /// Handler.
    pub handler: FunctionHandler,
    /// Box builder for `atom_type`.
    pub box_builder: Option<BoxBuilder>,
}

/// A registered function.
#[derive(Debug, Clone, Copy)]
pub struct FunctionSpec {
    /// Argument parsing properties.
    pub props: FunctionPropSpec,
    /// Handler.
    pub handler: FunctionHandler,
}

/// Wraps a single-atom body: the children of an unbraced or braced group,
/// or the atom itself.
#[must_use]
pub fn ord_argument(parser: &Parser, id: AtomId) -> Vec<AtomId> {
    match &parser.tree[id].kind {
        AtomKind::Group { body, .. } => body.clone(),
        _ => vec![id],
    }
}
