//! Environment definitions.
//!
//! An environment is invoked as `\begin{name}..\end{name}`. `\begin` looks
//! the name up here, parses the environment's arguments with the same
//! sub-grammars as functions, and hands control to the environment's
//! handler, which parses the body.

mod array;

use crate::define_function::{Argument, FunctionPropSpec};
use crate::parser::Parser;
use crate::parser::atom::AtomId;
use crate::types::{Mode, ParseError, SourceLocation};

pub use array::{ArrayConfig, define_array, parse_array};

/// Context passed to environment handlers.
pub struct EnvContext<'c, 'a> {
    /// The mode the environment was opened in.
    pub mode: Mode,
    /// The environment name, such as `pmatrix`.
    pub env_name: &'c str,
    /// The parser, positioned after the environment's arguments.
    pub parser: &'c mut Parser<'a>,
    /// Span of `\begin{name}` and its arguments.
    pub loc: Option<SourceLocation>,
}

/// Parses an environment body and builds its atom.
pub type EnvHandler = fn(
    context: EnvContext,
    args: Vec<Argument>,
    opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError>;

/// An environment definition, as written in the environment modules.
pub struct EnvDefSpec<'b> {
    /// Environment names.
    pub names: &'b [&'b str],
    /// Argument parsing properties; `allowed_in_math` is ignored.
    pub props: FunctionPropSpec,
    /// Handler.
    pub handler: EnvHandler,
}

/// A registered environment.
#[derive(Debug, Clone, Copy)]
pub struct EnvSpec {
    /// Argument parsing properties.
    pub props: FunctionPropSpec,
    /// Handler.
    pub handler: EnvHandler,
}
