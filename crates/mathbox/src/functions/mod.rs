//! Built-in commands.
//!
//! Each submodule registers a family of commands with the [`Registry`]:
//! the argument signature, the handler that turns parsed arguments into an
//! atom, and the box builder that lays that atom out. Symbols, operators
//! from the operator table and scripts are recognized by the parser itself
//! and only have their layout defined here.
//!
//! [`Registry`]: crate::registry::Registry

mod accent;
mod char;
mod color;
mod delimsizing;
mod enclose;
mod environment;
mod font;
mod genfrac;
mod html;
mod kern;
mod leftright;
mod lines;
mod mclass;
pub(crate) mod op;
mod phantom;
mod placeholder;
mod sizing;
mod sqrt;
mod styling;
mod supsub;
mod text;

/// Registers the accent commands, `\hat`, `\vec`, `\widehat` and the rest
/// of the accent table.
pub use accent::define_accent;

/// Registers `\char`, which makes a symbol from a character code.
///
/// The code is a number argument, so `\char"41`, `\char'101` and
/// `` \char`A `` all give `A`. Codes that are not Unicode scalar values are
/// reported as unexpected tokens.
pub use char::define_char;

/// Registers `\color` and `\textcolor`.
pub use color::define_color;

/// Registers the fixed-size delimiters, `\bigl` to `\Biggr`.
pub use delimsizing::define_delimsizing;

/// Registers `\boxed`, `\colorbox` and `\fcolorbox`.
pub use enclose::define_enclose;

/// Registers `\begin`.
///
/// `\begin{name}` looks `name` up among the registered environments, parses
/// the environment's own arguments and hands over to its handler, which
/// parses the body up to `\end`. The `\end` must name the same environment.
///
/// # Errors
///
/// - An unknown environment is skipped up to its `\end` and reported as
///   [`UnknownEnvironment`](crate::types::ParseErrorCode::UnknownEnvironment).
/// - A missing or mismatched `\end` is reported as
///   [`UnbalancedEnvironment`](crate::types::ParseErrorCode::UnbalancedEnvironment).
pub use environment::define_environment;

/// Registers the math font commands, `\mathrm` to `\mathfrak`, and
/// `\boldsymbol`.
pub use font::define_font;

/// Registers the generalized fractions.
///
/// This covers the prefix forms `\frac`, `\dfrac`, `\tfrac`, `\cfrac`,
/// `\binom`, `\dbinom`, `\tbinom` and `\genfrac`, and the infix forms
/// `\over`, `\atop`, `\choose`, `\brace`, `\brack` and `\above`, which take
/// everything before them in their group as the numerator and everything
/// after as the denominator.
pub use genfrac::define_genfrac;

/// Registers `\class` and `\cssId`.
pub use html::define_html;

/// Registers explicit spacing: `\,`, `\quad`, `\hspace`, `\kern` and the
/// rest.
pub use kern::define_kern;

/// Registers `\left`, `\middle` and `\right`.
pub use leftright::define_leftright;

/// Registers `\overline` and `\underline`.
pub use lines::define_lines;

/// Registers the class commands, `\mathord` to `\mathinner`.
pub use mclass::define_mclass;

/// Registers `\operatorname` and the layout of every operator atom.
pub use op::define_op;

/// Registers `\phantom`, `\hphantom`, `\vphantom` and `\smash`.
pub use phantom::define_phantom;

/// Registers `\placeholder`.
pub use placeholder::define_placeholder;

/// Registers the size commands, `\tiny` to `\Huge`.
pub use sizing::define_sizing;

/// Registers `\sqrt`.
///
/// ```latex
/// \sqrt{x}      % square root
/// \sqrt[3]{x}   % cube root
/// ```
pub use sqrt::define_sqrt;

/// Registers `\displaystyle`, `\textstyle`, `\scriptstyle` and
/// `\scriptscriptstyle`.
pub use styling::define_styling;

/// Registers the layout of superscripts and subscripts.
pub use supsub::define_supsub;

/// Registers `\text` and its font variants, and `\mbox`.
pub use text::define_text;
