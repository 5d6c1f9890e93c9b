//! LaTeX math parsing and TeX-style box layout.
//!
//! [`parse`] turns a LaTeX string into an [`AtomTree`], recovering from
//! every syntax error and reporting it. [`layout`] turns a tree into a
//! [`MathBox`] tree with TeX dimensions, spacing and metrics, ready for a
//! renderer to draw.
//!
//! ```rust
//! use mathbox::{GlobalContext, Settings, layout, parse};
//!
//! let output = parse(r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}", &Settings::default());
//! assert!(output.errors.is_empty());
//!
//! let root = layout(&output.tree, &GlobalContext::default());
//! assert!(root.width > 0.0);
//! ```
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::separated_literal_suffix)]
#![warn(clippy::ref_patterns)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]

extern crate alloc;
pub mod box_tree;
pub mod build_box;
pub mod build_common;
pub mod context;
pub mod core;
pub mod define_environment;
pub mod define_function;
pub mod delimiter;
pub mod font_metrics;
pub mod font_metrics_data;
pub mod functions;
pub mod lexer;
pub mod macro_expander;
pub mod macros;
/// Recursive-descent parsing of LaTeX into an atom tree.
pub mod parser;
pub mod registry;
pub mod spacing_data;
pub mod style;
pub mod symbols;
pub mod types;
pub mod units;

pub use crate::box_tree::{BoxType, MathBox};
pub use crate::context::{AtomIdPolicy, GlobalContext};
pub use crate::core::{ParseOutput, layout, parse, parse_with_listener};
pub use crate::macros::{MacroDefinition, MacroDictionary, MacroEntry};
pub use crate::parser::atom::{Atom, AtomId, AtomKind, AtomTree, AtomType};
pub use crate::spacing_data::AtomClass;
pub use crate::types::{LatexSyntaxError, Mode, ParseErrorCode, Settings};
