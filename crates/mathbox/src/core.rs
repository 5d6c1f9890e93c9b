//! Entry points: parsing LaTeX into an atom tree and laying a tree out.

use crate::box_tree::MathBox;
use crate::build_box::Layout;
use crate::context::{Context, GlobalContext};
use crate::parser::Parser;
use crate::parser::atom::AtomTree;
use crate::registry::Registry;
use crate::style::{DISPLAY, TEXT};
use crate::types::{LatexSyntaxError, Settings};

/// A parsed expression and the syntax errors recovered from on the way.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOutput {
    /// The atom tree. It is complete even when `errors` is not empty.
    pub tree: AtomTree,
    /// Errors in the order they were reported.
    pub errors: Vec<LatexSyntaxError>,
}

/// Parses `latex`, collecting errors.
#[must_use]
pub fn parse(latex: &str, settings: &Settings) -> ParseOutput {
    let mut errors = Vec::new();
    let tree = parse_with_listener(latex, settings, |err| errors.push(err));
    ParseOutput { tree, errors }
}

/// Parses `latex`, handing each syntax error to `listener` as soon as it is
/// recovered from.
#[must_use]
pub fn parse_with_listener<F>(latex: &str, settings: &Settings, mut listener: F) -> AtomTree
where
    F: FnMut(LatexSyntaxError),
{
    Parser::new(latex, settings, &mut listener).parse()
}

/// Lays out a tree, in display style if `global` asks for display mode.
#[must_use]
pub fn layout(tree: &AtomTree, global: &GlobalContext) -> MathBox {
    let mathstyle = if global.display_mode { DISPLAY } else { TEXT };
    log::debug!(
        "laying out {} atom(s), display mode {}",
        tree.len(),
        global.display_mode
    );
    let ctx = Context::new(global, mathstyle);
    let root = Layout::new(tree, Registry::global()).build_group(tree.root(), &ctx);
    log::debug!(
        "laid out {} box(es), {:.3}em wide",
        root.count(),
        root.width
    );
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParseErrorCode;

    #[test]
    fn errors_are_collected_in_order() {
        let output = parse("\\foo+\\frac{1}", &Settings::default());
        let codes: Vec<_> = output.errors.iter().map(|err| err.code).collect();
        assert_eq!(
            codes,
            [ParseErrorCode::UnknownCommand, ParseErrorCode::MissingArgument]
        );
        assert!(!output.tree.is_empty());
    }

    #[test]
    fn display_mode_selects_display_style() {
        let tree = parse("\\sum", &Settings::default()).tree;
        let inline = layout(&tree, &GlobalContext::default());
        let display = layout(
            &tree,
            &GlobalContext::builder().display_mode(true).build(),
        );
        assert!(display.total_height() > inline.total_height());
    }
}
