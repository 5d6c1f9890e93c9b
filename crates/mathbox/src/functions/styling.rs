//! Math style switches.

use core::str::FromStr as _;

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::style::MathstyleName;
use crate::types::{ArgType, ParseError, ParseErrorCode};

/// Register `\displaystyle`, `\textstyle`, `\scriptstyle` and
/// `\scriptscriptstyle`
pub fn define_styling(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Styling),
        names: &[
            "\\displaystyle",
            "\\textstyle",
            "\\scriptstyle",
            "\\scriptscriptstyle",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Rest],
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let mathstyle = MathstyleName::from_str(context.bare_name())
                .map_err(|_| ParseError::at(ParseErrorCode::UnknownCommand, context.token))?;
            let body = match args.into_iter().next() {
                Some(Argument::Atoms(body)) => body,
                _ => Vec::new(),
            };
            Ok(context.push(AtomKind::Styling { mathstyle, body }))
        },
        box_builder: Some(build_styling),
    });
}

/// The body in the forced style. The switch itself has no class, so the
/// glue around it follows the styled content.
fn build_styling(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Styling { mathstyle, body } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    layout.build_row(body, &ctx.having_style(mathstyle.style()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::TEXT;
    use crate::types::{LatexSyntaxError, Settings};

    fn build(latex: &str) -> MathBox {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        Layout::new(&tree, Registry::global()).build_group(tree.root(), &Context::new(&global, TEXT))
    }

    #[test]
    fn scriptstyle_shrinks_the_rest_of_the_group() {
        let plain = build("xx");
        let small = build("x{\\scriptstyle x}");
        assert!((small.width - plain.width * 0.85).abs() < 1e-9);
    }

    #[test]
    fn displaystyle_enlarges_operators() {
        let text = build("\\sum");
        let display = build("\\displaystyle\\sum");
        assert!(display.total_height() > text.total_height());
    }
}
