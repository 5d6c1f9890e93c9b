//! Font size commands, `\tiny` to `\Huge`.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::types::ArgType;

/// Size commands in order; a command's size is its index plus one.
const SIZE_FUNCS: [&str; 10] = [
    "\\tiny",
    "\\scriptsize",
    "\\footnotesize",
    "\\small",
    "\\normalsize",
    "\\large",
    "\\Large",
    "\\LARGE",
    "\\huge",
    "\\Huge",
];

/// Registers the size commands. Each applies to the rest of its group, in
/// math and in text.
pub fn define_sizing(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Sizing),
        names: &SIZE_FUNCS,
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Rest],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let size = SIZE_FUNCS
                .iter()
                .position(|name| *name == context.func_name)
                .map_or(5, |i| i as u8 + 1);
            let body = match args.into_iter().next() {
                Some(Argument::Atoms(body)) => body,
                _ => Vec::new(),
            };
            let command = context.func_name.to_owned();
            Ok(context.push(AtomKind::Sizing {
                command,
                size,
                body,
            }))
        },
        box_builder: Some(build_sizing),
    });
}

fn build_sizing(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Sizing { size, body, .. } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    layout.build_row(body, &ctx.having_size(*size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::{SCRIPT, TEXT};
    use crate::types::{LatexSyntaxError, Settings};

    fn width(latex: &str, ctx: &Context) -> f64 {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        Layout::new(&tree, Registry::global()).build_group(tree.root(), ctx).width
    }

    #[test]
    fn sizes_scale_glyphs() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        let base = width("x", &ctx);
        assert!((width("\\Large x", &ctx) - base * 1.44).abs() < 1e-9);
        assert!((width("\\tiny x", &ctx) - base * 0.5).abs() < 1e-9);
        assert!((width("\\normalsize x", &ctx) - base).abs() < 1e-9);
    }

    #[test]
    fn sizing_leaves_script_style() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, SCRIPT);
        let base = width("x", &Context::new(&global, TEXT));
        // the size applies on top of text style, not script style
        assert!((width("\\large x", &ctx) - base * 1.2).abs() < 1e-9);
    }
}
