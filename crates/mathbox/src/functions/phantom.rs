//! Phantoms and `\smash`: the body's geometry without its ink, or its ink
//! without its vertical extent.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument};
use crate::parser::atom::{AtomId, AtomKind, AtomType, PhantomKind};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;

/// Registers `\phantom`, `\hphantom`, `\vphantom` and `\smash`.
pub fn define_phantom(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Phantom),
        names: &["\\phantom", "\\hphantom", "\\vphantom", "\\smash"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let body = atom_argument(&args, 0)?;
            let kind = match context.func_name {
                "\\hphantom" => PhantomKind::Horizontal,
                "\\vphantom" => PhantomKind::Vertical,
                "\\smash" => PhantomKind::Smash,
                _ => PhantomKind::Full,
            };
            Ok(context.push(AtomKind::Phantom { kind, body }))
        },
        box_builder: Some(build_phantom),
    });
}

fn build_phantom(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Phantom { kind, body } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let result = match kind {
        PhantomKind::Full => MathBox::row(vec![layout.build_group(*body, &ctx.with_phantom())]),
        PhantomKind::Horizontal => {
            let inner = layout.build_group(*body, &ctx.with_phantom());
            MathBox::strut(inner.width, 0.0, 0.0)
        }
        PhantomKind::Vertical => {
            let inner = layout.build_group(*body, &ctx.with_phantom());
            MathBox::strut(0.0, inner.height, inner.depth)
        }
        PhantomKind::Smash => {
            let mut smashed = MathBox::row(vec![layout.build_group(*body, ctx)]);
            smashed.height = 0.0;
            smashed.depth = 0.0;
            smashed
        }
    };
    result.with_class(AtomClass::Ord)
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
    fn phantoms_keep_geometry_but_not_ink() {
        let plain = build("x+y");
        let ghost = build("\\phantom{x+y}");
        assert!((ghost.width - plain.width).abs() < 1e-9);
        assert!((ghost.height - plain.height).abs() < 1e-9);
        assert!(ghost.text().is_empty());
    }

    #[test]
    fn one_dimensional_phantoms() {
        let h = build("\\hphantom{\\frac{1}{2}}");
        assert!(h.width > 0.0);
        assert_eq!(h.total_height(), 0.0);
        let v = build("\\vphantom{(}");
        assert_eq!(v.width, 0.0);
        assert!(v.height > 0.7);
    }

    #[test]
    fn smash_keeps_ink_but_not_height() {
        let b = build("\\smash{y}");
        assert_eq!(b.text(), "y");
        assert_eq!(b.depth, 0.0);
        assert_eq!(b.height, 0.0);
    }
}
