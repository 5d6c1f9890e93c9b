//! `\overline` and `\underline`.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::build_common::{VListChild, VListParam, make_line, make_vlist};
use crate::context::Context;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;

/// Registers `\overline` and `\underline`.
pub fn define_lines(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Overline),
        names: &["\\overline"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let body = atom_argument(&args, 0)?;
            Ok(context.push(AtomKind::Overline { body }))
        },
        box_builder: Some(build_overline),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Underline),
        names: &["\\underline"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let body = atom_argument(&args, 0)?;
            Ok(context.push(AtomKind::Underline { body }))
        },
        box_builder: Some(build_underline),
    });
}

/// TeXbook, rule 9: the body in the cramped style, a rule 3θ above it and
/// θ of space above the rule.
fn build_overline(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Overline { body } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let inner = layout.build_group(*body, &ctx.having_cramped_style());
    let theta = ctx.font_metrics().default_rule_thickness;
    let line = make_line(ctx, inner.width, None);
    make_vlist(VListParam::FirstBaseline {
        children: vec![
            VListChild::Elem(inner),
            VListChild::Kern(3.0 * theta),
            VListChild::Elem(line),
            VListChild::Kern(theta),
        ],
    })
    .with_class(AtomClass::Ord)
}

/// TeXbook, rule 10: a rule 3θ below the body and θ of space below it.
fn build_underline(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Underline { body } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let inner = layout.build_group(*body, ctx);
    let theta = ctx.font_metrics().default_rule_thickness;
    let line = make_line(ctx, inner.width, None);
    make_vlist(VListParam::Top {
        position: inner.height,
        children: vec![
            VListChild::Kern(theta),
            VListChild::Elem(line),
            VListChild::Kern(3.0 * theta),
            VListChild::Elem(inner),
        ],
    })
    .with_class(AtomClass::Ord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxType;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::TEXT;
    use crate::types::{LatexSyntaxError, Settings};

    fn build(latex: &str, atom_type: AtomType) -> (MathBox, MathBox) {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        let layout = Layout::new(&tree, Registry::global());
        let ctx = Context::new(&global, TEXT);
        let id = tree.find(atom_type)[0];
        let body = tree[id].kind.children()[0];
        (layout.build_group(id, &ctx), layout.build_group(body, &ctx))
    }

    #[test]
    fn overline_adds_five_rule_thicknesses() {
        let (over, body) = build("\\overline{x}", AtomType::Overline);
        assert!((over.height - body.height - 5.0 * 0.04).abs() < 1e-9);
        assert!((over.depth - body.depth).abs() < 1e-9);
        assert!(over.descendants().iter().any(|b| b.kind == BoxType::Rule));
    }

    #[test]
    fn underline_hangs_below() {
        let (under, body) = build("\\underline{y}", AtomType::Underline);
        assert!((under.depth - body.depth - 5.0 * 0.04).abs() < 1e-9);
        assert!((under.height - body.height).abs() < 1e-9);
    }
}
