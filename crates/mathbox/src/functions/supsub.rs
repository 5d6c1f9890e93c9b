//! Superscripts and subscripts.
//!
//! The parser builds script atoms itself; this module only lays them out.
//! Scripts on an operator that takes limits are handed to the operator
//! layout instead.

use crate::box_tree::{BoxType, MathBox};
use crate::build_box::{Layout, Side, error_box, outer_class};
use crate::build_common::{VListParam, make_vlist};
use crate::context::Context;
use crate::functions::op::{build_limits, uses_limits};
use crate::parser::atom::{AtomId, AtomKind, AtomTree, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;

/// Registers the script layout.
pub fn define_supsub(registry: &mut Registry) {
    registry.define_box_builder(AtomType::SupSub, build_supsub);
}

/// Whether `id` lays out as a single glyph, looking through single-atom
/// groups and font or colour changes.
fn is_character(tree: &AtomTree, id: AtomId) -> bool {
    match &tree[id].kind {
        AtomKind::Symbol { .. } => true,
        AtomKind::Group { body, .. }
        | AtomKind::Font { body, .. }
        | AtomKind::Color { body, .. } => {
            body.len() == 1 && is_character(tree, body[0])
        }
        _ => false,
    }
}

/// Lays out a base with scripts following the TeXbook, rule 18.
fn build_supsub(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::SupSub { base, sup, sub } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    if let Some(base) = base
        && uses_limits(layout, *base, ctx)
    {
        return build_limits(layout, *base, *sup, *sub, ctx);
    }

    let base_box = base.map_or_else(
        || MathBox::default().with_class(AtomClass::Ord),
        |base| layout.build_group(base, ctx),
    );
    let class = outer_class(&base_box, Side::Right).map_or(AtomClass::Ord, |(class, _)| class);
    // italic correction moves a superscript right of a single glyph
    let italic = match base {
        Some(base)
            if is_character(layout.tree, *base)
                || matches!(layout.tree[*base].kind, AtomKind::Operator { .. }) =>
        {
            base_box.italic
        }
        _ => 0.0,
    };

    let sup_ctx = ctx.having_style(ctx.mathstyle.sup());
    let sub_ctx = ctx.having_style(ctx.mathstyle.sub());
    let sup_box = sup.map(|sup| layout.build_group(sup, &sup_ctx));
    let sub_box = sub.map(|sub| layout.build_group(sub, &sub_ctx));

    // rule 18a
    let (mut sup_shift, mut sub_shift) = if base.is_some_and(|b| is_character(layout.tree, b)) {
        (0.0, 0.0)
    } else {
        (
            base_box.height - sup_ctx.font_metrics().sup_drop,
            base_box.depth + sub_ctx.font_metrics().sub_drop,
        )
    };

    let metrics = ctx.font_metrics();
    let min_sup_shift = if ctx.is_display() {
        metrics.sup1
    } else if ctx.mathstyle.cramped {
        metrics.sup3
    } else {
        metrics.sup2
    };

    let scripts = match (sup_box, sub_box) {
        (Some(mut sup), Some(sub)) => {
            // rules 18c to 18e
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth + 0.25 * metrics.x_height);
            sub_shift = sub_shift.max(metrics.sub2);
            let gap_min = 4.0 * metrics.default_rule_thickness;
            if (sup_shift - sup.depth) - (sub.height - sub_shift) < gap_min {
                sub_shift = gap_min - (sup_shift - sup.depth) + sub.height;
                let psi = 0.8 * metrics.x_height - (sup_shift - sup.depth);
                if psi > 0.0 {
                    sup_shift += psi;
                    sub_shift -= psi;
                }
            }
            sup.left = italic;
            make_vlist(VListParam::IndividualShift {
                children: vec![(sub, sub_shift), (sup, -sup_shift)],
            })
        }
        (None, Some(sub)) => {
            // rule 18b
            sub_shift = sub_shift
                .max(metrics.sub1)
                .max(sub.height - 0.8 * metrics.x_height);
            make_vlist(VListParam::IndividualShift {
                children: vec![(sub, sub_shift)],
            })
        }
        (Some(mut sup), None) => {
            // rule 18c
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth + 0.25 * metrics.x_height);
            sup.left = italic;
            make_vlist(VListParam::IndividualShift {
                children: vec![(sup, -sup_shift)],
            })
        }
        (None, None) => return base_box,
    };

    let space = MathBox::kern(ctx.register_em("scriptspace"));
    MathBox::row(vec![base_box, scripts, space])
        .with_class(class)
        .with_kind(BoxType::SupSub)
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
        let id = tree.find(AtomType::SupSub)[0];
        Layout::new(&tree, Registry::global()).build_group(id, &Context::new(&global, TEXT))
    }

    #[test]
    fn superscripts_rise_and_subscripts_drop() {
        let sup = build("x^2");
        let sub = build("x_2");
        assert_eq!(sup.kind, BoxType::SupSub);
        assert!(sup.height > 0.6);
        assert!(sub.depth > 0.14);
        assert!(sub.height < sup.height);
    }

    #[test]
    fn both_scripts_keep_their_gap() {
        let b = build("x_2^2");
        let scripts = &b.children[1];
        let (sub, sup) = (&scripts.children[0], &scripts.children[1]);
        let gap = (-sup.shift - sup.depth) - (sub.height - sub.shift);
        assert!(gap >= 4.0 * 0.04 - 1e-9, "gap {gap}");
    }

    #[test]
    fn scripts_are_smaller_and_tight() {
        let b = build("x^2");
        let two = &b.children[1].children[0];
        assert!(two.tight);
        assert!((two.width - 0.35).abs() < 1e-9);
    }

    #[test]
    fn class_comes_from_the_base() {
        let b = build("=^2");
        assert_eq!(b.class, Some(AtomClass::Rel));
        let orphan = build("^2");
        assert_eq!(orphan.class, Some(AtomClass::Ord));
    }

    #[test]
    fn tall_bases_push_scripts_further() {
        let plain = build("x^2");
        let tall = build("{\\frac{a}{b}}^2");
        assert!(tall.height > plain.height);
    }
}
