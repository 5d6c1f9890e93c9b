//! Large operators and function names.
//!
//! Operators written as commands (`\sum`, `\lim`, `\sin`) are recognized by
//! the parser from the operator table; this module adds `\operatorname` and
//! lays out every operator atom, including limits placed above and below.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::build_common::{VListChild, VListParam, make_glyph, make_vlist};
use crate::context::Context;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, ord_argument,
};
use crate::font_metrics::FontFamily;
use crate::parser::atom::{AtomId, AtomKind, AtomType, Limits, OperatorName, Style, VariantStyle};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;

/// Registers `\operatorname` and `\operatorname*`.
pub fn define_op(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Operator),
        names: &["\\operatorname", "\\operatorname*"],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let body = atom_argument(&args, 0)?;
            let body = ord_argument(context.parser, body);
            let command = context.func_name.to_owned();
            let display_limits = command.ends_with('*');
            Ok(context.push(AtomKind::Operator {
                command,
                name: OperatorName::Body(body),
                limits: Limits::Auto,
                display_limits,
            }))
        },
        box_builder: Some(build_op),
    });
}

/// Whether the operator `id` takes its scripts as limits under `ctx`.
#[must_use]
pub fn uses_limits(layout: &Layout, id: AtomId, ctx: &Context) -> bool {
    match &layout.tree[id].kind {
        AtomKind::Operator {
            limits,
            display_limits,
            ..
        } => match limits {
            Limits::Limits => true,
            Limits::NoLimits => false,
            Limits::Auto => *display_limits && ctx.is_display(),
        },
        _ => false,
    }
}

/// Lays out the operator itself. Symbol operators come from the enlarged
/// fonts and are centred on the axis.
fn build_op(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Operator { name, .. } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    match name {
        OperatorName::Glyph(glyph) => {
            let family = if ctx.is_display() {
                FontFamily::Size2
            } else {
                FontFamily::Size1
            };
            let mut buf = [0u8; 4];
            let symbol = make_glyph(ctx, glyph.encode_utf8(&mut buf), family);
            let axis = ctx.font_metrics().axis_height;
            let shift = (symbol.height - symbol.depth) / 2.0 - axis;
            let italic = symbol.italic;
            let mut op = MathBox::row(vec![symbol.shifted(shift)]);
            op.italic = italic;
            op.with_class(AtomClass::Op)
        }
        OperatorName::Text(text) => {
            make_glyph(ctx, text, FontFamily::MainRegular).with_class(AtomClass::Op)
        }
        OperatorName::Body(body) => {
            let upright = ctx.with_style(&Style {
                variant_style: Some(VariantStyle::Up),
                ..Style::default()
            });
            layout.build_row(body, &upright).with_class(AtomClass::Op)
        }
    }
}

/// Lays out an operator with limits above and below, following the TeXbook,
/// rule 13a.
#[must_use]
pub fn build_limits(
    layout: &Layout,
    op: AtomId,
    sup: Option<AtomId>,
    sub: Option<AtomId>,
    ctx: &Context,
) -> MathBox {
    let base = layout.build_group(op, ctx);
    let sup = sup.map(|id| layout.build_group(id, &ctx.having_style(ctx.mathstyle.sup())));
    let sub = sub.map(|id| layout.build_group(id, &ctx.having_style(ctx.mathstyle.sub())));
    let metrics = ctx.font_metrics();
    let slant = base.italic;

    let width = [Some(&base), sup.as_ref(), sub.as_ref()]
        .into_iter()
        .flatten()
        .map(|b| b.width)
        .fold(0.0, f64::max);
    let place = |mut b: MathBox, offset: f64| {
        b.left = (width - b.width) / 2.0 + offset;
        b
    };
    let base_depth = base.depth;
    let base_height = base.height;
    let base = place(base, 0.0);

    let list = match (sup, sub) {
        (Some(sup), Some(sub)) => {
            let sup_kern = metrics.big_op_spacing1.max(metrics.big_op_spacing3 - sup.depth);
            let sub_kern = metrics.big_op_spacing2.max(metrics.big_op_spacing4 - sub.height);
            let bottom = metrics.big_op_spacing5 + sub.total_height() + sub_kern + base_depth;
            make_vlist(VListParam::Bottom {
                position: bottom,
                children: vec![
                    VListChild::Kern(metrics.big_op_spacing5),
                    VListChild::Elem(place(sub, -slant / 2.0)),
                    VListChild::Kern(sub_kern),
                    VListChild::Elem(base),
                    VListChild::Kern(sup_kern),
                    VListChild::Elem(place(sup, slant / 2.0)),
                    VListChild::Kern(metrics.big_op_spacing5),
                ],
            })
        }
        (None, Some(sub)) => {
            let sub_kern = metrics.big_op_spacing2.max(metrics.big_op_spacing4 - sub.height);
            make_vlist(VListParam::Top {
                position: base_height,
                children: vec![
                    VListChild::Kern(metrics.big_op_spacing5),
                    VListChild::Elem(place(sub, -slant / 2.0)),
                    VListChild::Kern(sub_kern),
                    VListChild::Elem(base),
                ],
            })
        }
        (Some(sup), None) => {
            let sup_kern = metrics.big_op_spacing1.max(metrics.big_op_spacing3 - sup.depth);
            make_vlist(VListParam::Bottom {
                position: base_depth,
                children: vec![
                    VListChild::Elem(base),
                    VListChild::Kern(sup_kern),
                    VListChild::Elem(place(sup, slant / 2.0)),
                    VListChild::Kern(metrics.big_op_spacing5),
                ],
            })
        }
        (None, None) => return base,
    };
    list.with_class(AtomClass::Op).with_hint("limits")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxType;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::{DISPLAY, TEXT};
    use crate::types::{LatexSyntaxError, Settings};

    fn build(latex: &str, style: &'static crate::style::Mathstyle) -> MathBox {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        Layout::new(&tree, Registry::global()).build_group(tree.root(), &Context::new(&global, style))
    }

    #[test]
    fn display_operators_are_larger() {
        let display = build("\\sum", DISPLAY);
        let text = build("\\sum", TEXT);
        assert!(display.width > text.width);
        assert_eq!(display.children[0].kind, BoxType::Op);
    }

    #[test]
    fn limits_go_above_and_below_in_display() {
        let display = build("\\sum_{i=1}^n", DISPLAY);
        let text = build("\\sum_{i=1}^n", TEXT);
        let limits = &display.children[0];
        assert!(limits.classes.iter().any(|c| c == "limits"));
        assert_eq!(limits.class, Some(AtomClass::Op));
        assert!(display.total_height() > text.total_height());
        assert!(!text.children[0].classes.iter().any(|c| c == "limits"));
    }

    #[test]
    fn limits_commands_override_the_default() {
        let forced = build("\\int\\limits_0^1", TEXT);
        assert!(forced.children[0].classes.iter().any(|c| c == "limits"));
        let scripts = build("\\lim\\nolimits_{x}", DISPLAY);
        assert!(!scripts.children[0].classes.iter().any(|c| c == "limits"));
    }

    #[test]
    fn operatorname_is_upright() {
        let b = build("\\operatorname{sn}", TEXT);
        let glyph = b.descendants().into_iter().find_map(|d| d.glyph.clone());
        assert_eq!(glyph.map(|g| g.family), Some(FontFamily::MainRegular));
        assert_eq!(b.children[0].class, Some(AtomClass::Op));
    }
}
