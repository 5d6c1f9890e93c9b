//! Square roots and n-th roots, `\sqrt[index]{body}`.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::build_common::{VListChild, VListParam, make_line, make_vlist};
use crate::context::Context;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument};
use crate::delimiter::make_surd;
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::style::SCRIPTSCRIPT;

/// Registers `\sqrt`.
pub fn define_sqrt(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Radical),
        names: &["\\sqrt"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, opt_args| {
            let body = atom_argument(&args, 0)?;
            let index = opt_args
                .into_iter()
                .next()
                .flatten()
                .and_then(|arg| arg.as_atom());
            Ok(context.push(AtomKind::Radical { body, index }))
        },
        box_builder: Some(build_radical),
    });
}

/// Lays out a radical following the TeXbook, rule 11.
fn build_radical(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Radical { body, index } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };

    // the radicand is set in the cramped style
    let mut inner = layout.build_group(*body, &ctx.having_cramped_style());
    let metrics = ctx.font_metrics();
    if inner.total_height() == 0.0 {
        inner.height = metrics.x_height;
    }

    let theta = metrics.default_rule_thickness;
    let phi = if ctx.is_display() {
        metrics.x_height
    } else {
        theta
    };
    let mut line_clearance = theta + phi / 4.0;
    let min_delimiter_height = inner.total_height() + line_clearance + theta;

    let (surd, rule_width) = make_surd(ctx, min_delimiter_height);

    // share any excess of the surd equally above and below the radicand
    let delim_depth = surd.total_height() - rule_width;
    if delim_depth > inner.total_height() + line_clearance {
        line_clearance = (line_clearance + delim_depth - inner.total_height()) / 2.0;
    }

    // the top of the surd is the top of the vinculum
    let vinculum_top = inner.height + line_clearance + rule_width;
    let shift = surd.height - vinculum_top;
    let surd = surd.shifted(shift);

    let width = inner.width;
    let body = make_vlist(VListParam::FirstBaseline {
        children: vec![
            VListChild::Elem(inner),
            VListChild::Kern(line_clearance),
            VListChild::Elem(make_line(ctx, width, Some(rule_width))),
        ],
    });
    let radical = MathBox::row(vec![surd, body]).with_class(AtomClass::Ord);

    let Some(index) = index else {
        return radical;
    };

    // the index is raised to 60% of the radical's extent above the baseline
    let root = layout.build_group(*index, &ctx.having_style(SCRIPTSCRIPT));
    let raise = 0.6 * (radical.height - radical.depth);
    let em = ctx.scaling_factor();
    MathBox::row(vec![
        MathBox::kern(5.0 / 18.0 * em),
        MathBox::row(vec![root]).shifted(-raise),
        MathBox::kern(-10.0 / 18.0 * em),
        radical,
    ])
    .with_class(AtomClass::Ord)
}
