//! Slots to be filled in: `\placeholder`, and the `#1`/`#?` tokens the
//! parser turns into placeholder atoms.

use crate::box_tree::{BoxType, MathBox};
use crate::build_box::{Layout, error_box};
use crate::build_common::make_glyph;
use crate::context::Context;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::font_metrics::FontFamily;
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::ArgType;

/// Registers `\placeholder[value]`.
pub fn define_placeholder(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Placeholder),
        names: &["\\placeholder"],
        props: FunctionPropSpec {
            num_optional_args: 1,
            arg_types: &[ArgType::String],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, _args, opt_args| {
            let value = opt_args
                .into_iter()
                .flatten()
                .find_map(|arg| match arg {
                    Argument::String(s) if !s.is_empty() => Some(s),
                    _ => None,
                });
            Ok(context.push(AtomKind::Placeholder { value }))
        },
        box_builder: Some(build_placeholder),
    });
}

/// The placeholder glyph, as an ordinary box.
fn build_placeholder(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Placeholder { value } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let mut b = make_glyph(ctx, &ctx.global.placeholder_symbol, FontFamily::MainRegular)
        .with_class(AtomClass::Ord)
        .with_kind(BoxType::Placeholder);
    if let Some(value) = value {
        b.classes.push(format!("placeholder-{}", value.trim_start_matches('#')));
    }
    b
}
