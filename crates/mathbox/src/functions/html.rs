//! `\class` and `\cssId`: presentation hints that do not change the layout.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, ord_argument,
    string_argument,
};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::types::ArgType;

/// Register `\class` and `\cssId`
pub fn define_html(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Html),
        names: &["\\class", "\\cssId"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: &[ArgType::String, ArgType::Auto],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let value = string_argument(&args, 0);
            let arg = atom_argument(&args, 1)?;
            let body = ord_argument(context.parser, arg);
            let command = context.func_name.to_owned();
            Ok(context.push(AtomKind::Html {
                command,
                value,
                body,
            }))
        },
        box_builder: Some(build_html),
    });
}

fn build_html(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Html {
        command,
        value,
        body,
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };
    let mut result = layout.build_row(body, ctx);
    if command == "\\cssId" {
        result.id = Some(value.clone());
    } else {
        result.classes.extend(value.split_whitespace().map(ToOwned::to_owned));
    }
    result
}
