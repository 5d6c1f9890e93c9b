//! Explicit horizontal space.
//!
//! The math spaces `\,`, `\:` and `\;` (and `\!`, their negative) are the
//! `thinmuskip`, `medmuskip` and `thickmuskip` registers, so retuning a
//! register retunes them. The quads are fixed amounts. `\hspace`, `\hskip`
//! and `\mskip` take glue, `\kern` and `\mkern` a plain dimension.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::parser::atom::{AtomId, AtomKind, AtomType, SpacingAmount};
use crate::registry::Registry;
use crate::types::{ArgType, ParseError, ParseErrorCode};
use crate::units::{Dimension, DimensionUnit, Glue};

/// The amount a fixed spacing command stands for.
fn fixed_amount(command: &str) -> Option<SpacingAmount> {
    let register = |name: &str, negative| SpacingAmount::Register {
        name: name.to_owned(),
        negative,
    };
    let em = |size| SpacingAmount::Glue(Glue::fixed(Dimension::new(size, DimensionUnit::Em)));
    Some(match command {
        "\\," | "\\thinspace" => register("thinmuskip", false),
        "\\:" | "\\>" | "\\medspace" => register("medmuskip", false),
        "\\;" | "\\thickspace" => register("thickmuskip", false),
        "\\!" | "\\negthinspace" => register("thinmuskip", true),
        "\\negmedspace" => register("medmuskip", true),
        "\\negthickspace" => register("thickmuskip", true),
        "\\ " => em(1.0 / 3.0),
        "\\enspace" => em(0.5),
        "\\quad" => em(1.0),
        "\\qquad" => em(2.0),
        _ => return None,
    })
}

/// Registers the spacing commands.
pub fn define_kern(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Spacing),
        names: &[
            "\\,",
            "\\thinspace",
            "\\:",
            "\\>",
            "\\medspace",
            "\\;",
            "\\thickspace",
            "\\!",
            "\\negthinspace",
            "\\negmedspace",
            "\\negthickspace",
            "\\ ",
            "\\enspace",
            "\\quad",
            "\\qquad",
        ],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, _args, _opt_args| {
            let command = context.func_name.to_owned();
            let amount = fixed_amount(&command).ok_or_else(|| {
                ParseError::at(ParseErrorCode::UnknownCommand, context.token)
            })?;
            Ok(context.push(AtomKind::Spacing { command, amount }))
        },
        box_builder: Some(build_spacing),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Spacing),
        names: &["\\hspace", "\\hspace*", "\\hskip", "\\mskip"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Glue],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: spacing_handler,
        box_builder: None,
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Spacing),
        names: &["\\kern", "\\mkern"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Dimen],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: spacing_handler,
        box_builder: None,
    });
}

fn spacing_handler(
    mut context: FunctionContext,
    args: Vec<Argument>,
    _opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError> {
    let glue = match args.into_iter().next() {
        Some(Argument::Glue(glue)) => glue,
        Some(Argument::Dimension(dim)) => Glue::fixed(dim),
        _ => return Err(ParseError::at(ParseErrorCode::MissingArgument, context.token)),
    };
    if glue.glue.unit.is_infinite() {
        log::debug!("{} with infinite glue takes no space", context.func_name);
    }
    let command = context.func_name.to_owned();
    Ok(context.push(AtomKind::Spacing {
        command,
        amount: SpacingAmount::Glue(glue),
    }))
}

/// Explicit space only takes up width; its neighbours still see each other
/// for inter-atom spacing.
fn build_spacing(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Spacing { amount, .. } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let width = match amount {
        SpacingAmount::Register { name, negative } => {
            let natural = ctx.register_em(name);
            if *negative { -natural } else { natural }
        }
        SpacingAmount::Glue(glue) => ctx.to_em(glue.glue),
    };
    MathBox::kern(width)
}
