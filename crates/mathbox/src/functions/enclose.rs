//! Framed and shaded boxes: `\boxed`, `\colorbox` and `\fcolorbox`.
//!
//! The body is padded by `\fboxsep` on every side. A frame of `\fboxrule`
//! is drawn outside the padding; its width is part of the box.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, string_argument,
};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::ArgType;

/// Registers `\boxed`, `\colorbox` and `\fcolorbox`.
pub fn define_enclose(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Boxed),
        names: &["\\boxed"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Math],
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let body = atom_argument(&args, 0)?;
            Ok(context.push(AtomKind::Boxed {
                command: "\\boxed".to_owned(),
                body,
                background: None,
                border: None,
            }))
        },
        box_builder: Some(build_boxed),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Boxed),
        names: &["\\colorbox"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: &[ArgType::String, ArgType::Text],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let background = string_argument(&args, 0);
            let body = atom_argument(&args, 1)?;
            Ok(context.push(AtomKind::Boxed {
                command: "\\colorbox".to_owned(),
                body,
                background: Some(background),
                border: None,
            }))
        },
        box_builder: None,
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Boxed),
        names: &["\\fcolorbox"],
        props: FunctionPropSpec {
            num_args: 3,
            arg_types: &[ArgType::String, ArgType::String, ArgType::Text],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let border = string_argument(&args, 0);
            let background = string_argument(&args, 1);
            let body = atom_argument(&args, 2)?;
            Ok(context.push(AtomKind::Boxed {
                command: "\\fcolorbox".to_owned(),
                body,
                background: Some(background),
                border: Some(border),
            }))
        },
        box_builder: None,
    });
}

/// One side of a frame. Under a phantom context only its space is kept.
fn frame_rule(ctx: &Context, color: Option<&str>, width: f64, height: f64, depth: f64) -> MathBox {
    if ctx.phantom {
        return MathBox::strut(width, height, depth);
    }
    let mut rule = MathBox::rule(width, height, depth);
    rule.color = color.map(ToOwned::to_owned);
    rule
}

fn build_boxed(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Boxed {
        command,
        body,
        background,
        border,
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };
    // `\colorbox` is the only one without a frame
    let framed = command != "\\colorbox";
    let pad = ctx.register_em("fboxsep");
    let thickness = if framed { ctx.register_em("fboxrule") } else { 0.0 };
    let inset = pad + thickness;

    let mut inner = layout.build_group(*body, ctx);
    let width = inner.width + 2.0 * inset;
    let height = inner.height + inset;
    let depth = inner.depth + inset;
    inner.left = inset;

    let mut children = vec![MathBox::strut(width, height, depth), inner];
    if framed {
        let color = border
            .as_deref()
            .map(|c| ctx.global.resolve_color(c))
            .or_else(|| ctx.color());
        let color = color.as_deref();
        children.push(frame_rule(ctx, color, width, thickness, 0.0).shifted(thickness - height));
        children.push(frame_rule(ctx, color, width, 0.0, thickness).shifted(depth - thickness));
        children.push(frame_rule(ctx, color, thickness, height, depth));
        let mut right = frame_rule(ctx, color, thickness, height, depth);
        right.left = width - thickness;
        children.push(right);
    }

    let mut result = MathBox::stack(children)
        .with_class(AtomClass::Ord)
        .with_hint(command.trim_start_matches('\\'));
    result.background_color = background
        .as_deref()
        .map(|c| ctx.global.resolve_background_color(c));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxType;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::TEXT;
    use crate::types::{LatexSyntaxError, Settings};

    fn build(latex: &str) -> MathBox {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        Layout::new(&tree, Registry::global()).build_group(tree.root(), &ctx)
    }

    fn rules(b: &MathBox) -> Vec<&MathBox> {
        b.descendants()
            .into_iter()
            .filter(|d| d.kind == BoxType::Rule)
            .collect()
    }

    #[test]
    fn boxed_adds_padding_and_frame() {
        let plain = build("x");
        let boxed = build("\\boxed{x}");
        // 3pt of padding and 0.4pt of rule on each side
        assert!((boxed.width - plain.width - 0.68).abs() < 1e-9);
        assert!((boxed.height - plain.height - 0.34).abs() < 1e-9);
        assert!((boxed.depth - plain.depth - 0.34).abs() < 1e-9);
        assert_eq!(rules(&boxed).len(), 4);
    }

    #[test]
    fn colorbox_is_shaded_without_a_frame() {
        let b = build("\\colorbox{yellow}{ab}");
        let shaded = &b.children[0];
        assert_eq!(shaded.background_color.as_deref(), Some("#ffff00"));
        assert!(rules(&b).is_empty());
        assert_eq!(b.text(), "ab");
    }

    #[test]
    fn fcolorbox_frame_takes_its_colour() {
        let b = build("\\fcolorbox{red}{white}{a}");
        let frame = rules(&b);
        assert_eq!(frame.len(), 4);
        assert!(frame.iter().all(|r| r.color.as_deref() == Some("#ff0000")));
        assert_eq!(b.children[0].background_color.as_deref(), Some("#ffffff"));
    }
}
