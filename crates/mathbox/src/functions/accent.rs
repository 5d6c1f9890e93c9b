//! Accents over a base: `\hat{x}`, `\vec{v}`, `\widehat{xyz}`.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::build_common::{VListChild, VListParam, make_glyph, make_vlist};
use crate::context::Context;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument};
use crate::font_metrics::FontFamily;
use crate::parser::atom::{AtomId, AtomKind, AtomTree, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::symbols::ACCENTS;
use crate::types::{ParseError, ParseErrorCode};

/// Registers every command of the accent table.
pub fn define_accent(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Accent),
        names: &[
            "\\hat",
            "\\check",
            "\\tilde",
            "\\acute",
            "\\grave",
            "\\dot",
            "\\ddot",
            "\\breve",
            "\\bar",
            "\\vec",
            "\\mathring",
            "\\widehat",
            "\\widetilde",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let info = ACCENTS
                .get(context.func_name)
                .copied()
                .ok_or_else(|| ParseError::at(ParseErrorCode::UnknownCommand, context.token))?;
            let base = atom_argument(&args, 0)?;
            let command = context.func_name.to_owned();
            Ok(context.push(AtomKind::Accent {
                command,
                accent: info.glyph,
                wide: info.wide,
                base,
            }))
        },
        box_builder: Some(build_accent),
    });
}

/// The single symbol a base reduces to, looking through braces.
fn single_symbol(tree: &AtomTree, id: AtomId) -> Option<AtomId> {
    match &tree[id].kind {
        AtomKind::Symbol { .. } => Some(id),
        AtomKind::Group { body, .. } if body.len() == 1 => single_symbol(tree, body[0]),
        _ => None,
    }
}

/// Lays out an accent following the TeXbook, rule 12.
fn build_accent(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Accent {
        accent, wide, base, ..
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };
    let base_box = layout.build_group(*base, &ctx.having_cramped_style());
    let clearance = base_box.height.min(ctx.font_metrics().x_height);

    // only a single character has a meaningful skew
    let skew = if single_symbol(layout.tree, *base).is_some() {
        base_box
            .descendants()
            .into_iter()
            .find(|b| b.glyph.is_some())
            .map_or(0.0, |glyph| glyph.skew)
    } else {
        0.0
    };

    let mut buf = [0u8; 4];
    let mut accent_box = make_glyph(ctx, accent.encode_utf8(&mut buf), FontFamily::MainRegular);
    accent_box.italic = 0.0;
    let accent_box = if *wide {
        accent_box.width = base_box.width;
        accent_box.with_hint("stretched")
    } else {
        accent_box.left = (base_box.width - accent_box.width) / 2.0 + skew;
        accent_box
    };

    let italic = base_box.italic;
    let mut result = make_vlist(VListParam::FirstBaseline {
        children: vec![
            VListChild::Elem(base_box),
            VListChild::Kern(-clearance),
            VListChild::Elem(accent_box),
        ],
    })
    .with_class(AtomClass::Ord)
    .with_hint("accent");
    result.italic = italic;
    result
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
        let id = tree.find(AtomType::Accent)[0];
        Layout::new(&tree, Registry::global()).build_group(id, &Context::new(&global, TEXT))
    }

    #[test]
    fn accents_sit_above_the_base() {
        let x = build("\\hat{x}");
        assert!(x.height > 0.431);
        assert_eq!(x.class, Some(AtomClass::Ord));
        // a taller base lifts the accent by the difference above x-height
        let a = build("\\hat{A}");
        assert!(a.height > x.height);
    }

    #[test]
    fn narrow_accents_are_centred() {
        let b = build("\\bar{m}");
        let (base, accent) = (&b.children[0], &b.children[1]);
        let centre = accent.left + accent.width / 2.0;
        assert!((centre - base.width / 2.0).abs() < 0.1);
    }

    #[test]
    fn wide_accents_stretch_over_the_base() {
        let b = build("\\widehat{xyz}");
        let (base, accent) = (&b.children[0], &b.children[1]);
        assert!((accent.width - base.width).abs() < 1e-9);
        assert!(accent.classes.iter().any(|c| c == "stretched"));
    }
}
