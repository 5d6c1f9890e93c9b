//! Math font commands.
//!
//! A font command records its variant in the style of the atom it makes;
//! the layout cascade carries the style down to every glyph of the body.
//! The atom itself has no spacing class, so its content spaces as if the
//! command were not there.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, ord_argument,
};
use crate::parser::atom::{AtomId, AtomKind, AtomType, Style, Variant, VariantStyle};
use crate::registry::Registry;
use crate::types::{ArgType, ParseError};

/// The style a font command applies.
fn font_style(command: &str) -> Style {
    let (variant, variant_style) = match command {
        "\\mathrm" | "\\rm" => (Some(Variant::Normal), Some(VariantStyle::Up)),
        "\\mathit" | "\\it" => (Some(Variant::Normal), Some(VariantStyle::Italic)),
        "\\mathbf" | "\\bf" => (Some(Variant::Normal), Some(VariantStyle::Bold)),
        "\\boldsymbol" | "\\bm" => (None, Some(VariantStyle::BoldItalic)),
        "\\mathsf" | "\\sf" => (Some(Variant::SansSerif), Some(VariantStyle::Up)),
        "\\mathtt" | "\\tt" => (Some(Variant::Monospace), Some(VariantStyle::Up)),
        "\\mathbb" => (Some(Variant::DoubleStruck), None),
        "\\mathcal" | "\\cal" => (Some(Variant::Calligraphic), None),
        "\\mathfrak" => (Some(Variant::Fraktur), None),
        "\\mathscr" => (Some(Variant::Script), None),
        _ => (Some(Variant::Normal), None),
    };
    Style {
        variant,
        variant_style,
        ..Style::default()
    }
}

fn font_handler(
    mut context: FunctionContext,
    args: Vec<Argument>,
    _opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError> {
    let body = match args.first() {
        Some(Argument::Atoms(body)) => body.clone(),
        _ => {
            let arg = atom_argument(&args, 0)?;
            ord_argument(context.parser, arg)
        }
    };
    let command = context.func_name.to_owned();
    let style = font_style(&command);
    Ok(context.push_styled(AtomKind::Font { command, body }, style))
}

/// Registers `\mathrm` and friends, and the old-style switches `\rm`,
/// `\bf` and friends, which apply to the rest of their group.
pub fn define_font(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Font),
        names: &[
            "\\mathrm",
            "\\mathit",
            "\\mathbf",
            "\\mathsf",
            "\\mathtt",
            "\\mathbb",
            "\\mathcal",
            "\\mathfrak",
            "\\mathscr",
            "\\mathnormal",
            "\\boldsymbol",
            "\\bm",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: font_handler,
        box_builder: Some(build_font),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Font),
        names: &["\\rm", "\\it", "\\bf", "\\sf", "\\tt", "\\cal"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Rest],
            ..Default::default()
        },
        handler: font_handler,
        box_builder: None,
    });
}

fn build_font(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    match &layout.tree[id].kind {
        AtomKind::Font { body, .. } => layout.build_row(body, ctx),
        _ => error_box(ctx, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::font_metrics::FontFamily;
    use crate::parser::Parser;
    use crate::style::TEXT;
    use crate::types::{LatexSyntaxError, Settings};

    fn families(latex: &str) -> Vec<FontFamily> {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        let b = Layout::new(&tree, Registry::global())
            .build_group(tree.root(), &Context::new(&global, TEXT));
        b.descendants()
            .into_iter()
            .filter_map(|d| d.glyph.as_ref().map(|g| g.family))
            .collect()
    }

    #[test]
    fn variants_select_families() {
        assert_eq!(families("\\mathrm{x}"), [FontFamily::MainRegular]);
        assert_eq!(families("\\mathbf{x}"), [FontFamily::MainBold]);
        assert_eq!(families("\\mathbb{R}"), [FontFamily::Ams]);
        assert_eq!(families("\\mathcal{L}"), [FontFamily::Caligraphic]);
        assert_eq!(families("\\boldsymbol{x}"), [FontFamily::MathBoldItalic]);
    }

    #[test]
    fn inner_commands_win() {
        assert_eq!(
            families("\\mathbf{a\\mathrm{b}}"),
            [FontFamily::MainBold, FontFamily::MainRegular]
        );
    }

    #[test]
    fn switches_apply_to_the_rest_of_the_group() {
        assert_eq!(
            families("{x\\rm y}z"),
            [FontFamily::MathItalic, FontFamily::MainRegular, FontFamily::MathItalic]
        );
    }

    #[test]
    fn font_groups_are_transparent_to_spacing() {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new("a\\mathrm{=}b", &settings, &mut listener).parse();
        let global = GlobalContext::default();
        let b = Layout::new(&tree, Registry::global())
            .build_group(tree.root(), &Context::new(&global, TEXT));
        assert_eq!(b.children.len(), 5);
    }
}
