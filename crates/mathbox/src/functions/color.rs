//! `\color` and `\textcolor`.
//!
//! The colour goes into the style of the atom, so it reaches every glyph
//! and rule of the body through the layout cascade. Names are resolved by
//! the colour map of the layout pass, not by the parser.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, ord_argument,
    string_argument,
};
use crate::parser::atom::{AtomId, AtomKind, AtomType, Style};
use crate::registry::Registry;
use crate::types::{ArgType, ParseError};

fn color_handler(
    mut context: FunctionContext,
    args: Vec<Argument>,
    _opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError> {
    let color = string_argument(&args, 0);
    let body = match args.get(1) {
        Some(Argument::Atoms(body)) => body.clone(),
        _ => {
            let arg = atom_argument(&args, 1)?;
            ord_argument(context.parser, arg)
        }
    };
    let style = Style {
        color: Some(color.clone()),
        ..Style::default()
    };
    let command = context.func_name.to_owned();
    Ok(context.push_styled(
        AtomKind::Color {
            command,
            color,
            body,
        },
        style,
    ))
}

/// Registers `\color`, which colours the rest of its group, and
/// `\textcolor`, which colours its second argument.
pub fn define_color(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Color),
        names: &["\\color"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: &[ArgType::String, ArgType::Rest],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: color_handler,
        box_builder: Some(build_color),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Color),
        names: &["\\textcolor"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: &[ArgType::String, ArgType::Auto],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: color_handler,
        box_builder: None,
    });
}

fn build_color(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    match &layout.tree[id].kind {
        AtomKind::Color { body, .. } => layout.build_row(body, ctx),
        _ => error_box(ctx, ""),
    }
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
        Layout::new(&tree, Registry::global()).build_group(tree.root(), &Context::new(&global, TEXT))
    }

    fn glyph_colors(b: &MathBox) -> Vec<Option<String>> {
        b.descendants()
            .into_iter()
            .filter(|d| d.glyph.is_some())
            .map(|d| d.color.clone())
            .collect()
    }

    #[test]
    fn color_applies_to_the_rest_of_the_group() {
        let b = build("a{\\color{red}b}c");
        assert_eq!(glyph_colors(&b), [None, Some("#ff0000".to_owned()), None]);
    }

    #[test]
    fn textcolor_takes_an_argument() {
        let b = build("\\textcolor{green}{x}y");
        assert_eq!(glyph_colors(&b), [Some("#00ff00".to_owned()), None]);
    }

    #[test]
    fn colored_rules() {
        let b = build("\\color{blue}\\frac{1}{2}");
        let bar = b
            .descendants()
            .into_iter()
            .find(|d| d.kind == BoxType::Rule)
            .and_then(|d| d.color.clone());
        assert_eq!(bar.as_deref(), Some("#0000ff"));
    }

    #[test]
    fn colour_groups_are_transparent_to_spacing() {
        let b = build("a\\textcolor{red}{=}b");
        assert_eq!(b.children.len(), 5);
    }
}
