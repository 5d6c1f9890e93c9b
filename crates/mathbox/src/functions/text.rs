//! Text in math: `\text`, `\textbf` and friends, `\mbox`.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, ord_argument,
};
use crate::parser::atom::{AtomId, AtomKind, AtomType, Style, Variant, VariantStyle};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::ArgType;

fn text_style(command: &str) -> Style {
    let (variant, variant_style) = match command {
        "\\textrm" | "\\textup" => (Some(Variant::Normal), Some(VariantStyle::Up)),
        "\\textbf" => (None, Some(VariantStyle::Bold)),
        "\\textit" => (None, Some(VariantStyle::Italic)),
        "\\textsf" => (Some(Variant::SansSerif), None),
        "\\texttt" => (Some(Variant::Monospace), None),
        _ => (None, None),
    };
    Style {
        variant,
        variant_style,
        ..Style::default()
    }
}

/// Registers `\text`, `\textrm`, `\textbf`, `\textit`, `\textsf`,
/// `\texttt`, `\textup` and `\mbox`.
pub fn define_text(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Text),
        names: &[
            "\\text",
            "\\textrm",
            "\\textup",
            "\\textbf",
            "\\textit",
            "\\textsf",
            "\\texttt",
            "\\mbox",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Text],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let arg = atom_argument(&args, 0)?;
            let body = ord_argument(context.parser, arg);
            let command = context.func_name.to_owned();
            let style = text_style(&command);
            Ok(context.push_styled(AtomKind::Text { command, body }, style))
        },
        box_builder: Some(build_text),
    });
}

/// Text is a single ordinary box; the atoms of its body are text-mode
/// symbols and need no inter-atom glue.
fn build_text(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Text { body, .. } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    layout.build_row(body, ctx).with_class(AtomClass::Ord)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::font_metrics::FontFamily;
    use crate::parser::Parser;
    use crate::style::TEXT;
    use crate::types::{LatexSyntaxError, ParseErrorCode, Settings};

    fn build(latex: &str) -> MathBox {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        Layout::new(&tree, Registry::global()).build_group(tree.root(), &Context::new(&global, TEXT))
    }

    fn families(b: &MathBox) -> Vec<FontFamily> {
        b.descendants()
            .into_iter()
            .filter_map(|d| d.glyph.as_ref().map(|g| g.family))
            .collect()
    }

    #[test]
    fn text_keeps_its_spaces() {
        let b = build("\\text{if x}");
        assert_eq!(b.text(), "if x");
        assert!(families(&b).iter().all(|f| *f == FontFamily::MainRegular));
        assert!(b.width > build("\\text{ifx}").width);
    }

    #[test]
    fn text_variants() {
        assert_eq!(families(&build("\\textbf{a}")), [FontFamily::MainBold]);
        assert_eq!(families(&build("\\textit{a}")), [FontFamily::MainItalic]);
        assert_eq!(families(&build("\\texttt{a}")), [FontFamily::Typewriter]);
    }

    #[test]
    fn math_inside_text() {
        let b = build("\\text{for $x$}");
        assert_eq!(families(&b).last(), Some(&FontFamily::MathItalic));
    }

    #[test]
    fn math_commands_are_invalid_in_text() {
        let settings = Settings::default();
        let mut errors = Vec::new();
        let mut listener = |err: LatexSyntaxError| errors.push(err.code);
        let _ = Parser::new("\\text{\\alpha}", &settings, &mut listener).parse();
        assert_eq!(errors, [ParseErrorCode::InvalidCommand]);
    }
}
