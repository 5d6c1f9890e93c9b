//! `\left`, `\middle` and `\right`.
//!
//! `\left` parses everything up to its `\right` as its body, so the pair is
//! a single atom. The delimiters are sized to the body once it has been laid
//! out; `\middle` delimiters directly inside the body are resized with them.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::delimiter::{custom_sized_delim, left_right_delim};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::{ArgType, ParseError, ParseErrorCode};

const MIDDLE_HINT: &str = "middle";

/// Registers `\left` and `\middle`. `\right` ends the expression it appears
/// in and is read by `\left`.
pub fn define_leftright(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::LeftRight),
        names: &["\\left"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Delim],
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let left = args
                .first()
                .and_then(Argument::as_str)
                .unwrap_or(".")
                .to_owned();
            let parser = &mut *context.parser;
            if let Err(err) = parser.enter() {
                parser.skip_expression();
                if parser.fetch()?.is_command("\\right") {
                    parser.consume();
                    let _delim = parser.parse_argument(ArgType::Delim, false);
                }
                return Err(err);
            }
            parser.leftright_depth += 1;
            let body = parser.parse_expression(None);
            parser.leftright_depth -= 1;
            parser.leave();

            let next = parser.fetch()?.clone();
            let right = if next.is_command("\\right") {
                parser.consume();
                match parser.parse_argument(ArgType::Delim, false) {
                    Ok(Some(Argument::Delim(delim))) => delim,
                    Ok(_) => ".".to_owned(),
                    Err(err) if err.code == ParseErrorCode::UnexpectedDelimiter => {
                        parser.report(&err);
                        ".".to_owned()
                    }
                    Err(err) => return Err(err),
                }
            } else {
                parser.report(
                    &ParseError::at(ParseErrorCode::UnbalancedBraces, context.token)
                        .with_arg("\\left"),
                );
                ".".to_owned()
            };
            context.loc = context.parser.span_from(context.loc);
            Ok(context.push(AtomKind::LeftRight { left, right, body }))
        },
        box_builder: Some(build_leftright),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Middle),
        names: &["\\middle"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Delim],
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            if context.parser.leftright_depth == 0 {
                return Err(ParseError::at(ParseErrorCode::InvalidCommand, context.token));
            }
            let delim = args
                .first()
                .and_then(Argument::as_str)
                .unwrap_or(".")
                .to_owned();
            Ok(context.push(AtomKind::Middle { delim }))
        },
        box_builder: Some(build_middle),
    });
}

/// A `\middle` on its own gets the text size; [`build_leftright`] resizes it.
fn build_middle(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Middle { delim } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    custom_sized_delim(ctx, delim, 0.0, true, AtomClass::Ord).with_hint(MIDDLE_HINT)
}

fn is_middle(b: &MathBox) -> bool {
    b.classes.iter().any(|c| c == MIDDLE_HINT)
}

fn build_leftright(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::LeftRight { left, right, body } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let mut inner = layout.build_expression(body, ctx);

    let (height, depth) = inner
        .iter()
        .filter(|b| !is_middle(b))
        .fold((0.0_f64, 0.0_f64), |(h, d), b| {
            (h.max(b.height - b.shift), d.max(b.depth + b.shift))
        });

    let mut middles = body.iter().filter_map(|id| match &layout.tree[*id].kind {
        AtomKind::Middle { delim } => Some(delim),
        _ => None,
    });
    for b in inner.iter_mut().filter(|b| is_middle(b)) {
        let Some(delim) = middles.next() else {
            break;
        };
        let id = b.id.take();
        *b = left_right_delim(ctx, delim, height, depth, AtomClass::Ord).with_hint(MIDDLE_HINT);
        b.id = id;
    }

    let mut children = Vec::with_capacity(inner.len() + 2);
    children.push(left_right_delim(ctx, left, height, depth, AtomClass::Open));
    children.extend(inner);
    children.push(left_right_delim(ctx, right, height, depth, AtomClass::Close));
    MathBox::row(children).with_class(AtomClass::Inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::DISPLAY;
    use crate::types::{LatexSyntaxError, Settings};

    fn build(latex: &str) -> (MathBox, Vec<ParseErrorCode>) {
        let settings = Settings::default();
        let mut errors = Vec::new();
        let mut listener = |err: LatexSyntaxError| errors.push(err.code);
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        let b = Layout::new(&tree, Registry::global())
            .build_group(tree.root(), &Context::new(&global, DISPLAY));
        (b, errors)
    }

    #[test]
    fn delimiters_grow_with_the_body() {
        let (plain, errors) = build("\\left(x\\right)");
        assert!(errors.is_empty());
        let (tall, _) = build("\\left(\\frac{1}{2}\\right)");
        let outer = |b: &MathBox| b.children[0].children[0].total_height();
        assert!(outer(&tall) > outer(&plain));
        assert_eq!(tall.children[0].class, Some(AtomClass::Inner));
    }

    #[test]
    fn null_delimiters_take_nulldelimiterspace() {
        let (fenced, errors) = build("\\left.x\\right.");
        assert!(errors.is_empty());
        let (bare, _) = build("x");
        assert!((fenced.width - bare.width - 0.24).abs() < 1e-9);
    }

    #[test]
    fn middle_is_resized_with_the_fences() {
        let (b, errors) = build("\\left(\\frac{1}{2}\\middle|\\frac{3}{4}\\right)");
        assert!(errors.is_empty());
        let middle = b.descendants().into_iter().find(|d| is_middle(d)).cloned();
        let middle = middle.map(|m| m.total_height()).unwrap_or_default();
        assert!(middle > 1.2, "middle {middle}");
    }

    #[test]
    fn unmatched_fences_are_reported() {
        let (_, errors) = build("\\left(x");
        assert_eq!(errors, [ParseErrorCode::UnbalancedBraces]);
        let (_, errors) = build("a\\middle|b");
        assert_eq!(errors, [ParseErrorCode::InvalidCommand]);
    }
}
