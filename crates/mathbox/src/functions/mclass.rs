//! `\mathord`, `\mathbin` and the other class commands: the body laid out
//! as one box with an explicit spacing class.

use core::str::FromStr as _;

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{
    FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument, ord_argument,
};
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::{ParseError, ParseErrorCode};

/// Register the class commands
pub fn define_mclass(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Mclass),
        names: &[
            "\\mathord",
            "\\mathop",
            "\\mathbin",
            "\\mathrel",
            "\\mathopen",
            "\\mathclose",
            "\\mathpunct",
            "\\mathinner",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            // `\mathrel` is class `mrel`
            let class = AtomClass::from_str(&context.bare_name().replacen("math", "m", 1))
                .map_err(|_| ParseError::at(ParseErrorCode::UnknownCommand, context.token))?;
            let arg = atom_argument(&args, 0)?;
            let body = ord_argument(context.parser, arg);
            let command = context.func_name.to_owned();
            Ok(context.push(AtomKind::Mclass {
                command,
                class,
                body,
            }))
        },
        box_builder: Some(build_mclass),
    });
}

fn build_mclass(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Mclass { class, body, .. } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    layout.build_row(body, ctx).with_class(*class)
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

    /// Inter-atom glue, in mu.
    fn glue(b: &MathBox) -> Vec<i64> {
        b.children
            .iter()
            .filter(|c| c.kind == BoxType::Spacing)
            .map(|c| (c.width * 18.0).round() as i64)
            .collect()
    }

    #[test]
    fn class_commands_set_the_spacing() {
        let rel = build("a\\mathrel{x}b");
        assert_eq!(glue(&rel), [5, 5]);
        let bin = build("a\\mathbin{x}b");
        assert_eq!(glue(&bin), [4, 4]);
        let ord = build("a\\mathord{+}b");
        assert!(glue(&ord).is_empty());
    }

    #[test]
    fn a_leading_mathbin_is_ordinary() {
        let b = build("\\mathbin{x}a");
        assert_eq!(b.children[0].class, Some(AtomClass::Ord));
        assert!(glue(&b).is_empty());
    }
}
