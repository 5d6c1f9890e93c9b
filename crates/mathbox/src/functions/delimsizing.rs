//! Fixed-size delimiters: `\big(`, `\Bigl[`, `\biggm|` and the rest.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::delimiter::sized_delim;
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::ArgType;

/// Size and class of a sizing command.
fn delim_size(command: &str) -> (u8, AtomClass) {
    let name = command.trim_start_matches('\\');
    let (stem, class) = match name.as_bytes().last() {
        Some(b'l') => (&name[..name.len() - 1], AtomClass::Open),
        Some(b'r') => (&name[..name.len() - 1], AtomClass::Close),
        Some(b'm') => (&name[..name.len() - 1], AtomClass::Rel),
        _ => (name, AtomClass::Ord),
    };
    let size = match stem {
        "Big" => 2,
        "bigg" => 3,
        "Bigg" => 4,
        _ => 1,
    };
    (size, class)
}

/// Registers `\big` to `\Bigg`, with their `l`, `r` and `m` forms.
pub fn define_delimsizing(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::SizedDelim),
        names: &[
            "\\bigl", "\\Bigl", "\\biggl", "\\Biggl", "\\bigr", "\\Bigr", "\\biggr", "\\Biggr",
            "\\bigm", "\\Bigm", "\\biggm", "\\Biggm", "\\big", "\\Big", "\\bigg", "\\Bigg",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Delim],
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let delim = args
                .first()
                .and_then(Argument::as_str)
                .unwrap_or(".")
                .to_owned();
            let (size, class) = delim_size(context.func_name);
            let command = context.func_name.to_owned();
            Ok(context.push(AtomKind::SizedDelim {
                command,
                delim,
                size,
                class,
            }))
        },
        box_builder: Some(build_sized_delim),
    });
}

fn build_sized_delim(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::SizedDelim {
        delim, size, class, ..
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };
    sized_delim(ctx, delim, *size, *class)
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
        let id = tree.find(AtomType::SizedDelim)[0];
        Layout::new(&tree, Registry::global()).build_group(id, &Context::new(&global, TEXT))
    }

    #[test]
    fn sizes_and_classes_follow_the_name() {
        assert_eq!(delim_size("\\big"), (1, AtomClass::Ord));
        assert_eq!(delim_size("\\Bigl"), (2, AtomClass::Open));
        assert_eq!(delim_size("\\biggr"), (3, AtomClass::Close));
        assert_eq!(delim_size("\\Biggm"), (4, AtomClass::Rel));
    }

    #[test]
    fn each_size_is_taller() {
        let heights: Vec<f64> = ["\\bigl(", "\\Bigl(", "\\biggl(", "\\Biggl("]
            .iter()
            .map(|latex| build(latex).total_height())
            .collect();
        assert!(heights.windows(2).all(|w| w[1] > w[0]), "{heights:?}");
        assert_eq!(build("\\Bigr]").class, Some(AtomClass::Close));
    }
}
