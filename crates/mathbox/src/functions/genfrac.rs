//! Generalized fractions: `\frac` and its variants, `\binom`, `\genfrac`, and
//! the infix primitives `\over`, `\atop`, `\choose`, `\brace`, `\brack` and
//! `\above`.

use core::str::FromStr as _;

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::build_common::{VListParam, make_line, make_null_delimiter, make_vlist};
use crate::context::Context;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, atom_argument,
    string_argument,
};
use crate::delimiter::custom_sized_delim;
use crate::parser::atom::{AtomId, AtomKind, AtomType};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::style::MathstyleName;
use crate::symbols::DELIMITERS;
use crate::types::{ArgType, ParseError, ParseErrorCode};
use crate::units::Dimension;

/// Minimum height and depth of a `\cfrac` numerator, in ems.
const CFRAC_STRUT: (f64, f64) = (8.5 / 12.0, 3.5 / 12.0);

/// The fixed shape of a fraction command.
#[derive(Clone, Copy)]
struct FracShape {
    has_bar: bool,
    left_delim: Option<&'static str>,
    right_delim: Option<&'static str>,
    mathstyle: Option<MathstyleName>,
    continued: bool,
}

impl FracShape {
    fn for_command(name: &str) -> Self {
        let plain = Self {
            has_bar: true,
            left_delim: None,
            right_delim: None,
            mathstyle: None,
            continued: false,
        };
        let fenced = |left, right| Self {
            has_bar: false,
            left_delim: Some(left),
            right_delim: Some(right),
            ..plain
        };
        match name {
            "\\dfrac" => Self {
                mathstyle: Some(MathstyleName::Displaystyle),
                ..plain
            },
            "\\tfrac" => Self {
                mathstyle: Some(MathstyleName::Textstyle),
                ..plain
            },
            "\\cfrac" => Self {
                mathstyle: Some(MathstyleName::Displaystyle),
                continued: true,
                ..plain
            },
            "\\binom" | "\\choose" => fenced("(", ")"),
            "\\dbinom" => Self {
                mathstyle: Some(MathstyleName::Displaystyle),
                ..fenced("(", ")")
            },
            "\\tbinom" => Self {
                mathstyle: Some(MathstyleName::Textstyle),
                ..fenced("(", ")")
            },
            "\\atop" => Self {
                has_bar: false,
                ..plain
            },
            "\\brace" => fenced("\\{", "\\}"),
            "\\brack" => fenced("[", "]"),
            _ => plain,
        }
    }
}

fn fraction(
    command: &str,
    numer: AtomId,
    denom: AtomId,
    shape: &FracShape,
    bar_size: Option<Dimension>,
    infix: bool,
) -> AtomKind {
    AtomKind::Fraction {
        command: command.to_owned(),
        numer,
        denom,
        has_bar: shape.has_bar,
        bar_size,
        left_delim: shape.left_delim.map(ToOwned::to_owned),
        right_delim: shape.right_delim.map(ToOwned::to_owned),
        mathstyle: shape.mathstyle,
        continued: shape.continued,
        infix,
    }
}

/// Reads a `\genfrac` delimiter; an empty argument is no delimiter.
fn genfrac_delim(raw: &str) -> Result<Option<String>, ParseError> {
    match raw.trim() {
        "" | "." => Ok(None),
        delim if DELIMITERS.contains_key(delim) => Ok(Some(delim.to_owned())),
        delim => Err(ParseError::new(ParseErrorCode::UnexpectedDelimiter).with_arg(delim)),
    }
}

fn genfrac_handler(
    mut context: FunctionContext,
    args: Vec<Argument>,
    _opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError> {
    let left_delim = genfrac_delim(&string_argument(&args, 0))?;
    let right_delim = genfrac_delim(&string_argument(&args, 1))?;
    let thickness = string_argument(&args, 2);
    let bar_size = match thickness.trim() {
        "" => None,
        text => Some(Dimension::from_str(text).map_err(|_| {
            ParseError::new(ParseErrorCode::MissingUnit).with_arg(text)
        })?),
    };
    let mathstyle = match string_argument(&args, 3).trim() {
        "0" => Some(MathstyleName::Displaystyle),
        "1" => Some(MathstyleName::Textstyle),
        "2" => Some(MathstyleName::Scriptstyle),
        "3" => Some(MathstyleName::Scriptscriptstyle),
        _ => None,
    };
    let numer = atom_argument(&args, 4)?;
    let denom = atom_argument(&args, 5)?;
    let command = context.func_name.to_owned();
    Ok(context.push(AtomKind::Fraction {
        command,
        numer,
        denom,
        has_bar: bar_size.is_none_or(|size| size.dimension != 0.0),
        bar_size,
        left_delim,
        right_delim,
        mathstyle,
        continued: false,
        infix: false,
    }))
}

/// Registers the fraction commands and infix primitives.
pub fn define_genfrac(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: Some(AtomType::Fraction),
        names: &[
            "\\frac", "\\dfrac", "\\tfrac", "\\cfrac", "\\binom", "\\dbinom", "\\tbinom",
        ],
        props: FunctionPropSpec {
            num_args: 2,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let numer = atom_argument(&args, 0)?;
            let denom = atom_argument(&args, 1)?;
            let shape = FracShape::for_command(context.func_name);
            let kind = fraction(context.func_name, numer, denom, &shape, None, false);
            Ok(context.push(kind))
        },
        box_builder: Some(build_fraction),
    });

    registry.define_function(FunctionDefSpec {
        atom_type: None,
        names: &["\\genfrac"],
        props: FunctionPropSpec {
            num_args: 6,
            arg_types: &[
                ArgType::BalancedString,
                ArgType::BalancedString,
                ArgType::BalancedString,
                ArgType::BalancedString,
                ArgType::Math,
                ArgType::Math,
            ],
            ..Default::default()
        },
        handler: genfrac_handler,
        box_builder: None,
    });

    // the parser hands infix handlers the atoms before and after the command
    registry.define_function(FunctionDefSpec {
        atom_type: None,
        names: &["\\over", "\\atop", "\\choose", "\\brace", "\\brack"],
        props: FunctionPropSpec {
            infix: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let numer = atom_argument(&args, 0)?;
            let denom = atom_argument(&args, 1)?;
            let shape = FracShape::for_command(context.func_name);
            let kind = fraction(context.func_name, numer, denom, &shape, None, true);
            Ok(context.push(kind))
        },
        box_builder: None,
    });

    registry.define_function(FunctionDefSpec {
        atom_type: None,
        names: &["\\above"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Dimen],
            infix: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let numer = atom_argument(&args, 0)?;
            let denom = atom_argument(&args, 1)?;
            let bar_size = match args.get(2) {
                Some(Argument::Dimension(size)) => Some(*size),
                _ => None,
            };
            let shape = FracShape {
                has_bar: bar_size.is_none_or(|size| size.dimension != 0.0),
                ..FracShape::for_command("\\frac")
            };
            let kind = fraction(context.func_name, numer, denom, &shape, bar_size, true);
            Ok(context.push(kind))
        },
        box_builder: None,
    });
}

/// Lays out a fraction following the TeXbook, rule 15.
fn build_fraction(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Fraction {
        numer,
        denom,
        has_bar,
        bar_size,
        left_delim,
        right_delim,
        mathstyle,
        continued,
        ..
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };

    let ctx = match mathstyle {
        Some(name) => ctx.having_style(name.style()),
        None => ctx.clone(),
    };
    let style = ctx.mathstyle;

    let numer_ctx = ctx.having_style(style.frac_num());
    let mut numer = layout.build_group(*numer, &numer_ctx);
    if *continued {
        let scale = numer_ctx.scaling_factor();
        numer.height = numer.height.max(CFRAC_STRUT.0 * scale);
        numer.depth = numer.depth.max(CFRAC_STRUT.1 * scale);
    }
    let denom = layout.build_group(*denom, &ctx.having_style(style.frac_den()));

    let metrics = ctx.font_metrics();
    let rule_width = if *has_bar {
        bar_size.map_or(metrics.default_rule_thickness, |size| ctx.to_em(size))
    } else {
        0.0
    };

    let (mut num_shift, clearance, mut denom_shift) = if style.is_display() {
        let clearance = if rule_width > 0.0 {
            3.0 * rule_width
        } else {
            7.0 * metrics.default_rule_thickness
        };
        (metrics.num1, clearance, metrics.denom1)
    } else if rule_width > 0.0 {
        (metrics.num2, rule_width, metrics.denom2)
    } else {
        (metrics.num3, 3.0 * metrics.default_rule_thickness, metrics.denom2)
    };

    let width = numer.width.max(denom.width);
    let center = |mut b: MathBox| {
        b.left = (width - b.width) / 2.0;
        b
    };
    let numer = center(numer);
    let denom = center(denom);

    let frac = if rule_width == 0.0 {
        let candidate = (num_shift - numer.depth) - (denom.height - denom_shift);
        if candidate < clearance {
            num_shift += (clearance - candidate) / 2.0;
            denom_shift += (clearance - candidate) / 2.0;
        }
        make_vlist(VListParam::IndividualShift {
            children: vec![(denom, denom_shift), (numer, -num_shift)],
        })
    } else {
        let axis = metrics.axis_height;
        let above = (num_shift - numer.depth) - (axis + rule_width / 2.0);
        if above < clearance {
            num_shift += clearance - above;
        }
        let below = (axis - rule_width / 2.0) - (denom.height - denom_shift);
        if below < clearance {
            denom_shift += clearance - below;
        }
        let bar = make_line(&ctx, width, Some(rule_width));
        make_vlist(VListParam::IndividualShift {
            children: vec![
                (denom, denom_shift),
                (bar, -(axis - rule_width / 2.0)),
                (numer, -num_shift),
            ],
        })
    };

    let delim_size = if style.is_display() {
        metrics.delim1
    } else {
        metrics.delim2
    };
    let delim = |delim: &Option<String>, class| match delim {
        Some(delim) => custom_sized_delim(&ctx, delim, delim_size, true, class),
        None => make_null_delimiter(&ctx, class),
    };
    let left = delim(left_delim, AtomClass::Open);
    let right = delim(right_delim, AtomClass::Close);
    MathBox::row(vec![left, frac, right]).with_class(AtomClass::Inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxType;
    use crate::context::GlobalContext;
    use crate::parser::Parser;
    use crate::style::{DISPLAY, TEXT};
    use crate::types::{LatexSyntaxError, Settings};

    fn parse(latex: &str) -> (crate::parser::atom::AtomTree, Vec<LatexSyntaxError>) {
        let settings = Settings::default();
        let mut errors = Vec::new();
        let mut listener = |err| errors.push(err);
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        (tree, errors)
    }

    fn fraction_box(latex: &str, style: &'static crate::style::Mathstyle) -> MathBox {
        let (tree, errors) = parse(latex);
        assert!(errors.is_empty(), "{errors:?}");
        let global = GlobalContext::default();
        let id = tree.find(AtomType::Fraction)[0];
        Layout::new(&tree, Registry::global()).build_group(id, &Context::new(&global, style))
    }

    #[test]
    fn shapes_by_command() {
        let (tree, _) = parse("\\binom{n}{k}");
        let id = tree.find(AtomType::Fraction)[0];
        assert!(matches!(
            &tree[id].kind,
            AtomKind::Fraction { has_bar: false, left_delim: Some(l), .. } if l == "("
        ));

        let (tree, _) = parse("{a \\over b}");
        let id = tree.find(AtomType::Fraction)[0];
        assert!(matches!(tree[id].kind, AtomKind::Fraction { infix: true, has_bar: true, .. }));
    }

    #[test]
    fn genfrac_reads_its_arguments() {
        let (tree, errors) = parse("\\genfrac{[}{]}{0pt}{1}{a}{b}");
        assert!(errors.is_empty(), "{errors:?}");
        let id = tree.find(AtomType::Fraction)[0];
        let AtomKind::Fraction {
            has_bar,
            left_delim,
            mathstyle,
            ..
        } = &tree[id].kind
        else {
            panic!("not a fraction");
        };
        assert!(!has_bar);
        assert_eq!(left_delim.as_deref(), Some("["));
        assert_eq!(*mathstyle, Some(MathstyleName::Textstyle));

        let (_, errors) = parse("\\genfrac{x}{}{}{}{a}{b}");
        assert_eq!(errors[0].code, ParseErrorCode::UnexpectedDelimiter);
    }

    #[test]
    fn display_fractions_are_taller() {
        let display = fraction_box("\\frac{1}{2}", DISPLAY);
        let text = fraction_box("\\frac{1}{2}", TEXT);
        assert!(display.total_height() > text.total_height());
        assert_eq!(display.kind, BoxType::Inner);
        // numerator above the axis, denominator below the baseline
        let stack = &display.children[1];
        assert!(stack.children[2].shift < -0.25);
        assert!(stack.children[0].shift > 0.0);
    }

    #[test]
    fn bar_thickness_follows_the_argument() {
        let thick = fraction_box("{1 \\above 2pt 2}", TEXT);
        let bar = thick
            .descendants()
            .into_iter()
            .find(|b| b.kind == BoxType::Rule)
            .map(|b| b.height);
        assert_eq!(bar, Some(0.2));
        let none = fraction_box("{1 \\atop 2}", TEXT);
        assert!(none.descendants().iter().all(|b| b.kind != BoxType::Rule));
    }
}
