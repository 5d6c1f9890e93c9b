//! `\char`: a symbol from a character code.

use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::parser::atom::AtomKind;
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::types::{ArgType, ParseError, ParseErrorCode};

/// Register the `\char` function
pub fn define_char(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        // laid out as a plain symbol
        atom_type: None,
        names: &["\\char"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Number],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |mut context: FunctionContext, args, _opt_args| {
            let code = match args.first() {
                Some(Argument::Number(n)) if *n >= 0.0 && n.fract() == 0.0 => *n,
                _ => return Err(ParseError::at(ParseErrorCode::UnexpectedToken, context.token)),
            };
            let value = char::from_u32(code.min(f64::from(u32::MAX)) as u32).ok_or_else(|| {
                ParseError::at(ParseErrorCode::UnexpectedToken, context.token)
                    .with_loc(context.loc)
                    .with_arg(format!("\\char{code}"))
            })?;
            Ok(context.push(AtomKind::Symbol {
                class: AtomClass::Ord,
                value,
                command: Some("\\char".to_owned()),
            }))
        },
        box_builder: None,
    });
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::parser::atom::{AtomKind, AtomType};
    use crate::types::{LatexSyntaxError, ParseErrorCode, Settings};

    #[test]
    fn out_of_range_codes_are_rejected() {
        let settings = Settings::default();
        let mut errors = Vec::new();
        let mut listener = |err: LatexSyntaxError| errors.push(err.code);
        let tree = Parser::new("\\char\"D800 x", &settings, &mut listener).parse();
        assert_eq!(errors, [ParseErrorCode::UnexpectedToken]);
        assert_eq!(tree.find(AtomType::Error).len(), 1);
    }

    #[test]
    fn decimal_codes() {
        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new("\\char 955", &settings, &mut listener).parse();
        let symbol = tree.find(AtomType::Symbol)[0];
        assert!(matches!(tree[symbol].kind, AtomKind::Symbol { value: '\u{3bb}', .. }));
    }
}
