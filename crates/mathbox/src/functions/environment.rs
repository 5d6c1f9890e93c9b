//! `\begin{name}..\end{name}`.

use crate::define_environment::EnvContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, string_argument,
};
use crate::parser::Parser;
use crate::parser::atom::AtomId;
use crate::registry::Registry;
use crate::types::{ArgType, ParseError, ParseErrorCode, Token};

/// Skips the body of an environment nobody knows, up to and including the
/// `\end` that closes it.
fn skip_environment(parser: &mut Parser) {
    parser.unfetch();
    let mut depth = 0usize;
    loop {
        let token = parser.gullet.pop_token();
        if token.is_eof() {
            parser.gullet.push_token(token);
            return;
        }
        parser.note_consumed(token.loc);
        if token.is_command("\\begin") {
            depth += 1;
        } else if token.is_command("\\end") {
            if depth == 0 {
                if let Ok(name) = parser.gullet.consume_arg() {
                    parser.note_consumed(name.end.loc);
                }
                return;
            }
            depth -= 1;
        }
    }
}

/// Reads the `\end{name}` that must follow an environment body.
fn expect_end(parser: &mut Parser, name: &str, begin: &Token) -> Result<(), ParseError> {
    let next = parser.fetch()?.clone();
    if !next.is_command("\\end") {
        return Err(ParseError::at(ParseErrorCode::UnbalancedEnvironment, begin).with_arg(name));
    }
    parser.consume();
    let end_name = match parser.parse_argument(ArgType::String, false)? {
        Some(Argument::String(end_name)) => end_name,
        _ => String::new(),
    };
    if end_name == name {
        Ok(())
    } else {
        Err(ParseError::at(ParseErrorCode::UnbalancedEnvironment, &next)
            .with_loc(parser.span_from(next.loc))
            .with_arg(end_name))
    }
}

/// Register `\begin`. A stray `\end` is handled by the parser.
pub fn define_environment(registry: &mut Registry) {
    registry.define_function(FunctionDefSpec {
        atom_type: None,
        names: &["\\begin"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::String],
            ..Default::default()
        },
        handler: |context: FunctionContext, args, _opt_args| {
            let FunctionContext {
                parser, token, loc, ..
            } = context;
            let name = string_argument(&args, 0);
            let Some(env) = Registry::global().environments.get(name.as_str()) else {
                skip_environment(parser);
                return Err(ParseError::at(ParseErrorCode::UnknownEnvironment, token)
                    .with_loc(parser.span_from(loc))
                    .with_arg(name));
            };
            log::trace!("entering environment {name}");

            let (env_args, env_opt_args) = parser.parse_arguments(token, &env.props)?;
            if let Err(err) = parser.enter() {
                skip_environment(parser);
                return Err(err.with_loc(parser.span_from(loc)));
            }
            let result = (env.handler)(
                EnvContext {
                    mode: parser.mode,
                    env_name: &name,
                    parser: &mut *parser,
                    loc,
                },
                env_args,
                env_opt_args,
            );
            parser.leave();
            let id: AtomId = result?;

            // a bad `\end` is reported, but the environment is kept
            if let Err(err) = expect_end(parser, &name, token) {
                parser.report(&err);
            }
            let span = parser.span_from(loc);
            if let Some(atom) = parser.tree.get_mut(id) {
                atom.loc = span;
            }
            Ok(id)
        },
        box_builder: None,
    });
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::parser::atom::{AtomTree, AtomType};
    use crate::types::{LatexSyntaxError, ParseErrorCode, Settings, SourceLocation};

    fn parse(input: &str) -> (AtomTree, Vec<ParseErrorCode>) {
        let settings = Settings::default();
        let mut errors = Vec::new();
        let mut listener = |err: LatexSyntaxError| errors.push(err.code);
        let tree = Parser::new(input, &settings, &mut listener).parse();
        (tree, errors)
    }

    fn root_types(tree: &AtomTree) -> Vec<String> {
        tree[tree.root()]
            .kind
            .children()
            .into_iter()
            .map(|id| tree[id].atom_type().to_string())
            .collect()
    }

    #[test]
    fn environments_span_begin_to_end() {
        let input = "x+\\begin{pmatrix}a&b\\\\c&d\\end{pmatrix}";
        let (tree, errors) = parse(input);
        assert!(errors.is_empty());
        let array = tree.find(AtomType::Array)[0];
        assert_eq!(tree[array].loc, Some(SourceLocation::new(2, input.len())));
    }

    #[test]
    fn unknown_environments_are_skipped_whole() {
        let (tree, errors) = parse("\\begin{foo}\\begin{bar}x\\end{bar}\\end{foo}y");
        assert_eq!(errors, [ParseErrorCode::UnknownEnvironment]);
        assert_eq!(root_types(&tree), ["error", "symbol"]);
    }

    #[test]
    fn mismatched_end_keeps_the_environment() {
        let (tree, errors) = parse("\\begin{matrix}a\\end{pmatrix}b");
        assert_eq!(errors, [ParseErrorCode::UnbalancedEnvironment]);
        assert_eq!(root_types(&tree), ["array", "symbol"]);

        let (tree, errors) = parse("\\begin{matrix}a&b");
        assert_eq!(errors, [ParseErrorCode::UnbalancedEnvironment]);
        assert_eq!(tree.find(AtomType::Array).len(), 1);
    }

    #[test]
    fn stray_end_is_reported() {
        let (tree, errors) = parse("a\\end{matrix}b");
        assert_eq!(errors, [ParseErrorCode::UnbalancedEnvironment]);
        assert_eq!(root_types(&tree), ["symbol", "error", "symbol"]);
    }
}
