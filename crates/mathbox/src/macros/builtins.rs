//! Built-in macro definitions available in every dictionary.

use phf::phf_map;

use crate::macros::MacroDefinition;

const fn alias(def: &'static str) -> MacroDefinition {
    MacroDefinition::builtin(def, 0, true, false)
}

const fn atomic(def: &'static str, args: u8) -> MacroDefinition {
    MacroDefinition::builtin(def, args, false, true)
}

/// The built-in macros, keyed by command name.
///
/// Aliases are spliced into the token stream. Notational macros such as
/// `\braket` are kept as macro atoms so they survive a LaTeX round trip.
pub static BUILTIN_MACROS: phf::Map<&'static str, MacroDefinition> = phf_map! {
    "\\iff" => alias("\\;\\Longleftrightarrow\\;"),
    "\\ne" => alias("\\neq"),
    "\\le" => alias("\\leq"),
    "\\ge" => alias("\\geq"),
    "\\to" => alias("\\rightarrow"),
    "\\gets" => alias("\\leftarrow"),
    "\\land" => alias("\\wedge"),
    "\\lor" => alias("\\vee"),
    "\\lnot" => alias("\\neg"),
    "\\dotsb" => alias("\\cdots"),
    "\\dotsc" => alias("\\ldots"),
    "\\dotsi" => alias("\\!\\cdots"),
    "\\dotsm" => alias("\\cdots"),
    "\\dotso" => alias("\\ldots"),
    "\\varnothing" => alias("\\emptyset"),
    "\\Bbb" => MacroDefinition::builtin("\\mathbb{#1}", 1, true, false),
    "\\bold" => MacroDefinition::builtin("\\mathbf{#1}", 1, true, false),
    "\\mathstrut" => alias("\\vphantom{(}"),
    "\\nicefrac" => atomic("^{#1}\\!\\!/\\!_{#2}", 2),
    "\\bra" => atomic("\\mathinner{\\langle{#1}|}", 1),
    "\\ket" => atomic("\\mathinner{|{#1}\\rangle}", 1),
    "\\braket" => atomic("\\mathinner{\\langle{#1}\\rangle}", 1),
    "\\set" => atomic("\\mathinner{\\lbrace #1 \\rbrace}", 1),
    "\\Set" => atomic("\\left\\lbrace #1 \\right\\rbrace", 1),
    "\\rd" => atomic("\\mathrm{d}", 0),
    "\\rD" => atomic("\\mathrm{D}", 0),
    "\\scriptCapitalE" => atomic("\\mathscr{E}", 0),
    "\\imaginaryI" => atomic("\\mathrm{i}", 0),
    "\\imaginaryJ" => atomic("\\mathrm{j}", 0),
    "\\exponentialE" => atomic("\\mathrm{e}", 0),
    "\\differentialD" => atomic("\\mathrm{d}", 0),
    "\\capitalDifferentialD" => atomic("\\mathrm{D}", 0),
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::infer_arity;

    #[test]
    fn declared_arity_matches_body() {
        for (name, def) in &BUILTIN_MACROS {
            assert_eq!(infer_arity(&def.def), def.args, "{name}");
        }
    }
}
