//! Serialization of an atom tree back to LaTeX.
//!
//! The output parses to an equivalent tree: arguments are always braced,
//! scripts come out as `^{..}` and `_{..}`, and error and macro atoms are
//! written back exactly as they were read.

use crate::parser::atom::{
    AtomId, AtomKind, AtomTree, Limits, OperatorName, PhantomKind, SpacingAmount,
};
use crate::style::MathstyleName;

/// Font commands that apply to the rest of their group.
const DECLARATION_FONTS: [&str; 6] = ["\\rm", "\\it", "\\bf", "\\sf", "\\tt", "\\cal"];

/// Spacing commands that take their amount as an argument.
const EXPLICIT_SPACING: [&str; 6] = [
    "\\hspace",
    "\\hspace*",
    "\\hskip",
    "\\mskip",
    "\\kern",
    "\\mkern",
];

/// Returns `true` if `latex` ends with a control word, which would absorb a
/// letter written right after it.
fn ends_with_control_word(latex: &str) -> bool {
    let stem = latex.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    stem.len() < latex.len() && stem.ends_with('\\')
}

struct LatexWriter<'t> {
    tree: &'t AtomTree,
    out: String,
}

impl LatexWriter<'_> {
    fn push(&mut self, latex: &str) {
        if latex.starts_with(|c: char| c.is_ascii_alphabetic()) && ends_with_control_word(&self.out)
        {
            self.out.push(' ');
        }
        self.out.push_str(latex);
    }

    fn atoms(&mut self, ids: &[AtomId]) {
        for &id in ids {
            self.atom(id);
        }
    }

    fn braced(&mut self, ids: &[AtomId]) {
        self.push("{");
        self.atoms(ids);
        self.push("}");
    }

    /// A braced argument. Groups already carry their braces.
    fn argument(&mut self, id: AtomId) {
        match &self.tree[id].kind {
            AtomKind::Group { braced: true, .. } => self.atom(id),
            AtomKind::Group { body, .. } => self.braced(body),
            _ => self.braced(&[id]),
        }
    }

    /// The content of `id` without its braces.
    fn contents(&mut self, id: AtomId) {
        match &self.tree[id].kind {
            AtomKind::Group { body, .. } => self.atoms(body),
            _ => self.atom(id),
        }
    }

    fn atom(&mut self, id: AtomId) {
        let tree = self.tree;
        match &tree[id].kind {
            AtomKind::Group { body, braced } => {
                if *braced {
                    self.braced(body);
                } else {
                    self.atoms(body);
                }
            }
            AtomKind::Symbol { value, command, .. } => match command {
                Some(command) => self.push(command),
                None => {
                    let mut buf = [0u8; 4];
                    self.push(value.encode_utf8(&mut buf));
                }
            },
            AtomKind::Operator {
                command,
                name,
                limits,
                ..
            } => {
                self.push(command);
                if let OperatorName::Body(body) = name {
                    self.braced(body);
                }
                match limits {
                    Limits::Limits => self.push("\\limits"),
                    Limits::NoLimits => self.push("\\nolimits"),
                    Limits::Auto => {}
                }
            }
            AtomKind::SupSub { base, sup, sub } => {
                if let Some(base) = base {
                    self.atom(*base);
                }
                if let Some(sup) = sup {
                    self.push("^");
                    self.argument(*sup);
                }
                if let Some(sub) = sub {
                    self.push("_");
                    self.argument(*sub);
                }
            }
            AtomKind::Fraction {
                command,
                numer,
                denom,
                has_bar,
                bar_size,
                left_delim,
                right_delim,
                mathstyle,
                infix,
                ..
            } => {
                if *infix {
                    self.contents(*numer);
                    self.push(command);
                    if let Some(size) = bar_size {
                        self.push(&format!("{{{size}}}"));
                    }
                    self.contents(*denom);
                } else if command == "\\genfrac" {
                    let thickness = match bar_size {
                        Some(size) => size.to_string(),
                        None if *has_bar => String::new(),
                        None => "0pt".to_owned(),
                    };
                    let style = match mathstyle {
                        Some(MathstyleName::Displaystyle) => "0",
                        Some(MathstyleName::Textstyle) => "1",
                        Some(MathstyleName::Scriptstyle) => "2",
                        Some(MathstyleName::Scriptscriptstyle) => "3",
                        None => "",
                    };
                    self.push(&format!(
                        "\\genfrac{{{}}}{{{}}}{{{thickness}}}{{{style}}}",
                        left_delim.as_deref().unwrap_or(""),
                        right_delim.as_deref().unwrap_or(""),
                    ));
                    self.argument(*numer);
                    self.argument(*denom);
                } else {
                    self.push(command);
                    self.argument(*numer);
                    self.argument(*denom);
                }
            }
            AtomKind::Radical { body, index } => {
                self.push("\\sqrt");
                if let Some(index) = index {
                    self.push("[");
                    self.contents(*index);
                    self.push("]");
                }
                self.argument(*body);
            }
            AtomKind::Accent { command, base, .. } => {
                self.push(command);
                self.argument(*base);
            }
            AtomKind::Overline { body } => {
                self.push("\\overline");
                self.argument(*body);
            }
            AtomKind::Underline { body } => {
                self.push("\\underline");
                self.argument(*body);
            }
            AtomKind::LeftRight { left, right, body } => {
                self.push("\\left");
                self.push(left);
                self.atoms(body);
                self.push("\\right");
                self.push(right);
            }
            AtomKind::Middle { delim } => {
                self.push("\\middle");
                self.push(delim);
            }
            AtomKind::SizedDelim { command, delim, .. } => {
                self.push(command);
                self.push(delim);
            }
            AtomKind::Text { command, body } => {
                self.push(command);
                self.braced(body);
            }
            AtomKind::Font { command, body } => {
                self.push(command);
                if DECLARATION_FONTS.contains(&command.as_str()) {
                    self.atoms(body);
                } else {
                    self.braced(body);
                }
            }
            AtomKind::Color {
                command,
                color,
                body,
            } => {
                self.push(&format!("{command}{{{color}}}"));
                if command == "\\color" {
                    self.atoms(body);
                } else {
                    self.braced(body);
                }
            }
            AtomKind::Styling { mathstyle, body } => {
                self.push(&format!("\\{mathstyle}"));
                self.atoms(body);
            }
            AtomKind::Sizing { command, body, .. } => {
                self.push(command);
                self.atoms(body);
            }
            AtomKind::Spacing { command, amount } => {
                self.push(command);
                if let SpacingAmount::Glue(glue) = amount
                    && EXPLICIT_SPACING.contains(&command.as_str())
                {
                    self.push(&format!("{{{glue}}}"));
                }
            }
            AtomKind::Array {
                environment,
                colspec_latex,
                rows,
                ..
            } => {
                self.push(&format!("\\begin{{{environment}}}"));
                if let Some(colspec) = colspec_latex {
                    self.push(&format!("{{{colspec}}}"));
                }
                for (r, row) in rows.iter().enumerate() {
                    if r > 0 {
                        self.push("\\\\");
                    }
                    for (c, &cell) in row.iter().enumerate() {
                        if c > 0 {
                            self.push("&");
                        }
                        self.contents(cell);
                    }
                }
                self.push(&format!("\\end{{{environment}}}"));
            }
            AtomKind::Placeholder { value } => match value {
                Some(value) if value.starts_with('#') => self.push(value),
                Some(value) => self.push(&format!("\\placeholder[{value}]")),
                None => self.push("\\placeholder"),
            },
            AtomKind::Error { latex, .. } => self.push(latex),
            AtomKind::Latex { value } => self.push(value),
            AtomKind::Macro { command, args, .. } => {
                self.push(command);
                self.push(args);
            }
            AtomKind::Phantom { kind, body } => {
                self.push(match kind {
                    PhantomKind::Full => "\\phantom",
                    PhantomKind::Horizontal => "\\hphantom",
                    PhantomKind::Vertical => "\\vphantom",
                    PhantomKind::Smash => "\\smash",
                });
                self.argument(*body);
            }
            AtomKind::Boxed {
                command,
                body,
                background,
                border,
            } => {
                self.push(command);
                if let Some(border) = border {
                    self.push(&format!("{{{border}}}"));
                }
                if let Some(background) = background {
                    self.push(&format!("{{{background}}}"));
                }
                self.argument(*body);
            }
            AtomKind::Html {
                command,
                value,
                body,
            } => {
                self.push(&format!("{command}{{{value}}}"));
                self.braced(body);
            }
            AtomKind::Mclass { command, body, .. } => {
                self.push(command);
                self.braced(body);
            }
        }
    }
}

impl AtomTree {
    /// Serializes the tree back to LaTeX.
    ///
    /// Parsing the result gives a tree that serializes to the same string.
    #[must_use]
    pub fn to_latex(&self) -> String {
        let mut writer = LatexWriter {
            tree: self,
            out: String::new(),
        };
        writer.contents(self.root());
        writer.out
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;
    use crate::types::{LatexSyntaxError, Settings};

    fn round_trip(latex: &str) -> String {
        let settings = Settings::default();
        let mut listener = |_: LatexSyntaxError| {};
        Parser::new(latex, &settings, &mut listener).parse().to_latex()
    }

    #[test]
    fn arguments_are_braced() {
        assert_eq!(round_trip("\\frac12"), "\\frac{1}{2}");
        assert_eq!(round_trip("x^2_i"), "x^{2}_{i}");
        assert_eq!(round_trip("\\sqrt[3]{x}"), "\\sqrt[3]{x}");
    }

    #[test]
    fn control_words_keep_their_separator() {
        assert_eq!(round_trip("\\alpha x"), "\\alpha x");
        assert_eq!(round_trip("\\sin\\theta"), "\\sin\\theta");
        assert_eq!(round_trip("\\left(a\\middle|b\\right)"), "\\left(a\\middle|b\\right)");
    }

    #[test]
    fn infix_fractions_stay_infix() {
        assert_eq!(round_trip("{a\\over b}"), "{a\\over b}");
    }

    #[test]
    fn environments_and_spacing() {
        assert_eq!(
            round_trip("\\begin{pmatrix}a&b\\\\c&d\\end{pmatrix}"),
            "\\begin{pmatrix}a&b\\\\c&d\\end{pmatrix}"
        );
        assert_eq!(round_trip("a\\,b\\quad c"), "a\\,b\\quad c");
        assert_eq!(round_trip("\\text{a b}"), "\\text{a b}");
    }

    #[test]
    fn errors_are_kept_verbatim() {
        let latex = round_trip("a\\foo b");
        assert!(latex.starts_with('a'));
        assert!(latex.contains("\\foo"));
    }

    #[test]
    fn serialization_is_stable() {
        for latex in [
            "\\frac{a}{b}+\\sqrt{x^2}",
            "\\color{red}x+\\textcolor{blue}{y}",
            "\\mathbf{v}\\cdot\\hat{n}",
            "\\sum\\limits_{i=0}^n i",
            "\\boxed{x}\\phantom{y}",
            "\\begin{array}{c|c}1&2\\end{array}",
        ] {
            let once = round_trip(latex);
            assert_eq!(round_trip(&once), once, "{latex}");
        }
    }
}
