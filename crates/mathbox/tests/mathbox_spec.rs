mod setup;
use mathbox::{
    AtomIdPolicy, AtomKind, AtomType, BoxType, GlobalContext, MathBox, ParseErrorCode, Settings,
    layout, parse,
};
use mathbox::box_tree::Arrangement;
use setup::*;

#[test]
fn a_parser() {
    it("should not fail on an empty string", || {
        let tree = expect!("").to_parse(&default_settings())?;
        assert!(tree.is_empty());
        Ok(())
    });

    it("should ignore whitespace", || {
        expect!("    x    y    ").to_parse_like("xy", &default_settings())
    });

    it("should ignore whitespace around scripts", || {
        expect!("    x   ^ y    ").to_parse_like("x^y", &default_settings())
    });

    it("should link every atom to its parent", || {
        let tree = expect!("\\frac{a_1}{\\sqrt[3]{b}}+\\left(c\\middle|d\\right)")
            .to_parse(&default_settings())?;
        for id in tree.descendants() {
            match tree.parent(id) {
                None => assert_eq!(id, tree.root()),
                Some(parent) => assert!(tree[parent].kind.children().contains(&id)),
            }
        }
        Ok(())
    });

    it("should keep source positions", || {
        let tree = expect!("a+\\frac{b}{c}").to_parse(&default_settings())?;
        let frac = tree.find(AtomType::Fraction)[0];
        let loc = tree[frac].loc.ok_or("no location")?;
        assert_eq!((loc.start, loc.end), (2, 13));
        Ok(())
    });
}

#[test]
fn a_script_parser() {
    it("should merge a superscript and a subscript", || {
        expect!("x^2_3").to_parse_like("x_3^2", &default_settings())
    });

    it("should reject a double superscript", || {
        expect!("x^2^3").to_fail_with(ParseErrorCode::TooManyInfixCommands, &default_settings())?;
        expect!("x_1_2").to_fail_with(ParseErrorCode::TooManyInfixCommands, &default_settings())?;
        Ok(())
    });

    it("should allow scripts with no base", || {
        let tree = expect!("^2").to_parse(&default_settings())?;
        let supsub = tree.find(AtomType::SupSub)[0];
        assert_let!(AtomKind::SupSub { base: None, sup: Some(_), .. } = &tree[supsub].kind);
        Ok(())
    });

    it("should make primes superscripts", || {
        expect!("f'").to_parse_like("f^{\\prime}", &default_settings())
    });
}

#[test]
fn a_fraction_parser() {
    it("should report a missing argument once", || {
        let tree =
            expect!("\\frac{2}").to_fail_with(ParseErrorCode::MissingArgument, &default_settings())?;
        assert_eq!(tree.find(AtomType::Fraction).len(), 1);
        assert_eq!(tree.find(AtomType::Placeholder).len(), 1);
        Ok(())
    });

    it("should parse infix fractions", || {
        let tree = expect!("a+b\\over c").to_parse(&default_settings())?;
        let frac = tree.find(AtomType::Fraction)[0];
        assert_let!(AtomKind::Fraction { infix: true, .. } = &tree[frac].kind);
        assert_eq!(root_shapes(&tree).len(), 1);
        Ok(())
    });

    it("should reject two infix commands in a group", || {
        expect!("a\\over b\\over c")
            .to_fail_with(ParseErrorCode::TooManyInfixCommands, &default_settings())
            .map(|_| ())
    });
}

#[test]
fn error_recovery() {
    it("should keep unknown commands as error atoms", || {
        let tree = expect!("a+\\foo+b")
            .to_fail_with(ParseErrorCode::UnknownCommand, &default_settings())?;
        assert_eq!(
            root_shapes(&tree),
            ["a", "+", "error:unknown-command", "+", "b"]
        );
        Ok(())
    });

    it("should report unbalanced groups", || {
        expect!("{a").to_fail_with(ParseErrorCode::UnbalancedBraces, &default_settings())?;
        expect!("a}").to_fail_with(ParseErrorCode::UnbalancedBraces, &default_settings())?;
        expect!("\\left(a").to_fail_with(ParseErrorCode::UnbalancedBraces, &default_settings())?;
        Ok(())
    });

    it("should reject middle outside of left and right", || {
        expect!("a\\middle|b")
            .to_fail_with(ParseErrorCode::InvalidCommand, &default_settings())
            .map(|_| ())
    });

    it("should skip unknown environments", || {
        let tree = expect!("\\begin{foo}x\\end{foo}y")
            .to_fail_with(ParseErrorCode::UnknownEnvironment, &default_settings())?;
        assert_eq!(root_shapes(&tree)[1], "y");
        Ok(())
    });

    it("should report dimensions without units", || {
        expect!("\\hspace{3}")
            .to_fail_with(ParseErrorCode::MissingUnit, &default_settings())
            .map(|_| ())
    });

    it("should report an unclosed math shift in text", || {
        expect!("\\text{$x}")
            .to_fail_with(ParseErrorCode::UnbalancedModeShift, &default_settings())?;
        expect!("\\text{\\(x}")
            .to_fail_with(ParseErrorCode::UnbalancedModeShift, &default_settings())?;
        Ok(())
    });

    it("should report input that ends inside an optional argument", || {
        let tree = expect!("\\sqrt[3")
            .to_fail_with(ParseErrorCode::UnexpectedEndOfString, &default_settings())?;
        assert!(!tree.is_empty());
        Ok(())
    });

    it("should bound deep fences and style switches", || {
        on_big_stack(|| {
            let n = 2000;
            for input in [
                format!("{}x{}", "\\left(".repeat(n), "\\right)".repeat(n)),
                format!("{}x", "\\displaystyle ".repeat(n)),
                format!("{}x", "\\color{red}".repeat(n)),
                format!("{}x{}", "{".repeat(n), "}".repeat(n)),
            ] {
                expect!(&input).to_fail_with(ParseErrorCode::RecursionLimit, &default_settings())?;
            }
            Ok(())
        })
    });

    it("should hand each error to the listener with its context", || {
        let output = parse("x+\\foo y", &default_settings());
        let err = output.errors.first().ok_or("no error")?;
        assert_eq!(err.arg.as_deref(), Some("\\foo"));
        assert_eq!(err.latex.as_deref(), Some("x+\\foo y"));
        assert_eq!(err.before.as_deref(), Some("x+"));
        Ok(())
    });
}

#[test]
fn a_macro_expander() {
    it("should expand user macros", || {
        let settings = settings_with_macros(&[("R", "\\mathbb{R}")]);
        expect!("x\\in\\R").to_parse_like("x\\in\\mathbb{R}", &settings)
    });

    it("should substitute arguments", || {
        let settings = settings_with_macros(&[("sq", "#1^2")]);
        expect!("\\sq{x}").to_parse_like("x^2", &settings)
    });

    it("should expand built-in aliases", || {
        expect!("a\\ne b").to_parse_like("a\\neq b", &default_settings())
    });

    it("should stop runaway recursion", || {
        let settings = settings_with_macros(&[("loop", "\\loop")]);
        expect!("\\loop")
            .to_fail_with(ParseErrorCode::RecursionLimit, &settings)
            .map(|_| ())
    });

    it("should stop macros whose arguments keep growing", || {
        let settings = settings_with_macros(&[("g", "\\g{#1#1}")]);
        expect!("\\g{x}")
            .to_fail_with(ParseErrorCode::RecursionLimit, &settings)
            .map(|_| ())
    });

    it("should keep atomic macros as a unit", || {
        let tree = expect!("\\nicefrac{1}{2}").to_parse(&default_settings())?;
        let id = tree.find(AtomType::Macro)[0];
        assert_let!(AtomKind::Macro { command, args, .. } = &tree[id].kind);
        assert_eq!((command.as_str(), args.as_str()), ("\\nicefrac", "{1}{2}"));
        Ok(())
    });
}

const CORPUS: &[&str] = &[
    "x",
    "x^2+y^2=z^2",
    "\\frac{-b\\pm\\sqrt{b^2-4ac}}{2a}",
    "\\sum_{i=0}^{n} i^2",
    "\\int_0^\\infty e^{-x^2}\\,dx",
    "\\lim_{x\\to 0}\\frac{\\sin x}{x}",
    "\\left(\\frac{a}{b}\\right)^2",
    "\\left\\{x\\middle|x>0\\right\\}",
    "\\sqrt[3]{x+1}",
    "\\hat{a}\\vec{v}\\widehat{xyz}",
    "\\overline{z}\\underline{w}",
    "\\binom{n}{k}",
    "\\begin{pmatrix}1&0\\\\0&1\\end{pmatrix}",
    "\\begin{cases}x&x>0\\\\-x&\\text{otherwise}\\end{cases}",
    "\\begin{aligned}a&=b\\\\c&=d\\end{aligned}",
    "\\mathbf{F}=m\\mathbf{a}",
    "\\mathbb{R}^n\\times\\mathcal{C}",
    "\\color{red}x+\\textcolor{blue}{y}",
    "\\boxed{E=mc^2}",
    "\\displaystyle\\sum_k\\scriptstyle k",
    "\\Large x\\tiny y",
    "a\\quad b\\qquad c\\!d",
    "\\bigl(\\Bigl[\\biggl\\{\\Biggl|",
    "\\phantom{x}\\smash{y}",
    "\\operatorname{rank}A",
    "\\mathrel{\\sim}\\mathbin{\\circ}",
    "\\placeholder[answer]+1",
    "\\text{if } x",
    "\\char\"41",
    "{a\\over b}",
];

#[test]
fn a_layout_engine() {
    it("should lay out the corpus", || {
        for latex in CORPUS {
            let root = expect!(latex).to_build(&GlobalContext::default())?;
            for b in root.descendants() {
                assert!(b.width.is_finite(), "{latex}: width {}", b.width);
                assert!(b.height.is_finite() && b.depth.is_finite(), "{latex}");
            }
            assert!(root.height >= 0.0 && root.depth >= 0.0, "{latex}");
            assert!(root.width > 0.0, "{latex}");
        }
        Ok(())
    });

    it("should lay out the same tree the same way twice", || {
        for latex in CORPUS {
            let tree = expect!(latex).to_parse(&default_settings())?;
            let global = GlobalContext::default();
            assert!(layout(&tree, &global) == layout(&tree, &global), "{latex}");
        }
        Ok(())
    });

    it("should make every row as wide as its children", || {
        for latex in CORPUS {
            let root = expect!(latex).to_build(&GlobalContext::default())?;
            for b in root.descendants() {
                if b.arrangement != Arrangement::Row || b.children.is_empty() {
                    continue;
                }
                let sum: f64 = b.children.iter().map(|c| c.width).sum();
                assert!((b.width - sum).abs() < 1e-9, "{latex}: {} vs {sum}", b.width);
            }
        }
        Ok(())
    });

    it("should apply the spacing table", || {
        let build = |latex| expect!(latex).to_build(&GlobalContext::default());
        assert_eq!(glue_in_mu(&build("a+b")?), [4, 4]);
        assert_eq!(glue_in_mu(&build("a=b")?), [5, 5]);
        assert_eq!(glue_in_mu(&build("a,b")?), [3]);
        assert_eq!(glue_in_mu(&build("\\sin x")?), [3]);
        // a leading binary operator is an ordinary
        assert!(glue_in_mu(&build("-a")?).is_empty());
        // no medium or thick space in scripts
        assert!(glue_in_mu(&build("x^{a+b=c}")?).is_empty());
        Ok(())
    });

    it("should lower subscripts and raise superscripts", || {
        let x = expect!("x").to_build(&GlobalContext::default())?;
        let sub = expect!("x_1").to_build(&GlobalContext::default())?;
        let sup = expect!("x^2").to_build(&GlobalContext::default())?;
        assert!(sub.depth > x.depth);
        assert!(sup.height > x.height);
        Ok(())
    });

    it("should shrink scripts", || {
        let two = expect!("2").to_build(&GlobalContext::default())?;
        let sup = expect!("{}^2").to_build(&GlobalContext::default())?;
        let script = sup
            .descendants()
            .into_iter()
            .find(|b| b.text() == "2" && b.glyph.is_some())
            .ok_or("no script glyph")?
            .width;
        assert!((script - two.width * 0.7).abs() < 1e-9, "{script}");
        Ok(())
    });

    it("should cascade colours to every glyph", || {
        let b = expect!("\\textcolor{blue}{\\frac{a}{b^2}}").to_build(&GlobalContext::default())?;
        let glyphs: Vec<&MathBox> = b
            .descendants()
            .into_iter()
            .filter(|d| d.glyph.is_some())
            .collect();
        assert_eq!(glyphs.len(), 3);
        assert!(glyphs.iter().all(|g| g.color.as_deref() == Some("#0000ff")));
        Ok(())
    });

    it("should use display style in display mode", || {
        let inline = expect!("\\sum_{i}^{n}").to_build(&GlobalContext::default())?;
        let display = expect!("\\sum_{i}^{n}").to_build(&display_global())?;
        assert!(display.total_height() > inline.total_height());
        Ok(())
    });

    it("should draw errors as error boxes", || {
        let output = parse("a\\foo", &Settings::default());
        let root = layout(&output.tree, &GlobalContext::default());
        assert!(root.descendants().iter().any(|b| b.kind == BoxType::Error));
        Ok(())
    });
}

#[test]
fn atom_ids() {
    it("should number boxes in order", || {
        let global = GlobalContext::builder()
            .atom_id_policy(AtomIdPolicy::Sequential)
            .build();
        let root = expect!("a+b").to_build(&global)?;
        let ids: Vec<&str> = root
            .descendants()
            .into_iter()
            .filter_map(|b| b.id.as_deref())
            .collect();
        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.len() >= 3);
        Ok(())
    });

    it("should give a captured macro one id", || {
        let global = GlobalContext::builder()
            .atom_id_policy(AtomIdPolicy::Sequential)
            .build();
        let root = expect!("\\nicefrac{1}{2}").to_build(&global)?;
        let with_ids = root
            .descendants()
            .into_iter()
            .filter(|b| b.id.is_some() && b.glyph.is_some())
            .count();
        assert_eq!(with_ids, 0);
        Ok(())
    });
}

#[test]
fn latex_serialization() {
    it("should be stable over the corpus", || {
        for latex in CORPUS {
            let once = expect!(latex).to_parse(&default_settings())?.to_latex();
            let twice = expect!(&once).to_parse(&default_settings())?.to_latex();
            assert_eq!(once, twice, "{latex}");
        }
        Ok(())
    });

    it("should write macros verbatim", || {
        let tree = expect!("\\nicefrac{1}{2}+\\braket{\\psi}").to_parse(&default_settings())?;
        assert_eq!(tree.to_latex(), "\\nicefrac{1}{2}+\\braket{\\psi}");
        Ok(())
    });
}
