#![allow(dead_code)]

use std::panic::{UnwindSafe, catch_unwind};

use mathbox::{
    AtomId, AtomKind, AtomTree, GlobalContext, MacroDictionary, MacroEntry, MathBox,
    ParseErrorCode, Settings, layout, parse,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct TestExpr {
    pub expr: String,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

impl TestExpr {
    fn context(&self) -> String {
        format!("{} ({}:{})", self.code, self.file, self.line)
    }

    /// Parses without errors and returns the tree.
    pub fn to_parse(self, settings: &Settings) -> Result<AtomTree, String> {
        let output = parse(&self.expr, settings);
        if output.errors.is_empty() {
            Ok(output.tree)
        } else {
            Err(format!(
                "'{}' reported {:?} at {}",
                self.expr,
                output.errors,
                self.context()
            ))
        }
    }

    /// Parses with exactly one error, of the given code.
    pub fn to_fail_with(self, code: ParseErrorCode, settings: &Settings) -> Result<AtomTree, String> {
        let output = parse(&self.expr, settings);
        let codes: Vec<_> = output.errors.iter().map(|err| err.code).collect();
        if codes == [code] {
            Ok(output.tree)
        } else {
            Err(format!(
                "'{}' reported {codes:?} instead of [{code}] at {}",
                self.expr,
                self.context()
            ))
        }
    }

    /// Parses without errors into a tree shaped like the one for `other`.
    pub fn to_parse_like(self, other: &str, settings: &Settings) -> Result<(), String> {
        let context = self.context();
        let expr = self.expr.clone();
        let left = self.to_parse(settings)?;
        let right = expect_impl(other, file!(), line!(), "other").to_parse(settings)?;
        let (left, right) = (describe(&left, left.root()), describe(&right, right.root()));
        if left == right {
            Ok(())
        } else {
            Err(format!(
                "'{expr}' parsed as {left}, '{other}' as {right} at {context}"
            ))
        }
    }

    /// Parses without errors and lays the tree out.
    pub fn to_build(self, global: &GlobalContext) -> Result<MathBox, String> {
        let tree = self.to_parse(&Settings::default())?;
        Ok(layout(&tree, global))
    }
}

pub fn expect_impl(expr: &str, file: &'static str, line: u32, code: &'static str) -> TestExpr {
    TestExpr {
        expr: expr.to_owned(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::setup::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), String> + UnwindSafe,
{
    init_logging();
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test '{desc}' failed: {e}"),
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// A position-free rendering of a subtree, for comparing parses.
pub fn describe(tree: &AtomTree, id: AtomId) -> String {
    let atom = &tree[id];
    let label = match &atom.kind {
        AtomKind::Symbol { value, .. } => value.to_string(),
        AtomKind::SupSub { sup, sub, .. } => format!(
            "sup-sub{}{}",
            if sup.is_some() { "^" } else { "" },
            if sub.is_some() { "_" } else { "" }
        ),
        AtomKind::Operator { command, .. }
        | AtomKind::Fraction { command, .. }
        | AtomKind::Accent { command, .. }
        | AtomKind::Text { command, .. }
        | AtomKind::Font { command, .. }
        | AtomKind::Spacing { command, .. } => command.clone(),
        AtomKind::Error { code, .. } => format!("error:{code}"),
        _ => atom.atom_type().to_string(),
    };
    let children = atom.kind.children();
    if children.is_empty() {
        return label;
    }
    let children: Vec<_> = children.into_iter().map(|c| describe(tree, c)).collect();
    format!("({label} {})", children.join(" "))
}

/// The children of the root, described.
pub fn root_shapes(tree: &AtomTree) -> Vec<String> {
    tree[tree.root()]
        .kind
        .children()
        .into_iter()
        .map(|id| describe(tree, id))
        .collect()
}

/// The widths of the inter-atom glue in a box tree, in mu of the text
/// style, rounded.
pub fn glue_in_mu(b: &MathBox) -> Vec<i64> {
    b.descendants()
        .into_iter()
        .filter(|d| {
            d.classes
                .iter()
                .any(|c| matches!(c.as_str(), "thin" | "medium" | "thick"))
        })
        .map(|d| (d.width * 18.0).round() as i64)
        .collect()
}

/// Runs `test_fn` on a thread with a large stack, for inputs that nest as
/// deep as the default limits allow.
pub fn on_big_stack<F>(test_fn: F) -> Result<(), String>
where
    F: FnOnce() -> Result<(), String> + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(64 << 20)
        .spawn(test_fn)
        .map_err(|e| e.to_string())?
        .join()
        .unwrap_or_else(|_| Err("the test thread panicked".to_owned()))
}

pub fn default_settings() -> Settings {
    Settings::default()
}

pub fn settings_with_macros(macros: &[(&str, &str)]) -> Settings {
    let macros = MacroDictionary::new(
        macros
            .iter()
            .map(|(name, body)| (*name, MacroEntry::from(*body))),
    );
    Settings::builder().macros(macros).build()
}

pub fn display_global() -> GlobalContext {
    GlobalContext::builder().display_mode(true).build()
}

#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $expr:expr, $($arg:tt)+) => {
        let $pat = $expr else {
            panic!($($arg)+);
        };
    };
    ($pat:pat = $expr:expr) => {
        let $pat = $expr else {
            panic!(
                "assert_let failed: pattern `{}` did not match {} at {}:{}",
                stringify!($pat),
                stringify!($expr),
                file!(),
                line!()
            );
        };
    };
}
