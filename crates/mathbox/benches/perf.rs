use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mathbox::{GlobalContext, MacroDictionary, MacroEntry, Settings, layout, parse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCase {
    Simple(String),
    Detailed(DetailedCase),
}

#[derive(Debug, Deserialize)]
struct DetailedCase {
    tex: String,
    #[serde(default)]
    macros: HashMap<String, String>,
    #[serde(default)]
    display: Option<DisplayValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DisplayValue {
    Bool(bool),
    Int(i64),
}

impl From<DisplayValue> for bool {
    fn from(value: DisplayValue) -> Self {
        match value {
            DisplayValue::Bool(value) => value,
            DisplayValue::Int(value) => value != 0,
        }
    }
}

struct PreparedCase {
    name: String,
    tex: String,
    settings: Settings,
    global: GlobalContext,
}

impl From<(String, RawCase)> for PreparedCase {
    fn from((name, raw): (String, RawCase)) -> Self {
        let (tex, display_mode, macros) = match raw {
            RawCase::Simple(tex) => (tex, false, HashMap::new()),
            RawCase::Detailed(case) => (
                case.tex,
                case.display.is_some_and(Into::into),
                case.macros,
            ),
        };
        let macros = MacroDictionary::new(
            macros
                .into_iter()
                .map(|(name, body)| (name, MacroEntry::from(body))),
        );
        Self {
            name,
            tex,
            settings: Settings::builder().macros(macros).build(),
            global: GlobalContext::builder().display_mode(display_mode).build(),
        }
    }
}

fn load_cases() -> Result<Vec<PreparedCase>, Box<dyn Error>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/corpus.yaml");
    let reader = BufReader::new(File::open(path)?);
    let raw: HashMap<String, RawCase> = serde_yaml::from_reader(reader)?;
    let mut cases: Vec<PreparedCase> = raw.into_iter().map(PreparedCase::from).collect();
    cases.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(cases)
}

fn bench_pipeline(c: &mut Criterion) {
    let cases = load_cases().expect("failed to load benches/corpus.yaml");

    let mut group = c.benchmark_group("parse");
    for case in &cases {
        group.bench_function(&case.name, |b| {
            b.iter(|| {
                let output = parse(black_box(&case.tex), &case.settings);
                black_box(output.tree.len());
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("parse_and_layout");
    for case in &cases {
        group.bench_function(&case.name, |b| {
            b.iter(|| {
                let output = parse(black_box(&case.tex), &case.settings);
                let root = layout(&output.tree, &case.global);
                black_box(root.width);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
