//! Array-like environments: `array`, the matrix family, `cases`, `aligned`
//! and `gathered`.

use crate::box_tree::MathBox;
use crate::build_box::{Layout, error_box};
use crate::context::Context;
use crate::define_environment::{EnvContext, EnvDefSpec};
use crate::define_function::{Argument, FunctionPropSpec};
use crate::delimiter::left_right_delim;
use crate::parser::Parser;
use crate::parser::atom::{AtomId, AtomKind, AtomType, ColumnAlign, ColumnSpec};
use crate::registry::Registry;
use crate::spacing_data::AtomClass;
use crate::style::MathstyleName;
use crate::types::{ArgType, ParseError, TokenKind};

/// How an array environment lays out its cells.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArrayConfig {
    /// Left fence.
    pub left_delim: Option<&'static str>,
    /// Right fence.
    pub right_delim: Option<&'static str>,
    /// Forced style of the cells.
    pub mathstyle: Option<MathstyleName>,
    /// Whether rows get `\jot` of extra space.
    pub jot: bool,
    /// Alignment of generated columns; alternating right/left when `None`.
    pub align: Option<ColumnAlign>,
    /// Row spacing factor overriding `\arraystretch`.
    pub arraystretch: Option<f64>,
}

impl ArrayConfig {
    /// The configuration of a built-in environment.
    #[must_use]
    pub fn for_environment(name: &str) -> Self {
        let fenced = |left, right| Self {
            left_delim: Some(left),
            right_delim: Some(right),
            align: Some(ColumnAlign::Center),
            ..Self::default()
        };
        match name {
            "pmatrix" => fenced("(", ")"),
            "bmatrix" => fenced("[", "]"),
            "Bmatrix" => fenced("\\{", "\\}"),
            "vmatrix" => fenced("|", "|"),
            "Vmatrix" => fenced("\\|", "\\|"),
            "smallmatrix" => Self {
                mathstyle: Some(MathstyleName::Scriptstyle),
                align: Some(ColumnAlign::Center),
                arraystretch: Some(0.5),
                ..Self::default()
            },
            "cases" => Self {
                left_delim: Some("\\{"),
                right_delim: Some("."),
                mathstyle: Some(MathstyleName::Textstyle),
                align: Some(ColumnAlign::Left),
                arraystretch: Some(1.2),
                ..Self::default()
            },
            "aligned" => Self {
                mathstyle: Some(MathstyleName::Displaystyle),
                jot: true,
                ..Self::default()
            },
            "gathered" => Self {
                mathstyle: Some(MathstyleName::Displaystyle),
                jot: true,
                align: Some(ColumnAlign::Center),
                ..Self::default()
            },
            _ => Self {
                align: Some(ColumnAlign::Center),
                ..Self::default()
            },
        }
    }

    /// Column specification for `columns` generated columns.
    #[must_use]
    pub fn colspec(&self, columns: usize) -> Vec<ColumnSpec> {
        let mut spec = Vec::with_capacity(columns * 2);
        for i in 0..columns {
            match self.align {
                Some(align) => spec.push(ColumnSpec::Column(align)),
                None if i % 2 == 0 => spec.push(ColumnSpec::Column(ColumnAlign::Right)),
                None => {
                    // the relation side hugs its left-hand side
                    spec.push(ColumnSpec::Gap(Vec::new()));
                    spec.push(ColumnSpec::Column(ColumnAlign::Left));
                }
            }
        }
        spec
    }
}

/// Parses the cells of an array body, up to but not including `\end`.
///
/// Cells are separated by `&` and rows by `\\` or `\cr`, which may carry an
/// optional `[dimen]` that is read and ignored. A trailing empty row is
/// dropped.
pub fn parse_array(parser: &mut Parser) -> Result<Vec<Vec<AtomId>>, ParseError> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    loop {
        let start = parser.fetch()?.loc;
        let body = parser.parse_expression(None);
        let loc = parser.span_from(start);
        row.push(parser.push(
            AtomKind::Group {
                body,
                braced: false,
            },
            loc,
        ));

        let next = parser.fetch()?.clone();
        match &next.kind {
            TokenKind::Literal('&') => parser.consume(),
            TokenKind::Command(name) if name == "\\\\" || name == "\\cr" => {
                parser.consume();
                if name == "\\\\" {
                    parser.parse_argument(ArgType::Dimen, true)?;
                }
                rows.push(core::mem::take(&mut row));
            }
            _ => break,
        }
    }
    rows.push(row);

    let is_empty_row = |row: &[AtomId]| {
        row.len() == 1
            && matches!(&parser.tree[row[0]].kind, AtomKind::Group { body, .. } if body.is_empty())
    };
    if rows.len() > 1 && rows.last().is_some_and(|row| is_empty_row(row)) {
        rows.pop();
    }
    Ok(rows)
}

fn handler(
    context: EnvContext,
    args: Vec<Argument>,
    _opt_args: Vec<Option<Argument>>,
) -> Result<AtomId, ParseError> {
    let EnvContext {
        env_name,
        parser,
        loc,
        ..
    } = context;
    let config = ArrayConfig::for_environment(env_name);
    let rows = parse_array(parser)?;
    let (colspec, colspec_latex) = match args.into_iter().next() {
        Some(Argument::Colspec { spec, latex }) => (spec, Some(latex)),
        _ => {
            let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
            (config.colspec(columns), None)
        }
    };
    let loc = parser.span_from(loc);
    Ok(parser.push(
        AtomKind::Array {
            environment: env_name.to_owned(),
            colspec,
            colspec_latex,
            rows,
            left_delim: config.left_delim.map(ToOwned::to_owned),
            right_delim: config.right_delim.map(ToOwned::to_owned),
            mathstyle: config.mathstyle,
            jot: config.jot,
        },
        loc,
    ))
}

/// Registers the array environments.
pub fn define_array(registry: &mut Registry) {
    registry.define_environment(EnvDefSpec {
        names: &["array"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: &[ArgType::Colspec],
            ..Default::default()
        },
        handler,
    });

    registry.define_environment(EnvDefSpec {
        names: &[
            "matrix",
            "pmatrix",
            "bmatrix",
            "Bmatrix",
            "vmatrix",
            "Vmatrix",
            "smallmatrix",
            "cases",
            "aligned",
            "gathered",
        ],
        props: FunctionPropSpec::default(),
        handler,
    });

    registry.define_box_builder(AtomType::Array, build_array);
}

/// A laid-out row.
struct Row {
    cells: Vec<MathBox>,
    /// Distance from the top of the array to the baseline.
    pos: f64,
}

/// A vertical rule spanning the array. Under a phantom context only its space
/// is kept.
fn column_rule(ctx: &Context, width: f64, height: f64, depth: f64, dashed: bool) -> MathBox {
    if ctx.phantom {
        return MathBox::strut(width, height, depth);
    }
    let mut rule = MathBox::rule(width, height, depth);
    rule.color = ctx.color();
    if dashed {
        rule = rule.with_hint("dashed");
    }
    rule
}

/// Lays out the cells in a grid, centred on the math axis.
///
/// Rows are spaced by `\arraystretch` times a 12pt baseline skip, plus
/// `\jot` for the display-style environments. Columns are separated by
/// twice `\arraycolsep`; `array` also pads its outer edges. An `@{...}`
/// gap replaces the separation on both sides.
fn build_array(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Array {
        environment,
        colspec,
        rows,
        left_delim,
        right_delim,
        mathstyle,
        jot,
        ..
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };
    let config = ArrayConfig::for_environment(environment);
    let cell_ctx = mathstyle.map_or_else(|| ctx.clone(), |m| ctx.having_style(m.style()));

    let pt = 1.0 / ctx.font_metrics().pt_per_em;
    let arraystretch = config
        .arraystretch
        .or_else(|| ctx.register_number("arraystretch"))
        .unwrap_or(1.0);
    let arrayskip = arraystretch * 12.0 * pt;
    let jot = if *jot { ctx.register_em("jot") } else { 0.0 };

    let mut total_height = 0.0;
    let mut body: Vec<Row> = Vec::with_capacity(rows.len());
    for row in rows {
        // every row holds at least a strut
        let mut height = 0.7 * arrayskip;
        let mut depth = 0.3 * arrayskip;
        let cells: Vec<MathBox> = row
            .iter()
            .map(|&cell| layout.build_group(cell, &cell_ctx))
            .collect();
        for cell in &cells {
            height = height.max(cell.height);
            depth = depth.max(cell.depth);
        }
        depth += jot;
        body.push(Row {
            cells,
            pos: total_height + height,
        });
        total_height += height + depth;
    }
    let offset = total_height / 2.0 + ctx.font_metrics().axis_height;
    let (top, bottom) = (offset, total_height - offset);

    let colsep = ctx.register_em("arraycolsep");
    let outer = if environment == "array" { colsep } else { 0.0 };
    let column_count = body.iter().map(|row| row.cells.len()).max().unwrap_or(0);
    let mut specs = colspec.clone();
    let declared = specs
        .iter()
        .filter(|spec| matches!(spec, ColumnSpec::Column(_)))
        .count();
    specs.extend(
        (declared..column_count).map(|_| ColumnSpec::Column(ColumnAlign::Center)),
    );

    let mut placed = Vec::new();
    let mut x = 0.0;
    let mut column = 0;
    let mut leading = outer;
    let mut trailing = 0.0;
    for spec in &specs {
        match spec {
            ColumnSpec::Column(align) => {
                x += trailing + leading;
                let width = body
                    .iter()
                    .filter_map(|row| row.cells.get(column))
                    .map(|cell| cell.width)
                    .fold(0.0, f64::max);
                for row in &mut body {
                    let Some(cell) = row.cells.get_mut(column) else {
                        continue;
                    };
                    let mut cell = core::mem::take(cell);
                    cell.left = x + match align {
                        ColumnAlign::Left => 0.0,
                        ColumnAlign::Center => (width - cell.width) / 2.0,
                        ColumnAlign::Right => width - cell.width,
                    };
                    placed.push(cell.shifted(row.pos - offset));
                }
                x += width;
                column += 1;
                trailing = colsep;
                leading = colsep;
            }
            ColumnSpec::Rule { dashed } => {
                x += trailing;
                trailing = 0.0;
                let width = ctx.register_em("arrayrulewidth");
                let mut rule = column_rule(ctx, width, top, bottom, *dashed);
                rule.left = x;
                placed.push(rule);
                x += width;
            }
            ColumnSpec::Gap(gap) => {
                trailing = 0.0;
                leading = 0.0;
                let mut gap = layout.build_row(gap, &cell_ctx);
                gap.left = x;
                x += gap.width;
                placed.push(gap);
            }
        }
    }
    if outer > 0.0 {
        x += trailing;
    }
    placed.insert(0, MathBox::strut(x, top, bottom));
    let grid = MathBox::stack(placed).with_hint("mtable");

    if left_delim.is_none() && right_delim.is_none() {
        return grid.with_class(AtomClass::Ord);
    }
    let fence = |delim: &Option<String>, class| {
        left_right_delim(
            ctx,
            delim.as_deref().unwrap_or("."),
            grid.height,
            grid.depth,
            class,
        )
    };
    let open = fence(left_delim, AtomClass::Open);
    let close = fence(right_delim, AtomClass::Close);
    MathBox::row(vec![open, grid, close]).with_class(AtomClass::Ord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_columns() {
        let spec = ArrayConfig::for_environment("pmatrix").colspec(2);
        assert_eq!(
            spec,
            [
                ColumnSpec::Column(ColumnAlign::Center),
                ColumnSpec::Column(ColumnAlign::Center)
            ]
        );

        let spec = ArrayConfig::for_environment("aligned").colspec(2);
        assert_eq!(
            spec,
            [
                ColumnSpec::Column(ColumnAlign::Right),
                ColumnSpec::Gap(Vec::new()),
                ColumnSpec::Column(ColumnAlign::Left)
            ]
        );
    }

    #[test]
    fn fences_by_name() {
        let config = ArrayConfig::for_environment("vmatrix");
        assert_eq!((config.left_delim, config.right_delim), (Some("|"), Some("|")));
        assert_eq!(ArrayConfig::for_environment("matrix").left_delim, None);
        assert!(ArrayConfig::for_environment("gathered").jot);
    }

    fn build(latex: &str) -> MathBox {
        use crate::context::GlobalContext;
        use crate::style::TEXT;
        use crate::types::{LatexSyntaxError, Settings};

        let settings = Settings::default();
        let mut listener = |err: LatexSyntaxError| panic!("unexpected {err}");
        let tree = Parser::new(latex, &settings, &mut listener).parse();
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        Layout::new(&tree, Registry::global()).build_group(tree.root(), &ctx)
    }

    #[test]
    fn columns_are_separated_by_arraycolsep() {
        let cells = build("ab").width;
        let matrix = build("\\begin{matrix}a&b\\end{matrix}");
        assert!((matrix.width - cells - 1.0).abs() < 1e-9, "{}", matrix.width);

        // outer padding on both sides and a rule in the middle
        let array = build("\\begin{array}{c|c}a&b\\end{array}");
        assert!((array.width - cells - 2.04).abs() < 1e-9, "{}", array.width);
    }

    #[test]
    fn jot_opens_up_rows() {
        let matrix = build("\\begin{matrix}a\\\\b\\end{matrix}");
        let aligned = build("\\begin{aligned}a\\\\b\\end{aligned}");
        let diff = aligned.total_height() - matrix.total_height();
        assert!((diff - 0.6).abs() < 1e-9, "{diff}");
    }

    #[test]
    fn matrices_are_fenced() {
        let b = build("\\begin{pmatrix}a&b\\\\c&d\\end{pmatrix}");
        let grid = &b.children[0].children[1];
        assert_eq!(b.children[0].children[0].class, Some(AtomClass::Open));
        assert_eq!(b.children[0].children[2].class, Some(AtomClass::Close));
        assert_eq!(grid.text(), "abcd");
        assert!(b.total_height() >= 2.4 - 1e-9);
    }
}
