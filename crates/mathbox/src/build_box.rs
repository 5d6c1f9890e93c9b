//! Layout of an atom tree into a box tree.
//!
//! [`Layout`] walks the atom tree and dispatches each atom to the box builder
//! registered for its type. Builders recurse through [`Layout::build_group`]
//! and [`Layout::build_expression`], deriving a new [`Context`] at every
//! descent. Layout cannot fail: an atom without a usable builder is drawn as
//! an error box.

use crate::box_tree::{BoxType, MathBox};
use crate::build_common::{decorate, make_glue, make_glyph, make_symbol};
use crate::context::Context;
use crate::font_metrics::FontFamily;
use crate::parser::atom::{AtomId, AtomKind, AtomTree, AtomType};
use crate::registry::Registry;
use crate::spacing_data::{AtomClass, spacing_between};
use crate::symbols::{MATH_SYMBOLS, SymbolFont};
use crate::types::Mode;

/// Lays out one atom under a context.
pub type BoxBuilder = fn(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox;

/// Which end of a box to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first child.
    Left,
    /// The last child.
    Right,
}

/// A layout pass over one atom tree.
#[derive(Clone, Copy)]
pub struct Layout<'t> {
    /// The atoms being laid out.
    pub tree: &'t AtomTree,
    /// Source of box builders.
    pub registry: &'t Registry,
}

impl<'t> Layout<'t> {
    /// Creates a layout pass.
    #[must_use]
    pub const fn new(tree: &'t AtomTree, registry: &'t Registry) -> Self {
        Self { tree, registry }
    }

    /// Lays out a single atom.
    ///
    /// The atom's own style overrides are merged into the context first. The
    /// resulting box gets an id per the id policy and the inherited
    /// background colour.
    #[must_use]
    pub fn build_group(&self, id: AtomId, ctx: &Context) -> MathBox {
        let Some(atom) = self.tree.get(id) else {
            log::error!("atom {id:?} is not in the tree");
            return error_box(ctx, "");
        };
        let ctx = if atom.style.is_empty() {
            ctx.clone()
        } else {
            ctx.with_style(&atom.style)
        };
        let atom_type = atom.atom_type();
        let mut result = match self.registry.box_builders.get(&atom_type) {
            Some(builder) => builder(self, id, &ctx),
            None => {
                log::error!("no box builder for {atom_type}");
                error_box(&ctx, "")
            }
        };
        result.tight = ctx.mathstyle.is_tight();
        decorate(result, &ctx)
    }

    /// Lays out a sequence of atoms as siblings on one baseline.
    ///
    /// Binary operators in positions where TeX treats them as ordinary are
    /// turned into ordinary boxes, inter-atom glue is inserted between every
    /// pair of adjacent classed boxes, and runs of plain glyphs in the same
    /// font are merged.
    #[must_use]
    pub fn build_expression(&self, ids: &[AtomId], ctx: &Context) -> Vec<MathBox> {
        let mut boxes: Vec<MathBox> = ids.iter().map(|id| self.build_group(*id, ctx)).collect();
        cancel_binary_operators(&mut boxes);
        let spaced = insert_spacing(boxes, ctx);
        coalesce_glyphs(spaced)
    }

    /// Lays out a sequence of atoms as a single row.
    #[must_use]
    pub fn build_row(&self, ids: &[AtomId], ctx: &Context) -> MathBox {
        MathBox::row(self.build_expression(ids, ctx))
    }
}

/// The spacing class of the outermost box at one end of `b`, with its tight
/// flag. Boxes without a class of their own defer to their children.
#[must_use]
pub fn outer_class(b: &MathBox, side: Side) -> Option<(AtomClass, bool)> {
    if let Some(class) = b.class {
        return Some((class, b.tight));
    }
    let mut children = b.children.iter().filter(|c| c.kind != BoxType::Spacing);
    let child = match side {
        Side::Left => children.next(),
        Side::Right => children.next_back(),
    }?;
    outer_class(child, side)
}

/// A binary operator with no left operand, or followed by a relation, a
/// closing delimiter or punctuation, is ordinary (TeXbook, rules 5 and 6).
fn cancel_binary_operators(boxes: &mut [MathBox]) {
    let classed: Vec<usize> = (0..boxes.len())
        .filter(|&i| boxes[i].kind != BoxType::Spacing && outer_class(&boxes[i], Side::Left).is_some())
        .collect();
    for (k, &i) in classed.iter().enumerate() {
        if boxes[i].class != Some(AtomClass::Bin) {
            continue;
        }
        let prev = k
            .checked_sub(1)
            .and_then(|p| outer_class(&boxes[classed[p]], Side::Right))
            .map(|(class, _)| class);
        let next = classed
            .get(k + 1)
            .and_then(|&j| outer_class(&boxes[j], Side::Left))
            .map(|(class, _)| class);
        let left_cancels = prev.is_none_or(|c| {
            matches!(
                c,
                AtomClass::Bin | AtomClass::Open | AtomClass::Rel | AtomClass::Op | AtomClass::Punct
            )
        });
        let right_cancels =
            next.is_none_or(|c| matches!(c, AtomClass::Rel | AtomClass::Close | AtomClass::Punct));
        if left_cancels || right_cancels {
            boxes[i].class = Some(AtomClass::Ord);
            boxes[i].kind = BoxType::Ord;
        }
    }
}

/// Inserts inter-atom glue between adjacent classed boxes. Explicit spacing
/// does not separate its neighbours.
fn insert_spacing(boxes: Vec<MathBox>, ctx: &Context) -> Vec<MathBox> {
    let mut result = Vec::with_capacity(boxes.len() * 2);
    let mut prev: Option<AtomClass> = None;
    for b in boxes {
        if b.kind != BoxType::Spacing
            && let Some((class, tight)) = outer_class(&b, Side::Left)
        {
            if let Some(left) = prev
                && let Some(spacing) = spacing_between(left, class, tight)
            {
                log::trace!("{spacing} glue between {left} and {class}");
                result.push(make_glue(ctx, spacing));
            }
            prev = outer_class(&b, Side::Right).map(|(class, _)| class);
        }
        result.push(b);
    }
    result
}

fn can_coalesce(a: &MathBox, b: &MathBox) -> bool {
    let plain = |x: &MathBox| {
        x.kind == BoxType::Ord
            && x.children.is_empty()
            && x.id.is_none()
            && x.background_color.is_none()
            && x.shift == 0.0
            && x.classes.is_empty()
    };
    match (&a.glyph, &b.glyph) {
        (Some(ga), Some(gb)) => {
            plain(a)
                && plain(b)
                && ga.family == gb.family
                && ga.scale == gb.scale
                && a.color == b.color
                && a.tight == b.tight
        }
        _ => false,
    }
}

/// Merges adjacent plain glyph boxes of the same font, size and colour.
/// The merged box measures exactly as the two boxes side by side.
fn coalesce_glyphs(boxes: Vec<MathBox>) -> Vec<MathBox> {
    let mut result: Vec<MathBox> = Vec::with_capacity(boxes.len());
    for b in boxes {
        if let Some(last) = result.last_mut()
            && can_coalesce(last, &b)
            && let (Some(run), Some(next)) = (last.glyph.as_mut(), b.glyph.as_ref())
        {
            run.text.push_str(&next.text);
            last.width += b.width;
            last.height = last.height.max(b.height);
            last.depth = last.depth.max(b.depth);
            last.italic = b.italic;
            last.skew = 0.0;
            continue;
        }
        result.push(b);
    }
    result
}

/// The box drawn for source that could not be parsed or laid out: the source
/// in typewriter type, or the placeholder glyph when there is no source.
#[must_use]
pub fn error_box(ctx: &Context, latex: &str) -> MathBox {
    let text = if latex.is_empty() {
        ctx.global.placeholder_symbol.as_str()
    } else {
        latex
    };
    let mut b = make_glyph(ctx, text, FontFamily::Typewriter)
        .with_class(AtomClass::Ord)
        .with_kind(BoxType::Error)
        .with_hint("error");
    b.italic = 0.0;
    b
}

fn build_group_atom(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Group { body, braced } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    let row = layout.build_row(body, ctx);
    if *braced { row.with_class(AtomClass::Ord) } else { row }
}

fn build_symbol(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let atom = &layout.tree[id];
    let AtomKind::Symbol {
        class,
        value,
        command,
    } = &atom.kind
    else {
        return error_box(ctx, "");
    };
    let font = command
        .as_deref()
        .and_then(|c| MATH_SYMBOLS.get(c))
        .map_or(SymbolFont::Main, |info| info.font);
    let class = if atom.mode == Mode::Math {
        *class
    } else {
        AtomClass::Ord
    };
    make_symbol(ctx, atom.mode, *value, font, class)
}

fn build_error(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    match &layout.tree[id].kind {
        AtomKind::Error { latex, .. } => error_box(ctx, latex),
        _ => error_box(ctx, ""),
    }
}

fn build_latex(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Latex { value } = &layout.tree[id].kind else {
        return error_box(ctx, "");
    };
    make_glyph(ctx, value, FontFamily::Typewriter).with_class(AtomClass::Ord)
}

/// A kept macro is laid out from its expansion. When it captures the
/// selection its atoms get no ids of their own.
fn build_macro(layout: &Layout, id: AtomId, ctx: &Context) -> MathBox {
    let AtomKind::Macro {
        body,
        capture_selection,
        ..
    } = &layout.tree[id].kind
    else {
        return error_box(ctx, "");
    };
    let inner = if *capture_selection {
        ctx.suppressing_ids()
    } else {
        ctx.clone()
    };
    layout.build_row(body, &inner)
}

/// Registers the builders of the atoms the parser makes on its own.
pub fn define_core(registry: &mut Registry) {
    registry.define_box_builder(AtomType::Group, build_group_atom);
    registry.define_box_builder(AtomType::Symbol, build_symbol);
    registry.define_box_builder(AtomType::Error, build_error);
    registry.define_box_builder(AtomType::Latex, build_latex);
    registry.define_box_builder(AtomType::Macro, build_macro);
}
