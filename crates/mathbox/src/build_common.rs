//! Common functions for building boxes.
//!
//! These helpers create the leaf boxes (glyphs, rules, glue) and the vertical
//! lists that every box builder assembles its output from.

use crate::box_tree::{BoxType, GlyphRun, MathBox};
use crate::context::{Context, LetterShapeStyle};
use crate::font_metrics::FontFamily;
use crate::font_metrics_data::CharacterMetrics;
use crate::parser::atom::{Variant, VariantStyle};
use crate::spacing_data::{AtomClass, Spacing};
use crate::symbols::{SymbolFont, is_greek};
use crate::types::Mode;
use crate::units::RegisterValue;

/// Metrics assumed for glyphs that no font table knows.
const FALLBACK_METRICS: CharacterMetrics = CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.6);

/// The font family a character is drawn from under `ctx`.
///
/// Explicit variants from the inherited style win. Otherwise math-mode
/// letters are italic or upright per the letter shape style, and other
/// characters come from the roman font, or the AMS font for AMS symbols.
#[must_use]
pub fn font_family(ctx: &Context, mode: Mode, ch: char, font: SymbolFont) -> FontFamily {
    let letter = ch.is_ascii_alphabetic() || is_greek(ch);
    match ctx.style.variant.unwrap_or_default() {
        Variant::DoubleStruck if ch.is_ascii_uppercase() => return FontFamily::Ams,
        Variant::Calligraphic if ch.is_ascii_uppercase() => return FontFamily::Caligraphic,
        Variant::Script if ch.is_ascii_uppercase() => return FontFamily::Script,
        Variant::Fraktur if ch.is_ascii_alphanumeric() => return FontFamily::Fraktur,
        Variant::Monospace if ch.is_ascii() => return FontFamily::Typewriter,
        Variant::SansSerif if ch.is_ascii() => return FontFamily::SansSerif,
        _ => {}
    }

    if mode == Mode::Text {
        return match ctx.style.variant_style {
            Some(VariantStyle::Bold) => FontFamily::MainBold,
            Some(VariantStyle::Italic) => FontFamily::MainItalic,
            Some(VariantStyle::BoldItalic) => FontFamily::MainBoldItalic,
            _ => FontFamily::MainRegular,
        };
    }

    match ctx.style.variant_style {
        Some(VariantStyle::Up) => FontFamily::MainRegular,
        Some(VariantStyle::Bold) => FontFamily::MainBold,
        Some(VariantStyle::Italic) => FontFamily::MainItalic,
        Some(VariantStyle::BoldItalic) if letter => FontFamily::MathBoldItalic,
        Some(VariantStyle::BoldItalic) => FontFamily::MainBold,
        None if letter && is_italic_letter(ctx.global.letter_shape_style, ch) => {
            FontFamily::MathItalic
        }
        None if font == SymbolFont::Ams => FontFamily::Ams,
        None => FontFamily::MainRegular,
    }
}

fn is_italic_letter(shape: LetterShapeStyle, ch: char) -> bool {
    let greek = is_greek(ch);
    let upper = if greek {
        ('\u{391}'..='\u{3a9}').contains(&ch)
    } else {
        ch.is_ascii_uppercase()
    };
    match shape {
        LetterShapeStyle::Tex => !(greek && upper),
        LetterShapeStyle::Iso => true,
        LetterShapeStyle::French => !greek && !upper,
        LetterShapeStyle::Upright => false,
    }
}

/// Metrics of `ch` in `family`, or a plausible stand-in.
#[must_use]
pub fn glyph_metrics(ctx: &Context, family: FontFamily, ch: char) -> CharacterMetrics {
    ctx.global.metrics.lookup(family, ch).unwrap_or_else(|| {
        log::debug!("no metrics for {ch:?} in {family}");
        FALLBACK_METRICS
    })
}

/// A box drawing `text` in `family` at the current scale.
///
/// The box is as wide as its glyphs together and as tall as the tallest.
/// Under a phantom context the box keeps its dimensions but draws nothing.
#[must_use]
pub fn make_glyph(ctx: &Context, text: &str, family: FontFamily) -> MathBox {
    let scale = ctx.scaling_factor();
    let mut result = MathBox {
        kind: BoxType::Ord,
        tight: ctx.mathstyle.is_tight(),
        ..MathBox::default()
    };
    for (i, ch) in text.chars().enumerate() {
        let metrics = glyph_metrics(ctx, family, ch);
        result.width += metrics.width * scale;
        result.height = result.height.max(metrics.height * scale);
        result.depth = result.depth.max(metrics.depth * scale);
        result.italic = metrics.italic * scale;
        if i == 0 {
            result.skew = metrics.skew * scale;
        }
    }
    if text.chars().count() > 1 {
        result.skew = 0.0;
    }
    if !ctx.phantom {
        result.glyph = Some(GlyphRun {
            text: text.to_owned(),
            family,
            scale,
        });
        result.color = ctx.color();
    }
    result
}

/// A glyph box for a symbol atom, in the family its mode, font and the
/// inherited style call for.
#[must_use]
pub fn make_symbol(ctx: &Context, mode: Mode, ch: char, font: SymbolFont, class: AtomClass) -> MathBox {
    let family = font_family(ctx, mode, ch, font);
    let mut buf = [0u8; 4];
    make_glyph(ctx, ch.encode_utf8(&mut buf), family).with_class(class)
}

/// Child of a vertical list: a box or a vertical kern.
#[derive(Debug, Clone)]
pub enum VListChild {
    /// A box; its `left` offset is kept.
    Elem(MathBox),
    /// Vertical space.
    Kern(f64),
}

impl From<MathBox> for VListChild {
    fn from(elem: MathBox) -> Self {
        Self::Elem(elem)
    }
}

/// Parameters for [`make_vlist`]. Children are listed bottom to top.
#[derive(Debug, Clone)]
pub enum VListParam {
    /// Each child with its own baseline shift, positive down.
    IndividualShift {
        /// The children and their shifts.
        children: Vec<(MathBox, f64)>,
    },
    /// The top of the list is `position` above the baseline.
    Top {
        /// Height of the top edge.
        position: f64,
        /// The children.
        children: Vec<VListChild>,
    },
    /// The bottom of the list is `position` below the baseline.
    Bottom {
        /// Depth of the bottom edge.
        position: f64,
        /// The children.
        children: Vec<VListChild>,
    },
    /// The baseline of the first child is `position` below the baseline.
    Shift {
        /// Shift of the first child.
        position: f64,
        /// The children.
        children: Vec<VListChild>,
    },
    /// The baseline of the first child is the baseline of the list.
    FirstBaseline {
        /// The children.
        children: Vec<VListChild>,
    },
}

/// Makes a vertical list by stacking boxes and kerns on top of each other.
#[must_use]
pub fn make_vlist(params: VListParam) -> MathBox {
    let (children, depth) = match params {
        VListParam::IndividualShift { children } => {
            let placed = children
                .into_iter()
                .map(|(elem, shift)| MathBox { shift, ..elem })
                .collect();
            return MathBox::stack(placed);
        }
        VListParam::Top { position, children } => {
            let total: f64 = children.iter().map(vlist_size).sum();
            (children, position - total)
        }
        VListParam::Bottom { position, children } => (children, -position),
        VListParam::Shift { position, children } => {
            let first_depth = first_elem_depth(&children);
            (children, -first_depth - position)
        }
        VListParam::FirstBaseline { children } => {
            let first_depth = first_elem_depth(&children);
            (children, -first_depth)
        }
    };

    // `position` runs upward from the bottom edge of the list
    let mut position = depth;
    let mut min_pos = depth;
    let mut max_pos = depth;
    let mut placed = Vec::with_capacity(children.len());
    for child in children {
        match child {
            VListChild::Kern(size) => position += size,
            VListChild::Elem(elem) => {
                let shift = -(position + elem.depth);
                position += elem.height + elem.depth;
                placed.push(MathBox { shift, ..elem });
            }
        }
        min_pos = min_pos.min(position);
        max_pos = max_pos.max(position);
    }

    let mut list = MathBox::stack(placed);
    list.height = list.height.max(max_pos);
    list.depth = list.depth.max(-min_pos);
    list
}

fn vlist_size(child: &VListChild) -> f64 {
    match child {
        VListChild::Kern(size) => *size,
        VListChild::Elem(elem) => elem.height + elem.depth,
    }
}

fn first_elem_depth(children: &[VListChild]) -> f64 {
    children
        .iter()
        .find_map(|child| match child {
            VListChild::Elem(elem) => Some(elem.depth),
            VListChild::Kern(_) => None,
        })
        .unwrap_or(0.0)
}

/// Horizontal glue for an inter-atom spacing amount.
#[must_use]
pub fn make_glue(ctx: &Context, spacing: Spacing) -> MathBox {
    let width = ctx
        .global
        .registers
        .get(spacing.register())
        .and_then(RegisterValue::as_dimension)
        .map_or(0.0, |d| ctx.to_em(d));
    let mut glue = MathBox::kern(width).with_hint(spacing.as_ref());
    glue.tight = ctx.mathstyle.is_tight();
    glue
}

/// The empty space standing in for a `.` delimiter.
#[must_use]
pub fn make_null_delimiter(ctx: &Context, class: AtomClass) -> MathBox {
    let mut null = MathBox::kern(ctx.register_em("nulldelimiterspace"));
    null.kind = class.into();
    null.class = Some(class);
    null
}

/// A horizontal rule of the current default rule thickness, or `thickness`.
/// Under a phantom context the rule only takes up its space.
#[must_use]
pub fn make_line(ctx: &Context, width: f64, thickness: Option<f64>) -> MathBox {
    let thickness = thickness.unwrap_or_else(|| ctx.font_metrics().default_rule_thickness);
    if ctx.phantom {
        return MathBox::strut(width, thickness, 0.0);
    }
    let mut line = MathBox::rule(width, thickness, 0.0);
    line.color = ctx.color();
    line
}

/// Gives `b` the next id of the pass and the colours of the context.
#[must_use]
pub fn decorate(mut b: MathBox, ctx: &Context) -> MathBox {
    if b.id.is_none() {
        b.id = ctx.next_id();
    }
    if b.background_color.is_none() {
        b.background_color = ctx
            .style
            .background_color
            .as_deref()
            .map(|c| ctx.global.resolve_background_color(c));
    }
    b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::parser::atom::Style;
    use crate::style::{SCRIPT, TEXT};

    #[test]
    fn letters_follow_the_shape_style() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        assert_eq!(font_family(&ctx, Mode::Math, 'x', SymbolFont::Main), FontFamily::MathItalic);
        assert_eq!(font_family(&ctx, Mode::Math, '\u{393}', SymbolFont::Main), FontFamily::MainRegular);
        assert_eq!(font_family(&ctx, Mode::Math, '1', SymbolFont::Main), FontFamily::MainRegular);
        assert_eq!(font_family(&ctx, Mode::Text, 'x', SymbolFont::Main), FontFamily::MainRegular);

        let upright = GlobalContext::builder()
            .letter_shape_style(LetterShapeStyle::Upright)
            .build();
        let ctx = Context::new(&upright, TEXT);
        assert_eq!(font_family(&ctx, Mode::Math, 'x', SymbolFont::Main), FontFamily::MainRegular);
    }

    #[test]
    fn variants_pick_families() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        let bb = ctx.with_style(&Style {
            variant: Some(Variant::DoubleStruck),
            ..Style::default()
        });
        assert_eq!(font_family(&bb, Mode::Math, 'R', SymbolFont::Main), FontFamily::Ams);
        let bold = ctx.with_style(&Style {
            variant_style: Some(VariantStyle::Bold),
            ..Style::default()
        });
        assert_eq!(font_family(&bold, Mode::Math, 'x', SymbolFont::Main), FontFamily::MainBold);
    }

    #[test]
    fn glyphs_scale_with_style() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        let text = make_glyph(&ctx, "1", FontFamily::MainRegular);
        let script = make_glyph(&ctx.having_style(SCRIPT), "1", FontFamily::MainRegular);
        assert_eq!(text.width, 0.5);
        assert!((script.width - 0.35).abs() < 1e-9);
        assert!(script.tight);
        assert_eq!(text.text(), "1");

        let hidden = make_glyph(&ctx.with_phantom(), "1", FontFamily::MainRegular);
        assert_eq!(hidden.width, text.width);
        assert_eq!(hidden.glyph, None);
    }

    #[test]
    fn vlists_place_children_bottom_up() {
        let bottom = MathBox::strut(1.0, 0.5, 0.2);
        let top = MathBox::strut(1.0, 0.4, 0.1);
        let list = make_vlist(VListParam::FirstBaseline {
            children: vec![bottom.into(), VListChild::Kern(0.3), top.into()],
        });
        assert_eq!(list.children[0].shift, 0.0);
        // 0.5 (bottom height) + 0.3 kern + 0.1 (top depth)
        assert!((list.children[1].shift + 0.9).abs() < 1e-9);
        assert!((list.height - 1.3).abs() < 1e-9);
        assert!((list.depth - 0.2).abs() < 1e-9);

        let shifted = make_vlist(VListParam::Shift {
            position: 0.5,
            children: vec![MathBox::strut(1.0, 0.5, 0.2).into()],
        });
        assert!((shifted.children[0].shift - 0.5).abs() < 1e-9);
    }

    #[test]
    fn glue_resolves_registers() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        let thick = make_glue(&ctx, Spacing::Thick);
        assert!((thick.width - 5.0 / 18.0).abs() < 1e-9);
        assert_eq!(thick.kind, BoxType::Spacing);
        assert!(make_null_delimiter(&ctx, AtomClass::Open).width > 0.0);
    }
}
