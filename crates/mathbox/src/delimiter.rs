//! Delimiter sizing.
//!
//! A delimiter grows through a fixed sequence of sizes: the roman glyph at
//! scriptscript, script and text size, then the glyphs of the four enlarged
//! fonts, and finally a stretched glyph of any height. Which steps a
//! delimiter may take depends on the fonts it exists in.

use phf::{Set, phf_set};

use crate::box_tree::MathBox;
use crate::build_common::{glyph_metrics, make_glyph, make_null_delimiter};
use crate::context::Context;
use crate::font_metrics::FontFamily;
use crate::spacing_data::AtomClass;
use crate::style::{Mathstyle, SCRIPT, SCRIPTSCRIPT, TEXT};
use crate::symbols::DELIMITERS;

/// Height plus depth that `\big`, `\Big`, `\bigg` and `\Bigg` cover, in ems.
const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// One step of a delimiter size sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterType {
    /// The roman glyph in the given style.
    Small(&'static Mathstyle),
    /// The glyph of enlarged font `1..=4`.
    Large(u8),
    /// The glyph stretched to the required height.
    Stack,
}

impl DelimiterType {
    const fn family(self) -> FontFamily {
        match self {
            Self::Small(_) => FontFamily::MainRegular,
            Self::Large(1) => FontFamily::Size1,
            Self::Large(2) => FontFamily::Size2,
            Self::Large(3) => FontFamily::Size3,
            Self::Large(_) | Self::Stack => FontFamily::Size4,
        }
    }
}

static STACK_LARGE_DELIMITERS: Set<char> = phf_set! {
    '(', ')', '[', ']', '{', '}', '\u{230a}', '\u{230b}', '\u{2308}', '\u{2309}', '\u{221a}',
};

static STACK_NEVER_DELIMITERS: Set<char> = phf_set! {
    '\u{27e8}', '\u{27e9}', '/', '\\',
};

const STACK_NEVER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
];

const STACK_ALWAYS_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Stack,
];

const STACK_LARGE_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
    DelimiterType::Stack,
];

/// The glyph of a delimiter name, `None` for the null delimiter `.`.
#[must_use]
pub fn delimiter_glyph(delim: &str) -> Option<char> {
    DELIMITERS.get(delim).copied()
}

fn sequence_for(glyph: char) -> &'static [DelimiterType] {
    if STACK_NEVER_DELIMITERS.contains(&glyph) {
        STACK_NEVER_SEQUENCE
    } else if STACK_LARGE_DELIMITERS.contains(&glyph) {
        STACK_LARGE_SEQUENCE
    } else {
        STACK_ALWAYS_SEQUENCE
    }
}

/// Scale of a sequence step relative to the base font.
fn step_scale(ctx: &Context, step: DelimiterType) -> f64 {
    match step {
        DelimiterType::Small(style) => ctx.size_scale() * style.size_multiplier(),
        DelimiterType::Large(_) | DelimiterType::Stack => ctx.size_scale(),
    }
}

/// The first step whose glyph covers `height`, starting earlier in the
/// sequence in smaller styles.
fn traverse_sequence(ctx: &Context, glyph: char, height: f64) -> DelimiterType {
    let sequence = sequence_for(glyph);
    let start = 3_usize.saturating_sub(ctx.mathstyle.size).min(2);
    for &step in sequence.iter().skip(start) {
        if step == DelimiterType::Stack {
            break;
        }
        let metrics = glyph_metrics(ctx, step.family(), glyph);
        if (metrics.height + metrics.depth) * step_scale(ctx, step) > height {
            return step;
        }
    }
    sequence.last().copied().unwrap_or(DelimiterType::Stack)
}

/// Moves `b` vertically so that it is centred on the math axis.
fn center_on_axis(ctx: &Context, b: MathBox) -> MathBox {
    let axis = ctx.font_metrics().axis_height;
    let shift = (b.height - b.depth) / 2.0 - axis;
    let class = b.class;
    let mut wrapper = MathBox::row(vec![b.shifted(shift)]);
    wrapper.class = class;
    if let Some(class) = class {
        wrapper.kind = class.into();
    }
    wrapper
}

/// Builds the glyph box of one sequence step.
fn make_step(ctx: &Context, glyph: char, step: DelimiterType, height_total: f64) -> MathBox {
    let mut buf = [0u8; 4];
    let text = glyph.encode_utf8(&mut buf);
    match step {
        DelimiterType::Small(style) => {
            make_glyph(&ctx.having_style(style), text, FontFamily::MainRegular)
        }
        DelimiterType::Large(_) => make_glyph(&ctx.having_style(TEXT), text, step.family()),
        DelimiterType::Stack => {
            let mut b = make_glyph(&ctx.having_style(TEXT), text, step.family());
            // keep the glyph's proportions above and below the axis
            let axis = ctx.font_metrics().axis_height;
            b.height = height_total / 2.0 + axis;
            b.depth = (height_total / 2.0 - axis).max(0.0);
            b.with_hint("stretched")
        }
    }
}

/// A delimiter whose height plus depth is at least `height_total`, centred
/// on the axis when `center` is set.
#[must_use]
pub fn custom_sized_delim(
    ctx: &Context,
    delim: &str,
    height_total: f64,
    center: bool,
    class: AtomClass,
) -> MathBox {
    let Some(glyph) = delimiter_glyph(delim) else {
        return make_null_delimiter(ctx, class);
    };
    let step = traverse_sequence(ctx, glyph, height_total);
    let b = make_step(ctx, glyph, step, height_total).with_class(class);
    if center && step != DelimiterType::Stack {
        center_on_axis(ctx, b)
    } else {
        b
    }
}

/// A delimiter of fixed size `1..=4`, as made by `\big` and friends.
#[must_use]
pub fn sized_delim(ctx: &Context, delim: &str, size: u8, class: AtomClass) -> MathBox {
    let Some(glyph) = delimiter_glyph(delim) else {
        return make_null_delimiter(ctx, class);
    };
    let size = size.clamp(1, 4);
    let step = if sequence_for(glyph) == STACK_ALWAYS_SEQUENCE {
        DelimiterType::Stack
    } else {
        DelimiterType::Large(size)
    };
    let height = SIZE_TO_MAX_HEIGHT[usize::from(size)] * ctx.size_scale();
    make_step(ctx, glyph, step, height).with_class(class)
}

/// A delimiter for `\left`, `\middle` or `\right` around content of the given
/// height and depth.
///
/// The delimiter covers at least `delimiterfactor`/1000 of the content's
/// extent from the axis, and falls short of it by at most
/// `delimitershortfall`.
#[must_use]
pub fn left_right_delim(
    ctx: &Context,
    delim: &str,
    height: f64,
    depth: f64,
    class: AtomClass,
) -> MathBox {
    let axis = ctx.font_metrics().axis_height;
    let factor = ctx.register_number("delimiterfactor").unwrap_or(901.0);
    let shortfall = ctx.register_em("delimitershortfall");

    let max_dist_from_axis = (height - axis).max(depth + axis);
    let total_height =
        (max_dist_from_axis / 500.0 * factor).max(2.0f64.mul_add(max_dist_from_axis, -shortfall));
    custom_sized_delim(ctx, delim, total_height, true, class)
}

/// The surd for a radical whose body needs `height_total` of vertical room.
///
/// Returns the surd box, with its top at the top of the vinculum, and the
/// thickness of the vinculum.
#[must_use]
pub fn make_surd(ctx: &Context, height_total: f64) -> (MathBox, f64) {
    let glyph = '\u{221a}';
    let step = traverse_sequence(ctx, glyph, height_total);
    let surd = make_step(ctx, glyph, step, height_total);
    let rule = match step {
        DelimiterType::Small(_) => ctx.font_metrics().sqrt_rule_thickness,
        _ => ctx.having_style(TEXT).font_metrics().sqrt_rule_thickness,
    };
    (surd, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::GlobalContext;
    use crate::style::DISPLAY;

    #[test]
    fn small_content_keeps_the_text_glyph() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        assert_eq!(traverse_sequence(&ctx, '(', 0.5), DelimiterType::Small(TEXT));
        assert_eq!(traverse_sequence(&ctx, '(', 1.1), DelimiterType::Large(1));
        assert_eq!(traverse_sequence(&ctx, '(', 10.0), DelimiterType::Stack);
        assert_eq!(traverse_sequence(&ctx, '\u{27e8}', 10.0), DelimiterType::Large(4));
        assert_eq!(traverse_sequence(&ctx, '|', 10.0), DelimiterType::Stack);
    }

    #[test]
    fn delimiters_cover_their_content() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, DISPLAY);
        for target in [0.8, 1.5, 2.2, 3.5, 6.0] {
            let b = left_right_delim(&ctx, "(", target / 2.0 + 0.25, target / 2.0 - 0.25, AtomClass::Open);
            assert!(b.total_height() >= target * 0.901 - 0.5, "{target}: {}", b.total_height());
        }
    }

    #[test]
    fn null_delimiter_is_space() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        let b = left_right_delim(&ctx, ".", 2.0, 1.0, AtomClass::Close);
        assert!(b.glyph.is_none());
        assert!((b.width - 0.12).abs() < 1e-9);
    }

    #[test]
    fn big_sizes_grow() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        let heights: Vec<_> = (1..=4)
            .map(|size| sized_delim(&ctx, "[", size, AtomClass::Open).total_height())
            .collect();
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
        let bar = sized_delim(&ctx, "|", 3, AtomClass::Ord);
        assert!((bar.total_height() - 2.4).abs() < 1e-9);
    }
}
