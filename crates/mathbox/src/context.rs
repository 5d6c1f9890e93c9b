//! The rendering context.
//!
//! A layout pass works with two structures. [`GlobalContext`] holds settings
//! that are shared read-only for the whole pass: registers, metrics, colour
//! resolvers and the atom id policy. [`Context`] is the small local cascade
//! (math style, font size, inherited style) that is copied and adjusted on
//! every descent into the atom tree. Adjusting a context never touches the
//! context it was derived from.

use alloc::rc::Rc;
use alloc::sync::Arc;
use core::cell::Cell;
use core::fmt;
use core::ptr;

use bon::bon;
use phf::phf_map;
use strum::{AsRefStr, Display, EnumString};

use crate::font_metrics::{BuiltinMetrics, FontMetrics, MetricsProvider};
use crate::parser::atom::Style;
use crate::style::{Mathstyle, TEXT};
use crate::units::{Registers, default_registers};

/// Resolves a colour name to a colour value.
pub type ColorResolver = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Scale of each font size relative to `\normalsize`, indexed by size - 1.
pub const FONT_SCALE: [f64; 10] = [0.5, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488];

/// The `\normalsize` font size.
pub const DEFAULT_FONT_SIZE: u8 = 5;

/// How letters are shaped in math mode when no variant is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LetterShapeStyle {
    /// Lowercase Latin, lowercase Greek and uppercase Latin in italic,
    /// uppercase Greek upright.
    #[default]
    Tex,
    /// Every letter in italic.
    Iso,
    /// Only lowercase Latin in italic.
    French,
    /// Every letter upright.
    Upright,
}

/// The order an editor visits the parts of a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FractionNavigationOrder {
    /// Numerator first.
    #[default]
    NumeratorDenominator,
    /// Denominator first.
    DenominatorNumerator,
}

/// How ids are given to the boxes of atoms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomIdPolicy {
    /// Boxes carry no id.
    #[default]
    None,
    /// Ids count up from 1 in layout order.
    Sequential,
    /// Ids are pseudo-random, reproducible for a given seed.
    Seeded(u64),
    /// Every box gets the given id.
    Override(String),
}

/// Settings shared by a whole layout pass.
#[derive(Clone)]
pub struct GlobalContext {
    /// TeX registers, keyed without the backslash.
    pub registers: Registers,
    /// Whether the parser turned matched parentheses into fences.
    pub smart_fence: bool,
    /// Shape of letters without an explicit variant.
    pub letter_shape_style: LetterShapeStyle,
    /// Navigation order for fractions, for editors.
    pub fraction_navigation_order: FractionNavigationOrder,
    /// Glyph drawn for empty placeholders.
    pub placeholder_symbol: String,
    /// Resolves `\color` names.
    pub color_map: ColorResolver,
    /// Resolves `\colorbox` names.
    pub background_color_map: ColorResolver,
    /// Source of glyph and font metrics.
    pub metrics: Arc<dyn MetricsProvider>,
    /// How boxes are given ids.
    pub atom_id_policy: AtomIdPolicy,
    /// Whether the top level is laid out in display style.
    pub display_mode: bool,
}

impl fmt::Debug for GlobalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalContext")
            .field("registers", &self.registers)
            .field("smart_fence", &self.smart_fence)
            .field("letter_shape_style", &self.letter_shape_style)
            .field("fraction_navigation_order", &self.fraction_navigation_order)
            .field("placeholder_symbol", &self.placeholder_symbol)
            .field("metrics", &self.metrics)
            .field("atom_id_policy", &self.atom_id_policy)
            .field("display_mode", &self.display_mode)
            .finish_non_exhaustive()
    }
}

#[bon]
impl GlobalContext {
    /// Creates a new [`GlobalContext`], applying defaults for missing values.
    ///
    /// # Default Values
    /// - `registers`: [`default_registers`]
    /// - `letter_shape_style`: [`LetterShapeStyle::Tex`]
    /// - `placeholder_symbol`: `▢`
    /// - `color_map`: the standard colour names, other names unchanged
    /// - `background_color_map`: same as `color_map`
    /// - `metrics`: [`BuiltinMetrics`]
    /// - `atom_id_policy`: [`AtomIdPolicy::None`]
    #[must_use]
    #[builder]
    pub fn new(
        /// Register values, replacing the defaults entirely.
        registers: Option<Registers>,
        /// Smart fence flag.
        smart_fence: Option<bool>,
        /// Letter shape style.
        letter_shape_style: Option<LetterShapeStyle>,
        /// Fraction navigation order.
        fraction_navigation_order: Option<FractionNavigationOrder>,
        /// Placeholder glyph.
        placeholder_symbol: Option<String>,
        /// Foreground colour resolver.
        color_map: Option<ColorResolver>,
        /// Background colour resolver.
        background_color_map: Option<ColorResolver>,
        /// Metrics provider.
        metrics: Option<Arc<dyn MetricsProvider>>,
        /// Id policy.
        atom_id_policy: Option<AtomIdPolicy>,
        /// Display mode.
        display_mode: Option<bool>,
    ) -> Self {
        let default_colors: ColorResolver = Arc::new(default_color);
        Self {
            registers: registers.unwrap_or_else(default_registers),
            smart_fence: smart_fence.unwrap_or(false),
            letter_shape_style: letter_shape_style.unwrap_or_default(),
            fraction_navigation_order: fraction_navigation_order.unwrap_or_default(),
            placeholder_symbol: placeholder_symbol.unwrap_or_else(|| "\u{25a2}".to_owned()),
            color_map: color_map.unwrap_or_else(|| Arc::clone(&default_colors)),
            background_color_map: background_color_map.unwrap_or(default_colors),
            metrics: metrics.unwrap_or_else(|| Arc::new(BuiltinMetrics)),
            atom_id_policy: atom_id_policy.unwrap_or_default(),
            display_mode: display_mode.unwrap_or(false),
        }
    }
}

impl Default for GlobalContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GlobalContext {
    /// Resolves a foreground colour. Unknown names pass through unchanged.
    #[must_use]
    pub fn resolve_color(&self, name: &str) -> String {
        (self.color_map)(name).unwrap_or_else(|| name.to_owned())
    }

    /// Resolves a background colour. Unknown names pass through unchanged.
    #[must_use]
    pub fn resolve_background_color(&self, name: &str) -> String {
        (self.background_color_map)(name).unwrap_or_else(|| name.to_owned())
    }
}

static COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "black" => "#000000",
    "white" => "#ffffff",
    "red" => "#ff0000",
    "green" => "#00ff00",
    "blue" => "#0000ff",
    "cyan" => "#00ffff",
    "magenta" => "#ff00ff",
    "yellow" => "#ffff00",
    "gray" => "#808080",
    "lightgray" => "#bfbfbf",
    "darkgray" => "#404040",
    "orange" => "#ff8000",
    "purple" => "#bf0040",
    "brown" => "#bf8040",
    "olive" => "#808000",
    "teal" => "#008080",
    "violet" => "#800080",
    "lime" => "#bfff00",
    "pink" => "#ffbfbf",
};

fn default_color(name: &str) -> Option<String> {
    COLORS.get(name).map(|c| (*c).to_owned())
}

/// Hands out box ids for one layout pass.
#[derive(Debug)]
struct IdAllocator {
    policy: AtomIdPolicy,
    counter: Cell<u64>,
}

impl IdAllocator {
    fn next(&self) -> Option<String> {
        let n = self.counter.get() + 1;
        match &self.policy {
            AtomIdPolicy::None => None,
            AtomIdPolicy::Sequential => {
                self.counter.set(n);
                Some(n.to_string())
            }
            AtomIdPolicy::Seeded(seed) => {
                self.counter.set(n);
                let hash = rapidhash::v1::rapidhash_v1_seeded(&n.to_le_bytes(), &rapidhash::v1::RapidSecrets::seed_cpp(*seed));
                Some(format!("{:x}", hash & 0xffff_ffff))
            }
            AtomIdPolicy::Override(id) => Some(id.clone()),
        }
    }
}

/// The local layout cascade.
///
/// Cloning is cheap; every `having_*`/`with_*` method returns a new context.
#[derive(Debug, Clone)]
pub struct Context<'g> {
    /// Settings shared by the pass.
    pub global: &'g GlobalContext,
    /// Current math style.
    pub mathstyle: &'static Mathstyle,
    /// Current font size, `1..=10`.
    pub size: u8,
    /// Style inherited from enclosing atoms.
    pub style: Style,
    /// Whether boxes are laid out but not drawn.
    pub phantom: bool,
    ids: Rc<IdAllocator>,
    suppress_ids: bool,
}

impl<'g> Context<'g> {
    /// Creates the context at the root of a layout pass.
    #[must_use]
    pub fn new(global: &'g GlobalContext, mathstyle: &'static Mathstyle) -> Self {
        Self {
            global,
            mathstyle,
            size: DEFAULT_FONT_SIZE,
            style: Style::default(),
            phantom: false,
            ids: Rc::new(IdAllocator {
                policy: global.atom_id_policy.clone(),
                counter: Cell::new(0),
            }),
            suppress_ids: false,
        }
    }

    /// A context with the given math style. Returns a plain copy if the style
    /// is unchanged.
    #[must_use]
    pub fn having_style(&self, mathstyle: &'static Mathstyle) -> Self {
        if ptr::eq(self.mathstyle, mathstyle) {
            return self.clone();
        }
        Self {
            mathstyle,
            ..self.clone()
        }
    }

    /// A context with a cramped version of the current style.
    #[must_use]
    pub fn having_cramped_style(&self) -> Self {
        self.having_style(self.mathstyle.cramp())
    }

    /// A context with the given font size, in at least `\textstyle`.
    #[must_use]
    pub fn having_size(&self, size: u8) -> Self {
        let size = size.clamp(1, 10);
        if self.size == size {
            return self.clone();
        }
        Self {
            size,
            mathstyle: if self.mathstyle.is_tight() {
                TEXT
            } else {
                self.mathstyle
            },
            ..self.clone()
        }
    }

    /// A context with `style` merged over the inherited style.
    #[must_use]
    pub fn with_style(&self, style: &Style) -> Self {
        let mut ctx = self.clone();
        ctx.style = self.style.merged(style);
        if let Some(size) = style.font_size {
            ctx = ctx.having_size(size);
        }
        ctx
    }

    /// A context whose boxes are not drawn.
    #[must_use]
    pub fn with_phantom(&self) -> Self {
        Self {
            phantom: true,
            ..self.clone()
        }
    }

    /// A context whose atoms get no ids of their own.
    #[must_use]
    pub fn suppressing_ids(&self) -> Self {
        Self {
            suppress_ids: true,
            ..self.clone()
        }
    }

    /// The next box id, per the id policy.
    #[must_use]
    pub fn next_id(&self) -> Option<String> {
        if self.suppress_ids {
            None
        } else {
            self.ids.next()
        }
    }

    /// Returns `true` in display style.
    #[must_use]
    pub const fn is_display(&self) -> bool {
        self.mathstyle.is_display()
    }

    /// Scale of the current font size relative to `\normalsize`.
    #[must_use]
    pub fn size_scale(&self) -> f64 {
        FONT_SCALE[usize::from(self.size.clamp(1, 10)) - 1]
            / FONT_SCALE[usize::from(DEFAULT_FONT_SIZE) - 1]
    }

    /// Scale of glyphs under this context relative to the base font: the size
    /// scale times the math style multiplier.
    #[must_use]
    pub fn scaling_factor(&self) -> f64 {
        self.size_scale() * self.mathstyle.size_multiplier()
    }

    /// Font parameters for the current style, in base-font ems.
    #[must_use]
    pub fn font_metrics(&self) -> FontMetrics {
        self.global
            .metrics
            .font_metrics(self.mathstyle.metrics_index())
            .scaled(self.scaling_factor())
    }

    /// Font parameters of the text font at the current size, ignoring the
    /// math style.
    #[must_use]
    pub fn text_metrics(&self) -> FontMetrics {
        self.global.metrics.font_metrics(0).scaled(self.size_scale())
    }

    /// The resolved foreground colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<String> {
        self.style
            .color
            .as_deref()
            .map(|c| self.global.resolve_color(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DISPLAY, SCRIPT, SCRIPTSCRIPT};

    #[test]
    fn descending_does_not_touch_the_parent() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, DISPLAY);
        let num = ctx.having_style(ctx.mathstyle.frac_num());
        let den = ctx.having_style(ctx.mathstyle.frac_den());
        assert_eq!(ctx.mathstyle, DISPLAY);
        assert_eq!(num.mathstyle, TEXT);
        assert!(den.mathstyle.cramped);
        assert!(!num.mathstyle.cramped);
    }

    #[test]
    fn scaling_follows_style_and_size() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        assert_eq!(ctx.scaling_factor(), 1.0);
        assert!((ctx.having_style(SCRIPT).scaling_factor() - 0.7).abs() < 1e-9);
        assert!((ctx.having_style(SCRIPTSCRIPT).scaling_factor() - 0.5).abs() < 1e-9);
        let large = ctx.having_size(7);
        assert!((large.scaling_factor() - 1.44).abs() < 1e-9);
        assert!((large.font_metrics().quad - 1.44).abs() < 1e-9);
        assert_eq!(large.font_metrics().pt_per_em, 10.0);
    }

    #[test]
    fn ids_follow_the_policy() {
        let global = GlobalContext::builder()
            .atom_id_policy(AtomIdPolicy::Sequential)
            .build();
        let ctx = Context::new(&global, TEXT);
        assert_eq!(ctx.next_id().as_deref(), Some("1"));
        assert_eq!(ctx.having_style(SCRIPT).next_id().as_deref(), Some("2"));
        assert_eq!(ctx.suppressing_ids().next_id(), None);

        let seeded = GlobalContext::builder()
            .atom_id_policy(AtomIdPolicy::Seeded(7))
            .build();
        let first = Context::new(&seeded, TEXT).next_id();
        let again = Context::new(&seeded, TEXT).next_id();
        assert!(first.is_some());
        assert_eq!(first, again);

        assert_eq!(Context::new(&GlobalContext::default(), TEXT).next_id(), None);
    }

    #[test]
    fn colors_resolve_or_pass_through() {
        let global = GlobalContext::default();
        assert_eq!(global.resolve_color("red"), "#ff0000");
        assert_eq!(global.resolve_color("#123456"), "#123456");
        let custom = GlobalContext::builder()
            .background_color_map(Arc::new(|name: &str| {
                (name == "highlight").then(|| "#ffff80".to_owned())
            }))
            .build();
        assert_eq!(custom.resolve_background_color("highlight"), "#ffff80");
        assert_eq!(custom.resolve_color("red"), "#ff0000");
    }
}
