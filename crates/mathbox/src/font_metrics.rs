//! Font metrics: the TeX sigma and xi parameters, and per-glyph metrics.
//!
//! In TeX there are three sets of font parameters, one each for textstyle,
//! scriptstyle and scriptscriptstyle, taken from cmsy10, cmsy7 and cmsy5.
//! Every value is in ems of the font it describes, so the layout engine
//! multiplies by the current scale before using it.
//!
//! Glyph metrics are looked up through [`MetricsProvider`]. The crate ships
//! [`BuiltinMetrics`], covering the glyphs of the standard math fonts; a host
//! may plug in its own provider.

use core::fmt;

use strum::{AsRefStr, Display, EnumString};

pub use crate::font_metrics_data::CharacterMetrics;
use crate::font_metrics_data::family_table;

/// The TeX font parameters for one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Slant of the italic font, per unit height.
    pub slant: f64,
    /// Interword space.
    pub space: f64,
    /// Interword stretch.
    pub stretch: f64,
    /// Interword shrink.
    pub shrink: f64,
    /// Height of lowercase `x`.
    pub x_height: f64,
    /// Width of an em quad.
    pub quad: f64,
    /// Extra space after sentences.
    pub extra_space: f64,
    /// Numerator shift-up in display styles.
    pub num1: f64,
    /// Numerator shift-up in non-display styles, with a bar.
    pub num2: f64,
    /// Numerator shift-up in non-display styles, without a bar.
    pub num3: f64,
    /// Denominator shift-down in display styles.
    pub denom1: f64,
    /// Denominator shift-down in non-display styles.
    pub denom2: f64,
    /// Superscript shift-up in display style.
    pub sup1: f64,
    /// Superscript shift-up in non-display, uncramped styles.
    pub sup2: f64,
    /// Superscript shift-up in cramped styles.
    pub sup3: f64,
    /// Subscript shift-down without a superscript.
    pub sub1: f64,
    /// Subscript shift-down with a superscript.
    pub sub2: f64,
    /// Superscript baseline below the top of a large box.
    pub sup_drop: f64,
    /// Subscript baseline below the bottom of a large box.
    pub sub_drop: f64,
    /// Size of `\atopwithdelims` delimiters in display styles.
    pub delim1: f64,
    /// Size of `\atopwithdelims` delimiters in non-display styles.
    pub delim2: f64,
    /// Height of the math axis above the baseline.
    pub axis_height: f64,
    /// Thickness of fraction bars and overlines (xi 8).
    pub default_rule_thickness: f64,
    /// Minimum clearance above a large operator's upper limit (xi 9).
    pub big_op_spacing1: f64,
    /// Minimum clearance below a large operator's lower limit (xi 10).
    pub big_op_spacing2: f64,
    /// Minimum baseline raise of an upper limit (xi 11).
    pub big_op_spacing3: f64,
    /// Minimum baseline drop of a lower limit (xi 12).
    pub big_op_spacing4: f64,
    /// Padding above and below limits (xi 13).
    pub big_op_spacing5: f64,
    /// Thickness of the radical rule.
    pub sqrt_rule_thickness: f64,
    /// Points per em of the base font.
    pub pt_per_em: f64,
}

impl FontMetrics {
    /// Returns a copy with every length multiplied by `factor`. `slant` and
    /// `pt_per_em` are ratios and stay unchanged.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            slant: self.slant,
            space: self.space * factor,
            stretch: self.stretch * factor,
            shrink: self.shrink * factor,
            x_height: self.x_height * factor,
            quad: self.quad * factor,
            extra_space: self.extra_space * factor,
            num1: self.num1 * factor,
            num2: self.num2 * factor,
            num3: self.num3 * factor,
            denom1: self.denom1 * factor,
            denom2: self.denom2 * factor,
            sup1: self.sup1 * factor,
            sup2: self.sup2 * factor,
            sup3: self.sup3 * factor,
            sub1: self.sub1 * factor,
            sub2: self.sub2 * factor,
            sup_drop: self.sup_drop * factor,
            sub_drop: self.sub_drop * factor,
            delim1: self.delim1 * factor,
            delim2: self.delim2 * factor,
            axis_height: self.axis_height * factor,
            default_rule_thickness: self.default_rule_thickness * factor,
            big_op_spacing1: self.big_op_spacing1 * factor,
            big_op_spacing2: self.big_op_spacing2 * factor,
            big_op_spacing3: self.big_op_spacing3 * factor,
            big_op_spacing4: self.big_op_spacing4 * factor,
            big_op_spacing5: self.big_op_spacing5 * factor,
            sqrt_rule_thickness: self.sqrt_rule_thickness * factor,
            pt_per_em: self.pt_per_em,
        }
    }
}

/// Sigma and xi values for textstyle, scriptstyle and scriptscriptstyle.
pub const SIGMAS_AND_XIS: [FontMetrics; 3] = [
    FontMetrics {
        slant: 0.25,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height: 0.431,
        quad: 1.0,
        extra_space: 0.0,
        num1: 0.677,
        num2: 0.394,
        num3: 0.444,
        denom1: 0.686,
        denom2: 0.345,
        sup1: 0.413,
        sup2: 0.363,
        sup3: 0.289,
        sub1: 0.15,
        sub2: 0.247,
        sup_drop: 0.386,
        sub_drop: 0.05,
        delim1: 2.39,
        delim2: 1.01,
        axis_height: 0.25,
        default_rule_thickness: 0.04,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.6,
        big_op_spacing5: 0.1,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
    },
    FontMetrics {
        slant: 0.25,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height: 0.431,
        quad: 1.171,
        extra_space: 0.0,
        num1: 0.732,
        num2: 0.384,
        num3: 0.471,
        denom1: 0.752,
        denom2: 0.344,
        sup1: 0.503,
        sup2: 0.431,
        sup3: 0.286,
        sub1: 0.143,
        sub2: 0.286,
        sup_drop: 0.353,
        sub_drop: 0.071,
        delim1: 1.7,
        delim2: 1.157,
        axis_height: 0.25,
        default_rule_thickness: 0.049,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.611,
        big_op_spacing5: 0.143,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
    },
    FontMetrics {
        slant: 0.25,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height: 0.431,
        quad: 1.472,
        extra_space: 0.0,
        num1: 0.925,
        num2: 0.387,
        num3: 0.504,
        denom1: 1.025,
        denom2: 0.532,
        sup1: 0.504,
        sup2: 0.404,
        sup3: 0.294,
        sub1: 0.2,
        sub2: 0.4,
        sup_drop: 0.494,
        sub_drop: 0.1,
        delim1: 1.98,
        delim2: 1.42,
        axis_height: 0.25,
        default_rule_thickness: 0.049,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.611,
        big_op_spacing5: 0.143,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
    },
];

/// A font family with its own glyph metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    /// Upright roman.
    #[default]
    #[strum(serialize = "Main-Regular")]
    MainRegular,
    /// Bold roman.
    #[strum(serialize = "Main-Bold")]
    MainBold,
    /// Italic roman, for text.
    #[strum(serialize = "Main-Italic")]
    MainItalic,
    /// Bold italic roman.
    #[strum(serialize = "Main-BoldItalic")]
    MainBoldItalic,
    /// Math italic, for variables.
    #[strum(serialize = "Math-Italic")]
    MathItalic,
    /// Bold math italic.
    #[strum(serialize = "Math-BoldItalic")]
    MathBoldItalic,
    /// AMS symbols and blackboard bold.
    #[strum(serialize = "AMS-Regular")]
    Ams,
    /// Calligraphic capitals.
    #[strum(serialize = "Caligraphic-Regular")]
    Caligraphic,
    /// Fraktur.
    #[strum(serialize = "Fraktur-Regular")]
    Fraktur,
    /// Sans serif.
    #[strum(serialize = "SansSerif-Regular")]
    SansSerif,
    /// Script capitals.
    #[strum(serialize = "Script-Regular")]
    Script,
    /// Monospace.
    #[strum(serialize = "Typewriter-Regular")]
    Typewriter,
    /// First enlarged size of operators and delimiters.
    #[strum(serialize = "Size1-Regular")]
    Size1,
    /// Second enlarged size.
    #[strum(serialize = "Size2-Regular")]
    Size2,
    /// Third enlarged size, delimiters only.
    #[strum(serialize = "Size3-Regular")]
    Size3,
    /// Fourth enlarged size, delimiters only.
    #[strum(serialize = "Size4-Regular")]
    Size4,
}

impl FontFamily {
    /// Returns `true` for the bold families.
    #[must_use]
    pub const fn is_bold(self) -> bool {
        matches!(
            self,
            Self::MainBold | Self::MainBoldItalic | Self::MathBoldItalic
        )
    }
}

/// Source of font metrics for the layout engine.
///
/// Implementations must be cheap to query and safe to share between
/// concurrent layout passes.
pub trait MetricsProvider: fmt::Debug + Send + Sync {
    /// Metrics of `glyph` in `family`, in ems of that font.
    fn lookup(&self, family: FontFamily, glyph: char) -> Option<CharacterMetrics>;

    /// Font parameters for a size index (0 = text, 1 = script,
    /// 2 = scriptscript).
    fn font_metrics(&self, size_index: usize) -> &FontMetrics {
        &SIGMAS_AND_XIS[size_index.min(2)]
    }
}

/// Metrics for the glyphs of the standard TeX math fonts.
///
/// A glyph missing from its family falls back to the roman font, then to
/// math italic, so that styled variants of common characters still get
/// plausible boxes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMetrics;

impl MetricsProvider for BuiltinMetrics {
    fn lookup(&self, family: FontFamily, glyph: char) -> Option<CharacterMetrics> {
        let find = |family| family_table(family).and_then(|table| table.get(&glyph)).copied();
        if let Some(metrics) = find(family) {
            return Some(metrics);
        }
        let fallback = find(FontFamily::MainRegular).or_else(|| find(FontFamily::MathItalic))?;
        Some(if family.is_bold() {
            fallback.emboldened()
        } else {
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_sizes_have_larger_quads() {
        assert_eq!(SIGMAS_AND_XIS[0].quad, 1.0);
        assert!(SIGMAS_AND_XIS[1].quad > SIGMAS_AND_XIS[0].quad);
        assert!(SIGMAS_AND_XIS[2].quad > SIGMAS_AND_XIS[1].quad);
    }

    #[test]
    fn scaling_keeps_ratios() {
        let scaled = SIGMAS_AND_XIS[0].scaled(0.5);
        assert_eq!(scaled.quad, 0.5);
        assert_eq!(scaled.slant, 0.25);
        assert_eq!(scaled.pt_per_em, 10.0);
    }

    #[test]
    fn builtin_lookup_falls_back_to_roman() {
        let metrics = BuiltinMetrics;
        let x = metrics.lookup(FontFamily::MathItalic, 'x');
        assert_eq!(x.map(|m| m.width), Some(0.57153));
        let digit = metrics.lookup(FontFamily::Fraktur, '2');
        assert_eq!(digit.map(|m| m.height), Some(0.64444));
        let bold = metrics.lookup(FontFamily::MainBold, '2');
        assert!(bold.is_some_and(|m| m.width > 0.5));
        assert!(metrics.lookup(FontFamily::MainRegular, '\u{e000}').is_none());
    }

    #[test]
    fn family_names() {
        assert_eq!(FontFamily::Size1.as_ref(), "Size1-Regular");
        assert_eq!("Math-Italic".parse(), Ok(FontFamily::MathItalic));
    }
}
