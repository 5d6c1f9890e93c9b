//! Glyph metrics of the standard TeX math fonts.
//!
//! Each entry is `g(depth, height, italic, skew, width)` in ems of the font.
//! Only glyphs the parser can produce are listed; other families fall back to
//! these tables through [`BuiltinMetrics`](crate::font_metrics::BuiltinMetrics).

use phf::phf_map;

use crate::font_metrics::FontFamily;

/// Metrics of a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterMetrics {
    /// Extent below the baseline.
    pub depth: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Italic correction.
    pub italic: f64,
    /// Horizontal offset for accents.
    pub skew: f64,
    /// Advance width.
    pub width: f64,
}

impl CharacterMetrics {
    /// Creates glyph metrics.
    #[must_use]
    pub const fn new(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> Self {
        Self {
            depth,
            height,
            italic,
            skew,
            width,
        }
    }

    /// Approximates the bold cut of a glyph known only in its regular cut.
    #[must_use]
    pub fn emboldened(self) -> Self {
        Self {
            width: self.width * 1.1,
            ..self
        }
    }
}

const fn g(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> CharacterMetrics {
    CharacterMetrics::new(depth, height, italic, skew, width)
}

/// Glyph metrics of one family, keyed by character.
pub type MetricMap = phf::Map<char, CharacterMetrics>;

/// The table for `family`, if the family has its own data.
#[must_use]
pub fn family_table(family: FontFamily) -> Option<&'static MetricMap> {
    match family {
        FontFamily::MainRegular | FontFamily::MainItalic => Some(&MAIN_REGULAR),
        FontFamily::MainBold | FontFamily::MainBoldItalic => Some(&MAIN_BOLD),
        FontFamily::MathItalic | FontFamily::MathBoldItalic => Some(&MATH_ITALIC),
        FontFamily::Ams => Some(&AMS_REGULAR),
        FontFamily::Caligraphic => Some(&CALIGRAPHIC_REGULAR),
        FontFamily::Size1 => Some(&SIZE1_REGULAR),
        FontFamily::Size2 => Some(&SIZE2_REGULAR),
        FontFamily::Size3 => Some(&SIZE3_REGULAR),
        FontFamily::Size4 => Some(&SIZE4_REGULAR),
        FontFamily::Fraktur | FontFamily::SansSerif | FontFamily::Script | FontFamily::Typewriter => {
            None
        }
    }
}

/// Upright roman.
pub static MAIN_REGULAR: MetricMap = phf_map! {
    ' ' => g(0.0, 0.0, 0.0, 0.0, 0.25),
    '!' => g(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '"' => g(0.0, 0.69444, 0.0, 0.0, 0.5),
    '#' => g(0.19444, 0.69444, 0.0, 0.0, 0.83334),
    '$' => g(0.05556, 0.75, 0.0, 0.0, 0.5),
    '%' => g(0.05556, 0.75, 0.0, 0.0, 0.83334),
    '&' => g(0.0, 0.69444, 0.0, 0.0, 0.77778),
    '\'' => g(0.0, 0.69444, 0.0, 0.0, 0.27778),
    '(' => g(0.25, 0.75, 0.0, 0.0, 0.38889),
    ')' => g(0.25, 0.75, 0.0, 0.0, 0.38889),
    '*' => g(0.0, 0.75, 0.0, 0.0, 0.5),
    '+' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    ',' => g(0.19444, 0.10556, 0.0, 0.0, 0.27778),
    '-' => g(0.0, 0.43056, 0.0, 0.0, 0.33333),
    '.' => g(0.0, 0.10556, 0.0, 0.0, 0.27778),
    '/' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    '0' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '1' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '2' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '3' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '4' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '5' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '6' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '7' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '8' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    '9' => g(0.0, 0.64444, 0.0, 0.0, 0.5),
    ':' => g(0.0, 0.43056, 0.0, 0.0, 0.27778),
    ';' => g(0.19444, 0.43056, 0.0, 0.0, 0.27778),
    '<' => g(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '=' => g(-0.13313, 0.36687, 0.0, 0.0, 0.77778),
    '>' => g(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '?' => g(0.0, 0.69444, 0.0, 0.0, 0.47222),
    '@' => g(0.0, 0.69444, 0.0, 0.0, 0.77778),
    'A' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    'B' => g(0.0, 0.68333, 0.0, 0.0, 0.70834),
    'C' => g(0.0, 0.68333, 0.0, 0.0, 0.72222),
    'D' => g(0.0, 0.68333, 0.0, 0.0, 0.76389),
    'E' => g(0.0, 0.68333, 0.0, 0.0, 0.68056),
    'F' => g(0.0, 0.68333, 0.0, 0.0, 0.65278),
    'G' => g(0.0, 0.68333, 0.0, 0.0, 0.78472),
    'H' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    'I' => g(0.0, 0.68333, 0.0, 0.0, 0.36111),
    'J' => g(0.0, 0.68333, 0.0, 0.0, 0.51389),
    'K' => g(0.0, 0.68333, 0.0, 0.0, 0.77778),
    'L' => g(0.0, 0.68333, 0.0, 0.0, 0.625),
    'M' => g(0.0, 0.68333, 0.0, 0.0, 0.91667),
    'N' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    'O' => g(0.0, 0.68333, 0.0, 0.0, 0.77778),
    'P' => g(0.0, 0.68333, 0.0, 0.0, 0.68056),
    'Q' => g(0.19444, 0.68333, 0.0, 0.0, 0.77778),
    'R' => g(0.0, 0.68333, 0.0, 0.0, 0.73611),
    'S' => g(0.0, 0.68333, 0.0, 0.0, 0.55556),
    'T' => g(0.0, 0.68333, 0.0, 0.0, 0.72222),
    'U' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    'V' => g(0.0, 0.68333, 0.01389, 0.0, 0.75),
    'W' => g(0.0, 0.68333, 0.01389, 0.0, 1.02778),
    'X' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    'Y' => g(0.0, 0.68333, 0.025, 0.0, 0.75),
    'Z' => g(0.0, 0.68333, 0.0, 0.0, 0.61111),
    '[' => g(0.25, 0.75, 0.0, 0.0, 0.27778),
    '\\' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    ']' => g(0.25, 0.75, 0.0, 0.0, 0.27778),
    '^' => g(0.0, 0.69444, 0.0, 0.0, 0.5),
    '_' => g(0.31, 0.12056, 0.02778, 0.0, 0.5),
    '`' => g(0.0, 0.69444, 0.0, 0.0, 0.5),
    'a' => g(0.0, 0.43056, 0.0, 0.0, 0.5),
    'b' => g(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'c' => g(0.0, 0.43056, 0.0, 0.0, 0.44445),
    'd' => g(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'e' => g(0.0, 0.43056, 0.0, 0.0, 0.44445),
    'f' => g(0.0, 0.69444, 0.07778, 0.0, 0.30556),
    'g' => g(0.19444, 0.43056, 0.01389, 0.0, 0.5),
    'h' => g(0.0, 0.69444, 0.0, 0.0, 0.55556),
    'i' => g(0.0, 0.66786, 0.0, 0.0, 0.27778),
    'j' => g(0.19444, 0.66786, 0.0, 0.0, 0.30556),
    'k' => g(0.0, 0.69444, 0.0, 0.0, 0.52778),
    'l' => g(0.0, 0.69444, 0.0, 0.0, 0.27778),
    'm' => g(0.0, 0.43056, 0.0, 0.0, 0.83334),
    'n' => g(0.0, 0.43056, 0.0, 0.0, 0.55556),
    'o' => g(0.0, 0.43056, 0.0, 0.0, 0.5),
    'p' => g(0.19444, 0.43056, 0.0, 0.0, 0.55556),
    'q' => g(0.19444, 0.43056, 0.0, 0.0, 0.52778),
    'r' => g(0.0, 0.43056, 0.0, 0.0, 0.39167),
    's' => g(0.0, 0.43056, 0.0, 0.0, 0.39445),
    't' => g(0.0, 0.61508, 0.0, 0.0, 0.38889),
    'u' => g(0.0, 0.43056, 0.0, 0.0, 0.55556),
    'v' => g(0.0, 0.43056, 0.01389, 0.0, 0.52778),
    'w' => g(0.0, 0.43056, 0.01389, 0.0, 0.72222),
    'x' => g(0.0, 0.43056, 0.0, 0.0, 0.52778),
    'y' => g(0.19444, 0.43056, 0.01389, 0.0, 0.52778),
    'z' => g(0.0, 0.43056, 0.0, 0.0, 0.44445),
    '{' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    '|' => g(0.25, 0.75, 0.0, 0.0, 0.27778),
    '}' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    '~' => g(0.0, 0.31786, 0.0, 0.0, 0.5),
    '\u{a0}' => g(0.0, 0.0, 0.0, 0.0, 0.25),
    '\u{a8}' => g(0.0, 0.66786, 0.0, 0.0, 0.5),
    '\u{ac}' => g(0.0, 0.43056, 0.0, 0.0, 0.66667),
    '\u{b0}' => g(0.0, 0.69444, 0.0, 0.0, 0.75),
    '\u{b1}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{b4}' => g(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{b7}' => g(-0.05555, 0.44445, 0.0, 0.0, 0.27778),
    '\u{d7}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{f7}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{131}' => g(0.0, 0.43056, 0.0, 0.0, 0.27778),
    '\u{237}' => g(0.19444, 0.43056, 0.0, 0.0, 0.30556),
    '\u{2c6}' => g(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{2c7}' => g(0.0, 0.62847, 0.0, 0.0, 0.5),
    '\u{2c9}' => g(0.0, 0.56778, 0.0, 0.0, 0.5),
    '\u{2d8}' => g(0.0, 0.69444, 0.0, 0.0, 0.5),
    '\u{2d9}' => g(0.0, 0.66786, 0.0, 0.0, 0.27778),
    '\u{2da}' => g(0.0, 0.69444, 0.0, 0.0, 0.75),
    '\u{2dc}' => g(0.0, 0.66786, 0.0, 0.0, 0.5),
    '\u{393}' => g(0.0, 0.68333, 0.0, 0.0, 0.625),
    '\u{394}' => g(0.0, 0.68333, 0.0, 0.0, 0.83334),
    '\u{398}' => g(0.0, 0.68333, 0.0, 0.0, 0.77778),
    '\u{39b}' => g(0.0, 0.68333, 0.0, 0.0, 0.69445),
    '\u{39e}' => g(0.0, 0.68333, 0.0, 0.0, 0.66667),
    '\u{3a0}' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    '\u{3a3}' => g(0.0, 0.68333, 0.0, 0.0, 0.72222),
    '\u{3a5}' => g(0.0, 0.68333, 0.0, 0.0, 0.77778),
    '\u{3a6}' => g(0.0, 0.68333, 0.0, 0.0, 0.72222),
    '\u{3a8}' => g(0.0, 0.68333, 0.0, 0.0, 0.77778),
    '\u{3a9}' => g(0.0, 0.68333, 0.0, 0.0, 0.72222),
    '\u{2013}' => g(0.0, 0.43056, 0.02778, 0.0, 0.5),
    '\u{2014}' => g(0.0, 0.43056, 0.02778, 0.0, 1.0),
    '\u{2016}' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2020}' => g(0.19444, 0.69444, 0.0, 0.0, 0.44445),
    '\u{2021}' => g(0.19444, 0.69444, 0.0, 0.0, 0.44445),
    '\u{2026}' => g(0.0, 0.12, 0.0, 0.0, 1.172),
    '\u{2032}' => g(0.0, 0.55556, 0.0, 0.0, 0.275),
    '\u{20d7}' => g(0.0, 0.71444, 0.15382, 0.0, 0.5),
    '\u{210f}' => g(0.0, 0.69444, 0.0, 0.0, 0.54028),
    '\u{2111}' => g(0.0, 0.69444, 0.0, 0.0, 0.72222),
    '\u{2113}' => g(0.0, 0.69444, 0.0, 0.0, 0.41667),
    '\u{2118}' => g(0.19444, 0.43056, 0.0, 0.0, 0.63646),
    '\u{211c}' => g(0.0, 0.69444, 0.0, 0.0, 0.72222),
    '\u{2135}' => g(0.0, 0.69444, 0.0, 0.0, 0.61111),
    '\u{2190}' => g(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{2191}' => g(0.19444, 0.69444, 0.0, 0.0, 0.5),
    '\u{2192}' => g(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{2193}' => g(0.19444, 0.69444, 0.0, 0.0, 0.5),
    '\u{2194}' => g(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{21a6}' => g(0.011, 0.511, 0.0, 0.0, 1.0),
    '\u{21d0}' => g(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{21d2}' => g(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{21d4}' => g(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    '\u{2200}' => g(0.0, 0.69444, 0.0, 0.0, 0.55556),
    '\u{2202}' => g(0.0, 0.69444, 0.05556, 0.0, 0.5),
    '\u{2203}' => g(0.0, 0.69444, 0.0, 0.0, 0.55556),
    '\u{2205}' => g(0.05556, 0.75, 0.0, 0.0, 0.5),
    '\u{2207}' => g(0.0, 0.68333, 0.0, 0.0, 0.83334),
    '\u{2208}' => g(0.0391, 0.5391, 0.0, 0.0, 0.66667),
    '\u{2209}' => g(0.19444, 0.69444, 0.0, 0.0, 0.66667),
    '\u{220b}' => g(0.0391, 0.5391, 0.0, 0.0, 0.66667),
    '\u{2212}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2213}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2216}' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2217}' => g(-0.03472, 0.46528, 0.0, 0.0, 0.5),
    '\u{2218}' => g(-0.05555, 0.44445, 0.0, 0.0, 0.5),
    '\u{2219}' => g(-0.05555, 0.44445, 0.0, 0.0, 0.5),
    '\u{221a}' => g(0.2, 0.8, 0.0, 0.0, 0.83334),
    '\u{221d}' => g(0.0, 0.43056, 0.0, 0.0, 0.77778),
    '\u{221e}' => g(0.0, 0.43056, 0.0, 0.0, 1.0),
    '\u{2220}' => g(0.0, 0.69224, 0.0, 0.0, 0.72222),
    '\u{2223}' => g(0.25, 0.75, 0.0, 0.0, 0.27778),
    '\u{2225}' => g(0.25, 0.75, 0.0, 0.0, 0.5),
    '\u{2227}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2228}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2229}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{222a}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{222b}' => g(0.19444, 0.69444, 0.11111, 0.0, 0.41667),
    '\u{223c}' => g(-0.13313, 0.36687, 0.0, 0.0, 0.77778),
    '\u{2240}' => g(0.19444, 0.69444, 0.0, 0.0, 0.27778),
    '\u{2243}' => g(-0.03625, 0.46375, 0.0, 0.0, 0.77778),
    '\u{2245}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2248}' => g(-0.01688, 0.48312, 0.0, 0.0, 0.77778),
    '\u{224d}' => g(-0.03625, 0.46375, 0.0, 0.0, 0.77778),
    '\u{2250}' => g(-0.133, 0.67, 0.0, 0.0, 0.778),
    '\u{2260}' => g(0.19444, 0.69444, 0.0, 0.0, 0.77778),
    '\u{2261}' => g(-0.03625, 0.46375, 0.0, 0.0, 0.77778),
    '\u{2264}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2265}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{226a}' => g(0.0391, 0.5391, 0.0, 0.0, 1.0),
    '\u{226b}' => g(0.0391, 0.5391, 0.0, 0.0, 1.0),
    '\u{227a}' => g(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{227b}' => g(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{2282}' => g(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{2283}' => g(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    '\u{2286}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2287}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{228e}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2291}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2292}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2293}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2294}' => g(0.0, 0.55556, 0.0, 0.0, 0.66667),
    '\u{2295}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2296}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2297}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2298}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{2299}' => g(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    '\u{22a2}' => g(0.0, 0.69444, 0.0, 0.0, 0.61111),
    '\u{22a3}' => g(0.0, 0.69444, 0.0, 0.0, 0.61111),
    '\u{22a4}' => g(0.0, 0.69444, 0.0, 0.0, 0.77778),
    '\u{22a5}' => g(0.0, 0.69444, 0.0, 0.0, 0.77778),
    '\u{22a8}' => g(0.249, 0.75, 0.0, 0.0, 0.867),
    '\u{22c4}' => g(-0.05555, 0.44445, 0.0, 0.0, 0.5),
    '\u{22c5}' => g(-0.05555, 0.44445, 0.0, 0.0, 0.27778),
    '\u{22c6}' => g(-0.03472, 0.46528, 0.0, 0.0, 0.5),
    '\u{22c8}' => g(0.005, 0.505, 0.0, 0.0, 0.9),
    '\u{22ee}' => g(0.03, 0.9, 0.0, 0.0, 0.27778),
    '\u{22ef}' => g(-0.19, 0.31, 0.0, 0.0, 1.172),
    '\u{22f1}' => g(-0.1, 0.82, 0.0, 0.0, 1.282),
    '\u{2308}' => g(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{2309}' => g(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{230a}' => g(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{230b}' => g(0.25, 0.75, 0.0, 0.0, 0.44445),
    '\u{2322}' => g(-0.14236, 0.35764, 0.0, 0.0, 1.0),
    '\u{2323}' => g(-0.14236, 0.35764, 0.0, 0.0, 1.0),
    '\u{25b3}' => g(0.19444, 0.69444, 0.0, 0.0, 0.88889),
    '\u{25bd}' => g(0.19444, 0.69444, 0.0, 0.0, 0.88889),
    '\u{25ef}' => g(0.19444, 0.69444, 0.0, 0.0, 1.0),
    '\u{25a2}' => g(0.0, 0.675, 0.0, 0.0, 0.778),
    '\u{2660}' => g(0.12, 0.62, 0.0, 0.0, 0.77778),
    '\u{2661}' => g(0.12, 0.62, 0.0, 0.0, 0.77778),
    '\u{2662}' => g(0.12, 0.62, 0.0, 0.0, 0.77778),
    '\u{2663}' => g(0.12, 0.62, 0.0, 0.0, 0.77778),
    '\u{266d}' => g(0.0, 0.75, 0.0, 0.0, 0.38889),
    '\u{266e}' => g(0.19444, 0.69444, 0.0, 0.0, 0.38889),
    '\u{266f}' => g(0.19444, 0.69444, 0.0, 0.0, 0.38889),
    '\u{27e8}' => g(0.25, 0.75, 0.0, 0.0, 0.38889),
    '\u{27e9}' => g(0.25, 0.75, 0.0, 0.0, 0.38889),
    '\u{27f5}' => g(0.011, 0.511, 0.0, 0.0, 1.609),
    '\u{27f6}' => g(0.011, 0.511, 0.0, 0.0, 1.638),
    '\u{27f7}' => g(0.011, 0.511, 0.0, 0.0, 1.859),
    '\u{27f8}' => g(0.024, 0.525, 0.0, 0.0, 1.609),
    '\u{27f9}' => g(0.024, 0.525, 0.0, 0.0, 1.638),
    '\u{27fa}' => g(0.024, 0.525, 0.0, 0.0, 1.858),
    '\u{27fc}' => g(0.011, 0.511, 0.0, 0.0, 1.638),
    '\u{2a3f}' => g(0.0, 0.68333, 0.0, 0.0, 0.75),
    '\u{2aaf}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2ab0}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
};

/// Bold roman, for the glyphs whose bold cut differs noticeably.
pub static MAIN_BOLD: MetricMap = phf_map! {
    '0' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '1' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '2' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '3' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '4' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '5' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '6' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '7' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '8' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '9' => g(0.0, 0.64444, 0.0, 0.0, 0.575),
    '+' => g(0.13333, 0.63333, 0.0, 0.0, 0.89444),
    '=' => g(-0.10889, 0.39111, 0.0, 0.0, 0.89444),
    '(' => g(0.25, 0.75, 0.0, 0.0, 0.44722),
    ')' => g(0.25, 0.75, 0.0, 0.0, 0.44722),
    'A' => g(0.0, 0.68611, 0.0, 0.0, 0.86944),
    'B' => g(0.0, 0.68611, 0.0, 0.0, 0.81805),
    'C' => g(0.0, 0.68611, 0.0, 0.0, 0.83055),
    'R' => g(0.0, 0.68611, 0.0, 0.0, 0.86222),
    'x' => g(0.0, 0.44444, 0.0, 0.0, 0.60694),
    'y' => g(0.19444, 0.44444, 0.01597, 0.0, 0.60694),
};

/// Math italic letters.
pub static MATH_ITALIC: MetricMap = phf_map! {
    'A' => g(0.0, 0.68333, 0.0, 0.13889, 0.75),
    'B' => g(0.0, 0.68333, 0.05017, 0.08334, 0.75851),
    'C' => g(0.0, 0.68333, 0.07153, 0.08334, 0.71472),
    'D' => g(0.0, 0.68333, 0.02778, 0.05556, 0.82792),
    'E' => g(0.0, 0.68333, 0.05764, 0.08334, 0.7382),
    'F' => g(0.0, 0.68333, 0.13889, 0.08334, 0.64306),
    'G' => g(0.0, 0.68333, 0.0, 0.08334, 0.78625),
    'H' => g(0.0, 0.68333, 0.08125, 0.05556, 0.83125),
    'I' => g(0.0, 0.68333, 0.07847, 0.11111, 0.43958),
    'J' => g(0.0, 0.68333, 0.09618, 0.16667, 0.55451),
    'K' => g(0.0, 0.68333, 0.07153, 0.05556, 0.84931),
    'L' => g(0.0, 0.68333, 0.0, 0.02778, 0.68056),
    'M' => g(0.0, 0.68333, 0.10903, 0.08334, 0.97014),
    'N' => g(0.0, 0.68333, 0.10903, 0.08334, 0.80347),
    'O' => g(0.0, 0.68333, 0.02778, 0.08334, 0.76278),
    'P' => g(0.0, 0.68333, 0.13889, 0.08334, 0.64201),
    'Q' => g(0.19444, 0.68333, 0.0, 0.08334, 0.79056),
    'R' => g(0.0, 0.68333, 0.00773, 0.08334, 0.75929),
    'S' => g(0.0, 0.68333, 0.05764, 0.08334, 0.6132),
    'T' => g(0.0, 0.68333, 0.13889, 0.08334, 0.58438),
    'U' => g(0.0, 0.68333, 0.10903, 0.02778, 0.68278),
    'V' => g(0.0, 0.68333, 0.22222, 0.0, 0.58333),
    'W' => g(0.0, 0.68333, 0.13889, 0.0, 0.94445),
    'X' => g(0.0, 0.68333, 0.07847, 0.08334, 0.82847),
    'Y' => g(0.0, 0.68333, 0.22222, 0.0, 0.58056),
    'Z' => g(0.0, 0.68333, 0.07153, 0.08334, 0.68264),
    'a' => g(0.0, 0.43056, 0.0, 0.02778, 0.52859),
    'b' => g(0.0, 0.69444, 0.0, 0.0, 0.42917),
    'c' => g(0.0, 0.43056, 0.0, 0.05556, 0.43276),
    'd' => g(0.0, 0.69444, 0.0, 0.16667, 0.52049),
    'e' => g(0.0, 0.43056, 0.0, 0.05556, 0.46563),
    'f' => g(0.19444, 0.69444, 0.10764, 0.16667, 0.48959),
    'g' => g(0.19444, 0.43056, 0.03588, 0.02778, 0.47697),
    'h' => g(0.0, 0.69444, 0.0, 0.0, 0.57616),
    'i' => g(0.0, 0.65952, 0.0, 0.0, 0.34451),
    'j' => g(0.19444, 0.65952, 0.05724, 0.0, 0.41181),
    'k' => g(0.0, 0.69444, 0.03148, 0.0, 0.5206),
    'l' => g(0.0, 0.69444, 0.01968, 0.08334, 0.29838),
    'm' => g(0.0, 0.43056, 0.0, 0.0, 0.87801),
    'n' => g(0.0, 0.43056, 0.0, 0.0, 0.60023),
    'o' => g(0.0, 0.43056, 0.0, 0.05556, 0.48472),
    'p' => g(0.19444, 0.43056, 0.0, 0.08334, 0.50313),
    'q' => g(0.19444, 0.43056, 0.03588, 0.08334, 0.44641),
    'r' => g(0.0, 0.43056, 0.02778, 0.05556, 0.45116),
    's' => g(0.0, 0.43056, 0.0, 0.05556, 0.46875),
    't' => g(0.0, 0.61508, 0.0, 0.08334, 0.36111),
    'u' => g(0.0, 0.43056, 0.0, 0.02778, 0.57246),
    'v' => g(0.0, 0.43056, 0.03588, 0.02778, 0.48472),
    'w' => g(0.0, 0.43056, 0.02691, 0.08334, 0.71592),
    'x' => g(0.0, 0.43056, 0.0, 0.02778, 0.57153),
    'y' => g(0.19444, 0.43056, 0.03588, 0.05556, 0.49028),
    'z' => g(0.0, 0.43056, 0.04398, 0.05556, 0.46505),
    '\u{131}' => g(0.0, 0.43056, 0.0, 0.02778, 0.32246),
    '\u{237}' => g(0.19444, 0.43056, 0.0, 0.08334, 0.38403),
    '\u{393}' => g(0.0, 0.68333, 0.13889, 0.08334, 0.61528),
    '\u{394}' => g(0.0, 0.68333, 0.0, 0.16667, 0.83334),
    '\u{398}' => g(0.0, 0.68333, 0.02778, 0.08334, 0.76278),
    '\u{39b}' => g(0.0, 0.68333, 0.0, 0.16667, 0.69445),
    '\u{39e}' => g(0.0, 0.68333, 0.07569, 0.08334, 0.74236),
    '\u{3a0}' => g(0.0, 0.68333, 0.08125, 0.05556, 0.83125),
    '\u{3a3}' => g(0.0, 0.68333, 0.05764, 0.08334, 0.77986),
    '\u{3a5}' => g(0.0, 0.68333, 0.13889, 0.0, 0.58333),
    '\u{3a6}' => g(0.0, 0.68333, 0.0, 0.08334, 0.66667),
    '\u{3a8}' => g(0.0, 0.68333, 0.11, 0.05556, 0.61222),
    '\u{3a9}' => g(0.0, 0.68333, 0.05017, 0.08334, 0.7724),
    '\u{3b1}' => g(0.0, 0.43056, 0.0037, 0.02778, 0.6397),
    '\u{3b2}' => g(0.19444, 0.69444, 0.05278, 0.08334, 0.56563),
    '\u{3b3}' => g(0.19444, 0.43056, 0.05556, 0.0, 0.51773),
    '\u{3b4}' => g(0.0, 0.69444, 0.03785, 0.05556, 0.44444),
    '\u{3b5}' => g(0.0, 0.43056, 0.0, 0.08334, 0.46632),
    '\u{3b6}' => g(0.19444, 0.69444, 0.07378, 0.08334, 0.4375),
    '\u{3b7}' => g(0.19444, 0.43056, 0.03588, 0.05556, 0.49653),
    '\u{3b8}' => g(0.0, 0.69444, 0.02778, 0.08334, 0.46944),
    '\u{3b9}' => g(0.0, 0.43056, 0.0, 0.05556, 0.35394),
    '\u{3ba}' => g(0.0, 0.43056, 0.0, 0.0, 0.57616),
    '\u{3bb}' => g(0.0, 0.69444, 0.0, 0.0, 0.58334),
    '\u{3bc}' => g(0.19444, 0.43056, 0.0, 0.02778, 0.60255),
    '\u{3bd}' => g(0.0, 0.43056, 0.06366, 0.02778, 0.49398),
    '\u{3be}' => g(0.19444, 0.69444, 0.04601, 0.11111, 0.4375),
    '\u{3bf}' => g(0.0, 0.43056, 0.0, 0.05556, 0.48472),
    '\u{3c0}' => g(0.0, 0.43056, 0.03588, 0.0, 0.57003),
    '\u{3c1}' => g(0.19444, 0.43056, 0.0, 0.08334, 0.51702),
    '\u{3c2}' => g(0.09722, 0.43056, 0.07986, 0.08334, 0.47361),
    '\u{3c3}' => g(0.0, 0.43056, 0.03588, 0.0, 0.57141),
    '\u{3c4}' => g(0.0, 0.43056, 0.1132, 0.02778, 0.43715),
    '\u{3c5}' => g(0.0, 0.43056, 0.03588, 0.02778, 0.54028),
    '\u{3c6}' => g(0.19444, 0.43056, 0.0, 0.08334, 0.65417),
    '\u{3c7}' => g(0.19444, 0.43056, 0.0, 0.05556, 0.62569),
    '\u{3c8}' => g(0.19444, 0.69444, 0.03588, 0.11111, 0.65139),
    '\u{3c9}' => g(0.0, 0.43056, 0.03588, 0.0, 0.62245),
    '\u{3d1}' => g(0.0, 0.69444, 0.0, 0.08334, 0.59144),
    '\u{3d5}' => g(0.19444, 0.69444, 0.0, 0.08334, 0.59618),
    '\u{3d6}' => g(0.0, 0.43056, 0.02778, 0.0, 0.82813),
    '\u{3f1}' => g(0.19444, 0.43056, 0.0, 0.08334, 0.51702),
    '\u{3f5}' => g(0.0, 0.43056, 0.0, 0.05556, 0.40278),
    '\u{2202}' => g(0.0, 0.69444, 0.05556, 0.08334, 0.5686),
    '\u{2113}' => g(0.0, 0.69444, 0.0, 0.11111, 0.41667),
    '\u{210f}' => g(0.0, 0.69444, 0.0, 0.0, 0.57616),
};

/// Blackboard bold capitals and AMS symbols.
pub static AMS_REGULAR: MetricMap = phf_map! {
    'A' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'B' => g(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'C' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'D' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'E' => g(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'F' => g(0.0, 0.68889, 0.0, 0.0, 0.61111),
    'G' => g(0.0, 0.68889, 0.0, 0.0, 0.77778),
    'H' => g(0.0, 0.68889, 0.0, 0.0, 0.77778),
    'I' => g(0.0, 0.68889, 0.0, 0.0, 0.38889),
    'J' => g(0.16667, 0.68889, 0.0, 0.0, 0.5),
    'K' => g(0.0, 0.68889, 0.0, 0.0, 0.77778),
    'L' => g(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'M' => g(0.0, 0.68889, 0.0, 0.0, 0.94445),
    'N' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'O' => g(0.16667, 0.68889, 0.0, 0.0, 0.77778),
    'P' => g(0.0, 0.68889, 0.0, 0.0, 0.61111),
    'Q' => g(0.16667, 0.68889, 0.0, 0.0, 0.77778),
    'R' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'S' => g(0.0, 0.68889, 0.0, 0.0, 0.55556),
    'T' => g(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'U' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'V' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'W' => g(0.0, 0.68889, 0.0, 0.0, 1.0),
    'X' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'Y' => g(0.0, 0.68889, 0.0, 0.0, 0.72222),
    'Z' => g(0.0, 0.68889, 0.0, 0.0, 0.66667),
    'k' => g(0.0, 0.68889, 0.0, 0.0, 0.55556),
    '\u{2204}' => g(0.19444, 0.69444, 0.0, 0.0, 0.55556),
    '\u{2234}' => g(0.0, 0.69224, 0.0, 0.0, 0.66667),
    '\u{2235}' => g(0.0, 0.69224, 0.0, 0.0, 0.66667),
    '\u{2264}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2a7d}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2a7e}' => g(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    '\u{2713}' => g(0.0, 0.69224, 0.0, 0.0, 0.83334),
    '\u{2720}' => g(0.0, 0.69224, 0.0, 0.0, 0.83334),
};

/// Calligraphic capitals.
pub static CALIGRAPHIC_REGULAR: MetricMap = phf_map! {
    'A' => g(0.0, 0.68333, 0.0, 0.19445, 0.79847),
    'B' => g(0.0, 0.68333, 0.03041, 0.13889, 0.65681),
    'C' => g(0.0, 0.68333, 0.05834, 0.13889, 0.52653),
    'D' => g(0.0, 0.68333, 0.02778, 0.08334, 0.77139),
    'E' => g(0.0, 0.68333, 0.08944, 0.11111, 0.52778),
    'F' => g(0.0, 0.68333, 0.09931, 0.11111, 0.71875),
    'G' => g(0.09722, 0.68333, 0.0593, 0.11111, 0.59487),
    'H' => g(0.0, 0.68333, 0.00965, 0.11111, 0.84452),
    'I' => g(0.0, 0.68333, 0.07382, 0.0, 0.54452),
    'J' => g(0.09722, 0.68333, 0.18472, 0.16667, 0.67778),
    'K' => g(0.0, 0.68333, 0.01445, 0.05556, 0.76195),
    'L' => g(0.0, 0.68333, 0.0, 0.13889, 0.68972),
    'M' => g(0.0, 0.68333, 0.0, 0.13889, 1.2009),
    'N' => g(0.0, 0.68333, 0.14736, 0.08334, 0.82049),
    'O' => g(0.0, 0.68333, 0.02778, 0.11111, 0.79611),
    'P' => g(0.0, 0.68333, 0.08222, 0.08334, 0.69556),
    'Q' => g(0.09722, 0.68333, 0.0, 0.11111, 0.81667),
    'R' => g(0.0, 0.68333, 0.0, 0.08334, 0.8475),
    'S' => g(0.0, 0.68333, 0.075, 0.13889, 0.60556),
    'T' => g(0.0, 0.68333, 0.25417, 0.0, 0.54464),
    'U' => g(0.0, 0.68333, 0.09931, 0.08334, 0.62583),
    'V' => g(0.0, 0.68333, 0.08222, 0.0, 0.61278),
    'W' => g(0.0, 0.68333, 0.08222, 0.08334, 0.98778),
    'X' => g(0.0, 0.68333, 0.14643, 0.13889, 0.7133),
    'Y' => g(0.09722, 0.68333, 0.08222, 0.08334, 0.66834),
    'Z' => g(0.0, 0.68333, 0.07944, 0.13889, 0.72473),
};

/// First enlarged size.
pub static SIZE1_REGULAR: MetricMap = phf_map! {
    '(' => g(0.35001, 0.85, 0.0, 0.0, 0.45834),
    ')' => g(0.35001, 0.85, 0.0, 0.0, 0.45834),
    '/' => g(0.35001, 0.85, 0.0, 0.0, 0.57778),
    '[' => g(0.35001, 0.85, 0.0, 0.0, 0.41667),
    '\\' => g(0.35001, 0.85, 0.0, 0.0, 0.57778),
    ']' => g(0.35001, 0.85, 0.0, 0.0, 0.41667),
    '{' => g(0.35001, 0.85, 0.0, 0.0, 0.58334),
    '|' => g(-0.00099, 0.601, 0.0, 0.0, 0.33333),
    '}' => g(0.35001, 0.85, 0.0, 0.0, 0.58334),
    '\u{2016}' => g(1e-05, 0.6, 0.0, 0.0, 0.55556),
    '\u{220f}' => g(0.25001, 0.75, 0.0, 0.0, 0.94445),
    '\u{2210}' => g(0.25001, 0.75, 0.0, 0.0, 0.94445),
    '\u{2211}' => g(0.25001, 0.75, 0.0, 0.0, 1.05556),
    '\u{221a}' => g(0.35001, 0.85, 0.0, 0.0, 1.0),
    '\u{2223}' => g(-0.00099, 0.601, 0.0, 0.0, 0.33333),
    '\u{2225}' => g(1e-05, 0.6, 0.0, 0.0, 0.55556),
    '\u{222b}' => g(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    '\u{222c}' => g(0.30612, 0.805, 0.19445, 0.0, 0.81389),
    '\u{222d}' => g(0.30612, 0.805, 0.19445, 0.0, 1.15556),
    '\u{222e}' => g(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    '\u{22c0}' => g(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22c1}' => g(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22c2}' => g(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{22c3}' => g(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{2308}' => g(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{2309}' => g(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{230a}' => g(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{230b}' => g(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{27e8}' => g(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{27e9}' => g(0.35001, 0.85, 0.0, 0.0, 0.47222),
    '\u{2a00}' => g(0.25001, 0.75, 0.0, 0.0, 1.11111),
    '\u{2a01}' => g(0.25001, 0.75, 0.0, 0.0, 1.11111),
    '\u{2a02}' => g(0.25001, 0.75, 0.0, 0.0, 1.11111),
    '\u{2a04}' => g(0.25001, 0.75, 0.0, 0.0, 0.83334),
    '\u{2a06}' => g(0.25001, 0.75, 0.0, 0.0, 0.83334),
};

/// Second enlarged size.
pub static SIZE2_REGULAR: MetricMap = phf_map! {
    '(' => g(0.65002, 1.15, 0.0, 0.0, 0.59722),
    ')' => g(0.65002, 1.15, 0.0, 0.0, 0.59722),
    '/' => g(0.65002, 1.15, 0.0, 0.0, 0.81111),
    '[' => g(0.65002, 1.15, 0.0, 0.0, 0.47222),
    '\\' => g(0.65002, 1.15, 0.0, 0.0, 0.81111),
    ']' => g(0.65002, 1.15, 0.0, 0.0, 0.47222),
    '{' => g(0.65002, 1.15, 0.0, 0.0, 0.66667),
    '}' => g(0.65002, 1.15, 0.0, 0.0, 0.66667),
    '\u{220f}' => g(0.55001, 1.05, 0.0, 0.0, 1.27778),
    '\u{2210}' => g(0.55001, 1.05, 0.0, 0.0, 1.27778),
    '\u{2211}' => g(0.55001, 1.05, 0.0, 0.0, 1.44445),
    '\u{221a}' => g(0.65002, 1.15, 0.0, 0.0, 1.0),
    '\u{222b}' => g(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    '\u{222c}' => g(0.86225, 1.36, 0.44445, 0.0, 1.08334),
    '\u{222d}' => g(0.86225, 1.36, 0.44445, 0.0, 1.61111),
    '\u{222e}' => g(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    '\u{22c0}' => g(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{22c1}' => g(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{22c2}' => g(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{22c3}' => g(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{2308}' => g(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{2309}' => g(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{230a}' => g(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{230b}' => g(0.65002, 1.15, 0.0, 0.0, 0.52778),
    '\u{27e8}' => g(0.65002, 1.15, 0.0, 0.0, 0.61111),
    '\u{27e9}' => g(0.65002, 1.15, 0.0, 0.0, 0.61111),
    '\u{2a00}' => g(0.55001, 1.05, 0.0, 0.0, 1.51112),
    '\u{2a01}' => g(0.55001, 1.05, 0.0, 0.0, 1.51112),
    '\u{2a02}' => g(0.55001, 1.05, 0.0, 0.0, 1.51112),
    '\u{2a04}' => g(0.55001, 1.05, 0.0, 0.0, 1.11111),
    '\u{2a06}' => g(0.55001, 1.05, 0.0, 0.0, 1.11111),
};

/// Third enlarged size.
pub static SIZE3_REGULAR: MetricMap = phf_map! {
    '(' => g(0.95003, 1.45, 0.0, 0.0, 0.73611),
    ')' => g(0.95003, 1.45, 0.0, 0.0, 0.73611),
    '/' => g(0.95003, 1.45, 0.0, 0.0, 1.04445),
    '[' => g(0.95003, 1.45, 0.0, 0.0, 0.52778),
    '\\' => g(0.95003, 1.45, 0.0, 0.0, 1.04445),
    ']' => g(0.95003, 1.45, 0.0, 0.0, 0.52778),
    '{' => g(0.95003, 1.45, 0.0, 0.0, 0.75),
    '}' => g(0.95003, 1.45, 0.0, 0.0, 0.75),
    '\u{221a}' => g(0.95003, 1.45, 0.0, 0.0, 1.0),
    '\u{2308}' => g(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{2309}' => g(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{230a}' => g(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{230b}' => g(0.95003, 1.45, 0.0, 0.0, 0.58334),
    '\u{27e8}' => g(0.95003, 1.45, 0.0, 0.0, 0.75),
    '\u{27e9}' => g(0.95003, 1.45, 0.0, 0.0, 0.75),
};

/// Fourth enlarged size.
pub static SIZE4_REGULAR: MetricMap = phf_map! {
    '(' => g(1.25003, 1.75, 0.0, 0.0, 0.79167),
    ')' => g(1.25003, 1.75, 0.0, 0.0, 0.79167),
    '/' => g(1.25003, 1.75, 0.0, 0.0, 1.27778),
    '[' => g(1.25003, 1.75, 0.0, 0.0, 0.58334),
    '\\' => g(1.25003, 1.75, 0.0, 0.0, 1.27778),
    ']' => g(1.25003, 1.75, 0.0, 0.0, 0.58334),
    '{' => g(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '}' => g(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{221a}' => g(1.25003, 1.75, 0.0, 0.0, 1.0),
    '\u{2308}' => g(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{2309}' => g(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{230a}' => g(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{230b}' => g(1.25003, 1.75, 0.0, 0.0, 0.63889),
    '\u{27e8}' => g(1.25003, 1.75, 0.0, 0.0, 0.80556),
    '\u{27e9}' => g(1.25003, 1.75, 0.0, 0.0, 0.80556),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_share_metrics() {
        assert_eq!(MAIN_REGULAR.get(&'0'), MAIN_REGULAR.get(&'9'));
        assert_eq!(MAIN_REGULAR.get(&'7').map(|m| m.width), Some(0.5));
    }

    #[test]
    fn sizes_grow() {
        let heights: Vec<_> = [&SIZE1_REGULAR, &SIZE2_REGULAR, &SIZE3_REGULAR, &SIZE4_REGULAR]
            .iter()
            .filter_map(|table| table.get(&'('))
            .map(|m| m.height + m.depth)
            .collect();
        assert_eq!(heights.len(), 4);
        assert!(heights.windows(2).all(|w| w[0] < w[1]));
    }
}
