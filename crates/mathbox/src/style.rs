//! The four TeX math styles and their cramped variants.
//!
//! A [`Mathstyle`] is one of eight static instances. Moving from one style to
//! another (into a superscript, a numerator, ...) is a table lookup, so the
//! cascade never allocates.

use strum::{AsRefStr, Display, EnumString};

/// Name of a math style, as written in LaTeX without the backslash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MathstyleName {
    /// `\displaystyle`
    Displaystyle,
    /// `\textstyle`
    Textstyle,
    /// `\scriptstyle`
    Scriptstyle,
    /// `\scriptscriptstyle`
    Scriptscriptstyle,
}

impl MathstyleName {
    /// The uncramped style with this name.
    #[must_use]
    pub const fn style(self) -> &'static Mathstyle {
        match self {
            Self::Displaystyle => DISPLAY,
            Self::Textstyle => TEXT,
            Self::Scriptstyle => SCRIPT,
            Self::Scriptscriptstyle => SCRIPTSCRIPT,
        }
    }
}

/// A math style: a size level and a cramped flag.
#[derive(Debug, PartialEq, Eq)]
pub struct Mathstyle {
    /// Unique identifier, an index into the style table.
    pub id: usize,
    /// Size level (0=display, 1=text, 2=script, 3=scriptscript).
    pub size: usize,
    /// Whether the style is cramped.
    pub cramped: bool,
}

impl Mathstyle {
    const fn new(id: usize, size: usize, cramped: bool) -> Self {
        Self { id, size, cramped }
    }

    /// Style of a superscript on a base in this style.
    #[must_use]
    pub const fn sup(&self) -> &'static Self {
        &STYLES[SUP[self.id]]
    }

    /// Style of a subscript on a base in this style. Always cramped.
    #[must_use]
    pub const fn sub(&self) -> &'static Self {
        &STYLES[SUB[self.id]]
    }

    /// Style of the numerator of a fraction in this style.
    #[must_use]
    pub const fn frac_num(&self) -> &'static Self {
        &STYLES[FRAC_NUM[self.id]]
    }

    /// Style of the denominator of a fraction in this style.
    #[must_use]
    pub const fn frac_den(&self) -> &'static Self {
        &STYLES[FRAC_DEN[self.id]]
    }

    /// Cramped version of this style.
    #[must_use]
    pub const fn cramp(&self) -> &'static Self {
        &STYLES[CRAMP[self.id]]
    }

    /// Text or display version of this style.
    #[must_use]
    pub const fn text(&self) -> &'static Self {
        &STYLES[TEXT_LOOKUP[self.id]]
    }

    /// Returns `true` for script and scriptscript styles, where most
    /// inter-atom spacing is suppressed.
    #[must_use]
    pub const fn is_tight(&self) -> bool {
        self.size >= 2
    }

    /// Returns `true` for display styles.
    #[must_use]
    pub const fn is_display(&self) -> bool {
        self.size == 0
    }

    /// Index into per-size tables: 0 for text and display, 1 for script, 2 for
    /// scriptscript.
    #[must_use]
    pub const fn metrics_index(&self) -> usize {
        match self.size {
            0 | 1 => 0,
            2 => 1,
            _ => 2,
        }
    }

    /// Scale of glyphs in this style relative to text style.
    #[must_use]
    pub const fn size_multiplier(&self) -> f64 {
        SIZE_MULTIPLIERS[self.metrics_index()]
    }

    /// The style's name, ignoring the cramped flag.
    #[must_use]
    pub const fn name(&self) -> MathstyleName {
        match self.size {
            0 => MathstyleName::Displaystyle,
            1 => MathstyleName::Textstyle,
            2 => MathstyleName::Scriptstyle,
            _ => MathstyleName::Scriptscriptstyle,
        }
    }
}

const D: usize = 0;
const DC: usize = 1;
const T: usize = 2;
const TC: usize = 3;
const S: usize = 4;
const SC: usize = 5;
const SS: usize = 6;
const SSC: usize = 7;

const STYLES: [Mathstyle; 8] = [
    Mathstyle::new(D, 0, false),
    Mathstyle::new(DC, 0, true),
    Mathstyle::new(T, 1, false),
    Mathstyle::new(TC, 1, true),
    Mathstyle::new(S, 2, false),
    Mathstyle::new(SC, 2, true),
    Mathstyle::new(SS, 3, false),
    Mathstyle::new(SSC, 3, true),
];

const SIZE_MULTIPLIERS: [f64; 3] = [1.0, 0.7, 0.5];

const SUP: [usize; 8] = [S, SC, S, SC, SS, SSC, SS, SSC];
const SUB: [usize; 8] = [SC, SC, SC, SC, SSC, SSC, SSC, SSC];
const FRAC_NUM: [usize; 8] = [T, TC, S, SC, SS, SSC, SS, SSC];
const FRAC_DEN: [usize; 8] = [TC, TC, SC, SC, SSC, SSC, SSC, SSC];
const CRAMP: [usize; 8] = [DC, DC, TC, TC, SC, SC, SSC, SSC];
const TEXT_LOOKUP: [usize; 8] = [D, DC, T, TC, T, TC, T, TC];

/// `\displaystyle`: top-level style of display math. Large operators are
/// drawn at their bigger size and take their limits above and below.
pub const DISPLAY: &Mathstyle = &STYLES[D];

/// `\textstyle`: top-level style of inline math.
pub const TEXT: &Mathstyle = &STYLES[T];

/// `\scriptstyle`: first level of scripts, at 70% size.
pub const SCRIPT: &Mathstyle = &STYLES[S];

/// `\scriptscriptstyle`: second and deeper levels of scripts, at 50% size.
pub const SCRIPTSCRIPT: &Mathstyle = &STYLES[SS];
