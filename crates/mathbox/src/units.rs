//! Dimensions, glue and registers, and their conversion to ems.
//!
//! All layout arithmetic happens in ems of the base font (the `\normalsize`
//! text font). A renderer multiplies by its font size in pixels at the very
//! end.

use core::fmt;
use core::str::FromStr;

use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

use crate::context::Context;
use crate::types::KeyMap;

/// A TeX length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DimensionUnit {
    /// TeX point
    #[default]
    Pt,
    /// millimeter
    Mm,
    /// centimeter
    Cm,
    /// x-height of the current font
    Ex,
    /// treated as a big point
    Px,
    /// quad of the current font
    Em,
    /// big (PostScript) point
    Bp,
    /// didot
    Dd,
    /// pica
    Pc,
    /// inch
    In,
    /// math unit, 1/18 em of the current math font
    Mu,
    /// first-order infinite glue
    Fil,
    /// second-order infinite glue
    Fill,
    /// third-order infinite glue
    Filll,
}

impl DimensionUnit {
    /// TeX points per unit for absolute units.
    #[must_use]
    pub const fn pt_per_unit(self) -> Option<f64> {
        match self {
            Self::Pt => Some(1.0),
            Self::Mm => Some(7227.0 / 2540.0),
            Self::Cm => Some(7227.0 / 254.0),
            Self::In => Some(72.27),
            Self::Bp | Self::Px => Some(803.0 / 800.0),
            Self::Pc => Some(12.0),
            Self::Dd => Some(1238.0 / 1157.0),
            _ => None,
        }
    }

    /// Returns `true` for `fil`, `fill` and `filll`.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Fil | Self::Fill | Self::Filll)
    }
}

/// A length: a number and a unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Magnitude.
    pub dimension: f64,
    /// Unit, `pt` by default.
    pub unit: DimensionUnit,
}

impl Dimension {
    /// Creates a dimension.
    #[must_use]
    pub const fn new(dimension: f64, unit: DimensionUnit) -> Self {
        Self { dimension, unit }
    }

    /// Creates a dimension in points.
    #[must_use]
    pub const fn pt(dimension: f64) -> Self {
        Self::new(dimension, DimensionUnit::Pt)
    }

    /// Creates a dimension in math units.
    #[must_use]
    pub const fn mu(dimension: f64) -> Self {
        Self::new(dimension, DimensionUnit::Mu)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.dimension, self.unit)
    }
}

/// Flexible space: a natural size that may shrink or grow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glue {
    /// Natural size.
    pub glue: Dimension,
    /// How much it may shrink.
    pub shrink: Option<Dimension>,
    /// How much it may grow.
    pub grow: Option<Dimension>,
}

impl Glue {
    /// Glue with no stretch or shrink.
    #[must_use]
    pub const fn fixed(glue: Dimension) -> Self {
        Self {
            glue,
            shrink: None,
            grow: None,
        }
    }
}

impl fmt::Display for Glue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glue)?;
        if let Some(grow) = self.grow {
            write!(f, " plus {grow}")?;
        }
        if let Some(shrink) = self.shrink {
            write!(f, " minus {shrink}")?;
        }
        Ok(())
    }
}

/// Failure to read a dimension or glue from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// No number at the start of the text.
    #[error("invalid number in '{0}'")]
    InvalidNumber(String),
    /// A number without a recognized unit.
    #[error("missing or unknown unit in '{0}'")]
    MissingUnit(String),
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | ' ')))
            .unwrap_or(s.len());
        let number = s[..split].replace(' ', "");
        let dimension = match number.as_str() {
            "" | "-" | "+" => return Err(UnitError::InvalidNumber(s.to_owned())),
            n => n
                .parse::<f64>()
                .map_err(|_| UnitError::InvalidNumber(s.to_owned()))?,
        };
        let unit = DimensionUnit::from_str(s[split..].trim())
            .map_err(|_| UnitError::MissingUnit(s.to_owned()))?;
        Ok(Self { dimension, unit })
    }
}

impl FromStr for Glue {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, shrink) = match s.split_once("minus") {
            Some((rest, shrink)) => (rest, Some(shrink.parse()?)),
            None => (s, None),
        };
        let (natural, grow) = match rest.split_once("plus") {
            Some((natural, grow)) => (natural, Some(grow.parse()?)),
            None => (rest, None),
        };
        Ok(Self {
            glue: natural.parse()?,
            shrink,
            grow,
        })
    }
}

/// The value of a register.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegisterValue {
    /// A length.
    Dimension(Dimension),
    /// Flexible space.
    Glue(Glue),
    /// A plain number.
    Number(f64),
    /// Any other setting.
    String(String),
}

impl RegisterValue {
    /// The natural size, for dimensions and glue.
    #[must_use]
    pub const fn as_dimension(&self) -> Option<Dimension> {
        match self {
            Self::Dimension(d) => Some(*d),
            Self::Glue(g) => Some(g.glue),
            _ => None,
        }
    }

    /// The value as glue, promoting dimensions.
    #[must_use]
    pub const fn as_glue(&self) -> Option<Glue> {
        match self {
            Self::Dimension(d) => Some(Glue::fixed(*d)),
            Self::Glue(g) => Some(*g),
            _ => None,
        }
    }

    /// The value as a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Named TeX parameters, keyed without the backslash.
pub type Registers = KeyMap<String, RegisterValue>;

/// The registers every layout starts with.
#[must_use]
pub fn default_registers() -> Registers {
    let glue = |natural: f64, grow: Option<f64>, shrink: Option<f64>| {
        RegisterValue::Glue(Glue {
            glue: Dimension::mu(natural),
            grow: grow.map(Dimension::mu),
            shrink: shrink.map(Dimension::mu),
        })
    };
    let pt = |value: f64| RegisterValue::Dimension(Dimension::pt(value));
    [
        ("thinmuskip", glue(3.0, None, None)),
        ("medmuskip", glue(4.0, Some(2.0), Some(4.0))),
        ("thickmuskip", glue(5.0, Some(5.0), None)),
        ("nulldelimiterspace", pt(1.2)),
        ("delimitershortfall", pt(5.0)),
        ("delimiterfactor", RegisterValue::Number(901.0)),
        ("scriptspace", pt(0.5)),
        ("arraycolsep", pt(5.0)),
        ("arrayrulewidth", pt(0.4)),
        ("doublerulesep", pt(2.0)),
        ("arraystretch", RegisterValue::Number(1.0)),
        ("jot", pt(3.0)),
        ("fboxsep", pt(3.0)),
        ("fboxrule", pt(0.4)),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_owned(), value))
    .collect()
}

impl Context<'_> {
    /// Converts a dimension to base-font ems under this context.
    ///
    /// Absolute units ignore the current size; `em` and `ex` follow the text
    /// font at the current size; `mu` follows the current math style.
    /// Infinite units have no natural size.
    #[must_use]
    pub fn to_em(&self, dim: Dimension) -> f64 {
        let metrics = self.font_metrics();
        let scale = if let Some(pt) = dim.unit.pt_per_unit() {
            pt / metrics.pt_per_em
        } else {
            match dim.unit {
                DimensionUnit::Mu => metrics.quad / 18.0,
                DimensionUnit::Em => self.size_scale(),
                DimensionUnit::Ex => self.text_metrics().x_height,
                _ => 0.0,
            }
        };
        dim.dimension * scale
    }

    /// Converts the natural size of `name`, or `0` if it is not a length.
    #[must_use]
    pub fn register_em(&self, name: &str) -> f64 {
        self.global
            .registers
            .get(name)
            .and_then(RegisterValue::as_dimension)
            .map_or(0.0, |d| self.to_em(d))
    }

    /// Reads a numeric register.
    #[must_use]
    pub fn register_number(&self, name: &str) -> Option<f64> {
        self.global
            .registers
            .get(name)
            .and_then(RegisterValue::as_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::sync::Arc;
    use crate::context::GlobalContext;
    use crate::font_metrics::{
        BuiltinMetrics, CharacterMetrics, FontFamily, FontMetrics, MetricsProvider,
        SIGMAS_AND_XIS,
    };
    use crate::style::{SCRIPT, TEXT};

    #[test]
    fn dimensions_parse_from_text() {
        assert_eq!("3mu".parse(), Ok(Dimension::mu(3.0)));
        assert_eq!("-1.5 em".parse(), Ok(Dimension::new(-1.5, DimensionUnit::Em)));
        assert_eq!(
            "2".parse::<Dimension>(),
            Err(UnitError::MissingUnit("2".to_owned()))
        );
        assert!(matches!("pt".parse::<Dimension>(), Err(UnitError::InvalidNumber(_))));
    }

    #[test]
    fn glue_parses_plus_and_minus() {
        let glue: Glue = "4mu plus 2mu minus 4mu".parse().unwrap_or_default();
        assert_eq!(glue.glue, Dimension::mu(4.0));
        assert_eq!(glue.grow, Some(Dimension::mu(2.0)));
        assert_eq!(glue.shrink, Some(Dimension::mu(4.0)));
        assert_eq!(glue.to_string(), "4mu plus 2mu minus 4mu");
    }

    #[test]
    fn conversion_to_ems() {
        let global = GlobalContext::default();
        let ctx = Context::new(&global, TEXT);
        assert!((ctx.to_em(Dimension::pt(10.0)) - 1.0).abs() < 1e-9);
        assert!((ctx.to_em(Dimension::mu(18.0)) - 1.0).abs() < 1e-9);
        assert!((ctx.to_em(Dimension::new(1.0, DimensionUnit::Ex)) - 0.431).abs() < 1e-9);
        assert!(ctx.to_em(Dimension::new(1.0, DimensionUnit::Fill)).abs() < 1e-9);

        // points are absolute, math units shrink with the style
        let script = ctx.having_style(SCRIPT);
        assert!((script.to_em(Dimension::pt(10.0)) - 1.0).abs() < 1e-9);
        assert!(script.to_em(Dimension::mu(18.0)) < 1.0);
    }

    #[derive(Debug)]
    struct TallX(FontMetrics);

    impl MetricsProvider for TallX {
        fn lookup(&self, family: FontFamily, glyph: char) -> Option<CharacterMetrics> {
            BuiltinMetrics.lookup(family, glyph)
        }

        fn font_metrics(&self, _size_index: usize) -> &FontMetrics {
            &self.0
        }
    }

    #[test]
    fn ex_follows_the_metrics_provider() {
        let metrics: Arc<dyn MetricsProvider> = Arc::new(TallX(FontMetrics {
            x_height: 0.5,
            ..SIGMAS_AND_XIS[0]
        }));
        let global = GlobalContext::builder().metrics(metrics).build();
        let ctx = Context::new(&global, TEXT);
        assert!((ctx.to_em(Dimension::new(2.0, DimensionUnit::Ex)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_registers_resolve() {
        let registers = default_registers();
        assert_eq!(
            registers.get("medmuskip").and_then(RegisterValue::as_glue),
            "4mu plus 2mu minus 4mu".parse().ok()
        );
        assert_eq!(
            registers.get("delimiterfactor").and_then(RegisterValue::as_number),
            Some(901.0)
        );
    }
}
