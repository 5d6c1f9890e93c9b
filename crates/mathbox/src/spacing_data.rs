//! The TeX inter-atom spacing table.
//!
//! Space between two adjacent atoms depends only on their classes and on
//! whether the current style is tight (script or scriptscript). The amounts
//! are symbolic; they resolve through the `thinmuskip`, `medmuskip` and
//! `thickmuskip` registers, so a caller can retune them.

use phf::{Map, phf_map};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Atom class types for spacing relationships.
///
/// The spacing between atoms depends on their classes according to the rules
/// in [`SPACINGS`] and [`TIGHT_SPACINGS`] (TeXbook, chapter 18).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomClass {
    /// Ordinary atom (letters, digits, most symbols)
    #[strum(serialize = "mord")]
    Ord,
    /// Large operator (∑, ∏, ∫, `\sin`)
    #[strum(serialize = "mop")]
    Op,
    /// Binary operator (+, −, ×)
    #[strum(serialize = "mbin")]
    Bin,
    /// Relation (=, <, ⊂)
    #[strum(serialize = "mrel")]
    Rel,
    /// Opening delimiter
    #[strum(serialize = "mopen")]
    Open,
    /// Closing delimiter
    #[strum(serialize = "mclose")]
    Close,
    /// Punctuation
    #[strum(serialize = "mpunct")]
    Punct,
    /// Inner atom (fenced subformulas)
    #[strum(serialize = "minner")]
    Inner,
}

/// A symbolic amount of inter-atom space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Spacing {
    /// `\thinmuskip`, 3mu by default.
    Thin,
    /// `\medmuskip`, 4mu plus 2mu minus 4mu by default.
    Medium,
    /// `\thickmuskip`, 5mu plus 5mu by default.
    Thick,
}

impl Spacing {
    /// The register holding the amount.
    #[must_use]
    pub const fn register(self) -> &'static str {
        match self {
            Self::Thin => "thinmuskip",
            Self::Medium => "medmuskip",
            Self::Thick => "thickmuskip",
        }
    }
}

/// Spacing relationships keyed by left class, then right class.
pub type Spacings = Map<&'static str, Map<&'static str, Spacing>>;

/// Spacing in display and text styles.
///
/// | Left \ Right | Ord   | Op   | Bin | Rel   | Open | Close | Punct | Inner |
/// |--------------|-------|------|-----|-------|------|-------|-------|-------|
/// | Ord          | -     | thin | med | thick | -    | -     | -     | thin  |
/// | Op           | thin  | thin | -   | thick | -    | -     | -     | thin  |
/// | Bin          | med   | med  | -   | -     | med  | -     | -     | med   |
/// | Rel          | thick | thick| -   | -     | thick| -     | -     | thick |
/// | Open         | -     | -    | -   | -     | -    | -     | -     | -     |
/// | Close        | -     | thin | med | thick | -    | -     | -     | thin  |
/// | Punct        | thin  | thin | -   | thin  | thin | thin  | thin  | thin  |
/// | Inner        | thin  | thin | med | thick | thin | -     | thin  | thin  |
pub static SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => Spacing::Thin,
        "mbin" => Spacing::Medium,
        "mrel" => Spacing::Thick,
        "minner" => Spacing::Thin,
    },
    "mop" => phf_map! {
        "mord" => Spacing::Thin,
        "mop" => Spacing::Thin,
        "mrel" => Spacing::Thick,
        "minner" => Spacing::Thin,
    },
    "mbin" => phf_map! {
        "mord" => Spacing::Medium,
        "mop" => Spacing::Medium,
        "mopen" => Spacing::Medium,
        "minner" => Spacing::Medium,
    },
    "mrel" => phf_map! {
        "mord" => Spacing::Thick,
        "mop" => Spacing::Thick,
        "mopen" => Spacing::Thick,
        "minner" => Spacing::Thick,
    },
    "mopen" => phf_map! {},
    "mclose" => phf_map! {
        "mop" => Spacing::Thin,
        "mbin" => Spacing::Medium,
        "mrel" => Spacing::Thick,
        "minner" => Spacing::Thin,
    },
    "mpunct" => phf_map! {
        "mord" => Spacing::Thin,
        "mop" => Spacing::Thin,
        "mrel" => Spacing::Thin,
        "mopen" => Spacing::Thin,
        "mclose" => Spacing::Thin,
        "mpunct" => Spacing::Thin,
        "minner" => Spacing::Thin,
    },
    "minner" => phf_map! {
        "mord" => Spacing::Thin,
        "mop" => Spacing::Thin,
        "mbin" => Spacing::Medium,
        "mrel" => Spacing::Thick,
        "mopen" => Spacing::Thin,
        "mpunct" => Spacing::Thin,
        "minner" => Spacing::Thin,
    },
};

/// Spacing in script and scriptscript styles: only the entries TeX keeps in
/// every style.
pub static TIGHT_SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => Spacing::Thin,
    },
    "mop" => phf_map! {
        "mord" => Spacing::Thin,
        "mop" => Spacing::Thin,
    },
    "mbin" => phf_map! {},
    "mrel" => phf_map! {},
    "mopen" => phf_map! {},
    "mclose" => phf_map! {
        "mop" => Spacing::Thin,
    },
    "mpunct" => phf_map! {},
    "minner" => phf_map! {
        "mop" => Spacing::Thin,
    },
};

/// The space between a `left` atom and a `right` atom.
#[must_use]
pub fn spacing_between(left: AtomClass, right: AtomClass, tight: bool) -> Option<Spacing> {
    let table = if tight { &TIGHT_SPACINGS } else { &SPACINGS };
    table.get(left.as_ref())?.get(right.as_ref()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn every_class_has_a_row() {
        for class in AtomClass::iter() {
            assert!(SPACINGS.contains_key(class.as_ref()), "missing {class}");
            assert!(TIGHT_SPACINGS.contains_key(class.as_ref()), "missing {class}");
        }
    }

    #[test]
    fn table_entries() {
        use AtomClass::*;
        assert_eq!(spacing_between(Ord, Ord, false), None);
        assert_eq!(spacing_between(Ord, Bin, false), Some(Spacing::Medium));
        assert_eq!(spacing_between(Rel, Open, false), Some(Spacing::Thick));
        assert_eq!(spacing_between(Punct, Close, false), Some(Spacing::Thin));
        assert_eq!(spacing_between(Punct, Rel, false), Some(Spacing::Thin));
        assert_eq!(spacing_between(Punct, Rel, true), None);
        assert_eq!(spacing_between(Open, Inner, false), None);
        assert_eq!(spacing_between(Ord, Bin, true), None);
        assert_eq!(spacing_between(Op, Ord, true), Some(Spacing::Thin));
    }

    #[test]
    fn tight_table_is_a_subset() {
        for left in AtomClass::iter() {
            for right in AtomClass::iter() {
                if let Some(tight) = spacing_between(left, right, true) {
                    assert_eq!(spacing_between(left, right, false), Some(tight));
                }
            }
        }
    }

    #[test]
    fn amounts_name_their_registers() {
        let registers: Vec<_> = [Spacing::Thin, Spacing::Medium, Spacing::Thick]
            .into_iter()
            .map(Spacing::register)
            .collect();
        assert_eq!(registers, ["thinmuskip", "medmuskip", "thickmuskip"]);
        assert_eq!(AtomClass::iter().count(), 8);
    }
}
