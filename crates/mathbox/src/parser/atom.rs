//! The atom tree produced by the parser.
//!
//! Atoms live in an arena, [`AtomTree`], and refer to each other by
//! [`AtomId`]. Child lists own their atoms in the sense that every atom
//! appears in exactly one child slot; the `parent` index of an [`Atom`] is a
//! non-owning back-reference for upward queries only.

use core::ops::Index;

use strum::{AsRefStr, Display, EnumDiscriminants, EnumIter, EnumString};

use crate::spacing_data::AtomClass;
use crate::style::MathstyleName;
use crate::types::{Mode, ParseErrorCode, SourceLocation};
use crate::units::{Dimension, Glue};

/// Index of an atom in its [`AtomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomId(pub usize);

/// A font variant selected by `\mathbb`, `\mathcal` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Roman, the default.
    #[default]
    Normal,
    /// Blackboard bold.
    DoubleStruck,
    /// Calligraphic capitals.
    Calligraphic,
    /// Fraktur.
    Fraktur,
    /// Script.
    Script,
    /// Typewriter.
    Monospace,
    /// Sans serif.
    SansSerif,
}

/// Weight and slant on top of a [`Variant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantStyle {
    /// Upright.
    Up,
    /// Bold upright.
    Bold,
    /// Italic.
    Italic,
    /// Bold italic.
    BoldItalic,
}

/// Sparse style overrides carried by an atom. Absent fields are inherited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Foreground colour name or value.
    pub color: Option<String>,
    /// Background colour name or value.
    pub background_color: Option<String>,
    /// Font variant.
    pub variant: Option<Variant>,
    /// Weight and slant.
    pub variant_style: Option<VariantStyle>,
    /// Font size, `1..=10`.
    pub font_size: Option<u8>,
}

impl Style {
    /// `other` layered over `self`: fields set in `other` win.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        Self {
            color: other.color.clone().or_else(|| self.color.clone()),
            background_color: other
                .background_color
                .clone()
                .or_else(|| self.background_color.clone()),
            variant: other.variant.or(self.variant),
            variant_style: other.variant_style.or(self.variant_style),
            font_size: other.font_size.or(self.font_size),
        }
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// How an operator places its limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Limits {
    /// Above and below in display style for operators that default to it,
    /// as scripts otherwise.
    #[default]
    Auto,
    /// Always above and below (`\limits`).
    Limits,
    /// Always as scripts (`\nolimits`).
    NoLimits,
}

/// What an operator draws.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OperatorName {
    /// A large symbol such as `∑`.
    Glyph(char),
    /// A function name such as `sin`, set in roman.
    Text(String),
    /// The parsed argument of `\operatorname`.
    Body(Vec<AtomId>),
}

/// Which dimensions of a phantom's body are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhantomKind {
    /// `\phantom`: all of them, invisibly.
    Full,
    /// `\hphantom`: only the width.
    Horizontal,
    /// `\vphantom`: only height and depth.
    Vertical,
    /// `\smash`: the body is drawn with no height or depth.
    Smash,
}

/// Horizontal alignment of an array column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnAlign {
    /// `l`
    Left,
    /// `c`
    Center,
    /// `r`
    Right,
}

/// One element of an array column specification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnSpec {
    /// A content column.
    Column(ColumnAlign),
    /// A vertical rule, `|` or dashed `:`.
    Rule {
        /// Whether the rule is dashed.
        dashed: bool,
    },
    /// An `@{...}` gap replacing the inter-column space.
    Gap(Vec<AtomId>),
}

/// An amount of explicit space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpacingAmount {
    /// The natural size of a register, possibly negated.
    Register {
        /// Register name, without backslash.
        name: String,
        /// Whether the space is subtracted.
        negative: bool,
    },
    /// A literal amount.
    Glue(Glue),
}

/// The construct an atom represents.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(vis(pub))]
#[strum_discriminants(doc = "The variant of an [`AtomKind`], without its fields")]
#[strum_discriminants(derive(Display, Hash, AsRefStr, EnumIter), strum(serialize_all = "kebab-case"))]
#[strum_discriminants(name(AtomType))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AtomKind {
    /// A sequence of atoms; `{...}` when `braced`, otherwise the root.
    Group {
        /// Children in reading order.
        body: Vec<AtomId>,
        /// Whether the group was written with braces.
        braced: bool,
    },
    /// A single glyph: a letter, digit or symbol command.
    Symbol {
        /// Spacing class.
        class: AtomClass,
        /// The glyph.
        value: char,
        /// The command that produced it, if any.
        command: Option<String>,
    },
    /// A large operator or a function name.
    Operator {
        /// The command that produced it.
        command: String,
        /// What to draw.
        name: OperatorName,
        /// Limits placement.
        limits: Limits,
        /// Whether [`Limits::Auto`] means limits in display style.
        display_limits: bool,
    },
    /// A base with superscript and/or subscript.
    SupSub {
        /// The base; `None` for scripts with nothing before them.
        base: Option<AtomId>,
        /// Superscript.
        sup: Option<AtomId>,
        /// Subscript.
        sub: Option<AtomId>,
    },
    /// A fraction or any generalized fraction.
    Fraction {
        /// The command, such as `\frac`, `\binom` or `\over`.
        command: String,
        /// Numerator.
        numer: AtomId,
        /// Denominator.
        denom: AtomId,
        /// Whether a bar is drawn between them.
        has_bar: bool,
        /// Bar thickness, when not the default rule thickness.
        bar_size: Option<Dimension>,
        /// Left delimiter.
        left_delim: Option<String>,
        /// Right delimiter.
        right_delim: Option<String>,
        /// Forced math style.
        mathstyle: Option<MathstyleName>,
        /// `\cfrac`: numerator in display style, strut-aligned.
        continued: bool,
        /// Written in infix form, `{a \over b}`.
        infix: bool,
    },
    /// A square root, with optional index.
    Radical {
        /// The radicand.
        body: AtomId,
        /// The index, `\sqrt[3]{..}`.
        index: Option<AtomId>,
    },
    /// An accent over a base.
    Accent {
        /// The command, `\hat` for instance.
        command: String,
        /// Accent glyph.
        accent: char,
        /// Whether the accent stretches.
        wide: bool,
        /// The accented base.
        base: AtomId,
    },
    /// `\overline`
    Overline {
        /// The body.
        body: AtomId,
    },
    /// `\underline`
    Underline {
        /// The body.
        body: AtomId,
    },
    /// `\left..\right`, or a smart fence.
    LeftRight {
        /// Left delimiter; `.` for none.
        left: String,
        /// Right delimiter; `.` for none.
        right: String,
        /// Content, possibly with `\middle` atoms.
        body: Vec<AtomId>,
    },
    /// `\middle` inside `\left..\right`.
    Middle {
        /// The delimiter.
        delim: String,
    },
    /// `\bigl(` and friends.
    SizedDelim {
        /// The command, `\Bigl` for instance.
        command: String,
        /// The delimiter.
        delim: String,
        /// Size, `1..=4`.
        size: u8,
        /// Spacing class.
        class: AtomClass,
    },
    /// Text-mode content in math.
    Text {
        /// The command, `\text` for instance.
        command: String,
        /// Text-mode atoms.
        body: Vec<AtomId>,
    },
    /// A font variant applied to the body. The variant is in the atom's
    /// style.
    Font {
        /// The command, `\mathbf` for instance.
        command: String,
        /// The body.
        body: Vec<AtomId>,
    },
    /// A colour applied to the body. The colour is in the atom's style.
    Color {
        /// The command; `\color` applies to the rest of its group.
        command: String,
        /// The colour as written.
        color: String,
        /// The coloured atoms.
        body: Vec<AtomId>,
    },
    /// `\displaystyle` and friends, applied to the rest of the group.
    Styling {
        /// The forced style.
        mathstyle: MathstyleName,
        /// The styled atoms.
        body: Vec<AtomId>,
    },
    /// `\tiny` .. `\Huge`, applied to the rest of the group.
    Sizing {
        /// The command.
        command: String,
        /// Font size, `1..=10`.
        size: u8,
        /// The sized atoms.
        body: Vec<AtomId>,
    },
    /// Explicit space.
    Spacing {
        /// The command, `\,` or `\hspace` for instance.
        command: String,
        /// The amount.
        amount: SpacingAmount,
    },
    /// An array-like environment.
    Array {
        /// Environment name.
        environment: String,
        /// Column specification.
        colspec: Vec<ColumnSpec>,
        /// The colspec argument as written, for `array`.
        colspec_latex: Option<String>,
        /// Cells, each a group atom.
        rows: Vec<Vec<AtomId>>,
        /// Left fence.
        left_delim: Option<String>,
        /// Right fence.
        right_delim: Option<String>,
        /// Forced style of the cells.
        mathstyle: Option<MathstyleName>,
        /// Whether rows get `\jot` of extra space.
        jot: bool,
    },
    /// A slot to be filled in.
    Placeholder {
        /// Initial content, if any.
        value: Option<String>,
    },
    /// Source that could not be parsed, kept verbatim.
    Error {
        /// The reported condition.
        code: ParseErrorCode,
        /// The offending source.
        latex: String,
    },
    /// One token of verbatim LaTeX.
    Latex {
        /// The token text.
        value: String,
    },
    /// A macro kept as a unit instead of being spliced in.
    Macro {
        /// The command.
        command: String,
        /// The arguments as written, with their braces.
        args: String,
        /// The parsed expansion.
        body: Vec<AtomId>,
        /// Whether an editor selects the macro as a whole.
        capture_selection: bool,
    },
    /// `\phantom` and friends.
    Phantom {
        /// Which dimensions are kept.
        kind: PhantomKind,
        /// The body.
        body: AtomId,
    },
    /// `\boxed`, `\colorbox`, `\fcolorbox`.
    Boxed {
        /// The command.
        command: String,
        /// The body.
        body: AtomId,
        /// Background colour.
        background: Option<String>,
        /// Border colour, when a frame is drawn.
        border: Option<String>,
    },
    /// `\class` and `\cssId`.
    Html {
        /// The command.
        command: String,
        /// The class or id value.
        value: String,
        /// The body.
        body: Vec<AtomId>,
    },
    /// `\mathord` and friends: the body with an explicit spacing class.
    Mclass {
        /// The command.
        command: String,
        /// Spacing class.
        class: AtomClass,
        /// The body.
        body: Vec<AtomId>,
    },
}

impl AtomKind {
    /// Direct children, in reading order.
    #[must_use]
    pub fn children(&self) -> Vec<AtomId> {
        match self {
            Self::Group { body, .. }
            | Self::LeftRight { body, .. }
            | Self::Text { body, .. }
            | Self::Font { body, .. }
            | Self::Color { body, .. }
            | Self::Styling { body, .. }
            | Self::Sizing { body, .. }
            | Self::Macro { body, .. }
            | Self::Html { body, .. }
            | Self::Mclass { body, .. } => body.clone(),
            Self::Operator { name, .. } => match name {
                OperatorName::Body(body) => body.clone(),
                _ => Vec::new(),
            },
            Self::SupSub { base, sup, sub } => [*base, *sup, *sub].into_iter().flatten().collect(),
            Self::Fraction { numer, denom, .. } => vec![*numer, *denom],
            Self::Radical { body, index } => index.iter().copied().chain([*body]).collect(),
            Self::Accent { base: body, .. }
            | Self::Overline { body }
            | Self::Underline { body }
            | Self::Phantom { body, .. }
            | Self::Boxed { body, .. } => vec![*body],
            Self::Array { colspec, rows, .. } => colspec
                .iter()
                .filter_map(|spec| match spec {
                    ColumnSpec::Gap(gap) => Some(gap.iter().copied()),
                    _ => None,
                })
                .flatten()
                .chain(rows.iter().flatten().copied())
                .collect(),
            Self::Symbol { .. }
            | Self::Middle { .. }
            | Self::SizedDelim { .. }
            | Self::Spacing { .. }
            | Self::Placeholder { .. }
            | Self::Error { .. }
            | Self::Latex { .. } => Vec::new(),
        }
    }
}

/// A node of the atom tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atom {
    /// What the atom represents.
    pub kind: AtomKind,
    /// Mode the atom was parsed in.
    pub mode: Mode,
    /// Style overrides.
    pub style: Style,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The atom whose child slot holds this one.
    pub parent: Option<AtomId>,
}

impl Atom {
    /// The variant of the atom's kind.
    #[must_use]
    pub fn atom_type(&self) -> AtomType {
        AtomType::from(&self.kind)
    }
}

/// An arena of atoms with a designated root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomTree {
    atoms: Vec<Atom>,
    root: AtomId,
}

impl Default for AtomTree {
    fn default() -> Self {
        let root = Atom {
            kind: AtomKind::Group {
                body: Vec::new(),
                braced: false,
            },
            mode: Mode::Math,
            style: Style::default(),
            loc: None,
            parent: None,
        };
        Self {
            atoms: vec![root],
            root: AtomId(0),
        }
    }
}

impl Index<AtomId> for AtomTree {
    type Output = Atom;

    fn index(&self, id: AtomId) -> &Atom {
        &self.atoms[id.0]
    }
}

impl AtomTree {
    /// Adds an atom and makes it the parent of its children.
    pub fn push(&mut self, kind: AtomKind, mode: Mode, loc: Option<SourceLocation>) -> AtomId {
        self.push_styled(kind, mode, Style::default(), loc)
    }

    /// Adds an atom with style overrides.
    pub fn push_styled(
        &mut self,
        kind: AtomKind,
        mode: Mode,
        style: Style,
        loc: Option<SourceLocation>,
    ) -> AtomId {
        let id = AtomId(self.atoms.len());
        for child in kind.children() {
            if let Some(atom) = self.atoms.get_mut(child.0) {
                atom.parent = Some(id);
            }
        }
        self.atoms.push(Atom {
            kind,
            mode,
            style,
            loc,
            parent: None,
        });
        id
    }

    /// Looks up an atom.
    #[must_use]
    pub fn get(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id.0)
    }

    /// Looks up an atom for editing.
    ///
    /// Editing the child slots of an atom does not update back-references;
    /// use [`AtomTree::push`] to build new structure.
    pub fn get_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id.0)
    }

    /// The root atom.
    #[must_use]
    pub const fn root(&self) -> AtomId {
        self.root
    }

    /// Makes `id` the root.
    pub fn set_root(&mut self, id: AtomId) {
        if let Some(atom) = self.atoms.get_mut(id.0) {
            atom.parent = None;
        }
        self.root = id;
    }

    /// The parent of `id`, if it is not the root.
    #[must_use]
    pub fn parent(&self, id: AtomId) -> Option<AtomId> {
        self.get(id).and_then(|atom| atom.parent)
    }

    /// Number of atoms in the arena, including any orphaned by parsing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` if the root has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self[self.root].kind.children().is_empty()
    }

    /// Atoms reachable from the root, in depth-first pre-order.
    #[must_use]
    pub fn descendants(&self) -> Vec<AtomId> {
        let mut result = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            result.push(id);
            if let Some(atom) = self.get(id) {
                stack.extend(atom.kind.children().into_iter().rev());
            }
        }
        result
    }

    /// The atoms of a given type reachable from the root.
    #[must_use]
    pub fn find(&self, atom_type: AtomType) -> Vec<AtomId> {
        self.descendants()
            .into_iter()
            .filter(|id| self[*id].atom_type() == atom_type)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(tree: &mut AtomTree, ch: char) -> AtomId {
        tree.push(
            AtomKind::Symbol {
                class: AtomClass::Ord,
                value: ch,
                command: None,
            },
            Mode::Math,
            None,
        )
    }

    #[test]
    fn pushing_sets_back_references() {
        let mut tree = AtomTree::default();
        let x = symbol(&mut tree, 'x');
        let two = symbol(&mut tree, '2');
        let supsub = tree.push(
            AtomKind::SupSub {
                base: Some(x),
                sup: Some(two),
                sub: None,
            },
            Mode::Math,
            None,
        );
        let root = tree.push(
            AtomKind::Group {
                body: vec![supsub],
                braced: false,
            },
            Mode::Math,
            None,
        );
        tree.set_root(root);

        assert_eq!(tree.parent(x), Some(supsub));
        assert_eq!(tree.parent(two), Some(supsub));
        assert_eq!(tree.parent(supsub), Some(root));
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.descendants(), vec![root, supsub, x, two]);
        assert_eq!(tree.find(AtomType::Symbol), vec![x, two]);
        assert_eq!(tree[supsub].atom_type().as_ref(), "sup-sub");
    }

    #[test]
    fn styles_merge_field_by_field() {
        let outer = Style {
            color: Some("red".to_owned()),
            variant: Some(Variant::Fraktur),
            ..Style::default()
        };
        let inner = Style {
            color: Some("blue".to_owned()),
            font_size: Some(7),
            ..Style::default()
        };
        let merged = outer.merged(&inner);
        assert_eq!(merged.color.as_deref(), Some("blue"));
        assert_eq!(merged.variant, Some(Variant::Fraktur));
        assert_eq!(merged.font_size, Some(7));
        assert!(Style::default().is_empty());
    }

    #[test]
    fn default_tree_is_empty() {
        let tree = AtomTree::default();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 1);
    }
}
