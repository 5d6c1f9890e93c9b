//! The box tree produced by the layout engine.
//!
//! A [`MathBox`] is a measured rectangle around a baseline. Leaf boxes carry a
//! glyph run or a rule; inner boxes arrange their children either in a row
//! (left to right on a common baseline) or in a stack (each child at its own
//! offset). Dimensions are in ems of the base font and are final once a box
//! has been wrapped by its parent.

use strum::{AsRefStr, Display};

use crate::font_metrics::FontFamily;
use crate::spacing_data::AtomClass;

/// What a box represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxType {
    /// Ordinary content.
    Ord,
    /// Binary operator.
    Bin,
    /// Large operator.
    Op,
    /// Relation.
    Rel,
    /// Opening delimiter.
    Open,
    /// Closing delimiter.
    Close,
    /// Punctuation.
    Punct,
    /// Inner formula.
    Inner,
    /// Explicit or inter-atom space.
    Spacing,
    /// Source that failed to parse.
    Error,
    /// A slot to be filled in.
    Placeholder,
    /// A base with scripts.
    SupSub,
    /// Anything assembled from other boxes.
    Composite,
    /// A filled rectangle: fraction bars, overlines, radical vincula.
    Rule,
}

impl From<AtomClass> for BoxType {
    fn from(class: AtomClass) -> Self {
        match class {
            AtomClass::Ord => Self::Ord,
            AtomClass::Op => Self::Op,
            AtomClass::Bin => Self::Bin,
            AtomClass::Rel => Self::Rel,
            AtomClass::Open => Self::Open,
            AtomClass::Close => Self::Close,
            AtomClass::Punct => Self::Punct,
            AtomClass::Inner => Self::Inner,
        }
    }
}

/// How the children of a box are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrangement {
    /// Left to right; each child is moved down by its `shift`.
    #[default]
    Row,
    /// Each child at `left` from the box's left edge, with its baseline
    /// `shift` below the box's baseline.
    Stack,
}

/// Text drawn by a leaf box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphRun {
    /// The characters.
    pub text: String,
    /// Font family.
    pub family: FontFamily,
    /// Scale relative to the base font.
    pub scale: f64,
}

/// A node of the box tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MathBox {
    /// What the box represents.
    pub kind: BoxType,
    /// Spacing class of the box as seen by its neighbours, if it takes part
    /// in inter-atom spacing.
    pub class: Option<AtomClass>,
    /// Whether the box was laid out in script or scriptscript style.
    pub tight: bool,
    /// Placement of `children`.
    pub arrangement: Arrangement,
    /// Children, in drawing order.
    pub children: Vec<Self>,
    /// Glyph payload of a leaf box.
    pub glyph: Option<GlyphRun>,
    /// Advance width.
    pub width: f64,
    /// Extent above the baseline, never negative.
    pub height: f64,
    /// Extent below the baseline, never negative.
    pub depth: f64,
    /// Horizontal offset for accents.
    pub skew: f64,
    /// Italic correction.
    pub italic: f64,
    /// Downward offset of the baseline in the parent.
    pub shift: f64,
    /// Horizontal offset in a [`Arrangement::Stack`] parent.
    pub left: f64,
    /// Presentation hints.
    pub classes: Vec<String>,
    /// Foreground colour.
    pub color: Option<String>,
    /// Background colour.
    pub background_color: Option<String>,
    /// Id of the atom the box was laid out for.
    pub id: Option<String>,
}

impl Default for MathBox {
    fn default() -> Self {
        Self {
            kind: BoxType::Composite,
            class: None,
            tight: false,
            arrangement: Arrangement::Row,
            children: Vec::new(),
            glyph: None,
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            skew: 0.0,
            italic: 0.0,
            shift: 0.0,
            left: 0.0,
            classes: Vec::new(),
            color: None,
            background_color: None,
            id: None,
        }
    }
}

impl MathBox {
    /// A row of boxes, measured from its children.
    #[must_use]
    pub fn row(children: Vec<Self>) -> Self {
        let mut result = Self {
            children,
            ..Self::default()
        };
        result.measure();
        result
    }

    /// A stack of positioned boxes, measured from its children.
    #[must_use]
    pub fn stack(children: Vec<Self>) -> Self {
        let mut result = Self {
            arrangement: Arrangement::Stack,
            children,
            ..Self::default()
        };
        result.measure();
        result
    }

    /// Horizontal space.
    #[must_use]
    pub fn kern(width: f64) -> Self {
        Self {
            kind: BoxType::Spacing,
            width,
            ..Self::default()
        }
    }

    /// A filled rectangle.
    #[must_use]
    pub fn rule(width: f64, height: f64, depth: f64) -> Self {
        Self {
            kind: BoxType::Rule,
            width,
            height: height.max(0.0),
            depth: depth.max(0.0),
            ..Self::default()
        }
    }

    /// An empty box with the given dimensions.
    #[must_use]
    pub fn strut(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height: height.max(0.0),
            depth: depth.max(0.0),
            ..Self::default()
        }
    }

    /// Recomputes width, height and depth from the children.
    ///
    /// A row is as wide as its children together; a stack as wide as its
    /// rightmost child edge. Height and depth cover every child after its
    /// shift and are clamped at zero.
    pub fn measure(&mut self) {
        let mut height = 0.0_f64;
        let mut depth = 0.0_f64;
        let mut width = 0.0_f64;
        for child in &self.children {
            height = height.max(child.height - child.shift);
            depth = depth.max(child.depth + child.shift);
            match self.arrangement {
                Arrangement::Row => width += child.width,
                Arrangement::Stack => width = width.max(child.left + child.width),
            }
        }
        self.width = width;
        self.height = height;
        self.depth = depth;
        if let Some(last) = self.children.last()
            && self.arrangement == Arrangement::Row
        {
            self.italic = last.italic;
        }
    }

    /// Sets the box type and spacing class.
    #[must_use]
    pub fn with_class(mut self, class: AtomClass) -> Self {
        self.kind = class.into();
        self.class = Some(class);
        self
    }

    /// Sets the box type, keeping the spacing class.
    #[must_use]
    pub const fn with_kind(mut self, kind: BoxType) -> Self {
        self.kind = kind;
        self
    }

    /// Adds a presentation hint.
    #[must_use]
    pub fn with_hint(mut self, class: &str) -> Self {
        self.classes.push(class.to_owned());
        self
    }

    /// Moves the box down by `shift` within its parent.
    #[must_use]
    pub fn shifted(mut self, shift: f64) -> Self {
        self.shift += shift;
        self
    }

    /// Total vertical extent.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.height + self.depth
    }

    /// Returns `true` for a leaf that draws nothing and takes no space.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
            && self.glyph.is_none()
            && self.kind != BoxType::Rule
            && self.width == 0.0
            && self.height == 0.0
            && self.depth == 0.0
    }

    /// The number of boxes in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Boxes of this subtree in depth-first pre-order.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Self> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(b) = stack.pop() {
            result.push(b);
            stack.extend(b.children.iter().rev());
        }
        result
    }

    /// Concatenated glyph text of this subtree.
    #[must_use]
    pub fn text(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|b| b.glyph.as_ref())
            .map(|g| g.text.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(width: f64, height: f64, depth: f64) -> MathBox {
        MathBox {
            kind: BoxType::Ord,
            width,
            height,
            depth,
            ..MathBox::default()
        }
    }

    #[test]
    fn rows_add_widths() {
        let row = MathBox::row(vec![leaf(1.0, 0.5, 0.1), MathBox::kern(0.25), leaf(2.0, 0.7, 0.0)]);
        assert_eq!(row.width, 3.25);
        assert_eq!(row.height, 0.7);
        assert_eq!(row.depth, 0.1);
        assert_eq!(row.count(), 4);
    }

    #[test]
    fn shifts_move_extents() {
        let raised = leaf(1.0, 0.5, 0.1).shifted(-0.4);
        let lowered = leaf(1.0, 0.5, 0.1).shifted(0.3);
        let row = MathBox::row(vec![raised, lowered]);
        assert!((row.height - 0.9).abs() < 1e-9);
        assert!((row.depth - 0.4).abs() < 1e-9);
    }

    #[test]
    fn extents_never_go_negative() {
        let far_up = leaf(1.0, 0.5, 0.0).shifted(-2.0);
        let row = MathBox::row(vec![far_up]);
        assert_eq!(row.depth, 0.0);
        assert_eq!(MathBox::rule(1.0, -0.1, -0.2).total_height(), 0.0);
    }

    #[test]
    fn stacks_take_the_widest_child() {
        let mut top = leaf(1.0, 0.5, 0.0).shifted(-1.0);
        top.left = 0.5;
        let stack = MathBox::stack(vec![top, leaf(1.2, 0.5, 0.0)]);
        assert_eq!(stack.width, 1.5);
        assert_eq!(stack.height, 1.5);
    }

    #[test]
    fn class_sets_kind() {
        let b = leaf(1.0, 0.0, 0.0).with_class(AtomClass::Rel);
        assert_eq!(b.kind, BoxType::Rel);
        assert_eq!(b.class, Some(AtomClass::Rel));
        assert_eq!(BoxType::SupSub.as_ref(), "sup-sub");
    }
}
