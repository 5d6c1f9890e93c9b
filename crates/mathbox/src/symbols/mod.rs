//! Symbol tables.
//!
//! Static maps from LaTeX commands to glyphs, with the atom class each glyph
//! takes in math mode. Single characters typed directly are classified by
//! [`math_char`].

use std::sync::OnceLock;

use phf::phf_map;

use crate::spacing_data::AtomClass;
use crate::types::KeyMap;

/// Which font a symbol is drawn from by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolFont {
    /// The Computer Modern roman and math fonts.
    Main,
    /// The AMS symbol font.
    Ams,
}

/// What a symbol command stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Spacing class in math mode.
    pub class: AtomClass,
    /// The glyph.
    pub glyph: char,
    /// Default font.
    pub font: SymbolFont,
}

const fn sym(class: AtomClass, glyph: char, font: SymbolFont) -> SymbolInfo {
    SymbolInfo { class, glyph, font }
}

/// A large operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    /// The glyph for symbol operators such as `\sum`; `None` for named
    /// operators such as `\sin`, which are set in roman type.
    pub glyph: Option<char>,
    /// Whether limits go above and below in display style.
    pub limits: bool,
}

/// An accent command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentInfo {
    /// The accent glyph.
    pub glyph: char,
    /// Whether the accent stretches over its base.
    pub wide: bool,
}

/// Symbol commands available in math mode.
pub static MATH_SYMBOLS: phf::Map<&'static str, SymbolInfo> = phf_map! {
    "\\alpha" => sym(AtomClass::Ord, '\u{3b1}', SymbolFont::Main),
    "\\beta" => sym(AtomClass::Ord, '\u{3b2}', SymbolFont::Main),
    "\\gamma" => sym(AtomClass::Ord, '\u{3b3}', SymbolFont::Main),
    "\\delta" => sym(AtomClass::Ord, '\u{3b4}', SymbolFont::Main),
    "\\epsilon" => sym(AtomClass::Ord, '\u{3f5}', SymbolFont::Main),
    "\\varepsilon" => sym(AtomClass::Ord, '\u{3b5}', SymbolFont::Main),
    "\\zeta" => sym(AtomClass::Ord, '\u{3b6}', SymbolFont::Main),
    "\\eta" => sym(AtomClass::Ord, '\u{3b7}', SymbolFont::Main),
    "\\theta" => sym(AtomClass::Ord, '\u{3b8}', SymbolFont::Main),
    "\\vartheta" => sym(AtomClass::Ord, '\u{3d1}', SymbolFont::Main),
    "\\iota" => sym(AtomClass::Ord, '\u{3b9}', SymbolFont::Main),
    "\\kappa" => sym(AtomClass::Ord, '\u{3ba}', SymbolFont::Main),
    "\\lambda" => sym(AtomClass::Ord, '\u{3bb}', SymbolFont::Main),
    "\\mu" => sym(AtomClass::Ord, '\u{3bc}', SymbolFont::Main),
    "\\nu" => sym(AtomClass::Ord, '\u{3bd}', SymbolFont::Main),
    "\\xi" => sym(AtomClass::Ord, '\u{3be}', SymbolFont::Main),
    "\\omicron" => sym(AtomClass::Ord, '\u{3bf}', SymbolFont::Main),
    "\\pi" => sym(AtomClass::Ord, '\u{3c0}', SymbolFont::Main),
    "\\varpi" => sym(AtomClass::Ord, '\u{3d6}', SymbolFont::Main),
    "\\rho" => sym(AtomClass::Ord, '\u{3c1}', SymbolFont::Main),
    "\\varrho" => sym(AtomClass::Ord, '\u{3f1}', SymbolFont::Main),
    "\\sigma" => sym(AtomClass::Ord, '\u{3c3}', SymbolFont::Main),
    "\\varsigma" => sym(AtomClass::Ord, '\u{3c2}', SymbolFont::Main),
    "\\tau" => sym(AtomClass::Ord, '\u{3c4}', SymbolFont::Main),
    "\\upsilon" => sym(AtomClass::Ord, '\u{3c5}', SymbolFont::Main),
    "\\phi" => sym(AtomClass::Ord, '\u{3d5}', SymbolFont::Main),
    "\\varphi" => sym(AtomClass::Ord, '\u{3c6}', SymbolFont::Main),
    "\\chi" => sym(AtomClass::Ord, '\u{3c7}', SymbolFont::Main),
    "\\psi" => sym(AtomClass::Ord, '\u{3c8}', SymbolFont::Main),
    "\\omega" => sym(AtomClass::Ord, '\u{3c9}', SymbolFont::Main),
    "\\Gamma" => sym(AtomClass::Ord, '\u{393}', SymbolFont::Main),
    "\\Delta" => sym(AtomClass::Ord, '\u{394}', SymbolFont::Main),
    "\\Theta" => sym(AtomClass::Ord, '\u{398}', SymbolFont::Main),
    "\\Lambda" => sym(AtomClass::Ord, '\u{39b}', SymbolFont::Main),
    "\\Xi" => sym(AtomClass::Ord, '\u{39e}', SymbolFont::Main),
    "\\Pi" => sym(AtomClass::Ord, '\u{3a0}', SymbolFont::Main),
    "\\Sigma" => sym(AtomClass::Ord, '\u{3a3}', SymbolFont::Main),
    "\\Upsilon" => sym(AtomClass::Ord, '\u{3a5}', SymbolFont::Main),
    "\\Phi" => sym(AtomClass::Ord, '\u{3a6}', SymbolFont::Main),
    "\\Psi" => sym(AtomClass::Ord, '\u{3a8}', SymbolFont::Main),
    "\\Omega" => sym(AtomClass::Ord, '\u{3a9}', SymbolFont::Main),
    "\\pm" => sym(AtomClass::Bin, '\u{b1}', SymbolFont::Main),
    "\\mp" => sym(AtomClass::Bin, '\u{2213}', SymbolFont::Main),
    "\\times" => sym(AtomClass::Bin, '\u{d7}', SymbolFont::Main),
    "\\div" => sym(AtomClass::Bin, '\u{f7}', SymbolFont::Main),
    "\\cdot" => sym(AtomClass::Bin, '\u{22c5}', SymbolFont::Main),
    "\\ast" => sym(AtomClass::Bin, '\u{2217}', SymbolFont::Main),
    "\\star" => sym(AtomClass::Bin, '\u{22c6}', SymbolFont::Main),
    "\\circ" => sym(AtomClass::Bin, '\u{2218}', SymbolFont::Main),
    "\\bullet" => sym(AtomClass::Bin, '\u{2219}', SymbolFont::Main),
    "\\oplus" => sym(AtomClass::Bin, '\u{2295}', SymbolFont::Main),
    "\\ominus" => sym(AtomClass::Bin, '\u{2296}', SymbolFont::Main),
    "\\otimes" => sym(AtomClass::Bin, '\u{2297}', SymbolFont::Main),
    "\\oslash" => sym(AtomClass::Bin, '\u{2298}', SymbolFont::Main),
    "\\odot" => sym(AtomClass::Bin, '\u{2299}', SymbolFont::Main),
    "\\cup" => sym(AtomClass::Bin, '\u{222a}', SymbolFont::Main),
    "\\cap" => sym(AtomClass::Bin, '\u{2229}', SymbolFont::Main),
    "\\sqcup" => sym(AtomClass::Bin, '\u{2294}', SymbolFont::Main),
    "\\sqcap" => sym(AtomClass::Bin, '\u{2293}', SymbolFont::Main),
    "\\uplus" => sym(AtomClass::Bin, '\u{228e}', SymbolFont::Main),
    "\\wedge" => sym(AtomClass::Bin, '\u{2227}', SymbolFont::Main),
    "\\vee" => sym(AtomClass::Bin, '\u{2228}', SymbolFont::Main),
    "\\setminus" => sym(AtomClass::Bin, '\u{2216}', SymbolFont::Main),
    "\\wr" => sym(AtomClass::Bin, '\u{2240}', SymbolFont::Main),
    "\\diamond" => sym(AtomClass::Bin, '\u{22c4}', SymbolFont::Main),
    "\\bigtriangleup" => sym(AtomClass::Bin, '\u{25b3}', SymbolFont::Main),
    "\\bigtriangledown" => sym(AtomClass::Bin, '\u{25bd}', SymbolFont::Main),
    "\\dagger" => sym(AtomClass::Bin, '\u{2020}', SymbolFont::Main),
    "\\ddagger" => sym(AtomClass::Bin, '\u{2021}', SymbolFont::Main),
    "\\amalg" => sym(AtomClass::Bin, '\u{2a3f}', SymbolFont::Main),
    "\\leq" => sym(AtomClass::Rel, '\u{2264}', SymbolFont::Main),
    "\\geq" => sym(AtomClass::Rel, '\u{2265}', SymbolFont::Main),
    "\\neq" => sym(AtomClass::Rel, '\u{2260}', SymbolFont::Main),
    "\\equiv" => sym(AtomClass::Rel, '\u{2261}', SymbolFont::Main),
    "\\approx" => sym(AtomClass::Rel, '\u{2248}', SymbolFont::Main),
    "\\sim" => sym(AtomClass::Rel, '\u{223c}', SymbolFont::Main),
    "\\simeq" => sym(AtomClass::Rel, '\u{2243}', SymbolFont::Main),
    "\\cong" => sym(AtomClass::Rel, '\u{2245}', SymbolFont::Main),
    "\\asymp" => sym(AtomClass::Rel, '\u{224d}', SymbolFont::Main),
    "\\propto" => sym(AtomClass::Rel, '\u{221d}', SymbolFont::Main),
    "\\subset" => sym(AtomClass::Rel, '\u{2282}', SymbolFont::Main),
    "\\supset" => sym(AtomClass::Rel, '\u{2283}', SymbolFont::Main),
    "\\subseteq" => sym(AtomClass::Rel, '\u{2286}', SymbolFont::Main),
    "\\supseteq" => sym(AtomClass::Rel, '\u{2287}', SymbolFont::Main),
    "\\sqsubseteq" => sym(AtomClass::Rel, '\u{2291}', SymbolFont::Main),
    "\\sqsupseteq" => sym(AtomClass::Rel, '\u{2292}', SymbolFont::Main),
    "\\in" => sym(AtomClass::Rel, '\u{2208}', SymbolFont::Main),
    "\\notin" => sym(AtomClass::Rel, '\u{2209}', SymbolFont::Main),
    "\\ni" => sym(AtomClass::Rel, '\u{220b}', SymbolFont::Main),
    "\\ll" => sym(AtomClass::Rel, '\u{226a}', SymbolFont::Main),
    "\\gg" => sym(AtomClass::Rel, '\u{226b}', SymbolFont::Main),
    "\\prec" => sym(AtomClass::Rel, '\u{227a}', SymbolFont::Main),
    "\\succ" => sym(AtomClass::Rel, '\u{227b}', SymbolFont::Main),
    "\\preceq" => sym(AtomClass::Rel, '\u{2aaf}', SymbolFont::Main),
    "\\succeq" => sym(AtomClass::Rel, '\u{2ab0}', SymbolFont::Main),
    "\\perp" => sym(AtomClass::Rel, '\u{22a5}', SymbolFont::Main),
    "\\mid" => sym(AtomClass::Rel, '\u{2223}', SymbolFont::Main),
    "\\parallel" => sym(AtomClass::Rel, '\u{2225}', SymbolFont::Main),
    "\\vdash" => sym(AtomClass::Rel, '\u{22a2}', SymbolFont::Main),
    "\\dashv" => sym(AtomClass::Rel, '\u{22a3}', SymbolFont::Main),
    "\\models" => sym(AtomClass::Rel, '\u{22a8}', SymbolFont::Main),
    "\\doteq" => sym(AtomClass::Rel, '\u{2250}', SymbolFont::Main),
    "\\bowtie" => sym(AtomClass::Rel, '\u{22c8}', SymbolFont::Main),
    "\\smile" => sym(AtomClass::Rel, '\u{2323}', SymbolFont::Main),
    "\\frown" => sym(AtomClass::Rel, '\u{2322}', SymbolFont::Main),
    "\\leftarrow" => sym(AtomClass::Rel, '\u{2190}', SymbolFont::Main),
    "\\rightarrow" => sym(AtomClass::Rel, '\u{2192}', SymbolFont::Main),
    "\\leftrightarrow" => sym(AtomClass::Rel, '\u{2194}', SymbolFont::Main),
    "\\Leftarrow" => sym(AtomClass::Rel, '\u{21d0}', SymbolFont::Main),
    "\\Rightarrow" => sym(AtomClass::Rel, '\u{21d2}', SymbolFont::Main),
    "\\Leftrightarrow" => sym(AtomClass::Rel, '\u{21d4}', SymbolFont::Main),
    "\\longleftarrow" => sym(AtomClass::Rel, '\u{27f5}', SymbolFont::Main),
    "\\longrightarrow" => sym(AtomClass::Rel, '\u{27f6}', SymbolFont::Main),
    "\\longleftrightarrow" => sym(AtomClass::Rel, '\u{27f7}', SymbolFont::Main),
    "\\Longleftarrow" => sym(AtomClass::Rel, '\u{27f8}', SymbolFont::Main),
    "\\Longrightarrow" => sym(AtomClass::Rel, '\u{27f9}', SymbolFont::Main),
    "\\Longleftrightarrow" => sym(AtomClass::Rel, '\u{27fa}', SymbolFont::Main),
    "\\mapsto" => sym(AtomClass::Rel, '\u{21a6}', SymbolFont::Main),
    "\\longmapsto" => sym(AtomClass::Rel, '\u{27fc}', SymbolFont::Main),
    "\\uparrow" => sym(AtomClass::Rel, '\u{2191}', SymbolFont::Main),
    "\\downarrow" => sym(AtomClass::Rel, '\u{2193}', SymbolFont::Main),
    "\\implies" => sym(AtomClass::Rel, '\u{27f9}', SymbolFont::Main),
    "\\impliedby" => sym(AtomClass::Rel, '\u{27f8}', SymbolFont::Main),
    "\\leqslant" => sym(AtomClass::Rel, '\u{2a7d}', SymbolFont::Ams),
    "\\geqslant" => sym(AtomClass::Rel, '\u{2a7e}', SymbolFont::Ams),
    "\\therefore" => sym(AtomClass::Rel, '\u{2234}', SymbolFont::Ams),
    "\\because" => sym(AtomClass::Rel, '\u{2235}', SymbolFont::Ams),
    "\\infty" => sym(AtomClass::Ord, '\u{221e}', SymbolFont::Main),
    "\\partial" => sym(AtomClass::Ord, '\u{2202}', SymbolFont::Main),
    "\\nabla" => sym(AtomClass::Ord, '\u{2207}', SymbolFont::Main),
    "\\forall" => sym(AtomClass::Ord, '\u{2200}', SymbolFont::Main),
    "\\exists" => sym(AtomClass::Ord, '\u{2203}', SymbolFont::Main),
    "\\emptyset" => sym(AtomClass::Ord, '\u{2205}', SymbolFont::Main),
    "\\hbar" => sym(AtomClass::Ord, '\u{210f}', SymbolFont::Main),
    "\\ell" => sym(AtomClass::Ord, '\u{2113}', SymbolFont::Main),
    "\\wp" => sym(AtomClass::Ord, '\u{2118}', SymbolFont::Main),
    "\\Re" => sym(AtomClass::Ord, '\u{211c}', SymbolFont::Main),
    "\\Im" => sym(AtomClass::Ord, '\u{2111}', SymbolFont::Main),
    "\\aleph" => sym(AtomClass::Ord, '\u{2135}', SymbolFont::Main),
    "\\angle" => sym(AtomClass::Ord, '\u{2220}', SymbolFont::Main),
    "\\triangle" => sym(AtomClass::Ord, '\u{25b3}', SymbolFont::Main),
    "\\neg" => sym(AtomClass::Ord, '\u{ac}', SymbolFont::Main),
    "\\prime" => sym(AtomClass::Ord, '\u{2032}', SymbolFont::Main),
    "\\top" => sym(AtomClass::Ord, '\u{22a4}', SymbolFont::Main),
    "\\bot" => sym(AtomClass::Ord, '\u{22a5}', SymbolFont::Main),
    "\\flat" => sym(AtomClass::Ord, '\u{266d}', SymbolFont::Main),
    "\\natural" => sym(AtomClass::Ord, '\u{266e}', SymbolFont::Main),
    "\\sharp" => sym(AtomClass::Ord, '\u{266f}', SymbolFont::Main),
    "\\spadesuit" => sym(AtomClass::Ord, '\u{2660}', SymbolFont::Main),
    "\\heartsuit" => sym(AtomClass::Ord, '\u{2661}', SymbolFont::Main),
    "\\diamondsuit" => sym(AtomClass::Ord, '\u{2662}', SymbolFont::Main),
    "\\clubsuit" => sym(AtomClass::Ord, '\u{2663}', SymbolFont::Main),
    "\\ldots" => sym(AtomClass::Ord, '\u{2026}', SymbolFont::Main),
    "\\vdots" => sym(AtomClass::Ord, '\u{22ee}', SymbolFont::Main),
    "\\ddots" => sym(AtomClass::Ord, '\u{22f1}', SymbolFont::Main),
    "\\imath" => sym(AtomClass::Ord, '\u{131}', SymbolFont::Main),
    "\\jmath" => sym(AtomClass::Ord, '\u{237}', SymbolFont::Main),
    "\\degree" => sym(AtomClass::Ord, '\u{b0}', SymbolFont::Main),
    "\\backslash" => sym(AtomClass::Ord, '\\', SymbolFont::Main),
    "\\vert" => sym(AtomClass::Ord, '|', SymbolFont::Main),
    "\\Vert" => sym(AtomClass::Ord, '\u{2016}', SymbolFont::Main),
    "\\|" => sym(AtomClass::Ord, '\u{2016}', SymbolFont::Main),
    "\\surd" => sym(AtomClass::Ord, '\u{221a}', SymbolFont::Main),
    "\\#" => sym(AtomClass::Ord, '#', SymbolFont::Main),
    "\\$" => sym(AtomClass::Ord, '$', SymbolFont::Main),
    "\\%" => sym(AtomClass::Ord, '%', SymbolFont::Main),
    "\\&" => sym(AtomClass::Ord, '&', SymbolFont::Main),
    "\\_" => sym(AtomClass::Ord, '_', SymbolFont::Main),
    "\\nexists" => sym(AtomClass::Ord, '\u{2204}', SymbolFont::Ams),
    "\\checkmark" => sym(AtomClass::Ord, '\u{2713}', SymbolFont::Ams),
    "\\maltese" => sym(AtomClass::Ord, '\u{2720}', SymbolFont::Ams),
    "\\cdots" => sym(AtomClass::Inner, '\u{22ef}', SymbolFont::Main),
    "\\{" => sym(AtomClass::Open, '{', SymbolFont::Main),
    "\\lbrace" => sym(AtomClass::Open, '{', SymbolFont::Main),
    "\\langle" => sym(AtomClass::Open, '\u{27e8}', SymbolFont::Main),
    "\\lfloor" => sym(AtomClass::Open, '\u{230a}', SymbolFont::Main),
    "\\lceil" => sym(AtomClass::Open, '\u{2308}', SymbolFont::Main),
    "\\lvert" => sym(AtomClass::Open, '|', SymbolFont::Main),
    "\\lVert" => sym(AtomClass::Open, '\u{2016}', SymbolFont::Main),
    "\\lbrack" => sym(AtomClass::Open, '[', SymbolFont::Main),
    "\\}" => sym(AtomClass::Close, '}', SymbolFont::Main),
    "\\rbrace" => sym(AtomClass::Close, '}', SymbolFont::Main),
    "\\rangle" => sym(AtomClass::Close, '\u{27e9}', SymbolFont::Main),
    "\\rfloor" => sym(AtomClass::Close, '\u{230b}', SymbolFont::Main),
    "\\rceil" => sym(AtomClass::Close, '\u{2309}', SymbolFont::Main),
    "\\rvert" => sym(AtomClass::Close, '|', SymbolFont::Main),
    "\\rVert" => sym(AtomClass::Close, '\u{2016}', SymbolFont::Main),
    "\\rbrack" => sym(AtomClass::Close, ']', SymbolFont::Main),
    "\\colon" => sym(AtomClass::Punct, ':', SymbolFont::Main),
    "\\cdotp" => sym(AtomClass::Punct, '\u{22c5}', SymbolFont::Main),
    "\\ldotp" => sym(AtomClass::Punct, '.', SymbolFont::Main),
};

/// Symbol commands available in text mode.
pub static TEXT_SYMBOLS: phf::Map<&'static str, char> = phf_map! {
    "\\$" => '$',
    "\\%" => '%',
    "\\&" => '&',
    "\\#" => '#',
    "\\_" => '_',
    "\\{" => '{',
    "\\}" => '}',
    "\\textbackslash" => '\\',
    "\\ldots" => '\u{2026}',
    "\\textendash" => '\u{2013}',
    "\\textemdash" => '\u{2014}',
    "\\textasciitilde" => '~',
    "\\textasciicircum" => '^',
    "\\textbar" => '|',
    "\\textless" => '<',
    "\\textgreater" => '>',
    "\\dag" => '\u{2020}',
    "\\ddag" => '\u{2021}',
    "\\textdagger" => '\u{2020}',
    "\\textdaggerdbl" => '\u{2021}',
    "\\textdegree" => '\u{b0}',
    "\\i" => '\u{131}',
    "\\j" => '\u{237}',
};

/// Large operators, both symbols and names.
pub static OPERATORS: phf::Map<&'static str, OperatorInfo> = phf_map! {
    "\\sum" => OperatorInfo { glyph: Some('\u{2211}'), limits: true },
    "\\prod" => OperatorInfo { glyph: Some('\u{220f}'), limits: true },
    "\\coprod" => OperatorInfo { glyph: Some('\u{2210}'), limits: true },
    "\\int" => OperatorInfo { glyph: Some('\u{222b}'), limits: false },
    "\\iint" => OperatorInfo { glyph: Some('\u{222c}'), limits: false },
    "\\iiint" => OperatorInfo { glyph: Some('\u{222d}'), limits: false },
    "\\oint" => OperatorInfo { glyph: Some('\u{222e}'), limits: false },
    "\\bigcup" => OperatorInfo { glyph: Some('\u{22c3}'), limits: true },
    "\\bigcap" => OperatorInfo { glyph: Some('\u{22c2}'), limits: true },
    "\\bigvee" => OperatorInfo { glyph: Some('\u{22c1}'), limits: true },
    "\\bigwedge" => OperatorInfo { glyph: Some('\u{22c0}'), limits: true },
    "\\bigoplus" => OperatorInfo { glyph: Some('\u{2a01}'), limits: true },
    "\\bigotimes" => OperatorInfo { glyph: Some('\u{2a02}'), limits: true },
    "\\bigodot" => OperatorInfo { glyph: Some('\u{2a00}'), limits: true },
    "\\biguplus" => OperatorInfo { glyph: Some('\u{2a04}'), limits: true },
    "\\bigsqcup" => OperatorInfo { glyph: Some('\u{2a06}'), limits: true },
    "\\sin" => OperatorInfo { glyph: None, limits: false },
    "\\cos" => OperatorInfo { glyph: None, limits: false },
    "\\tan" => OperatorInfo { glyph: None, limits: false },
    "\\cot" => OperatorInfo { glyph: None, limits: false },
    "\\sec" => OperatorInfo { glyph: None, limits: false },
    "\\csc" => OperatorInfo { glyph: None, limits: false },
    "\\arcsin" => OperatorInfo { glyph: None, limits: false },
    "\\arccos" => OperatorInfo { glyph: None, limits: false },
    "\\arctan" => OperatorInfo { glyph: None, limits: false },
    "\\sinh" => OperatorInfo { glyph: None, limits: false },
    "\\cosh" => OperatorInfo { glyph: None, limits: false },
    "\\tanh" => OperatorInfo { glyph: None, limits: false },
    "\\coth" => OperatorInfo { glyph: None, limits: false },
    "\\log" => OperatorInfo { glyph: None, limits: false },
    "\\ln" => OperatorInfo { glyph: None, limits: false },
    "\\lg" => OperatorInfo { glyph: None, limits: false },
    "\\exp" => OperatorInfo { glyph: None, limits: false },
    "\\arg" => OperatorInfo { glyph: None, limits: false },
    "\\deg" => OperatorInfo { glyph: None, limits: false },
    "\\dim" => OperatorInfo { glyph: None, limits: false },
    "\\hom" => OperatorInfo { glyph: None, limits: false },
    "\\ker" => OperatorInfo { glyph: None, limits: false },
    "\\lim" => OperatorInfo { glyph: None, limits: true },
    "\\max" => OperatorInfo { glyph: None, limits: true },
    "\\min" => OperatorInfo { glyph: None, limits: true },
    "\\sup" => OperatorInfo { glyph: None, limits: true },
    "\\inf" => OperatorInfo { glyph: None, limits: true },
    "\\det" => OperatorInfo { glyph: None, limits: true },
    "\\Pr" => OperatorInfo { glyph: None, limits: true },
    "\\gcd" => OperatorInfo { glyph: None, limits: true },
    "\\limsup" => OperatorInfo { glyph: None, limits: true },
    "\\liminf" => OperatorInfo { glyph: None, limits: true },
};

/// Accent commands.
pub static ACCENTS: phf::Map<&'static str, AccentInfo> = phf_map! {
    "\\hat" => AccentInfo { glyph: '\u{2c6}', wide: false },
    "\\check" => AccentInfo { glyph: '\u{2c7}', wide: false },
    "\\tilde" => AccentInfo { glyph: '\u{2dc}', wide: false },
    "\\acute" => AccentInfo { glyph: '\u{b4}', wide: false },
    "\\grave" => AccentInfo { glyph: '`', wide: false },
    "\\dot" => AccentInfo { glyph: '\u{2d9}', wide: false },
    "\\ddot" => AccentInfo { glyph: '\u{a8}', wide: false },
    "\\breve" => AccentInfo { glyph: '\u{2d8}', wide: false },
    "\\bar" => AccentInfo { glyph: '\u{2c9}', wide: false },
    "\\vec" => AccentInfo { glyph: '\u{20d7}', wide: false },
    "\\mathring" => AccentInfo { glyph: '\u{2da}', wide: false },
    "\\widehat" => AccentInfo { glyph: '\u{2c6}', wide: true },
    "\\widetilde" => AccentInfo { glyph: '\u{2dc}', wide: true },
};

/// Tokens that may stand where a delimiter is expected, and their glyphs.
/// `.` is the null delimiter and is handled separately.
pub static DELIMITERS: phf::Map<&'static str, char> = phf_map! {
    "(" => '(',
    ")" => ')',
    "[" => '[',
    "]" => ']',
    "\\{" => '{',
    "\\}" => '}',
    "\\lbrace" => '{',
    "\\rbrace" => '}',
    "\\lbrack" => '[',
    "\\rbrack" => ']',
    "|" => '|',
    "\\vert" => '|',
    "\\lvert" => '|',
    "\\rvert" => '|',
    "\\|" => '\u{2016}',
    "\\Vert" => '\u{2016}',
    "\\lVert" => '\u{2016}',
    "\\rVert" => '\u{2016}',
    "<" => '\u{27e8}',
    ">" => '\u{27e9}',
    "\\langle" => '\u{27e8}',
    "\\rangle" => '\u{27e9}',
    "\\lfloor" => '\u{230a}',
    "\\rfloor" => '\u{230b}',
    "\\lceil" => '\u{2308}',
    "\\rceil" => '\u{2309}',
    "/" => '/',
    "\\backslash" => '\\',
    "\\uparrow" => '\u{2191}',
    "\\downarrow" => '\u{2193}',
};

/// Text-mode ligatures.
pub static LIGATURES: phf::Map<&'static str, char> = phf_map! {
    "---" => '\u{2014}',
    "--" => '\u{2013}',
    "``" => '\u{201c}',
    "''" => '\u{201d}',
};

/// The class and glyph of a character typed directly in math mode.
///
/// ASCII follows plain TeX's mathcodes; other characters are looked up among
/// the glyphs of [`MATH_SYMBOLS`], and default to ordinary.
#[must_use]
pub fn math_char(ch: char) -> SymbolInfo {
    let (class, glyph) = match ch {
        '+' => (AtomClass::Bin, ch),
        '-' => (AtomClass::Bin, '\u{2212}'),
        '*' => (AtomClass::Bin, '\u{2217}'),
        '=' | '<' | '>' | ':' => (AtomClass::Rel, ch),
        '(' | '[' => (AtomClass::Open, ch),
        ')' | ']' => (AtomClass::Close, ch),
        ',' | ';' => (AtomClass::Punct, ch),
        c if c.is_ascii() => (AtomClass::Ord, c),
        c => return glyph_info(c).unwrap_or(sym(AtomClass::Ord, c, SymbolFont::Main)),
    };
    sym(class, glyph, SymbolFont::Main)
}

fn glyph_info(ch: char) -> Option<SymbolInfo> {
    by_glyph().get(&ch).map(|(_, info)| *info)
}

/// The command that produces `glyph` in math mode, for serialization.
#[must_use]
pub fn command_for_glyph(glyph: char) -> Option<&'static str> {
    by_glyph().get(&glyph).map(|(name, _)| *name)
}

fn by_glyph() -> &'static KeyMap<char, (&'static str, SymbolInfo)> {
    static BY_GLYPH: OnceLock<KeyMap<char, (&'static str, SymbolInfo)>> = OnceLock::new();
    BY_GLYPH.get_or_init(|| {
        let mut entries: Vec<_> = MATH_SYMBOLS.entries().collect();
        // shortest name wins, then alphabetical
        entries.sort_by_key(|(name, _)| (name.len(), **name));
        let mut map = KeyMap::default();
        for (name, info) in entries {
            map.entry(info.glyph).or_insert((*name, *info));
        }
        map
    })
}

/// Returns `true` for letters that math mode sets in italic by default.
#[must_use]
pub fn is_math_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || is_greek(ch)
}

/// Returns `true` for Greek letters, including variant forms.
#[must_use]
pub const fn is_greek(ch: char) -> bool {
    matches!(ch, '\u{391}'..='\u{3a9}' | '\u{3b1}'..='\u{3c9}' | '\u{3d1}' | '\u{3d5}' | '\u{3d6}' | '\u{3f1}' | '\u{3f5}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_map_to_glyphs() {
        let alpha = MATH_SYMBOLS.get("\\alpha");
        assert_eq!(alpha.map(|s| s.glyph), Some('\u{3b1}'));
        assert_eq!(MATH_SYMBOLS.get("\\leq").map(|s| s.class), Some(AtomClass::Rel));
        assert_eq!(MATH_SYMBOLS.get("\\cdots").map(|s| s.class), Some(AtomClass::Inner));
        assert_eq!(OPERATORS.get("\\sum").map(|o| o.limits), Some(true));
        assert_eq!(OPERATORS.get("\\sin").and_then(|o| o.glyph), None);
    }

    #[test]
    fn typed_characters_follow_mathcodes() {
        assert_eq!(math_char('x').class, AtomClass::Ord);
        assert_eq!(math_char('-').glyph, '\u{2212}');
        assert_eq!(math_char('=').class, AtomClass::Rel);
        assert_eq!(math_char(';').class, AtomClass::Punct);
        assert_eq!(math_char('\u{2264}').class, AtomClass::Rel);
        assert_eq!(math_char('\u{2603}').class, AtomClass::Ord);
    }

    #[test]
    fn glyphs_serialize_to_commands() {
        assert_eq!(command_for_glyph('\u{3b1}'), Some("\\alpha"));
        assert_eq!(command_for_glyph('\u{2264}'), Some("\\leq"));
        assert!(is_math_letter('\u{3c0}'));
        assert!(!is_math_letter('1'));
    }
}
