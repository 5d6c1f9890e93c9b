use bon::bon;

use crate::macros::MacroDictionary;
use crate::types::Mode;

/// Parse-time configuration.
///
/// All fields are resolved; use [`Settings::builder`] to construct one from
/// optional values.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Mode the top-level expression is parsed in.
    pub default_mode: Mode,
    /// User macros layered over the built-ins.
    pub macros: MacroDictionary,
    /// Number of consecutive macro expansions allowed before the expander
    /// reports `recursion-limit`. The count restarts each time a fresh token
    /// is read from the source.
    pub max_expand: usize,
    /// Maximum depth of nested groups and arguments before the parser
    /// reports `recursion-limit`.
    pub max_nesting: usize,
    /// Whether unmatched `(`/`)` pairs are parsed as `\left`..`\right`
    /// fences.
    pub smart_fence: bool,
}

#[bon]
impl Settings {
    /// Creates a new [`Settings`], applying defaults for missing values.
    ///
    /// # Default Values
    /// - `default_mode`: [`Mode::Math`]
    /// - `macros`: built-ins only
    /// - `max_expand`: `1024`
    /// - `max_nesting`: `128`
    /// - `smart_fence`: `false`
    #[must_use]
    #[builder]
    pub fn new(
        /// Mode of the top-level expression.
        default_mode: Option<Mode>,
        /// Macro dictionary.
        macros: Option<MacroDictionary>,
        /// Macro expansion limit.
        max_expand: Option<usize>,
        /// Group nesting limit.
        max_nesting: Option<usize>,
        /// Parse matched parentheses as fences.
        smart_fence: Option<bool>,
    ) -> Self {
        Self {
            default_mode: default_mode.unwrap_or_default(),
            macros: macros.unwrap_or_default(),
            max_expand: max_expand.unwrap_or(1024),
            max_nesting: max_nesting.unwrap_or(128).max(1),
            smart_fence: smart_fence.unwrap_or(false),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
