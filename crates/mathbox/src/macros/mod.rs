//! Macro definitions and the macro dictionary.
//!
//! A dictionary layers user-supplied definitions over the built-in table.
//! Lookups consult the user layer first, so user entries win.

pub mod builtins;

use alloc::borrow::Cow;

use crate::types::KeyMap;
use builtins::BUILTIN_MACROS;

/// A single macro.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MacroDefinition {
    /// LaTeX expansion text, with `#1`..`#9` standing for the arguments.
    pub def: Cow<'static, str>,
    /// Number of arguments, `0..=9`.
    pub args: u8,
    /// When `true` the expansion is spliced into the token stream. When
    /// `false` the parser keeps a macro atom that remembers the verbatim
    /// invocation and lays out its expansion.
    pub expand: bool,
    /// When `true` an editor treats the macro as a single unit; its expansion
    /// is not individually addressable.
    pub capture_selection: bool,
}

impl MacroDefinition {
    /// A macro whose arity is inferred from the `#n` parameters in `def`.
    #[must_use]
    pub fn new(def: impl Into<Cow<'static, str>>) -> Self {
        let def = def.into();
        let args = infer_arity(&def);
        Self {
            def,
            args,
            expand: true,
            capture_selection: true,
        }
    }

    /// Const constructor for static tables.
    #[must_use]
    pub const fn builtin(def: &'static str, args: u8, expand: bool, capture_selection: bool) -> Self {
        Self {
            def: Cow::Borrowed(def),
            args,
            expand,
            capture_selection,
        }
    }
}

/// A user dictionary entry before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MacroEntry {
    /// Just the expansion text.
    Body(String),
    /// A full definition.
    Definition(MacroDefinition),
    /// A group of macros sharing defaults.
    Package(MacroPackage),
}

impl From<&str> for MacroEntry {
    fn from(value: &str) -> Self {
        Self::Body(value.to_owned())
    }
}

impl From<String> for MacroEntry {
    fn from(value: String) -> Self {
        Self::Body(value)
    }
}

impl From<MacroDefinition> for MacroEntry {
    fn from(value: MacroDefinition) -> Self {
        Self::Definition(value)
    }
}

/// A named collection of macros.
///
/// Members given as plain text inherit the package flags: `primitive`
/// members are spliced eagerly, the others are kept as macro atoms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MacroPackage {
    /// Members, keyed by name.
    pub package: KeyMap<String, MacroEntry>,
    /// Expand members eagerly.
    pub primitive: bool,
    /// Default `capture_selection` for members.
    pub capture_selection: bool,
}

/// The macro dictionary consulted by the expander.
#[derive(Debug, Clone)]
pub struct MacroDictionary {
    user: KeyMap<String, MacroDefinition>,
    builtins: &'static phf::Map<&'static str, MacroDefinition>,
}

impl Default for MacroDictionary {
    fn default() -> Self {
        Self {
            user: KeyMap::default(),
            builtins: &BUILTIN_MACROS,
        }
    }
}

impl MacroDictionary {
    /// Builds a dictionary from user entries layered over the built-ins.
    #[must_use]
    pub fn new<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, MacroEntry)>,
        K: AsRef<str>,
    {
        let mut dict = Self::default();
        for (name, entry) in entries {
            dict.insert_entry(name.as_ref(), entry);
        }
        dict
    }

    /// Adds or replaces one entry, flattening packages.
    pub fn insert_entry(&mut self, name: &str, entry: MacroEntry) {
        match entry {
            MacroEntry::Body(body) => self.insert(name, MacroDefinition::new(body)),
            MacroEntry::Definition(def) => self.insert(name, def),
            MacroEntry::Package(package) => {
                for (member, entry) in package.package {
                    let def = match entry {
                        MacroEntry::Body(body) => MacroDefinition {
                            expand: package.primitive,
                            capture_selection: package.capture_selection,
                            ..MacroDefinition::new(body)
                        },
                        MacroEntry::Definition(def) => def,
                        nested @ MacroEntry::Package(_) => {
                            self.insert_entry(&member, nested);
                            continue;
                        }
                    };
                    self.insert(&member, def);
                }
            }
        }
    }

    /// Adds or replaces a definition. `name` may omit the backslash.
    pub fn insert(&mut self, name: &str, def: MacroDefinition) {
        log::trace!("defining macro {name} with {} argument(s)", def.args);
        self.user.insert(command_name(name).into_owned(), def);
    }

    /// Looks up a macro by command name (with backslash).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MacroDefinition> {
        self.user.get(name).or_else(|| self.builtins.get(name))
    }

    /// Returns `true` if `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Prefixes `name` with a backslash if it lacks one.
fn command_name(name: &str) -> Cow<'_, str> {
    if name.starts_with('\\') {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("\\{name}"))
    }
}

/// Counts the parameters used in a macro body: the highest `#n` present.
#[must_use]
pub fn infer_arity(body: &str) -> u8 {
    let stripped = body.replace("##", "");
    let mut arity = 0;
    let mut chars = stripped.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '#'
            && let Some(digit) = chars.peek().and_then(|c| c.to_digit(10))
        {
            arity = arity.max(digit as u8);
        }
    }
    arity
}
