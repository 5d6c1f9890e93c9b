//! The command registry.
//!
//! The registry maps command names to function specifications, environment
//! names to environment specifications, and atom types to the box builders
//! that lay them out. It is built once, on first use, and shared by every
//! parse and layout pass.

use std::sync::OnceLock;

use crate::build_box::{self, BoxBuilder};
use crate::define_environment::{self, EnvDefSpec, EnvSpec};
use crate::define_function::{FunctionDefSpec, FunctionSpec};
use crate::functions;
use crate::parser::atom::AtomType;
use crate::types::KeyMap;

/// Registry of functions, environments and box builders.
pub struct Registry {
    /// All registered functions, keyed by command name with backslash.
    pub functions: KeyMap<&'static str, FunctionSpec>,
    /// All registered environments, keyed by name.
    pub environments: KeyMap<&'static str, EnvSpec>,
    /// Box builders, keyed by the atom type they lay out.
    pub box_builders: KeyMap<AtomType, BoxBuilder>,
}

impl Registry {
    /// The shared registry with every built-in definition.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Self::default)
    }

    /// Registers a function under each of its names, and its box builder.
    pub fn define_function(&mut self, spec: FunctionDefSpec<'static>) {
        let data = FunctionSpec {
            props: spec.props,
            handler: spec.handler,
        };
        for name in spec.names {
            self.functions.insert(name, data);
        }
        if let (Some(atom_type), Some(builder)) = (spec.atom_type, spec.box_builder) {
            self.define_box_builder(atom_type, builder);
        }
    }

    /// Registers an environment under each of its names.
    pub fn define_environment(&mut self, spec: EnvDefSpec<'static>) {
        let data = EnvSpec {
            props: spec.props,
            handler: spec.handler,
        };
        for name in spec.names {
            self.environments.insert(name, data);
        }
    }

    /// Registers the box builder for an atom type.
    pub fn define_box_builder(&mut self, atom_type: AtomType, builder: BoxBuilder) {
        if self.box_builders.insert(atom_type, builder).is_some() {
            log::debug!("replacing box builder for {atom_type}");
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self {
            functions: KeyMap::default(),
            environments: KeyMap::default(),
            box_builders: KeyMap::default(),
        };
        build_box::define_core(&mut registry);

        functions::define_accent(&mut registry);
        functions::define_char(&mut registry);
        functions::define_color(&mut registry);
        functions::define_delimsizing(&mut registry);
        functions::define_enclose(&mut registry);
        functions::define_environment(&mut registry);
        functions::define_font(&mut registry);
        functions::define_genfrac(&mut registry);
        functions::define_html(&mut registry);
        functions::define_kern(&mut registry);
        functions::define_leftright(&mut registry);
        functions::define_lines(&mut registry);
        functions::define_mclass(&mut registry);
        functions::define_op(&mut registry);
        functions::define_phantom(&mut registry);
        functions::define_placeholder(&mut registry);
        functions::define_sizing(&mut registry);
        functions::define_sqrt(&mut registry);
        functions::define_styling(&mut registry);
        functions::define_supsub(&mut registry);
        functions::define_text(&mut registry);

        define_environment::define_array(&mut registry);
        log::debug!(
            "registered {} functions and {} environments",
            registry.functions.len(),
            registry.environments.len()
        );
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator as _;

    #[test]
    fn every_atom_type_has_a_builder() {
        let registry = Registry::global();
        for atom_type in AtomType::iter() {
            assert!(
                registry.box_builders.contains_key(&atom_type),
                "no builder for {atom_type}"
            );
        }
        assert!(registry.functions.contains_key("\\frac"));
        assert!(registry.environments.contains_key("pmatrix"));
    }
}
