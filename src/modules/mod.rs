//! A module is a namespace of identifiers. Every source file is one module,
//! and every identifier declared in it is qualified by the module's name, so
//! that `Z` declared in `nat.dk` becomes the globally unique `nat.Z`.

pub use path::ModuleError;

mod path;

use smol_str::SmolStr;
use thiserror::Error;

use crate::frontend::names::{Atom, Atoms};

/// Errors from qualifying an identifier with a module name.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum QualifyError {
    #[error("the qualified name `{name}` is {len} characters long, but the maximum is {max}")]
    TooLong { name: String, len: usize, max: usize },
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Module {
    name: SmolStr,
}

impl Module {
    /// Create a module from a dot-separated name like `a.b.c`.
    pub fn new(name: &str, max_len: usize) -> Result<Self, ModuleError> {
        let components: Vec<&str> = name.split('.').collect();
        Self::from_components(&components, max_len)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an iterator over every prefix of the module name, from the
    /// outermost to the full name. The module `a.b.c` has the prefixes `a`,
    /// `a.b` and `a.b.c`.
    pub fn prefixes(&self) -> impl Iterator<Item = &str> + '_ {
        self.name
            .match_indices('.')
            .map(|(dot, _)| &self.name[..dot])
            .chain(std::iter::once(self.name.as_str()))
    }

    /// Qualify `atom` with this module. Atoms that are already qualified are
    /// returned unchanged, which makes qualification idempotent.
    pub fn qualify(&self, atoms: &Atoms, atom: Atom, max_len: usize) -> Result<Atom, QualifyError> {
        if atoms.is_qualified(&atom) {
            return Ok(atom);
        }

        let base = atoms.get(&atom);
        let len = self.name.len() + 1 + base.len();
        if len > max_len {
            return Err(QualifyError::TooLong {
                name: format!("{}.{base}", self.name),
                len,
                max: max_len,
            });
        }

        Ok(atoms.intern_qualified(&self.name, base))
    }

    /// Returns `true` if `atom` is qualified by exactly this module.
    pub fn owns(&self, atoms: &Atoms, atom: &Atom) -> bool {
        atoms.qualifier(atom) == Some(self.name.as_str())
    }

    fn from_components(components: &[&str], max_len: usize) -> Result<Self, ModuleError> {
        for component in components {
            path::check_component(component)?;
        }

        let name = components.join(".");
        if name.len() >= max_len {
            return Err(ModuleError::TooLong {
                name,
                max: max_len,
            });
        }

        Ok(Self { name: name.into() })
    }
}
