use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::frontend::names::Atom;

/// The status of a globally known, fully qualified identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Status {
    /// The identifier has been given a type.
    Declared,

    /// The identifier has been given a type and an accepted rule set.
    Defined,
}

/// The global symbol table maps fully qualified identifiers to their status.
/// Each identifier moves through the states at most once: it is inserted as
/// [`Status::Declared`] and may later flip to [`Status::Defined`].
#[derive(Debug, Default)]
pub struct Symbols {
    symbols: DashMap<Atom, Status>,
}

impl Symbols {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a new identifier. If the identifier is already known, its
    /// current status is returned as an error and nothing changes.
    pub fn declare(&self, name: Atom) -> Result<(), Status> {
        match self.symbols.entry(name) {
            Entry::Occupied(entry) => Err(*entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Status::Declared);
                Ok(())
            }
        }
    }

    /// Mark an identifier as defined, returning its previous status. A
    /// previous status of [`Status::Defined`] means the identifier has been
    /// defined twice.
    pub fn define(&self, name: Atom) -> Option<Status> {
        self.symbols.insert(name, Status::Defined)
    }

    pub fn status(&self, name: &Atom) -> Option<Status> {
        self.symbols.get(name).map(|status| *status)
    }

    pub fn contains(&self, name: &Atom) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{Status, Symbols};
    use crate::frontend::names::Atoms;

    #[test]
    fn declare_then_define() {
        let atoms = Atoms::new();
        let symbols = Symbols::new();
        let plus = atoms.intern("nat.plus");

        assert_eq!(None, symbols.status(&plus));
        assert_eq!(Ok(()), symbols.declare(plus));
        assert_eq!(Some(Status::Declared), symbols.status(&plus));

        assert_eq!(Some(Status::Declared), symbols.define(plus));
        assert_eq!(Some(Status::Defined), symbols.status(&plus));
        assert_eq!(Some(Status::Defined), symbols.define(plus));
    }

    #[test]
    fn no_double_declaration() {
        let atoms = Atoms::new();
        let symbols = Symbols::new();
        let z = atoms.intern("nat.Z");

        assert_eq!(Ok(()), symbols.declare(z));
        assert_eq!(Err(Status::Declared), symbols.declare(z));
        assert_eq!(1, symbols.len());
    }
}
