use dashmap::DashMap;
use lasso::{Key, ThreadedRodeo};

/// An atom is an interned identifier. Two atoms with equal content are always
/// the same atom, so comparing atoms is a constant time comparison of handles.
///
/// Every identifier in a program, bound or free, variable or constructor, is
/// represented as an atom.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Atom(usize);

/// The atom table is responsible for interning identifiers.
///
/// Besides the interned text, every atom remembers the length of its module
/// qualifier, including the separating dot. The atom `nat.Z` has a qualifier
/// of length 4, while the atom `Z` has a qualifier of length 0. The qualifier
/// is a function of the atom's content, so it is computed once when the atom
/// is first interned.
#[derive(Debug)]
pub struct Atoms {
    idents: ThreadedRodeo<Atom>,
    qualifiers: DashMap<Atom, usize>,
}

impl Atoms {
    pub fn new() -> Self {
        Self {
            idents: ThreadedRodeo::new(),
            qualifiers: DashMap::new(),
        }
    }

    pub fn intern(&self, name: impl AsRef<str>) -> Atom {
        let name = name.as_ref();
        let atom = self.idents.get_or_intern(name);
        self.qualifiers
            .entry(atom)
            .or_insert_with(|| name.rfind('.').map(|dot| dot + 1).unwrap_or(0));
        atom
    }

    /// Intern the name `name` qualified by the module `module`.
    pub fn intern_qualified(&self, module: &str, name: &str) -> Atom {
        self.intern(format!("{module}.{name}"))
    }

    pub fn get(&self, atom: &Atom) -> &str {
        self.idents.resolve(atom)
    }

    /// Get the length of the module qualifier of `atom`, including the
    /// trailing dot. This is zero for unqualified atoms.
    pub fn qualifier_len(&self, atom: &Atom) -> usize {
        *self
            .qualifiers
            .get(atom)
            .expect("atoms from separate atom tables are never mixed")
    }

    pub fn is_qualified(&self, atom: &Atom) -> bool {
        self.qualifier_len(atom) > 0
    }

    /// Get the module qualifier of `atom`, without the trailing dot.
    pub fn qualifier(&self, atom: &Atom) -> Option<&str> {
        let len = self.qualifier_len(atom);
        (len > 0).then(|| &self.get(atom)[..len - 1])
    }

    /// Get the unqualified part of `atom`.
    pub fn base(&self, atom: &Atom) -> &str {
        &self.get(atom)[self.qualifier_len(atom)..]
    }
}

// SAFETY: `Atom` is a dumb newtype over usizes, so `try_from_usize` and
// `into_usize` are exactly symmetrical.
unsafe impl Key for Atom {
    fn into_usize(self) -> usize {
        self.0
    }

    fn try_from_usize(value: usize) -> Option<Self> {
        Some(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::Atoms;

    #[test]
    fn interning_is_identity() {
        let atoms = Atoms::new();
        let a = atoms.intern("plus");
        let b = atoms.intern(String::from("plus"));
        let c = atoms.intern("times");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!("plus", atoms.get(&a));
    }

    #[test]
    fn qualifier_lengths() {
        let atoms = Atoms::new();
        let plain = atoms.intern("Z");
        let qualified = atoms.intern_qualified("nat", "Z");
        let nested = atoms.intern("a.b.x");

        assert_eq!(0, atoms.qualifier_len(&plain));
        assert_eq!(4, atoms.qualifier_len(&qualified));
        assert_eq!(4, atoms.qualifier_len(&nested));

        assert_eq!(Some("nat"), atoms.qualifier(&qualified));
        assert_eq!(Some("a.b"), atoms.qualifier(&nested));
        assert_eq!(None, atoms.qualifier(&plain));
        assert_eq!("Z", atoms.base(&qualified));
        assert_eq!(qualified, atoms.intern("nat.Z"));
    }
}
