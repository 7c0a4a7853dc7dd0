use crate::frontend::names::Atom;
use crate::frontend::trees::term::Term;

/// A single binding in an [`Env`]. Lambda binders have no type; pattern
/// variables and dependent products do.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Binding<'a> {
    pub name: Atom,
    pub ty: Option<&'a Term<'a>>,
}

/// An ordered list of bindings. Lookups search from the innermost (most
/// recently bound) binding outwards, while iteration goes in binding order.
///
/// The same structure is used both as the stack of binders while walking a
/// term and as the context of pattern variables of a rule.
#[derive(Clone, Debug, Default)]
pub struct Env<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> Env<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: Atom, ty: Option<&'a Term<'a>>) {
        self.bindings.push(Binding { name, ty });
    }

    /// Find the innermost binding of `name`.
    pub fn lookup(&self, name: &Atom) -> Option<&Binding<'a>> {
        self.bindings.iter().rev().find(|binding| &binding.name == name)
    }

    pub fn contains(&self, name: &Atom) -> bool {
        self.lookup(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding<'a>> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run `f` with `binding` pushed, and pop everything bound since
    /// afterwards. Passing `None` opens a scope without binding anything,
    /// which is what anonymous binders do.
    pub fn scope<T>(&mut self, binding: Option<Binding<'a>>, f: impl FnOnce(&mut Self) -> T) -> T {
        let len = self.bindings.len();
        self.bindings.extend(binding);
        let result = f(self);
        self.bindings.truncate(len);
        result
    }
}
