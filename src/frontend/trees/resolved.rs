//! Resolved trees have every free name qualified and every pattern name
//! classified as either a variable or a constructor. Rule sets in this form
//! have been validated and are ready for decision tree compilation.

use super::path::Path;
use super::term::Term;
use crate::frontend::names::Atom;
use crate::frontend::source::Span;

pub struct Declaration<'a> {
    pub name: Atom,
    pub ty: &'a Term<'a>,
    pub span: Span,
}

/// A validated, non-empty list of rules which all share a head symbol and an
/// arity.
pub struct RuleSet<'a> {
    pub head: Atom,
    pub arity: Arity,
    pub rules: &'a [Rule<'a>],
    pub span: Span,
}

pub struct Rule<'a> {
    /// The pattern variables of this rule with their types, in declaration
    /// order.
    pub context: &'a [(Atom, &'a Term<'a>)],
    pub dots: &'a [Term<'a>],
    pub args: &'a [Pattern<'a>],
    pub rhs: &'a Term<'a>,

    /// Every pattern variable together with the path it is found at, in the
    /// same order as the context.
    pub bindings: &'a [(Atom, Path<'a>)],
    pub span: Span,
}

#[derive(Clone, Copy, Debug)]
pub struct Pattern<'a> {
    pub node: PatternNode<'a>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug)]
pub enum PatternNode<'a> {
    /// A pattern variable, which matches anything.
    Var(Atom, Path<'a>),

    /// A constructor applied to dot patterns and sub-patterns.
    Constructor(Constructor<'a>),
}

#[derive(Clone, Copy, Debug)]
pub struct Constructor<'a> {
    pub name: Atom,
    pub dots: &'a [Term<'a>],
    pub args: &'a [Pattern<'a>],
    pub path: Path<'a>,
}

impl Constructor<'_> {
    pub fn arity(&self) -> Arity {
        Arity {
            dots: self.dots.len(),
            patterns: self.args.len(),
        }
    }
}

/// The number of dot arguments and ordinary arguments something is applied
/// to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Arity {
    pub dots: usize,
    pub patterns: usize,
}

impl Arity {
    pub fn total(&self) -> usize {
        self.dots + self.patterns
    }
}

impl Rule<'_> {
    pub fn arity(&self) -> Arity {
        Arity {
            dots: self.dots.len(),
            patterns: self.args.len(),
        }
    }
}
