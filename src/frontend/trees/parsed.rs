//! Parsed trees are produced by the parser. Names in them are unresolved: they
//! may or may not be qualified, and the parser cannot tell pattern variables
//! from constructors.

use super::term::Term;
use crate::frontend::names::Atom;
use crate::frontend::source::Span;

/// A single top-level entry, which is also the unit of one compilation phase.
pub enum Entry<'a> {
    /// `x : t.`
    Declaration(Declaration<'a>),

    /// `[x : t] f x --> u [...] ... .`
    Rules(RuleSet<'a>),
}

pub struct Declaration<'a> {
    pub name: Atom,
    pub name_span: Span,
    pub ty: Term<'a>,
    pub span: Span,
}

/// A sequence of rules, terminated by a single dot.
pub struct RuleSet<'a> {
    pub rules: &'a [Rule<'a>],
    pub span: Span,
}

pub struct Rule<'a> {
    pub context: &'a [Binding<'a>],
    pub lhs: Pattern<'a>,
    pub rhs: Term<'a>,
    pub span: Span,
}

/// `x : t` in the context of a rule.
pub struct Binding<'a> {
    pub name: Atom,
    pub ty: Term<'a>,
    pub span: Span,
}

/// A pattern is a name applied first to some dot patterns, and then to some
/// ordinary patterns. Whether the name is a variable or a constructor is
/// decided during name resolution.
pub struct Pattern<'a> {
    pub head: Atom,
    pub head_span: Span,
    pub dots: &'a [Term<'a>],
    pub args: &'a [Pattern<'a>],
    pub span: Span,
}
