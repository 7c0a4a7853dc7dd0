use bumpalo::Bump;

use crate::frontend::names::Atom;
use crate::frontend::source::Span;

/// A term of the lambda-Pi calculus. Terms are allocated in the arena of the
/// current phase, and a parent term owns its children.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Term<'a> {
    pub node: TermNode<'a>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TermNode<'a> {
    /// `Type`
    Type,

    /// Some name
    Var(Atom),

    /// `t u`
    App(&'a [Term<'a>; 2]),

    /// `x => t`
    Lam(Atom, &'a Term<'a>),

    /// `x : t -> u`, or `t -> u` when the parameter is anonymous
    Pi(Option<Atom>, &'a [Term<'a>; 2]),
}

impl<'a> Term<'a> {
    pub fn universe(span: Span) -> Self {
        let node = TermNode::Type;
        Self { node, span }
    }

    pub fn var(name: Atom, span: Span) -> Self {
        let node = TermNode::Var(name);
        Self { node, span }
    }

    pub fn app(alloc: &'a Bump, fun: Term<'a>, arg: Term<'a>) -> Self {
        let span = fun.span + arg.span;
        let node = TermNode::App(alloc.alloc([fun, arg]));
        Self { node, span }
    }

    pub fn lam(alloc: &'a Bump, param: Atom, body: Term<'a>, span: Span) -> Self {
        let node = TermNode::Lam(param, alloc.alloc(body));
        Self { node, span }
    }

    pub fn pi(
        alloc: &'a Bump,
        param: Option<Atom>,
        domain: Term<'a>,
        codomain: Term<'a>,
        span: Span,
    ) -> Self {
        let node = TermNode::Pi(param, alloc.alloc([domain, codomain]));
        Self { node, span }
    }

    /// Peel off the left-nested chain of applications in this term, returning
    /// the number of arguments and the head.
    ///
    /// The spine of `f a b` is `(2, f)`.
    pub fn spine(&self) -> (usize, &Term<'a>) {
        let mut count = 0;
        let mut term = self;
        while let TermNode::App([fun, _]) = &term.node {
            count += 1;
            term = fun;
        }

        (count, term)
    }

    /// Like [`Term::spine`], but also collect the arguments, in application
    /// order.
    pub fn arguments(&self) -> (&Term<'a>, Vec<&Term<'a>>) {
        let mut args = Vec::new();
        let mut term = self;
        while let TermNode::App([fun, arg]) = &term.node {
            args.push(arg);
            term = fun;
        }

        args.reverse();
        (term, args)
    }

    /// Returns `true` if this term is zero or more dependent products ending in
    /// `Type`.
    pub fn is_kind(&self) -> bool {
        let mut term = self;
        loop {
            match &term.node {
                TermNode::Type => return true,
                TermNode::Pi(_, [_, codomain]) => term = codomain,
                _ => return false,
            }
        }
    }

    /// Get the name at the head of this term's spine, if any.
    pub fn head_name(&self) -> Option<Atom> {
        match self.spine().1.node {
            TermNode::Var(name) => Some(name),
            _ => None,
        }
    }
}
