use super::resolved::{Pattern, PatternNode};
use super::term::{Term, TermNode};
use crate::frontend::names::Atoms;

/// Renders terms and patterns back into surface syntax, mostly for logging
/// and tests.
pub struct Pretty<'a> {
    atoms: &'a Atoms,
}

impl<'a> Pretty<'a> {
    pub fn new(atoms: &'a Atoms) -> Self {
        Self { atoms }
    }

    pub fn term(&self, term: &Term) -> String {
        let mut out = String::new();
        self.term_in(&mut out, term, Prec::Arrow);
        out
    }

    pub fn pattern(&self, pattern: &Pattern) -> String {
        let mut out = String::new();
        self.pattern_in(&mut out, pattern, false);
        out
    }

    fn term_in(&self, out: &mut String, term: &Term, prec: Prec) {
        match &term.node {
            TermNode::Type => out.push_str("Type"),
            TermNode::Var(name) => out.push_str(self.atoms.get(name)),

            TermNode::App([fun, arg]) => {
                let parens = prec > Prec::App;
                open(out, parens);
                self.term_in(out, fun, Prec::App);
                out.push(' ');
                self.term_in(out, arg, Prec::Atom);
                close(out, parens);
            }

            TermNode::Lam(param, body) => {
                let parens = prec > Prec::Arrow;
                open(out, parens);
                out.push_str(self.atoms.get(param));
                out.push_str(" => ");
                self.term_in(out, body, Prec::Arrow);
                close(out, parens);
            }

            TermNode::Pi(param, [domain, codomain]) => {
                let parens = prec > Prec::Arrow;
                open(out, parens);
                if let Some(param) = param {
                    out.push_str(self.atoms.get(param));
                    out.push_str(" : ");
                }

                self.term_in(out, domain, Prec::App);
                out.push_str(" -> ");
                self.term_in(out, codomain, Prec::Arrow);
                close(out, parens);
            }
        }
    }

    fn pattern_in(&self, out: &mut String, pattern: &Pattern, nested: bool) {
        match &pattern.node {
            PatternNode::Var(name, _) => out.push_str(self.atoms.get(name)),
            PatternNode::Constructor(ctor) => {
                let parens = nested && !(ctor.dots.is_empty() && ctor.args.is_empty());
                open(out, parens);
                out.push_str(self.atoms.get(&ctor.name));

                for dot in ctor.dots {
                    out.push_str(" {");
                    self.term_in(out, dot, Prec::Arrow);
                    out.push('}');
                }

                for arg in ctor.args {
                    out.push(' ');
                    self.pattern_in(out, arg, true);
                }

                close(out, parens);
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum Prec {
    Arrow,
    App,
    Atom,
}

fn open(out: &mut String, parens: bool) {
    if parens {
        out.push('(');
    }
}

fn close(out: &mut String, parens: bool) {
    if parens {
        out.push(')');
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use super::Pretty;
    use crate::frontend::names::Atoms;
    use crate::frontend::source::SourceId;
    use crate::frontend::trees::term::Term;

    #[test]
    fn terms() {
        let alloc = Bump::new();
        let atoms = Atoms::new();
        let span = SourceId::new(0).span(0, 0);
        let var = |name: &str| Term::var(atoms.intern(name), span);

        let f = var("f");
        let a = var("a");
        let b = var("b");

        let fab = Term::app(&alloc, Term::app(&alloc, f, a), b);
        let f_ab = Term::app(&alloc, f, Term::app(&alloc, a, b));
        let arrow = Term::pi(&alloc, None, Term::pi(&alloc, None, a, b, span), fab, span);
        let dependent = Term::pi(&alloc, Some(atoms.intern("x")), a, Term::universe(span), span);
        let lam = Term::app(&alloc, f, Term::lam(&alloc, atoms.intern("x"), a, span));

        let pretty = Pretty::new(&atoms);
        assert_eq!("f a b", pretty.term(&fab));
        assert_eq!("f (a b)", pretty.term(&f_ab));
        assert_eq!("(a -> b) -> f a b", pretty.term(&arrow));
        assert_eq!("x : a -> Type", pretty.term(&dependent));
        assert_eq!("f (x => a)", pretty.term(&lam));
    }
}
