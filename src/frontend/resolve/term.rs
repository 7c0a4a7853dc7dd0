use super::Resolver;
use crate::frontend::env::{Binding, Env};
use crate::frontend::errors::ErrorId;
use crate::frontend::trees::term::{Term, TermNode};

impl<'a> Resolver<'a, '_, '_> {
    /// Resolve a term in the scope of `env`. Names bound by lambdas and
    /// dependent products inside the term are in scope of their bodies only.
    pub fn term(&mut self, env: &mut Env<'a>, term: &Term) -> Result<&'a Term<'a>, ErrorId> {
        let term = self.term_in(env, term)?;
        Ok(&*self.alloc.alloc(term))
    }

    pub(super) fn term_in(&mut self, env: &mut Env<'a>, term: &Term) -> Result<Term<'a>, ErrorId> {
        let span = term.span;
        let node = match &term.node {
            TermNode::Type => TermNode::Type,
            TermNode::Var(name) => TermNode::Var(self.name(env, *name, span)?),

            TermNode::App([fun, arg]) => {
                let fun = self.term_in(env, fun)?;
                let arg = self.term_in(env, arg)?;
                TermNode::App(self.alloc.alloc([fun, arg]))
            }

            TermNode::Lam(param, body) => {
                let binding = Binding {
                    name: *param,
                    ty: None,
                };

                let body = env.scope(Some(binding), |env| self.term_in(env, body))?;
                TermNode::Lam(*param, self.alloc.alloc(body))
            }

            TermNode::Pi(param, [domain, codomain]) => {
                let domain = self.term_in(env, domain)?;
                let alloc = self.alloc;
                let binding = param.map(|name| Binding {
                    name,
                    ty: Some(&*alloc.alloc(domain)),
                });

                let codomain = env.scope(binding, |env| self.term_in(env, codomain))?;
                TermNode::Pi(*param, self.alloc.alloc([domain, codomain]))
            }
        };

        Ok(Term { node, span })
    }
}
