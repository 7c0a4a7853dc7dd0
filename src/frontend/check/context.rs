use super::Validator;
use crate::frontend::env::Env;
use crate::frontend::errors::ErrorId;
use crate::frontend::names::Atom;
use crate::frontend::source::Span;
use crate::frontend::trees::parsed;
use crate::frontend::trees::term::{Term, TermNode};

impl<'a> Validator<'a, '_, '_> {
    /// Resolve the context of a rule. The type of every pattern variable is
    /// resolved against the variables bound before it, so it may only mention
    /// globals and those.
    #[allow(clippy::type_complexity)]
    pub(super) fn context(
        &mut self,
        bindings: &[parsed::Binding],
    ) -> Result<(Env<'a>, &'a [(Atom, &'a Term<'a>)]), ErrorId> {
        let ctx = self.ctx;
        for (index, binding) in bindings.iter().enumerate() {
            if let Some(prev) = bindings[..index].iter().find(|prev| prev.name == binding.name) {
                let name = ctx.atoms.get(&binding.name);
                return Err(self.errors().name_error(binding.span).duplicate_variable(prev.span, name));
            }
        }

        let later: Vec<_> = bindings.iter().map(|binding| binding.name).collect();
        let mut env = Env::new();
        let mut context = Vec::with_capacity(bindings.len());
        for (index, binding) in bindings.iter().enumerate() {
            // a later variable is an escape unless a global has the same name
            let escaped = escaping(&binding.ty, &later[index..], &mut Vec::new())
                .filter(|(name, _)| !self.resolver.is_global(*name));

            if let Some((name, at)) = escaped {
                let (name, binder) = (ctx.atoms.get(&name), ctx.atoms.get(&binding.name));
                return Err(self.errors().name_error(at).escaped_variable(name, binder));
            }

            let ty = self.resolver.term(&mut env, &binding.ty)?;
            env.bind(binding.name, Some(ty));
            context.push((binding.name, ty));
        }

        let context = &*self.alloc.alloc_slice_fill_iter(context);
        Ok((env, context))
    }
}

/// Find a free occurrence of any of the `later` names in `term`.
fn escaping(term: &Term, later: &[Atom], bound: &mut Vec<Atom>) -> Option<(Atom, Span)> {
    match &term.node {
        TermNode::Type => None,
        TermNode::Var(name) => {
            let free = !bound.contains(name) && later.contains(name);
            free.then_some((*name, term.span))
        }

        TermNode::App([fun, arg]) => {
            escaping(fun, later, bound).or_else(|| escaping(arg, later, bound))
        }

        TermNode::Lam(param, body) => {
            bound.push(*param);
            let result = escaping(body, later, bound);
            bound.pop();
            result
        }

        TermNode::Pi(param, [domain, codomain]) => {
            if let Some(found) = escaping(domain, later, bound) {
                return Some(found);
            }

            let len = bound.len();
            bound.extend(*param);
            let result = escaping(codomain, later, bound);
            bound.truncate(len);
            result
        }
    }
}
