use log::trace;

use super::Resolver;
use crate::frontend::env::Env;
use crate::frontend::errors::ErrorId;
use crate::frontend::names::Atom;
use crate::frontend::source::Span;
use crate::frontend::trees::parsed;
use crate::frontend::trees::path::Path;
use crate::frontend::trees::resolved::{Constructor, Pattern, PatternNode};
use crate::frontend::trees::term::Term;

impl<'a> Resolver<'a, '_, '_> {
    /// Resolve a pattern found at `path` in the left-hand side of a rule whose
    /// pattern variables are `env`.
    ///
    /// A name bound in `env` is a pattern variable, and must not be applied to
    /// anything. Every other name is a constructor, which must be declared.
    /// Dot patterns are resolved as ordinary terms in the same environment.
    pub fn pattern(
        &mut self,
        env: &mut Env<'a>,
        pattern: &parsed::Pattern,
        path: Path<'a>,
    ) -> Result<Pattern<'a>, ErrorId> {
        let max = self.ctx.limits.max_pattern_depth;
        if path.depth() >= max {
            return Err(self.errors.capacity_error(pattern.span).pattern_too_deep(max));
        }

        let span = pattern.span;
        if env.contains(&pattern.head) {
            if !pattern.dots.is_empty() || !pattern.args.is_empty() {
                let name = self.ctx.atoms.get(&pattern.head);
                return Err(self.errors.rule_error(span).applied_variable(name));
            }

            trace!("variable {} at {path}", self.ctx.atoms.get(&pattern.head));
            let node = PatternNode::Var(pattern.head, path);
            return Ok(Pattern { node, span });
        }

        let name = self.global(pattern.head, pattern.head_span)?;
        let alloc = self.alloc;
        let (dots, args) = self.arguments(env, pattern.dots, pattern.args, move |index| {
            path.child(alloc, index)
        })?;

        let node = PatternNode::Constructor(Constructor {
            name,
            dots,
            args,
            path,
        });

        Ok(Pattern { node, span })
    }

    /// Resolve the head of the left-hand side of a rule. The head must be
    /// declared in the current module and may not be bound as a pattern
    /// variable, neither as written nor without its qualifier.
    pub fn head(&mut self, env: &Env<'a>, name: Atom, at: Span, rule: usize) -> Result<Atom, ErrorId> {
        let ctx = self.ctx;
        let atoms = &ctx.atoms;
        let base = atoms.intern(atoms.base(&name));
        if env.contains(&name) || env.contains(&base) {
            return Err(self.errors.name_error(at).bound_head(atoms.get(&name), rule));
        }

        if atoms.is_qualified(&name) && !ctx.module.owns(atoms, &name) {
            let module = ctx.module.name();
            return Err(self.errors.name_error(at).foreign_head(atoms.get(&name), module));
        }

        self.global(name, at)
    }

    /// Resolve the top-level arguments of a rule, which sit at the roots of
    /// their paths.
    #[allow(clippy::type_complexity)]
    pub fn arguments_of_rule(
        &mut self,
        env: &mut Env<'a>,
        pattern: &parsed::Pattern,
    ) -> Result<(&'a [Term<'a>], &'a [Pattern<'a>]), ErrorId> {
        let alloc = self.alloc;
        self.arguments(env, pattern.dots, pattern.args, |index| Path::root(alloc, index))
    }

    /// Resolve dot patterns and sub-patterns. The `j`th sub-pattern is found at
    /// the position `d + j`, where `d` is the number of dot patterns.
    #[allow(clippy::type_complexity)]
    fn arguments(
        &mut self,
        env: &mut Env<'a>,
        dots: &[Term],
        args: &[parsed::Pattern],
        mut path: impl FnMut(usize) -> Path<'a>,
    ) -> Result<(&'a [Term<'a>], &'a [Pattern<'a>]), ErrorId> {
        let dots = dots
            .iter()
            .map(|dot| self.term_in(env, dot))
            .collect::<Result<Vec<_>, _>>()?;

        let offset = dots.len();
        let args = args
            .iter()
            .enumerate()
            .map(|(index, arg)| self.pattern(env, arg, path(offset + index)))
            .collect::<Result<Vec<_>, _>>()?;

        let dots = &*self.alloc.alloc_slice_fill_iter(dots);
        let args = &*self.alloc.alloc_slice_fill_iter(args);
        Ok((dots, args))
    }
}
