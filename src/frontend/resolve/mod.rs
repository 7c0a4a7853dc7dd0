//! Name resolution binds every name in a term or pattern, either to an
//! enclosing binder or to a declared global, and qualifies the free ones with
//! their module. Resolution never mutates its input: it builds new, resolved
//! trees in the arena of the current phase.

mod pattern;
mod term;

#[cfg(test)]
mod tests;

use bumpalo::Bump;
use log::trace;

use crate::frontend::context::Context;
use crate::frontend::env::Env;
use crate::frontend::errors::{ErrorId, Errors};
use crate::frontend::names::Atom;
use crate::frontend::source::Span;

pub struct Resolver<'a, 'c, 'e> {
    ctx: &'c Context,
    alloc: &'a Bump,
    errors: &'e mut Errors,
}

impl<'a, 'c, 'e> Resolver<'a, 'c, 'e> {
    pub fn new(ctx: &'c Context, alloc: &'a Bump, errors: &'e mut Errors) -> Self {
        Self { ctx, alloc, errors }
    }

    pub fn errors(&mut self) -> &mut Errors {
        self.errors
    }

    /// Resolve a name occurring in a term.
    ///
    /// Bound names stay as they are. Names qualified with another module are
    /// trusted, since that module has already been checked. Every other name
    /// is qualified with the current module and must be declared.
    fn name(&mut self, env: &Env<'a>, name: Atom, at: Span) -> Result<Atom, ErrorId> {
        if env.contains(&name) {
            return Ok(name);
        }

        self.global(name, at)
    }

    /// Resolve a name which cannot be bound locally.
    fn global(&mut self, name: Atom, at: Span) -> Result<Atom, ErrorId> {
        let ctx = self.ctx;
        let atoms = &ctx.atoms;
        if atoms.is_qualified(&name) && !ctx.module.owns(atoms, &name) {
            trace!("trusting foreign name {}", atoms.get(&name));
            return Ok(name);
        }

        let qualified = self.qualify(name, at)?;
        if ctx.symbols.contains(&qualified) {
            Ok(qualified)
        } else {
            Err(self.errors.name_error(at).unknown_name(atoms.get(&name)))
        }
    }

    /// Whether `name` would resolve to a global, without reporting anything.
    pub fn is_global(&self, name: Atom) -> bool {
        let ctx = self.ctx;
        let atoms = &ctx.atoms;
        if atoms.is_qualified(&name) && !ctx.module.owns(atoms, &name) {
            return true;
        }

        ctx.module
            .qualify(atoms, name, ctx.limits.max_ident_len)
            .map_or(false, |qualified| ctx.symbols.contains(&qualified))
    }

    /// Qualify `name` with the current module.
    pub fn qualify(&mut self, name: Atom, at: Span) -> Result<Atom, ErrorId> {
        let max = self.ctx.limits.max_ident_len;
        self.ctx
            .module
            .qualify(&self.ctx.atoms, name, max)
            .map_err(|error| self.errors.name_error(at).qualification(&error))
    }
}
