//! The processing of a single entry, from a parsed tree to a resolved tree and,
//! for rule sets, a decision tree.

use bumpalo::Bump;
use log::{debug, trace};

use crate::frontend::check::validate;
use crate::frontend::context::Context;
use crate::frontend::env::Env;
use crate::frontend::errors::{ErrorId, Errors};
use crate::frontend::matching::{compile, DecisionTree};
use crate::frontend::resolve::Resolver;
use crate::frontend::symbols::Status;
use crate::frontend::trees::pretty::Pretty;
use crate::frontend::trees::{parsed, resolved};

/// A successfully compiled entry.
pub enum Compiled<'a> {
    Declaration(resolved::Declaration<'a>),
    Rules(Defined<'a>),
}

/// An accepted rule set. Constants have no decision tree.
pub struct Defined<'a> {
    pub rules: resolved::RuleSet<'a>,
    pub tree: Option<DecisionTree<'a>>,
}

pub fn entry<'a>(
    ctx: &Context,
    alloc: &'a Bump,
    errors: &mut Errors,
    entry: &parsed::Entry,
) -> Result<Compiled<'a>, ErrorId> {
    match entry {
        parsed::Entry::Declaration(decl) => {
            declaration(ctx, alloc, errors, decl).map(Compiled::Declaration)
        }

        parsed::Entry::Rules(set) => rules(ctx, alloc, errors, set).map(Compiled::Rules),
    }
}

/// Resolve the type of a declaration and declare its name. The name is not in
/// scope in its own type.
pub fn declaration<'a>(
    ctx: &Context,
    alloc: &'a Bump,
    errors: &mut Errors,
    decl: &parsed::Declaration,
) -> Result<resolved::Declaration<'a>, ErrorId> {
    let mut resolver = Resolver::new(ctx, alloc, errors);
    let name = resolver.qualify(decl.name, decl.name_span)?;
    let ty = resolver.term(&mut Env::new(), &decl.ty)?;

    if ctx.symbols.declare(name).is_err() {
        return Err(errors.name_error(decl.name_span).redeclared(ctx.atoms.get(&name)));
    }

    debug!(
        "declared {} : {}{}",
        ctx.atoms.get(&name),
        Pretty::new(&ctx.atoms).term(ty),
        if ty.is_kind() { " (a type family)" } else { "" }
    );

    Ok(resolved::Declaration {
        name,
        ty,
        span: decl.span,
    })
}

/// Validate a rule set, compile it, and mark its head symbol as defined. A
/// rule set which fails leaves the symbol table untouched.
pub fn rules<'a>(
    ctx: &Context,
    alloc: &'a Bump,
    errors: &mut Errors,
    set: &parsed::RuleSet,
) -> Result<Defined<'a>, ErrorId> {
    let rules = validate(ctx, alloc, errors, set)?;
    if ctx.symbols.status(&rules.head) == Some(Status::Defined) {
        return Err(errors.name_error(set.span).redefined(ctx.atoms.get(&rules.head)));
    }

    let tree = (rules.arity.total() > 0).then(|| compile(alloc, &rules));
    ctx.symbols.define(rules.head);

    let pretty = Pretty::new(&ctx.atoms);
    for rule in rules.rules {
        let args: Vec<_> = rule.args.iter().map(|arg| pretty.pattern(arg)).collect();
        trace!("  [{}] --> {}", args.join("] ["), pretty.term(rule.rhs));
    }

    debug!(
        "defined {} by {} rules",
        ctx.atoms.get(&rules.head),
        rules.rules.len()
    );

    Ok(Defined { rules, tree })
}
