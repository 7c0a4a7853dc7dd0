mod patterns;
mod terms;

use bumpalo::Bump;

use super::Resolver;
use crate::frontend::env::Env;
use crate::frontend::errors::ErrorType;
use crate::frontend::testing::Store;
use crate::frontend::trees::parsed::{Entry, Pattern};
use crate::frontend::trees::pretty::Pretty;
use crate::frontend::trees::term::Term;

const NAT: &str = "nat : Type. Z : nat. S : nat -> nat. plus : nat -> nat -> nat.";

/// Parse the type of the single declaration in `text`.
fn parse_type<'a>(s: &mut Store, alloc: &'a Bump, text: &str) -> Term<'a> {
    match s.parse(alloc, text).remove(0) {
        Entry::Declaration(decl) => decl.ty,
        Entry::Rules(_) => panic!("expected a declaration"),
    }
}

/// Parse the left-hand side of the single rule in `text`.
fn parse_lhs<'a>(s: &mut Store, alloc: &'a Bump, text: &str) -> Pattern<'a> {
    match s.parse(alloc, text).remove(0) {
        Entry::Rules(set) => {
            let [rule] = set.rules else {
                panic!("expected a single rule");
            };

            Pattern { ..rule.lhs }
        }

        Entry::Declaration(_) => panic!("expected a rule"),
    }
}

/// Resolve `term` with `bound` in scope, and pretty print the result.
fn resolve(s: &mut Store, alloc: &Bump, bound: &[&str], term: &Term) -> Result<String, ErrorType> {
    let mut env = Env::new();
    for name in bound {
        env.bind(s.atom(name), None);
    }

    let result = Resolver::new(&s.ctx, alloc, &mut s.errors).term(&mut env, term);
    match result {
        Ok(term) => Ok(Pretty::new(&s.ctx.atoms).term(term)),
        Err(id) => Err(s.error_type(id)),
    }
}
