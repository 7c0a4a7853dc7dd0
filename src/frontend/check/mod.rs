//! Validation of rule sets. A rule set is accepted when
//!
//! - it has no more rules than the configured maximum,
//! - every rule defines the same symbol, declared in the current module,
//! - every rule takes the same number of dot patterns and ordinary patterns,
//!   and a constant has exactly one rule,
//! - no rule binds the head symbol as a pattern variable,
//! - the context of every rule is well scoped,
//! - every constructor is applied to the same number of arguments throughout
//!   the set,
//! - and every pattern variable occurs exactly once in its rule's patterns.
//!
//! Validation also resolves every rule, so an accepted rule set is ready for
//! decision tree compilation.

mod context;
mod linearity;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use bumpalo::Bump;
use log::{debug, trace};

use crate::frontend::context::Context;
use crate::frontend::errors::{ErrorId, Errors};
use crate::frontend::names::Atom;
use crate::frontend::resolve::Resolver;
use crate::frontend::source::Span;
use crate::frontend::trees::parsed;
use crate::frontend::trees::resolved::{Arity, Rule, RuleSet};

pub fn validate<'a>(
    ctx: &Context,
    alloc: &'a Bump,
    errors: &mut Errors,
    set: &parsed::RuleSet,
) -> Result<RuleSet<'a>, ErrorId> {
    let mut validator = Validator {
        ctx,
        alloc,
        resolver: Resolver::new(ctx, alloc, errors),
        arities: BTreeMap::new(),
    };

    validator.rule_set(set)
}

struct Validator<'a, 'c, 'e> {
    ctx: &'c Context,
    alloc: &'a Bump,
    resolver: Resolver<'a, 'c, 'e>,

    /// The arity of every constructor seen so far, with the span of its first
    /// use.
    arities: BTreeMap<Atom, (Arity, Span)>,
}

impl<'a> Validator<'a, '_, '_> {
    fn rule_set(&mut self, set: &parsed::RuleSet) -> Result<RuleSet<'a>, ErrorId> {
        let count = set.rules.len();
        let max = self.ctx.limits.max_rules;
        if count > max {
            return Err(self.errors().capacity_error(set.span).too_many_rules(count, max));
        }

        let Some(first) = set.rules.first() else {
            unreachable!("the parser never produces empty rule sets");
        };

        let arity = Arity {
            dots: first.lhs.dots.len(),
            patterns: first.lhs.args.len(),
        };

        let ctx = self.ctx;
        if arity.total() == 0 && count != 1 {
            let name = ctx.atoms.get(&first.lhs.head);
            return Err(self.errors().rule_error(set.span).constant_with_rules(name, count));
        }

        let mut head = None;
        let mut rules = Vec::with_capacity(count);
        for (index, rule) in set.rules.iter().enumerate() {
            let actual = Arity {
                dots: rule.lhs.dots.len(),
                patterns: rule.lhs.args.len(),
            };

            if actual != arity {
                let error = self
                    .errors()
                    .rule_error(rule.lhs.span)
                    .arity_mismatch(first.span, arity, actual);
                return Err(error);
            }

            let (rule, name) = self.rule(index, rule)?;
            match head {
                None => head = Some(name),
                Some(head) if head != name => {
                    let (expected, actual) = (ctx.atoms.get(&head), ctx.atoms.get(&name));
                    let error = self
                        .errors()
                        .rule_error(set.rules[index].lhs.head_span)
                        .head_mismatch(first.span, expected, actual);
                    return Err(error);
                }

                Some(_) => {}
            }

            rules.push(rule);
        }

        let Some(head) = head else {
            unreachable!("the parser never produces empty rule sets");
        };

        debug!(
            "validated {} rules for {}",
            rules.len(),
            ctx.atoms.get(&head)
        );

        Ok(RuleSet {
            head,
            arity,
            rules: self.alloc.alloc_slice_fill_iter(rules),
            span: set.span,
        })
    }

    /// Validate and resolve a single rule, returning it together with its
    /// resolved head symbol.
    fn rule(&mut self, index: usize, rule: &parsed::Rule) -> Result<(Rule<'a>, Atom), ErrorId> {
        let (mut env, context) = self.context(rule.context)?;

        let lhs = &rule.lhs;
        let head = self.resolver.head(&env, lhs.head, lhs.head_span, index)?;
        trace!("rule {index} for {}", self.ctx.atoms.get(&head));

        let (dots, args) = self.resolver.arguments_of_rule(&mut env, lhs)?;
        let rhs = self.resolver.term(&mut env, &rule.rhs)?;

        for arg in args {
            self.constructors(arg)?;
        }

        let bindings = self.linearity(index, rule, args)?;

        let rule = Rule {
            context,
            dots,
            args,
            rhs,
            bindings,
            span: rule.span,
        };

        Ok((rule, head))
    }

    fn errors(&mut self) -> &mut Errors {
        self.resolver.errors()
    }
}
