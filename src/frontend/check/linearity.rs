use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use super::Validator;
use crate::frontend::errors::ErrorId;
use crate::frontend::names::Atom;
use crate::frontend::trees::parsed;
use crate::frontend::trees::path::Path;
use crate::frontend::trees::resolved::{Pattern, PatternNode};

impl<'a> Validator<'a, '_, '_> {
    /// Check that every constructor in `pattern` is applied like it is
    /// everywhere else in the rule set.
    pub(super) fn constructors(&mut self, pattern: &Pattern<'a>) -> Result<(), ErrorId> {
        let PatternNode::Constructor(ctor) = &pattern.node else {
            return Ok(());
        };

        for arg in ctor.args {
            self.constructors(arg)?;
        }

        let arity = ctor.arity();
        match self.arities.entry(ctor.name) {
            Entry::Vacant(entry) => {
                entry.insert((arity, pattern.span));
            }

            Entry::Occupied(entry) => {
                let (expected, prev) = *entry.get();
                if expected != arity {
                    let ctx = self.ctx;
                    let name = ctx.atoms.get(&ctor.name);
                    let error = self
                        .errors()
                        .rule_error(pattern.span)
                        .constructor_arity(prev, name, expected, arity);
                    return Err(error);
                }
            }
        }

        Ok(())
    }

    /// Check that every variable of the rule occurs exactly once in its
    /// patterns, and pair each with the path it occurs at. Occurrences in dot
    /// patterns do not count.
    pub(super) fn linearity(
        &mut self,
        index: usize,
        rule: &parsed::Rule,
        args: &[Pattern<'a>],
    ) -> Result<&'a [(Atom, Path<'a>)], ErrorId> {
        let mut occurrences = BTreeMap::new();
        for arg in args {
            occurrences_in(arg, &mut occurrences);
        }

        let ctx = self.ctx;
        let mut bindings = Vec::with_capacity(rule.context.len());
        for binding in rule.context {
            let name = ctx.atoms.get(&binding.name);
            match occurrences.get(&binding.name) {
                None => {
                    let error = self
                        .errors()
                        .rule_error(binding.span)
                        .unused_variable(name, index);
                    return Err(error);
                }

                Some((1, path)) => bindings.push((binding.name, *path)),

                Some((count, _)) => {
                    let error = self
                        .errors()
                        .rule_error(rule.lhs.span)
                        .non_linear(name, *count, index);
                    return Err(error);
                }
            }
        }

        Ok(&*self.alloc.alloc_slice_copy(&bindings))
    }
}

/// Count the occurrences of every pattern variable, remembering the path of
/// the first.
fn occurrences_in<'a>(pattern: &Pattern<'a>, counts: &mut BTreeMap<Atom, (usize, Path<'a>)>) {
    match &pattern.node {
        PatternNode::Var(name, path) => counts.entry(*name).or_insert((0, *path)).0 += 1,
        PatternNode::Constructor(ctor) => {
            for arg in ctor.args {
                occurrences_in(arg, counts);
            }
        }
    }
}
