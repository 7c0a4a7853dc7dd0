use bumpalo::Bump;
use log::trace;

use super::matrix::Matrix;
use super::tree::{Branch, DecisionTree};
use crate::frontend::trees::resolved::RuleSet;

/// Compile a validated rule set into a decision tree.
pub fn compile<'a>(alloc: &'a Bump, set: &RuleSet<'a>) -> DecisionTree<'a> {
    let compiler = Compiler { alloc, set };
    compiler.tree(Matrix::new(set))
}

struct Compiler<'a, 's> {
    alloc: &'a Bump,
    set: &'s RuleSet<'a>,
}

impl<'a> Compiler<'a, '_> {
    fn tree(&self, matrix: Matrix<'a>) -> DecisionTree<'a> {
        let Some(first) = matrix.rows.first() else {
            return DecisionTree::Fail;
        };

        let Some((column, head)) = matrix.first_test() else {
            let rule = &self.set.rules[first.rule];
            trace!("leaf for rule {}", first.rule);
            return DecisionTree::Leaf {
                rule: first.rule,
                rhs: rule.rhs,
                bindings: rule.bindings,
            };
        };

        trace!("switch on column {column} at {}", head.path);
        let branches: Vec<_> = matrix
            .constructors(column)
            .into_iter()
            .map(|ctor| {
                let arity = ctor.arity();
                let specialized = matrix.specialize(column, ctor.name, arity.patterns);
                debug_assert!(specialized.size() < matrix.size());

                Branch {
                    constructor: ctor.name,
                    arity,
                    tree: self.tree(specialized),
                }
            })
            .collect();

        let default = matrix.default(column);
        debug_assert!(default.size() < matrix.size());
        let default = self.tree(default);

        DecisionTree::Switch {
            test: head.path,
            branches: self.alloc.alloc_slice_fill_iter(branches),
            default: self.alloc.alloc(default),
        }
    }
}
