use super::project;
use crate::frontend::names::Atom;
use crate::frontend::trees::path::Path;
use crate::frontend::trees::resolved::Arity;
use crate::frontend::trees::term::{Term, TermNode};

#[derive(Clone, Copy, Debug)]
pub enum DecisionTree<'a> {
    /// The rule `rule` applies.
    Leaf {
        rule: usize,
        rhs: &'a Term<'a>,
        bindings: &'a [(Atom, Path<'a>)],
    },

    /// Look at the head of the subterm at `test`, and continue with the branch
    /// of that constructor, or with `default` if there is none.
    Switch {
        test: Path<'a>,
        branches: &'a [Branch<'a>],
        default: &'a DecisionTree<'a>,
    },

    /// No rule applies.
    Fail,
}

#[derive(Clone, Copy, Debug)]
pub struct Branch<'a> {
    pub constructor: Atom,
    pub arity: Arity,
    pub tree: DecisionTree<'a>,
}

/// A rule selected for some arguments, together with the subterms its pattern
/// variables are bound to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Selected<'t> {
    pub rule: usize,
    pub bindings: Vec<(Atom, &'t Term<'t>)>,
}

impl<'a> DecisionTree<'a> {
    /// Select the rule which applies to the head symbol applied to `args`, if
    /// any. A constructor only matches when it is applied to exactly as many
    /// arguments as in the patterns.
    pub fn select<'t>(&self, args: &[&'t Term<'t>]) -> Option<Selected<'t>> {
        let mut tree = self;
        loop {
            match tree {
                DecisionTree::Leaf { rule, bindings, .. } => {
                    return select(*rule, bindings, args);
                }

                DecisionTree::Switch {
                    test,
                    branches,
                    default,
                } => {
                    let (head, sub) = project(args, *test)?.arguments();
                    let branch = match head.node {
                        TermNode::Var(name) => branches.iter().find(|branch| {
                            branch.constructor == name && branch.arity.total() == sub.len()
                        }),
                        _ => None,
                    };

                    tree = match branch {
                        Some(branch) => &branch.tree,
                        None => *default,
                    };
                }

                DecisionTree::Fail => return None,
            }
        }
    }

    /// The number of leaves in this tree.
    pub fn leaves(&self) -> usize {
        match self {
            DecisionTree::Leaf { .. } => 1,
            DecisionTree::Switch {
                branches, default, ..
            } => branches.iter().map(|branch| branch.tree.leaves()).sum::<usize>() + default.leaves(),
            DecisionTree::Fail => 0,
        }
    }
}

pub(super) fn select<'t>(
    rule: usize,
    bindings: &[(Atom, Path)],
    args: &[&'t Term<'t>],
) -> Option<Selected<'t>> {
    let bindings: Vec<_> = bindings
        .iter()
        .map(|(name, path)| Some((*name, project(args, *path)?)))
        .collect::<Option<_>>()?;

    Some(Selected { rule, bindings })
}
