//! A JSON dump of everything the frontend produces, mostly useful to inspect
//! decision trees.

use serde_json::{json, Value};

use super::Backend;
use crate::frontend::matching::DecisionTree;
use crate::frontend::names::{Atom, Atoms};
use crate::frontend::session::Defined;
use crate::frontend::trees::path::Path;
use crate::frontend::trees::resolved::{Arity, Declaration, Pattern, PatternNode, Rule, RuleSet};
use crate::frontend::trees::term::{Term, TermNode};
use crate::modules::Module;

pub struct Json<'c> {
    atoms: &'c Atoms,
    module: Option<String>,
    entries: Vec<Value>,
}

impl<'c> Json<'c> {
    pub fn new(atoms: &'c Atoms) -> Self {
        Self {
            atoms,
            module: None,
            entries: Vec::new(),
        }
    }

    fn name(&self, atom: &Atom) -> Value {
        Value::from(self.atoms.get(atom))
    }

    fn term_value(&self, term: &Term) -> Value {
        match &term.node {
            TermNode::Type => json!("Type"),
            TermNode::Var(name) => json!({ "var": self.name(name) }),
            TermNode::App([fun, arg]) => json!({
                "app": [self.term_value(fun), self.term_value(arg)],
            }),

            TermNode::Lam(param, body) => json!({
                "lam": { "param": self.name(param), "body": self.term_value(body) },
            }),

            TermNode::Pi(param, [domain, codomain]) => json!({
                "pi": {
                    "param": param.as_ref().map(|param| self.name(param)),
                    "domain": self.term_value(domain),
                    "codomain": self.term_value(codomain),
                },
            }),
        }
    }

    fn pattern(&self, pattern: &Pattern) -> Value {
        match &pattern.node {
            PatternNode::Var(name, path) => json!({
                "var": self.name(name),
                "path": path_value(*path),
            }),

            PatternNode::Constructor(ctor) => json!({
                "constructor": self.name(&ctor.name),
                "path": path_value(ctor.path),
                "dots": ctor.dots.iter().map(|dot| self.term_value(dot)).collect::<Vec<_>>(),
                "args": ctor.args.iter().map(|arg| self.pattern(arg)).collect::<Vec<_>>(),
            }),
        }
    }

    fn rule(&self, rule: &Rule) -> Value {
        let context: Vec<_> = rule
            .context
            .iter()
            .map(|(name, ty)| json!({ "name": self.name(name), "type": self.term_value(ty) }))
            .collect();

        json!({
            "context": context,
            "dots": rule.dots.iter().map(|dot| self.term_value(dot)).collect::<Vec<_>>(),
            "args": rule.args.iter().map(|arg| self.pattern(arg)).collect::<Vec<_>>(),
            "rhs": self.term_value(rule.rhs),
            "bindings": self.bindings(rule.bindings),
        })
    }

    fn bindings(&self, bindings: &[(Atom, Path)]) -> Value {
        bindings
            .iter()
            .map(|(name, path)| json!({ "name": self.name(name), "path": path_value(*path) }))
            .collect()
    }

    fn tree_value(&self, tree: &DecisionTree) -> Value {
        match tree {
            DecisionTree::Leaf { rule, bindings, .. } => json!({
                "leaf": { "rule": rule, "bindings": self.bindings(bindings) },
            }),

            DecisionTree::Switch {
                test,
                branches,
                default,
            } => {
                let branches: Vec<_> = branches
                    .iter()
                    .map(|branch| {
                        json!({
                            "constructor": self.name(&branch.constructor),
                            "arity": arity(branch.arity),
                            "tree": self.tree_value(&branch.tree),
                        })
                    })
                    .collect();

                json!({
                    "switch": {
                        "test": path_value(*test),
                        "branches": branches,
                        "default": self.tree_value(default),
                    },
                })
            }

            DecisionTree::Fail => json!("fail"),
        }
    }
}

impl Backend for Json<'_> {
    type Expr = Value;
    type Stmt = Value;

    fn prologue(&mut self, module: &Module) {
        self.module = Some(module.name().into());
    }

    fn declaration(&mut self, decl: &Declaration) {
        let entry = json!({
            "declaration": self.name(&decl.name),
            "type": self.term_value(decl.ty),
        });

        self.entries.push(entry);
    }

    fn rules(&mut self, defined: &Defined) {
        let set = &defined.rules;
        let tree = defined.tree.as_ref().map(|tree| self.tree(set, tree));
        let entry = json!({
            "rules": self.name(&set.head),
            "arity": arity(set.arity),
            "cases": set.rules.iter().map(|rule| self.rule(rule)).collect::<Vec<_>>(),
            "tree": tree,
        });

        self.entries.push(entry);
    }

    fn term(&mut self, term: &Term) -> Value {
        self.term_value(term)
    }

    fn tree(&mut self, _: &RuleSet, tree: &DecisionTree) -> Value {
        self.tree_value(tree)
    }

    fn finish(self) -> String {
        let dump = json!({
            "module": self.module,
            "entries": self.entries,
        });

        format!("{dump:#}\n")
    }
}

fn path_value(path: Path) -> Value {
    path.indices().iter().copied().collect()
}

fn arity(arity: Arity) -> Value {
    json!({ "dots": arity.dots, "patterns": arity.patterns })
}
