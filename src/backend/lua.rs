//! Lua code generation.
//!
//! Every identifier `x` is represented by two Lua values: `x_c`, its dynamic
//! value, and `x_t`, its static value used for type checking. Qualified names
//! like `nat.Z` become fields of the module tables set up by the prologue.
//! Rule sets compile to a single function whose body is the decision tree,
//! with the arguments of the head symbol as `y1` to `yn`.

use super::Backend;
use crate::frontend::matching::DecisionTree;
use crate::frontend::names::{Atom, Atoms};
use crate::frontend::session::Defined;
use crate::frontend::trees::path::Path;
use crate::frontend::trees::resolved::{Declaration, Pattern, PatternNode, Rule, RuleSet};
use crate::frontend::trees::term::{Term, TermNode};
use crate::modules::Module;

/// The name used for the parameter of non-dependent products.
const HOLE: &str = "dkhole";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Kind {
    Code,
    Term,
}

pub struct Lua<'c> {
    atoms: &'c Atoms,
    out: String,
}

impl<'c> Lua<'c> {
    pub fn new(atoms: &'c Atoms) -> Self {
        Self {
            atoms,
            out: String::new(),
        }
    }

    fn name(&self, kind: Kind, atom: &Atom) -> String {
        name(kind, self.atoms.get(atom))
    }

    /// The dynamic translation of a term.
    fn code(&self, term: &Term) -> String {
        match &term.node {
            TermNode::Type => "{ ck = ctype }".into(),
            TermNode::Var(name) => self.name(Kind::Code, name),
            TermNode::App([fun, arg]) => format!("ap({}, {})", self.code(fun), self.code(arg)),

            TermNode::Lam(..) => {
                let mut params = Vec::new();
                let mut body = term;
                while let TermNode::Lam(param, inner) = &body.node {
                    params.push(self.name(Kind::Code, param));
                    body = inner;
                }

                format!(
                    "{{ ck = clam, arity = {}, args = {{ }}, clam = function ({}) return {} end }}",
                    params.len(),
                    params.join(", "),
                    self.code(body)
                )
            }

            TermNode::Pi(param, [domain, codomain]) => {
                let param = match param {
                    Some(param) => self.name(Kind::Code, param),
                    None => HOLE.into(),
                };

                format!(
                    "{{ ck = cpi, cpi = {{ {}, function ({param}) return {} end }} }}",
                    self.code(domain),
                    self.code(codomain)
                )
            }
        }
    }

    /// The static translation of a term.
    fn statik(&self, term: &Term) -> String {
        match &term.node {
            TermNode::Type => "{ tk = ttype }".into(),
            TermNode::Var(name) => self.name(Kind::Term, name),
            TermNode::App([fun, arg]) => format!(
                "{{ tk = tapp, tapp = {{ {}, {}, {} }} }}",
                self.statik(fun),
                self.statik(arg),
                self.code(arg)
            ),

            TermNode::Lam(param, body) => format!(
                "{{ tk = tlam, tlam = {{ nil, function ({}, {}) return {} end }} }}",
                self.name(Kind::Term, param),
                self.name(Kind::Code, param),
                self.statik(body)
            ),

            TermNode::Pi(param, [domain, codomain]) => {
                let domain = match domain.node {
                    TermNode::Var(name) => self.name(Kind::Code, &name),
                    _ => format!("chkabs({}, {})", self.statik(domain), self.code(domain)),
                };

                let (statik, code) = match param {
                    Some(param) => (self.name(Kind::Term, param), self.name(Kind::Code, param)),
                    None => (name(Kind::Term, HOLE), name(Kind::Code, HOLE)),
                };

                format!(
                    "{{ tk = tpi, tpi = {{ {domain}, function ({statik}, {code}) return {} end }} }}",
                    self.statik(codomain)
                )
            }
        }
    }

    /// The static and dynamic translations of `head` applied to some dot
    /// patterns and some patterns.
    fn application(&self, head: &Atom, dots: &[Term], args: &[Pattern]) -> (String, String) {
        let mut statik = self.name(Kind::Term, head);
        let mut code = self.name(Kind::Code, head);

        let operands = dots
            .iter()
            .map(|dot| (self.statik(dot), self.code(dot)))
            .chain(args.iter().map(|arg| self.pattern(arg)));

        for (arg_statik, arg_code) in operands {
            statik = format!("{{ tk = tapp, tapp = {{ {statik}, {arg_statik}, {arg_code} }} }}");
            code = format!("ap({code}, {arg_code})");
        }

        (statik, code)
    }

    fn pattern(&self, pattern: &Pattern) -> (String, String) {
        match &pattern.node {
            PatternNode::Var(name, _) => (self.name(Kind::Term, name), self.name(Kind::Code, name)),
            PatternNode::Constructor(ctor) => self.application(&ctor.name, ctor.dots, ctor.args),
        }
    }

    /// Type check the type of a constant and introduce it. Pattern variables
    /// are introduced as fresh constants local to the rule.
    fn constant(&mut self, name: &Atom, ty: &Term, local: bool) {
        let text = self.atoms.get(name);
        let code = self.name(Kind::Code, name);
        let local = if local { "local " } else { "" };

        let block = format!(
            "chkbeg(\"{text}\")\n\
             chksort({})\n\
             {local}{code} = {{ ck = ccon, ccon = \"{text}\", args = {{ }} }}\n\
             {local}{} = {{ tk = tbox, tbox = {{ {}, {code} }} }}\n\
             chkend(\"{text}\")\n",
            self.statik(ty),
            self.name(Kind::Term, name),
            self.code(ty),
        );

        self.out.push_str(&block);
    }

    fn check_rule(&mut self, set: &RuleSet, index: usize, rule: &Rule) {
        self.out.push_str(&format!("chkbeg(\"rule {}\")\n", index + 1));
        for (name, ty) in rule.context {
            self.constant(name, ty, true);
        }

        let (lhs, _) = self.application(&set.head, rule.dots, rule.args);
        let block = format!(
            "do\nlocal ty = synth(0, {lhs})\nchk({}, ty)\nend\nchkend(\"rule {}\")\n",
            self.statik(rule.rhs),
            index + 1
        );

        self.out.push_str(&block);
    }

    fn tree_in(&self, out: &mut String, set: &RuleSet, tree: &DecisionTree) {
        match tree {
            DecisionTree::Leaf { rhs, bindings, .. } => {
                if !bindings.is_empty() {
                    let names: Vec<_> = bindings
                        .iter()
                        .map(|(name, _)| self.name(Kind::Code, name))
                        .collect();
                    let paths: Vec<_> = bindings.iter().map(|(_, path)| projection(*path)).collect();
                    out.push_str(&format!("local {} = {}\n", names.join(", "), paths.join(", ")));
                }

                out.push_str("return ");
                out.push_str(&self.code(rhs));
            }

            DecisionTree::Switch {
                test,
                branches,
                default,
            } => {
                let at = projection(*test);
                for (index, branch) in branches.iter().enumerate() {
                    let keyword = if index == 0 { "if" } else { "\nelseif" };
                    out.push_str(&format!(
                        "{keyword} {at}.ck == ccon and {at}.ccon == \"{}\" and #{at}.args == {} then\n",
                        self.atoms.get(&branch.constructor),
                        branch.arity.total()
                    ));

                    self.tree_in(out, set, &branch.tree);
                }

                out.push_str("\nelse\n");
                self.tree_in(out, set, default);
                out.push_str("\nend");
            }

            DecisionTree::Fail => out.push_str(&format!(
                "return {{ ck = ccon, ccon = \"{}\", args = {{ {} }} }}",
                self.atoms.get(&set.head),
                params(set.arity.total())
            )),
        }
    }
}

impl Backend for Lua<'_> {
    type Expr = String;
    type Stmt = String;

    fn prologue(&mut self, module: &Module) {
        self.out.push_str(&format!("--[[ Code for module {}. ]]\nlocal ", module.name()));
        for prefix in module.prefixes() {
            self.out.push_str(&format!("{} = {{ }}\n", mangle(prefix)));
        }

        self.out.push('\n');
    }

    fn declaration(&mut self, decl: &Declaration) {
        self.out.push_str(&format!(
            "--[[ Type checking {}. ]]\n",
            self.atoms.get(&decl.name)
        ));

        self.constant(&decl.name, decl.ty, false);
        self.out.push('\n');
    }

    fn rules(&mut self, defined: &Defined) {
        let atoms = self.atoms;
        let set = &defined.rules;
        let head = atoms.get(&set.head);

        let Some(tree) = &defined.tree else {
            let [rule] = set.rules else {
                unreachable!("constants have exactly one rule");
            };

            let block = format!(
                "--[[ Type checking the definition of {head}. ]]\n\
                 chkbeg(\"definition of {head}\")\n\
                 chk({}, {}.tbox[1])\n\
                 chkend(\"definition of {head}\")\n\
                 {} = {}\n\n",
                self.statik(rule.rhs),
                self.name(Kind::Term, &set.head),
                self.name(Kind::Code, &set.head),
                self.code(rule.rhs),
            );

            self.out.push_str(&block);
            return;
        };

        self.out.push_str(&format!(
            "--[[ Type checking rules of {head}. ]]\n\
             local function check_rules()\n\
             chkbeg(\"rules of {head}\")\n"
        ));

        for (index, rule) in set.rules.iter().enumerate() {
            self.check_rule(set, index, rule);
        }

        self.out.push_str(&format!("chkend(\"rules of {head}\")\nend\ncheck_rules()\n"));

        let body = self.tree(set, tree);
        let arity = set.arity.total();
        self.out.push_str(&format!(
            "--[[ Compiling rules of {head}. ]]\n\
             {} = {{ ck = clam, arity = {arity}, args = {{ }}, clam =\n\
             function ({})\n\
             {body}\n\
             end }}\n\n",
            self.name(Kind::Code, &set.head),
            params(arity),
        ));
    }

    fn term(&mut self, term: &Term) -> String {
        self.code(term)
    }

    fn tree(&mut self, set: &RuleSet, tree: &DecisionTree) -> String {
        let mut out = String::new();
        self.tree_in(&mut out, set, tree);
        out
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Escape an identifier so that it cannot clash with the names the generated
/// code adds suffixes to. Every `x` becomes `xx` and every `'` becomes `xq`.
pub(super) fn mangle(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'x' => out.push_str("xx"),
            '\'' => out.push_str("xq"),
            c => out.push(c),
        }
    }

    out
}

fn name(kind: Kind, text: &str) -> String {
    let suffix = match kind {
        Kind::Code => "_c",
        Kind::Term => "_t",
    };

    mangle(text) + suffix
}

/// The expression for the subterm at `path` among the arguments `y1` to `yn`.
fn projection(path: Path) -> String {
    let mut indices = path.indices().iter();
    let mut out = match indices.next() {
        Some(first) => format!("y{}", first + 1),
        None => unreachable!("paths are never empty"),
    };

    for index in indices {
        out.push_str(&format!(".args[{}]", index + 1));
    }

    out
}

fn params(arity: usize) -> String {
    let params: Vec<_> = (1..=arity).map(|index| format!("y{index}")).collect();
    params.join(", ")
}
