//! Backends turn compiled entries into output. Every entry is handed to the
//! backend as soon as it has been compiled, before its arena is reset, so
//! backends only ever keep owned output around.
//!
//! - [`lua`] - Lua code for a runtime which type checks and evaluates terms
//! - [`json`] - a dump of resolved declarations, rule sets and decision trees

pub mod json;
pub mod lua;

#[cfg(test)]
mod tests;

pub use self::json::Json;
pub use self::lua::Lua;

use std::str::FromStr;

use crate::frontend::matching::DecisionTree;
use crate::frontend::session::{Compiled, Defined};
use crate::frontend::trees::resolved::{Declaration, RuleSet};
use crate::frontend::trees::term::Term;
use crate::modules::Module;

pub trait Backend {
    type Expr;
    type Stmt;

    /// Called once, before any entry of `module`.
    fn prologue(&mut self, module: &Module);

    fn declaration(&mut self, decl: &Declaration);

    fn rules(&mut self, defined: &Defined);

    /// Translate a single resolved term.
    fn term(&mut self, term: &Term) -> Self::Expr;

    /// Translate the decision tree of a rule set with a non-zero arity.
    fn tree(&mut self, set: &RuleSet, tree: &DecisionTree) -> Self::Stmt;

    /// Produce the complete output.
    fn finish(self) -> String;

    fn entry(&mut self, compiled: &Compiled) {
        match compiled {
            Compiled::Declaration(decl) => self.declaration(decl),
            Compiled::Rules(defined) => self.rules(defined),
        }
    }
}

/// The kind of output to produce.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Emit {
    #[default]
    Lua,
    Json,
}

impl FromStr for Emit {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lua" => Ok(Self::Lua),
            "json" => Ok(Self::Json),

            _ => Err("expected one of `lua` or `json`"),
        }
    }
}
