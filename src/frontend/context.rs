use crate::frontend::names::Atoms;
use crate::frontend::symbols::Symbols;
use crate::modules::Module;

/// Structural limits. None of these are semantic restrictions; they guard
/// against pathological inputs and are reported as capacity errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Limits {
    /// The maximum number of rules in a single rule set.
    pub max_rules: usize,

    /// The bound on the nesting depth of a pattern, counting the top-level
    /// arguments of a rule as depth one. Patterns must stay strictly below it.
    pub max_pattern_depth: usize,

    /// The maximum length of an identifier, qualified or not.
    pub max_ident_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rules: 32,
            max_pattern_depth: 32,
            max_ident_len: 128,
        }
    }
}

/// Everything that lives longer than a single declaration: the atom table, the
/// global symbol table, the module being compiled, and the configured limits.
#[derive(Debug)]
pub struct Context {
    pub atoms: Atoms,
    pub symbols: Symbols,
    pub module: Module,
    pub limits: Limits,
}

impl Context {
    pub fn new(module: Module, limits: Limits) -> Self {
        Self {
            atoms: Atoms::new(),
            symbols: Symbols::new(),
            module,
            limits,
        }
    }
}
