//! Compilation of rule sets into decision trees, following Maranget's
//! "Compiling pattern matching to good decision trees" without the column
//! heuristics: the first column where the first row has a constructor is
//! tested first.
//!
//! A decision tree is equivalent to trying every rule in order. Both ways of
//! matching are available, through [`DecisionTree::select`] and
//! [`first_match`], and they always agree.

mod compile;
mod matrix;
mod naive;
mod tree;

#[cfg(test)]
mod tests;

pub use self::compile::compile;
pub use self::matrix::{Cell, Matrix, Row};
pub use self::naive::first_match;
pub use self::tree::{Branch, DecisionTree, Selected};

use crate::frontend::trees::path::Path;
use crate::frontend::trees::term::Term;

/// Find the subterm at `path` among the arguments of a head symbol.
fn project<'t>(args: &[&'t Term<'t>], path: Path) -> Option<&'t Term<'t>> {
    let (first, rest) = path.indices().split_first()?;
    let mut term = *args.get(*first)?;
    for index in rest {
        let (_, sub) = term.arguments();
        term = *sub.get(*index)?;
    }

    Some(term)
}
