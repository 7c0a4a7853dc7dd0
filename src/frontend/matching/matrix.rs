use crate::frontend::names::Atom;
use crate::frontend::trees::resolved::{Constructor, PatternNode, RuleSet};

/// A cell of a pattern matrix.
#[derive(Clone, Copy, Debug)]
pub enum Cell<'a> {
    /// A pattern variable or a fresh wildcard.
    Any,
    Constructor(&'a Constructor<'a>),
}

impl Cell<'_> {
    pub fn is_constructor(&self) -> bool {
        matches!(self, Cell::Constructor(_))
    }
}

#[derive(Clone, Debug)]
pub struct Row<'a> {
    pub cells: Vec<Cell<'a>>,

    /// The index of the rule this row came from.
    pub rule: usize,
}

/// A pattern matrix has one row per rule which might still apply, and one
/// column per subterm which might still be tested. Dot patterns never become
/// columns, since they are never tested.
#[derive(Clone, Debug)]
pub struct Matrix<'a> {
    pub rows: Vec<Row<'a>>,
}

impl<'a> Matrix<'a> {
    /// Create the initial matrix of a rule set, where row `i` holds the
    /// ordinary arguments of rule `i`.
    pub fn new(set: &RuleSet<'a>) -> Self {
        let rows = set
            .rules
            .iter()
            .enumerate()
            .map(|(rule, r)| Row {
                cells: r.args.iter().map(|arg| cell(&arg.node)).collect(),
                rule,
            })
            .collect();

        Self { rows }
    }

    /// Get the first column in which the first row has a constructor.
    pub fn first_test(&self) -> Option<(usize, &'a Constructor<'a>)> {
        self.rows
            .first()?
            .cells
            .iter()
            .enumerate()
            .find_map(|(column, cell)| match cell {
                Cell::Constructor(ctor) => Some((column, *ctor)),
                Cell::Any => None,
            })
    }

    /// Get every distinct constructor in `column`, in row order.
    pub fn constructors(&self, column: usize) -> Vec<&'a Constructor<'a>> {
        let mut found: Vec<&'a Constructor<'a>> = Vec::new();
        for row in &self.rows {
            if let Cell::Constructor(ctor) = row.cells[column] {
                if found.iter().all(|seen| seen.name != ctor.name) {
                    found.push(ctor);
                }
            }
        }

        found
    }

    /// The matrix of the rows that still apply once `column` is known to be
    /// the constructor `name` applied to `arity` ordinary arguments. Those
    /// arguments replace the column.
    pub fn specialize(&self, column: usize, name: Atom, arity: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .filter_map(|row| {
                let inner: Vec<_> = match row.cells[column] {
                    Cell::Constructor(ctor) if ctor.name == name => {
                        ctor.args.iter().map(|arg| cell(&arg.node)).collect()
                    }

                    Cell::Constructor(_) => return None,
                    Cell::Any => vec![Cell::Any; arity],
                };

                Some(row.splice(column, inner))
            })
            .collect();

        Self { rows }
    }

    /// The matrix of the rows that still apply when `column` is none of the
    /// constructors tested for.
    pub fn default(&self, column: usize) -> Self {
        let rows = self
            .rows
            .iter()
            .filter(|row| !row.cells[column].is_constructor())
            .map(|row| row.splice(column, Vec::new()))
            .collect();

        Self { rows }
    }

    /// The number of constructors in this matrix, counting nested ones. This
    /// strictly decreases from a matrix to its specializations and its
    /// default, as long as the first row has a constructor in the column.
    pub fn size(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| &row.cells)
            .map(|cell| match cell {
                Cell::Any => 0,
                Cell::Constructor(ctor) => constructors_in(ctor),
            })
            .sum()
    }
}

impl<'a> Row<'a> {
    fn splice(&self, column: usize, inner: Vec<Cell<'a>>) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len() + inner.len());
        cells.extend_from_slice(&self.cells[..column]);
        cells.extend(inner);
        cells.extend_from_slice(&self.cells[column + 1..]);
        Self {
            cells,
            rule: self.rule,
        }
    }
}

fn constructors_in(ctor: &Constructor) -> usize {
    let nested: usize = ctor
        .args
        .iter()
        .map(|arg| match &arg.node {
            PatternNode::Var(..) => 0,
            PatternNode::Constructor(ctor) => constructors_in(ctor),
        })
        .sum();

    nested + 1
}

fn cell<'a>(node: &'a PatternNode<'a>) -> Cell<'a> {
    match node {
        PatternNode::Var(..) => Cell::Any,
        PatternNode::Constructor(ctor) => Cell::Constructor(ctor),
    }
}
