
use bumpalo::Bump;

use crate::frontend::source::SourceId;
use crate::frontend::testing::Store;
use crate::frontend::trees::term::Term;

const SIGNATURE: &str = "
    nat : Type.
    Z : nat.
    S : nat -> nat.
    P : nat -> nat -> nat.
    D : nat -> nat -> nat.
    plus : nat -> nat -> nat.
    f : nat -> nat -> nat.
    g : nat -> nat -> nat -> nat.
";

/// Build the ground term `S (S ... Z)` with `n` successors.
fn numeral<'a>(s: &Store, alloc: &'a Bump, n: usize) -> Term<'a> {
    let span = SourceId::new(0).span(0, 0);
    let succ = Term::var(s.qualified("S"), span);
    let mut term = Term::var(s.qualified("Z"), span);
    for _ in 0..n {
        term = Term::app(alloc, succ, term);
    }

    term
}
