mod json;

use super::Backend;
use crate::frontend::session::Compiled;
use crate::frontend::testing::Store;

const NAT: &str = "
    nat : Type.
    Z : nat.
    S : nat -> nat.
    plus : nat -> nat -> nat.
    [y : nat] plus Z y --> y
    [x : nat, y : nat] plus (S x) y --> S (plus x y).
";

/// Feed the compiled entries of the test module to `backend`.
fn emit<B: Backend>(mut backend: B, s: &Store, entries: &[Compiled]) -> String {
    backend.prologue(&s.ctx.module);
    for compiled in entries {
        backend.entry(compiled);
    }

    backend.finish()
}
