use bumpalo::Bump;

use crate::frontend::context::Limits;
use crate::frontend::errors::ErrorType;
use crate::frontend::testing::Store;
use crate::frontend::trees::parsed::Entry;
use crate::frontend::trees::term::TermNode;

#[test]
fn declarations_and_rules() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.parse(
        &alloc,
        "nat : Type.
         (; constructors ;)
         Z : nat.
         S : nat -> nat.
         [y : nat] plus Z y --> y
         [x : nat, y : nat] plus (S x) y --> S (plus x y).",
    );

    assert_eq!(4, entries.len());
    let Entry::Rules(set) = &entries[3] else {
        panic!("expected a rule set");
    };

    assert_eq!(2, set.rules.len());
    let second = &set.rules[1];
    assert_eq!(2, second.context.len());
    assert_eq!(s.atom("plus"), second.lhs.head);
    assert_eq!(2, second.lhs.args.len());
    assert_eq!(s.atom("S"), second.lhs.args[0].head);
    assert_eq!(1, second.lhs.args[0].args.len());
    assert_eq!(Some(s.atom("S")), second.rhs.head_name());
}

#[test]
fn binders() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.parse(&alloc, "id : A : Type -> x : A -> A.  k : Type -> Type -> Type.");

    let Entry::Declaration(decl) = &entries[0] else {
        panic!("expected a declaration");
    };

    let TermNode::Pi(Some(a), [domain, codomain]) = decl.ty.node else {
        panic!("expected a dependent product");
    };

    assert_eq!(s.atom("A"), a);
    assert!(domain.is_kind());
    assert!(matches!(codomain.node, TermNode::Pi(Some(_), _)));

    let Entry::Declaration(decl) = &entries[1] else {
        panic!("expected a declaration");
    };

    // arrows associate to the right
    let TermNode::Pi(None, [domain, codomain]) = decl.ty.node else {
        panic!("expected an arrow");
    };

    assert!(matches!(domain.node, TermNode::Type));
    assert!(codomain.is_kind());
}

#[test]
fn qualified_names_and_dots() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.parse(&alloc, "[n : nat.nat, v : vec n] tail {nat.S n} (cons n v) --> v.");

    let Entry::Rules(set) = &entries[0] else {
        panic!("expected a rule set");
    };

    let rule = &set.rules[0];
    assert_eq!(s.atom("nat.nat"), rule.context[0].ty.head_name().unwrap());
    assert_eq!(1, rule.lhs.dots.len());
    assert_eq!(Some(s.atom("nat.S")), rule.lhs.dots[0].head_name());
    assert_eq!(1, rule.lhs.args.len());
}

#[test]
fn lambdas() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.parse(&alloc, "[] twice --> f => x => f (f x).");

    let Entry::Rules(set) = &entries[0] else {
        panic!("expected a rule set");
    };

    let TermNode::Lam(f, body) = set.rules[0].rhs.node else {
        panic!("expected a lambda");
    };

    assert_eq!(s.atom("f"), f);
    assert!(matches!(body.node, TermNode::Lam(..)));
}

#[test]
fn recovery() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.try_parse(&alloc, "a : Type. b : -> . c : Type. [] d --> .  e : Type.");

    let oks: Vec<_> = entries.iter().map(Result::is_ok).collect();
    assert_eq!(vec![true, false, true, false, true], oks);
    assert_eq!(2, s.errors.num_errors());
}

#[test]
fn lexer_errors() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.try_parse(&alloc, "a : Type #. b : Type. (; never closed");

    assert_eq!(3, entries.len());
    assert!(entries[0].is_err());
    assert!(entries[1].is_ok());
    let Err(id) = entries[2] else {
        panic!("expected an unterminated comment");
    };

    assert_eq!(ErrorType::Syntax, s.error_type(id));
}

#[test]
fn dot_patterns_come_first() {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.try_parse(&alloc, "[x : A] f x {x} --> x.");
    assert!(entries[0].is_err());
}

#[test]
fn long_identifiers() {
    let alloc = Bump::new();
    let limits = Limits {
        max_ident_len: 8,
        ..Default::default()
    };

    let mut s = Store::with_limits(limits);
    let entries = s.try_parse(&alloc, "abcdefghij : Type.");
    let Err(id) = entries[0] else {
        panic!("expected a capacity error");
    };

    assert_eq!(ErrorType::Capacity, s.error_type(id));
}
