use bumpalo::Bump;
use serde_json::{json, Value};

use super::{emit, NAT};
use crate::backend::Json;
use crate::frontend::testing::Store;

fn dump(text: &str) -> Value {
    let alloc = Bump::new();
    let mut s = Store::new();
    let entries = s.accept(&alloc, text);
    let out = emit(Json::new(&s.ctx.atoms), &s, &entries);
    serde_json::from_str(&out).unwrap()
}

#[test]
fn declarations() {
    let dump = dump("nat : Type. S : n : nat -> nat.");

    assert_eq!(json!("test"), dump["module"]);
    assert_eq!(json!("test.nat"), dump["entries"][0]["declaration"]);
    assert_eq!(json!("Type"), dump["entries"][0]["type"]);

    let pi = &dump["entries"][1]["type"]["pi"];
    assert_eq!(json!("n"), pi["param"]);
    assert_eq!(json!({ "var": "test.nat" }), pi["domain"]);
}

#[test]
fn plus() {
    let dump = dump(NAT);
    let plus = &dump["entries"][4];

    assert_eq!(json!("test.plus"), plus["rules"]);
    assert_eq!(json!({ "dots": 0, "patterns": 2 }), plus["arity"]);

    let bindings = &plus["cases"][1]["bindings"];
    assert_eq!(
        json!([{ "name": "x", "path": [0, 0] }, { "name": "y", "path": [1] }]),
        *bindings
    );

    let switch = &plus["tree"]["switch"];
    assert_eq!(json!([0]), switch["test"]);
    assert_eq!(json!("fail"), switch["default"]);
    assert_eq!(json!("test.Z"), switch["branches"][0]["constructor"]);
    assert_eq!(json!(0), switch["branches"][0]["tree"]["leaf"]["rule"]);
    assert_eq!(json!("test.S"), switch["branches"][1]["constructor"]);
    assert_eq!(*bindings, switch["branches"][1]["tree"]["leaf"]["bindings"]);
}

#[test]
fn constants_have_no_tree() {
    let dump = dump("nat : Type. Z : nat. zero : nat. [] zero --> Z.");
    let zero = &dump["entries"][3];

    assert_eq!(Value::Null, zero["tree"]);
    assert_eq!(json!({ "var": "test.Z" }), zero["cases"][0]["rhs"]);
}
