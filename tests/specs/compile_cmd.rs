//! Behavioral specs for `nre compile`.

use crate::prelude::*;

/// > compile prints the canonical form, span and node tree
#[test]
fn compile_prints_tree() {
    compile("a [<b><c>]*").passes().stdout_eq(
        "pattern: <a>[<b><c>]*\n\
         span: [1, inf]\n\
         sequence [1, inf]\n  \
         literal <a> [1, 1]\n  \
         repeat * [0, inf]\n    \
         set [<b><c>] [1, 1]\n",
    );
}

/// > an empty pattern compiles to an empty sequence
#[test]
fn compile_empty_pattern() {
    compile("")
        .passes()
        .stdout_has("span: [0, 0]")
        .stdout_has("sequence [0, 0]");
}

/// > syntax errors exit 2 with the offset
#[test]
fn syntax_error_exits_2() {
    compile("<a>[<b>")
        .exits(2)
        .stderr_has("nre: pattern error: unclosed '['");
}

#[test]
fn empty_set_is_rejected() {
    compile("[]").exits(2).stderr_has("empty component set at offset 0");
}

#[test]
fn negated_group_is_rejected() {
    compile("[^<a>*]").exits(2).stderr_has("negated bracket");
}

#[test]
fn reversed_range_is_rejected() {
    compile("<a>{3,1}").exits(2).stderr_has("empty repeat range {3,1}");
}

#[test]
fn stacked_quantifiers_are_rejected() {
    compile("<a>**").exits(2).stderr_has("nothing to repeat");
}

/// > JSON output carries the tree
#[test]
fn compile_json() {
    let value = compile("[<a><b>]{2,}").json().passes_json();
    assert_eq!(value["pattern"], "[<a><b>]{2,}");
    assert_eq!(value["canonical"], "[<a><b>]{2,}");
    assert_eq!(value["span"]["min"], 2);
    assert!(value["span"]["max"].is_null());
    assert_eq!(value["tree"]["kind"], "repeat");
    assert_eq!(value["tree"]["text"], "{2,}");
    assert_eq!(value["tree"]["children"][0]["kind"], "set");
}
