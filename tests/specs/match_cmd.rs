//! Behavioral specs for `nre match`.

use crate::prelude::*;

/// > every name matched: exit 0
#[test]
fn all_names_match() {
    matching("<a>[<.*>]*", &["/a", "/a/b/c"]).passes().stdout_eq(
        "/a: match 0..1 <a>\n\
         /a/b/c: match 0..3 <a> <b> <c>\n\
         2 of 2 names matched\n",
    );
}

/// > any name unmatched: exit 1, output keeps argument order
#[test]
fn some_names_miss() {
    matching("<a>[<.*>]*", &["/b", "/a/x", "/c"]).no_match().stdout_eq(
        "/b: no match\n\
         /a/x: match 0..2 <a> <x>\n\
         /c: no match\n\
         1 of 3 names matched\n",
    );
}

/// > names accept the ndn: scheme and percent escapes
#[test]
fn uri_forms() {
    matching("<a%2Fb>", &["ndn:/a%2Fb", "ndn:///a%2Fb/"])
        .passes()
        .stdout_has("/a%2Fb: match 0..1 <a%2Fb>");
}

/// > --start and --count select the slice
#[test]
fn explicit_range() {
    matching("[^<a><b><c>]", &["/b/d"])
        .args(&["--start", "1", "--count", "1"])
        .passes()
        .stdout_has("/b/d: match 1..2 <d>");
}

/// > without --count the rest of the name after --start is used
#[test]
fn start_without_count() {
    matching("<b><c>", &["/a/b/c"])
        .args(&["--start", "1"])
        .passes()
        .stdout_has("match 1..3 <b> <c>");
}

/// > a count outside the pattern's span is a mismatch, not an error
#[test]
fn count_outside_span() {
    matching("[<a><b>]+", &["/a/b/c"])
        .args(&["--count", "0"])
        .no_match()
        .stdout_has("/a/b/c: no match");
}

/// > a range past the end of the name is a mismatch
#[test]
fn range_past_end() {
    matching("<.*>*", &["/a"])
        .args(&["--start", "1", "--count", "5"])
        .no_match();
}

/// > --find reports the leftmost, longest matching slice
#[test]
fn find_leftmost_longest() {
    matching("<b>[<c>]*", &["/a/b/c/c/b", "/x"])
        .args(&["--find"])
        .no_match()
        .stdout_eq(
            "/a/b/c/c/b: match 1..4 <b> <c> <c>\n\
             /x: no match\n\
             1 of 2 names matched\n",
        );
}

#[test]
fn find_conflicts_with_count() {
    matching("<a>", &["/a"])
        .args(&["--find", "--count", "1"])
        .exits(2)
        .stderr_has("cannot be used with");
}

/// > invalid names exit 2
#[test]
fn invalid_name_exits_2() {
    matching("<a>", &["/a/.."])
        .exits(2)
        .stderr_has("nre: name error: invalid component '..'");
}

/// > invalid patterns exit 2 before any name is matched
#[test]
fn invalid_pattern_exits_2() {
    matching("<a", &["/a"]).exits(2).stderr_has("pattern error");
}

/// > JSON output reports each name with captures
#[test]
fn match_json() {
    let value = matching("<a>[<.*>]*", &["/a/%00%05", "/b"])
        .json()
        .no_match_json();
    assert_eq!(value["pattern"], "<a>[<.*>]*");
    assert_eq!(value["passed"], false);
    assert_eq!(value["matched"], 1);
    assert_eq!(value["total"], 2);
    assert_eq!(value["results"][0]["name"], "/a/%00%05");
    assert_eq!(value["results"][0]["start"], 0);
    assert_eq!(value["results"][0]["count"], 2);
    assert_eq!(
        value["results"][0]["captures"],
        serde_json::json!(["a", "%00%05"])
    );
    assert_eq!(value["results"][1]["matched"], false);
}

/// > large batches keep argument order
#[test]
fn many_names_keep_order() {
    let names: Vec<String> = (0..64).map(|i| format!("/n/{}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let value = matching("<n><.*>", &refs).json().passes_json();
    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 64);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result["name"], format!("/n/{}", i));
    }
}
