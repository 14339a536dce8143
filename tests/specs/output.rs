//! Behavioral specs for output formatting and color.

use crate::prelude::*;

/// > NO_COLOR disables color
#[test]
fn no_color_env_disables_color() {
    matching("<a>", &["/a"]).passes().stdout_lacks("\x1b[");
}

/// > --color forces color even when not a terminal
#[test]
fn color_flag_forces_color() {
    matching("<a>", &["/a", "/b"])
        .args(&["--color"])
        .no_match()
        .stdout_has("\x1b[");
}

/// > --no-color wins over a configured color mode
#[test]
fn no_color_flag_overrides_config() {
    let project = Project::with_config("version = 1\n[output]\ncolor = \"always\"\n");
    matching("<a>", &["/a"])
        .pwd(project.path())
        .args(&["--no-color"])
        .passes()
        .stdout_lacks("\x1b[");
}

/// > configured color = "always" colors output
#[test]
fn configured_color_always() {
    let project = Project::with_config("version = 1\n[output]\ncolor = \"always\"\n");
    compile("<a>")
        .pwd(project.path())
        .passes()
        .stdout_has("\x1b[");
}

/// > JSON output is never colored
#[test]
fn json_is_plain() {
    matching("<a>", &["/a"])
        .json()
        .args(&["--color"])
        .passes()
        .stdout_lacks("\x1b[");
}

/// > --compact puts JSON on one line
#[test]
fn compact_json_single_line() {
    let result = matching("<a>", &["/a", "/b"])
        .json()
        .args(&["--compact"])
        .no_match();
    assert_eq!(result.stdout().lines().count(), 1);
    assert_eq!(result.json()["total"], 2);
}

/// > NRE_LOG enables logging on stderr without touching stdout
#[test]
fn log_env_writes_to_stderr() {
    matching("<a>", &["/a"])
        .env("NRE_LOG", "debug")
        .passes()
        .stdout_eq("/a: match 0..1 <a>\n1 of 1 name matched\n")
        .stderr_has("compiled pattern");
}
