//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_modes() {
    bg().args(&["--help"])
        .passes()
        .stdout_has("auto")
        .stdout_has("manual")
        .stdout_has("menu")
        .stdout_has("--gates");
}

#[test]
fn auto_help_describes_sizes() {
    bg().args(&["auto", "--help"]).passes().stdout_has("--sizes");
}

#[test]
fn version_is_printed() {
    bg().args(&["--version"]).passes().stdout_has("bg ");
}

#[test]
fn completions_are_generated() {
    bg().args(&["completions", "bash"]).passes().stdout_has("_bg");
}
