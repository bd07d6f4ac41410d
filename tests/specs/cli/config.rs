//! Config file specs

use crate::prelude::*;

const FAST_CONFIG: &str = r#"
gates = 1
schedule = [2, 1]

[search]
poll_interval = "5ms"

[pacing]
min_delay = "0ms"
max_delay = "2ms"
"#;

#[test]
fn schedule_comes_from_config() {
    let project = Project::empty();
    project.file("bg.toml", FAST_CONFIG);

    project
        .bg()
        .args(&["--config", "bg.toml", "auto"])
        .passes()
        .stdout_has("Group 2: 1 of 1 passengers boarded at Gate 1")
        .stdout_lacks("Group 3");
}

#[test]
fn flags_override_config() {
    let project = Project::empty();
    project.file("bg.toml", FAST_CONFIG);

    project
        .bg()
        .args(&["--config", "bg.toml", "auto", "--sizes", "1,1,1", "--gates", "3"])
        .passes()
        .stdout_has("Group 3 finished boarding.");
}

#[test]
fn unknown_keys_are_rejected() {
    let project = Project::empty();
    project.file("bg.toml", "gates = 2\nlanes = 4\n");

    project
        .bg()
        .args(&["--config", "bg.toml", "auto"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn missing_config_file_fails() {
    let project = Project::empty();

    project
        .bg()
        .args(&["--config", "nope.toml", "auto"])
        .fails()
        .stderr_has("failed to read config");
}
