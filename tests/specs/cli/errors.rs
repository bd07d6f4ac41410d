//! Error reporting specs

use crate::prelude::*;

#[test]
fn empty_group_in_schedule_fails_before_boarding() {
    bg().args(&["auto", "--sizes", "3,0,2"])
        .fast()
        .fails()
        .stdout_lacks("searching")
        .stderr_has("error: schedule entry 1 has an empty cohort")
        .stderr_has("suggestions:");
}

#[test]
fn zero_gates_is_rejected() {
    bg().args(&["auto", "--gates", "0"])
        .fails()
        .stderr_has("at least one gate");
}

#[test]
fn inverted_delay_range_is_rejected() {
    bg().args(&["auto", "--min-delay", "50ms", "--max-delay", "10ms"])
        .fails()
        .stderr_has("boarding delay range is inverted");
}

#[test]
fn zero_max_attempts_is_rejected() {
    bg().args(&["auto", "--max-attempts", "0"])
        .fails()
        .stderr_has("max attempts must be at least 1");
}

#[test]
fn unknown_discovery_mode_is_a_usage_error() {
    bg().args(&["auto", "--discovery", "grab"])
        .fails()
        .stderr_has("unknown discovery mode");
}
