//! Manual simulation specs

use crate::prelude::*;

#[test]
fn boards_each_group_then_finishes() {
    bg().args(&["manual"])
        .fast()
        .stdin("2\n2\n1\n\n\n")
        .passes()
        .stdout_has("Enter number of boarding groups: ")
        .stdout_has("Enter number of passengers for Group 2: ")
        .stdout_has("Starting manual boarding simulation...")
        .stdout_has("Group 1 Passenger 2 finished boarding at Gate 1")
        .stdout_has("Group 2 finished boarding. Press Enter")
        .stdout_has("All groups have boarded.");
}

#[test]
fn invalid_counts_are_asked_again() {
    bg().args(&["manual"])
        .fast()
        .stdin("zero\n1\n-4\n2\n\n")
        .passes()
        .stdout_has("Invalid input. Enter a positive integer for group count: ")
        .stdout_has("Invalid input. Enter positive integer for passengers: ")
        .stdout_has("Group 1 searching for a free gate (2 passengers)");
}

#[test]
fn exit_stops_between_groups() {
    bg().args(&["manual"])
        .fast()
        .stdin("3\n1\n1\n1\nEXIT\n")
        .passes()
        .stdout_has("Exiting manual simulation.")
        .stdout_lacks("Group 2 searching")
        .stdout_lacks("All groups have boarded.");
}

#[test]
fn closed_input_before_sizes_fails() {
    bg().args(&["manual"])
        .fast()
        .stdin("2\n1\n")
        .fails()
        .stderr_has("input closed");
}
