//! Menu specs

use crate::prelude::*;

const MENU: &str = "\n=== Airline Boarding Simulation Menu ===\n\
                    1. Manual Simulation\n\
                    2. Automated Simulation\n\
                    3. Exit\n\
                    Enter your choice (1-3): ";

#[test]
fn exit_choice_says_goodbye() {
    bg().args(&["menu"])
        .stdin("3\n")
        .passes()
        .stdout_eq(&format!("{MENU}Exiting program. Goodbye!\n"));
}

#[test]
fn menu_is_the_default_mode() {
    bg().stdin("3\n").passes().stdout_has("1. Manual Simulation");
}

#[test]
fn invalid_choice_is_reported() {
    bg().stdin("7\n3\n")
        .passes()
        .stdout_has("Invalid choice. Enter 1, 2, or 3.")
        .stdout_has("Exiting program. Goodbye!");
}

#[test]
fn automated_choice_runs_the_schedule() {
    bg().args(&["--gates", "2"])
        .fast()
        .stdin("2\n3\n")
        .passes()
        .stdout_has("Group 5 finished boarding.");
}

#[test]
fn manual_choice_returns_to_menu() {
    let out = bg().fast().stdin("1\n1\n1\n\n3\n").passes();
    assert!(out.stdout().contains("All groups have boarded."));
    assert_eq!(out.stdout().matches("Enter your choice (1-3): ").count(), 2);
}
