//! Automated simulation specs

use crate::prelude::*;

#[test]
fn default_schedule_boards_five_groups() {
    let out = bg().args(&["auto"]).fast().passes();

    for group in 1..=5 {
        let released = format!("Group {group} completed boarding at Gate ");
        assert!(out.stdout().contains(&released), "missing release for group {group}");
    }
    assert_eq!(out.stdout().matches("Gate released.").count(), 5);
    // 5 + 4 + 6 + 3 + 7 passengers
    assert_eq!(out.stdout().matches("finished boarding at Gate").count(), 25);
}

#[test]
fn custom_sizes_on_one_gate() {
    bg().args(&["auto", "--sizes", "2,1", "--gates", "1"])
        .fast()
        .passes()
        .stdout_has("Group 1 searching for a free gate (2 passengers)")
        .stdout_has("Group 2 searching for a free gate (1 passengers)")
        .stdout_has("Group 1: 2 of 2 passengers boarded at Gate 1")
        .stdout_has("Group 2: 1 of 1 passengers boarded at Gate 1");
}

#[test]
fn release_follows_the_groups_own_passengers() {
    let out = bg().args(&["auto", "--sizes", "4", "--gates", "2"]).fast().passes();

    let lines: Vec<&str> = out.stdout().lines().collect();
    let released = lines
        .iter()
        .position(|l| l.starts_with("Group 1 completed boarding"))
        .unwrap();
    let finished = lines[..released]
        .iter()
        .filter(|l| l.starts_with("Group 1 Passenger") && l.contains("finished boarding"))
        .count();
    assert_eq!(finished, 4);
}

#[test]
fn quiet_shows_only_the_summary() {
    bg().args(&["auto", "--sizes", "3", "--quiet"])
        .fast()
        .passes()
        .stdout_lacks("Passenger")
        .stdout_has("Group 1: 3 of 3 passengers boarded");
}

#[test]
fn json_events_are_one_object_per_line() {
    let out = bg()
        .args(&["auto", "--sizes", "2", "--format", "json"])
        .fast()
        .passes();

    let lines: Vec<&str> = out.stdout().lines().collect();
    assert!(lines.iter().all(|l| l.starts_with('{') && l.ends_with('}')));
    assert!(lines[0].contains(r#""type":"group_searching""#));
    assert_eq!(
        lines.iter().filter(|l| l.contains(r#""type":"passenger_finished""#)).count(),
        2
    );
    // Last line is the group summary
    assert!(lines.last().unwrap().contains(r#""arrivals":2"#));
}

#[test]
fn claim_discovery_boards_everyone() {
    bg().args(&["auto", "--sizes", "2,2,2", "--gates", "2", "--discovery", "claim"])
        .fast()
        .passes()
        .stdout_has("Group 3 finished boarding.");
}
