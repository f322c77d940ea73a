//! End-to-end solve scenarios ported from `tests/test_solve.py`.
//!
//! The original tests run against a pre-built `cache.bin`; that file is
//! produced by hours of offline enumeration (see the
//! `overlap-solver-cache-builder` binary) and isn't checked in here, so
//! these call `solve_command_series` with no cache. The cache only ever
//! stores whatever `solve_internal` already computes for a slow case,
//! so the expected command sequences are unchanged.

use overlap_solver::solve_command_series;
use overlap_solver::Command;

fn solve(initial: &str, desired: &str) -> Vec<Command> {
    let initial: Vec<&str> = initial.split(',').map(str::trim).collect();
    let desired: Vec<&str> = desired.split(',').map(str::trim).collect();
    solve_command_series(None, &initial, &desired)
        .expect("request is well-formed")
        .expect("a solution exists")
}

#[test]
fn simple_single_step_targets() {
    assert_eq!(solve("backled r, frontled g, potled b", "frontled b"), vec![Command::FrontB]);
    assert_eq!(solve("backled r, frontled g, potled b", "frontled r3"), vec![Command::FrontR3]);
    assert_eq!(solve("backled r, frontled g, potled b", "backled off"), vec![Command::BackOff]);
    assert_eq!(solve("backled r, frontled g, potled b", "frontled off"), vec![Command::FrontOnOff]);
    assert_eq!(solve("backled r, frontled g, potled b", "frontled w3"), vec![Command::FrontW3]);
}

#[test]
fn heuristic_cascade_scenarios() {
    assert_eq!(
        solve("backled g, frontled b3, potled r4", "backled g4"),
        vec![Command::BackG4FrontGdown]
    );

    assert_eq!(
        solve("backled g, frontled b3, potled r4", "backled g3"),
        vec![Command::BackG3FrontDiy2, Command::FrontB3]
    );

    assert_eq!(
        solve("backled g, frontled diy6, potled r4", "backled g3"),
        vec![Command::FrontOnOff, Command::BackG3FrontDiy2, Command::FrontOnOff]
    );

    assert_eq!(
        solve("backled r, frontled r5, potled r", "backled w"),
        vec![
            Command::BackWFrontFade7,
            Command::FrontR5PotG4,
            Command::FrontOnOff,
            Command::FrontDiy5PotR,
            Command::FrontOnOff,
        ]
    );

    assert_eq!(solve("backled g, frontled b3, potled g", "frontled r2"), vec![Command::FrontR2]);

    assert_eq!(
        solve("backled g, frontled b3, potled g", "frontled diy2"),
        vec![Command::BackOff, Command::BackG3FrontDiy2, Command::BackOn]
    );

    assert_eq!(
        solve("backled g, frontled b3, potled r3", "frontled g5"),
        vec![Command::FrontG5PotR4, Command::FrontGupPotR3]
    );

    assert_eq!(
        solve("backled r, frontled r, potled r", "frontled r5"),
        vec![
            Command::FrontR5PotG4,
            Command::FrontOnOff,
            Command::FrontDiy5PotR,
            Command::FrontOnOff,
        ]
    );

    assert_eq!(
        solve("backled g, frontled b3, potled r4", "potled r5"),
        vec![Command::FrontGdownPotR5]
    );

    assert_eq!(
        solve("backled g, frontled b3, potled r4", "potled g4"),
        vec![Command::FrontR5PotG4, Command::FrontB3]
    );

    assert_eq!(
        solve("backled g, frontled b5, potled r4", "potled g"),
        vec![Command::FrontOnOff, Command::FrontDiy4PotG, Command::FrontOnOff]
    );

    assert_eq!(
        solve("backled r, frontled r5, potled r, frontled off", "backled w"),
        vec![
            Command::FrontOnOff,
            Command::BackWFrontFade7,
            Command::FrontR5PotG4,
            Command::FrontOnOff,
            Command::FrontDiy5PotR,
        ]
    );

    assert_eq!(
        solve(
            "backled r, frontled r5, potled r, backled off, frontled off, potled off",
            "potled on"
        ),
        vec![
            Command::FrontOnOff,
            Command::FrontFade7PotOn,
            Command::FrontR5PotG4,
            Command::FrontOnOff,
            Command::FrontDiy5PotR,
        ]
    );

    assert_eq!(
        solve("backled r, frontled jump3, potled r, frontled off", "backled w"),
        vec![
            Command::FrontOnOff,
            Command::BackWFrontFade7,
            Command::BackOff,
            Command::BackRFrontJump3,
            Command::BackOn,
            Command::FrontOnOff,
        ]
    );
}

/// The original repo's name for this scenario flags it as the reason
/// the cache's device-toggling optimization exists: solved directly
/// (no cache) it still has to fall back past the heuristic cascade.
#[test]
fn slow_without_device_toggling_optimization() {
    assert_eq!(
        solve("backled g2, frontled b2, potled r4", "frontled w5"),
        vec![
            Command::FrontW5PotFade,
            Command::FrontOnOff,
            Command::FrontG5PotR4,
            Command::FrontOnOff,
        ]
    );
}
