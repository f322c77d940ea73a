//! Rejects nonsensical initial/desired state descriptions before the
//! solver ever touches them.

use thiserror::Error;

use crate::catalog::{BACKLED_MODES, COMMAND_ALIASES, FRONTLED_MODES, POTLED_MODES, RELATIVE_STATES};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid initial state")]
    InvalidInitialState,
    #[error("invalid desired end state")]
    InvalidDesiredState,
    #[error("define all modes")]
    ModesNotDefined,
    #[error("no duplicate modes allowed")]
    DuplicateModeDefinition,
    #[error("relative state not allowed as initial")]
    RelativeStateAsInitial,
    #[error("simultaneous opposite states not allowed")]
    OppositeRelativeStates,
}

/// Every alias in `states` is a recognized command alias.
pub fn is_valid_state(states: &[&str]) -> bool {
    states.iter().all(|s| COMMAND_ALIASES.contains(s))
}

/// Every one of the three devices has its mode named at least once.
pub fn all_modes_defined(states: &[&str]) -> bool {
    mode_counts(states).into_iter().all(|n| n >= 1)
}

/// No device has its mode named more than once.
pub fn no_duplicate_mode_definitions(states: &[&str]) -> bool {
    mode_counts(states).into_iter().all(|n| n <= 1)
}

fn mode_counts(states: &[&str]) -> [usize; 3] {
    let mut counts = [0usize; 3];
    for &s in states {
        if BACKLED_MODES.contains(&s) {
            counts[0] += 1;
        }
        if FRONTLED_MODES.contains(&s) {
            counts[1] += 1;
        }
        if POTLED_MODES.contains(&s) {
            counts[2] += 1;
        }
    }
    counts
}

/// No relative-state alias (e.g. "frontled dim") appears in `states` —
/// required of the initial state, which must describe an absolute,
/// hardware-observable configuration.
pub fn absolute_state(states: &[&str]) -> bool {
    !RELATIVE_STATES
        .iter()
        .any(|(a, b)| states.contains(a) || states.contains(b))
}

/// Neither member of any opposite pair (e.g. "frontled dim"/"frontled
/// bright") is requested simultaneously.
pub fn no_opposites_in_relative_states(states: &[&str]) -> bool {
    !RELATIVE_STATES
        .iter()
        .any(|(a, b)| states.contains(a) && states.contains(b))
}

/// Runs the full validation chain the original CLI applies to a
/// (initial, desired) state pair, in its original order.
pub fn validate(initial: &[&str], desired: &[&str]) -> Result<(), ValidationError> {
    if !is_valid_state(initial) {
        return Err(ValidationError::InvalidInitialState);
    }
    if !is_valid_state(desired) {
        return Err(ValidationError::InvalidDesiredState);
    }
    if !all_modes_defined(initial) {
        return Err(ValidationError::ModesNotDefined);
    }
    if !no_duplicate_mode_definitions(initial) || !no_duplicate_mode_definitions(desired) {
        return Err(ValidationError::DuplicateModeDefinition);
    }
    if !absolute_state(initial) {
        return Err(ValidationError::RelativeStateAsInitial);
    }
    if !no_opposites_in_relative_states(desired) {
        return Err(ValidationError::OppositeRelativeStates);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_alias() {
        assert!(!is_valid_state(&["not a real alias"]));
    }

    #[test]
    fn requires_all_three_modes_in_initial_state() {
        assert!(!all_modes_defined(&["backled r", "frontled r"]));
        assert!(all_modes_defined(&["backled r", "frontled r", "potled r"]));
    }

    #[test]
    fn rejects_duplicate_mode_definitions() {
        assert!(!no_duplicate_mode_definitions(&["backled r", "backled g"]));
    }

    #[test]
    fn rejects_relative_state_as_initial() {
        assert!(!absolute_state(&["frontled dim"]));
        assert!(absolute_state(&["frontled r"]));
    }

    #[test]
    fn rejects_simultaneous_opposites_in_desired_state() {
        assert!(!no_opposites_in_relative_states(&["frontled dim", "frontled bright"]));
        assert!(no_opposites_in_relative_states(&["frontled dim"]));
    }

    #[test]
    fn full_chain_accepts_a_realistic_pair() {
        let initial = ["backled r", "frontled r", "potled r"];
        let desired = ["frontled dim"];
        assert_eq!(validate(&initial, &desired), Ok(()));
    }
}
