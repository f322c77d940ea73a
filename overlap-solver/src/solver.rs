//! Top-level entry point: validates a request, tries the cache, then
//! the heuristic cascade, then a depth-bounded BFS for something
//! shorter, and finally the one hand-coded special case the graph
//! can't express (pot LED calibration).

use std::path::Path;

use thiserror::Error;

use crate::bfs::bfs;
use crate::cache::{self, CacheError};
use crate::catalog::Command;
use crate::heuristic::solve_with_heuristic;
use crate::rewrite::convert_target_state;
use crate::state::State;
use crate::transition::{apply, is_solution};
use crate::validation::{self, ValidationError};

const MAX_STEPS_TO_CHECK: u32 = 3;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Rewrites ambiguous targets against the initial state, validates the
/// rewritten request, and solves for a command sequence.
///
/// `desired_state` is taken as given by the caller (not yet rewritten
/// through [`convert_target_state`]) — that rewrite happens here, before
/// validation, since aliases like "frontled playpause" or a bare
/// "frontled rup" are only valid as caller-facing shorthand: they are
/// not themselves in `COMMAND_ALIASES` and would fail `is_valid_state`
/// if checked before being rewritten into the concrete alias they
/// stand for. This mirrors `main.py`, which always rewrites the target
/// before validating or solving.
pub fn solve_command_series(
    cache_path: Option<&Path>,
    initial_state: &[&str],
    desired_state: &[&str],
) -> Result<Option<Vec<Command>>, SolveError> {
    let rewritten: Vec<String> = if let [single] = desired_state {
        vec![convert_target_state(single, initial_state)]
    } else {
        desired_state.iter().map(|s| s.to_string()).collect()
    };
    let rewritten_refs: Vec<&str> = rewritten.iter().map(String::as_str).collect();

    validation::validate(initial_state, &rewritten_refs)?;

    solve(cache_path, initial_state, &rewritten_refs)
}

/// Solves without running the validation/rewrite pass — used when the
/// caller already has a decoded, validated target (e.g. the cache
/// builder enumerating every reachable combination).
pub fn solve(
    cache_path: Option<&Path>,
    initial_state: &[&str],
    desired_state: &[&str],
) -> Result<Option<Vec<Command>>, SolveError> {
    if let (Some(path), [target]) = (cache_path, desired_state) {
        if let Some(cached) = cache::get_cached(path, initial_state, target)? {
            return Ok(Some(cached));
        }
    }

    let decoded_initial_state = State::new().read(initial_state);
    let decoded_desired_state = decoded_initial_state.read(desired_state);

    if let Some(special) = handle_special_case(&decoded_initial_state, &decoded_desired_state) {
        return Ok(Some(special));
    }

    if let [target] = desired_state {
        if !decoded_initial_state.is_setting_effective(target) {
            return Ok(Some(Vec::new()));
        }
    }

    Ok(solve_internal(&decoded_initial_state, &decoded_desired_state))
}

pub fn solve_internal(initial: &State, desired: &State) -> Option<Vec<Command>> {
    if initial.encode() == desired.encode() {
        return Some(Vec::new());
    }

    let heuristic_solution = solve_with_heuristic(initial, desired);

    let limit = match &heuristic_solution {
        Some(sol) => (sol.len() as u32).saturating_sub(1).min(MAX_STEPS_TO_CHECK),
        None => MAX_STEPS_TO_CHECK,
    };

    if let Some(solution) = bfs(initial, desired, limit) {
        debug_assert!(is_solution(&solution, initial, desired));
        return Some(solution);
    }

    heuristic_solution
}

/// `potled_calibration` can only be reached by 17 consecutive presses
/// of `FRONT_DIY5_POT_R` — far too deep for BFS or the heuristic cascade
/// to ever find on their own, so it's special-cased outside the graph.
/// After calibrating, the solver tries to find its way back to whatever
/// state calibration disturbed.
pub fn handle_special_case(state: &State, end_state: &State) -> Option<Vec<Command>> {
    if end_state.potled_calibration != 1 {
        return None;
    }

    let calibration_phase = vec![Command::FrontDiy5PotR; 17];
    let next_state = apply(state, Command::FrontDiy5PotR);

    if let Some(steps_to_return) = solve_internal(&next_state, state) {
        let mut full = calibration_phase;
        full.extend(steps_to_return);
        return Some(full);
    }

    Some(calibration_phase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_states_need_no_commands() {
        let state = State::new();
        assert_eq!(solve_internal(&state, &state), Some(Vec::new()));
    }

    #[test]
    fn single_color_change_solves_in_one_step() {
        let initial = State::new();
        let mut desired = initial;
        desired.frontled_mode = 5;
        assert_eq!(solve_internal(&initial, &desired), Some(vec![Command::FrontG]));
    }

    #[test]
    fn end_to_end_request_without_cache() {
        let initial = ["backled r", "frontled r", "potled r"];
        let desired = ["frontled g"];
        let solution = solve(None, &initial, &desired).unwrap().unwrap();
        assert_eq!(solution, vec![Command::FrontG]);
    }

    #[test]
    fn ineffective_target_yields_empty_solution() {
        let initial = ["backled r", "frontled r", "potled r", "frontled off"];
        let desired = ["frontled dim"];
        let solution = solve(None, &initial, &desired).unwrap();
        assert_eq!(solution, Some(Vec::new()));
    }

    #[test]
    fn invalid_alias_is_rejected() {
        let initial = ["backled r", "frontled r", "potled r"];
        let desired = ["not a real alias"];
        let err = solve_command_series(None, &initial, &desired).unwrap_err();
        assert!(matches!(err, SolveError::Validation(ValidationError::InvalidDesiredState)));
    }

    /// "frontled playpause" isn't itself a recognized command alias — it
    /// only makes sense once rewritten against the initial state, into
    /// "frontled paused"/"frontled unpaused". It must be rewritten
    /// before validation runs, or it is wrongly rejected as invalid
    /// instead of reaching the solver at all.
    #[test]
    fn playpause_alias_is_rewritten_before_validation() {
        let initial = ["backled r", "frontled r", "potled r"];
        let desired = ["frontled playpause"];
        // "frontled paused"/"unpaused" are never effective settings per
        // `is_setting_effective` (ported faithfully from
        // `is_state_setting_effective`, which never matches them either),
        // so the solve always comes back with an empty command series —
        // the point of this test is that it comes back at all, rather
        // than failing validation.
        let solution = solve_command_series(None, &initial, &desired).unwrap();
        assert_eq!(solution, Some(Vec::new()));
    }

    /// Same story for the bare directional aliases ("frontled rup"):
    /// they only resolve to a real command once bound to whichever DIY
    /// slot the initial state names.
    #[test]
    fn bare_directional_alias_is_rewritten_before_validation() {
        let initial = ["backled r", "frontled diy3", "potled r"];
        let desired = ["frontled rup"];
        let solution = solve_command_series(None, &initial, &desired).unwrap();
        assert_eq!(solution, Some(vec![Command::FrontRupPotG3]));
    }

    #[test]
    fn calibration_special_case_presses_diy5_seventeen_times() {
        let mut state = State::new();
        state.frontled_mode = 24;
        let mut desired = state;
        desired.potled_calibration = 1;
        let solution = handle_special_case(&state, &desired).unwrap();
        assert_eq!(&solution[..17], &[Command::FrontDiy5PotR; 17]);
    }
}
