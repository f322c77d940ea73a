//! Hand-crafted candidate solutions tried before falling back to BFS.
//!
//! Full graph search gets exponentially slower per extra step; most
//! real requests are satisfied by one of these short, known-good
//! sequences. `solve_internal` still runs a bounded BFS afterwards to
//! see if something shorter exists (see `solver.rs`), so getting this
//! list slightly sub-optimal costs speed, not correctness.

use crate::catalog::{backled_command_for, frontled_command_for, potled_command_for, Command};
use crate::state::State;
use crate::transition::is_solution;

/// Returns the first candidate sequence, among a fixed cascade ordered
/// from cheapest to most convoluted, that actually reaches `end_state`
/// from `state`. `None` if none of them do.
pub fn solve_with_heuristic(state: &State, end_state: &State) -> Option<Vec<Command>> {
    macro_rules! try_attempt {
        ($attempt:expr) => {{
            let attempt = $attempt;
            if is_solution(&attempt, state, end_state) {
                return Some(attempt);
            }
        }};
    }

    if state.backled_on == 1 && end_state.backled_on == 0 {
        try_attempt!(vec![Command::BackOff]);
    }
    if state.backled_on == 0 && end_state.backled_on == 1 {
        try_attempt!(vec![Command::BackOn]);
    }
    if state.frontled_on != end_state.frontled_on {
        try_attempt!(vec![Command::FrontOnOff]);
    }
    if state.potled_on == 1 && end_state.potled_on == 0 {
        try_attempt!(vec![Command::FrontFade3PotOff]);
    }
    if state.potled_on == 0 && end_state.potled_on == 1 {
        try_attempt!(vec![Command::FrontFade7PotOn]);
    }

    if state.backled_on == 1 && end_state.backled_on == 1 && state.backled_mode != end_state.backled_mode {
        try_attempt!(vec![backled_command_for(end_state.backled_mode)]);
    }

    if state.frontled_on == 1 && end_state.frontled_on == 1 && state.frontled_mode != end_state.frontled_mode {
        try_attempt!(vec![frontled_command_for(end_state.frontled_mode, false)]);
        try_attempt!(vec![frontled_command_for(end_state.frontled_mode, true)]);
    }

    if state.potled_on == 1 && end_state.potled_on == 1 && state.potled_mode != end_state.potled_mode {
        try_attempt!(vec![potled_command_for(end_state.potled_mode)]);
    }

    if state.backled_on == 1
        && end_state.backled_on == 1
        && state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.backled_mode != end_state.backled_mode
    {
        try_attempt!(vec![
            backled_command_for(end_state.backled_mode),
            frontled_command_for(end_state.frontled_mode, true),
        ]);
    }

    if state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.potled_on == 1
        && end_state.potled_on == 1
        && state.potled_mode != end_state.potled_mode
    {
        try_attempt!(vec![
            potled_command_for(end_state.potled_mode),
            frontled_command_for(end_state.frontled_mode, false),
        ]);
    }

    if state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.potled_on == 1
        && end_state.potled_on == 1
        && state.frontled_mode != end_state.frontled_mode
    {
        try_attempt!(vec![
            frontled_command_for(end_state.frontled_mode, true),
            potled_command_for(end_state.potled_mode),
        ]);
    }

    if state.backled_on == 1
        && end_state.backled_on == 1
        && state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.frontled_mode != end_state.frontled_mode
    {
        try_attempt!(vec![
            Command::BackOff,
            frontled_command_for(end_state.frontled_mode, false),
            Command::BackOn,
        ]);
    }

    if state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.potled_on == 1
        && end_state.potled_on == 1
        && state.potled_mode != end_state.potled_mode
    {
        try_attempt!(vec![
            Command::FrontOnOff,
            potled_command_for(end_state.potled_mode),
            Command::FrontOnOff,
        ]);
    }

    if state.backled_on == 1
        && end_state.backled_on == 1
        && state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.backled_mode != end_state.backled_mode
    {
        try_attempt!(vec![
            Command::FrontOnOff,
            backled_command_for(end_state.backled_mode),
            Command::FrontOnOff,
        ]);
    }

    if state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.potled_on == 1
        && end_state.potled_on == 1
        && state.frontled_mode != end_state.frontled_mode
    {
        try_attempt!(vec![
            frontled_command_for(end_state.frontled_mode, true),
            Command::FrontOnOff,
            potled_command_for(end_state.potled_mode),
            Command::FrontOnOff,
        ]);
    }

    if state.backled_on == 1
        && end_state.backled_on == 1
        && state.frontled_on == 1
        && end_state.frontled_on == 1
        && state.potled_on == 1
        && end_state.potled_on == 1
        && state.backled_mode != end_state.backled_mode
    {
        try_attempt!(vec![
            backled_command_for(end_state.backled_mode),
            frontled_command_for(end_state.frontled_mode, true),
            potled_command_for(end_state.potled_mode),
        ]);

        try_attempt!(vec![
            backled_command_for(end_state.backled_mode),
            frontled_command_for(end_state.frontled_mode, true),
            Command::FrontOnOff,
            potled_command_for(end_state.potled_mode),
            Command::FrontOnOff,
        ]);
    }

    if state.frontled_on == 0 && end_state.frontled_on == 0 && state.backled_mode != end_state.backled_mode {
        try_attempt!(vec![
            Command::FrontOnOff,
            backled_command_for(end_state.backled_mode),
            frontled_command_for(end_state.frontled_mode, true),
            Command::FrontOnOff,
        ]);
    }

    if state.potled_on == 0 && end_state.potled_on == 1 {
        if state.frontled_on == 1 && end_state.frontled_on == 1 {
            try_attempt!(vec![
                Command::FrontFade7PotOn,
                frontled_command_for(end_state.frontled_mode, false),
            ]);

            try_attempt!(vec![
                Command::FrontFade7PotOn,
                frontled_command_for(end_state.frontled_mode, true),
                potled_command_for(end_state.potled_mode),
            ]);

            try_attempt!(vec![
                Command::FrontFade7PotOn,
                Command::BackOff,
                frontled_command_for(end_state.frontled_mode, false),
                Command::BackOn,
            ]);

            try_attempt!(vec![
                Command::FrontFade7PotOn,
                frontled_command_for(end_state.frontled_mode, true),
                Command::FrontOnOff,
                potled_command_for(end_state.potled_mode),
                Command::FrontOnOff,
            ]);
        }

        if state.frontled_on == 0 && end_state.frontled_on == 0 {
            try_attempt!(vec![
                Command::FrontOnOff,
                Command::FrontFade7PotOn,
                frontled_command_for(end_state.frontled_mode, false),
                Command::FrontOnOff,
            ]);

            try_attempt!(vec![
                Command::FrontOnOff,
                Command::FrontFade7PotOn,
                frontled_command_for(end_state.frontled_mode, true),
                Command::FrontOnOff,
                potled_command_for(end_state.potled_mode),
            ]);

            try_attempt!(vec![
                Command::FrontOnOff,
                Command::FrontFade7PotOn,
                Command::BackOff,
                frontled_command_for(end_state.frontled_mode, false),
                Command::FrontOnOff,
                Command::BackOn,
            ]);
        }
    }

    if end_state.backled_mode == 15 {
        if state.frontled_on == 0 && end_state.frontled_on == 0 {
            try_attempt!(vec![
                Command::FrontOnOff,
                Command::BackWFrontFade7,
                frontled_command_for(end_state.frontled_mode, true),
                Command::FrontOnOff,
                potled_command_for(end_state.potled_mode),
            ]);

            try_attempt!(vec![
                Command::FrontOnOff,
                Command::BackWFrontFade7,
                Command::BackOff,
                frontled_command_for(end_state.frontled_mode, false),
                Command::BackOn,
                Command::FrontOnOff,
            ]);
        }

        if state.frontled_on == 1 && end_state.frontled_on == 1 {
            try_attempt!(vec![
                Command::BackWFrontFade7,
                Command::BackOff,
                frontled_command_for(end_state.frontled_mode, false),
                Command::BackOn,
            ]);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_step_color_change_is_found() {
        let state = State::new();
        let mut end_state = state;
        end_state.frontled_mode = 5;
        let solution = solve_with_heuristic(&state, &end_state).unwrap();
        assert_eq!(solution, vec![Command::FrontG]);
    }

    #[test]
    fn turning_backled_off_is_found() {
        let state = State::new();
        let mut end_state = state;
        end_state.backled_on = 0;
        assert_eq!(solve_with_heuristic(&state, &end_state), Some(vec![Command::BackOff]));
    }

    #[test]
    fn no_attempt_fits_returns_none_for_unrelated_targets() {
        let state = State::new();
        let mut end_state = state;
        end_state.frontled_calibration = 3;
        assert_eq!(solve_with_heuristic(&state, &end_state), None);
    }
}
