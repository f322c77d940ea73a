//! The solver's graph edges: `apply` maps a (state, command) pair to the
//! resulting state. A forbidden move — one that would only undo an
//! unobservable relative nudge, or that hits a powered-off device —
//! returns the input state unchanged rather than an `Err`; BFS and the
//! heuristic both treat "unchanged" as "don't bother taking this edge".

use crate::catalog::{Command, AVOID_CHANGING_RELATIVE_STATE_NEEDLESSLY};
use crate::state::State;

/// Advances a single relative axis (brightness, speed, or one RGB
/// channel) one notch towards `target_trit` (1 = up, 2 = down).
///
/// Ported from the repeated `if/else` ladder that appears after every
/// rup/rdown/gup/gdown/bup/bdown, dim/bright and quick/slow command in
/// the original transition table: already at the opposite trit is
/// forbidden, at rest moves to the target trit, and already at the
/// target trit either no-ops or un-nudges depending on
/// [`AVOID_CHANGING_RELATIVE_STATE_NEEDLESSLY`].
fn apply_forbidden_trit(current: u8, target_trit: u8) -> Option<u8> {
    let opposite = if target_trit == 1 { 2 } else { 1 };
    if current == opposite {
        return None;
    }
    if current == 0 {
        return Some(target_trit);
    }
    if AVOID_CHANGING_RELATIVE_STATE_NEEDLESSLY {
        return None;
    }
    Some(0)
}

fn apply_diy_rgb_trit(state: &mut State, diy: u8, channel_get: fn(u8) -> u8, channel_set: fn(u8, u8) -> u8, target_trit: u8) -> bool {
    let rgb = state.diy_rel_rgb(diy);
    match apply_forbidden_trit(channel_get(rgb), target_trit) {
        Some(trit) => {
            state.set_diy_rel_rgb(diy, channel_set(rgb, trit));
            true
        }
        None => false,
    }
}

/// Applies `command` to `old`, returning the resulting state. Returns
/// `old` unchanged for forbidden moves (device off, relative state
/// already maxed, or a needless undo).
pub fn apply(old: &State, command: Command) -> State {
    let mut new = *old;

    match command {
        Command::FrontOnOff => {
            new.frontled_on = 1 - old.frontled_on;
            new.frontled_paused = 0;
        }

        Command::FrontPlayPause => {
            if old.frontled_on == 1 {
                new.frontled_paused = 1 - old.frontled_paused;
            }
        }

        Command::FrontDim => {
            if old.frontled_on == 1 && old.frontled_mode_is_color() {
                match apply_forbidden_trit(old.frontled_rel_brightness, 2) {
                    Some(v) => new.frontled_rel_brightness = v,
                    None => return *old,
                }
            }
        }

        Command::FrontBrighten => {
            if old.frontled_on == 1 && old.frontled_mode_is_color() {
                match apply_forbidden_trit(old.frontled_rel_brightness, 1) {
                    Some(v) => new.frontled_rel_brightness = v,
                    None => return *old,
                }
            }
        }

        Command::FrontR => set_frontled_mode(&mut new, old, 0),
        Command::FrontG => set_frontled_mode(&mut new, old, 5),
        Command::FrontB => set_frontled_mode(&mut new, old, 10),
        Command::FrontW => set_frontled_mode(&mut new, old, 15),
        Command::FrontW2 => set_frontled_mode(&mut new, old, 16),
        Command::FrontW3 => set_frontled_mode(&mut new, old, 17),
        Command::FrontW4 => set_frontled_mode(&mut new, old, 18),
        Command::FrontB2 => set_frontled_mode(&mut new, old, 11),
        Command::FrontB3 => set_frontled_mode(&mut new, old, 12),
        Command::FrontB4 => set_frontled_mode(&mut new, old, 13),
        Command::FrontG2 => set_frontled_mode(&mut new, old, 6),
        Command::FrontG3 => set_frontled_mode(&mut new, old, 7),
        Command::FrontG4 => set_frontled_mode(&mut new, old, 8),
        Command::FrontR2 => set_frontled_mode(&mut new, old, 1),
        Command::FrontR3 => set_frontled_mode(&mut new, old, 2),
        Command::FrontR4 => set_frontled_mode(&mut new, old, 3),

        Command::FrontW5PotFade => {
            set_frontled_mode(&mut new, old, 19);
            set_potled_mode(&mut new, old, 17);
        }
        Command::FrontB5PotB4 => {
            set_frontled_mode(&mut new, old, 14);
            set_potled_mode(&mut new, old, 13);
        }
        Command::FrontG5PotR4 => {
            set_frontled_mode(&mut new, old, 9);
            set_potled_mode(&mut new, old, 3);
        }
        Command::FrontR5PotG4 => {
            set_frontled_mode(&mut new, old, 4);
            set_potled_mode(&mut new, old, 8);
        }

        Command::FrontRupPotG3 | Command::BackR5FrontRup => {
            if command == Command::FrontRupPotG3 {
                set_potled_mode(&mut new, old, 7);
            }
            if command == Command::BackR5FrontRup {
                set_backled_mode(&mut new, old, 4);
            }
            if old.frontled_on == 1 {
                if let Some(diy) = diy_in_mode(old) {
                    if !apply_diy_rgb_trit(&mut new, diy, State::get_r, State::set_r, 1) {
                        return *old;
                    }
                }
            }
        }
        Command::FrontRdownPotG5 | Command::BackR4FrontRdown => {
            if command == Command::FrontRdownPotG5 {
                set_potled_mode(&mut new, old, 9);
            }
            if command == Command::BackR4FrontRdown {
                set_backled_mode(&mut new, old, 3);
            }
            if old.frontled_on == 1 {
                if let Some(diy) = diy_in_mode(old) {
                    if !apply_diy_rgb_trit(&mut new, diy, State::get_r, State::set_r, 2) {
                        return *old;
                    }
                }
            }
        }
        Command::FrontGupPotR3 | Command::BackG5FrontGup => {
            if command == Command::FrontGupPotR3 {
                set_potled_mode(&mut new, old, 2);
            }
            if command == Command::BackG5FrontGup {
                set_backled_mode(&mut new, old, 9);
            }
            if old.frontled_on == 1 {
                if let Some(diy) = diy_in_mode(old) {
                    if !apply_diy_rgb_trit(&mut new, diy, State::get_g, State::set_g, 1) {
                        return *old;
                    }
                }
            }
        }
        Command::FrontGdownPotR5 | Command::BackG4FrontGdown => {
            if command == Command::FrontGdownPotR5 {
                set_potled_mode(&mut new, old, 4);
            }
            if command == Command::BackG4FrontGdown {
                set_backled_mode(&mut new, old, 8);
            }
            if old.frontled_on == 1 {
                if let Some(diy) = diy_in_mode(old) {
                    if !apply_diy_rgb_trit(&mut new, diy, State::get_g, State::set_g, 2) {
                        return *old;
                    }
                }
            }
        }
        Command::FrontBupPotB3 | Command::BackB5FrontBup => {
            if command == Command::FrontBupPotB3 {
                set_potled_mode(&mut new, old, 12);
            }
            if command == Command::BackB5FrontBup {
                set_backled_mode(&mut new, old, 14);
            }
            if old.frontled_on == 1 {
                if let Some(diy) = diy_in_mode(old) {
                    if !apply_diy_rgb_trit(&mut new, diy, State::get_b, State::set_b, 1) {
                        return *old;
                    }
                }
            }
        }
        Command::FrontBdownPotB5 | Command::BackB4FrontBdown => {
            if command == Command::FrontBdownPotB5 {
                set_potled_mode(&mut new, old, 14);
            }
            if command == Command::BackB4FrontBdown {
                set_backled_mode(&mut new, old, 13);
            }
            if old.frontled_on == 1 {
                if let Some(diy) = diy_in_mode(old) {
                    if !apply_diy_rgb_trit(&mut new, diy, State::get_b, State::set_b, 2) {
                        return *old;
                    }
                }
            }
        }

        Command::FrontQuickPotStrobe | Command::BackSmoothFrontQuick => {
            if command == Command::FrontQuickPotStrobe {
                set_potled_mode(&mut new, old, 18);
            }
            if command == Command::BackSmoothFrontQuick {
                set_backled_mode(&mut new, old, 16);
            }
            if old.frontled_on == 1 && !old.frontled_mode_is_color() {
                match apply_forbidden_trit(old.frontled_rel_speed, 1) {
                    Some(v) => new.frontled_rel_speed = v,
                    None => return *old,
                }
            }
        }
        Command::FrontSlowPotSmooth | Command::BackFadeFrontSlow => {
            if command == Command::FrontSlowPotSmooth {
                set_potled_mode(&mut new, old, 16);
            }
            if command == Command::BackFadeFrontSlow {
                set_backled_mode(&mut new, old, 17);
            }
            if old.frontled_on == 1 && !old.frontled_mode_is_color() {
                match apply_forbidden_trit(old.frontled_rel_speed, 2) {
                    Some(v) => new.frontled_rel_speed = v,
                    None => return *old,
                }
            }
        }

        Command::FrontAutoPotFlash | Command::BackStrobeFrontAuto => {
            if command == Command::FrontAutoPotFlash {
                set_potled_mode(&mut new, old, 19);
            }
            if command == Command::BackStrobeFrontAuto {
                set_backled_mode(&mut new, old, 18);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 26;
                new.frontled_paused = 0;
            }
        }

        Command::FrontDiy1PotG2 | Command::BackR3FrontDiy1 => {
            if command == Command::FrontDiy1PotG2 {
                set_potled_mode(&mut new, old, 6);
            }
            if command == Command::BackR3FrontDiy1 {
                set_backled_mode(&mut new, old, 2);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 20;
            }
        }
        Command::FrontDiy2PotR2 | Command::BackG3FrontDiy2 => {
            if command == Command::FrontDiy2PotR2 {
                set_potled_mode(&mut new, old, 1);
            }
            if command == Command::BackG3FrontDiy2 {
                set_backled_mode(&mut new, old, 7);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 21;
            }
        }
        Command::FrontDiy3PotB2 | Command::BackB3FrontDiy3 => {
            if command == Command::FrontDiy3PotB2 {
                set_potled_mode(&mut new, old, 11);
            }
            if command == Command::BackB3FrontDiy3 {
                set_backled_mode(&mut new, old, 12);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 22;
            }
        }
        Command::FrontDiy4PotG | Command::BackR2FrontDiy4 => {
            if command == Command::FrontDiy4PotG {
                set_potled_mode(&mut new, old, 5);
            }
            if command == Command::BackR2FrontDiy4 {
                set_backled_mode(&mut new, old, 1);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 23;
            }
        }
        Command::FrontDiy5PotR | Command::BackG2FrontDiy5 => {
            if command == Command::FrontDiy5PotR {
                set_potled_mode(&mut new, old, 0);
            }
            if command == Command::BackG2FrontDiy5 {
                set_backled_mode(&mut new, old, 6);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 24;
            }
        }
        Command::FrontDiy6PotB | Command::BackB2FrontDiy6 => {
            if command == Command::FrontDiy6PotB {
                set_potled_mode(&mut new, old, 10);
            }
            if command == Command::BackB2FrontDiy6 {
                set_backled_mode(&mut new, old, 11);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 25;
            }
        }

        Command::FrontFlashPotW | Command::BackFlashFrontFlash => {
            if command == Command::FrontFlashPotW {
                set_potled_mode(&mut new, old, 15);
            }
            if command == Command::BackFlashFrontFlash {
                set_backled_mode(&mut new, old, 19);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 27;
                new.frontled_paused = 0;
            }
        }

        Command::FrontFade3PotOff | Command::BackBFrontFade3 => {
            if command == Command::FrontFade3PotOff && old.potled_on == 1 {
                new.potled_on = 0;
            }
            if command == Command::BackBFrontFade3 {
                set_backled_mode(&mut new, old, 10);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 30;
                new.frontled_paused = 0;
            }
        }

        Command::FrontFade7PotOn | Command::BackWFrontFade7 => {
            if command == Command::FrontFade7PotOn && old.potled_on == 0 {
                new.potled_on = 1;
            }
            if command == Command::BackWFrontFade7 {
                set_backled_mode(&mut new, old, 15);
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 31;
                new.frontled_paused = 0;
            } else {
                new.frontled_calibration =
                    (old.frontled_calibration + 1) % crate::state::FRONTLED_CALIBRATION_LENGTH;
            }
        }

        Command::FrontJump3PotDown => {
            if old.frontled_on == 1 {
                new.frontled_mode = 28;
                new.frontled_paused = 0;
            }
            if old.potled_on == 1 {
                if old.potled_mode_is_color() {
                    match apply_forbidden_trit(old.potled_rel_brightness, 2) {
                        Some(v) => new.potled_rel_brightness = v,
                        None => return *old,
                    }
                } else {
                    match apply_forbidden_trit(old.potled_rel_speed, 2) {
                        Some(v) => new.potled_rel_speed = v,
                        None => return *old,
                    }
                }
            }
        }
        Command::FrontJump7PotUp => {
            if old.frontled_on == 1 {
                new.frontled_mode = 29;
                new.frontled_paused = 0;
            }
            if old.potled_on == 1 {
                if old.potled_mode_is_color() {
                    match apply_forbidden_trit(old.potled_rel_brightness, 1) {
                        Some(v) => new.potled_rel_brightness = v,
                        None => return *old,
                    }
                } else {
                    match apply_forbidden_trit(old.potled_rel_speed, 1) {
                        Some(v) => new.potled_rel_speed = v,
                        None => return *old,
                    }
                }
            }
        }

        Command::BackRFrontJump3 => {
            if old.backled_on == 1 {
                new.backled_mode = 0;
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 28;
                new.frontled_paused = 0;
            }
        }
        Command::BackGFrontJump7 => {
            if old.backled_on == 1 {
                new.backled_mode = 5;
            }
            if old.frontled_on == 1 {
                new.frontled_mode = 29;
                new.frontled_paused = 0;
            }
        }

        Command::BackOn => new.backled_on = 1,
        Command::BackOff => new.backled_on = 0,

        Command::BackDown => {
            if old.backled_on == 1 {
                if old.backled_mode_is_color() {
                    match apply_forbidden_trit(old.backled_rel_brightness, 2) {
                        Some(v) => new.backled_rel_brightness = v,
                        None => return *old,
                    }
                } else {
                    match apply_forbidden_trit(old.backled_rel_speed, 2) {
                        Some(v) => new.backled_rel_speed = v,
                        None => return *old,
                    }
                }
            }
        }
        Command::BackUp => {
            if old.backled_on == 1 {
                if old.backled_mode_is_color() {
                    match apply_forbidden_trit(old.backled_rel_brightness, 1) {
                        Some(v) => new.backled_rel_brightness = v,
                        None => return *old,
                    }
                } else {
                    match apply_forbidden_trit(old.backled_rel_speed, 1) {
                        Some(v) => new.backled_rel_speed = v,
                        None => return *old,
                    }
                }
            }
        }
    }

    new
}

fn set_frontled_mode(new: &mut State, old: &State, mode: u8) {
    if old.frontled_on == 1 {
        new.frontled_mode = mode;
    }
}

fn set_backled_mode(new: &mut State, old: &State, mode: u8) {
    if old.backled_on == 1 {
        new.backled_mode = mode;
    }
}

fn set_potled_mode(new: &mut State, old: &State, mode: u8) {
    if old.potled_on == 1 {
        new.potled_mode = mode;
    }
}

/// Which DIY slot (1-6) `frontled_mode` currently sits on, if any.
fn diy_in_mode(state: &State) -> Option<u8> {
    (1..=6).find(|&diy| state.frontled_mode_is_diy(diy))
}

/// Replays `solution` from `state` and checks it lands on `end_state`.
/// Any step that doesn't change the state at all (a forbidden move, or
/// a command with no effect from here) invalidates the whole attempt —
/// solutions are expected to be minimal, not just effective.
pub fn is_solution(solution: &[Command], state: &State, end_state: &State) -> bool {
    let mut state = *state;
    for &step in solution {
        let next = apply(&state, step);
        if next == state {
            return false;
        }
        state = next;
    }
    state == *end_state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onoff_toggles_and_clears_pause() {
        let mut state = State::new();
        state.frontled_paused = 1;
        let next = apply(&state, Command::FrontOnOff);
        assert_eq!(next.frontled_on, 0);
        assert_eq!(next.frontled_paused, 0);
    }

    #[test]
    fn brighten_then_brighten_again_is_forbidden() {
        let state = State::new();
        let once = apply(&state, Command::FrontBrighten);
        assert_eq!(once.frontled_rel_brightness, 1);
        let twice = apply(&once, Command::FrontBrighten);
        assert_eq!(twice, once);
    }

    #[test]
    fn dim_after_brighten_is_forbidden_when_avoiding_needless_changes() {
        let state = State::new();
        let brightened = apply(&state, Command::FrontBrighten);
        let then_dimmed = apply(&brightened, Command::FrontDim);
        assert_eq!(then_dimmed, brightened);
    }

    #[test]
    fn rup_on_diy1_nudges_red_channel_only() {
        let mut state = State::new();
        state.frontled_mode = 20;
        let next = apply(&state, Command::FrontRupPotG3);
        assert_eq!(State::get_r(next.frontled_diy1_rel_rgb), 1);
        assert_eq!(State::get_g(next.frontled_diy1_rel_rgb), 0);
        assert_eq!(next.potled_mode, 7);
    }

    #[test]
    fn fade7_off_advances_calibration_when_frontled_off() {
        let mut state = State::new();
        state.frontled_on = 0;
        let next = apply(&state, Command::FrontFade7PotOn);
        assert_eq!(next.frontled_calibration, 1);
    }

    #[test]
    fn forbidden_move_on_powered_off_device_is_noop() {
        let mut state = State::new();
        state.backled_on = 0;
        let next = apply(&state, Command::BackUp);
        assert_eq!(next, state);
    }
}
