//! The solver's graph vertex: a snapshot of all three devices' absolute
//! and relative settings, plus its bijection to a single `u64`.
//!
//! [`encode`](State::encode)/[`decode`](State::decode) are what make the
//! BFS frontier a plain `HashSet<u64>` instead of a `HashSet<State>` —
//! see `bfs.rs`.

use crate::catalog::{
    BACKLED_COLOR_MODE_COUNT, BACKLED_MODES, FRONTLED_COLOR_MODE_COUNT, FRONTLED_DIY_FIRST,
    FRONTLED_MODES, POTLED_COLOR_MODE_COUNT, POTLED_MODES,
};

const BACKLED_ON: u64 = 1;
const FRONTLED_ON: u64 = 2;
const POTLED_ON: u64 = 4;
const FRONTLED_PAUSED: u64 = 8;
const BACKLED_MODE: u64 = 16;
const FRONTLED_MODE: u64 = 320;
const POTLED_MODE: u64 = 10_240;
const BACKLED_REL_BRIGHTNESS: u64 = 204_800;
const FRONTLED_REL_BRIGHTNESS: u64 = 614_400;
const POTLED_REL_BRIGHTNESS: u64 = 1_843_200;
const BACKLED_REL_SPEED: u64 = 5_529_600;
const FRONTLED_REL_SPEED: u64 = 16_588_800;
const POTLED_REL_SPEED: u64 = 49_766_400;
const FRONTLED_DIY1_REL_RGB: u64 = 149_299_200;
const FRONTLED_DIY2_REL_RGB: u64 = 4_031_078_400;
const FRONTLED_DIY3_REL_RGB: u64 = 108_839_116_800;
const FRONTLED_DIY4_REL_RGB: u64 = 2_938_656_153_600;
const FRONTLED_DIY5_REL_RGB: u64 = 79_343_716_147_200;
const FRONTLED_DIY6_REL_RGB: u64 = 2_142_280_335_974_400;
const FRONTLED_CALIBRATION: u64 = 57_841_569_071_308_800;

/// Upper bound of any encoded [`State`]; every combination the solver
/// enumerates fits comfortably in a `u64`.
pub const STATE_MAX_SIZE: u64 = 347_049_414_427_852_799;

pub const FRONTLED_CALIBRATION_LENGTH: u8 = 6;

/// Graph vertex. Mirrors the remote's actual addressable state space:
/// three on/off devices, their current mode index, and a handful of
/// relative (trit) axes whose absolute value the controller can't read
/// back off hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    pub backled_on: u8,
    pub frontled_on: u8,
    pub potled_on: u8,
    pub frontled_paused: u8,
    pub backled_mode: u8,
    pub frontled_mode: u8,
    pub potled_mode: u8,
    pub backled_rel_brightness: u8,
    pub frontled_rel_brightness: u8,
    pub potled_rel_brightness: u8,
    pub backled_rel_speed: u8,
    pub frontled_rel_speed: u8,
    pub potled_rel_speed: u8,
    pub frontled_diy1_rel_rgb: u8,
    pub frontled_diy2_rel_rgb: u8,
    pub frontled_diy3_rel_rgb: u8,
    pub frontled_diy4_rel_rgb: u8,
    pub frontled_diy5_rel_rgb: u8,
    pub frontled_diy6_rel_rgb: u8,
    pub frontled_calibration: u8,
    pub potled_calibration: u8,
}

impl State {
    /// Default state: all three devices on, unpaused, mode 0, no
    /// relative drift, no calibration in progress.
    pub fn new() -> Self {
        State {
            backled_on: 1,
            frontled_on: 1,
            potled_on: 1,
            ..Default::default()
        }
    }

    pub fn encode(&self) -> u64 {
        BACKLED_ON * self.backled_on as u64
            + FRONTLED_ON * self.frontled_on as u64
            + POTLED_ON * self.potled_on as u64
            + FRONTLED_PAUSED * self.frontled_paused as u64
            + BACKLED_MODE * self.backled_mode as u64
            + FRONTLED_MODE * self.frontled_mode as u64
            + POTLED_MODE * self.potled_mode as u64
            + BACKLED_REL_BRIGHTNESS * self.backled_rel_brightness as u64
            + FRONTLED_REL_BRIGHTNESS * self.frontled_rel_brightness as u64
            + POTLED_REL_BRIGHTNESS * self.potled_rel_brightness as u64
            + BACKLED_REL_SPEED * self.backled_rel_speed as u64
            + FRONTLED_REL_SPEED * self.frontled_rel_speed as u64
            + POTLED_REL_SPEED * self.potled_rel_speed as u64
            + FRONTLED_DIY1_REL_RGB * self.frontled_diy1_rel_rgb as u64
            + FRONTLED_DIY2_REL_RGB * self.frontled_diy2_rel_rgb as u64
            + FRONTLED_DIY3_REL_RGB * self.frontled_diy3_rel_rgb as u64
            + FRONTLED_DIY4_REL_RGB * self.frontled_diy4_rel_rgb as u64
            + FRONTLED_DIY5_REL_RGB * self.frontled_diy5_rel_rgb as u64
            + FRONTLED_DIY6_REL_RGB * self.frontled_diy6_rel_rgb as u64
            + FRONTLED_CALIBRATION * self.frontled_calibration as u64
    }

    pub fn decode(mut encoded: u64) -> State {
        let mut state = State::default();
        macro_rules! take {
            ($len:expr) => {{
                let digit = encoded % $len;
                encoded /= $len;
                digit as u8
            }};
        }
        state.backled_on = take!(2);
        state.frontled_on = take!(2);
        state.potled_on = take!(2);
        state.frontled_paused = take!(2);
        state.backled_mode = take!(BACKLED_MODES.len() as u64);
        state.frontled_mode = take!(FRONTLED_MODES.len() as u64);
        state.potled_mode = take!(POTLED_MODES.len() as u64);
        state.backled_rel_brightness = take!(3);
        state.frontled_rel_brightness = take!(3);
        state.potled_rel_brightness = take!(3);
        state.backled_rel_speed = take!(3);
        state.frontled_rel_speed = take!(3);
        state.potled_rel_speed = take!(3);
        state.frontled_diy1_rel_rgb = take!(27);
        state.frontled_diy2_rel_rgb = take!(27);
        state.frontled_diy3_rel_rgb = take!(27);
        state.frontled_diy4_rel_rgb = take!(27);
        state.frontled_diy5_rel_rgb = take!(27);
        state.frontled_diy6_rel_rgb = take!(27);
        state.frontled_calibration = take!(FRONTLED_CALIBRATION_LENGTH as u64);
        state
    }

    /// Per-`diy` slot relative-RGB field, indexed `1..=6`.
    pub fn diy_rel_rgb(&self, diy: u8) -> u8 {
        match diy {
            1 => self.frontled_diy1_rel_rgb,
            2 => self.frontled_diy2_rel_rgb,
            3 => self.frontled_diy3_rel_rgb,
            4 => self.frontled_diy4_rel_rgb,
            5 => self.frontled_diy5_rel_rgb,
            6 => self.frontled_diy6_rel_rgb,
            _ => panic!("diy slot out of range: {diy}"),
        }
    }

    pub fn set_diy_rel_rgb(&mut self, diy: u8, value: u8) {
        match diy {
            1 => self.frontled_diy1_rel_rgb = value,
            2 => self.frontled_diy2_rel_rgb = value,
            3 => self.frontled_diy3_rel_rgb = value,
            4 => self.frontled_diy4_rel_rgb = value,
            5 => self.frontled_diy5_rel_rgb = value,
            6 => self.frontled_diy6_rel_rgb = value,
            _ => panic!("diy slot out of range: {diy}"),
        }
    }

    /// True when `frontled_mode` is currently parked on DIY slot `diy`
    /// (1-indexed, matching the `frontled diy1`..`frontled diy6` aliases).
    pub fn frontled_mode_is_diy(&self, diy: u8) -> bool {
        debug_assert!((1..=6).contains(&diy));
        self.frontled_mode == FRONTLED_DIY_FIRST + (diy - 1)
    }

    pub fn backled_mode_is_color(&self) -> bool {
        (self.backled_mode as usize) < BACKLED_COLOR_MODE_COUNT
    }

    pub fn frontled_mode_is_color(&self) -> bool {
        (self.frontled_mode as usize) < FRONTLED_COLOR_MODE_COUNT
    }

    pub fn potled_mode_is_color(&self) -> bool {
        (self.potled_mode as usize) < POTLED_COLOR_MODE_COUNT
    }

    /// Whether applying `setting` (a command alias string) to this state
    /// would actually change anything observable — used by the heuristic
    /// to skip redundant candidate presses.
    pub fn is_setting_effective(&self, setting: &str) -> bool {
        match setting {
            "backled off" => self.backled_on == 1,
            "backled on" => self.backled_on == 0,
            "frontled off" => self.frontled_on == 1,
            "frontled on" => self.frontled_on == 0,
            "potled off" => self.potled_on == 1,
            "potled on" => self.potled_on == 0,
            "frontled slow" | "frontled quick" => {
                self.frontled_on == 1 && !self.frontled_mode_is_color()
            }
            "frontled dim" | "frontled bright" => self.frontled_on == 1 && self.frontled_mode_is_color(),
            "backled slow" | "backled quick" => self.backled_on == 1 && !self.backled_mode_is_color(),
            "backled dim" | "backled bright" => self.backled_on == 1 && self.backled_mode_is_color(),
            "potled slow" | "potled quick" => self.potled_on == 1 && !self.potled_mode_is_color(),
            "potled dim" | "potled bright" => self.potled_on == 1 && self.potled_mode_is_color(),
            "frontled calibrate" => self.frontled_on == 1,
            "potled calibrate" => self.potled_on == 1,
            _ => {
                for diy in 1u8..=6 {
                    for axis in ["rup", "rdown", "gup", "gdown", "bup", "bdown"] {
                        if setting == format!("frontled diy{diy} {axis}") {
                            return self.frontled_on == 1 && self.frontled_mode_is_diy(diy);
                        }
                    }
                }
                if BACKLED_MODES.contains(&setting) {
                    return self.backled_on == 1;
                }
                if FRONTLED_MODES.contains(&setting) {
                    return self.frontled_on == 1;
                }
                if crate::catalog::POTLED_MODES.contains(&setting) {
                    return self.potled_on == 1;
                }
                false
            }
        }
    }

    /// Folds a caller-given state description (a set of aliases) on top
    /// of this state, producing the initial vertex the solver starts
    /// from. Aliases not recognized as a relative/mode directive are
    /// ignored (they are pure targets, consumed elsewhere).
    pub fn read(&self, given: &[&str]) -> State {
        let mut state = *self;

        if given.contains(&"backled off") {
            state.backled_on = 0;
        }
        if given.contains(&"backled on") {
            state.backled_on = 1;
        }
        if given.contains(&"frontled off") {
            state.frontled_on = 0;
        }
        if given.contains(&"frontled on") {
            state.frontled_on = 1;
        }
        if given.contains(&"potled off") {
            state.potled_on = 0;
        }
        if given.contains(&"potled on") {
            state.potled_on = 1;
        }
        if given.contains(&"frontled unpaused") {
            state.frontled_paused = 0;
        }
        if given.contains(&"frontled paused") {
            state.frontled_paused = 1;
        }

        for &device_state in given {
            if let Some(i) = BACKLED_MODES.iter().position(|&m| m == device_state) {
                state.backled_mode = i as u8;
            }
            if let Some(i) = FRONTLED_MODES.iter().position(|&m| m == device_state) {
                state.frontled_mode = i as u8;
            }
            if let Some(i) = POTLED_MODES.iter().position(|&m| m == device_state) {
                state.potled_mode = i as u8;
            }
        }

        if given.contains(&"backled bright") {
            state.backled_rel_brightness = 1;
        }
        if given.contains(&"backled dim") {
            state.backled_rel_brightness = 2;
        }
        if given.contains(&"frontled bright") {
            state.frontled_rel_brightness = 1;
        }
        if given.contains(&"frontled dim") {
            state.frontled_rel_brightness = 2;
        }
        if given.contains(&"potled bright") {
            state.potled_rel_brightness = 1;
        }
        if given.contains(&"potled dim") {
            state.potled_rel_brightness = 2;
        }

        if given.contains(&"backled quick") {
            state.backled_rel_speed = 1;
        }
        if given.contains(&"backled slow") {
            state.backled_rel_speed = 2;
        }
        if given.contains(&"frontled quick") {
            state.frontled_rel_speed = 1;
        }
        if given.contains(&"frontled slow") {
            state.frontled_rel_speed = 2;
        }
        if given.contains(&"potled quick") {
            state.potled_rel_speed = 1;
        }
        if given.contains(&"potled slow") {
            state.potled_rel_speed = 2;
        }

        for diy in 1u8..=6 {
            let mut rgb = state.diy_rel_rgb(diy);
            if given.contains(&format!("frontled diy{diy} rup").as_str()) {
                rgb += 1;
            }
            if given.contains(&format!("frontled diy{diy} rdown").as_str()) {
                rgb += 2;
            }
            if given.contains(&format!("frontled diy{diy} gup").as_str()) {
                rgb += 3;
            }
            if given.contains(&format!("frontled diy{diy} gdown").as_str()) {
                rgb += 6;
            }
            if given.contains(&format!("frontled diy{diy} bup").as_str()) {
                rgb += 9;
            }
            if given.contains(&format!("frontled diy{diy} bdown").as_str()) {
                rgb += 18;
            }
            state.set_diy_rel_rgb(diy, rgb);
        }

        if given.contains(&"frontled calibrate") {
            state.frontled_calibration = 1;
        }
        if given.contains(&"potled calibrate") {
            state.potled_calibration = 1;
        }

        state
    }

    pub fn get_r(rgb: u8) -> u8 {
        rgb % 3
    }

    pub fn set_r(rgb: u8, trit: u8) -> u8 {
        rgb - Self::get_r(rgb) + trit
    }

    pub fn get_g(rgb: u8) -> u8 {
        (rgb / 3) % 3
    }

    pub fn set_g(rgb: u8, trit: u8) -> u8 {
        rgb - Self::get_g(rgb) * 3 + trit * 3
    }

    pub fn get_b(rgb: u8) -> u8 {
        rgb / 9
    }

    pub fn set_b(rgb: u8, trit: u8) -> u8 {
        rgb - Self::get_b(rgb) * 9 + trit * 9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoding_default_round_trips() {
        let state = State::new();
        assert_eq!(State::decode(state.encode()), state);
    }

    #[test]
    fn decoding_encoded_default_is_default() {
        assert_eq!(State::decode(0), State::default());
    }

    #[test]
    fn encoding_decoded_is_identity_at_max() {
        let encoded = STATE_MAX_SIZE;
        let state = State::decode(encoded);
        assert_eq!(state.encode(), encoded);
    }

    #[test]
    fn encoding_rollover_overflows_into_next_field() {
        let mut state = State::new();
        state.backled_mode = BACKLED_MODES.len() as u8;
        let decoded = State::decode(state.encode());
        assert_eq!(decoded.backled_mode, 0);
        assert_eq!(decoded.frontled_mode, 1);
    }

    #[test]
    fn rgb_trit_codec_round_trips_each_channel() {
        let mut rgb = 0u8;
        rgb = State::set_r(rgb, 2);
        rgb = State::set_g(rgb, 1);
        rgb = State::set_b(rgb, 2);
        assert_eq!(State::get_r(rgb), 2);
        assert_eq!(State::get_g(rgb), 1);
        assert_eq!(State::get_b(rgb), 2);
    }
}
