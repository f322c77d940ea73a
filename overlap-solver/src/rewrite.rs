//! Rewrites an ambiguous caller-facing target into the concrete alias
//! the rest of the solver understands, using the initial state as
//! context. The remote has one physical PLAY/PAUSE button and one set
//! of RGB-nudge buttons shared across all six DIY slots; the caller
//! names the effect they want ("frontled playpause", "frontled rup")
//! and this picks the alias that is actually reachable from here.

use crate::catalog::{BACKLED_COLOR_MODE_COUNT, BACKLED_MODES, POTLED_COLOR_MODE_COUNT, POTLED_MODES};

pub fn convert_target_state(target_state: &str, initial_states: &[&str]) -> String {
    if target_state == "frontled playpause" {
        return if initial_states.contains(&"frontled paused") {
            "frontled unpaused".to_string()
        } else {
            "frontled paused".to_string()
        };
    }

    for axis in ["rup", "rdown", "gup", "gdown", "bup", "bdown"] {
        if target_state == format!("frontled {axis}") {
            for diy in 1..=6 {
                let slot = format!("frontled diy{diy}");
                if initial_states.contains(&slot.as_str()) {
                    return format!("frontled diy{diy} {axis}");
                }
            }
        }
    }

    if target_state == "backled dim" {
        for &state in initial_states {
            if let Some(i) = BACKLED_MODES.iter().position(|&m| m == state) {
                if i >= BACKLED_COLOR_MODE_COUNT {
                    return "backled slow".to_string();
                }
            }
        }
    } else if target_state == "backled bright" {
        for &state in initial_states {
            if let Some(i) = BACKLED_MODES.iter().position(|&m| m == state) {
                if i >= BACKLED_COLOR_MODE_COUNT {
                    return "backled quick".to_string();
                }
            }
        }
    } else if target_state == "potled dim" {
        for &state in initial_states {
            if let Some(i) = POTLED_MODES.iter().position(|&m| m == state) {
                if i >= POTLED_COLOR_MODE_COUNT {
                    return "potled slow".to_string();
                }
            }
        }
    } else if target_state == "potled bright" {
        for &state in initial_states {
            if let Some(i) = POTLED_MODES.iter().position(|&m| m == state) {
                if i >= POTLED_COLOR_MODE_COUNT {
                    return "potled quick".to_string();
                }
            }
        }
    }

    target_state.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playpause_toggles_based_on_initial_pause_state() {
        assert_eq!(
            convert_target_state("frontled playpause", &["frontled paused"]),
            "frontled unpaused"
        );
        assert_eq!(convert_target_state("frontled playpause", &[]), "frontled paused");
    }

    #[test]
    fn rup_binds_to_the_active_diy_slot() {
        assert_eq!(
            convert_target_state("frontled rup", &["frontled diy3"]),
            "frontled diy3 rup"
        );
    }

    #[test]
    fn dim_on_an_effect_mode_becomes_slow() {
        assert_eq!(convert_target_state("backled dim", &["backled smooth"]), "backled slow");
        assert_eq!(convert_target_state("backled dim", &["backled r"]), "backled dim");
    }

    #[test]
    fn unrelated_targets_pass_through_unchanged() {
        assert_eq!(convert_target_state("frontled r", &["frontled g"]), "frontled r");
    }
}
