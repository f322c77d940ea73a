//! Offline enumerator that precomputes solutions for every reachable
//! (device modes, on/off bits, target) combination and appends the
//! slow-to-find ones to `cache.bin`. Ported from `cache.py`'s
//! `__main__` block.
//!
//! This is a brute-force sweep over the whole state space and is
//! expected to run for hours. Run it once, commit the resulting
//! `cache.bin`, and the CLI's `--use-cache` flag picks it up.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use overlap_solver::cache::{append_records, encode_solution, encode_state_combination, seed_candidates, target_states, CACHE_SLOWER_THAN_MS};
use overlap_solver::catalog::{Command, BACKLED_MODES, FRONTLED_MODES, POTLED_MODES};
use overlap_solver::solver::solve_internal;
use overlap_solver::state::State;
use overlap_solver::transition::is_solution;

const ON_OFF: [&str; 2] = ["off", "on"];

fn main() {
    pretty_env_logger::init();

    let cache_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("cache.bin"));

    let mut cached_amount: u64 = 0;

    for &backled_mode in BACKLED_MODES {
        for &frontled_mode in FRONTLED_MODES {
            let mut lines: Vec<(u32, u32)> = Vec::new();

            for &potled_mode in POTLED_MODES {
                let potled_start = Instant::now();

                for &target_state in target_states() {
                    if target_state == backled_mode || target_state == frontled_mode || target_state == potled_mode {
                        continue;
                    }

                    let mut known_solutions: HashSet<Vec<Command>> =
                        seed_candidates(target_state).into_iter().collect();

                    for backled_status in ON_OFF {
                        for frontled_status in ON_OFF {
                            for potled_status in ON_OFF {
                                let backled_on_alias = format!("backled {backled_status}");
                                let frontled_on_alias = format!("frontled {frontled_status}");
                                let potled_on_alias = format!("potled {potled_status}");
                                let initial_states = [
                                    backled_mode,
                                    frontled_mode,
                                    potled_mode,
                                    backled_on_alias.as_str(),
                                    frontled_on_alias.as_str(),
                                    potled_on_alias.as_str(),
                                ];
                                let decoded_initial = State::new().read(&initial_states);
                                if !decoded_initial.is_setting_effective(target_state) {
                                    continue;
                                }
                                let decoded_desired = decoded_initial.read(&[target_state]);

                                let mut solution = known_solutions
                                    .iter()
                                    .find(|candidate| is_solution(candidate.as_slice(), &decoded_initial, &decoded_desired))
                                    .cloned();

                                if solution.is_none() {
                                    let started = Instant::now();
                                    let found = solve_internal(&decoded_initial, &decoded_desired)
                                        .expect("every reachable combination must be solvable");
                                    if started.elapsed().as_millis() > CACHE_SLOWER_THAN_MS {
                                        cached_amount += 1;
                                        let target_index =
                                            target_states().iter().position(|&s| s == target_state).unwrap() as u64;
                                        let combo = encode_state_combination(&decoded_initial, target_index) as u32;
                                        let encoded = encode_solution(&found) as u32;
                                        lines.push((combo, encoded));
                                    }
                                    solution = Some(found);
                                }

                                known_solutions.insert(solution.expect("checked above"));
                            }
                        }
                    }
                }

                log::info!(
                    "all states handled for {backled_mode}, {frontled_mode}, {potled_mode} in {:?} (to be cached so far: {cached_amount})",
                    potled_start.elapsed()
                );
            }

            lines.sort_unstable_by_key(|&(index, _)| index);
            append_records(&cache_path, &lines).expect("cache file must be writable");
        }
    }
}
