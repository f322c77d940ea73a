//! Binary on-disk cache of precomputed solutions for single-alias
//! targets, keyed by (backled mode, frontled mode, potled mode, target,
//! three on/off bits). Built offline by the `overlap-solver-cache-builder`
//! binary; read here at solve time.
//!
//! Record format: 8 bytes per entry, big-endian `[u32 combo_index][u32
//! encoded_solution]`, sorted ascending by `combo_index` so a lookup can
//! stop scanning as soon as it passes the target index.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;
use std::sync::OnceLock;

use thiserror::Error;

use crate::bfs::{decode_digit_sequence, encode_digit_sequence};
use crate::catalog::{commands_for_relative_state, Command, BACKLED_MODES, FRONTLED_MODES, POTLED_MODES, RELATIVE_STATES};
use crate::state::State;
use crate::transition::is_solution;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed cache record (length not a multiple of 8 bytes)")]
    MalformedRecord,
}

/// Aliases the offline cache builder enumerates solutions for: every
/// mode of every device, every relative-state directive, and every
/// on/off toggle.
pub fn target_states() -> &'static [&'static str] {
    static CELL: OnceLock<Vec<&'static str>> = OnceLock::new();
    CELL.get_or_init(|| {
        let mut states = Vec::new();
        states.extend_from_slice(BACKLED_MODES);
        states.extend_from_slice(FRONTLED_MODES);
        states.extend_from_slice(POTLED_MODES);
        for &(a, _) in RELATIVE_STATES {
            states.push(a);
        }
        for &(_, b) in RELATIVE_STATES {
            states.push(b);
        }
        states.extend_from_slice(&[
            "backled off",
            "backled on",
            "frontled off",
            "frontled on",
            "potled off",
            "potled on",
        ]);
        states
    })
}

/// Targets never worth caching: these either aren't single fixed
/// solutions (play/pause toggles based on current state) or are the
/// one-off calibration special case handled outside the graph entirely.
const UNCACHEABLE_TARGETS: &[&str] = &[
    "frontled paused",
    "frontled unpaused",
    "frontled calibrate",
    "potled calibrate",
];

const DEVICE_TOGGLING_OPTIMIZATION: bool = true;

/// Only solutions that took longer than this to compute are worth
/// storing; anything faster is cheap enough to just solve again.
pub const CACHE_SLOWER_THAN_MS: u128 = 200;

/// Looks up a cached solution for a single-alias `target_state`, given
/// `initial_states` describing the starting configuration. Returns
/// `Ok(None)` on a cache miss or for a target this cache never stores.
pub fn get_cached(cache_path: &Path, initial_states: &[&str], target_state: &str) -> Result<Option<Vec<Command>>, CacheError> {
    if UNCACHEABLE_TARGETS.contains(&target_state) {
        return Ok(None);
    }

    let decoded_initial = State::new().read(initial_states);
    let decoded_desired = decoded_initial.read(&[target_state]);

    get_cached_internal(cache_path, &decoded_initial, &decoded_desired, target_state)
}

fn get_cached_internal(
    cache_path: &Path,
    initial: &State,
    desired: &State,
    target_state: &str,
) -> Result<Option<Vec<Command>>, CacheError> {
    if DEVICE_TOGGLING_OPTIMIZATION {
        if initial.backled_on == 1 && target_state != "backled off" && target_state != "backled on" {
            let mut new_initial = *initial;
            new_initial.backled_on = 0;
            let mut new_desired = *desired;
            new_desired.backled_on = 0;
            let candidate = get_cached_internal(cache_path, &new_initial, &new_desired, target_state)?;
            if candidate_solves(&candidate, initial, desired) {
                return Ok(candidate);
            }
        }
        if initial.frontled_on == 1 && target_state != "frontled off" && target_state != "frontled on" {
            let mut new_initial = *initial;
            new_initial.frontled_on = 0;
            let mut new_desired = *desired;
            new_desired.frontled_on = 0;
            let candidate = get_cached_internal(cache_path, &new_initial, &new_desired, target_state)?;
            if candidate_solves(&candidate, initial, desired) {
                return Ok(candidate);
            }
        }
        if initial.potled_on == 1 && target_state != "potled off" && target_state != "potled on" {
            let mut new_initial = *initial;
            new_initial.potled_on = 0;
            let mut new_desired = *desired;
            new_desired.potled_on = 0;
            let candidate = get_cached_internal(cache_path, &new_initial, &new_desired, target_state)?;
            if candidate_solves(&candidate, initial, desired) {
                return Ok(candidate);
            }
        }
    }

    get_cached_internal0(cache_path, initial, target_state)
}

fn candidate_solves(candidate: &Option<Vec<Command>>, initial: &State, desired: &State) -> bool {
    candidate.as_deref().is_some_and(|sol| is_solution(sol, initial, desired))
}

fn get_cached_internal0(cache_path: &Path, initial: &State, target_state: &str) -> Result<Option<Vec<Command>>, CacheError> {
    let target_index = match target_states().iter().position(|&s| s == target_state) {
        Some(i) => i as u64,
        None => return Ok(None),
    };
    let needle = encode_state_combination(initial, target_index);

    let file = match File::open(cache_path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut reader = BufReader::new(file);
    let mut buf = [0u8; 8];
    loop {
        if !read_record(&mut reader, &mut buf)? {
            return Ok(None);
        }
        let index = u32::from_be_bytes(buf[0..4].try_into().unwrap()) as u64;
        if index == needle {
            let encoded = u32::from_be_bytes(buf[4..8].try_into().unwrap());
            return Ok(Some(decode_solution(encoded as u64)));
        }
        if index > needle {
            return Ok(None);
        }
    }
}

/// Fills `buf` with the next 8-byte record. Returns `Ok(false)` on a
/// clean end of file at a record boundary (a plain cache miss), and
/// `Err(CacheError::MalformedRecord)` if the file ends partway through
/// a record, which a well-formed cache (always written in whole
/// 8-byte records by [`append_records`]) should never do.
fn read_record(reader: &mut impl Read, buf: &mut [u8; 8]) -> Result<bool, CacheError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            return if filled == 0 { Ok(false) } else { Err(CacheError::MalformedRecord) };
        }
        filled += n;
    }
    Ok(true)
}

/// Packs an initial state + target alias into the cache's sort key.
pub fn encode_state_combination(initial: &State, target_index: u64) -> u64 {
    let mut index = 0u64;
    index = initial.backled_mode as u64 + index * BACKLED_MODES.len() as u64;
    index = initial.frontled_mode as u64 + index * FRONTLED_MODES.len() as u64;
    index = initial.potled_mode as u64 + index * POTLED_MODES.len() as u64;
    index = target_index + index * target_states().len() as u64;
    index = initial.backled_on as u64 + index * 2;
    index = initial.frontled_on as u64 + index * 2;
    index = initial.potled_on as u64 + index * 2;
    index
}

/// A solution is packed reversed (last step first) so the longest
/// realistic solutions still fit in 32 bits: the final steps in the
/// heuristic cascade's longest entries are low-valued commands.
pub fn encode_solution(solution: &[Command]) -> u64 {
    let reversed: Vec<u8> = solution.iter().rev().map(|c| c.index()).collect();
    encode_digit_sequence(&reversed)
}

pub fn decode_solution(encoded: u64) -> Vec<Command> {
    let mut indices = decode_digit_sequence(encoded);
    indices.reverse();
    indices
        .into_iter()
        .map(|i| Command::from_index(i).expect("cache only ever stores valid command indices"))
        .collect()
}

/// Initial solutions known without a graph search at all: the single-
/// command moves that directly realize a relative-state directive.
pub fn seed_candidates(target_state: &str) -> Vec<Vec<Command>> {
    commands_for_relative_state(target_state)
        .iter()
        .map(|&c| vec![c])
        .collect()
}

/// Appends pre-sorted `(combo_index, encoded_solution)` records to the
/// cache file, creating it if necessary. Used only by the offline cache
/// builder; ordering is the builder's responsibility; see DESIGN.md.
pub fn append_records(cache_path: &Path, records: &[(u32, u32)]) -> Result<(), CacheError> {
    let mut file = std::fs::OpenOptions::new().create(true).append(true).open(cache_path)?;
    for &(index, encoded) in records {
        file.write_all(&index.to_be_bytes())?;
        file.write_all(&encoded.to_be_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solution_codec_round_trips() {
        let solution = vec![Command::FrontDim, Command::BackOn, Command::FrontOnOff];
        let encoded = encode_solution(&solution);
        assert_eq!(decode_solution(encoded), solution);
    }

    #[test]
    fn solution_codec_round_trips_single() {
        let solution = vec![Command::BackUp];
        assert_eq!(decode_solution(encode_solution(&solution)), solution);
    }

    #[test]
    fn uncacheable_targets_short_circuit_without_touching_disk() {
        let missing = Path::new("/nonexistent/path/should/not/be/opened/cache.bin");
        let result = get_cached(missing, &["backled r", "frontled r", "potled r"], "frontled calibrate").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn missing_cache_file_is_a_clean_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.bin");
        let result = get_cached(&path, &["backled r", "frontled r", "potled r"], "frontled r2").unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn lookup_finds_an_appended_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.bin");

        let initial = State::new();
        let target_index = target_states().iter().position(|&s| s == "frontled r2").unwrap() as u64;
        let combo = encode_state_combination(&initial, target_index) as u32;
        let solution = vec![Command::FrontR2];
        let encoded = encode_solution(&solution) as u32;

        append_records(&path, &[(combo, encoded)]).unwrap();

        let found = get_cached(&path, &["backled r", "frontled r", "potled r"], "frontled r2").unwrap();
        assert_eq!(found, Some(solution));
    }

    #[test]
    fn truncated_trailing_record_is_reported_as_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.bin");

        let initial = State::new();
        let target_index = target_states().iter().position(|&s| s == "frontled r2").unwrap() as u64;
        let combo = encode_state_combination(&initial, target_index) as u32;
        let solution = vec![Command::FrontR2];
        let encoded = encode_solution(&solution) as u32;
        append_records(&path, &[(combo, encoded)]).unwrap();

        // Append a partial record: a lone length-4 fragment with no
        // matching second half, as a crash mid-write might leave behind.
        let mut file = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        file.write_all(&[0u8; 5]).unwrap();
        drop(file);

        let err = get_cached(&path, &["backled r", "frontled r", "potled r"], "frontled g2").unwrap_err();
        assert!(matches!(err, CacheError::MalformedRecord));
    }
}
