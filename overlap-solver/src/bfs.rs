//! Depth-bounded breadth-first search over the full state graph, plus
//! the command-path integer codec shared with the cache file format.

use std::collections::{HashSet, VecDeque};

use crate::catalog::{Command, COMMAND_COUNT};
use crate::state::State;
use crate::transition::apply;

/// Base of the command-path digit codec: one more than the command
/// count so digit `0` is free to mean "no command here" (path
/// terminator / padding).
const BASE: u64 = COMMAND_COUNT as u64 + 1;

/// Packs a sequence of command indices into a single integer, low digit
/// first: `seq[0]` occupies the ones place, `seq[1]` the `BASE`s place,
/// and so on. Every digit is `index + 1` so a trailing zero digit never
/// collides with a real command.
pub(crate) fn encode_digit_sequence(seq: &[u8]) -> u64 {
    let mut encoded = 0u64;
    let mut power = 1u64;
    for &index in seq {
        encoded += (index as u64 + 1) * power;
        power *= BASE;
    }
    encoded
}

/// Inverse of [`encode_digit_sequence`].
pub(crate) fn decode_digit_sequence(mut encoded: u64) -> Vec<u8> {
    let mut seq = Vec::new();
    while encoded > 0 {
        let digit = encoded % BASE;
        encoded /= BASE;
        seq.push((digit - 1) as u8);
    }
    seq
}

/// Appends `command` to an already-encoded path of length `len`,
/// without having to decode it first.
fn push_command(path: u64, len: u32, command: Command) -> u64 {
    path + (command.index() as u64 + 1) * BASE.pow(len)
}

/// Command-path codec used when a path is built incrementally during
/// BFS expansion: first command pressed sits in the lowest digit.
pub fn encode_commandseries(seq: &[u8]) -> u64 {
    encode_digit_sequence(seq)
}

pub fn decode_commandseries(encoded: u64) -> Vec<u8> {
    decode_digit_sequence(encoded)
}

fn to_commands(indices: &[u8]) -> Vec<Command> {
    indices
        .iter()
        .map(|&i| Command::from_index(i).expect("bfs only ever encodes valid command indices"))
        .collect()
}

/// Breadth-first search from `initial` to `desired`, exploring paths no
/// longer than `limit` commands. Returns `None` if `limit` is 0 or no
/// path within the bound exists.
///
/// Visited states are marked when dequeued, not when discovered — the
/// same state can sit in the queue more than once before that happens.
/// This costs a little redundant work but keeps the search a faithful
/// level-order BFS, which is what guarantees the first hit is shortest.
pub fn bfs(initial: &State, desired: &State, limit: u32) -> Option<Vec<Command>> {
    if limit == 0 {
        return None;
    }

    let start = initial.encode();
    let end = desired.encode();

    let mut visited: HashSet<u64> = HashSet::new();
    let mut queue: VecDeque<(u64, u64, u32)> = VecDeque::new();
    queue.push_back((start, 0, 0));

    while let Some((state, path, path_len)) = queue.pop_front() {
        visited.insert(state);
        let decoded_state = State::decode(state);

        for command in Command::ALL {
            let next_state = apply(&decoded_state, command).encode();
            if visited.contains(&next_state) {
                continue;
            }
            let next_path = push_command(path, path_len, command);
            if next_state == end {
                return Some(to_commands(&decode_digit_sequence(next_path)));
            }
            if path_len == limit - 1 {
                continue;
            }
            queue.push_back((next_state, next_path, path_len + 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_sequence_round_trips_empty() {
        assert_eq!(decode_digit_sequence(encode_digit_sequence(&[])), Vec::<u8>::new());
    }

    #[test]
    fn digit_sequence_round_trips_single() {
        let seq = vec![7u8];
        assert_eq!(decode_digit_sequence(encode_digit_sequence(&seq)), seq);
    }

    #[test]
    fn digit_sequence_round_trips_full_length_path() {
        let seq: Vec<u8> = (0..COMMAND_COUNT as u8).rev().take(6).collect();
        assert_eq!(decode_digit_sequence(encode_digit_sequence(&seq)), seq);
    }

    #[test]
    fn bfs_finds_direct_single_step_solution() {
        let initial = State::new();
        let desired = apply(&initial, Command::FrontDim);
        let solution = bfs(&initial, &desired, 3).unwrap();
        assert_eq!(solution, vec![Command::FrontDim]);
    }

    #[test]
    fn bfs_respects_zero_limit() {
        let initial = State::new();
        let desired = apply(&initial, Command::FrontDim);
        assert_eq!(bfs(&initial, &desired, 0), None);
    }
}
