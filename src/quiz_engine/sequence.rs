//! Number and alphabet sequences with one hidden element.

use rand::Rng;
use tracing::debug;

use crate::quiz_engine::{
    config::EngineConfig,
    models::{Direction, SequenceKind, SequenceProblem, Tier, PLACEHOLDER},
    shuffle::chance,
};

pub const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 6;

/// Ascending runs start in 1..=5, descending runs in 6..=10.
const ASCENDING_START: (u32, u32) = (1, 5);
const DESCENDING_START: (u32, u32) = (6, 10);

fn numeric_terms<R: Rng>(
    rng: &mut R,
    direction: Direction,
    length: usize,
    cfg: &EngineConfig,
) -> (Vec<String>, u32) {
    let step: u32 = if chance(rng, cfg.sequence.step_one_probability) { 1 } else { 2 };
    let span = (length as u32 - 1) * step;

    let terms = match direction {
        Direction::Ascending => {
            let start = rng.gen_range(ASCENDING_START.0..=ASCENDING_START.1);
            (0..length as u32).map(|i| start + i * step).collect::<Vec<_>>()
        }
        Direction::Descending => {
            // Never count below zero.
            let lo = DESCENDING_START.0.max(span);
            let hi = DESCENDING_START.1.max(lo);
            let start = rng.gen_range(lo..=hi);
            (0..length as u32).map(|i| start - i * step).collect::<Vec<_>>()
        }
    };

    (terms.into_iter().map(|n| n.to_string()).collect(), step)
}

fn alphabet_terms<R: Rng>(rng: &mut R, direction: Direction, length: usize) -> Vec<String> {
    let alphabet = if rng.gen_bool(0.5) { UPPERCASE } else { LOWERCASE };
    let start = rng.gen_range(0..=alphabet.len() - length);
    let window = &alphabet[start..start + length];

    let mut letters: Vec<String> = window.iter().map(|&b| (b as char).to_string()).collect();
    if direction == Direction::Descending {
        letters.reverse();
    }
    letters
}

/// Generate a sequence problem.
///
/// The tier does not change the ranges; it only feeds scoring downstream.
pub fn generate_sequence_problem<R: Rng>(
    rng: &mut R,
    tier: Tier,
    cfg: &EngineConfig,
) -> SequenceProblem {
    let kind = if rng.gen_bool(0.5) { SequenceKind::Numeric } else { SequenceKind::Alphabetic };
    let direction = if rng.gen_bool(0.5) { Direction::Ascending } else { Direction::Descending };
    let length = rng.gen_range(MIN_LENGTH..=MAX_LENGTH);

    let (mut elements, step) = match kind {
        SequenceKind::Numeric    => numeric_terms(rng, direction, length, cfg),
        SequenceKind::Alphabetic => (alphabet_terms(rng, direction, length), 1),
    };

    let masked_index = rng.gen_range(0..length);
    let expected_answer = std::mem::replace(&mut elements[masked_index], PLACEHOLDER.to_string());

    debug!(
        %tier,
        %kind,
        ?direction,
        length,
        masked_index,
        answer = %expected_answer,
        "Generated sequence problem"
    );

    SequenceProblem {
        elements,
        direction,
        kind,
        step,
        masked_index,
        expected_answer,
    }
}
