//! Multiple-choice sets: the correct answer plus nearby distractors.
//!
//! Both generators share one acceptance loop. Candidates are drawn around the
//! answer, rejected when invalid or already present, and the loop gives up
//! with [`QuizError::DistractorExhaustion`] after `max_attempts` draws. The
//! finished set is shuffled with Fisher-Yates before it is returned.

use std::fmt::Display;

use rand::Rng;
use tracing::{debug, warn};

use crate::quiz_engine::{
    config::EngineConfig,
    error::{QuizError, QuizResult},
    models::{SequenceKind, Tier, CHOICE_COUNT},
    sequence::{LOWERCASE, UPPERCASE},
    shuffle::shuffle,
};

fn collect_choices<T, R, F>(
    rng: &mut R,
    answer: T,
    max_attempts: u32,
    mut draw: F,
) -> QuizResult<Vec<T>>
where
    T: PartialEq + Display,
    R: Rng,
    F: FnMut(&mut R) -> Option<T>,
{
    let mut values = Vec::with_capacity(CHOICE_COUNT);
    values.push(answer);
    let mut attempts = 0u32;

    while values.len() < CHOICE_COUNT {
        if attempts == max_attempts {
            warn!(answer = %values[0], attempts, "Distractor search exhausted");
            return Err(QuizError::DistractorExhaustion {
                answer: values[0].to_string(),
                attempts,
            });
        }
        attempts += 1;
        if let Some(candidate) = draw(&mut *rng) {
            if !values.contains(&candidate) {
                values.push(candidate);
            }
        }
    }

    debug!(answer = %values[0], attempts, "Collected choices");
    shuffle(rng, &mut values);
    Ok(values)
}

/// Choices for a numeric answer: distractors lie within the tier's
/// `choice_variation` of `answer` and are never negative.
pub fn generate_choices<R: Rng>(
    rng: &mut R,
    answer: u32,
    tier: Tier,
    cfg: &EngineConfig,
) -> QuizResult<Vec<u32>> {
    let variation = i64::from(cfg.tier(tier).choice_variation);
    collect_choices(rng, answer, cfg.max_attempts, |rng| {
        let candidate = i64::from(answer) + rng.gen_range(-variation..=variation);
        u32::try_from(candidate).ok()
    })
}

fn letter_alphabet(answer: &str) -> QuizResult<(&'static [u8; 26], usize)> {
    let bad = || QuizError::contract(format!("'{answer}' is not a single ASCII letter"));
    let [byte] = answer.as_bytes() else {
        return Err(bad());
    };
    let alphabet = if byte.is_ascii_uppercase() {
        UPPERCASE
    } else if byte.is_ascii_lowercase() {
        LOWERCASE
    } else {
        return Err(bad());
    };
    let index = alphabet.iter().position(|b| b == byte).ok_or_else(bad)?;
    Ok((alphabet, index))
}

/// Choices for a sequence answer.
///
/// Numbers move by ±1 or ±2 and stay non-negative; letters move 1–3 places
/// around the alphabet, wrapping, in the answer's own case.
pub fn generate_sequence_choices<R: Rng>(
    rng: &mut R,
    answer: &str,
    kind: SequenceKind,
    cfg: &EngineConfig,
) -> QuizResult<Vec<String>> {
    match kind {
        SequenceKind::Numeric => {
            let value: i64 = answer.parse().map_err(|_| {
                QuizError::contract(format!("'{answer}' is not a number"))
            })?;
            if value < 0 {
                return Err(QuizError::contract(format!("'{answer}' is negative")));
            }
            collect_choices(rng, answer.to_string(), cfg.max_attempts, |rng| {
                let offset = if rng.gen_bool(0.5) { 1 } else { 2 };
                let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
                let candidate = value + offset * sign;
                (candidate >= 0).then(|| candidate.to_string())
            })
        }
        SequenceKind::Alphabetic => {
            let (alphabet, index) = letter_alphabet(answer)?;
            let len = alphabet.len() as i64;
            collect_choices(rng, answer.to_string(), cfg.max_attempts, |rng| {
                let offset = rng.gen_range(1..=3i64);
                let shift = if rng.gen_bool(0.5) { offset } else { -offset };
                let wrapped = (index as i64 + shift).rem_euclid(len) as usize;
                Some((alphabet[wrapped] as char).to_string())
            })
        }
    }
}
