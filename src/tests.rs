//! Crate-level tests for `quiz_drill_gen`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical round; different seeds → varied rounds |
//! | Structural | Three distinct choices containing the answer; ID prefixes; points |
//! | Arithmetic | Non-negative subtraction; answer matches the hidden slot |
//! | Sequences | Reinserting the answer restores a constant-step run |
//! | Properties | The above over arbitrary seeds via `proptest` |
//! | Scenarios | Worked examples: `7 - 3`, `3, 4, ?, 6, 7`, choices around 5 and 0 |

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::quiz_engine::{
    build_problem, generate_choices, generate_round, generate_round_with,
    generate_sequence_choices, Answer, ArithmeticProblem, Direction, EngineConfig, Operation,
    Problem, QuizError, QuizRequest, QuizRound, RoundKind, SequenceKind, SequenceProblem,
    SlotFormat, Tier, CHOICE_COUNT, PLACEHOLDER,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(kind: RoundKind, tier: Tier, seed: u64) -> QuizRequest {
    QuizRequest { kind, tier, rng_seed: Some(seed) }
}

fn round(kind: RoundKind, tier: Tier, seed: u64) -> QuizRound {
    generate_round(req(kind, tier, seed), &EngineConfig::default())
        .unwrap_or_else(|e| panic!("{kind:?} {tier:?} seed={seed}: {e}"))
}

const TIERS: [Tier; 2] = [Tier::Basic, Tier::Advanced];
const KINDS: [RoundKind; 3] = [RoundKind::Arithmetic, RoundKind::Sequence, RoundKind::Mixed];

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn slot_value(p: &ArithmeticProblem) -> u32 {
    match p.slot_format {
        SlotFormat::MissingResult   => p.result,
        SlotFormat::MissingOperandB => p.operand_b,
        SlotFormat::MissingOperandA => p.operand_a,
    }
}

fn check_arithmetic(p: &ArithmeticProblem) -> Result<(), String> {
    let expected = match p.operation {
        Operation::Add      => p.operand_a.checked_add(p.operand_b),
        Operation::Subtract => p.operand_a.checked_sub(p.operand_b),
        Operation::Multiply => p.operand_a.checked_mul(p.operand_b),
    };
    if expected != Some(p.result) {
        return Err(format!("result does not follow from operands: {p:?}"));
    }
    if p.expected_answer != slot_value(p) {
        return Err(format!("expected answer is not the hidden term: {p:?}"));
    }
    if p.operation == Operation::Subtract && p.slot_format == SlotFormat::MissingOperandA {
        return Err(format!("subtraction with a missing first operand: {p:?}"));
    }
    if p.operation == Operation::Multiply && p.slot_format != SlotFormat::MissingResult {
        return Err(format!("multiplication with a missing operand: {p:?}"));
    }
    Ok(())
}

fn check_sequence(p: &SequenceProblem) -> Result<(), String> {
    if p.elements.get(p.masked_index).map(String::as_str) != Some(PLACEHOLDER) {
        return Err(format!("placeholder not at masked index: {p:?}"));
    }
    let terms: Vec<i64> = match p.kind {
        SequenceKind::Numeric => p
            .revealed()
            .iter()
            .map(|s| s.parse::<i64>().map_err(|e| format!("{s}: {e}")))
            .collect::<Result<_, _>>()?,
        SequenceKind::Alphabetic => p
            .revealed()
            .iter()
            .map(|s| s.bytes().next().map(i64::from).ok_or("empty letter".to_string()))
            .collect::<Result<_, _>>()?,
    };
    let step = match p.direction {
        Direction::Ascending  => i64::from(p.step),
        Direction::Descending => -i64::from(p.step),
    };
    if !terms.windows(2).all(|w| w[1] - w[0] == step) {
        return Err(format!("not a constant-step run: {p:?}"));
    }
    if p.kind == SequenceKind::Numeric && terms.iter().any(|&t| t < 0) {
        return Err(format!("negative term: {p:?}"));
    }
    Ok(())
}

fn check_choices(r: &QuizRound) -> Result<(), String> {
    if r.choices.len() != CHOICE_COUNT {
        return Err(format!("expected {CHOICE_COUNT} choices, got {:?}", r.choices));
    }
    if r.choices.iter().collect::<HashSet<_>>().len() != CHOICE_COUNT {
        return Err(format!("duplicate choices: {:?}", r.choices));
    }
    if r.choices.iter().filter(|c| r.is_correct(c)).count() != 1 {
        return Err(format!("answer {} not present exactly once: {:?}", r.expected_answer(), r.choices));
    }
    let numeric_seq = matches!(&r.problem, Problem::Sequence(p) if p.kind == SequenceKind::Numeric);
    if numeric_seq {
        for c in &r.choices {
            let n: i64 = c.to_string().parse().map_err(|_| format!("non-numeric choice {c}"))?;
            if n < 0 {
                return Err(format!("negative choice {n}"));
            }
        }
    }
    Ok(())
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_round() {
    for tier in TIERS {
        for kind in KINDS {
            let a = round(kind, tier, 12345);
            let b = round(kind, tier, 12345);
            assert_eq!(a, b, "round mismatch for {kind:?} {tier:?}");
        }
    }
}

#[test]
fn different_seeds_produce_varied_prompts() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = round(RoundKind::Arithmetic, Tier::Advanced, seed);
        let b = round(RoundKind::Arithmetic, Tier::Advanced, seed + 500);
        if a.problem.prompt() == b.problem.prompt() {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical prompts across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn explicit_rng_matches_seeded_request() {
    let cfg = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(77);
    let direct = generate_round_with(&mut rng, RoundKind::Sequence, Tier::Basic, &cfg).unwrap();
    assert_eq!(direct, round(RoundKind::Sequence, Tier::Basic, 77));
}

#[test]
fn entropy_seed_produces_a_valid_round() {
    let r = generate_round(QuizRequest::new(RoundKind::Mixed), &EngineConfig::default()).unwrap();
    assert_eq!(r.tier, Tier::Basic);
    check_choices(&r).unwrap();
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn every_round_has_a_valid_choice_set() {
    for tier in TIERS {
        for kind in KINDS {
            for seed in SEEDS {
                let r = round(kind, tier, seed);
                check_choices(&r).unwrap_or_else(|e| panic!("{kind:?} {tier:?} seed={seed}: {e}"));
            }
        }
    }
}

#[test]
fn round_id_prefix_matches_problem_family() {
    for seed in 0..50 {
        let r = round(RoundKind::Mixed, Tier::Basic, seed);
        let prefix = match r.problem {
            Problem::Arithmetic(_) => "AR-",
            Problem::Sequence(_)   => "SQ-",
        };
        assert!(r.round_id.starts_with(prefix), "{} for {:?}", r.round_id, r.problem);
        assert_eq!(r.round_id.len(), 11);
    }
}

#[test]
fn requested_kind_is_respected() {
    for seed in SEEDS {
        assert!(matches!(round(RoundKind::Arithmetic, Tier::Basic, seed).problem, Problem::Arithmetic(_)));
        assert!(matches!(round(RoundKind::Sequence, Tier::Basic, seed).problem, Problem::Sequence(_)));
    }
}

#[test]
fn mixed_rounds_cover_both_families() {
    let rounds: Vec<_> = (0..60).map(|s| round(RoundKind::Mixed, Tier::Advanced, s)).collect();
    assert!(rounds.iter().any(|r| matches!(r.problem, Problem::Arithmetic(_))));
    assert!(rounds.iter().any(|r| matches!(r.problem, Problem::Sequence(_))));
}

#[test]
fn points_are_between_one_and_three() {
    for tier in TIERS {
        for seed in 0..100 {
            let r = round(RoundKind::Mixed, tier, seed);
            assert!((1..=3).contains(&r.points), "{r:?}");
        }
    }
}

#[test]
fn choices_match_answer_type() {
    for seed in 0..60 {
        let r = round(RoundKind::Mixed, Tier::Basic, seed);
        let numeric = matches!(r.problem, Problem::Arithmetic(_));
        for c in &r.choices {
            assert_eq!(matches!(c, Answer::Number(_)), numeric, "{r:?}");
        }
    }
}

// ── arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn arithmetic_rounds_hold_their_invariants() {
    for tier in TIERS {
        for seed in 0..300 {
            if let Problem::Arithmetic(p) = round(RoundKind::Arithmetic, tier, seed).problem {
                check_arithmetic(&p).unwrap();
            }
        }
    }
}

#[test]
fn basic_distractors_stay_within_two() {
    for seed in 0..200 {
        let r = round(RoundKind::Arithmetic, Tier::Basic, seed);
        let Answer::Number(answer) = r.expected_answer() else { unreachable!() };
        for c in &r.choices {
            let Answer::Number(n) = c else { panic!("text choice {c}") };
            assert!(n.abs_diff(answer) <= 2, "{r:?}");
        }
    }
}

// ── sequences ────────────────────────────────────────────────────────────────

#[test]
fn sequence_rounds_hold_their_invariants() {
    for tier in TIERS {
        for seed in 0..300 {
            if let Problem::Sequence(p) = round(RoundKind::Sequence, tier, seed).problem {
                check_sequence(&p).unwrap();
            }
        }
    }
}

// ── worked scenarios ─────────────────────────────────────────────────────────

#[test]
fn scenario_seven_minus_three() {
    let p = build_problem(Tier::Basic, Operation::Subtract, 7, 3, SlotFormat::MissingResult).unwrap();
    assert_eq!(p.expected_answer, 4);
}

#[test]
fn scenario_ascending_numbers_with_gap() {
    let p = SequenceProblem {
        elements: ["3", "4", PLACEHOLDER, "6", "7"].map(String::from).to_vec(),
        direction: Direction::Ascending,
        kind: SequenceKind::Numeric,
        step: 1,
        masked_index: 2,
        expected_answer: "5".into(),
    };
    check_sequence(&p).unwrap();
    assert_eq!(p.to_string(), "3, 4, ?, 6, 7");

    let cfg = EngineConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let choices = generate_sequence_choices(&mut rng, &p.expected_answer, p.kind, &cfg).unwrap();
    assert!(choices.contains(&"5".to_string()));
}

#[test]
fn scenario_choices_around_five_and_zero() {
    let cfg = EngineConfig::default();
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let c = generate_choices(&mut rng, 5, Tier::Basic, &cfg).unwrap();
        assert!(c.contains(&5) && c.iter().all(|v| v.abs_diff(5) <= 2));

        let c = generate_choices(&mut rng, 0, Tier::Basic, &cfg).unwrap();
        assert!(c.contains(&0) && c.iter().all(|&v| v <= 2));
    }
}

#[test]
fn exhausted_distractors_surface_through_generate_round() {
    let mut cfg = EngineConfig::default();
    cfg.basic.choice_variation = 0;
    cfg.max_attempts = 10;
    let err = generate_round(req(RoundKind::Arithmetic, Tier::Basic, 3), &cfg).unwrap_err();
    assert!(matches!(err, QuizError::DistractorExhaustion { attempts: 10, .. }), "{err:?}");
}

#[test]
fn invalid_config_is_rejected_before_any_draw() {
    let mut cfg = EngineConfig::default();
    cfg.sequence.step_one_probability = f64::NAN;
    for seed in 0..50 {
        for kind in KINDS {
            let err = generate_round(req(kind, Tier::Basic, seed), &cfg).unwrap_err();
            assert!(matches!(err, QuizError::Config(_)), "{kind:?} seed={seed}: {err:?}");
        }
    }

    let mut cfg = EngineConfig::default();
    cfg.max_attempts = 1;
    let err = generate_round(req(RoundKind::Arithmetic, Tier::Basic, 1), &cfg).unwrap_err();
    assert!(matches!(err, QuizError::Config(_)), "{err:?}");
}

#[test]
fn round_serializes_to_json() {
    let r = round(RoundKind::Mixed, Tier::Advanced, 8);
    let text = serde_json::to_string(&r).unwrap();
    let back: QuizRound = serde_json::from_str(&text).unwrap();
    assert_eq!(back.round_id, r.round_id);
    assert_eq!(back.problem, r.problem);
}

// ── properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_arithmetic_invariants(seed in any::<u64>(), advanced in any::<bool>()) {
        let tier = if advanced { Tier::Advanced } else { Tier::Basic };
        let r = round(RoundKind::Arithmetic, tier, seed);
        let Problem::Arithmetic(p) = &r.problem else { unreachable!() };
        prop_assert!(check_arithmetic(p).is_ok(), "{:?}", check_arithmetic(p));
        prop_assert!(check_choices(&r).is_ok(), "{:?}", check_choices(&r));
    }

    #[test]
    fn prop_sequence_invariants(seed in any::<u64>(), advanced in any::<bool>()) {
        let tier = if advanced { Tier::Advanced } else { Tier::Basic };
        let r = round(RoundKind::Sequence, tier, seed);
        let Problem::Sequence(p) = &r.problem else { unreachable!() };
        prop_assert!(check_sequence(p).is_ok(), "{:?}", check_sequence(p));
        prop_assert!(check_choices(&r).is_ok(), "{:?}", check_choices(&r));
    }

    #[test]
    fn prop_choices_for_any_answer(answer in 0u32..=200, seed in any::<u64>()) {
        let cfg = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let c = generate_choices(&mut rng, answer, Tier::Advanced, &cfg).unwrap();
        prop_assert_eq!(c.len(), CHOICE_COUNT);
        prop_assert!(c.contains(&answer));
        prop_assert_eq!(c.iter().collect::<HashSet<_>>().len(), CHOICE_COUNT);
        prop_assert!(c.iter().all(|v| v.abs_diff(answer) <= 10));
    }

    #[test]
    fn prop_seed_determinism(seed in any::<u64>()) {
        prop_assert_eq!(
            round(RoundKind::Mixed, Tier::Advanced, seed),
            round(RoundKind::Mixed, Tier::Advanced, seed)
        );
    }
}
