//! Arithmetic problem generation.
//!
//! Operand ranges per tier:
//!
//! | Tier     | Operation | First operand | Second operand    |
//! |----------|-----------|---------------|-------------------|
//! | Basic    | `+`       | 1..=5         | 1..=5             |
//! | Basic    | `-`       | 2..=9         | 1..=first-1       |
//! | Advanced | `+`       | 1..=50        | 1..=100-first     |
//! | Advanced | `-`       | 1..=100       | 1..=first         |
//! | Advanced | `×`       | 1..=10        | 1..=10            |

use rand::Rng;
use tracing::{debug, warn};

use crate::quiz_engine::{
    config::EngineConfig,
    error::{QuizError, QuizResult},
    models::{ArithmeticProblem, Operation, SlotFormat, Tier},
    shuffle::{chance, retry_bounded},
};

/// Largest operand allowed in a multiplication, whatever the tier.
pub const MAX_FACTOR: u32 = 10;

fn pick_operation<R: Rng>(rng: &mut R, tier: Tier, cfg: &EngineConfig) -> Operation {
    if chance(rng, cfg.tier(tier).multiply_probability) {
        return Operation::Multiply;
    }
    if rng.gen_bool(0.5) { Operation::Add } else { Operation::Subtract }
}

fn pick_slot_format<R: Rng>(
    rng: &mut R,
    operation: Operation,
    cfg: &EngineConfig,
) -> QuizResult<SlotFormat> {
    match operation {
        Operation::Multiply => Ok(SlotFormat::MissingResult),
        Operation::Add => Ok(SlotFormat::ALL[rng.gen_range(0..SlotFormat::ALL.len())]),
        Operation::Subtract => {
            // A missing first operand is re-rolled, never shown.
            let rolled = retry_bounded(cfg.max_attempts, || {
                let slot = SlotFormat::ALL[rng.gen_range(0..SlotFormat::ALL.len())];
                (slot != SlotFormat::MissingOperandA).then_some(slot)
            });
            match rolled {
                Some((slot, _)) => Ok(slot),
                None => {
                    warn!(attempts = cfg.max_attempts, "Slot format re-roll exhausted");
                    Err(QuizError::contract(
                        "no slot format available for subtraction",
                    ))
                }
            }
        }
    }
}

fn draw_operands<R: Rng>(
    rng: &mut R,
    tier: Tier,
    operation: Operation,
) -> QuizResult<(u32, u32)> {
    let operands = match (tier, operation) {
        (Tier::Basic, Operation::Add) => (rng.gen_range(1..=5), rng.gen_range(1..=5)),
        (Tier::Basic, Operation::Subtract) => {
            let a: u32 = rng.gen_range(2..=9);
            (a, rng.gen_range(1..a))
        }
        (Tier::Advanced, Operation::Add) => {
            let a: u32 = rng.gen_range(1..=50);
            (a, rng.gen_range(1..=100 - a))
        }
        (Tier::Advanced, Operation::Subtract) => {
            let a: u32 = rng.gen_range(1..=100);
            (a, rng.gen_range(1..=a))
        }
        (Tier::Advanced, Operation::Multiply) => {
            (rng.gen_range(1..=MAX_FACTOR), rng.gen_range(1..=MAX_FACTOR))
        }
        (Tier::Basic, Operation::Multiply) => {
            return Err(QuizError::contract("multiplication is not offered in the Basic tier"));
        }
    };
    Ok(operands)
}

/// Build a problem from explicit terms, checking every invariant a generated
/// problem must satisfy.
pub fn build_problem(
    tier: Tier,
    operation: Operation,
    operand_a: u32,
    operand_b: u32,
    slot_format: SlotFormat,
) -> QuizResult<ArithmeticProblem> {
    let result = match operation {
        Operation::Add => operand_a
            .checked_add(operand_b)
            .ok_or_else(|| QuizError::contract(format!("{operand_a} + {operand_b} overflows")))?,
        Operation::Subtract => {
            if slot_format == SlotFormat::MissingOperandA {
                return Err(QuizError::contract(
                    "a missing first operand is not allowed in subtraction",
                ));
            }
            operand_a.checked_sub(operand_b).ok_or_else(|| {
                QuizError::contract(format!("{operand_a} - {operand_b} would be negative"))
            })?
        }
        Operation::Multiply => {
            if tier != Tier::Advanced {
                return Err(QuizError::contract(format!(
                    "multiplication is not offered in the {tier} tier"
                )));
            }
            if slot_format != SlotFormat::MissingResult {
                return Err(QuizError::contract(format!(
                    "multiplication only supports a missing result, got {slot_format}"
                )));
            }
            if operand_a > MAX_FACTOR || operand_b > MAX_FACTOR {
                return Err(QuizError::contract(format!(
                    "multiplication operands must be at most {MAX_FACTOR}"
                )));
            }
            operand_a * operand_b
        }
    };

    let expected_answer = match slot_format {
        SlotFormat::MissingResult   => result,
        SlotFormat::MissingOperandB => operand_b,
        SlotFormat::MissingOperandA => operand_a,
    };

    Ok(ArithmeticProblem {
        operand_a,
        operand_b,
        operation,
        slot_format,
        result,
        expected_answer,
    })
}

/// Generate a random arithmetic problem for `tier`.
pub fn generate_problem<R: Rng>(
    rng: &mut R,
    tier: Tier,
    cfg: &EngineConfig,
) -> QuizResult<ArithmeticProblem> {
    let operation = pick_operation(rng, tier, cfg);
    let slot_format = pick_slot_format(rng, operation, cfg)?;
    let (a, b) = draw_operands(rng, tier, operation)?;
    let problem = build_problem(tier, operation, a, b, slot_format)?;

    debug!(
        %tier,
        operation = %problem.operation,
        slot = %problem.slot_format,
        answer = problem.expected_answer,
        "Generated arithmetic problem"
    );
    Ok(problem)
}
