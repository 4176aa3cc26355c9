//! # quiz_drill_gen
//!
//! A deterministic, offline problem generator for an early-years arithmetic
//! and sequence quiz.
//!
//! The engine produces three things for a presentation layer to render:
//! arithmetic problems (`+`, `-`, `×`) with one hidden term, number or letter
//! sequences with one masked element, and a shuffled set of three choices
//! holding the correct answer and two plausible distractors.
//!
//! ## How it works
//!
//! 1. Build a [`QuizRequest`] with a round kind, a [`Tier`], and an optional
//!    RNG seed.
//! 2. Call [`generate_round`]: the engine picks an operation and slot format
//!    (or a sequence shape), draws terms from the tier's ranges, samples
//!    distractors around the answer, and shuffles the choices.
//! 3. Show the returned [`QuizRound`], then feed the learner's pick to a
//!    [`Scoreboard`] (or [`QuizRound::is_correct`]).
//!
//! Every generator also exists as a plain function taking `&mut impl Rng`, so
//! callers that manage their own RNG can use them directly.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_drill_gen::{
//!     generate_round, EngineConfig, QuizRequest, RoundKind, Scoreboard, Tier,
//! };
//!
//! let cfg = EngineConfig::default();
//! let round = generate_round(
//!     QuizRequest::new(RoundKind::Mixed).with_tier(Tier::Advanced).with_seed(42),
//!     &cfg,
//! )
//! .unwrap();
//!
//! println!("{}", round.problem.prompt());
//! for choice in &round.choices {
//!     println!("  [{choice}]");
//! }
//!
//! let mut board = Scoreboard::new();
//! let outcome = board.record(&round, &round.choices[0]);
//! println!("correct: {}  score: {}", outcome.is_correct, board.score);
//! ```

pub mod client_adapter;
pub mod quiz_engine;

pub use client_adapter::{to_client_round, to_feedback};
pub use quiz_engine::{
    build_problem, calculate_points, generate_choices, generate_problem, generate_round,
    generate_round_with, generate_sequence_choices, generate_sequence_problem, Answer,
    AnswerOutcome, ArithmeticProblem, Direction, EngineConfig, Operation, Problem, QuizError,
    QuizRequest, QuizResult, QuizRound, RoundKind, Scoreboard, SequenceKind, SequenceProblem,
    SequenceSettings, SlotFormat, Tier, TierSettings, CHOICE_COUNT, PLACEHOLDER,
};

#[cfg(test)]
mod tests;
