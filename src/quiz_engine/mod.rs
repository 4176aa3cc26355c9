//! Core quiz engine: problem generation, choice sets, and scoring.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | Shared types: tiers, problems, answers, request/round structs |
//! | `error`      | `QuizError` and the `QuizResult` alias |
//! | `config`     | TOML-loadable tuning (`EngineConfig`) with shipped defaults |
//! | `shuffle`    | Fisher-Yates shuffle and the bounded retry helper |
//! | `arithmetic` | `+`, `-`, `×` problems with a hidden term |
//! | `sequence`   | Number and alphabet runs with one masked element |
//! | `choices`    | Distractor generation for both problem families |
//! | `scoring`    | Points per problem and the session scoreboard |
//! | `generator`  | Single entry point `generate_round()` |

pub mod arithmetic;
pub mod choices;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod scoring;
pub mod sequence;
pub mod shuffle;

pub use arithmetic::{build_problem, generate_problem};
pub use choices::{generate_choices, generate_sequence_choices};
pub use config::{EngineConfig, SequenceSettings, TierSettings};
pub use error::{QuizError, QuizResult};
pub use generator::{generate_round, generate_round_with};
pub use models::{
    Answer, ArithmeticProblem, Direction, Operation, Problem, QuizRequest, QuizRound,
    RoundKind, SequenceKind, SequenceProblem, SlotFormat, Tier, CHOICE_COUNT, PLACEHOLDER,
};
pub use scoring::{calculate_points, AnswerOutcome, Scoreboard};
pub use sequence::generate_sequence_problem;
