//! Points per problem and a running per-session scoreboard.
//!
//! | Problem                                   | Points |
//! |-------------------------------------------|--------|
//! | Any missing-operand arithmetic            | 3      |
//! | Basic addition                            | 1      |
//! | Basic subtraction                         | 2      |
//! | Advanced, every term at most 10           | 1      |
//! | Advanced, some term above 10              | 2      |
//! | Number sequence                           | 1      |
//! | Alphabet sequence                         | 2      |

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quiz_engine::models::{
    Answer, ArithmeticProblem, Operation, Problem, QuizRound, SequenceKind, Tier,
};

const SMALL_NUMBER_LIMIT: u32 = 10;

fn arithmetic_points(p: &ArithmeticProblem, tier: Tier) -> u32 {
    if p.slot_format.is_missing_operand() {
        return 3;
    }
    match tier {
        Tier::Basic => match p.operation {
            Operation::Subtract => 2,
            _ => 1,
        },
        Tier::Advanced => {
            let largest = p.operand_a.max(p.operand_b).max(p.result);
            if largest <= SMALL_NUMBER_LIMIT { 1 } else { 2 }
        }
    }
}

/// Points awarded for answering `problem` correctly.
pub fn calculate_points(problem: &Problem, tier: Tier) -> u32 {
    match problem {
        Problem::Arithmetic(p) => arithmetic_points(p, tier),
        Problem::Sequence(p) => match p.kind {
            SequenceKind::Numeric    => 1,
            SequenceKind::Alphabetic => 2,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub points_awarded: u32,
    pub expected_answer: Answer,
}

/// Running totals for one play session. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u32,
    pub answered: u32,
    pub correct: u32,
    pub streak: u32,
    pub best_streak: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, round: &QuizRound, choice: &Answer) -> AnswerOutcome {
        let is_correct = round.is_correct(choice);
        let points_awarded = if is_correct { round.points } else { 0 };

        self.answered += 1;
        if is_correct {
            self.correct += 1;
            self.score += points_awarded;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.streak = 0;
        }

        debug!(
            round_id = %round.round_id,
            is_correct,
            points_awarded,
            score = self.score,
            "Recorded answer"
        );

        AnswerOutcome {
            is_correct,
            points_awarded,
            expected_answer: round.expected_answer(),
        }
    }

    /// Share of answered rounds that were correct, in `[0, 1]`.
    pub fn accuracy(&self) -> f64 {
        if self.answered == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.answered)
        }
    }
}
