//! Error types for the quiz engine.

use thiserror::Error;

/// Every way a generator call can fail.
///
/// None of these are meant for the learner. A `ContractViolation` means the
/// caller asked for a combination the engine never produces; the other two
/// surface configuration mistakes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// Unsupported operation / tier / slot format combination, or terms that
    /// break a problem invariant.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Rejection sampling ran out of attempts before the choice set was full.
    #[error("Could not find enough distractors for answer {answer} after {attempts} attempts")]
    DistractorExhaustion { answer: String, attempts: u32 },

    /// Configuration failed to parse or validate.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuizError {
    pub(crate) fn contract(msg: impl Into<String>) -> Self {
        Self::ContractViolation(msg.into())
    }

    /// True for errors caused by the caller rather than by configuration.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation(_))
    }
}

pub type QuizResult<T> = Result<T, QuizError>;
