use std::fmt;
use serde::{Deserialize, Serialize};

/// Marker shown in place of the hidden term.
pub const PLACEHOLDER: &str = "?";

/// Every choice set holds the correct answer plus two distractors.
pub const CHOICE_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Difficulty profile. `Basic` targets five-year-olds, `Advanced` eight-year-olds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Basic,
    Advanced,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Basic    => write!(f, "Basic"),
            Tier::Advanced => write!(f, "Advanced"),
        }
    }
}

// ---------------------------------------------------------------------------
// Arithmetic problems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add      => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Which term of the equation is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotFormat {
    MissingResult,
    MissingOperandB,
    MissingOperandA,
}

impl SlotFormat {
    pub const ALL: [SlotFormat; 3] = [
        SlotFormat::MissingResult,
        SlotFormat::MissingOperandB,
        SlotFormat::MissingOperandA,
    ];

    /// Anything other than the plain `a op b = ?` layout.
    pub fn is_missing_operand(self) -> bool {
        !matches!(self, SlotFormat::MissingResult)
    }
}

impl fmt::Display for SlotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotFormat::MissingResult   => write!(f, "missing result"),
            SlotFormat::MissingOperandB => write!(f, "missing second operand"),
            SlotFormat::MissingOperandA => write!(f, "missing first operand"),
        }
    }
}

/// `operand_a <operation> operand_b = result` with one term hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArithmeticProblem {
    pub operand_a: u32,
    pub operand_b: u32,
    pub operation: Operation,
    pub slot_format: SlotFormat,
    pub result: u32,
    pub expected_answer: u32,
}

impl fmt::Display for ArithmeticProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.operand_a.to_string();
        let b = self.operand_b.to_string();
        let r = self.result.to_string();
        let (a, b, r) = match self.slot_format {
            SlotFormat::MissingResult   => (a.as_str(), b.as_str(), PLACEHOLDER),
            SlotFormat::MissingOperandB => (a.as_str(), PLACEHOLDER, r.as_str()),
            SlotFormat::MissingOperandA => (PLACEHOLDER, b.as_str(), r.as_str()),
        };
        write!(f, "{a} {} {b} = {r}", self.operation)
    }
}

// ---------------------------------------------------------------------------
// Sequence problems
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceKind {
    Numeric,
    Alphabetic,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Numeric    => write!(f, "number sequence"),
            SequenceKind::Alphabetic => write!(f, "alphabet sequence"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A run of 4–6 numbers or letters with one element replaced by [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceProblem {
    pub elements: Vec<String>,
    pub direction: Direction,
    pub kind: SequenceKind,
    /// Distance between neighbours (always 1 for letters).
    pub step: u32,
    pub masked_index: usize,
    pub expected_answer: String,
}

impl SequenceProblem {
    /// The sequence with the hidden element put back.
    pub fn revealed(&self) -> Vec<String> {
        let mut full = self.elements.clone();
        if let Some(slot) = full.get_mut(self.masked_index) {
            *slot = self.expected_answer.clone();
        }
        full
    }
}

impl fmt::Display for SequenceProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.elements.join(", "))
    }
}

// ---------------------------------------------------------------------------
// Answers and rounds
// ---------------------------------------------------------------------------

/// One multiple-choice value: a number for arithmetic and numeric sequences,
/// a letter for alphabetic sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Number(u32),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{n}"),
            Answer::Text(s)   => write!(f, "{s}"),
        }
    }
}

impl From<u32> for Answer {
    fn from(n: u32) -> Self {
        Answer::Number(n)
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Problem {
    Arithmetic(ArithmeticProblem),
    Sequence(SequenceProblem),
}

impl Problem {
    pub fn expected_answer(&self) -> Answer {
        match self {
            Problem::Arithmetic(p) => Answer::Number(p.expected_answer),
            Problem::Sequence(p)   => Answer::Text(p.expected_answer.clone()),
        }
    }

    /// Question line shown above the choices.
    pub fn prompt(&self) -> String {
        match self {
            Problem::Arithmetic(p) => format!("{p}"),
            Problem::Sequence(p)   => format!("What is missing? {p}"),
        }
    }
}

/// Which family of problem a round should contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundKind {
    Arithmetic,
    Sequence,
    /// Either of the above, picked uniformly.
    Mixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub kind: RoundKind,
    pub tier: Tier,
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Basic tier, entropy seeding.
    pub fn new(kind: RoundKind) -> Self {
        Self { kind, tier: Tier::Basic, rng_seed: None }
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// Everything the presentation layer needs to show one problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRound {
    pub round_id: String,
    pub tier: Tier,
    pub problem: Problem,
    /// Exactly [`CHOICE_COUNT`] distinct values in display order.
    pub choices: Vec<Answer>,
    /// Awarded for a correct answer.
    pub points: u32,
}

impl QuizRound {
    pub fn expected_answer(&self) -> Answer {
        self.problem.expected_answer()
    }

    pub fn is_correct(&self, choice: &Answer) -> bool {
        *choice == self.expected_answer()
    }
}
