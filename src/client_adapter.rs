use serde_json::{json, Value};
use crate::quiz_engine::{
    models::{Answer, Problem, QuizRound, SequenceKind, SlotFormat},
    scoring::{AnswerOutcome, Scoreboard},
};

const CORRECT_MESSAGE: &str = "Correct! 🌟";
const RETRY_MESSAGE: &str = "Try again! 💪";

/// Delay the client waits before requesting the next round.
pub const NEXT_ROUND_DELAY_MS: u64 = 1500;

/// Client-side format tag for a problem.
fn format_tag(problem: &Problem) -> &'static str {
    match problem {
        Problem::Arithmetic(p) => match p.slot_format {
            SlotFormat::MissingResult   => "missingEnd",
            SlotFormat::MissingOperandB => "missingMiddle",
            SlotFormat::MissingOperandA => "missingStart",
        },
        Problem::Sequence(p) => match p.kind {
            SequenceKind::Numeric    => "numberSequence",
            SequenceKind::Alphabetic => "alphabetSequence",
        },
    }
}

fn choice_value(a: &Answer) -> Value {
    match a {
        Answer::Number(n) => json!(n),
        Answer::Text(s)   => json!(s),
    }
}

/// Map a `QuizRound` to the JSON the game client renders.
///
/// The expected answer is not included; the client posts the chosen
/// value back and receives [`to_feedback`] in return.
pub fn to_client_round(round: &QuizRound) -> Value {
    let choices: Vec<Value> = round
        .choices
        .iter()
        .enumerate()
        .map(|(slot, a)| json!({ "slot": slot, "label": a.to_string(), "value": choice_value(a) }))
        .collect();

    let terms = match &round.problem {
        Problem::Arithmetic(_) => Value::Null,
        Problem::Sequence(p)   => json!(p.elements),
    };

    json!({
        "round_id": round.round_id,
        "tier": round.tier,
        "format": format_tag(&round.problem),
        "prompt": round.problem.prompt(),
        "sequence": terms,
        "choices": choices,
        "points": round.points,
    })
}

/// Feedback shown after an answer, plus the updated totals.
pub fn to_feedback(outcome: &AnswerOutcome, board: &Scoreboard) -> Value {
    let message = if outcome.is_correct { CORRECT_MESSAGE } else { RETRY_MESSAGE };
    json!({
        "is_correct": outcome.is_correct,
        "message": message,
        "points_awarded": outcome.points_awarded,
        "correct_answer": choice_value(&outcome.expected_answer),
        "score": board.score,
        "streak": board.streak,
        "next_round_in_ms": NEXT_ROUND_DELAY_MS,
    })
}
