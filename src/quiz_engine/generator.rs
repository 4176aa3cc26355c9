use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    arithmetic::generate_problem,
    choices::{generate_choices, generate_sequence_choices},
    config::EngineConfig,
    error::QuizResult,
    models::{Answer, Problem, QuizRequest, QuizRound, RoundKind, Tier},
    scoring::calculate_points,
    sequence::generate_sequence_problem,
};

/// Round ID from a problem-family prefix and the RNG, e.g. `AR-1F3A09C2`.
fn make_round_id(problem: &Problem, rng: &mut impl RngCore) -> String {
    let prefix = match problem {
        Problem::Arithmetic(_) => "AR",
        Problem::Sequence(_)   => "SQ",
    };
    format!("{}-{:08X}", prefix, rng.next_u32())
}

/// Problem family a round is actually built from once `Mixed` is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Family {
    Arithmetic,
    Sequence,
}

fn resolve_kind<R: Rng>(rng: &mut R, kind: RoundKind) -> Family {
    match kind {
        RoundKind::Arithmetic => Family::Arithmetic,
        RoundKind::Sequence   => Family::Sequence,
        RoundKind::Mixed => {
            if rng.gen_bool(0.5) { Family::Arithmetic } else { Family::Sequence }
        }
    }
}

/// Build a full round (problem, shuffled choices, points) from an explicit RNG.
///
/// `cfg` is validated first, so a hand-built config with out-of-range values
/// fails with [`QuizError::Config`](crate::quiz_engine::error::QuizError::Config).
pub fn generate_round_with<R: Rng>(
    rng: &mut R,
    kind: RoundKind,
    tier: Tier,
    cfg: &EngineConfig,
) -> QuizResult<QuizRound> {
    cfg.validate()?;
    let (problem, choices) = match resolve_kind(rng, kind) {
        Family::Sequence => {
            let p = generate_sequence_problem(rng, tier, cfg);
            let choices = generate_sequence_choices(rng, &p.expected_answer, p.kind, cfg)?;
            (Problem::Sequence(p), choices.into_iter().map(Answer::Text).collect::<Vec<_>>())
        }
        Family::Arithmetic => {
            let p = generate_problem(rng, tier, cfg)?;
            let choices = generate_choices(rng, p.expected_answer, tier, cfg)?;
            (Problem::Arithmetic(p), choices.into_iter().map(Answer::Number).collect())
        }
    };

    let round_id = make_round_id(&problem, rng);
    let points = calculate_points(&problem, tier);
    debug!(%round_id, %tier, points, prompt = %problem.prompt(), "Generated round");

    Ok(QuizRound { round_id, tier, problem, choices, points })
}

/// Entry point: seeds the RNG from the request and builds one round.
///
/// The same `rng_seed` always yields the same round.
pub fn generate_round(request: QuizRequest, cfg: &EngineConfig) -> QuizResult<QuizRound> {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    generate_round_with(&mut rng, request.kind, request.tier, cfg)
}
