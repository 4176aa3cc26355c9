//! Plays a short scripted session in both tiers.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=quiz_drill_gen=debug` to see the engine's trace events.
//!
//! Each round is generated from a fixed seed, so the output is reproducible.
//! The "learner" always picks the first choice, which shows both the correct
//! and the incorrect feedback paths.

use quiz_drill_gen::{
    generate_round, to_client_round, to_feedback, EngineConfig, QuizRequest, RoundKind,
    Scoreboard, Tier,
};
use tracing_subscriber::EnvFilter;

fn play(tier: Tier, cfg: &EngineConfig) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Tier: {tier}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut board = Scoreboard::new();
    for seed in 1..=6u64 {
        let request = QuizRequest::new(RoundKind::Mixed).with_tier(tier).with_seed(seed);
        let round = match generate_round(request, cfg) {
            Ok(round) => round,
            Err(e) => {
                eprintln!("  seed {seed}: {e}");
                continue;
            }
        };

        let labels: Vec<String> = round.choices.iter().map(|c| c.to_string()).collect();
        println!("  [{}] {}   ({} pts)", round.round_id, round.problem.prompt(), round.points);
        println!("      choices: {}", labels.join(" | "));

        let pick = round.choices[0].clone();
        let outcome = board.record(&round, &pick);
        let mark = if outcome.is_correct { "✓" } else { "✗" };
        println!("      picked {pick} {mark}  (answer {})", outcome.expected_answer);
    }
    println!(
        "  Final score: {}  correct {}/{}  best streak {}",
        board.score, board.correct, board.answered, board.best_streak
    );
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = EngineConfig::default();
    play(Tier::Basic, &cfg);
    play(Tier::Advanced, &cfg);

    // The payload a browser client would receive for one round.
    let round = generate_round(
        QuizRequest::new(RoundKind::Sequence).with_seed(2024),
        &cfg,
    );
    match round {
        Ok(round) => {
            println!("Client payload:");
            println!("{:#}", to_client_round(&round));
            let mut board = Scoreboard::new();
            let outcome = board.record(&round, &round.expected_answer());
            println!("{:#}", to_feedback(&outcome, &board));
        }
        Err(e) => eprintln!("{e}"),
    }
}
