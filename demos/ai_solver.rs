//! Ask the AI solver for a step-by-step solution.
//!
//! Run with `API_KEY=... cargo run --example ai_solver -- "2x + 3 = 7"`.

use novacalc::config::SolverConfig;
use novacalc::effects::{GeminiBackend, ServiceError, Solver, SolverEnv};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "novacalc=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let problem = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let problem = problem.trim();
    if problem.is_empty() {
        eprintln!("usage: ai_solver <problem>");
        return Ok(());
    }

    let config = SolverConfig::from_env();
    println!("Using model {}", config.model);

    let solver = Solver::new(SolverEnv::new(GeminiBackend::new(config)?));
    let tracked = solver.solve(problem).await;
    if !solver.is_current(tracked.token) {
        return Ok(());
    }

    let solution = tracked.outcome?;
    println!("\nProblem: {}", solution.problem);
    for (i, step) in solution.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    println!("Answer: {}", solution.final_answer);

    Ok(())
}
