//! Drive a calculator session from a sequence of key names.
//!
//! Run with `cargo run --example keypad_session -- 1 6 sqrt + 3 0 Enter`.
//! Function names (`sin`, `sqrt`, `pow2`, `pi`, ...) switch to scientific
//! mode. Set `RUST_LOG=novacalc=debug` to see each step.

use novacalc::core::{Action, Mode, ScientificFn};
use novacalc::effects::Calculator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "novacalc=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let keys: Vec<String> = std::env::args().skip(1).collect();
    let keys = if keys.is_empty() {
        [
            "3", "+", "2", "Enter", "*", "4", "=", "/", "0", "Enter", "Backspace", "pi", "pow2",
        ]
        .iter()
        .map(|k| k.to_string())
        .collect()
    } else {
        keys
    };

    let mut calc = Calculator::new();
    for key in &keys {
        let outcome = match ScientificFn::from_name(key) {
            Some(f) => {
                calc.set_mode(Mode::Scientific);
                Some(calc.dispatch(Action::Scientific(f)))
            }
            None => calc.press_key(key),
        };
        println!(
            "{:>10} | {:>14} | {:<12} | {:?}",
            key,
            calc.display(),
            calc.expression(),
            outcome
        );
    }

    println!("\nHistory (most recent first):");
    for entry in calc.history().entries() {
        let at = entry
            .recorded_at()
            .map(|at| at.format("%H:%M:%S").to_string())
            .unwrap_or_default();
        println!("  [{at}] {} = {}", entry.expression, entry.result);
    }
}
