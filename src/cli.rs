//! CLI interface for entrain

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

use crate::config::RunConfig;
use crate::engine::FeedbackEngine;
use crate::guard;

#[derive(Parser)]
#[command(name = "entrain")]
#[command(about = "Feedback-tuned guard mode selection", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a JSON run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit per-token diagnostics while seeding and scoring
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one select-and-reinforce round over the configured vocabulary
    Run,
    /// Screen a candidate reply with the drift detectors and pick a guard mode
    Guard {
        /// Candidate output text to screen
        #[arg(short, long)]
        text: String,
        /// The user asked for a bulleted answer
        #[arg(long)]
        wants_bullets: bool,
        /// Skip detection entirely and allow the reply
        #[arg(long)]
        bypass: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => {
            warn!("no config path given; using built-in defaults");
            RunConfig::default()
        }
    };

    let mut engine = FeedbackEngine::new(
        config.modes.clone(),
        config.tokens.clone(),
        config.engine_params(cli.verbose),
    )?;
    // Diagnostics are already logged by the engine in verbose mode.
    let _ = engine.seed(config.beta_seeds.iter().map(|(k, v)| (k.as_str(), *v)));

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_round(&mut engine, &config),
        Commands::Guard {
            text,
            wants_bullets,
            bypass,
        } => run_guard(&mut engine, &config, &text, wants_bullets, bypass),
    }
}

/// One tuning round: select over uniform active weights, reinforce with
/// the configured reward, print the resulting table.
fn run_round(engine: &mut FeedbackEngine, config: &RunConfig) -> Result<()> {
    let active = uniform_weights(&config.tokens);

    let chosen = engine.select(&active);
    println!("chosen mode: {chosen}");

    let _ = engine.apply(&chosen, &active, config.params.reward);
    print_snapshot(engine);
    Ok(())
}

/// Screen a candidate reply and pick the guard mode its drift profile
/// calls for.
fn run_guard(
    engine: &mut FeedbackEngine,
    config: &RunConfig,
    text: &str,
    wants_bullets: bool,
    bypass: bool,
) -> Result<()> {
    let report = guard::evaluate(text, wants_bullets, bypass);

    let mut scores: Vec<(&String, &f64)> = report.token_weights.iter().collect();
    scores.sort_by(|a, b| a.0.cmp(b.0));
    for (token, score) in scores {
        println!("{token}: {score:.2}");
    }
    println!("verdict: {} ({})", report.verdict, report.reason);

    let chosen = engine.select(&report.token_weights);
    println!("guard mode: {chosen}");

    let _ = engine.apply(&chosen, &report.token_weights, config.params.reward);
    print_snapshot(engine);
    Ok(())
}

fn uniform_weights(tokens: &[String]) -> HashMap<String, f64> {
    if tokens.is_empty() {
        return HashMap::new();
    }
    let weight = 1.0 / tokens.len() as f64;
    tokens.iter().cloned().map(|t| (t, weight)).collect()
}

fn print_snapshot(engine: &FeedbackEngine) {
    println!("beta snapshot (mode|token: weight):");
    let mut lines: Vec<String> = engine
        .snapshot()
        .into_iter()
        .flat_map(|(mode, row)| {
            row.into_iter()
                .map(move |(token, weight)| format!("  {mode}|{token}: {weight:.3}"))
        })
        .collect();
    lines.sort();
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_weights_normalize_to_one() {
        let tokens = vec!["a".to_string(), "b".to_string(), "c".to_string(), "d".to_string()];
        let weights = uniform_weights(&tokens);
        assert_eq!(weights.len(), 4);
        let total: f64 = weights.values().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_weights_of_nothing_is_empty() {
        assert!(uniform_weights(&[]).is_empty());
    }
}
