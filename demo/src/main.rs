//! vigil — chat-threat triage demo CLI
//!
//! Runs the full decision pipeline (classify → score → resolve → escalate
//! → audit) with a deterministic keyword classifier, so every scenario is
//! reproducible offline.
//!
//! Usage:
//!   cargo run -p demo -- analyze "verify your account at http://evil.test"
//!   cargo run -p demo -- repeat-offender
//!   cargo run -p demo -- phishing-campaign
//!   cargo run -p demo -- benign-flood
//!   cargo run -p demo -- run-all

mod classifier;
mod signals;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vigil_audit::{FileAuditTrail, InMemoryAuditTrail};
use vigil_contracts::{decision::Decision, error::VigilResult};
use vigil_core::{traits::EventStore, EscalationEngine, Orchestrator};
use vigil_policy::WeightedRiskPolicy;

use crate::classifier::KeywordClassifier;
use crate::signals::{extract_signals, extract_urls};

// ── CLI definition ────────────────────────────────────────────────────────────

/// vigil — deterministic chat-threat triage demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "vigil chat-threat triage demo",
    long_about = "Runs the vigil decision pipeline end to end: keyword classification,\n\
                  weighted risk scoring, threshold resolution, sliding-window escalation,\n\
                  and best-effort audit logging."
)]
struct Cli {
    /// Audit trail location used by `analyze`.
    #[arg(long, default_value = "logs/audit.log")]
    log_path: PathBuf,

    /// Optional TOML file overriding severity weights and thresholds.
    #[arg(long)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze one message against the persistent trail.
    Analyze {
        /// The chat message to analyze.
        message: String,
    },
    /// Scenario: a flagged scam payload repeats until it is blocked.
    RepeatOffender,
    /// Scenario: a low-confidence phishing payload is blocked by volume alone.
    PhishingCampaign,
    /// Scenario: a repeated benign message is never escalated.
    BenignFlood,
    /// Run all three scenarios in sequence.
    RunAll,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Structured logging; set RUST_LOG=debug to watch every pipeline stage.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::Analyze { ref message } => run_analyze(&cli, message),
        Command::RepeatOffender => run_repeat_offender(&cli),
        Command::PhishingCampaign => run_phishing_campaign(&cli),
        Command::BenignFlood => run_benign_flood(&cli),
        Command::RunAll => {
            run_repeat_offender(&cli)
                .and_then(|_| run_phishing_campaign(&cli))
                .and_then(|_| run_benign_flood(&cli))
        }
    };

    match result {
        Ok(()) => println!("Done."),
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn build_policy(cli: &Cli) -> VigilResult<WeightedRiskPolicy> {
    match &cli.policy {
        Some(path) => WeightedRiskPolicy::from_file(path),
        None => Ok(WeightedRiskPolicy::default()),
    }
}

fn build_orchestrator(cli: &Cli, store: Arc<dyn EventStore>) -> VigilResult<Orchestrator> {
    Ok(Orchestrator::new(
        Box::new(KeywordClassifier),
        Box::new(build_policy(cli)?),
        store,
        EscalationEngine::default(),
    ))
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn run_analyze(cli: &Cli, message: &str) -> VigilResult<()> {
    let store = Arc::new(FileAuditTrail::new(cli.log_path.clone()));
    let orchestrator = build_orchestrator(cli, store)?;

    let decision = orchestrator.decide(message, &extract_signals(message))?;
    print_decision(&decision);

    let urls = extract_urls(message);
    if !urls.is_empty() {
        println!("  urls:       {}", urls.join(", "));
    }
    println!("  trail:      {}", cli.log_path.display());
    Ok(())
}

fn run_repeat_offender(cli: &Cli) -> VigilResult<()> {
    println!("── repeat offender ──────────────────────────────────────────");
    println!("The same scam payload arrives four times inside the window.");
    println!("The policy flags it; the third occurrence upgrades to block.");
    println!();

    let orchestrator = build_orchestrator(cli, Arc::new(InMemoryAuditTrail::new()))?;
    let message = "congratulations, you won the lottery! pay the processing fee today";

    for round in 1..=4 {
        let decision = orchestrator.decide(message, &extract_signals(message))?;
        print_round(round, &decision);
    }
    println!();
    Ok(())
}

fn run_phishing_campaign(cli: &Cli) -> VigilResult<()> {
    println!("── phishing campaign ────────────────────────────────────────");
    println!("A weak credential hint scores below every threshold, so each");
    println!("message is allowed on its own. Volume alone blocks it at the");
    println!("fifth occurrence.");
    println!();

    let orchestrator = build_orchestrator(cli, Arc::new(InMemoryAuditTrail::new()))?;
    let message = "please verify when you get a chance";

    for round in 1..=5 {
        let decision = orchestrator.decide(message, &extract_signals(message))?;
        print_round(round, &decision);
    }
    println!();
    Ok(())
}

fn run_benign_flood(cli: &Cli) -> VigilResult<()> {
    println!("── benign flood ─────────────────────────────────────────────");
    println!("A harmless message repeats six times. The count climbs, the");
    println!("action never moves.");
    println!();

    let orchestrator = build_orchestrator(cli, Arc::new(InMemoryAuditTrail::new()))?;
    let message = "lunch at noon tomorrow?";

    for round in 1..=6 {
        let decision = orchestrator.decide(message, &extract_signals(message))?;
        print_round(round, &decision);
    }
    println!();
    Ok(())
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_round(round: u32, decision: &Decision) {
    println!(
        "  [{}] threat={} score={} base={} final={} occurrences={}",
        round,
        decision.threat_type,
        decision.risk_score,
        decision.base_action,
        decision.final_action,
        decision.occurrence_count
    );
}

fn print_decision(decision: &Decision) {
    println!("  request:    {}", decision.request_id);
    println!(
        "  threat:     {} (confidence {:.2}, {})",
        decision.threat_type, decision.confidence, decision.reason
    );
    println!("  risk score: {}", decision.risk_score);
    println!(
        "  action:     {} (base {}, occurrences {})",
        decision.final_action, decision.base_action, decision.occurrence_count
    );
    match serde_json::to_string_pretty(&decision.trace) {
        Ok(trace) => println!("  trace: {}", trace),
        Err(_) => println!("  trace: <unserializable>"),
    }
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("vigil — chat-threat triage");
    println!("==========================");
    println!();
    println!("Decision pipeline per message:");
    println!("  [1] classify (category, confidence) — failures fall back to benign");
    println!("  [2] weighted risk score in [0, 100]");
    println!("  [3] thresholds resolve the base action: allow / flag / block");
    println!("  [4] sliding-window escalation over the audit trail");
    println!("  [5] best-effort audit append — never blocks the decision");
    println!();
}
