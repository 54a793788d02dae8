//! Floe: a deterministic reasoning core for agent orchestration.
//!
//! Floe declares a catalog of cognitive agents (static capability profiles)
//! and implements the reasoning pipeline that turns a user query plus
//! optional upstream model output into a validated, ordered set of work
//! items:
//!
//! - **Router** — pure classifier: query + upstream output + optional mode
//!   into an intent with a fixed-tier confidence
//! - **DecisionPolicy** — deterministic guardrail gate that can veto or
//!   downgrade a routing outcome before it reaches planning
//! - **Planner** — normalizer that turns raw action lists into ordered
//!   `PlanStep`s with a deterministic fallback
//! - **TaskGraph** — dependency graph of work items, sealed into an
//!   immutable, acyclicity-checked snapshot for handoff
//!
//! # Core Principles
//!
//! - **Deterministic**: no model calls, no I/O, no clocks in the pipeline;
//!   the same input always produces the same output
//! - **Uncertainty is not an error**: classification ambiguity degrades
//!   through confidence tiers and fallbacks, never through failures
//! - **Structure is strict**: duplicate node ids, dangling edges, and
//!   missing lookups fail immediately
//! - **Declaration over execution**: agent profiles, roles, directives, and
//!   lifecycle descriptors are read-only tables compiled into the binary
//!
//! Execution of the resulting work items belongs to an external
//! orchestrator consuming the sealed [`reasoning::GraphSnapshot`].
//!
//! # Crate Structure
//!
//! - [`reasoning`]: the pipeline (routing, decision, planner, task graph)
//! - [`agents`]: static capability profiles, roles, and directive bank
//! - [`lifecycle`]: cognitive lifecycle states and descriptors
//! - [`core`]: errors, configuration, and the planning session

pub mod agents;
pub mod core;
pub mod lifecycle;

mod cli;
pub mod reasoning;

use std::env;

use clap::Parser;
use colored::Colorize;
use serde_json::{Map, Value, json};

use crate::agents::{catalog, prompts};
use crate::cli::{
    AgentsCommand, Cli, Command, DecideCli, PipelineCli, PlanCli, PromptsCommand, RouteCli,
};
use crate::core::config::{self, FloeConfig};
use crate::core::error::FloeError;
use crate::core::session::{PlanningSession, SessionOutcome};
use crate::lifecycle::LifecycleState;
use crate::reasoning::decision::{DecisionContext, DecisionPolicy, DefaultPolicy};
use crate::reasoning::{planner, routing};

/// Parse arguments from the process environment and dispatch.
pub fn run() -> Result<(), FloeError> {
    let cli = Cli::parse();
    let config = load_config()?;

    match cli.command {
        Command::Route(args) => run_route(args),
        Command::Decide(args) => run_decide(&config, args),
        Command::Plan(args) => run_plan(args),
        Command::Pipeline(args) => run_pipeline(&config, args),
        Command::Agents(args) => run_agents(args.command),
        Command::Prompts(args) => run_prompts(args.command),
        Command::Lifecycle => {
            print_json(&json!(lifecycle::registry()));
            Ok(())
        }
    }
}

fn load_config() -> Result<FloeConfig, FloeError> {
    let cwd = env::current_dir().map_err(FloeError::IoError)?;
    config::load(&cwd)
}

fn run_route(args: RouteCli) -> Result<(), FloeError> {
    let upstream = parse_upstream(args.upstream.as_deref())?;
    let decision = routing::route(&args.query, upstream.as_ref(), args.mode.as_deref());
    print_json(&json!(decision));
    Ok(())
}

fn run_decide(config: &FloeConfig, args: DecideCli) -> Result<(), FloeError> {
    let upstream = parse_upstream(args.upstream.as_deref())?;
    let routing = routing::route(&args.query, upstream.as_ref(), args.mode.as_deref());
    let context = DecisionContext {
        lifecycle_state: parse_lifecycle(args.lifecycle.as_deref())?,
    };
    let decision = DefaultPolicy::from_config(&config.policy).decide(&routing, &context);
    print_json(&json!({ "routing": routing, "decision": decision }));
    Ok(())
}

fn run_plan(args: PlanCli) -> Result<(), FloeError> {
    let actions = parse_actions(args.actions.as_deref())?;
    let steps = planner::build_plan(&args.goal, actions.as_deref());
    print_json(&json!(steps));
    Ok(())
}

fn run_pipeline(config: &FloeConfig, args: PipelineCli) -> Result<(), FloeError> {
    let upstream = parse_upstream(args.upstream.as_deref())?;
    let lifecycle_state = parse_lifecycle(args.lifecycle.as_deref())?;
    let session = PlanningSession::new(config, lifecycle_state);
    let outcome = session.run(&args.query, upstream.as_ref(), args.mode.as_deref())?;

    match args.format.as_str() {
        "text" => print_pipeline_summary(&outcome),
        _ => print_json(&json!(outcome)),
    }
    Ok(())
}

fn print_pipeline_summary(outcome: &SessionOutcome) {
    println!("session {}", outcome.session_id.dimmed());
    println!(
        "intent {:?} at {:.2}: {}",
        outcome.routing.intent, outcome.routing.confidence, outcome.routing.reason
    );
    if outcome.decision.proceed {
        println!("{} {}", "✓".bright_green(), outcome.decision.reason);
    } else {
        println!("{} {}", "✗".bright_red(), outcome.decision.reason.bold());
    }
    if let Some(steps) = &outcome.steps {
        println!("{}", step_digest(steps));
    }
    if let Some(graph) = &outcome.graph {
        println!(
            "graph: {} nodes, roots [{}], leaves [{}], dag {}",
            graph.nodes.len(),
            graph.roots.join(", "),
            graph.leaves.join(", "),
            if graph.valid_dag {
                "valid".bright_green()
            } else {
                "INVALID".bright_red()
            }
        );
    }
}

/// One-line plan digest: step count plus the leading titles in order.
/// Titles are flattened and clipped; anything past the first few is
/// summarized as a remainder count.
fn step_digest(steps: &[planner::PlanStep]) -> String {
    const SHOWN: usize = 5;
    const TITLE_CHARS: usize = 40;

    let titles: Vec<String> = steps
        .iter()
        .take(SHOWN)
        .map(|step| {
            let flat = step.title.split_whitespace().collect::<Vec<_>>().join(" ");
            let mut chars = flat.chars();
            let head: String = chars.by_ref().take(TITLE_CHARS).collect();
            if chars.next().is_some() {
                format!("{head}…")
            } else {
                head
            }
        })
        .collect();

    let hidden = steps.len().saturating_sub(SHOWN);
    let noun = if steps.len() == 1 { "step" } else { "steps" };
    if hidden > 0 {
        format!(
            "{} {noun}: {} … and {hidden} more",
            steps.len(),
            titles.join(" -> ")
        )
    } else {
        format!("{} {noun}: {}", steps.len(), titles.join(" -> "))
    }
}

fn run_agents(command: AgentsCommand) -> Result<(), FloeError> {
    match command {
        AgentsCommand::List { domain } => {
            let agents: Vec<&agents::AgentSpec> = match domain.as_deref() {
                Some(domain) => catalog::by_domain(domain),
                None => catalog::catalog().to_vec(),
            };
            let listing: Vec<Value> = agents.iter().map(|s| s.to_introspection()).collect();
            print_json(&json!(listing));
        }
        AgentsCommand::Show { name } => {
            let spec = catalog::find_agent(&name)?;
            print_json(&spec.to_introspection());
        }
        AgentsCommand::Suggest { prompt } => {
            print_json(&json!(catalog::suggest_agents(&prompt)));
        }
    }
    Ok(())
}

fn run_prompts(command: PromptsCommand) -> Result<(), FloeError> {
    match command {
        PromptsCommand::List => {
            print_json(&json!({
                "version": prompts::PROMPT_VERSION,
                "documents": prompts::list_prompts(),
            }));
        }
        PromptsCommand::Show { path } => {
            let text = prompts::get_prompt(&path).ok_or_else(|| {
                FloeError::ValidationError(format!("unknown prompt document '{path}'"))
            })?;
            println!("{text}");
        }
    }
    Ok(())
}

fn parse_upstream(raw: Option<&str>) -> Result<Option<Map<String, Value>>, FloeError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| FloeError::ValidationError(format!("invalid upstream JSON: {e}")))?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(FloeError::ValidationError(
            "upstream output must be a JSON object".to_string(),
        )),
    }
}

fn parse_actions(raw: Option<&str>) -> Result<Option<Vec<Value>>, FloeError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| FloeError::ValidationError(format!("invalid actions JSON: {e}")))?;
    match value {
        Value::Array(items) => Ok(Some(items)),
        _ => Err(FloeError::ValidationError(
            "actions must be a JSON list".to_string(),
        )),
    }
}

fn parse_lifecycle(raw: Option<&str>) -> Result<Option<LifecycleState>, FloeError> {
    raw.map(str::parse).transpose()
}

fn print_json(value: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("JSON values always serialize")
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn step_digest_lists_titles_in_order() {
        let steps = planner::build_plan("g", Some(&[json!("first"), json!("second")]));
        assert_eq!(step_digest(&steps), "2 steps: Step 1 -> Step 2");
    }

    #[test]
    fn step_digest_flattens_and_clips_long_titles() {
        let title = format!("multi\nline {}", "x".repeat(60));
        let steps = planner::build_plan("g", Some(&[json!({ "title": title })]));
        let digest = step_digest(&steps);
        assert!(digest.starts_with("1 step: multi line x"));
        assert!(digest.ends_with('…'));
        assert!(!digest.contains('\n'));
    }

    #[test]
    fn step_digest_counts_the_hidden_remainder() {
        let actions: Vec<Value> = (0..8).map(|i| json!(format!("task {i}"))).collect();
        let steps = planner::build_plan("g", Some(&actions));
        let digest = step_digest(&steps);
        assert!(digest.starts_with("8 steps:"));
        assert!(digest.ends_with("… and 3 more"));
    }

    #[test]
    fn upstream_must_be_a_json_object() {
        assert!(parse_upstream(Some("[1, 2]")).is_err());
        assert!(parse_upstream(Some("not json")).is_err());
        assert!(parse_upstream(Some("{\"answer\": 1}")).unwrap().is_some());
        assert!(parse_upstream(None).unwrap().is_none());
    }
}
