//! CLI struct definitions for the floe command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(
    name = "floe",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floe is the deterministic reasoning core that turns user intent and raw model output into validated, ordered, dependency-checked work items for agent orchestration."
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Classify a query plus optional upstream output into a routing decision
    Route(RouteCli),
    /// Route, then evaluate the guardrail policy against it
    Decide(DecideCli),
    /// Normalize raw actions into an ordered plan
    Plan(PlanCli),
    /// Run the full pipeline and emit the orchestrator handoff envelope
    Pipeline(PipelineCli),
    /// Inspect the agent catalog
    Agents(AgentsCli),
    /// Inspect the embedded directive bank
    Prompts(PromptsCli),
    /// List cognitive lifecycle states and their permissions
    Lifecycle,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RouteCli {
    /// User query
    pub query: String,
    /// Upstream model output as a JSON object
    #[clap(long)]
    pub upstream: Option<String>,
    /// Explicit mode hint: 'plan', 'analyze', or 'validate'
    #[clap(long)]
    pub mode: Option<String>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct DecideCli {
    /// User query
    pub query: String,
    /// Upstream model output as a JSON object
    #[clap(long)]
    pub upstream: Option<String>,
    /// Explicit mode hint: 'plan', 'analyze', or 'validate'
    #[clap(long)]
    pub mode: Option<String>,
    /// Current lifecycle state: boot, idle, active, executing, closing, error
    #[clap(long)]
    pub lifecycle: Option<String>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct PlanCli {
    /// Planning goal
    pub goal: String,
    /// Raw actions as a JSON list
    #[clap(long)]
    pub actions: Option<String>,
}

#[derive(clap::Args, Debug)]
pub(crate) struct PipelineCli {
    /// User query
    pub query: String,
    /// Upstream model output as a JSON object
    #[clap(long)]
    pub upstream: Option<String>,
    /// Explicit mode hint: 'plan', 'analyze', or 'validate'
    #[clap(long)]
    pub mode: Option<String>,
    /// Current lifecycle state: boot, idle, active, executing, closing, error
    #[clap(long)]
    pub lifecycle: Option<String>,
    /// Output format: 'json' or 'text'.
    #[clap(long, default_value = "json")]
    pub format: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct AgentsCli {
    #[clap(subcommand)]
    pub command: AgentsCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum AgentsCommand {
    /// List declared agents
    List {
        /// Filter by functional domain
        #[clap(long)]
        domain: Option<String>,
    },
    /// Show one agent profile
    Show { name: String },
    /// Score agents against a free-text prompt
    Suggest { prompt: String },
}

#[derive(clap::Args, Debug)]
pub(crate) struct PromptsCli {
    #[clap(subcommand)]
    pub command: PromptsCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum PromptsCommand {
    /// List embedded directive documents
    List,
    /// Print one directive document
    Show { path: String },
}
