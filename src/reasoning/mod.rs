//! The reasoning pipeline: intent routing, the guardrail decision gate,
//! plan normalization, and the task dependency graph.
//!
//! All components are pure and synchronous. Classification uncertainty is
//! expressed through confidence scores and deterministic fallbacks, never
//! errors; graph structural violations are always errors.

pub mod decision;
pub mod planner;
pub mod routing;
pub mod task_graph;

pub use decision::{Decision, DecisionContext, DecisionPolicy, DefaultPolicy};
pub use planner::{PlanStep, build_plan};
pub use routing::{Intent, RoutingDecision, RoutingPayload, route};
pub use task_graph::{GraphSnapshot, TaskGraph, TaskNode};
