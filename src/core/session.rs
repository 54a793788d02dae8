//! One planning session: route, gate, normalize, lift, seal.
//!
//! A session owns exactly one `TaskGraph`. It runs the full reasoning
//! pipeline and hands off a serializable outcome: the routing decision,
//! the guardrail decision, and — when planning was approved — the ordered
//! steps plus the sealed dependency graph. The session is consumed by the
//! handoff; it never retains the graph afterwards.

use serde::Serialize;
use serde_json::{Map, Value};
use ulid::Ulid;

use crate::agents::catalog;
use crate::core::config::FloeConfig;
use crate::core::error::FloeError;
use crate::lifecycle::LifecycleState;
use crate::reasoning::decision::{Decision, DecisionContext, DecisionPolicy, DefaultPolicy};
use crate::reasoning::planner::{self, PlanStep};
use crate::reasoning::routing::{self, Intent, RoutingDecision, RoutingPayload};
use crate::reasoning::task_graph::{GraphSnapshot, TaskGraph, TaskNode};

/// Serializable handoff envelope for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutcome {
    pub session_id: String,
    pub routing: RoutingDecision,
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<PlanStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphSnapshot>,
}

pub struct PlanningSession {
    id: String,
    policy: DefaultPolicy,
    lifecycle_state: Option<LifecycleState>,
}

impl PlanningSession {
    pub fn new(config: &FloeConfig, lifecycle_state: Option<LifecycleState>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            policy: DefaultPolicy::from_config(&config.policy),
            lifecycle_state,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Run the pipeline once and hand off the outcome, consuming the session.
    pub fn run(
        self,
        query: &str,
        upstream: Option<&Map<String, Value>>,
        mode: Option<&str>,
    ) -> Result<SessionOutcome, FloeError> {
        let routing = routing::route(query, upstream, mode);
        let decision = self.policy.decide(
            &routing,
            &DecisionContext {
                lifecycle_state: self.lifecycle_state,
            },
        );

        let mut steps = None;
        let mut graph = None;
        if decision.proceed
            && routing.intent == Intent::Plan
            && let RoutingPayload::Plan { goal, raw_actions } = &routing.payload
        {
            let plan = planner::build_plan(goal, Some(raw_actions.as_slice()));
            graph = Some(lift_plan(&plan)?);
            steps = Some(plan);
        }

        Ok(SessionOutcome {
            session_id: self.id,
            routing,
            decision,
            steps,
            graph,
        })
    }
}

/// Lift normalized steps into task nodes with sequential ordering edges,
/// then seal the graph into its execution-ready snapshot.
///
/// Suggested agents resolve their required capabilities through the catalog;
/// hints that name no cataloged agent stay non-binding.
pub fn lift_plan(steps: &[PlanStep]) -> Result<GraphSnapshot, FloeError> {
    let mut graph = TaskGraph::new();

    for step in steps {
        let mut metadata = step.payload.clone();
        metadata.insert("title".to_string(), Value::String(step.title.clone()));

        let mut node = TaskNode::new(
            step.id.as_str(),
            step.step_type.as_str(),
            step.description.as_str(),
        )
        .with_metadata(metadata);

        if let Some(agent) = &step.agent_hint {
            node = node.with_suggested_agent(agent.as_str());
            if let Ok(spec) = catalog::find_agent(agent) {
                node = node.with_required_capabilities(spec.capabilities.iter().copied());
            }
        }

        graph.add_node(node)?;
    }

    for pair in steps.windows(2) {
        graph.add_dependency(&pair[0].id, &pair[1].id)?;
    }

    graph.seal()
}
