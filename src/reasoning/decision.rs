//! Guardrail gate between routing and planning.
//!
//! A policy can veto or downgrade a routing outcome before it reaches the
//! planner. Policies are pure: no side effects, no mutation of the routing
//! decision or context they evaluate.

use serde::Serialize;

use crate::core::config::PolicyConfig;
use crate::lifecycle::LifecycleState;
use crate::reasoning::routing::{Intent, RoutingDecision, RoutingPayload};

/// Routing decisions below this confidence are denied by the default policy.
pub const MIN_ROUTING_CONFIDENCE: f64 = 0.2;

/// Fixed confidence reported when planning is gated by lifecycle state.
/// Overrides the routing confidence: the gate is certain about the veto,
/// not about the routing.
pub const GATED_PLANNING_CONFIDENCE: f64 = 0.6;

/// Minimal execution context a guardrail evaluates against.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionContext {
    pub lifecycle_state: Option<LifecycleState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardrailAction {
    AskClarification,
    Wait,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DecisionMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<GuardrailAction>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<RoutingPayload>,
}

/// Immutable outcome of a single guardrail evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    pub intent: Intent,
    pub proceed: bool,
    pub reason: String,
    pub confidence: f64,
    pub meta: DecisionMeta,
}

/// Extension point: rule sets, scored thresholds, hybrids. Implementations
/// must be side-effect-free.
pub trait DecisionPolicy {
    fn decide(&self, routing: &RoutingDecision, context: &DecisionContext) -> Decision;
}

/// Default rule-based guardrail.
#[derive(Debug, Clone)]
pub struct DefaultPolicy {
    min_confidence: f64,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self {
            min_confidence: MIN_ROUTING_CONFIDENCE,
        }
    }
}

impl DefaultPolicy {
    pub fn with_min_confidence(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            min_confidence: config.min_confidence,
        }
    }
}

impl DecisionPolicy for DefaultPolicy {
    fn decide(&self, routing: &RoutingDecision, context: &DecisionContext) -> Decision {
        if routing.confidence < self.min_confidence {
            return Decision {
                intent: routing.intent,
                proceed: false,
                reason: "routing confidence too low".to_string(),
                confidence: routing.confidence,
                meta: DecisionMeta {
                    action: Some(GuardrailAction::AskClarification),
                    ..DecisionMeta::default()
                },
            };
        }

        if context.lifecycle_state == Some(LifecycleState::Executing)
            && routing.intent == Intent::Plan
        {
            return Decision {
                intent: routing.intent,
                proceed: false,
                reason: "cannot plan while execution is in progress".to_string(),
                confidence: GATED_PLANNING_CONFIDENCE,
                meta: DecisionMeta {
                    action: Some(GuardrailAction::Wait),
                    ..DecisionMeta::default()
                },
            };
        }

        Decision {
            intent: routing.intent,
            proceed: true,
            reason: "accepted by default policy".to_string(),
            confidence: routing.confidence,
            meta: DecisionMeta {
                action: None,
                suggested_roles: routing.suggested_roles.clone(),
                payload: Some(routing.payload.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::routing::{RoutingPayload, route};
    use serde_json::json;

    fn low_confidence_routing() -> RoutingDecision {
        RoutingDecision {
            intent: Intent::Plan,
            reason: "test".to_string(),
            payload: RoutingPayload::Respond { answer: None },
            suggested_roles: vec![],
            confidence: 0.1,
        }
    }

    #[test]
    fn low_confidence_is_always_denied() {
        let policy = DefaultPolicy::default();
        for state in [
            None,
            Some(LifecycleState::Idle),
            Some(LifecycleState::Executing),
        ] {
            let decision = policy.decide(
                &low_confidence_routing(),
                &DecisionContext {
                    lifecycle_state: state,
                },
            );
            assert!(!decision.proceed);
            assert_eq!(decision.reason, "routing confidence too low");
            assert_eq!(decision.confidence, 0.1);
            assert_eq!(decision.meta.action, Some(GuardrailAction::AskClarification));
        }
    }

    #[test]
    fn planning_is_gated_while_executing() {
        let upstream = json!({ "actions": ["do X"] });
        let routing = route("goal", upstream.as_object(), None);
        let decision = DefaultPolicy::default().decide(
            &routing,
            &DecisionContext {
                lifecycle_state: Some(LifecycleState::Executing),
            },
        );
        assert!(!decision.proceed);
        assert_eq!(decision.reason, "cannot plan while execution is in progress");
        assert_eq!(decision.confidence, GATED_PLANNING_CONFIDENCE);
        assert_eq!(decision.meta.action, Some(GuardrailAction::Wait));
    }

    #[test]
    fn non_plan_intents_pass_while_executing() {
        let upstream = json!({ "issues": ["bad"] });
        let routing = route("goal", upstream.as_object(), None);
        let decision = DefaultPolicy::default().decide(
            &routing,
            &DecisionContext {
                lifecycle_state: Some(LifecycleState::Executing),
            },
        );
        assert!(decision.proceed);
    }

    #[test]
    fn accepted_decision_carries_roles_and_payload() {
        let upstream = json!({ "actions": [{ "description": "do X" }] });
        let routing = route("refactor foo", upstream.as_object(), None);
        let decision = DefaultPolicy::default().decide(
            &routing,
            &DecisionContext {
                lifecycle_state: Some(LifecycleState::Idle),
            },
        );
        assert!(decision.proceed);
        assert_eq!(decision.reason, "accepted by default policy");
        assert_eq!(decision.confidence, routing.confidence);
        assert_eq!(decision.meta.suggested_roles, routing.suggested_roles);
        assert_eq!(decision.meta.payload.as_ref(), Some(&routing.payload));
    }

    #[test]
    fn raised_threshold_denies_what_default_accepts() {
        let routing = route("hello", None, None); // respond at 0.5
        let strict = DefaultPolicy::with_min_confidence(0.7);
        assert!(!strict.decide(&routing, &DecisionContext::default()).proceed);
        assert!(
            DefaultPolicy::default()
                .decide(&routing, &DecisionContext::default())
                .proceed
        );
    }
}
