//! Intent routing: classifies a query plus optional upstream model output
//! into the next cognitive action.
//!
//! Routing is a pure function. It never errors on malformed upstream output;
//! uncertainty is expressed through fixed per-tier confidence constants that
//! downstream guardrails depend on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::agents::roles;

/// Closed set of cognitive intents. Never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Respond,
    Plan,
    Analyze,
    Validate,
    Observe,
    Synthesize,
    Execute,
}

// Per-tier confidence constants. These are contractual: the default
// decision policy and external orchestrators key off the exact values.
pub const CONFIDENCE_EXPLICIT_MODE: f64 = 1.0;
pub const CONFIDENCE_STRUCTURED_ACTIONS: f64 = 0.9;
pub const CONFIDENCE_REPORTED_ISSUES: f64 = 0.8;
pub const CONFIDENCE_ANALYSIS_SIGNALS: f64 = 0.6;
pub const CONFIDENCE_DIRECT_RESPONSE: f64 = 0.5;
pub const CONFIDENCE_UNKNOWN_MODE: f64 = 0.3;

/// Upstream keys whose presence alone selects the analyze tier.
const ANALYSIS_KEYS: [&str; 4] = ["reasoning", "analysis", "thoughts", "insight"];

/// Intent-specific routing payload.
///
/// One variant per intent family instead of a free-form map, so downstream
/// stages match on shape rather than probing string keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutingPayload {
    Plan {
        goal: String,
        raw_actions: Vec<Value>,
    },
    Validate {
        issues: Vec<Value>,
    },
    Analyze {
        output: Map<String, Value>,
    },
    Respond {
        #[serde(skip_serializing_if = "Option::is_none")]
        answer: Option<Value>,
    },
}

/// Outcome of a single routing call. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    pub intent: Intent,
    pub reason: String,
    pub payload: RoutingPayload,
    pub suggested_roles: Vec<String>,
    pub confidence: f64,
}

/// Classify the next cognitive action.
///
/// Decision order, first match wins:
/// 1. explicit `mode` override (unknown modes degrade to respond, never error)
/// 2. upstream `actions` list → plan
/// 3. upstream `issues` list → validate
/// 4. upstream analysis signals → analyze
/// 5. direct response
pub fn route(
    query: &str,
    upstream: Option<&Map<String, Value>>,
    mode: Option<&str>,
) -> RoutingDecision {
    if let Some(mode) = mode.map(str::trim).filter(|m| !m.is_empty()) {
        return route_explicit_mode(query, upstream, mode);
    }

    if let Some(actions) = non_empty_list(upstream, "actions") {
        return RoutingDecision {
            intent: Intent::Plan,
            reason: "Upstream output contains structured actions.".to_string(),
            payload: RoutingPayload::Plan {
                goal: query.to_string(),
                raw_actions: actions,
            },
            suggested_roles: vec![roles::PLANNER.to_string()],
            confidence: CONFIDENCE_STRUCTURED_ACTIONS,
        };
    }

    if let Some(issues) = non_empty_list(upstream, "issues") {
        return RoutingDecision {
            intent: Intent::Validate,
            reason: "Upstream output reports issues.".to_string(),
            payload: RoutingPayload::Validate { issues },
            suggested_roles: vec![roles::VALIDATOR.to_string()],
            confidence: CONFIDENCE_REPORTED_ISSUES,
        };
    }

    if let Some(output) = upstream
        && ANALYSIS_KEYS.iter().any(|key| output.contains_key(*key))
    {
        return RoutingDecision {
            intent: Intent::Analyze,
            reason: "Upstream output carries reasoning signals.".to_string(),
            payload: RoutingPayload::Analyze {
                output: output.clone(),
            },
            suggested_roles: vec![roles::ANALYZER.to_string()],
            confidence: CONFIDENCE_ANALYSIS_SIGNALS,
        };
    }

    RoutingDecision {
        intent: Intent::Respond,
        reason: "No further processing required.".to_string(),
        payload: RoutingPayload::Respond {
            answer: answer_of(upstream),
        },
        suggested_roles: vec![],
        confidence: CONFIDENCE_DIRECT_RESPONSE,
    }
}

fn route_explicit_mode(
    query: &str,
    upstream: Option<&Map<String, Value>>,
    mode: &str,
) -> RoutingDecision {
    match mode {
        "plan" => RoutingDecision {
            intent: Intent::Plan,
            reason: "Explicit planning mode requested.".to_string(),
            payload: RoutingPayload::Plan {
                goal: query.to_string(),
                raw_actions: non_empty_list(upstream, "actions").unwrap_or_default(),
            },
            suggested_roles: vec![roles::PLANNER.to_string()],
            confidence: CONFIDENCE_EXPLICIT_MODE,
        },
        "analyze" => RoutingDecision {
            intent: Intent::Analyze,
            reason: "Explicit analysis mode requested.".to_string(),
            payload: RoutingPayload::Analyze {
                output: upstream.cloned().unwrap_or_default(),
            },
            suggested_roles: vec![roles::ANALYZER.to_string()],
            confidence: CONFIDENCE_EXPLICIT_MODE,
        },
        "validate" => RoutingDecision {
            intent: Intent::Validate,
            reason: "Explicit validation mode requested.".to_string(),
            payload: RoutingPayload::Validate {
                issues: non_empty_list(upstream, "issues").unwrap_or_default(),
            },
            suggested_roles: vec![roles::VALIDATOR.to_string()],
            confidence: CONFIDENCE_EXPLICIT_MODE,
        },
        other => RoutingDecision {
            intent: Intent::Respond,
            reason: format!("Unrecognized mode '{other}', degrading to direct response."),
            payload: RoutingPayload::Respond {
                answer: answer_of(upstream),
            },
            suggested_roles: vec![],
            confidence: CONFIDENCE_UNKNOWN_MODE,
        },
    }
}

fn non_empty_list(upstream: Option<&Map<String, Value>>, key: &str) -> Option<Vec<Value>> {
    upstream?
        .get(key)?
        .as_array()
        .filter(|items| !items.is_empty())
        .cloned()
}

fn answer_of(upstream: Option<&Map<String, Value>>) -> Option<Value> {
    upstream?.get("answer").filter(|v| !v.is_null()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upstream(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn explicit_plan_mode_always_wins() {
        let out = upstream(json!({ "issues": [{ "msg": "bad" }] }));
        let decision = route("refactor foo", Some(&out), Some("plan"));
        assert_eq!(decision.intent, Intent::Plan);
        assert_eq!(decision.confidence, CONFIDENCE_EXPLICIT_MODE);
        assert_eq!(decision.suggested_roles, vec![roles::PLANNER.to_string()]);
    }

    #[test]
    fn unknown_mode_degrades_to_respond() {
        let decision = route("hello", None, Some("daydream"));
        assert_eq!(decision.intent, Intent::Respond);
        assert_eq!(decision.confidence, CONFIDENCE_UNKNOWN_MODE);
        assert!(decision.reason.contains("daydream"));
    }

    #[test]
    fn blank_mode_falls_through_to_heuristics() {
        let decision = route("hello", None, Some("  "));
        assert_eq!(decision.intent, Intent::Respond);
        assert_eq!(decision.confidence, CONFIDENCE_DIRECT_RESPONSE);
    }

    #[test]
    fn structured_actions_route_to_plan() {
        let out = upstream(json!({ "actions": [{ "description": "do X" }] }));
        let decision = route("refactor foo", Some(&out), None);
        assert_eq!(decision.intent, Intent::Plan);
        assert_eq!(decision.confidence, CONFIDENCE_STRUCTURED_ACTIONS);
        match decision.payload {
            RoutingPayload::Plan { goal, raw_actions } => {
                assert_eq!(goal, "refactor foo");
                assert_eq!(raw_actions.len(), 1);
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn empty_actions_list_falls_through() {
        let out = upstream(json!({ "actions": [] }));
        let decision = route("x", Some(&out), None);
        assert_eq!(decision.intent, Intent::Respond);
    }

    #[test]
    fn issues_route_to_validate() {
        let out = upstream(json!({ "issues": [{ "msg": "bad" }] }));
        let decision = route("check this", Some(&out), None);
        assert_eq!(decision.intent, Intent::Validate);
        assert_eq!(decision.confidence, CONFIDENCE_REPORTED_ISSUES);
    }

    #[test]
    fn each_analysis_key_routes_to_analyze() {
        for key in ["reasoning", "analysis", "thoughts", "insight"] {
            let out = upstream(json!({ key: "because" }));
            let decision = route("why", Some(&out), None);
            assert_eq!(decision.intent, Intent::Analyze, "key {key}");
            assert_eq!(decision.confidence, CONFIDENCE_ANALYSIS_SIGNALS);
            match decision.payload {
                RoutingPayload::Analyze { output } => assert!(output.contains_key(key)),
                other => panic!("unexpected payload: {other:?}"),
            }
        }
    }

    #[test]
    fn empty_upstream_routes_to_respond_without_answer() {
        let out = upstream(json!({}));
        let decision = route("hi", Some(&out), None);
        assert_eq!(decision.intent, Intent::Respond);
        assert_eq!(decision.confidence, CONFIDENCE_DIRECT_RESPONSE);
        assert_eq!(decision.payload, RoutingPayload::Respond { answer: None });
        assert!(decision.suggested_roles.is_empty());
    }

    #[test]
    fn respond_carries_scalar_answer() {
        let out = upstream(json!({ "answer": "42" }));
        let decision = route("what", Some(&out), None);
        assert_eq!(
            decision.payload,
            RoutingPayload::Respond {
                answer: Some(json!("42"))
            }
        );
    }

    #[test]
    fn intent_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Intent::Plan).unwrap(), "\"plan\"");
        assert_eq!(
            serde_json::to_string(&Intent::Synthesize).unwrap(),
            "\"synthesize\""
        );
    }
}
