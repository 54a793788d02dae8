//! Plan normalization: turns raw upstream action lists into ordered
//! `PlanStep` values with a deterministic fallback.
//!
//! Unusable entries are dropped silently, never raised: the planner always
//! produces a usable plan.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const FALLBACK_STEP_ID: &str = "fallback-1";
pub const FALLBACK_STEP_TITLE: &str = "Generic planning step";
const FALLBACK_STEP_DESCRIPTION: &str =
    "No structured plan was produced. This fallback step was generated automatically.";

const DEFAULT_STEP_TYPE: &str = "plan";

/// Title fallback takes this many leading characters of the description.
const TITLE_PREVIEW_CHARS: usize = 64;

/// One normalized, orderable unit of planned work. Identity is the id,
/// unique within a single plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub step_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_hint: Option<String>,
    pub payload: Map<String, Value>,
}

/// Build an ordered plan from raw upstream actions.
///
/// `raw_actions` entries may be structured records or plain text; anything
/// else is dropped. Step ids are assigned by original position, so dropped
/// entries leave gaps in titles but ids stay unique. Absent, empty, or
/// fully unusable input yields the single fallback step.
pub fn build_plan(goal: &str, raw_actions: Option<&[Value]>) -> Vec<PlanStep> {
    let Some(actions) = raw_actions.filter(|a| !a.is_empty()) else {
        return fallback_plan(goal);
    };

    let mut steps = Vec::with_capacity(actions.len());
    for (position, action) in actions.iter().enumerate() {
        let index = position + 1;
        match action {
            Value::Object(entry) => steps.push(structured_step(index, entry)),
            Value::String(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    steps.push(text_step(index, text));
                }
            }
            _ => {} // unusable shape, dropped
        }
    }

    if steps.is_empty() {
        return fallback_plan(goal);
    }
    steps
}

fn structured_step(index: usize, entry: &Map<String, Value>) -> PlanStep {
    let description = match entry.get("description") {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    let title = entry
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string)
        .filter(|t| !t.is_empty())
        .or_else(|| title_preview(&description))
        .unwrap_or_else(|| format!("Step {index}"));

    let step_type = entry
        .get("type")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .unwrap_or(DEFAULT_STEP_TYPE)
        .to_string();

    let agent_hint = entry
        .get("agent_hint")
        .or_else(|| entry.get("agent"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let payload = entry
        .get("payload")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    PlanStep {
        id: format!("step-{index}"),
        title,
        description,
        step_type,
        agent_hint,
        payload,
    }
}

fn text_step(index: usize, text: &str) -> PlanStep {
    PlanStep {
        id: format!("step-{index}"),
        title: format!("Step {index}"),
        description: text.to_string(),
        step_type: DEFAULT_STEP_TYPE.to_string(),
        agent_hint: None,
        payload: Map::new(),
    }
}

fn title_preview(description: &str) -> Option<String> {
    if description.is_empty() {
        return None;
    }
    Some(description.chars().take(TITLE_PREVIEW_CHARS).collect())
}

fn fallback_plan(goal: &str) -> Vec<PlanStep> {
    let mut payload = Map::new();
    payload.insert("goal".to_string(), Value::String(goal.to_string()));
    vec![PlanStep {
        id: FALLBACK_STEP_ID.to_string(),
        title: FALLBACK_STEP_TITLE.to_string(),
        description: FALLBACK_STEP_DESCRIPTION.to_string(),
        step_type: DEFAULT_STEP_TYPE.to_string(),
        agent_hint: None,
        payload,
    }]
}
