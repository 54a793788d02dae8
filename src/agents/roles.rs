//! Canonical cognitive roles.
//!
//! A role says who an agent is at the reasoning level and which mental
//! responsibilities it carries. The Router's `suggested_roles` are drawn
//! from these names.

use serde::Serialize;

pub const SYSTEM: &str = "system";
pub const PLANNER: &str = "planner";
pub const ANALYZER: &str = "analyzer";
pub const VALIDATOR: &str = "validator";
pub const EXECUTOR: &str = "executor";
pub const OBSERVER: &str = "observer";

#[derive(Debug, Clone, Serialize)]
pub struct CognitiveRole {
    pub name: &'static str,
    pub description: &'static str,
    pub can_plan: bool,
    pub can_execute: bool,
    pub can_observe: bool,
    pub can_decide: bool,
    pub is_system: bool,
}

static ROLES: [CognitiveRole; 6] = [
    CognitiveRole {
        name: SYSTEM,
        description: "Global supervisor. Explains, diagnoses, keeps architectural coherence. Never performs operational actions.",
        can_plan: false,
        can_execute: false,
        can_observe: true,
        can_decide: true,
        is_system: true,
    },
    CognitiveRole {
        name: PLANNER,
        description: "Decomposes complex goals into ordered steps and dependencies.",
        can_plan: true,
        can_execute: false,
        can_observe: true,
        can_decide: false,
        is_system: false,
    },
    CognitiveRole {
        name: ANALYZER,
        description: "Inspects input, code, logs, or data and explains structure and meaning.",
        can_plan: false,
        can_execute: false,
        can_observe: true,
        can_decide: false,
        is_system: false,
    },
    CognitiveRole {
        name: VALIDATOR,
        description: "Checks correctness, consistency, and completeness of results or plans.",
        can_plan: false,
        can_execute: false,
        can_observe: true,
        can_decide: true,
        is_system: false,
    },
    CognitiveRole {
        name: EXECUTOR,
        description: "Applies actions decided elsewhere. Takes no strategic decisions.",
        can_plan: false,
        can_execute: true,
        can_observe: false,
        can_decide: false,
        is_system: false,
    },
    CognitiveRole {
        name: OBSERVER,
        description: "Detects, reports, and normalizes signals without acting on them.",
        can_plan: false,
        can_execute: false,
        can_observe: true,
        can_decide: false,
        is_system: false,
    },
];

pub fn registry() -> &'static [CognitiveRole] {
    &ROLES
}

pub fn find_role(name: &str) -> Option<&'static CognitiveRole> {
    ROLES.iter().find(|r| r.name == name)
}
