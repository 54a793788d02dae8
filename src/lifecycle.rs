//! Cognitive lifecycle states and their canonical descriptors.
//!
//! These describe the reasoning phase of an agent, not runtime process
//! state. The decision gate consults them to veto actions that do not fit
//! the current phase (planning during execution, most notably).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::FloeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Boot,
    Idle,
    Active,
    Executing,
    Closing,
    Error,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Idle => "idle",
            Self::Active => "active",
            Self::Executing => "executing",
            Self::Closing => "closing",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = FloeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boot" => Ok(Self::Boot),
            "idle" => Ok(Self::Idle),
            "active" => Ok(Self::Active),
            "executing" => Ok(Self::Executing),
            "closing" => Ok(Self::Closing),
            "error" => Ok(Self::Error),
            other => Err(FloeError::ValidationError(format!(
                "unknown lifecycle state '{other}'"
            ))),
        }
    }
}

/// Semantic description of one lifecycle state: what the system is doing
/// and which cognitive actions the phase permits.
#[derive(Debug, Clone, Serialize)]
pub struct LifecycleDescriptor {
    pub state: LifecycleState,
    pub description: &'static str,
    pub allow_planning: bool,
    pub allow_execution: bool,
    pub allow_decision: bool,
    pub notes: &'static str,
}

static LIFECYCLE_REGISTRY: [LifecycleDescriptor; 6] = [
    LifecycleDescriptor {
        state: LifecycleState::Boot,
        description: "System initialization phase.",
        allow_planning: false,
        allow_execution: false,
        allow_decision: false,
        notes: "Avoid assumptions and irreversible actions.",
    },
    LifecycleDescriptor {
        state: LifecycleState::Idle,
        description: "Awaiting user intent.",
        allow_planning: false,
        allow_execution: false,
        allow_decision: false,
        notes: "Wait for explicit intent.",
    },
    LifecycleDescriptor {
        state: LifecycleState::Active,
        description: "Active reasoning or task preparation.",
        allow_planning: true,
        allow_execution: true,
        allow_decision: true,
        notes: "Apply role, capability, and policy constraints.",
    },
    LifecycleDescriptor {
        state: LifecycleState::Executing,
        description: "Execution of an approved plan is in progress.",
        allow_planning: false,
        allow_execution: true,
        allow_decision: true,
        notes: "Do not replan mid-execution; queue new intent instead.",
    },
    LifecycleDescriptor {
        state: LifecycleState::Closing,
        description: "Finalization phase.",
        allow_planning: false,
        allow_execution: false,
        allow_decision: false,
        notes: "Summarize and ensure consistency only.",
    },
    LifecycleDescriptor {
        state: LifecycleState::Error,
        description: "Cognitive error state.",
        allow_planning: false,
        allow_execution: false,
        allow_decision: false,
        notes: "Explain the error and suggest recovery.",
    },
];

pub fn registry() -> &'static [LifecycleDescriptor] {
    &LIFECYCLE_REGISTRY
}

pub fn descriptor(state: LifecycleState) -> &'static LifecycleDescriptor {
    LIFECYCLE_REGISTRY
        .iter()
        .find(|d| d.state == state)
        .expect("every lifecycle state has a descriptor")
}
