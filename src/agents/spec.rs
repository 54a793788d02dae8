//! Static agent capability profiles.
//!
//! An `AgentSpec` declares what an agent is, never how it runs: no logic,
//! no runtime dependencies. Profiles are compiled into the binary and
//! served through the catalog for routing, planning, and introspection.

use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Serialize)]
pub struct AgentSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Functional domains, e.g. code, logs, workflow, knowledge.
    pub domains: &'static [&'static str],
    pub is_planner: bool,
    pub is_executor: bool,
    pub is_observer: bool,
    pub is_system: bool,
    /// Declared capabilities, drawn from the canonical vocabulary.
    pub capabilities: &'static [&'static str],
    /// Free-text match hints for prompt-based suggestion.
    pub keywords: &'static [&'static str],
    pub experimental: bool,
}

impl AgentSpec {
    pub fn supports(&self, capability: &str) -> bool {
        self.capabilities.contains(&capability)
    }

    pub fn supports_any<'a, I>(&self, capabilities: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        capabilities.into_iter().any(|c| self.supports(c))
    }

    pub fn supports_all<'a, I>(&self, capabilities: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        capabilities.into_iter().all(|c| self.supports(c))
    }

    /// Stable introspection form: sorted capability and domain lists.
    pub fn to_introspection(&self) -> serde_json::Value {
        let mut domains: Vec<&str> = self.domains.to_vec();
        domains.sort_unstable();
        let mut capabilities: Vec<&str> = self.capabilities.to_vec();
        capabilities.sort_unstable();
        json!({
            "name": self.name,
            "description": self.description,
            "domains": domains,
            "roles": {
                "planner": self.is_planner,
                "executor": self.is_executor,
                "observer": self.is_observer,
                "system": self.is_system,
            },
            "capabilities": capabilities,
            "experimental": self.experimental,
        })
    }
}
