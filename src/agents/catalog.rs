//! Canonical agent catalog, compiled into the binary.
//!
//! The catalog is the single point of truth for which agents exist. It is
//! read-only process-wide state: no lazy initialization, no mutation. It
//! declares, it never instantiates.

use serde::Serialize;

use super::capabilities as cap;
use super::spec::AgentSpec;
use crate::core::error::FloeError;

static SYSTEM_AGENT: AgentSpec = AgentSpec {
    name: "system",
    description: "Global system agent for lifecycle and introspection.",
    domains: &["system"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: true,
    capabilities: &[cap::LIFECYCLE_READ, cap::LIFECYCLE_STATUS, cap::SYSTEM_INTROSPECT],
    keywords: &["system", "status", "lifecycle", "introspect", "health"],
    experimental: false,
};

static PLANNER_AGENT: AgentSpec = AgentSpec {
    name: "planner",
    description: "High-level planner that generates abstract workflows.",
    domains: &["workflow"],
    is_planner: true,
    is_executor: false,
    is_observer: false,
    is_system: false,
    capabilities: &[cap::WORKFLOW_PLAN, cap::WORKFLOW_DECOMPOSE],
    keywords: &["plan", "workflow", "steps", "decompose", "roadmap"],
    experimental: false,
};

static ANALYZER_AGENT: AgentSpec = AgentSpec {
    name: "analyzer",
    description: "Generic analyzer for text, code, and logs.",
    domains: &["code", "logs", "text"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::ANALYZE_TEXT, cap::ANALYZE_CODE, cap::ANALYZE_LOGS],
    keywords: &["analyze", "inspect", "explain", "understand", "review"],
    experimental: false,
};

static VALIDATOR_AGENT: AgentSpec = AgentSpec {
    name: "validator",
    description: "Code validation: syntax and semantic signals.",
    domains: &["code"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[
        cap::CODE_VALIDATE_SYNTAX,
        cap::CODE_VALIDATE_SEMANTIC,
        cap::WORKFLOW_VALIDATE,
    ],
    keywords: &["validate", "verify", "check", "lint", "correctness"],
    experimental: false,
};

static CODE_AGENT: AgentSpec = AgentSpec {
    name: "code",
    description: "Filesystem and code manipulation agent.",
    domains: &["code"],
    is_planner: false,
    is_executor: true,
    is_observer: true,
    is_system: false,
    capabilities: &[
        cap::FS_READ,
        cap::FS_WRITE,
        cap::FS_LIST,
        cap::CODE_GENERATE,
        cap::CODE_EXPLAIN,
    ],
    keywords: &["code", "file", "write", "generate", "implement", "edit"],
    experimental: false,
};

static REFACTOR_AGENT: AgentSpec = AgentSpec {
    name: "refactor",
    description: "Code refactoring proposal and diff generation.",
    domains: &["code"],
    is_planner: false,
    is_executor: true,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::CODE_REFACTOR_PROPOSE, cap::CODE_REFACTOR_DIFF],
    keywords: &["refactor", "cleanup", "restructure", "rename", "diff"],
    experimental: false,
};

static SCANNER_AGENT: AgentSpec = AgentSpec {
    name: "scanner",
    description: "Filesystem scanner and project structure observer.",
    domains: &["code", "filesystem"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::FS_SCAN, cap::FS_LIST],
    keywords: &["scan", "tree", "structure", "project", "directory"],
    experimental: false,
};

static GIT_AGENT: AgentSpec = AgentSpec {
    name: "git",
    description: "Git repository inspection and operations.",
    domains: &["code"],
    is_planner: false,
    is_executor: true,
    is_observer: true,
    is_system: false,
    capabilities: &[
        cap::GIT_STATUS,
        cap::GIT_DIFF,
        cap::GIT_LOG,
        cap::GIT_COMMIT,
        cap::GIT_CHECKOUT,
        cap::GIT_BRANCHES,
    ],
    keywords: &["git", "commit", "branch", "diff", "history", "repository"],
    experimental: false,
};

static LOG_AGENT: AgentSpec = AgentSpec {
    name: "log",
    description: "Log analysis, anomaly detection, and event normalization.",
    domains: &["logs"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::LOGS_ANALYZE, cap::LOGS_SCAN_TEXT],
    keywords: &["log", "logs", "error", "warning", "trace", "events"],
    experimental: false,
};

static ANOMALY_AGENT: AgentSpec = AgentSpec {
    name: "anomaly",
    description: "Lightweight ML analysis: anomaly detection and scoring.",
    domains: &["ml"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::ML_ANOMALY_DETECT, cap::ML_ANOMALY_SCORE],
    keywords: &["anomaly", "outlier", "pattern", "detect", "score"],
    experimental: true,
};

static KNOWLEDGE_AGENT: AgentSpec = AgentSpec {
    name: "knowledge",
    description: "Knowledge base and retrieval agent.",
    domains: &["knowledge"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::KNOWLEDGE_QUERY, cap::RAG_INGEST, cap::RAG_QUERY],
    keywords: &["knowledge", "search", "retrieve", "rag", "lookup", "docs"],
    experimental: false,
};

static KNOWLEDGE_SYNC_AGENT: AgentSpec = AgentSpec {
    name: "knowledge-sync",
    description: "Exports knowledge and timelines to external formats.",
    domains: &["knowledge"],
    is_planner: false,
    is_executor: true,
    is_observer: false,
    is_system: false,
    capabilities: &[cap::KNOWLEDGE_SYNC, cap::FS_WRITE],
    keywords: &["export", "sync", "markdown", "publish"],
    experimental: false,
};

static HISTORIAN_AGENT: AgentSpec = AgentSpec {
    name: "historian",
    description: "Temporal memory and historical reasoning agent.",
    domains: &["knowledge"],
    is_planner: false,
    is_executor: false,
    is_observer: true,
    is_system: false,
    capabilities: &[cap::HISTORY_QUERY, cap::KNOWLEDGE_QUERY],
    keywords: &["history", "timeline", "when", "past", "previous"],
    experimental: false,
};

static PROJECT_AGENT: AgentSpec = AgentSpec {
    name: "project",
    description: "Generates high-level project plans from a goal.",
    domains: &["workflow", "project"],
    is_planner: true,
    is_executor: false,
    is_observer: false,
    is_system: false,
    capabilities: &[cap::PROJECT_GENERATE, cap::WORKFLOW_PLAN],
    keywords: &["project", "scaffold", "bootstrap", "blueprint"],
    experimental: false,
};

static CATALOG: [&AgentSpec; 14] = [
    &SYSTEM_AGENT,
    &PLANNER_AGENT,
    &ANALYZER_AGENT,
    &VALIDATOR_AGENT,
    &CODE_AGENT,
    &REFACTOR_AGENT,
    &SCANNER_AGENT,
    &GIT_AGENT,
    &LOG_AGENT,
    &ANOMALY_AGENT,
    &KNOWLEDGE_AGENT,
    &KNOWLEDGE_SYNC_AGENT,
    &HISTORIAN_AGENT,
    &PROJECT_AGENT,
];

/// All declared agents, in declaration order.
pub fn catalog() -> &'static [&'static AgentSpec] {
    &CATALOG
}

pub fn find_agent(name: &str) -> Result<&'static AgentSpec, FloeError> {
    CATALOG
        .iter()
        .find(|spec| spec.name == name)
        .copied()
        .ok_or_else(|| FloeError::AgentNotFound(name.to_string()))
}

pub fn exists(name: &str) -> bool {
    CATALOG.iter().any(|spec| spec.name == name)
}

pub fn by_domain(domain: &str) -> Vec<&'static AgentSpec> {
    CATALOG
        .iter()
        .filter(|spec| spec.domains.contains(&domain))
        .copied()
        .collect()
}

pub fn planners() -> Vec<&'static AgentSpec> {
    CATALOG.iter().filter(|s| s.is_planner).copied().collect()
}

pub fn executors() -> Vec<&'static AgentSpec> {
    CATALOG.iter().filter(|s| s.is_executor).copied().collect()
}

pub fn observers() -> Vec<&'static AgentSpec> {
    CATALOG.iter().filter(|s| s.is_observer).copied().collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentSuggestion {
    pub agent: String,
    pub score: f64,
    pub matched_keywords: Vec<String>,
}

/// Score catalog agents against a free-text prompt by keyword overlap.
/// Returns only positive matches, best first.
pub fn suggest_agents(prompt: &str) -> Vec<AgentSuggestion> {
    let tokens: Vec<String> = prompt
        .to_lowercase()
        .split_whitespace()
        .map(|s| s.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|s| s.len() >= 3)
        .collect();

    let mut suggestions: Vec<AgentSuggestion> = CATALOG
        .iter()
        .map(|spec| {
            let matched: Vec<String> = spec
                .keywords
                .iter()
                .filter(|kw| tokens.iter().any(|t| t.contains(*kw) || kw.contains(t.as_str())))
                .map(|s| s.to_string())
                .collect();
            let score = if spec.keywords.is_empty() {
                0.0
            } else {
                matched.len() as f64 / spec.keywords.len() as f64
            };
            AgentSuggestion {
                agent: spec.name.to_string(),
                score,
                matched_keywords: matched,
            }
        })
        .collect();

    suggestions
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    suggestions.retain(|s| s.score > 0.0);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::capabilities;

    #[test]
    fn agent_names_are_unique() {
        let mut names: Vec<&str> = catalog().iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn every_declared_capability_is_canonical() {
        for spec in catalog() {
            for capability in spec.capabilities {
                assert!(
                    capabilities::is_canonical(capability),
                    "agent {} declares unknown capability {}",
                    spec.name,
                    capability
                );
            }
        }
    }

    #[test]
    fn lookup_and_filters() {
        assert!(find_agent("planner").is_ok());
        assert!(find_agent("ghost").is_err());
        assert!(exists("git"));
        assert!(planners().iter().all(|s| s.is_planner));
        assert!(by_domain("logs").iter().any(|s| s.name == "log"));
        assert!(executors().iter().any(|s| s.name == "code"));
        assert!(observers().iter().any(|s| s.name == "analyzer"));
    }

    #[test]
    fn suggestion_matches_refactor_prompt() {
        let suggestions = suggest_agents("please refactor the parser module");
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0].agent, "refactor");
        assert!(suggestions[0].score > 0.0);
    }

    #[test]
    fn suggestion_is_empty_for_unrelated_prompt() {
        assert!(suggest_agents("zzz qqq").is_empty());
    }
}
