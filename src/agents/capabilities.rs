//! Canonical capability vocabulary.
//!
//! Agent profiles may only declare capabilities listed here; the catalog
//! test suite enforces it. Work items reference these strings as
//! `required_capabilities`.

// Code / filesystem
pub const FS_READ: &str = "fs.read";
pub const FS_WRITE: &str = "fs.write";
pub const FS_SCAN: &str = "fs.scan";
pub const FS_LIST: &str = "fs.list";
pub const CODE_GENERATE: &str = "code.generate";
pub const CODE_EXPLAIN: &str = "code.explain";
pub const CODE_REFACTOR_PROPOSE: &str = "code.refactor.propose";
pub const CODE_REFACTOR_DIFF: &str = "code.refactor.diff";
pub const CODE_VALIDATE_SYNTAX: &str = "code.validate.syntax";
pub const CODE_VALIDATE_SEMANTIC: &str = "code.validate.semantic";

// Git
pub const GIT_STATUS: &str = "git.status";
pub const GIT_DIFF: &str = "git.diff";
pub const GIT_LOG: &str = "git.log";
pub const GIT_COMMIT: &str = "git.commit";
pub const GIT_CHECKOUT: &str = "git.checkout";
pub const GIT_BRANCHES: &str = "git.branches";

// Logs / anomaly analysis
pub const LOGS_ANALYZE: &str = "logs.analyze";
pub const LOGS_SCAN_TEXT: &str = "logs.scan_text";
pub const ML_ANOMALY_DETECT: &str = "ml.anomaly.detect";
pub const ML_ANOMALY_SCORE: &str = "ml.anomaly.score";

// Knowledge
pub const KNOWLEDGE_QUERY: &str = "knowledge.query";
pub const KNOWLEDGE_SYNC: &str = "knowledge.sync";
pub const RAG_INGEST: &str = "rag.ingest";
pub const RAG_QUERY: &str = "rag.query";
pub const HISTORY_QUERY: &str = "history.query";

// Planning / workflow
pub const WORKFLOW_PLAN: &str = "workflow.plan";
pub const WORKFLOW_DECOMPOSE: &str = "workflow.decompose";
pub const WORKFLOW_ROUTE: &str = "workflow.route";
pub const WORKFLOW_VALIDATE: &str = "workflow.validate";
pub const PROJECT_GENERATE: &str = "project.generate";

// Analysis
pub const ANALYZE_TEXT: &str = "analyze.text";
pub const ANALYZE_CODE: &str = "analyze.code";
pub const ANALYZE_LOGS: &str = "analyze.logs";

// System
pub const SYSTEM_INTROSPECT: &str = "system.introspect";
pub const LIFECYCLE_READ: &str = "lifecycle.read";
pub const LIFECYCLE_STATUS: &str = "lifecycle.status";

static VOCABULARY: [&str; 36] = [
    FS_READ,
    FS_WRITE,
    FS_SCAN,
    FS_LIST,
    CODE_GENERATE,
    CODE_EXPLAIN,
    CODE_REFACTOR_PROPOSE,
    CODE_REFACTOR_DIFF,
    CODE_VALIDATE_SYNTAX,
    CODE_VALIDATE_SEMANTIC,
    GIT_STATUS,
    GIT_DIFF,
    GIT_LOG,
    GIT_COMMIT,
    GIT_CHECKOUT,
    GIT_BRANCHES,
    LOGS_ANALYZE,
    LOGS_SCAN_TEXT,
    ML_ANOMALY_DETECT,
    ML_ANOMALY_SCORE,
    KNOWLEDGE_QUERY,
    KNOWLEDGE_SYNC,
    RAG_INGEST,
    RAG_QUERY,
    HISTORY_QUERY,
    WORKFLOW_PLAN,
    WORKFLOW_DECOMPOSE,
    WORKFLOW_ROUTE,
    WORKFLOW_VALIDATE,
    PROJECT_GENERATE,
    ANALYZE_TEXT,
    ANALYZE_CODE,
    ANALYZE_LOGS,
    SYSTEM_INTROSPECT,
    LIFECYCLE_READ,
    LIFECYCLE_STATUS,
];

/// The full canonical vocabulary.
pub fn vocabulary() -> &'static [&'static str] {
    &VOCABULARY
}

pub fn is_canonical(capability: &str) -> bool {
    VOCABULARY.contains(&capability)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_entries_are_dotted_and_unique() {
        let mut seen = std::collections::BTreeSet::new();
        for cap in vocabulary() {
            assert!(cap.contains('.'), "capability {cap} must be namespaced");
            assert_eq!(*cap, cap.to_lowercase());
            assert!(seen.insert(*cap), "duplicate capability {cap}");
        }
    }

    #[test]
    fn canonical_check_covers_registry_and_rejects_strays() {
        assert!(is_canonical(WORKFLOW_PLAN));
        assert!(is_canonical(LIFECYCLE_STATUS));
        assert!(!is_canonical("made.up"));
    }
}
