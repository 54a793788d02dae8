//! Dependency graph of planned work.
//!
//! A `TaskGraph` is owned by exactly one planning session and populated
//! incrementally: nodes first, then edges between existing nodes. Structural
//! violations (duplicate ids, unknown endpoints, missing lookups) are hard
//! errors. Acyclicity is checked on demand via `is_valid_dag`, or once and
//! for all via `seal`, which returns the immutable execution-ready snapshot
//! handed off to an orchestrator.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::core::error::FloeError;

/// One logical unit of work. Immutable value; no execution state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskNode {
    pub id: String,
    pub kind: String,
    pub description: String,
    pub required_capabilities: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_agent: Option<String>,
    pub metadata: Map<String, Value>,
}

impl TaskNode {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            description: description.into(),
            required_capabilities: BTreeSet::new(),
            suggested_agent: None,
            metadata: Map::new(),
        }
    }

    pub fn with_suggested_agent(mut self, agent: impl Into<String>) -> Self {
        self.suggested_agent = Some(agent.into());
        self
    }

    pub fn with_required_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Directed graph of `TaskNode`s with explicit dependency edges.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskGraph {
    nodes: BTreeMap<String, TaskNode>,
    // from -> ordered successors
    edges: BTreeMap<String, Vec<String>>,
}

/// Serialized, execution-ready form of a graph. Key-sorted and stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: BTreeMap<String, TaskNode>,
    pub edges: BTreeMap<String, Vec<String>>,
    pub roots: Vec<String>,
    pub leaves: Vec<String>,
    pub valid_dag: bool,
}

impl GraphSnapshot {
    pub fn canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn canonical_hash_hex(&self) -> Result<String, serde_json::Error> {
        let bytes = self.canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a node with an empty successor list.
    pub fn add_node(&mut self, node: TaskNode) -> Result<(), FloeError> {
        if self.nodes.contains_key(&node.id) {
            return Err(FloeError::DuplicateNode(node.id));
        }
        self.edges.insert(node.id.clone(), Vec::new());
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    pub fn get_node(&self, id: &str) -> Result<&TaskNode, FloeError> {
        self.nodes
            .get(id)
            .ok_or_else(|| FloeError::NodeNotFound(id.to_string()))
    }

    /// Record that `before` must complete before `after`.
    ///
    /// Both endpoints must already exist. Self-loops and cycles are not
    /// rejected here; callers validate via `is_valid_dag` or `seal`.
    pub fn add_dependency(&mut self, before: &str, after: &str) -> Result<(), FloeError> {
        if !self.nodes.contains_key(before) {
            return Err(FloeError::NodeNotFound(before.to_string()));
        }
        if !self.nodes.contains_key(after) {
            return Err(FloeError::NodeNotFound(after.to_string()));
        }
        self.edges
            .entry(before.to_string())
            .or_default()
            .push(after.to_string());
        Ok(())
    }

    /// Node ids that list `id` as a successor (reverse adjacency scan).
    pub fn dependencies_of(&self, id: &str) -> Vec<String> {
        self.edges
            .iter()
            .filter(|(_, targets)| targets.iter().any(|t| t == id))
            .map(|(source, _)| source.clone())
            .collect()
    }

    /// Direct successors of `id`.
    pub fn dependents_of(&self, id: &str) -> Result<&[String], FloeError> {
        self.edges
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| FloeError::NodeNotFound(id.to_string()))
    }

    /// Nodes with no incoming edges, in id order.
    pub fn roots(&self) -> Vec<String> {
        let mut targeted: FxHashSet<&str> = FxHashSet::default();
        for targets in self.edges.values() {
            targeted.extend(targets.iter().map(String::as_str));
        }
        self.nodes
            .keys()
            .filter(|id| !targeted.contains(id.as_str()))
            .cloned()
            .collect()
    }

    /// Nodes with no outgoing edges, in id order.
    pub fn leaves(&self) -> Vec<String> {
        self.nodes
            .keys()
            .filter(|id| self.edges.get(*id).is_none_or(|t| t.is_empty()))
            .cloned()
            .collect()
    }

    /// Depth-first cycle check with a recursion-stack set. Not invoked by
    /// mutating operations; callers must ask before trusting the graph.
    pub fn is_valid_dag(&self) -> bool {
        self.find_back_edge().is_none()
    }

    /// Validate once and return the immutable execution-ready snapshot.
    pub fn seal(&self) -> Result<GraphSnapshot, FloeError> {
        if let Some(node) = self.find_back_edge() {
            return Err(FloeError::CycleDetected(node));
        }
        Ok(GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            roots: self.roots(),
            leaves: self.leaves(),
            valid_dag: true,
        })
    }

    /// Serialized form without the acyclicity guarantee of `seal`.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
            roots: self.roots(),
            leaves: self.leaves(),
            valid_dag: self.is_valid_dag(),
        }
    }

    fn find_back_edge(&self) -> Option<String> {
        let mut visited = FxHashSet::default();
        let mut stack = FxHashSet::default();
        for id in self.nodes.keys() {
            if let Some(hit) = self.visit(id, &mut visited, &mut stack) {
                return Some(hit);
            }
        }
        None
    }

    fn visit(
        &self,
        id: &str,
        visited: &mut FxHashSet<String>,
        stack: &mut FxHashSet<String>,
    ) -> Option<String> {
        if stack.contains(id) {
            return Some(id.to_string());
        }
        if visited.contains(id) {
            return None;
        }
        stack.insert(id.to_string());
        if let Some(successors) = self.edges.get(id) {
            for successor in successors {
                if let Some(hit) = self.visit(successor, visited, stack) {
                    return Some(hit);
                }
            }
        }
        stack.remove(id);
        visited.insert(id.to_string());
        None
    }
}
