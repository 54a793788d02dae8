use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloeError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("Cycle detected through node: {0}")]
    CycleDetected(String),
    #[error("Agent not found in catalog: {0}")]
    AgentNotFound(String),
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
