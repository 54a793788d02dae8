//! Static agent declarations: capability vocabulary, capability profiles,
//! cognitive roles, the canonical catalog, and the embedded directive bank.
//!
//! Nothing in this module executes work. It is read-only configuration
//! consulted by routing, planning, and the CLI introspection surface.

pub mod capabilities;
pub mod catalog;
pub mod prompts;
pub mod roles;
pub mod spec;

pub use catalog::{catalog, find_agent, suggest_agents};
pub use spec::AgentSpec;
