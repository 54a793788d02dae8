//! Fundamental types and plumbing: errors, configuration, and the
//! planning session.

pub mod config;
pub mod error;
pub mod session;
