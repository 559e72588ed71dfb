// Copyright 2026 Hypermesh Foundation. All rights reserved.
// Packet Flow Simulator - Errors

use crate::types::NodeId;

/// Errors surfaced by simulation operations.
///
/// Routing failures for auto-generated traffic are not represented here:
/// those units are dropped and counted, never returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("No path found from {from} to {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("at least two distinct nodes are required to pick a destination, found {available}")]
    InsufficientNodes { available: usize },

    #[error("traffic schedule must contain at least one entry")]
    EmptySchedule,

    #[error("link {from}-{to} must declare a positive capacity")]
    InvalidCapacity { from: NodeId, to: NodeId },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Config(err.to_string())
    }
}
