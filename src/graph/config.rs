//! Graph construction settings

use serde::{Deserialize, Serialize};

/// Capacity hints applied when a graph is created. They only affect
/// allocation, never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Expected number of vertices
    pub vertex_capacity: usize,
    /// Expected number of edges
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            vertex_capacity: 64,
            edge_capacity: 256,
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    pub fn edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = GraphConfig::new().vertex_capacity(10).edge_capacity(20);
        assert_eq!(config.vertex_capacity, 10);
        assert_eq!(config.edge_capacity, 20);
    }

    #[test]
    fn test_default() {
        let config = GraphConfig::default();
        assert_eq!(config.vertex_capacity, 64);
        assert_eq!(config.edge_capacity, 256);
    }
}
