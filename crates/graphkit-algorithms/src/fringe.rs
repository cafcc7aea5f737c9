//! Traversal fringes
//!
//! The fringe is the frontier of nodes a traversal has yet to process. Its
//! removal discipline alone decides the traversal strategy: first-in-first-out
//! gives breadth-first order, last-in-first-out gives depth-first order.

use super::common::NodeId;
use std::collections::VecDeque;

/// Removal discipline for a traversal frontier.
pub trait Fringe {
    fn push(&mut self, node: NodeId);

    /// Removes the next node according to the discipline.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending node.
    fn clear(&mut self);

    fn push_all<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = NodeId>,
        Self: Sized,
    {
        for node in nodes {
            self.push(node);
        }
    }
}

/// First-in-first-out fringe (breadth-first).
#[derive(Debug, Clone, Default)]
pub struct Fifo {
    queue: VecDeque<NodeId>,
}

impl Fifo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Fifo {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl Fringe for Fifo {
    fn push(&mut self, node: NodeId) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last-in-first-out fringe (depth-first).
#[derive(Debug, Clone, Default)]
pub struct Lifo {
    stack: Vec<NodeId>,
}

impl Lifo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Lifo {
            stack: Vec::with_capacity(capacity),
        }
    }
}

impl Fringe for Lifo {
    fn push(&mut self, node: NodeId) {
        self.stack.push(node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}
