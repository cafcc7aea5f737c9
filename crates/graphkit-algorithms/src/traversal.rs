//! Generalized fringe-based traversal
//!
//! One loop serves breadth-first, depth-first and any other discipline: the
//! engine repeatedly removes a node from its [`Fringe`], visits it if it is
//! unmarked, and schedules its successors. The fringe's removal order decides
//! the strategy, and a [`Visitor`] decides what happens at each step.
//!
//! Traversals may be interrupted by a visitor and resumed later. Marks survive
//! between calls to [`Traversal::traverse`] until [`Traversal::clear`].

use super::common::{Marks, NodeId, Topology};
use super::fringe::{Fifo, Fringe, Lifo};
use tracing::debug;

/// Callbacks invoked by [`Traversal`]. Every hook has a default, so a visitor
/// only overrides what it needs.
pub trait Visitor {
    /// Called once when `node` is first reached. Returning false stops the
    /// traversal immediately.
    fn visit(&mut self, _node: NodeId) -> bool {
        true
    }

    /// Whether `node` should be revisited after its successors are processed.
    /// Generally only useful for depth-first traversals.
    fn should_post_visit(&self, _node: NodeId) -> bool {
        false
    }

    /// Called once after every successor of `node` has been processed.
    /// Returning false stops the traversal immediately.
    fn post_visit(&mut self, _node: NodeId) -> bool {
        true
    }

    /// Whether the successors of `node` are scheduled in reverse order.
    fn reverse_successors(&self, _node: NodeId) -> bool {
        false
    }

    /// Decides whether successor `to` of `from` goes onto the fringe.
    /// By default only unmarked successors are scheduled.
    fn process_successor(&mut self, _from: NodeId, _to: NodeId, marked: bool) -> bool {
        !marked
    }
}

/// Walks the graph without observing anything; useful to mark reachability.
impl Visitor for () {}

/// Adapter that enables post-visits for every node, on top of another visitor.
///
/// The inner visitor's `should_post_visit` is never consulted; every other
/// hook is forwarded.
#[derive(Debug, Clone, Default)]
pub struct DepthFirst<V> {
    inner: V,
}

impl<V> DepthFirst<V> {
    pub fn new(inner: V) -> Self {
        DepthFirst { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut V {
        &mut self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Visitor> Visitor for DepthFirst<V> {
    fn visit(&mut self, node: NodeId) -> bool {
        self.inner.visit(node)
    }

    fn should_post_visit(&self, _node: NodeId) -> bool {
        true
    }

    fn post_visit(&mut self, node: NodeId) -> bool {
        self.inner.post_visit(node)
    }

    fn reverse_successors(&self, node: NodeId) -> bool {
        self.inner.reverse_successors(node)
    }

    fn process_successor(&mut self, from: NodeId, to: NodeId, marked: bool) -> bool {
        self.inner.process_successor(from, to, marked)
    }
}

/// Records the visit and post-visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitOrder {
    pub visited: Vec<NodeId>,
    pub post_visited: Vec<NodeId>,
}

impl Visitor for VisitOrder {
    fn visit(&mut self, node: NodeId) -> bool {
        self.visited.push(node);
        true
    }

    fn post_visit(&mut self, node: NodeId) -> bool {
        self.post_visited.push(node);
        true
    }
}

/// How a call to [`Traversal::traverse`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalOutcome {
    /// The fringe was exhausted.
    Completed,
    /// A visitor hook returned false. The remaining fringe is kept, so a later
    /// `traverse` call resumes where this one stopped.
    Cancelled,
}

/// Traversal engine over `G`, using fringe `F` and visitor `V`.
pub struct Traversal<'g, G: Topology, F: Fringe, V: Visitor> {
    graph: &'g G,
    fringe: F,
    visitor: V,
    marked: Marks,
    post_visited: Marks,
    /// Node whose visit cancelled the last run before its successors were
    /// scheduled.
    interrupted: Option<NodeId>,
    /// Reused buffer for successor scheduling.
    scratch: Vec<NodeId>,
}

impl<'g, G: Topology, F: Fringe, V: Visitor> Traversal<'g, G, F, V> {
    /// A traversal of `graph` using `fringe` as the frontier.
    pub fn new(graph: &'g G, fringe: F, visitor: V) -> Self {
        let max_node = graph.max_node();
        Traversal {
            graph,
            fringe,
            visitor,
            marked: Marks::with_max_node(max_node),
            post_visited: Marks::with_max_node(max_node),
            interrupted: None,
            scratch: Vec::new(),
        }
    }

    /// Seeds the fringe with `seeds` and runs until the fringe is empty or a
    /// hook cancels. Seeds the graph does not contain are ignored.
    ///
    /// After a cancel, the next call first finishes expanding the node whose
    /// visit cancelled, then continues with the pending fringe.
    pub fn traverse<I>(&mut self, seeds: I) -> TraversalOutcome
    where
        I: IntoIterator<Item = NodeId>,
    {
        if let Some(node) = self.interrupted.take() {
            self.schedule_successors(node);
        }

        let graph = self.graph;
        self.fringe
            .push_all(seeds.into_iter().filter(|&node| graph.contains(node)));

        while let Some(node) = self.fringe.pop() {
            if self.marked.mark(node) {
                if self.visitor.should_post_visit(node) {
                    self.fringe.push(node);
                }
                if !self.visitor.visit(node) {
                    self.interrupted = Some(node);
                    return self.cancelled(node);
                }
                self.schedule_successors(node);
            } else if self.visitor.should_post_visit(node) && self.post_visited.mark(node) {
                if !self.visitor.post_visit(node) {
                    return self.cancelled(node);
                }
            }
        }

        debug!(visited = self.marked.len(), "traversal completed");
        TraversalOutcome::Completed
    }

    /// Single-seed form of [`traverse`](Self::traverse).
    pub fn traverse_from(&mut self, start: NodeId) -> TraversalOutcome {
        self.traverse(std::iter::once(start))
    }

    /// Unmarks every node and drops any pending fringe, so the next traversal
    /// starts from scratch.
    pub fn clear(&mut self) {
        self.marked.clear();
        self.post_visited.clear();
        self.fringe.clear();
        self.interrupted = None;
    }

    /// Returns true when a cancelled run left work for the next `traverse`.
    pub fn has_pending(&self) -> bool {
        self.interrupted.is_some() || !self.fringe.is_empty()
    }

    pub fn is_marked(&self, node: NodeId) -> bool {
        self.marked.is_marked(node)
    }

    pub fn is_post_visited(&self, node: NodeId) -> bool {
        self.post_visited.is_marked(node)
    }

    /// Number of nodes visited since the last clear.
    pub fn visited_count(&self) -> usize {
        self.marked.len()
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    fn schedule_successors(&mut self, node: NodeId) {
        self.scratch.clear();
        self.scratch.extend(self.graph.successors(node));
        if self.visitor.reverse_successors(node) {
            self.scratch.reverse();
        }

        for &next in &self.scratch {
            let marked = self.marked.is_marked(next);
            if self.visitor.process_successor(node, next, marked) {
                self.fringe.push(next);
            }
        }
    }

    fn cancelled(&self, node: NodeId) -> TraversalOutcome {
        debug!(node, pending = self.fringe.len(), "traversal cancelled by visitor");
        TraversalOutcome::Cancelled
    }
}

impl<'g, G: Topology, V: Visitor> Traversal<'g, G, Fifo, V> {
    /// Breadth-first traversal.
    pub fn breadth_first(graph: &'g G, visitor: V) -> Self {
        Self::new(graph, Fifo::with_capacity(graph.node_count()), visitor)
    }
}

impl<'g, G: Topology, V: Visitor> Traversal<'g, G, Lifo, DepthFirst<V>> {
    /// Depth-first traversal with post-visits enabled.
    pub fn depth_first(graph: &'g G, visitor: V) -> Self {
        Self::new(graph, Lifo::with_capacity(graph.node_count()), DepthFirst::new(visitor))
    }
}
