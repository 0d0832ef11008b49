//! Search node arena.
//!
//! Nodes form a tree through parent links. Rather than reference-counted
//! back pointers, every node lives in a [`NodeArena`] and refers to its
//! parent by [`NodeId`]. Path reconstruction follows the ids back to the
//! root, which is O(path length).

use crate::problem::{Cost, SearchProblem};

/// Index of a node inside its owning [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One step of a discovered path.
///
/// A root node has no parent, no action and a zero path cost. Any other node
/// satisfies `path_cost == parent.path_cost + step_cost(parent.state, action)`;
/// [`NodeArena::child_node`] is the only way to build one, so the invariant
/// holds by construction.
#[derive(Debug, Clone)]
pub struct Node<S, A, C> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    path_cost: C,
    depth: usize,
}

impl<S, A, C: Copy> Node<S, A, C> {
    /// Returns the wrapped state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns the parent node id (None for root).
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the action taken from the parent (None for root).
    #[inline]
    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Returns the cumulative cost from the root.
    #[inline]
    pub fn path_cost(&self) -> C {
        self.path_cost
    }

    /// Returns the number of edges between this node and the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true if this node has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Owning storage for all nodes created during one search call.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A, C> {
    nodes: Vec<Node<S, A, C>>,
}

impl<S, A, C> Default for NodeArena<S, A, C> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<S: Clone, A, C: Cost> NodeArena<S, A, C> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a root node for `state`.
    pub fn root(&mut self, state: S) -> NodeId {
        self.push(Node {
            state,
            parent: None,
            action: None,
            path_cost: C::zero(),
            depth: 0,
        })
    }

    /// Applies `action` to the state of `parent` and stores the successor.
    ///
    /// # Example
    ///
    /// ```
    /// use searchforge_core::{GraphProblem, NodeArena, SearchProblem};
    ///
    /// let problem = GraphProblem::new(&[0, 1, 2], &[(0, 1), (1, 2)], 0, vec![2]).unwrap();
    /// let mut arena = NodeArena::new();
    /// let root = arena.root(*problem.init_state());
    /// let child = arena.child_node(&problem, root, 1);
    ///
    /// assert_eq!(*arena.get(child).state(), 1);
    /// assert_eq!(arena.get(child).path_cost(), 1);
    /// assert_eq!(arena.path_to(child), vec![0, 1]);
    /// ```
    pub fn child_node<P>(&mut self, problem: &P, parent: NodeId, action: A) -> NodeId
    where
        P: SearchProblem<State = S, Action = A, Cost = C> + ?Sized,
    {
        let parent_node = &self.nodes[parent.0];
        let (state, step_cost) = problem.successor(&parent_node.state, &action);
        let path_cost = parent_node.path_cost + step_cost;
        let depth = parent_node.depth + 1;
        self.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            path_cost,
            depth,
        })
    }

    /// Returns the node stored under `id`.
    #[inline]
    pub fn get(&self, id: NodeId) -> &Node<S, A, C> {
        &self.nodes[id.0]
    }

    /// Returns the state stored under `id`.
    #[inline]
    pub fn state(&self, id: NodeId) -> &S {
        &self.nodes[id.0].state
    }

    /// Walks parent links from `id` to the root and returns the states in
    /// root-to-`id` order.
    pub fn path_to(&self, id: NodeId) -> Vec<S> {
        let mut path: Vec<S> =
            std::iter::successors(Some(id), |&current| self.nodes[current.0].parent)
                .map(|current| self.nodes[current.0].state.clone())
                .collect();
        path.reverse();
        path
    }

    /// Returns the number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node was created.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, node: Node<S, A, C>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }
}
