use std::cell::{OnceCell, RefCell};
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::{Leaf, LifeError, LifeResult, Quad, Quadrant};

/// the structural identity of an inner node: its dimension and the identities of its children
pub(crate) type NodeKey = (u64, Quad<Node>);

/// Counters describing how well canonicalization and memoization are doing
///
/// `nodes` is the size of the canonical cache when the stats were read, every other field is
/// a counter since the last `Node::reset_cache_stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub nodes: usize,
    pub next_calls: u64,
    pub next_misses: u64,
    pub new_leaves: u64,
}

pub(crate) struct NodeCache {
    pub(crate) nodes: HashMap<NodeKey, Node>,
    pub(crate) stats: CacheStats,
}
impl NodeCache {
    fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            stats: CacheStats::default(),
        }
    }
    fn intern(&mut self, dimension: u64, children: Quad<Node>) -> Node {
        let key = (dimension, children);
        if let Some(node) = self.nodes.get(&key) {
            self.stats.hits += 1;
            return node.clone();
        }
        self.stats.misses += 1;
        let node = Node::Inner(Rc::new(Inner::new(dimension, key.1.clone())));
        self.nodes.insert(key, node.clone());
        node
    }
}
thread_local! {
    static NODE_CACHE: RefCell<NodeCache> = RefCell::new(NodeCache::new());
}

/// borrows the canonical cache of this thread, `f` must not construct nodes
pub(crate) fn with_cache<R>(f: impl FnOnce(&mut NodeCache) -> R) -> R {
    NODE_CACHE.with_borrow_mut(f)
}
pub(crate) fn record(f: impl FnOnce(&mut CacheStats)) {
    with_cache(|cache| f(&mut cache.stats));
}

/// A square region of the universe
///
/// Inner nodes only exist in canonical form, so two nodes are equal exactly when they describe
/// the same cells. Equality and hashing look at identities, never at subtrees.
#[derive(Clone)]
pub enum Node {
    Leaf(Leaf),
    Inner(Rc<Inner>),
}

pub struct Inner {
    children: Quad<Node>,
    dimension: u64,
    pub(crate) population: OnceCell<u64>,
    pub(crate) next: OnceCell<Node>,
}
impl Inner {
    fn new(dimension: u64, children: Quad<Node>) -> Self {
        Self {
            children,
            dimension,
            population: OnceCell::new(),
            next: OnceCell::new(),
        }
    }
    pub fn children(&self) -> &Quad<Node> {
        &self.children
    }
    pub fn dimension(&self) -> u64 {
        self.dimension
    }
    pub(crate) fn key(&self) -> NodeKey {
        (self.dimension, self.children.clone())
    }
}

impl Node {
    /// coordinates are `i64` so the largest universe is `2^62` cells wide
    pub const MAX_DIMENSION: u64 = 1 << 62;

    /// # Panics
    /// if the children don't share a dimension
    pub fn new(nw: Node, ne: Node, sw: Node, se: Node) -> Self {
        Self::try_new(Quad { nw, ne, sw, se }).unwrap_or_else(|e| panic!("{e}"))
    }

    /// returns the canonical node with these children
    pub fn try_new(children: Quad<Node>) -> LifeResult<Self> {
        let child_dimension = children.nw.dimension();
        if children.iter().any(|c| c.dimension() != child_dimension) {
            return Err(LifeError::MismatchedChildren {
                nw: children.nw.dimension(),
                ne: children.ne.dimension(),
                sw: children.sw.dimension(),
                se: children.se.dimension(),
            });
        }
        let dimension = child_dimension * 2;
        if dimension > Self::MAX_DIMENSION {
            return Err(LifeError::DimensionTooLarge(dimension));
        }
        Ok(with_cache(|cache| cache.intern(dimension, children)))
    }

    pub fn cache_stats() -> CacheStats {
        with_cache(|cache| CacheStats {
            nodes: cache.nodes.len(),
            ..cache.stats
        })
    }
    pub fn reset_cache_stats() {
        record(|stats| *stats = CacheStats::default());
    }
    pub fn cache_len() -> usize {
        with_cache(|cache| cache.nodes.len())
    }
}
impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}
impl From<Quad<Leaf>> for Node {
    fn from(leaves: Quad<Leaf>) -> Self {
        leaves.map(Node::from).into()
    }
}
impl From<Quad<Node>> for Node {
    fn from(children: Quad<Node>) -> Self {
        Self::try_new(children).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Node {
    pub fn dimension(&self) -> u64 {
        match self {
            Node::Leaf(_) => Leaf::DIMENSION,
            Node::Inner(inner) => inner.dimension,
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }
    /// an inner node whose children are all leaves, which is a 4x4 node
    pub fn is_one_step_larger_than_leaf(&self) -> bool {
        match self {
            Node::Leaf(_) => false,
            Node::Inner(inner) => inner.children.nw.is_leaf(),
        }
    }
    pub fn leaf(&self) -> Option<Leaf> {
        match self {
            Node::Leaf(leaf) => Some(*leaf),
            Node::Inner(_) => None,
        }
    }
    pub fn children(&self) -> Option<&Quad<Node>> {
        match self {
            Node::Leaf(_) => None,
            Node::Inner(inner) => Some(&inner.children),
        }
    }
    pub fn try_children(&self) -> LifeResult<&Quad<Node>> {
        self.children()
            .ok_or(LifeError::UnsupportedOnLeaf("children"))
    }
    pub(crate) fn expect_children(&self, operation: &'static str) -> &Quad<Node> {
        match self {
            Node::Leaf(_) => panic!("{}", LifeError::UnsupportedOnLeaf(operation)),
            Node::Inner(inner) => &inner.children,
        }
    }

    /// # Panics
    /// if this is a leaf
    pub fn child(&self, q: Quadrant) -> &Node {
        &self.expect_children("child")[q]
    }
    /// # Panics
    /// if this is a leaf
    pub fn nw(&self) -> &Node {
        &self.expect_children("nw").nw
    }
    /// # Panics
    /// if this is a leaf
    pub fn ne(&self) -> &Node {
        &self.expect_children("ne").ne
    }
    /// # Panics
    /// if this is a leaf
    pub fn sw(&self) -> &Node {
        &self.expect_children("sw").sw
    }
    /// # Panics
    /// if this is a leaf
    pub fn se(&self) -> &Node {
        &self.expect_children("se").se
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(lhs), Node::Leaf(rhs)) => lhs == rhs,
            (Node::Inner(lhs), Node::Inner(rhs)) => Rc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}
impl Eq for Node {}
impl Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Node::Leaf(leaf) => {
                state.write_u8(0);
                leaf.hash(state);
            }
            Node::Inner(inner) => {
                state.write_u8(1);
                std::ptr::hash(Rc::as_ptr(inner), state);
            }
        }
    }
}
impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Leaf(leaf) => write!(f, "Node( {leaf:?} )"),
            Node::Inner(inner) => write!(f, "Node( {:p} x{} )", Rc::as_ptr(inner), inner.dimension),
        }
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use crate::{Leaf, LifeError, Node, Population, Quad};

    fn leaf(bits: u8) -> Node {
        Leaf::new(bits).unwrap().into()
    }

    #[test]
    fn leaves_are_singletons() {
        for bits in 0..16 {
            assert_eq!(leaf(bits), leaf(bits));
            assert_eq!(Leaf::new(bits).unwrap(), Leaf::ALL[usize::from(bits)]);
        }
        assert_ne!(leaf(3), leaf(5));
    }

    #[test]
    fn canonical_instances() {
        let a = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        let b = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        let (Node::Inner(a_inner), Node::Inner(b_inner)) = (&a, &b) else {
            panic!("expected inner nodes");
        };
        assert!(Rc::ptr_eq(a_inner, b_inner));
        assert_eq!(a, b);

        let c = Node::new(leaf(8), leaf(4), leaf(2), leaf(0));
        assert_ne!(a, c);

        let big_a = Node::new(a.clone(), c.clone(), a.clone(), c.clone());
        let big_b = Node::new(b.clone(), c.clone(), b, c);
        assert_eq!(big_a, big_b);
    }

    #[test]
    fn hits_and_misses() {
        // a value no other test on this thread builds
        let unique = Node::new(leaf(13), leaf(11), leaf(7), leaf(14));
        Node::reset_cache_stats();
        let again = Node::new(leaf(13), leaf(11), leaf(7), leaf(14));
        let stats = Node::cache_stats();
        assert_eq!(unique, again);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 0);

        let _ = Node::new(again.clone(), again.clone(), again.clone(), unique.clone());
        let _ = Node::new(again.clone(), again.clone(), again, unique);
        let stats = Node::cache_stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!(stats.nodes >= 2);

        Node::reset_cache_stats();
        let stats = Node::cache_stats();
        assert_eq!((stats.hits, stats.misses), (0, 0));
    }

    #[test]
    fn accessors() {
        let block = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        assert_eq!(block.dimension(), 4);
        assert_eq!(block.population(), 4);
        assert!(!block.is_leaf());
        assert!(block.is_one_step_larger_than_leaf());
        assert_eq!(block.nw(), &leaf(8));
        assert_eq!(block.ne(), &leaf(4));
        assert_eq!(block.sw(), &leaf(2));
        assert_eq!(block.se(), &leaf(1));

        let bigger = Node::new(block.clone(), block.clone(), block.clone(), block);
        assert_eq!(bigger.dimension(), 8);
        assert!(!bigger.is_one_step_larger_than_leaf());

        assert!(leaf(0).is_leaf());
        assert!(!leaf(0).is_one_step_larger_than_leaf());
        assert_eq!(leaf(0).dimension(), 2);
    }

    #[test]
    fn mismatched_children() {
        let block = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        let result = Node::try_new(Quad::new(block, leaf(0), leaf(0), leaf(0)));
        assert_eq!(
            result,
            Err(LifeError::MismatchedChildren {
                nw: 4,
                ne: 2,
                sw: 2,
                se: 2
            })
        );
    }

    #[test]
    #[should_panic(expected = "children must share a dimension")]
    fn mismatched_children_panics() {
        let block = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        let _ = Node::new(leaf(0), block, leaf(0), leaf(0));
    }

    #[test]
    fn leaf_has_no_children() {
        assert_eq!(
            leaf(5).try_children(),
            Err(LifeError::UnsupportedOnLeaf("children"))
        );
        assert!(leaf(5).children().is_none());
    }

    #[test]
    #[should_panic(expected = "'nw' is not supported on a leaf")]
    fn leaf_nw_panics() {
        let _ = leaf(5).nw();
    }
}
