use std::collections::HashMap;
use std::mem;

use tracing::debug;

use crate::node::{with_cache, NodeKey};
use crate::Node;

impl Node {
    /// rebuilds this thread's canonical cache from the nodes reachable from `self`
    ///
    /// Reachable nodes, including memoized generations, are kept as the same instances. Any
    /// other node still held by the caller stops being canonical, so building it again makes a
    /// different instance. Returns how many nodes were kept.
    pub fn garbage_collect(&self) -> usize {
        let mut live = HashMap::new();
        mark(self, &mut live);
        let after = live.len();

        let dead = with_cache(|cache| mem::replace(&mut cache.nodes, live));
        debug!(before = dead.len(), after, "garbage_collect");
        after
    }
}

fn mark(node: &Node, live: &mut HashMap<NodeKey, Node>) {
    let Node::Inner(inner) = node else {
        return;
    };
    let key = inner.key();
    if live.contains_key(&key) {
        return;
    }
    for child in inner.children().iter() {
        mark(child, live);
    }
    if let Some(next) = inner.next.get() {
        mark(next, live);
    }
    live.insert(key, node.clone());
}
