use itertools::iproduct;
use tracing::{trace, trace_span};

use crate::node::record;
use crate::{Leaf, LifeError, LifeResult, Node, Population, Quad};

/// B3/S23
pub(crate) fn life_rule(alive: bool, neighbours: usize) -> bool {
    matches!((alive, neighbours), (true, 2 | 3) | (false, 3))
}

// driver logic

impl Node {
    /// advances by `generations`, expanding before every step so nothing falls off the edge
    ///
    /// The result is centered in whatever universe the last expansion produced, so its
    /// coordinates are not comparable with `self`'s.
    pub fn advance(&self, generations: u64) -> Node {
        let _span = trace_span!("advance", dimension = self.dimension(), generations).entered();

        let mut node = self.clone();
        for _ in 0..generations {
            while node.needs_expansion() {
                node = node.expand_universe();
            }
            node = node.next();
        }

        let stats = Node::cache_stats();
        trace!(stats.hits, stats.misses, stats.next_misses, "cache_perf");
        node
    }
}

// recurse logic

impl Node {
    /// # Panics
    /// if this is a leaf
    pub fn next(&self) -> Node {
        self.try_next().unwrap_or_else(|e| panic!("{e}"))
    }

    /// the center half of this node one generation later
    pub fn try_next(&self) -> LifeResult<Node> {
        let Node::Inner(inner) = self else {
            return Err(LifeError::UnsupportedOnLeaf("next"));
        };
        // only sound because empty nodes are canonical
        if inner.population() == 0 {
            return Ok(inner.children().nw.clone());
        }

        record(|stats| stats.next_calls += 1);
        if let Some(next) = inner.next.get() {
            return Ok(next.clone());
        }
        record(|stats| stats.next_misses += 1);

        let next = if self.is_one_step_larger_than_leaf() {
            record(|stats| stats.new_leaves += 1);
            self.next_leaf().into()
        } else {
            self.next_inner()
        };
        Ok(inner.next.get_or_init(|| next).clone())
    }

    fn next_inner(&self) -> Node {
        let children = self.expect_children("next");
        Hood {
            nw: children.nw.center(),
            n: Node::horizontal_center(&children.nw, &children.ne),
            ne: children.ne.center(),
            w: Node::vertical_center(&children.nw, &children.sw),
            c: self.center_center(),
            e: Node::vertical_center(&children.ne, &children.se),
            sw: children.sw.center(),
            s: Node::horizontal_center(&children.sw, &children.se),
            se: children.se.center(),
        }
        .overlaps_quad()
        .map(|window| Node::from(window).next())
        .into()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
struct Hood<T> {
    nw: T,
    n: T,
    ne: T,
    w: T,
    c: T,
    e: T,
    sw: T,
    s: T,
    se: T,
}
impl<T> Hood<T>
where
    T: Clone,
{
    /// the four 2x2 windows of a 3x3 grid, each sharing its middle row and column with the others
    fn overlaps_quad(self) -> Quad<Quad<T>> {
        Quad {
            nw: Quad {
                nw: self.nw,
                ne: self.n.clone(),
                sw: self.w.clone(),
                se: self.c.clone(),
            },
            ne: Quad {
                nw: self.n,
                ne: self.ne,
                sw: self.c.clone(),
                se: self.e.clone(),
            },
            sw: Quad {
                nw: self.w,
                ne: self.c.clone(),
                sw: self.sw,
                se: self.s.clone(),
            },
            se: Quad {
                nw: self.c,
                ne: self.e,
                sw: self.s,
                se: self.se,
            },
        }
    }
}

// base logic

impl Node {
    /// the center 2x2 of a 4x4 node one generation later
    fn next_leaf(&self) -> Leaf {
        debug_assert!(self.is_one_step_larger_than_leaf());
        let cell = |x: i64, y: i64| {
            let neighbours = iproduct!(-1..=1, -1..=1)
                .filter(|&(dx, dy)| (dx, dy) != (0, 0) && self.is_alive(x + dx, y + dy))
                .count();
            life_rule(self.is_alive(x, y), neighbours)
        };
        Leaf::from_cells(cell(1, 1), cell(2, 1), cell(1, 2), cell(2, 2))
    }
}

// tests

#[cfg(test)]
mod test {
    use itertools::iproduct;
    use proptest::prelude::*;

    use super::life_rule;
    use crate::{test_node, Leaf, LifeError, Node, Population};

    fn leaf(bits: u8) -> Node {
        Leaf::new(bits).unwrap().into()
    }

    /// one generation of the center half of `node`, cell by cell
    fn naive_next(node: &Node) -> Vec<Vec<bool>> {
        let quarter = node.dimension() as i64 / 4;
        (0..quarter * 2)
            .map(|y| {
                (0..quarter * 2)
                    .map(|x| {
                        let (x, y) = (x + quarter, y + quarter);
                        let neighbours = iproduct!(-1..=1, -1..=1)
                            .filter(|&(dx, dy)| {
                                (dx, dy) != (0, 0) && node.is_alive(x + dx, y + dy)
                            })
                            .count();
                        life_rule(node.is_alive(x, y), neighbours)
                    })
                    .collect()
            })
            .collect()
    }

    fn cells(node: &Node) -> Vec<Vec<bool>> {
        let dimension = node.dimension() as i64;
        (0..dimension)
            .map(|y| (0..dimension).map(|x| node.is_alive(x, y)).collect())
            .collect()
    }

    #[test]
    fn rule() {
        assert!(life_rule(false, 3));
        assert!(life_rule(true, 2));
        assert!(life_rule(true, 3));
        assert!(!life_rule(false, 2));
        assert!(!life_rule(true, 1));
        assert!(!life_rule(true, 4));
        assert!(!life_rule(false, 8));
    }

    #[test]
    fn leaf_has_no_next() {
        assert_eq!(leaf(15).try_next(), Err(LifeError::UnsupportedOnLeaf("next")));
    }

    #[test]
    fn empty_next_is_nw() {
        let empty = Node::empty_space(64).unwrap();
        let next = empty.next();
        assert_eq!(&next, empty.nw());
        assert_eq!(next.dimension(), 32);
    }

    #[test]
    fn block_is_still() {
        let block = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        assert_eq!(block.population(), 4);
        let next = block.next();
        assert!(next.is_leaf());
        assert_eq!(next.dimension(), 2);
        assert_eq!(next.population(), 4);

        let expanded = block.expand_universe();
        assert_eq!(expanded.population(), 4);
        assert_eq!(expanded.dimension(), 8);
        let next = expanded.next();
        assert_eq!(next.dimension(), 4);
        assert_eq!(next.population(), 4);
        assert_eq!(next, block);
    }

    #[test]
    fn block_in_large_universe() {
        let mut universe = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        for _ in 0..6 {
            universe = universe.expand_universe();
        }
        assert_eq!(universe.dimension(), 256);
        let next = universe.next();
        assert_eq!(next.dimension(), 128);
        assert_eq!(next.population(), 4);
        assert_eq!(next.expand_universe(), universe);
    }

    #[test]
    fn blinker() {
        let horizontal = test_node! {"
            ........
            ........
            ........
            ..XXX...
            ........
            ........
            ........
            ........
        "};
        let vertical = test_node! {"
            ........
            ........
            ...X....
            ...X....
            ...X....
            ........
            ........
            ........
        "};
        let once = horizontal.expand_universe().next();
        assert_eq!(once, vertical);
        let twice = once.expand_universe().next();
        assert_eq!(twice, horizontal);
    }

    #[test]
    fn glider_moves_diagonally() {
        let glider = test_node! {"
            ................
            ................
            ................
            ................
            ................
            ......X.........
            .......X........
            .....XXX........
            ................
            ................
            ................
            ................
            ................
            ................
            ................
            ................
        "};
        let mut node = glider.clone();
        for _ in 0..4 {
            node = node.expand_universe().next();
            assert_eq!(node.dimension(), 16);
            assert_eq!(node.population(), 5);
        }
        for (x, y) in iproduct!(0..15, 0..15) {
            assert_eq!(glider.is_alive(x, y), node.is_alive(x + 1, y + 1));
        }
        assert!(!node.is_alive(0, 0));
    }

    #[test]
    fn memoized() {
        let node = Node::random_space_seeded(32, 7).unwrap();
        let first = node.next();
        Node::reset_cache_stats();
        let second = node.next();
        let stats = Node::cache_stats();
        assert_eq!(first, second);
        assert_eq!(stats.next_calls, 1);
        assert_eq!(stats.next_misses, 0);
        assert_eq!(stats.new_leaves, 0);
    }

    #[test]
    fn advance_keeps_still_life() {
        let block = Node::new(leaf(8), leaf(4), leaf(2), leaf(1));
        assert_eq!(block.advance(0), block);
        let advanced = block.advance(10);
        assert_eq!(advanced.population(), 4);
        assert_eq!(advanced.dimension(), 8);
    }

    #[test]
    fn advance_glider() {
        let glider = Node::new(leaf(13), leaf(1), leaf(2), leaf(0));
        assert_eq!(glider.population(), 5);
        let mut node = glider;
        for _ in 0..20 {
            node = node.advance(1);
            assert_eq!(node.population(), 5);
        }
    }

    proptest! {
        #[test]
        fn next_matches_naive_step(seed: u64) {
            let node = Node::random_space_seeded(16, seed).unwrap();
            let next = node.next();
            prop_assert_eq!(next.dimension(), 8);
            prop_assert_eq!(cells(&next), naive_next(&node));
        }

        #[test]
        fn next_matches_naive_step_sparse(cells_alive in proptest::collection::vec((0..32i64, 0..32i64), 0..40)) {
            let mut node = Node::empty_space(32).unwrap();
            for (x, y) in cells_alive {
                node = node.with_cell(x, y, true).unwrap();
            }
            prop_assert_eq!(cells(&node.next()), naive_next(&node));
        }
    }
}
