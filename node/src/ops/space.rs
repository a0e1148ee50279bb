//! builds universes and grows them
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::util::validate_dimension;
use crate::{Leaf, LifeResult, Node, Population, Quad, Quadrant};

impl Node {
    /// below this every node is treated as needing expansion
    pub const MIN_EXPANSION_CHECK_DIMENSION: u64 = 16;

    /// the canonical all dead universe
    pub fn empty_space(dimension: u64) -> LifeResult<Node> {
        Ok(empty(validate_dimension(dimension)?))
    }

    /// fills a universe leaf by leaf, quadrants are visited in NW, NE, SW, SE order
    pub fn init_space(dimension: u64, mut leaf_factory: impl FnMut() -> Leaf) -> LifeResult<Node> {
        Ok(init(validate_dimension(dimension)?, &mut leaf_factory))
    }

    pub fn random_space(dimension: u64) -> LifeResult<Node> {
        Self::random_space_with(dimension, &mut rand::thread_rng())
    }

    /// the same seed always builds the same universe
    pub fn random_space_seeded(dimension: u64, seed: u64) -> LifeResult<Node> {
        Self::random_space_with(dimension, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn random_space_with(dimension: u64, rng: &mut impl Rng) -> LifeResult<Node> {
        Self::init_space(dimension, || Leaf::ALL[rng.gen_range(0..Leaf::ALL.len())])
    }

    /// doubles the dimension, keeping the contents centered with a dead border around them
    ///
    /// # Panics
    /// if the result would be larger than `MAX_DIMENSION`
    pub fn expand_universe(&self) -> Node {
        match self {
            Node::Leaf(leaf) => leaf.expand().into(),
            Node::Inner(inner) => {
                let border = empty(inner.dimension() / 2);
                inner
                    .children()
                    .clone()
                    .expand(border)
                    .map(Node::from)
                    .into()
            }
        }
    }

    /// whether any live cell is outside the middle quarter of this node
    ///
    /// Compares each child with its own innermost grandchild's innermost child, so it only
    /// reads cached populations.
    pub fn needs_expansion(&self) -> bool {
        if self.dimension() < Self::MIN_EXPANSION_CHECK_DIMENSION {
            return true;
        }
        let children = self.expect_children("needs_expansion");
        Quadrant::iter_all().any(|q| {
            let child = &children[q];
            let inner_corner = child.child(q.opposite()).child(q.opposite());
            child.population() != inner_corner.population()
        })
    }
}

fn empty(dimension: u64) -> Node {
    if dimension == Leaf::DIMENSION {
        Leaf::empty().into()
    } else {
        let half = empty(dimension / 2);
        Quad::new(half.clone(), half.clone(), half.clone(), half).into()
    }
}

fn init(dimension: u64, leaf_factory: &mut impl FnMut() -> Leaf) -> Node {
    if dimension == Leaf::DIMENSION {
        leaf_factory().into()
    } else {
        let half = dimension / 2;
        let nw = init(half, leaf_factory);
        let ne = init(half, leaf_factory);
        let sw = init(half, leaf_factory);
        let se = init(half, leaf_factory);
        Quad::new(nw, ne, sw, se).into()
    }
}
