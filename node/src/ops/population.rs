use crate::{Inner, Leaf, Node, Quad};

pub trait Population {
    /// if population returns `u64::MAX` the actual population may be larger
    fn population(&self) -> u64;
    fn is_empty(&self) -> bool {
        self.population() == 0
    }
}
impl<T> Population for &T
where
    T: Population,
{
    fn population(&self) -> u64 {
        (**self).population()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl Population for Leaf {
    fn population(&self) -> u64 {
        self.to_bits().count_ones().into()
    }
}

impl<T> Population for Quad<T>
where
    T: Population,
{
    fn population(&self) -> u64 {
        self.iter().map(T::population).fold(0, u64::saturating_add)
    }
    fn is_empty(&self) -> bool {
        self.iter().all(T::is_empty)
    }
}

// computed on first use, nodes never change afterwards
impl Population for Inner {
    fn population(&self) -> u64 {
        *self
            .population
            .get_or_init(|| self.children().population())
    }
}

impl Population for Node {
    fn population(&self) -> u64 {
        match self {
            Node::Leaf(leaf) => leaf.population(),
            Node::Inner(inner) => inner.population(),
        }
    }
}
