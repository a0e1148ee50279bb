use crate::{LifeError, LifeResult, Node, Quadrant};

impl Node {
    /// x grows to the east and y grows to the south, `(0, 0)` is the north west corner
    ///
    /// # Panics
    /// if the cell is outside of this node
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.try_is_alive(x, y).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_is_alive(&self, x: i64, y: i64) -> LifeResult<bool> {
        let (x, y) = self.check_bounds(x, y)?;
        Ok(self.get_in_bounds(x, y))
    }

    /// a copy of this node with one cell changed
    pub fn with_cell(&self, x: i64, y: i64, alive: bool) -> LifeResult<Node> {
        let (x, y) = self.check_bounds(x, y)?;
        Ok(self.set_in_bounds(x, y, alive))
    }

    fn check_bounds(&self, x: i64, y: i64) -> LifeResult<(u64, u64)> {
        let dimension = self.dimension();
        match (u64::try_from(x), u64::try_from(y)) {
            (Ok(ux), Ok(uy)) if ux < dimension && uy < dimension => Ok((ux, uy)),
            _ => Err(LifeError::OutOfBounds { x, y, dimension }),
        }
    }

    fn get_in_bounds(&self, x: u64, y: u64) -> bool {
        let half = self.dimension() / 2;
        let q = Quadrant::from_halves(x >= half, y >= half);
        match self {
            Node::Leaf(leaf) => leaf.get_xy(x, y),
            Node::Inner(inner) => inner.children()[q].get_in_bounds(x % half, y % half),
        }
    }

    fn set_in_bounds(&self, x: u64, y: u64, alive: bool) -> Node {
        let half = self.dimension() / 2;
        let q = Quadrant::from_halves(x >= half, y >= half);
        match self {
            Node::Leaf(leaf) => leaf.set(q, alive).into(),
            Node::Inner(inner) => {
                let mut children = inner.children().clone();
                children[q] = children[q].set_in_bounds(x % half, y % half, alive);
                children.into()
            }
        }
    }
}
