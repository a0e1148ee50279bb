use hashlife_node::{Leaf, LifeResult, Node, Quad};

fn leaf(bits: usize) -> Node {
    Leaf::ALL[bits].into()
}

/// a single row of 512 live cells along the north edge
pub fn horizontal_line() -> LifeResult<Node> {
    let mut line = Node::try_new(Quad::new(leaf(3), leaf(3), leaf(0), leaf(0)))?;
    for _ in 0..7 {
        let empty = Node::empty_space(line.dimension())?;
        line = Node::try_new(Quad::new(line.clone(), line, empty.clone(), empty))?;
    }
    Ok(line)
}

pub fn blinker() -> Node {
    Node::new(leaf(3), leaf(1), leaf(0), leaf(0))
}

pub fn glider() -> Node {
    Node::new(leaf(13), leaf(1), leaf(2), leaf(0))
}
