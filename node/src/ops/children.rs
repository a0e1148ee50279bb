//! expands Quad<Node> into the grandchildren below it

use crate::{Leaf, Node, Quad};

/// the children of four same-dimension nodes, which are either all leaves or all inner nodes
pub(crate) enum Grandchildren<'n> {
    Cells(Quad<Leaf>),
    Inner(Quad<&'n Quad<Node>>),
}

impl<'n> Quad<&'n Node> {
    pub(crate) fn children(&self) -> Grandchildren<'n> {
        match *self {
            Quad {
                nw: Node::Leaf(nw),
                ne: Node::Leaf(ne),
                sw: Node::Leaf(sw),
                se: Node::Leaf(se),
            } => Grandchildren::Cells(Quad::new(*nw, *ne, *sw, *se)),
            Quad {
                nw: Node::Inner(nw),
                ne: Node::Inner(ne),
                sw: Node::Inner(sw),
                se: Node::Inner(se),
            } => Grandchildren::Inner(Quad::new(
                nw.children(),
                ne.children(),
                sw.children(),
                se.children(),
            )),
            _ => panic!("inconsistent node dimension"),
        }
    }
}
