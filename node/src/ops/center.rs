//! builds the helper nodes that straddle the boundaries between children
//!
//! For a node of dimension `d` every helper is `d / 4` wide and they tile its interior in an
//! overlapping 3x3 grid:
//! ```text
//! . . . . | . . . .
//! . nw nw n | n ne ne .
//! . nw nw n | n ne ne .
//! . w  w  c | c e  e  .
//! --------------------
//! . w  w  c | c e  e  .
//! . sw sw s | s se se .
//! . sw sw s | s se se .
//! . . . . | . . . .
//! ```

use super::children::Grandchildren;
use crate::{Leaf, Node, Quad};

impl Quad<&Node> {
    /// the node straddling the shared corner of four nodes, as wide as each of them
    pub(crate) fn center(&self) -> Node {
        match self.children() {
            Grandchildren::Cells(cells) => Leaf::from_cells(
                cells.nw.cells().se,
                cells.ne.cells().sw,
                cells.sw.cells().ne,
                cells.se.cells().nw,
            )
            .into(),
            Grandchildren::Inner(inner) => inner.center().cloned().into(),
        }
    }
}

impl<'t, T> Quad<&'t Quad<T>> {
    pub(crate) fn center(&self) -> Quad<&'t T> {
        Quad {
            nw: &self.nw.se,
            ne: &self.ne.sw,
            sw: &self.sw.ne,
            se: &self.se.nw,
        }
    }
}

impl Node {
    /// the middle half of this node
    ///
    /// # Panics
    /// if this is a leaf
    pub(crate) fn center(&self) -> Node {
        self.expect_children("center").as_ref().center()
    }

    /// the middle half of the `w` `e` pair, placed side by side
    pub(crate) fn horizontal_center(w: &Node, e: &Node) -> Node {
        let w = w.expect_children("horizontal_center");
        let e = e.expect_children("horizontal_center");
        Quad {
            nw: &w.ne,
            ne: &e.nw,
            sw: &w.se,
            se: &e.sw,
        }
        .center()
    }

    /// the middle half of the `n` `s` pair, placed one above the other
    pub(crate) fn vertical_center(n: &Node, s: &Node) -> Node {
        let n = n.expect_children("vertical_center");
        let s = s.expect_children("vertical_center");
        Quad {
            nw: &n.sw,
            ne: &n.se,
            sw: &s.nw,
            se: &s.ne,
        }
        .center()
    }

    /// the middle quarter of this node
    pub(crate) fn center_center(&self) -> Node {
        self.expect_children("center_center")
            .as_ref()
            .map(|child| child.expect_children("center_center"))
            .center()
            .center()
    }
}
