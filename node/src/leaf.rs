use std::fmt::Debug;

use crate::{LifeError, LifeResult, Quad, Quadrant};

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// A 2x2 block of cells
///
/// There are only 16 of these, all of them live in `Leaf::ALL`, so a leaf's value is its identity.
///
/// # implementation details
/// one bit per cell, a cell is alive if its bit is set
/// ```text
/// 1 2
/// 4 8
/// ```
pub struct Leaf {
    bits: u8,
}
impl Leaf {
    pub const DIMENSION: u64 = 2;
    pub const ALL: [Leaf; 16] = {
        let mut all = [Leaf { bits: 0 }; 16];
        let mut bits = 0;
        while bits < 16 {
            all[bits as usize] = Leaf { bits };
            bits += 1;
        }
        all
    };

    const NW: u8 = 0x1;
    const NE: u8 = 0x2;
    const SW: u8 = 0x4;
    const SE: u8 = 0x8;

    pub fn empty() -> Self {
        Self::ALL[0]
    }
    pub fn new(bits: u8) -> LifeResult<Self> {
        Self::ALL
            .get(usize::from(bits))
            .copied()
            .ok_or(LifeError::InvalidLeaf(bits))
    }
    pub fn from_cells(nw: bool, ne: bool, sw: bool, se: bool) -> Self {
        let mut bits = 0;
        if nw {
            bits |= Self::NW;
        }
        if ne {
            bits |= Self::NE;
        }
        if sw {
            bits |= Self::SW;
        }
        if se {
            bits |= Self::SE;
        }
        Self::ALL[usize::from(bits)]
    }
    pub fn from_quad(cells: Quad<bool>) -> Self {
        Self::from_cells(cells.nw, cells.ne, cells.sw, cells.se)
    }
    pub fn to_bits(self) -> u8 {
        self.bits
    }
    pub fn cells(self) -> Quad<bool> {
        Quad {
            nw: self.bits & Self::NW != 0,
            ne: self.bits & Self::NE != 0,
            sw: self.bits & Self::SW != 0,
            se: self.bits & Self::SE != 0,
        }
    }
    pub fn get(self, q: Quadrant) -> bool {
        self.cells()[q]
    }
    /// `x` and `y` must both be 0 or 1
    pub(crate) fn get_xy(self, x: u64, y: u64) -> bool {
        debug_assert!(x < Self::DIMENSION && y < Self::DIMENSION);
        self.get(Quadrant::from_halves(x == 1, y == 1))
    }
    pub(crate) fn set(self, q: Quadrant, alive: bool) -> Self {
        let mut cells = self.cells();
        cells[q] = alive;
        Self::from_quad(cells)
    }
    /// each cell moves to the innermost corner of its own new leaf
    pub(crate) fn expand(self) -> Quad<Leaf> {
        self.cells().expand(false).map(Leaf::from_quad)
    }
}
impl Default for Leaf {
    fn default() -> Self {
        Self::empty()
    }
}
impl Debug for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Leaf({:04b})", self.bits)
    }
}
