//! Named quadrants and the four-slot container used for children, helper windows and expansion

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}
impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Quadrant::NW, Quadrant::NE, Quadrant::SW, Quadrant::SE];

    /// x grows to the east and y grows to the south
    pub fn from_halves(east: bool, south: bool) -> Self {
        match (east, south) {
            (false, false) => Self::NW,
            (true, false) => Self::NE,
            (false, true) => Self::SW,
            (true, true) => Self::SE,
        }
    }

    pub fn is_east(self) -> bool {
        matches!(self, Self::NE | Self::SE)
    }
    pub fn is_south(self) -> bool {
        matches!(self, Self::SW | Self::SE)
    }

    /// the corner diagonally across, which for a child is the corner touching the parent's center
    pub fn opposite(self) -> Self {
        match self {
            Self::NW => Self::SE,
            Self::NE => Self::SW,
            Self::SW => Self::NE,
            Self::SE => Self::NW,
        }
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        Self::ALL.into_iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    pub fn new(nw: T, ne: T, sw: T, se: T) -> Self {
        Self { nw, ne, sw, se }
    }
    pub fn as_ref(&self) -> Quad<&T> {
        Quad {
            nw: &self.nw,
            ne: &self.ne,
            sw: &self.sw,
            se: &self.se,
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(|q| &self[q])
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Quad<U> {
        Quad {
            nw: f(self.nw),
            ne: f(self.ne),
            sw: f(self.sw),
            se: f(self.se),
        }
    }
    /// Moves each entry to the innermost corner of a new quad filled with `empty`
    ///
    /// ```text
    /// .  .  |  .  .
    /// .  nw | ne  .
    /// ------+------
    /// .  sw | se  .
    /// .  .  |  .  .
    /// ```
    pub fn expand(self, empty: T) -> Quad<Quad<T>>
    where
        T: Clone,
    {
        Quad {
            nw: Quad {
                nw: empty.clone(),
                ne: empty.clone(),
                sw: empty.clone(),
                se: self.nw,
            },
            ne: Quad {
                nw: empty.clone(),
                ne: empty.clone(),
                sw: self.ne,
                se: empty.clone(),
            },
            sw: Quad {
                nw: empty.clone(),
                ne: self.sw,
                sw: empty.clone(),
                se: empty.clone(),
            },
            se: Quad {
                nw: self.se,
                ne: empty.clone(),
                sw: empty.clone(),
                se: empty,
            },
        }
    }
}
impl<T: Clone> Quad<&T> {
    pub fn cloned(self) -> Quad<T> {
        self.map(Clone::clone)
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}
