use std::fmt::{Display, Formatter, Write};

use itertools::Itertools;

use crate::util::validate_dimension;
use crate::{Leaf, LifeError, LifeResult, Node, Quad};

// macros make formatting nicer

/// panics on a malformed pattern, see `Node::from_test_format`
#[macro_export]
macro_rules! test_node {
    {$s:literal} => {
        $crate::Node::from_test_format($s).expect("malformed test pattern")
    };
}
pub use test_node;

impl Node {
    /// largest node `Display` draws cell by cell
    pub const MAX_RENDER_DIMENSION: u64 = 16;

    /// expects a square of `'.'`s (dead) and `'X'`s or `'o'`s (alive)
    ///
    /// Rows are separated by whitespace or `'|'`, so `Display` output parses back. The side
    /// length must be a power of 2 >= 2.
    pub fn from_test_format(s: &str) -> LifeResult<Node> {
        let rows = s
            .split(|c: char| c.is_whitespace() || c == '|')
            .filter(|row| !row.is_empty())
            .map(parse_row)
            .collect::<LifeResult<Vec<_>>>()?;

        if !rows.iter().map(Vec::len).all_equal() {
            return Err(LifeError::MalformedPattern(
                "rows have different lengths".to_owned(),
            ));
        }
        let dimension = rows.len() as u64;
        if rows.first().map_or(0, Vec::len) as u64 != dimension {
            return Err(LifeError::MalformedPattern(format!(
                "{dimension} rows of length {}, expected a square",
                rows.first().map_or(0, Vec::len)
            )));
        }
        validate_dimension(dimension)
            .map_err(|_| LifeError::MalformedPattern(format!("side length {dimension}")))?;

        Ok(build(&rows, 0, 0, rows.len()))
    }
}

fn parse_row(row: &str) -> LifeResult<Vec<bool>> {
    row.chars()
        .map(|c| match c {
            '.' => Ok(false),
            'X' | 'o' => Ok(true),
            _ => Err(LifeError::MalformedPattern(format!("invalid cell {c:?}"))),
        })
        .collect()
}

fn build(rows: &[Vec<bool>], x: usize, y: usize, dimension: usize) -> Node {
    if dimension == 2 {
        Leaf::from_cells(rows[y][x], rows[y][x + 1], rows[y + 1][x], rows[y + 1][x + 1]).into()
    } else {
        let half = dimension / 2;
        Quad::new(
            build(rows, x, y, half),
            build(rows, x + half, y, half),
            build(rows, x, y + half, half),
            build(rows, x + half, y + half, half),
        )
        .into()
    }
}

/// `X` for alive and `.` for dead, every row ends with `|`
///
/// The alternate form `{:#}` also puts each row on its own line.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dimension = self.dimension();
        if dimension > Self::MAX_RENDER_DIMENSION {
            return write!(f, "Node dimension {dimension}");
        }
        let dimension = dimension as i64;
        for y in 0..dimension {
            for x in 0..dimension {
                f.write_char(if self.is_alive(x, y) { 'X' } else { '.' })?;
            }
            f.write_char('|')?;
            if f.alternate() {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
