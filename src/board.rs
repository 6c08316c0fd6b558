use std::sync::Arc;

use crate::grid::Grid;
use crate::stone::Stone;

/// A position stored as a flat array of signs: `0` empty, `1` Black,
/// `-1` White.
///
/// The neighbor table lives behind an `Arc`, so cloning a board copies only
/// the point array. Move resolution works on such a clone and swaps it in
/// once the move is known to be legal.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Arc<Grid>,
    points: Vec<i8>,
}

impl Board {
    /// Create an empty square board.
    pub fn new(size: usize) -> Self {
        let grid = Arc::new(Grid::new(size));
        let points = vec![0i8; grid.area()];
        Board { grid, points }
    }

    /// Restore a board from serialized signs.
    pub fn from_signs(size: usize, points: Vec<i8>) -> Self {
        let grid = Arc::new(Grid::new(size));
        assert_eq!(points.len(), grid.area(), "malformed board signs");
        Board { grid, points }
    }

    // -- Accessors --

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn points(&self) -> &[i8] {
        &self.points
    }

    pub fn sign(&self, index: usize) -> i8 {
        self.points[index]
    }

    pub fn stone_at(&self, index: usize) -> Option<Stone> {
        Stone::from_int(self.points[index])
    }

    pub fn is_vacant(&self, index: usize) -> bool {
        self.points[index] == 0
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|&s| s == 0)
    }

    /// The color shared by every neighbor of a point, if there is one.
    /// `None` when any neighbor is empty, when two neighbors disagree, or
    /// on a board with no neighbors at all.
    pub fn surrounding_color(&self, index: usize) -> Option<Stone> {
        let neighbors = self.grid.neighbors(index);
        let first = self.stone_at(*neighbors.first()?)?;
        neighbors
            .iter()
            .all(|&n| self.stone_at(n) == Some(first))
            .then_some(first)
    }

    // -- Mutators --

    pub fn set(&mut self, index: usize, sign: i8) {
        self.points[index] = sign;
    }

    pub fn set_many(&mut self, indices: &[usize], sign: i8) {
        for &index in indices {
            self.points[index] = sign;
        }
    }
}
