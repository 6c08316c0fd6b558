use arrayvec::ArrayVec;

/// Geometry of a square board: the (row, col) to flat-index mapping and a
/// neighbor table computed once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    neighbors: Vec<ArrayVec<usize, 4>>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");

        let area = size * size;
        let mut neighbors = Vec::with_capacity(area);
        for index in 0..area {
            let col = index % size;
            let row = index / size;
            let mut adjacent: ArrayVec<usize, 4> = ArrayVec::new();
            if col > 0 {
                adjacent.push(index - 1);
            }
            if col + 1 < size {
                adjacent.push(index + 1);
            }
            if row > 0 {
                adjacent.push(index - size);
            }
            if row + 1 < size {
                adjacent.push(index + size);
            }
            neighbors.push(adjacent);
        }

        Grid { size, neighbors }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn area(&self) -> usize {
        self.size * self.size
    }

    /// Flat index of a (row, col) pair. Callers pass in-bounds coordinates.
    #[inline]
    pub fn flatten(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size, "coordinates off board");
        row * self.size + col
    }

    /// (row, col) pair of a flat index.
    #[inline]
    pub fn unflatten(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// The 4-connected neighbors that are on the board.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }
}
