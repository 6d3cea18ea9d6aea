//! Per-pass visited flags.

/// One byte per pixel, 0 = unvisited, nonzero = visited in the current pass.
///
/// Every fill allocates two independent grids, one per scan pass. Fillers
/// only ever see the grid of the vertical pass, in `finish`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkGrid {
    width: usize,
    height: usize,
    marks: Vec<u8>,
}

impl MarkGrid {
    /// An all-unvisited grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            marks: vec![0; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` was visited.
    ///
    /// Coordinates outside the grid count as unvisited, which is exactly how
    /// the ray caster treats the region boundary.
    #[inline]
    pub fn is_marked(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x as u64 >= self.width as u64 || y as u64 >= self.height as u64 {
            return false;
        }
        self.marks[y as usize * self.width + x as usize] != 0
    }

    /// Flag `(x, y)` as visited.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the grid.
    #[inline]
    pub fn mark(&mut self, x: usize, y: usize) {
        assert!(
            x < self.width && y < self.height,
            "mark ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.marks[y * self.width + x] = 1;
    }

    /// Number of visited pixels.
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m != 0).count()
    }

    /// Iterate over visited coordinates in row-major order.
    pub fn iter_marked(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, &m)| m != 0)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Raw flags, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_query() {
        let mut grid = MarkGrid::new(3, 2);
        assert_eq!(grid.count(), 0);

        grid.mark(2, 1);
        grid.mark(0, 0);
        grid.mark(0, 0);

        assert!(grid.is_marked(2, 1));
        assert!(grid.is_marked(0, 0));
        assert!(!grid.is_marked(1, 0));
        assert_eq!(grid.count(), 2);
        assert_eq!(grid.iter_marked().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn test_out_of_range_reads_unmarked() {
        let mut grid = MarkGrid::new(1, 1);
        grid.mark(0, 0);
        assert!(!grid.is_marked(-1, 0));
        assert!(!grid.is_marked(1, 0));
        assert!(!grid.is_marked(0, 1));
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn test_mark_out_of_range_panics() {
        MarkGrid::new(2, 2).mark(0, 2);
    }
}
