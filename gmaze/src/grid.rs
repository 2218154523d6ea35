use crate::{
    geometry::Point2D,
    maze::{Maze, WallKind},
    CellId,
};

/// Rectangular lattice of square cells, numbered row by row from the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareGrid {
    pub width: usize,
    pub height: usize,
}

impl SquareGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellId> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    pub fn position_of(&self, cell: CellId) -> Option<(usize, usize)> {
        (cell < self.cell_count()).then(|| (cell % self.width, cell / self.width))
    }

    /// Every wall of the lattice. Each cell contributes its top and left border on the
    /// outer edge, and the walls to its right and below it.
    pub fn walls(&self) -> Vec<WallKind> {
        let mut walls = Vec::with_capacity(2 * self.cell_count() + self.width + self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = y * self.width + x;

                if y == 0 {
                    walls.push(WallKind::Border(cell));
                }
                if x == 0 {
                    walls.push(WallKind::Border(cell));
                }
                walls.push(match self.cell_at(x + 1, y) {
                    Some(right) => WallKind::Shared(cell, right),
                    None => WallKind::Border(cell),
                });
                walls.push(match self.cell_at(x, y + 1) {
                    Some(below) => WallKind::Shared(cell, below),
                    None => WallKind::Border(cell),
                });
            }
        }
        walls
    }

    pub fn locations(&self) -> Vec<Point2D> {
        (0..self.cell_count())
            .map(|cell| {
                let x = cell % self.width;
                let y = cell / self.width;
                Point2D::new(x as f32 + 0.5, y as f32 + 0.5)
            })
            .collect()
    }

    /// Maze with all walls of the lattice closed.
    pub fn maze(&self) -> Maze {
        Maze::new(self.walls(), self.locations())
    }
}
