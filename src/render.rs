use std::fmt::Write as _;

use crossterm::style::Stylize;
use gmaze::{grid::SquareGrid, Maze, TrailMap};

const CORNER: &str = "+";
const WALL_H: &str = "---";
const OPEN_H: &str = "   ";

/// Draws a square maze as text, marking the start `S`, the end `E` and, when `show_trail` is
/// set, the cells of the current trail.
pub fn render(
    grid: &SquareGrid,
    maze: &Maze,
    trail_map: &TrailMap,
    show_trail: bool,
    colored: bool,
) -> String {
    let mut on_trail = vec![false; grid.cell_count()];
    if show_trail {
        for &cell in trail_map.solution() {
            if let Some(slot) = on_trail.get_mut(cell) {
                *slot = true;
            }
        }
    }

    let mut out = String::new();
    out.push_str(CORNER);
    for _ in 0..grid.width {
        out.push_str(WALL_H);
        out.push_str(CORNER);
    }
    out.push('\n');

    for y in 0..grid.height {
        let mut cells = String::from("|");
        let mut floor = String::from(CORNER);

        for x in 0..grid.width {
            let cell = y * grid.width + x;

            let mark = if cell == trail_map.start() {
                Some('S')
            } else if cell == trail_map.end() {
                Some('E')
            } else if on_trail[cell] {
                Some('.')
            } else {
                None
            };
            match (mark, colored) {
                (Some(mark), true) => {
                    let _ = write!(cells, " {} ", mark.green().bold());
                }
                (Some(mark), false) => {
                    let _ = write!(cells, " {} ", mark);
                }
                (None, _) => cells.push_str("   "),
            }

            let open_right = grid
                .cell_at(x + 1, y)
                .is_some_and(|right| maze.is_open_between(cell, right));
            cells.push(if open_right { ' ' } else { '|' });

            let open_below = grid
                .cell_at(x, y + 1)
                .is_some_and(|below| maze.is_open_between(cell, below));
            floor.push_str(if open_below { OPEN_H } else { WALL_H });
            floor.push_str(CORNER);
        }

        out.push_str(&cells);
        out.push('\n');
        out.push_str(&floor);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use gmaze::trail::TrailChange;

    use super::*;

    #[test]
    fn corridor() {
        let grid = SquareGrid::new(3, 1);
        let mut maze = grid.maze();
        maze.open_all();
        let mut trail_map = maze.trail_map();
        for cell in 0..3 {
            trail_map.update(TrailChange::Append(cell));
        }

        let expected = "\
+---+---+---+
| S   .   E |
+---+---+---+
";
        assert_eq!(render(&grid, &maze, &trail_map, true, false), expected);

        let hidden = render(&grid, &maze, &trail_map, false, false);
        assert!(!hidden.contains('.'));
    }

    #[test]
    fn trail_marks_only_its_cells() {
        let grid = SquareGrid::new(3, 2);
        let mut maze = grid.maze();
        maze.open_all();
        let mut trail_map = maze.trail_map();
        for cell in [0, 3, 4, 5] {
            trail_map.update(TrailChange::Append(cell));
        }

        let expected = "\
+---+---+---+
| S         |
+   +   +   +
| .   .   E |
+---+---+---+
";
        assert_eq!(render(&grid, &maze, &trail_map, true, false), expected);
    }

    #[test]
    fn closed_walls() {
        let grid = SquareGrid::new(2, 2);
        let maze = grid.maze();
        let trail_map = maze.trail_map();

        let expected = "\
+---+---+
| S |   |
+---+---+
|   | E |
+---+---+
";
        assert_eq!(render(&grid, &maze, &trail_map, true, false), expected);
    }
}
