use num::Integer;

use crate::coordinates::{Coordinates, Direction, CELL_SIZE};

/// Geometry of the map: its size in pixels and what happens at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    walls: bool,
}

impl Board {
    pub fn new(columns: i32, rows: i32, walls: bool) -> Board {
        Board {
            width: columns * CELL_SIZE,
            height: rows * CELL_SIZE,
            walls,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn columns(&self) -> i32 {
        self.width / CELL_SIZE
    }

    pub fn rows(&self) -> i32 {
        self.height / CELL_SIZE
    }

    pub fn has_walls(&self) -> bool {
        self.walls
    }

    pub fn is_in_bound(&self, position: Coordinates) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Cell reached by moving one step from `from`.
    ///
    /// An open map wraps around its edges. A walled map never wraps and returns
    /// `None` when the step leaves the map.
    pub fn step(&self, from: Coordinates, direction: Direction) -> Option<Coordinates> {
        let next = from.neighbour(direction);
        if self.walls {
            return self.is_in_bound(next).then_some(next);
        }
        Some(Coordinates::new(
            Integer::mod_floor(&next.x, &self.width),
            Integer::mod_floor(&next.y, &self.height),
        ))
    }

    pub fn is_border(&self, cell: Coordinates) -> bool {
        cell.x == 0
            || cell.y == 0
            || cell.x == self.width - CELL_SIZE
            || cell.y == self.height - CELL_SIZE
    }

    /// Wall cells along the outer ring, left and right columns first.
    pub fn wall_cells(&self) -> Vec<Coordinates> {
        let (columns, rows) = (self.columns(), self.rows());
        let mut cells = Vec::with_capacity((2 * (columns + rows)) as usize);
        for row in 0..rows {
            cells.push(Coordinates::from_cell(0, row));
            cells.push(Coordinates::from_cell(columns - 1, row));
        }
        for column in 1..columns - 1 {
            cells.push(Coordinates::from_cell(column, 0));
            cells.push(Coordinates::from_cell(column, rows - 1));
        }
        cells
    }

    /// Every cell except the outer ring, row by row.
    pub fn interior_cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        (1..self.rows() - 1)
            .flat_map(move |row| (1..self.columns() - 1).map(move |column| Coordinates::from_cell(column, row)))
    }

    pub fn interior_size(&self) -> usize {
        ((self.columns() - 2).max(0) * (self.rows() - 2).max(0)) as usize
    }
}
