use std::collections::HashSet;

use crate::coordinates::Coordinates;

/// Cells covered by body segments and walls.
///
/// The head and the food are never registered: the head must be able to land on
/// the food, and its own cell must not block it before it moves away.
#[derive(Debug, Clone, Default)]
pub struct OccupancySet {
    cells: HashSet<Coordinates>,
}

impl OccupancySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, cell: Coordinates) {
        self.cells.insert(cell);
    }

    pub fn clear(&mut self, cell: Coordinates) {
        self.cells.remove(&cell);
    }

    pub fn is_occupied(&self, cell: Coordinates) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn reset(&mut self) {
        self.cells.clear();
    }
}
