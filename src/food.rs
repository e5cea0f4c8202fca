use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;
use thiserror::Error;

use crate::board::Board;
use crate::coordinates::Coordinates;
use crate::occupancy::OccupancySet;

/// Random draws attempted before falling back to enumerating free cells.
pub const MAX_RANDOM_DRAWS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FoodError {
    #[error("no free cell left for food")]
    BoardFull,
}

/// Picks a free interior cell for the next food item.
///
/// The head's cell counts as taken even though it is not in `occupancy`.
pub fn place_food<R: Rng>(
    board: &Board,
    occupancy: &OccupancySet,
    head: Coordinates,
    rng: &mut R,
) -> Result<Coordinates, FoodError> {
    let is_free = |cell: Coordinates| cell != head && !occupancy.is_occupied(cell);
    let interior = board.interior_size();
    if interior == 0 {
        return Err(FoodError::BoardFull);
    }

    // if snake and walls cover more than 80% of the interior, random draws
    // mostly miss: go straight to the list of free cells
    if occupancy.len() * 5 <= interior * 4 {
        for _ in 0..MAX_RANDOM_DRAWS {
            let cell = Coordinates::from_cell(
                rng.random_range(1..board.columns() - 1),
                rng.random_range(1..board.rows() - 1),
            );
            if is_free(cell) {
                debug!("food drawn at ({}, {})", cell.x, cell.y);
                return Ok(cell);
            }
        }
    }

    let free: Vec<Coordinates> = board.interior_cells().filter(|cell| is_free(*cell)).collect();
    let cell = free.choose(rng).copied().ok_or(FoodError::BoardFull)?;
    debug!("food picked at ({}, {}) among {} free cells", cell.x, cell.y, free.len());
    Ok(cell)
}
