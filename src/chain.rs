// the chain moves from head to tail: the head takes a new cell, every segment
// takes the cell of the one ahead of it and the old tail cell is vacated
use std::collections::VecDeque;

use crate::coordinates::{Coordinates, Direction};
use crate::occupancy::OccupancySet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Head,
    Body,
    Food,
    Wall,
}

/// One cell of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Coordinates,
    pub facing: Direction,
    /// Set on the head when it swallows food; travels down the body with the segment.
    pub gulp: bool,
}

impl Segment {
    pub fn new(position: Coordinates, facing: Direction) -> Segment {
        Segment {
            position,
            facing,
            gulp: false,
        }
    }
}

/// A piece as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub position: Coordinates,
    pub role: Role,
    pub facing: Direction,
    pub gulp: bool,
    pub tail: bool,
}

#[derive(Debug, Clone)]
pub struct PieceChain {
    head: Segment,
    body: VecDeque<Segment>, // the segment right behind the head is the first element
}

impl PieceChain {
    pub fn new(head: Coordinates, facing: Direction) -> Self {
        PieceChain {
            head: Segment::new(head, facing),
            body: VecDeque::new(),
        }
    }

    pub fn head(&self) -> &Segment {
        &self.head
    }

    pub fn body(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    /// Number of body segments, the head excluded.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Moves the head to `to` and drags the body one step behind it.
    ///
    /// The cell the head leaves becomes the first body segment, facing the head's
    /// new direction; every other segment inherits the facing of the segment ahead
    /// of it. Returns the vacated tail, already cleared from `occupancy`.
    pub fn advance(
        &mut self,
        to: Coordinates,
        facing: Direction,
        occupancy: &mut OccupancySet,
    ) -> Option<Segment> {
        let mut previous = std::mem::replace(&mut self.head, Segment::new(to, facing));
        previous.facing = facing;
        occupancy.mark(previous.position);
        self.body.push_front(previous);

        // the tail leaves no trace
        let vacated = self.body.pop_back()?;
        occupancy.clear(vacated.position);
        Some(vacated)
    }

    /// Re-attaches a tail vacated by [`PieceChain::advance`]; the chain grows by one.
    pub fn grow(&mut self, vacated: Segment, occupancy: &mut OccupancySet) {
        occupancy.mark(vacated.position);
        self.body.push_back(Segment { gulp: false, ..vacated });
        self.head.gulp = true;
    }

    /// Head first, then the body down to the tail.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        let last = self.body.len();
        let head = Piece {
            position: self.head.position,
            role: Role::Head,
            facing: self.head.facing,
            gulp: self.head.gulp,
            tail: false,
        };
        std::iter::once(head).chain(self.body.iter().enumerate().map(move |(i, segment)| Piece {
            position: segment.position,
            role: Role::Body,
            facing: segment.facing,
            gulp: segment.gulp,
            tail: i + 1 == last,
        }))
    }
}
