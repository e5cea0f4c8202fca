use circular_buffer::CircularBuffer;

use crate::coordinates::Direction;

/// Maximum number of buffered direction changes between two ticks.
pub const QUEUE_CAPACITY: usize = 64;

/// Direction the snake faces when a game starts.
pub const INITIAL_DIRECTION: Direction = Direction::Right;

type PendingDirections = CircularBuffer<QUEUE_CAPACITY, Direction>;

/// Pending direction inputs, one consumed per tick.
///
/// Inputs are validated against the most recently queued direction rather than the
/// one in effect, so two quick turns within a tick cannot add up to a reversal.
#[derive(Debug, Clone)]
pub struct DirectionQueue {
    pending: PendingDirections,
    current: Direction,
}

impl Default for DirectionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionQueue {
    pub fn new() -> Self {
        DirectionQueue {
            pending: PendingDirections::new(),
            current: INITIAL_DIRECTION,
        }
    }

    /// Queues `direction` and reports whether it was accepted.
    pub fn submit(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.peek_effective()) {
            return false;
        }
        // if the buffer is full, ignore the input
        if self.pending.is_full() {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn pop_effective(&mut self) -> Direction {
        if let Some(direction) = self.pending.pop_front() {
            self.current = direction;
        }
        self.current
    }

    pub fn peek_effective(&self) -> Direction {
        self.pending.back().copied().unwrap_or(self.current)
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn reset(&mut self) {
        self.pending.clear();
        self.current = INITIAL_DIRECTION;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_queue_keeps_current() {
        let mut queue = DirectionQueue::new();
        assert_eq!(queue.pop_effective(), Direction::Right);
        assert_eq!(queue.pop_effective(), Direction::Right);
    }

    #[test]
    fn consumes_in_order() {
        let mut queue = DirectionQueue::new();
        assert!(queue.submit(Direction::Down));
        assert!(queue.submit(Direction::Left));
        assert_eq!(queue.pop_effective(), Direction::Down);
        assert_eq!(queue.pop_effective(), Direction::Left);
        assert_eq!(queue.pop_effective(), Direction::Left);
        assert_eq!(queue.current(), Direction::Left);
    }

    #[test]
    fn reversal_of_last_queued_is_rejected() {
        let mut queue = DirectionQueue::new();
        assert!(queue.submit(Direction::Down));
        assert!(!queue.submit(Direction::Up));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek_effective(), Direction::Down);
    }

    #[test]
    fn reversal_of_current_is_rejected() {
        let mut queue = DirectionQueue::new();
        assert!(!queue.submit(Direction::Left));
        assert!(queue.is_empty());
    }

    #[test]
    fn turn_back_takes_two_steps() {
        // Right -> Up -> Left is legal even though Left reverses Right
        let mut queue = DirectionQueue::new();
        assert!(queue.submit(Direction::Up));
        assert!(queue.submit(Direction::Left));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn never_yields_a_reversal() {
        let inputs = [
            Direction::Left,
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Down,
            Direction::Up,
            Direction::Right,
            Direction::Left,
        ];
        let mut queue = DirectionQueue::new();
        let mut previous = queue.current();
        for (i, direction) in inputs.iter().enumerate() {
            queue.submit(*direction);
            if i % 2 == 1 {
                let popped = queue.pop_effective();
                assert!(!popped.is_opposite(&previous));
                previous = popped;
            }
        }
        while !queue.is_empty() {
            let popped = queue.pop_effective();
            assert!(!popped.is_opposite(&previous));
            previous = popped;
        }
    }

    #[test]
    fn full_queue_drops_input() {
        let mut queue = DirectionQueue::new();
        for i in 0..QUEUE_CAPACITY {
            let direction = if i % 2 == 0 { Direction::Up } else { Direction::Right };
            assert!(queue.submit(direction));
        }
        assert!(!queue.submit(Direction::Up));
        assert_eq!(queue.len(), QUEUE_CAPACITY);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut queue = DirectionQueue::new();
        queue.submit(Direction::Down);
        queue.pop_effective();
        queue.submit(Direction::Left);
        queue.reset();
        assert!(queue.is_empty());
        assert_eq!(queue.current(), INITIAL_DIRECTION);
    }
}
