/// Size in pixels of one grid cell. Every coordinate is a multiple of it.
pub const CELL_SIZE: i32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.opposite() == *other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Coordinates {
        Coordinates { x, y }
    }

    /// Coordinates of the cell at `column`/`row`.
    pub fn from_cell(column: i32, row: i32) -> Coordinates {
        Coordinates::new(column * CELL_SIZE, row * CELL_SIZE)
    }

    pub fn column(&self) -> i32 {
        self.x / CELL_SIZE
    }

    pub fn row(&self) -> i32 {
        self.y / CELL_SIZE
    }

    pub fn get_left(&self) -> Coordinates {
        Coordinates::new(self.x - CELL_SIZE, self.y)
    }

    pub fn get_right(&self) -> Coordinates {
        Coordinates::new(self.x + CELL_SIZE, self.y)
    }

    pub fn get_up(&self) -> Coordinates {
        Coordinates::new(self.x, self.y - CELL_SIZE)
    }

    pub fn get_down(&self) -> Coordinates {
        Coordinates::new(self.x, self.y + CELL_SIZE)
    }

    /// One cell further in `direction`, without any boundary handling.
    pub fn neighbour(&self, direction: Direction) -> Coordinates {
        match direction {
            Direction::Up => self.get_up(),
            Direction::Down => self.get_down(),
            Direction::Left => self.get_left(),
            Direction::Right => self.get_right(),
        }
    }
}
