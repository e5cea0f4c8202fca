use std::time::Duration;

use log::{debug, info};
use num::Integer;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::chain::{Piece, PieceChain, Role};
use crate::config::{ConfigError, GameConfig};
use crate::coordinates::{Coordinates, Direction};
use crate::directions::{DirectionQueue, INITIAL_DIRECTION};
use crate::food::{place_food, FoodError};
use crate::occupancy::OccupancySet;

/// Cell the head starts on, in cells from the top-left corner.
pub const START_CELL: (i32, i32) = (3, 3);
pub const POINTS_PER_LEVEL: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    SelfCollision,
    WallCollision,
    BoardFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Running,
    GameOver(GameOverReason),
}

/// What a call to [`SnakeGame::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing changed.
    Idle,
    Moved,
    Ate,
    GameOver(GameOverReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub score: u32,
    pub level: u32,
    pub length: usize,
    pub interval: Duration,
    pub phase: Phase,
}

/// Receives every piece of the map, walls first and head last.
pub trait Canvas {
    fn draw(&mut self, piece: Piece);
}

pub trait Scoreboard {
    fn show_status(&mut self, status: &Status);
    fn show_game_over(&mut self, status: &Status, reason: GameOverReason);
}

#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: GameConfig,
    board: Board,
    occupancy: OccupancySet,
    directions: DirectionQueue,
    chain: PieceChain,
    walls: Vec<Coordinates>,
    food: Option<Coordinates>,
    score: u32,
    level: u32,
    phase: Phase,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Same as [`SnakeGame::new`] with a fixed seed for food placement.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.columns, config.rows, config.walls);
        let mut game = SnakeGame {
            board,
            occupancy: OccupancySet::new(),
            directions: DirectionQueue::new(),
            chain: PieceChain::new(Self::start_position(), INITIAL_DIRECTION),
            walls: Vec::new(),
            food: None,
            score: 0,
            level: 1,
            phase: Phase::Ready,
            rng: StdRng::seed_from_u64(seed),
            config,
        };
        game.lay_out();
        Ok(game)
    }

    fn start_position() -> Coordinates {
        Coordinates::from_cell(START_CELL.0, START_CELL.1)
    }

    // builds walls, head and food of a fresh game
    fn lay_out(&mut self) {
        self.occupancy.reset();
        self.directions.reset();
        self.chain = PieceChain::new(Self::start_position(), INITIAL_DIRECTION);
        self.walls = if self.board.has_walls() {
            self.board.wall_cells()
        } else {
            Vec::new()
        };
        for wall in &self.walls {
            self.occupancy.mark(*wall);
        }
        self.score = 0;
        self.level = 1;
        self.phase = Phase::Ready;
        self.food = None;
        if self.replace_food().is_err() {
            self.finish(GameOverReason::BoardFull);
        }
    }

    fn replace_food(&mut self) -> Result<(), FoodError> {
        let cell = place_food(
            &self.board,
            &self.occupancy,
            self.chain.head().position,
            &mut self.rng,
        )?;
        self.food = Some(cell);
        Ok(())
    }

    /// Starts a game that is ready; returns whether it started.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.score = 0;
        self.level = 1;
        self.phase = Phase::Running;
        info!(
            "game started on a {}x{} board, walls: {}, interval: {:?}",
            self.board.columns(),
            self.board.rows(),
            self.board.has_walls(),
            self.interval()
        );
        true
    }

    /// Puts everything back as it was before the first start.
    pub fn restart(&mut self) {
        self.lay_out();
        info!("game reset");
    }

    /// Queues a direction change; reversals and input after game over are dropped.
    pub fn submit(&mut self, direction: Direction) -> bool {
        if self.is_over() {
            return false;
        }
        self.directions.submit(direction)
    }

    /// Advances the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Idle;
        }
        // a collision caused by the previous move is detected here
        let head = self.chain.head().position;
        if self.occupancy.is_occupied(head) {
            let reason = if self.board.has_walls() && self.board.is_border(head) {
                GameOverReason::WallCollision
            } else {
                GameOverReason::SelfCollision
            };
            return self.finish(reason);
        }

        let direction = self.directions.pop_effective();
        let Some(next) = self.board.step(head, direction) else {
            return self.finish(GameOverReason::WallCollision);
        };
        let vacated = self.chain.advance(next, direction, &mut self.occupancy);

        if self.food != Some(next) {
            return TickOutcome::Moved;
        }
        if let Some(vacated) = vacated {
            self.chain.grow(vacated, &mut self.occupancy);
        }
        self.food = None;
        self.update_score();
        info!(
            "food eaten at ({}, {}), length {}, score {}",
            next.x,
            next.y,
            self.chain.len(),
            self.score
        );
        if let Err(err) = self.replace_food() {
            debug!("{err}");
            return self.finish(GameOverReason::BoardFull);
        }
        TickOutcome::Ate
    }

    fn update_score(&mut self) {
        self.score += 1;
        if self.config.pacing.is_leveled() && Integer::is_multiple_of(&self.score, &POINTS_PER_LEVEL) {
            self.level += 1;
            info!("level {} reached, interval now {:?}", self.level, self.interval());
        }
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        self.phase = Phase::GameOver(reason);
        info!("game over ({reason:?}) with score {}", self.score);
        TickOutcome::GameOver(reason)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn head(&self) -> Coordinates {
        self.chain.head().position
    }

    pub fn food(&self) -> Option<Coordinates> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of body pieces behind the head.
    pub fn length(&self) -> usize {
        self.chain.len()
    }

    pub fn interval(&self) -> Duration {
        self.config.pacing.interval(self.level)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn walls(&self) -> &[Coordinates] {
        &self.walls
    }

    pub fn occupancy(&self) -> &OccupancySet {
        &self.occupancy
    }

    pub fn status(&self) -> Status {
        Status {
            score: self.score,
            level: self.level,
            length: self.chain.len(),
            interval: self.interval(),
            phase: self.phase,
        }
    }

    /// Every piece on the map: walls, food, then the snake from tail to head.
    pub fn pieces(&self) -> Vec<Piece> {
        let mut pieces: Vec<Piece> = self
            .walls
            .iter()
            .map(|wall| Piece {
                position: *wall,
                role: Role::Wall,
                facing: INITIAL_DIRECTION,
                gulp: false,
                tail: false,
            })
            .collect();
        if let Some(food) = self.food {
            pieces.push(Piece {
                position: food,
                role: Role::Food,
                facing: INITIAL_DIRECTION,
                gulp: false,
                tail: false,
            });
        }
        let snake: Vec<Piece> = self.chain.pieces().collect();
        pieces.extend(snake.into_iter().rev());
        pieces
    }

    pub fn render<C: Canvas>(&self, canvas: &mut C) {
        for piece in self.pieces() {
            canvas.draw(piece);
        }
    }

    pub fn report<S: Scoreboard>(&self, scoreboard: &mut S) {
        let status = self.status();
        match self.phase {
            Phase::GameOver(reason) => scoreboard.show_game_over(&status, reason),
            _ => scoreboard.show_status(&status),
        }
    }
}
