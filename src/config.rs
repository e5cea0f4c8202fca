use std::time::Duration;

use thiserror::Error;

use crate::coordinates::CELL_SIZE;

pub const MIN_BOARD_CELLS: i32 = 10;
pub const MAX_BOARD_CELLS: i32 = 200;

/// Interval of the first level; each level shortens it by [`LEVEL_SPEED_STEP`].
pub const BASE_INTERVAL_MS: u64 = 190;
pub const LEVEL_SPEED_STEP: u64 = 30;
/// Shortest interval a leveled game can reach.
pub const SPEED_LIMIT: u64 = 40;
pub const CONSTANT_INTERVAL_MS: u64 = 150;

/// How the tick interval evolves during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// The game speeds up every ten points, down to [`SPEED_LIMIT`].
    Leveled,
    /// Flat interval and flat scoring.
    Constant { interval_ms: u64 },
}

impl Pacing {
    pub fn interval(&self, level: u32) -> Duration {
        let ms = match self {
            Pacing::Leveled => BASE_INTERVAL_MS
                .saturating_sub(u64::from(level) * LEVEL_SPEED_STEP)
                .max(SPEED_LIMIT),
            Pacing::Constant { interval_ms } => *interval_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn is_leveled(&self) -> bool {
        matches!(self, Pacing::Leveled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min} cells, got {columns}x{rows}")]
    BoardTooSmall { columns: i32, rows: i32, min: i32 },
    #[error("board must be at most {max}x{max} cells, got {columns}x{rows}")]
    BoardTooLarge { columns: i32, rows: i32, max: i32 },
    #[error("tick interval must be positive")]
    ZeroInterval,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub columns: i32,
    pub rows: i32,
    pub walls: bool,
    pub pacing: Pacing,
}

impl Default for GameConfig {
    /// A 600x300 pixel map without walls.
    fn default() -> Self {
        GameConfig {
            columns: 600 / CELL_SIZE,
            rows: 300 / CELL_SIZE,
            walls: false,
            pacing: Pacing::Leveled,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_BOARD_CELLS || self.rows < MIN_BOARD_CELLS {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
                min: MIN_BOARD_CELLS,
            });
        }
        if self.columns > MAX_BOARD_CELLS || self.rows > MAX_BOARD_CELLS {
            return Err(ConfigError::BoardTooLarge {
                columns: self.columns,
                rows: self.rows,
                max: MAX_BOARD_CELLS,
            });
        }
        if let Pacing::Constant { interval_ms: 0 } = self.pacing {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!((config.columns, config.rows), (30, 15));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn small_board_is_rejected() {
        let config = GameConfig {
            rows: 9,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BoardTooSmall { .. })));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = GameConfig {
            pacing: Pacing::Constant { interval_ms: 0 },
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));
    }

    #[test]
    fn leveled_interval_shrinks_to_limit() {
        let pacing = Pacing::Leveled;
        assert_eq!(pacing.interval(1), Duration::from_millis(160));
        assert_eq!(pacing.interval(2), Duration::from_millis(130));
        assert_eq!(pacing.interval(4), Duration::from_millis(70));
        assert_eq!(pacing.interval(5), Duration::from_millis(40));
        assert_eq!(pacing.interval(12), Duration::from_millis(SPEED_LIMIT));
    }

    #[test]
    fn constant_interval_ignores_level() {
        let pacing = Pacing::Constant {
            interval_ms: CONSTANT_INTERVAL_MS,
        };
        assert_eq!(pacing.interval(1), pacing.interval(9));
    }
}
