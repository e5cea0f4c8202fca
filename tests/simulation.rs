use gridsnake::{
    Coordinates, Direction, GameConfig, GameOverReason, Pacing, Phase, Role, SnakeGame,
    TickOutcome, CELL_SIZE,
};

fn open_game(seed: u64) -> SnakeGame {
    let mut game = SnakeGame::with_seed(GameConfig::default(), seed).unwrap();
    assert!(game.start());
    game
}

#[test]
fn snake_wraps_around_the_right_edge() {
    let mut game = open_game(3);
    let width = game.board().width();
    let mut wrapped = false;
    for _ in 0..game.board().columns() {
        let before = game.head();
        match game.tick() {
            TickOutcome::Moved | TickOutcome::Ate => {}
            other => panic!("unexpected {other:?}"),
        }
        if before.x == width - CELL_SIZE {
            assert_eq!(game.head(), Coordinates::new(0, before.y));
            wrapped = true;
        }
    }
    assert!(wrapped);
}

#[test]
fn snake_wraps_around_the_left_edge() {
    let mut game = open_game(5);
    // turn around in two steps: down then left
    assert!(game.submit(Direction::Down));
    assert!(game.submit(Direction::Left));
    let width = game.board().width();
    let mut wrapped = false;
    for _ in 0..game.board().columns() + 2 {
        let before = game.head();
        assert!(!game.is_over());
        game.tick();
        if before.x == 0 && game.head().y == before.y {
            assert_eq!(game.head().x, width - CELL_SIZE);
            wrapped = true;
        }
    }
    assert!(wrapped);
}

#[test]
fn walled_game_stops_at_the_wall() {
    let config = GameConfig {
        walls: true,
        ..GameConfig::default()
    };
    let mut game = SnakeGame::with_seed(config, 11).unwrap();
    assert_eq!(game.tick(), TickOutcome::Idle);
    assert!(game.start());
    assert!(game.submit(Direction::Up));

    let mut outcome = TickOutcome::Idle;
    for _ in 0..10 {
        outcome = game.tick();
        if game.is_over() {
            break;
        }
    }
    assert_eq!(outcome, TickOutcome::GameOver(GameOverReason::WallCollision));
    assert_eq!(game.phase(), Phase::GameOver(GameOverReason::WallCollision));
    let score = game.score();
    assert_eq!(game.tick(), TickOutcome::Idle);
    assert_eq!(game.score(), score);
}

#[test]
fn random_play_keeps_the_board_consistent() {
    let directions = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];
    for (seed, walls) in [(1, false), (2, true), (3, false), (4, true)] {
        let config = GameConfig {
            walls,
            ..GameConfig::default()
        };
        let mut game = SnakeGame::with_seed(config, seed).unwrap();
        game.start();
        for step in 0..300usize {
            if step % 4 == 0 {
                game.submit(directions[(step / 4 + seed as usize) % directions.len()]);
            }
            let length = game.length();
            let outcome = game.tick();
            if game.is_over() {
                break;
            }
            let pieces = game.pieces();
            assert_eq!(pieces.iter().filter(|p| p.role == Role::Head).count(), 1);
            assert!(pieces.iter().filter(|p| p.role == Role::Food).count() <= 1);
            assert_eq!(
                game.occupancy().len(),
                game.length() + game.walls().len()
            );
            if let Some(food) = game.food() {
                assert!(!game.occupancy().is_occupied(food));
            }
            match outcome {
                TickOutcome::Ate => assert_eq!(game.length(), length + 1),
                _ => assert_eq!(game.length(), length),
            }
        }
    }
}

#[test]
fn constant_pacing_keeps_interval() {
    let config = GameConfig {
        pacing: Pacing::Constant { interval_ms: 150 },
        ..GameConfig::default()
    };
    let mut game = SnakeGame::with_seed(config, 9).unwrap();
    game.start();
    let interval = game.interval();
    for _ in 0..50 {
        game.tick();
    }
    assert_eq!(game.interval(), interval);
    assert_eq!(game.level(), 1);
}

#[test]
fn invalid_board_is_refused() {
    let config = GameConfig {
        columns: 4,
        ..GameConfig::default()
    };
    assert!(SnakeGame::new(config).is_err());
}
