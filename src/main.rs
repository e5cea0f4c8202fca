use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc::TryRecvError;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

use gridsnake::config::CONSTANT_INTERVAL_MS;
use gridsnake::{GameConfig, KeyDecoder, KeyEvent, Pacing, Phase, SnakeGame, TickOutcome};

mod terminal;

use terminal::{RawTerminal, TerminalView};

const HINT: &str = "arrows: steer, Enter: start, q: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PacingArg {
    /// Speed up every ten points
    Leveled,
    /// Keep the same speed for the whole game
    Constant,
}

#[derive(Parser)]
#[command(name = "gridsnake", about = "Classic snake on a grid, in the terminal")]
struct Args {
    /// Map width in cells
    #[arg(long, default_value_t = 30)]
    columns: i32,
    /// Map height in cells
    #[arg(long, default_value_t = 15)]
    rows: i32,
    /// Surround the map with walls instead of wrapping around its edges
    #[arg(long)]
    walls: bool,
    #[arg(long, value_enum, default_value_t = PacingArg::Leveled)]
    pacing: PacingArg,
    /// Tick interval for constant pacing
    #[arg(long, default_value_t = CONSTANT_INTERVAL_MS)]
    interval_ms: u64,
    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "gridsnake.log")]
    log_file: PathBuf,
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let pacing = match self.pacing {
            PacingArg::Leveled => Pacing::Leveled,
            PacingArg::Constant => Pacing::Constant {
                interval_ms: self.interval_ms,
            },
        };
        GameConfig {
            columns: self.columns,
            rows: self.rows,
            walls: self.walls,
            pacing,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout is the game screen, so logs go to a file
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    WriteLogger::init(args.log_level, Config::default(), log_file)
        .context("cannot initialize logger")?;

    let config = args.game_config();
    let game = match args.seed {
        Some(seed) => SnakeGame::with_seed(config, seed),
        None => SnakeGame::new(config),
    }
    .context("invalid game configuration")?;

    info!("starting gridsnake");
    let final_score = play(game)?;
    println!("Final Score: {final_score}");
    Ok(())
}

fn play(mut game: SnakeGame) -> Result<u32> {
    let _raw = RawTerminal::enable().context("cannot switch terminal to raw mode")?;
    let stdin_channel = terminal::spawn_stdin_channel();
    let mut decoder = KeyDecoder::new();
    let mut view = TerminalView::new(game.board());
    draw(&game, &mut view);

    // main Game Loop happens here
    let mut frame_start_time = Instant::now();
    loop {
        // receive input from pipe
        loop {
            match stdin_channel.try_recv() {
                Ok(key) => decoder.push(key),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(game.score()),
            }
        }
        let mut redraw = false;
        while let Some(event) = decoder.next_event() {
            match event {
                KeyEvent::Turn(direction) => {
                    game.submit(direction);
                }
                KeyEvent::Start => {
                    if game.is_over() {
                        game.restart();
                    }
                    if game.start() {
                        frame_start_time = Instant::now();
                    }
                    redraw = true;
                }
                KeyEvent::Quit => {
                    info!("quit with score {}", game.score());
                    return Ok(game.score());
                }
            }
        }

        if game.phase() == Phase::Running && frame_start_time.elapsed() >= game.interval() {
            frame_start_time = Instant::now();
            if let TickOutcome::GameOver(reason) = game.tick() {
                info!("game ended: {reason:?}");
            }
            redraw = true;
        }
        if redraw {
            draw(&game, &mut view);
        }
        // wait for next frame
        std::thread::sleep(Duration::from_millis(3));
    }
}

fn draw(game: &SnakeGame, view: &mut TerminalView) {
    view.begin_frame();
    game.render(view);
    game.report(view);
    view.present(HINT);
}
