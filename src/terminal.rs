use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use colored::Colorize;
use termios::{tcsetattr, Termios, ECHO, ICANON, TCSANOW};

use gridsnake::{
    Board, Canvas, Direction, GameOverReason, Phase, Piece, Role, Scoreboard, Status,
};

const STDIN_FD: i32 = 0;

pub fn clear_screen() {
    print!("{}[2J", 27 as char);
    print!("{}[1;1H", 27 as char);
}

/// Keeps stdin unbuffered and silent until dropped.
pub struct RawTerminal {
    old_termios: Termios,
}

impl RawTerminal {
    pub fn enable() -> io::Result<Self> {
        let old_termios = Termios::from_fd(STDIN_FD)?;
        let mut new_termios = old_termios; // clone the termios struct
        new_termios.c_lflag &= !(ICANON | ECHO); // no echo and canonical mode for stdin
        tcsetattr(STDIN_FD, TCSANOW, &new_termios)?;
        Ok(RawTerminal { old_termios })
    }
}

impl Drop for RawTerminal {
    fn drop(&mut self) {
        // reset stdin to default
        if let Err(err) = tcsetattr(STDIN_FD, TCSANOW, &self.old_termios) {
            log::warn!("could not restore terminal: {err}");
        }
    }
}

/// Reads stdin one byte at a time on a background thread.
pub fn spawn_stdin_channel() -> Receiver<u8> {
    let (tx, rx) = mpsc::channel::<u8>();
    thread::spawn(move || {
        let mut reader = io::stdin();
        let mut buffer = [0u8; 1];
        loop {
            if reader.read_exact(&mut buffer).is_err() {
                log::debug!("stdin closed");
                break;
            }
            if tx.send(buffer[0]).is_err() {
                break;
            }
        }
    });
    rx
}

/// Draws the game as coloured glyphs, two columns per cell.
pub struct TerminalView {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Piece>>,
    status_line: String,
}

impl TerminalView {
    pub fn new(board: &Board) -> Self {
        let columns = board.columns() as usize;
        let rows = board.rows() as usize;
        TerminalView {
            columns,
            rows,
            cells: vec![None; columns * rows],
            status_line: String::new(),
        }
    }

    pub fn begin_frame(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    pub fn present(&self, hint: &str) {
        clear_screen();
        //border up
        print!("▗");
        for _i in 0..self.columns {
            print!("▄▄");
        }
        println!("▖");
        for row in 0..self.rows {
            print!("▐");
            for column in 0..self.columns {
                match self.cells[row * self.columns + column] {
                    None => print!("  "),
                    Some(piece) => print!("{}", glyph(&piece)),
                }
            }
            println!("▌");
        }
        //border down
        print!("▝");
        for _i in 0..self.columns {
            print!("▀▀");
        }
        println!("▘");
        println!("{}", self.status_line);
        println!("{hint}");
    }
}

fn glyph(piece: &Piece) -> colored::ColoredString {
    let head = match piece.facing {
        Direction::Up => "▲ ",
        Direction::Down => "▼ ",
        Direction::Left => "◀ ",
        Direction::Right => "▶ ",
    };
    match piece.role {
        Role::Head => head.yellow(),
        Role::Body if piece.gulp => "● ".bright_green(),
        Role::Body if piece.tail => "• ".green(),
        Role::Body => "⏺ ".green(),
        Role::Food => "♦ ".red(),
        Role::Wall => "██".white(),
    }
}

impl Canvas for TerminalView {
    fn draw(&mut self, piece: Piece) {
        let (column, row) = (piece.position.column(), piece.position.row());
        if column < 0 || row < 0 {
            return;
        }
        let (column, row) = (column as usize, row as usize);
        if column < self.columns && row < self.rows {
            self.cells[row * self.columns + column] = Some(piece);
        }
    }
}

impl Scoreboard for TerminalView {
    fn show_status(&mut self, status: &Status) {
        let state = match status.phase {
            Phase::Ready => " (press Enter to start)",
            _ => "",
        };
        self.status_line = format!(
            "Score: {}, Level: {}, Speed: {}{}",
            status.score,
            status.level,
            status.interval.as_millis(),
            state
        );
    }

    fn show_game_over(&mut self, status: &Status, reason: GameOverReason) {
        let cause = match reason {
            GameOverReason::SelfCollision => "the snake bit itself",
            GameOverReason::WallCollision => "the snake hit a wall",
            GameOverReason::BoardFull => "the board is full",
        };
        self.status_line = format!(
            "{} {}. Final Score: {} (Enter to play again)",
            "Game over!".red().bold(),
            cause,
            status.score
        );
    }
}
