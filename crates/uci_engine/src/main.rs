//! Thin UCI front end for the minimax engine.
//!
//! Stateless between `go` commands apart from the depth-calibration
//! constant: the GUI resends the full move list with every `position`
//! command and the board is rebuilt from it each time.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use chess_core::{parse_move, Board, ChessError, Color, EventSink, GameEvent};
use minimax_engine::{EngineConfig, MinimaxPlayer, PlayOutcome};

/// Forwards game events to the log; stdout stays reserved for UCI.
struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GameEvent) {
        debug!(?event, "game event");
    }
}

struct Session {
    board: Board,
    history: Vec<Board>,
    to_move: Color,
    calibration: f64,
}

impl Session {
    fn new() -> Self {
        Self {
            board: Board::startpos(),
            history: Vec::new(),
            to_move: Color::White,
            calibration: EngineConfig::default().initial_calibration,
        }
    }

    /// Handle `position [startpos | fen <fen>] [moves <m1> <m2> ...]`.
    fn set_position(&mut self, args: &[&str]) -> Result<(), ChessError> {
        let moves_at = args.iter().position(|&a| a == "moves");
        let setup = &args[..moves_at.unwrap_or(args.len())];

        let (mut board, mut to_move) = match setup.first() {
            Some(&"fen") => {
                let fen = setup[1..].join(" ");
                let to_move = match setup.get(2) {
                    Some(&"b") => Color::Black,
                    _ => Color::White,
                };
                (Board::from_fen(&fen)?, to_move)
            }
            _ => (Board::startpos(), Color::White),
        };

        let mut history = Vec::new();
        if let Some(at) = moves_at {
            for token in &args[at + 1..] {
                let mv = parse_move(&board, to_move, token)?;
                board = board.apply(&mv);
                history.push(board.clone());
                to_move = to_move.other();
            }
        }

        self.board = board;
        self.history = history;
        self.to_move = to_move;
        Ok(())
    }

    fn best_move(&mut self) -> String {
        let config = EngineConfig {
            initial_calibration: self.calibration,
            ..EngineConfig::default()
        };
        let mut player = MinimaxPlayer::with_config(self.to_move, config);
        player.register_sink(Box::new(LogSink));
        player.set_position(self.board.clone(), self.history.clone());

        let outcome = player.play_next_move("");
        self.calibration = player.calibration();
        match outcome {
            Ok(PlayOutcome::Move(notation)) => notation,
            // No legal move, or a state the engine refused: the UCI null
            // move tells the GUI we cannot answer.
            _ => "0000".to_string(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                writeln!(stdout, "id name minimax_engine 0.1").ok();
                writeln!(stdout, "id author minimax_engine developers").ok();
                writeln!(stdout, "uciok").ok();
                stdout.flush().ok();
            }
            "isready" => {
                writeln!(stdout, "readyok").ok();
                stdout.flush().ok();
            }
            "ucinewgame" => {
                session = Session::new();
            }
            "position" => {
                if let Err(e) = session.set_position(&parts[1..]) {
                    warn!(%e, "rejected position command");
                }
            }
            "go" => {
                let best = session.best_move();
                writeln!(stdout, "bestmove {best}").ok();
                stdout.flush().ok();
            }
            "quit" => break,
            _ => {
                // Unknown commands are ignored per protocol.
            }
        }
    }
}
