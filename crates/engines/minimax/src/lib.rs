//! Minimax Chess Engine
//!
//! Negamax search with alpha-beta pruning, adaptive depth selection and a
//! hand-crafted evaluation (material, piece-square tables, king safety,
//! pawn structure, king tropism).

mod config;
mod eval;
mod search;

use std::collections::VecDeque;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use chess_core::{
    events_for_move, is_move_legal, move_coords, parse_coords, parse_move, possible_moves,
    render_move, Board, ChessError, Color, EventSink, GameEvent, Move, Pos,
};

pub use config::EngineConfig;
pub use eval::{evaluate, piece_value};
pub use search::{pick_best_move, recalibrate, select_depth, SearchOutcome, MIN_DEPTH};

/// What a call to [`MinimaxPlayer::play_next_move`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Our reply, in coordinate notation.
    Move(String),
    /// The received move was illegal; the opponent was disqualified and
    /// nothing was played.
    OpponentDisqualified,
    /// We have no legal move; the game already ended with the previous
    /// commit (checkmate or stalemate was reported then).
    GameOver,
}

/// A full playing agent: live board, committed game history, depth
/// calibration state, the tie-break RNG and the scripted-move override
/// queue.
pub struct MinimaxPlayer {
    color: Color,
    board: Board,
    permanent_history: Vec<Board>,
    calibration: f64,
    scripted: VecDeque<String>,
    rng: StdRng,
    sinks: Vec<Box<dyn EventSink>>,
    tie_break_percent: u8,
}

impl MinimaxPlayer {
    pub fn new(color: Color) -> Self {
        Self::with_config(color, EngineConfig::default())
    }

    pub fn with_config(color: Color, config: EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            color,
            board: Board::startpos(),
            permanent_history: Vec::new(),
            calibration: config.initial_calibration,
            scripted: config.scripted_moves.into(),
            rng,
            sinks: Vec::new(),
            tie_break_percent: config.tie_break_percent,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Board] {
        &self.permanent_history
    }

    pub fn calibration(&self) -> f64 {
        self.calibration
    }

    /// Replace the live position (used by protocol adapters replaying a
    /// move list). History snapshots must correspond to the boards after
    /// each committed move.
    pub fn set_position(&mut self, board: Board, history: Vec<Board>) {
        self.board = board;
        self.permanent_history = history;
    }

    pub fn register_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Queue pre-built moves, bypassing search while the queue is
    /// non-empty.
    pub fn set_scripted_moves(&mut self, moves: Vec<Move>) {
        self.scripted = moves.iter().map(render_move).collect();
    }

    /// Play one turn: commit the opponent's move if any, then answer with
    /// a scripted move or a search result. Returns our reply rendered to
    /// coordinate notation.
    pub fn play_next_move(&mut self, received: &str) -> Result<PlayOutcome, ChessError> {
        if !received.is_empty() {
            // Protocol frames may carry a prefix; the move is the last
            // whitespace-separated token.
            let token = received.rsplit(' ').next().unwrap_or(received);
            let (from, to) = parse_coords(token)?;
            let opponent = self.color.other();
            match find_move(&self.board, opponent, from, to) {
                Some(mv) => {
                    self.commit(mv);
                }
                None => {
                    // Syntactically fine but illegal: a game outcome, not
                    // an error.
                    self.emit(&[GameEvent::Disqualified(opponent)]);
                    return Ok(PlayOutcome::OpponentDisqualified);
                }
            }
        }

        if let Some(notation) = self.scripted.pop_front() {
            // Two entries per decision: our move plus the opponent turn
            // the script already accounts for.
            self.scripted.pop_front();
            let mv = parse_move(&self.board, self.color, &notation)?;
            self.commit(mv);
            return Ok(PlayOutcome::Move(render_move(&mv)));
        }

        let mut moves = possible_moves(&self.board, self.color);
        if moves.is_empty() {
            return Ok(PlayOutcome::GameOver);
        }
        moves.sort();

        let branching = moves.len();
        let depth = search::select_depth(branching, self.calibration);
        let started = Instant::now();
        let outcome = search::pick_best_move(
            &self.board,
            self.color,
            &self.permanent_history,
            depth,
            self.tie_break_percent,
            &mut self.rng,
        );
        let elapsed = started.elapsed().as_secs_f64();
        self.calibration = search::recalibrate(elapsed, branching, depth);
        debug!(
            depth,
            branching,
            elapsed,
            calibration = self.calibration,
            nodes = outcome.nodes,
            score = outcome.score,
            "search finished"
        );

        let best = outcome.best_move.unwrap_or(moves[0]);
        self.commit(best);
        Ok(PlayOutcome::Move(render_move(&best)))
    }

    /// Commit a move to the live game: validate, apply, snapshot history
    /// and notify listeners with the ordered event batch. An illegal move
    /// commits nothing and reports a disqualification.
    fn commit(&mut self, mv: Move) -> bool {
        if !is_move_legal(&self.board, &mv) {
            self.emit(&[GameEvent::Disqualified(mv.color())]);
            return false;
        }
        let after = self.board.apply(&mv);
        let events = events_for_move(&self.board, &after, &mv);
        self.board = after;
        self.permanent_history.push(self.board.clone());
        self.emit(&events);
        true
    }

    fn emit(&mut self, events: &[GameEvent]) {
        for event in events {
            for sink in &mut self.sinks {
                sink.on_event(event);
            }
        }
    }
}

/// The legal move of `color` with the given coordinates, if any.
fn find_move(board: &Board, color: Color, from: Pos, to: Pos) -> Option<Move> {
    possible_moves(board, color)
        .into_iter()
        .find(|mv| move_coords(mv) == (from, to))
}
