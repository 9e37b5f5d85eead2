use crate::agent::ai::{best_move, MinimaxPlayer};
use crate::agent::player::Player;
use crate::config::{GameConfig, Mode};
use crate::error::{GameError, GameResult};
use crate::game_repr::{Color, Move, MoveList, MoveRecord, MoveSpec, Position};

use super::clock::Clocks;
use super::status::Status;

/// Authoritative state of one game: position, history, redo stack, clocks
/// and mode.
///
/// The controller is the single writer. It changes the position only by
/// playing a legal move, taking one back, or restarting, so replaying
/// [`history`](Self::history) from the initial position always reproduces
/// the current position.
///
/// # Epoch
///
/// Every change to the position, history or mode bumps an epoch counter.
/// Work computed against an older state (an engine reply that was started
/// before an undo, say) carries its epoch and is discarded on completion if
/// the epoch has moved on. Clock ticks do not bump the epoch.
///
/// # Usage
///
/// ```
/// use timed_chess::config::GameConfig;
/// use timed_chess::controller::GameController;
///
/// let mut game = GameController::new(GameConfig::default()).unwrap();
/// game.submit_move(&"e2e4".parse().unwrap()).unwrap();
/// assert_eq!(game.san_history(), vec!["e4".to_string()]);
/// assert_eq!(game.status_text(), "Turn: Black");
///
/// game.undo().unwrap();
/// game.redo().unwrap();
/// assert_eq!(game.history().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameController {
    config: GameConfig,

    /// Position every game starts from; restart goes back here
    initial: Position,

    position: Position,

    /// Applied moves, oldest first
    history: Vec<MoveRecord>,

    /// Undone moves, most recently undone LAST
    redo_stack: Vec<MoveRecord>,

    clocks: Clocks,
    mode: Mode,
    epoch: u64,
}

/// Everything the engine needs to pick a reply off the controller's lock.
#[derive(Debug, Clone)]
pub struct AiRequest {
    pub position: Position,
    pub depth: u8,
    pub epoch: u64,
}

/// An engine reply tagged with the state it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiReply {
    pub mv: Option<Move>,
    pub epoch: u64,
}

impl AiRequest {
    /// Runs the search on the request's own copy of the position. Blocking.
    pub fn run(mut self) -> AiReply {
        let result = best_move(&mut self.position, self.depth);
        AiReply {
            mv: result.best_move,
            epoch: self.epoch,
        }
    }
}

impl GameController {
    /// Starts a game from the configured setup.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidFen`] if the configured starting FEN is rejected.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let initial = match &config.starting_fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::default(),
        };

        Ok(Self {
            position: initial.clone(),
            initial,
            history: Vec::new(),
            redo_stack: Vec::new(),
            clocks: Clocks::new(config.clock_secs),
            mode: config.mode,
            epoch: 0,
            config,
        })
    }

    // ===========================
    // Queries
    // ===========================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Canonical FEN of the current position
    pub fn board_code(&self) -> String {
        self.position.to_fen()
    }

    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.position.all_legal_moves()
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn san_history(&self) -> Vec<String> {
        self.history.iter().map(|record| record.san.clone()).collect()
    }

    /// Undone moves, most recently undone first
    pub fn redo_stack(&self) -> impl Iterator<Item = &MoveRecord> {
        self.redo_stack.iter().rev()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn clocks(&self) -> &Clocks {
        &self.clocks
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Recomputed on every call; never cached.
    pub fn status(&self) -> Status {
        let to_move = self.side_to_move();

        if self.position.is_checkmate() {
            return Status::Checkmate { winner: to_move.opposite() };
        }
        if let Some(reason) = self.position.draw_reason() {
            return Status::Draw(reason);
        }
        if self.config.time_forfeit {
            for side in [to_move, to_move.opposite()] {
                if self.clocks.is_flagged(side) {
                    return Status::TimeForfeit { winner: side.opposite() };
                }
            }
        }
        Status::InProgress { to_move }
    }

    pub fn status_text(&self) -> String {
        self.status().to_string()
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_game_over()
    }

    /// The engine controls the side to move and the game is still on.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == Mode::VsAi && self.side_to_move() == self.config.ai_side && !self.is_game_over()
    }

    // ===========================
    // Commands
    // ===========================

    /// Plays a human move.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has finished
    /// - [`GameError::NotYourTurn`] when the engine controls the side to move
    /// - [`GameError::IllegalMove`] when the move is not legal here
    ///
    /// On any error nothing changes.
    pub fn submit_move(&mut self, spec: &MoveSpec) -> GameResult<&MoveRecord> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if self.mode == Mode::VsAi && self.side_to_move() == self.config.ai_side {
            return Err(GameError::NotYourTurn {
                side: self.side_to_move(),
            });
        }

        let record = self.position.apply(spec)?;
        Ok(self.commit(record))
    }

    /// Asks `player` for a move and plays it through the same path as human
    /// input. No turn check: the caller decides who moves.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has finished
    /// - [`GameError::SearchExhausted`] when the player returns no move
    /// - [`GameError::IllegalMove`] when the player returns an illegal move
    pub fn play_with(&mut self, player: &mut dyn Player) -> GameResult<&MoveRecord> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        let mv = player.get_move(&mut self.position).ok_or(GameError::SearchExhausted)?;
        self.play_legal(mv)
    }

    /// Lets the engine move for its side, synchronously.
    pub fn play_ai_move(&mut self) -> GameResult<&MoveRecord> {
        self.check_ai_turn()?;
        let mut engine = MinimaxPlayer::with_depth(self.config.search_depth);
        self.play_with(&mut engine)
    }

    /// Snapshot for an engine reply computed off the controller, or `None`
    /// when it is not the engine's turn.
    pub fn ai_request(&self) -> Option<AiRequest> {
        self.is_ai_turn().then(|| AiRequest {
            position: self.position.clone(),
            depth: self.config.search_depth,
            epoch: self.epoch,
        })
    }

    /// Commits an engine reply produced from [`ai_request`](Self::ai_request).
    ///
    /// Returns `Ok(None)` when the state has changed since the request was
    /// taken; the reply is then dropped without effect.
    pub fn complete_ai_move(&mut self, reply: AiReply) -> GameResult<Option<&MoveRecord>> {
        if reply.epoch != self.epoch {
            log::debug!("dropping stale engine reply (epoch {} != {})", reply.epoch, self.epoch);
            return Ok(None);
        }
        self.check_ai_turn()?;

        let mv = reply.mv.ok_or(GameError::SearchExhausted)?;
        self.play_legal(mv).map(Some)
    }

    /// Takes back one ply. The move goes onto the redo stack.
    pub fn undo(&mut self) -> GameResult<&MoveRecord> {
        if self.history.is_empty() {
            return Err(GameError::NoMoveToUndo);
        }
        self.position.undo()?;
        let record = self.history.pop().ok_or(GameError::NoMoveToUndo)?;
        log::info!("undo {}", record.san);

        self.redo_stack.push(record);
        self.epoch += 1;
        self.redo_stack.last().ok_or(GameError::NoMoveToUndo)
    }

    /// Re-plays the most recently undone move. Older undone moves stay
    /// available for further redos.
    pub fn redo(&mut self) -> GameResult<&MoveRecord> {
        let record = self.redo_stack.pop().ok_or(GameError::NoMoveToRedo)?;
        if !self.position.is_legal(record.mv) {
            // only reachable if history and position have diverged
            self.redo_stack.push(record);
            return Err(GameError::NoMoveToRedo);
        }

        self.position.make_move(record.mv);
        log::info!("redo {}", record.san);

        self.history.push(record);
        self.epoch += 1;
        self.history.last().ok_or(GameError::NoMoveToRedo)
    }

    /// Back to the initial position with empty history and full clocks.
    /// The mode is kept.
    pub fn restart(&mut self) {
        self.position = self.initial.clone();
        self.history.clear();
        self.redo_stack.clear();
        self.clocks.reset(self.config.clock_secs);
        self.epoch += 1;
        log::info!("game restarted ({})", self.mode);
    }

    /// Switches who plays. Setting the current mode again changes nothing,
    /// not even the epoch, so a reply already in flight stays valid.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        log::info!("mode changed to {}", mode);
        self.mode = mode;
        self.epoch += 1;
    }

    /// One clock tick: the side to move loses a second. Nothing happens
    /// once the game is over. Returns whether a clock was decremented.
    pub fn tick(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let side = self.side_to_move();
        let left = self.clocks.tick(side);
        if left == 0 && self.config.time_forfeit {
            log::info!("{} ran out of time", side);
        }
        true
    }

    fn check_ai_turn(&self) -> GameResult<()> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(GameError::NotAiTurn);
        }
        Ok(())
    }

    fn play_legal(&mut self, mv: Move) -> GameResult<&MoveRecord> {
        if !self.position.is_legal(mv) {
            return Err(GameError::IllegalMove { spec: mv.to_string() });
        }
        let record = self.position.apply_legal(mv);
        Ok(self.commit(record))
    }

    /// Shared bookkeeping for every accepted move.
    fn commit(&mut self, record: MoveRecord) -> &MoveRecord {
        log::info!("{} plays {}", record.color, record.san);
        self.redo_stack.clear();
        self.epoch += 1;
        self.history.push(record);

        let status = self.status();
        if status.is_game_over() {
            log::info!("{}", status);
        }

        &self.history[self.history.len() - 1]
    }
}
