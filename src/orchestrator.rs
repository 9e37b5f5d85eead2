//! Timers and command routing around a [`GameController`].
//!
//! The controller is a plain synchronous state machine. The [`Orchestrator`]
//! adds time on top of it:
//! - a recurring clock task that takes a second off the side to move on
//!   every tick
//! - a delayed engine reply, searched on a blocking worker and committed only
//!   if nothing changed in the meantime
//! - the command set a front-end calls into
//!
//! # Example Flow
//!
//! ```text
//! on_user_move(e2, e4) -> [controller accepts] -> reconcile
//!   -> engine to move? -> sleep(ai_delay) -> spawn_blocking(search)
//!   -> lock -> epoch unchanged? -> commit reply
//! ```
//!
//! All methods that start tasks must be called from inside a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task::JoinHandle;

use crate::config::{GameConfig, Mode};
use crate::controller::{AiRequest, GameController, GameSnapshot};
use crate::error::GameResult;
use crate::game_repr::{MoveRecord, MoveSpec, Square};

type SharedGame = Arc<Mutex<GameController>>;

/// Locks the game. A panic while the lock was held cannot leave the
/// controller half-updated, so a poisoned lock is still usable.
fn lock(state: &SharedGame) -> MutexGuard<'_, GameController> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A scheduled engine reply and the epoch it was scheduled for
struct PendingAi {
    epoch: u64,
    handle: JoinHandle<()>,
}

/// Async driver owning the game and its timers.
///
/// # Shared State
///
/// The controller sits behind a `std::sync::Mutex` shared with the clock and
/// engine tasks. Locks are only held for synchronous controller calls, never
/// across an `.await`, and the search itself runs on a clone of the position
/// without the lock.
///
/// # Reconciliation
///
/// After every command that changes the game, the orchestrator checks
/// whether the engine is to move in an unfinished game and schedules a reply
/// if one is not already pending for the current state. Undo, redo and
/// restart cancel any pending reply first. A mode change drops it through
/// the epoch.
pub struct Orchestrator {
    state: SharedGame,
    clock_task: Option<JoinHandle<()>>,
    ai_task: Option<PendingAi>,
}

impl Orchestrator {
    /// Creates the game, starts its clock and, if the engine moves first,
    /// schedules its reply.
    ///
    /// # Errors
    ///
    /// Fails if the configured starting FEN is invalid.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let game = GameController::new(config)?;
        log::info!("new game ({})", game.mode());

        let mut orchestrator = Self {
            state: Arc::new(Mutex::new(game)),
            clock_task: None,
            ai_task: None,
        };
        orchestrator.start_clock();
        orchestrator.reconcile();
        Ok(orchestrator)
    }

    // ===========================
    // Commands
    // ===========================

    /// A drag-and-drop move from `source` to `target`. Promotions become
    /// queens. Returns whether the move was accepted.
    pub fn on_user_move(&mut self, source: Square, target: Square) -> bool {
        self.submit(&MoveSpec::squares(source, target)).is_ok()
    }

    /// Plays a human move given in any accepted notation.
    pub fn submit(&mut self, spec: &MoveSpec) -> GameResult<MoveRecord> {
        let result = lock(&self.state).submit_move(spec).cloned();
        match &result {
            Ok(_) => self.reconcile(),
            Err(err) => log::warn!("move {} rejected: {}", spec, err),
        }
        result
    }

    pub fn on_undo_requested(&mut self) -> GameResult<MoveRecord> {
        self.cancel_ai();
        let result = lock(&self.state).undo().cloned();
        if let Err(err) = &result {
            log::warn!("undo rejected: {}", err);
        }
        self.reconcile();
        result
    }

    pub fn on_redo_requested(&mut self) -> GameResult<MoveRecord> {
        self.cancel_ai();
        let result = lock(&self.state).redo().cloned();
        if let Err(err) = &result {
            log::warn!("redo rejected: {}", err);
        }
        self.reconcile();
        result
    }

    /// Fresh game in the current mode with full clocks. The clock task is
    /// replaced so the first tick comes one full period after the restart.
    pub fn on_restart_requested(&mut self) {
        self.cancel_ai();
        self.stop_clock();
        lock(&self.state).restart();
        self.start_clock();
        self.reconcile();
    }

    /// Maps the front-end's two toggles onto [`Mode`]: the engine plays
    /// whenever `ai_enabled` is set.
    pub fn on_set_mode(&mut self, ai_enabled: bool, two_player_enabled: bool) {
        self.set_mode(Mode::from_flags(ai_enabled, two_player_enabled));
    }

    /// A real change moves the epoch on, so reconciliation drops the
    /// pending reply. Re-selecting the current mode leaves it running.
    pub fn set_mode(&mut self, mode: Mode) {
        lock(&self.state).set_mode(mode);
        self.reconcile();
    }

    // ===========================
    // Observation
    // ===========================

    pub fn snapshot(&self) -> GameSnapshot {
        lock(&self.state).snapshot()
    }

    /// An engine reply is scheduled or being searched.
    pub fn ai_pending(&self) -> bool {
        self.ai_task.as_ref().is_some_and(|pending| !pending.handle.is_finished())
    }

    /// Waits until the pending engine reply, if any, has been committed or
    /// dropped.
    pub async fn wait_for_ai(&mut self) {
        if let Some(pending) = self.ai_task.take() {
            if let Err(err) = pending.handle.await {
                if !err.is_cancelled() {
                    log::warn!("engine task failed: {}", err);
                }
            }
        }
    }

    // ===========================
    // Tasks
    // ===========================

    fn start_clock(&mut self) {
        let state = Arc::clone(&self.state);
        let period = lock(&self.state).config().tick;

        self.clock_task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of an interval completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                lock(&state).tick();
            }
        }));
    }

    fn stop_clock(&mut self) {
        if let Some(handle) = self.clock_task.take() {
            handle.abort();
        }
    }

    fn cancel_ai(&mut self) {
        if let Some(pending) = self.ai_task.take() {
            log::debug!("cancelling engine reply for epoch {}", pending.epoch);
            pending.handle.abort();
        }
    }

    /// Schedules an engine reply when the engine is to move and none is
    /// pending for the current state.
    fn reconcile(&mut self) {
        let (request, delay) = {
            let game = lock(&self.state);
            (game.ai_request(), game.config().ai_delay)
        };

        let Some(request) = request else {
            self.cancel_ai();
            return;
        };

        if let Some(pending) = &self.ai_task {
            if pending.epoch == request.epoch && !pending.handle.is_finished() {
                return;
            }
        }
        self.cancel_ai();

        log::debug!("scheduling engine reply for epoch {}", request.epoch);
        let epoch = request.epoch;
        let handle = tokio::spawn(engine_reply(Arc::clone(&self.state), request, delay));
        self.ai_task = Some(PendingAi { epoch, handle });
    }
}

/// Waits out the delay, searches off the lock, then commits if the game is
/// still where it was when the request was taken.
async fn engine_reply(state: SharedGame, request: AiRequest, delay: std::time::Duration) {
    tokio::time::sleep(delay).await;

    let reply = match tokio::task::spawn_blocking(move || request.run()).await {
        Ok(reply) => reply,
        Err(err) => {
            log::warn!("engine search failed: {}", err);
            return;
        }
    };

    match lock(&state).complete_ai_move(reply) {
        Ok(Some(record)) => log::debug!("engine committed {}", record.san),
        Ok(None) => {}
        Err(err) => log::warn!("engine reply rejected: {}", err),
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.cancel_ai();
        self.stop_clock();
    }
}
