//! A play session: the game state plus everything that drives it.
//!
//! The session owns the scheduler, the high score store and the RNG, and is
//! the only place game state is mutated. The terminal loop calls into it from
//! a single thread, so ticks, spawns, input and rendering never interleave.

use super::config::GameConfig;
use super::game_state::{ActionOutcome, GameState, TickResult};
use super::scheduler::{Scheduler, TimerEvent};
use crate::utils::score_store::ScoreStore;
use rand::Rng;
use std::time::Duration;

pub struct Session<S: ScoreStore, R: Rng> {
    state: GameState,
    scheduler: Scheduler,
    store: S,
    rng: R,
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    /// Load the high score from `store` and start the first round.
    pub fn new(config: GameConfig, store: S, rng: R) -> Self {
        let high_score = store.load();
        log::info!("Loaded high score {}", high_score);

        let mut scheduler = Scheduler::new(config.tick_interval_ms, config.pipe_spawn_interval_ms);
        scheduler.start();

        Self {
            state: GameState::with_high_score(config, high_score),
            scheduler,
            store,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for tests and debugging setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn timers_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Feed elapsed time and run every tick and spawn that came due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.scheduler.advance(elapsed);
        while let Some(event) = self.scheduler.pop_due() {
            match event {
                TimerEvent::Tick => {
                    let result = self.state.tick();
                    self.after_tick(result);
                }
                TimerEvent::SpawnPipes => self.state.spawn_pipe_pair(&mut self.rng),
            }
        }
    }

    fn after_tick(&mut self, result: TickResult) {
        if !result.round_over {
            return;
        }

        self.scheduler.stop();
        log::info!("Round over with score {}", self.state.display_score());

        if let Some(high_score) = result.new_high_score {
            log::info!("New high score {}", high_score);
            if let Err(e) = self.store.save(high_score) {
                log::warn!("Error saving high score: {}", e);
            }
        }
    }

    /// Handle the primary action: flap, or start a new round once over.
    pub fn primary_action(&mut self) -> ActionOutcome {
        let outcome = self.state.primary_action();
        if outcome == ActionOutcome::Restarted {
            self.scheduler.start();
            log::debug!("Round restarted");
        }
        outcome
    }
}
