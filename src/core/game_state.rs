//! Core game state and the per-tick update.
//!
//! `GameState` is plain data plus the rules that mutate it. It knows nothing
//! about timers, terminals or files; the [`Session`](crate::core::session::Session)
//! drives it and the UI only reads it.

use super::config::GameConfig;
use super::types::{collision, Bird, Pipe, PipeKind, RoundStatus};
use rand::Rng;

/// Everything that happened during one tick.
///
/// Lets the session react to the round ending (stop timers, persist the high
/// score) without the state reaching out to those collaborators itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Individual pipes (not pairs) the bird cleared this tick.
    pub pipes_passed: u32,
    /// The round went from Running to Over on this tick.
    pub round_over: bool,
    /// Set when the round ended with a score above the previous high score.
    pub new_high_score: Option<u32>,
}

/// What the primary action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Round in play: the bird flapped.
    Jumped,
    /// Round over: a new round started.
    Restarted,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub bird: Bird,
    /// Live pipes in spawn order (also render order).
    pub pipes: Vec<Pipe>,
    /// Pipes passed this round; each one is worth half a point.
    pub half_points: u32,
    pub high_score: u32,
    pub status: RoundStatus,
}

impl GameState {
    /// Fresh round with no recorded high score.
    pub fn new(config: GameConfig) -> Self {
        Self::with_high_score(config, 0)
    }

    /// Fresh round carrying a high score loaded from a previous session.
    pub fn with_high_score(config: GameConfig, high_score: u32) -> Self {
        let bird = Bird {
            x: config.bird_x(),
            y: config.bird_start_y(),
            width: config.bird_width,
            height: config.bird_height,
            velocity_y: 0,
        };
        Self {
            config,
            bird,
            pipes: Vec::new(),
            half_points: 0,
            high_score,
            status: RoundStatus::Running,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status == RoundStatus::Over
    }

    /// Score as a half-integer (0.5 per pipe, 1.0 per pair).
    pub fn score(&self) -> f64 {
        self.half_points as f64 / 2.0
    }

    /// Score shown to the player and compared against the high score.
    pub fn display_score(&self) -> u32 {
        self.half_points / 2
    }

    /// Advance the world by one fixed timestep.
    pub fn tick(&mut self) -> TickResult {
        let mut result = TickResult::default();
        if self.is_over() {
            return result;
        }

        // Bird
        // Upward gravity keeps accelerating a bird pinned at the ceiling
        self.bird.velocity_y = self.bird.velocity_y.saturating_add(self.config.gravity);
        self.bird.y = self.bird.y.saturating_add(self.bird.velocity_y).max(0);

        // Pipes
        for pipe in &mut self.pipes {
            pipe.x += self.config.pipe_velocity;
        }
        self.pipes.retain(|pipe| !pipe.is_off_screen());

        // Scoring
        let bird_x = self.bird.x;
        for pipe in self
            .pipes
            .iter_mut()
            .filter(|pipe| !pipe.passed && bird_x > pipe.x + pipe.width)
        {
            pipe.passed = true;
            self.half_points += 1;
            result.pipes_passed += 1;
        }

        // Collisions
        let hit_pipe = self.pipes.iter().any(|pipe| collision(&self.bird, pipe));
        if hit_pipe || self.bird.y > self.config.board_height {
            self.finish_round(&mut result);
        }

        result
    }

    fn finish_round(&mut self, result: &mut TickResult) {
        self.status = RoundStatus::Over;
        result.round_over = true;

        let final_score = self.display_score();
        if final_score > self.high_score {
            self.high_score = final_score;
            result.new_high_score = Some(final_score);
        }
    }

    /// Set the bird's velocity to the jump impulse. Ignored once the round is
    /// over.
    pub fn jump(&mut self) {
        if self.is_over() {
            return;
        }
        self.bird.velocity_y = self.config.jump_velocity;
    }

    /// The single player input: flap while running, restart once over.
    pub fn primary_action(&mut self) -> ActionOutcome {
        if self.is_over() {
            self.reset();
            ActionOutcome::Restarted
        } else {
            self.jump();
            ActionOutcome::Jumped
        }
    }

    /// Append a top/bottom pipe pair at the right edge with a random gap.
    pub fn spawn_pipe_pair<R: Rng>(&mut self, rng: &mut R) {
        if self.is_over() {
            return;
        }

        let config = &self.config;
        let spread = (config.pipe_height / 2).max(1);
        let top_y = -(config.pipe_height / 4) - rng.gen_range(0..spread);
        let bottom_y = top_y + config.pipe_height + config.pipe_gap;

        for (kind, y) in [(PipeKind::Top, top_y), (PipeKind::Bottom, bottom_y)] {
            self.pipes.push(Pipe {
                x: config.board_width,
                y,
                width: config.pipe_width,
                height: config.pipe_height,
                kind,
                passed: false,
            });
        }
    }

    /// Start a new round. The high score is kept.
    pub fn reset(&mut self) {
        self.bird.y = self.config.bird_start_y();
        self.bird.velocity_y = 0;
        self.pipes.clear();
        self.half_points = 0;
        self.status = RoundStatus::Running;
    }
}
