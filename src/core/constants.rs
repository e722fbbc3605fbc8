// Playfield (world units)
pub const BOARD_WIDTH: i32 = 360;
pub const BOARD_HEIGHT: i32 = 640;

// Bird
pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;

// Pipes
pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;
pub const PIPE_GAP: i32 = BOARD_HEIGHT / 4;
/// Upper bound for any configured size or per-tick speed. Keeps every
/// position sum the game computes well inside `i32`.
pub const MAX_DIMENSION: i32 = 1_000_000;

// Physics, per tick
pub const GRAVITY: i32 = 1;
pub const JUMP_VELOCITY: i32 = -9;
pub const PIPE_VELOCITY: i32 = -4;

// Timing
pub const TICK_INTERVAL_MS: u64 = 1000 / 60;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1500;
/// Longest frame gap fed to the scheduler; anything beyond is dropped.
pub const MAX_FRAME_MS: u64 = 250;
/// Input poll timeout for the terminal loop (~60 FPS redraw).
pub const REALTIME_FRAME_MS: u64 = 16;

// Files under ~/.flappy/
pub const DATA_DIR_NAME: &str = ".flappy";
pub const HIGH_SCORE_FILE: &str = "flappy_high_score.txt";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flappy.log";
