pub mod assets;
pub mod flappy_scene;
pub mod game_common;

pub use assets::{Assets, Sprite};
pub use flappy_scene::render_flappy;
