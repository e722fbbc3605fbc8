//! UI rendering for the Flappy Bird game.
//!
//! Stateless: everything drawn comes from the `GameState` passed in. Draw
//! order is fixed: background, bird, pipes (in spawn order), score, high
//! score, and the "Game Over" banner while the round is over.

use crate::core::game_state::GameState;
use crate::core::types::Bounds;
use crate::ui::assets::{Assets, Sprite};
use crate::ui::game_common::{
    create_game_layout, fit_playfield, render_game_over_banner, render_status_bar,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &GameState, assets: &Assets) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan);
    let field = fit_playfield(
        layout.content,
        game.config.board_width,
        game.config.board_height,
    );

    render_play_area(frame, field, game, assets);
    render_scores(frame, field, game);
    if game.is_over() {
        render_game_over_banner(frame, field, "Press Space to restart");
    }
    render_status_bar_content(frame, layout.status_bar, game);
}

/// Render background, bird and pipes.
fn render_play_area(frame: &mut Frame, area: Rect, game: &GameState, assets: &Assets) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let cells = compose_playfield(game, assets, area.width, area.height);
    let lines: Vec<Line> = cells
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|sprite| Span::styled(sprite.glyph.to_string(), sprite.style()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Rasterize the board into `cols` x `rows` cells, painting in draw order so
/// later sprites cover earlier ones.
pub fn compose_playfield(game: &GameState, assets: &Assets, cols: u16, rows: u16) -> Vec<Vec<Sprite>> {
    let mut cells = vec![vec![assets.background; cols as usize]; rows as usize];
    let world = (game.config.board_width, game.config.board_height);

    let mut paint = |bounds: Bounds, sprite: Sprite| {
        let Some((c0, c1)) = project_span(bounds.x, bounds.width, world.0, cols) else {
            return;
        };
        let Some((r0, r1)) = project_span(bounds.y, bounds.height, world.1, rows) else {
            return;
        };
        for row in &mut cells[r0..r1] {
            for cell in &mut row[c0..c1] {
                *cell = sprite;
            }
        }
    };

    paint(game.bird.bounds(), assets.bird);
    for pipe in &game.pipes {
        paint(pipe.bounds(), *assets.pipe(pipe.kind));
    }

    cells
}

/// Map a world-space span onto cell indices `[start, end)`, clipped to the
/// screen. Anything that overlaps a cell at all covers it.
fn project_span(start: i32, len: i32, world: i32, cells: u16) -> Option<(usize, usize)> {
    if world <= 0 || len <= 0 {
        return None;
    }
    let (start, end, world, cells) = (
        start as i64,
        start as i64 + len as i64,
        world as i64,
        cells as i64,
    );

    let first = (start * cells).div_euclid(world).clamp(0, cells);
    let last = (-(-end * cells).div_euclid(world)).clamp(0, cells);
    (first < last).then_some((first as usize, last as usize))
}

/// Render score and high score in the top-left corner of the board.
fn render_scores(frame: &mut Frame, area: Rect, game: &GameState) {
    let text_style = Style::default()
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);
    let lines = [
        format!("Score: {}", game.display_score()),
        format!("High Score: {}", game.high_score),
    ];

    for (offset, text) in lines.into_iter().enumerate() {
        let offset = offset as u16;
        if offset >= area.height {
            return;
        }
        let width = (text.chars().count() as u16).min(area.width);
        frame.render_widget(
            Paragraph::new(Span::styled(text, text_style)),
            Rect::new(area.x, area.y + offset, width, 1),
        );
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &GameState) {
    if game.is_over() {
        render_status_bar(
            frame,
            area,
            &format!("Crashed with {} points", game.display_score()),
            Color::Red,
            &[("[Space]", "Restart"), ("[Esc]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}  Best: {}", game.display_score(), game.high_score),
            Color::Green,
            &[("[Space/Up/Enter]", "Flap"), ("[Esc]", "Quit")],
        );
    }
}
