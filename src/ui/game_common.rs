//! Shared layout and widgets for the game screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: u64 = 2;

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Main content area, inside the outer border
    pub content: Rect,
    /// Status bar area (2 lines) at the bottom, inside the outer border
    pub status_bar: Rect,
}

/// Create the game layout with an outer border.
///
/// ```text
/// ┌─ Title ───────────────┐
/// │                       │
/// │   [content area]      │
/// │                       │
/// │ [status bar - 2 lines]│
/// └───────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
    }
}

/// Largest rect inside `area` that shows a `world_width` x `world_height`
/// board undistorted, centered.
pub fn fit_playfield(area: Rect, world_width: i32, world_height: i32) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0 || world_height <= 0 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let (world_width, world_height) = (world_width as u64, world_height as u64);
    let (area_width, area_height) = (area.width as u64, area.height as u64);

    let cols_for_full_height = area_height * world_width * CELL_ASPECT / world_height;
    let (cols, rows) = if cols_for_full_height <= area_width {
        (cols_for_full_height.max(1), area_height)
    } else {
        let rows = area_width * world_height / (world_width * CELL_ASPECT);
        (area_width, rows.max(1))
    };

    // Both values are at most the area's own size, which fits in u16
    let cols = u16::try_from(cols).unwrap_or(area.width).min(area.width);
    let rows = u16::try_from(rows).unwrap_or(area.height).min(area.height);
    Rect::new(
        area.x + (area.width - cols) / 2,
        area.y + (area.height - rows) / 2,
        cols,
        rows,
    )
}

/// Render a status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Flap")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    // Line 1: Status message (centered)
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    // Line 2: Controls (centered)
    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render a centered "Game Over" banner over `area`.
///
/// Does not clear the area, so the final board stays visible around it.
pub fn render_game_over_banner(frame: &mut Frame, area: Rect, hint: &str) {
    if area.height == 0 {
        return;
    }
    let middle = area.y + area.height / 2;

    let title = Paragraph::new(Line::from(Span::styled(
        "Game Over",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, Rect::new(area.x, middle, area.width, 1));

    if middle + 1 < area.y + area.height {
        let hint = Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::White).bg(Color::Black),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, Rect::new(area.x, middle + 1, area.width, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_playfield_limited_by_height() {
        // 360x640 board, 30 rows -> 33 cols
        let rect = fit_playfield(Rect::new(0, 0, 100, 30), 360, 640);
        assert_eq!(rect.height, 30);
        assert_eq!(rect.width, 33);
        assert_eq!(rect.x, (100 - 33) / 2);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn test_fit_playfield_limited_by_width() {
        let rect = fit_playfield(Rect::new(2, 3, 18, 40), 360, 640);
        assert_eq!(rect.width, 18);
        assert_eq!(rect.height, 16);
        assert_eq!(rect.x, 2);
        assert_eq!(rect.y, 3 + (40 - 16) / 2);
    }

    #[test]
    fn test_fit_playfield_extreme_boards() {
        // Very wide board: a single row spanning the full width
        let rect = fit_playfield(Rect::new(0, 0, 80, 40), 1_000_000, 1);
        assert_eq!(rect.width, 80);
        assert_eq!(rect.height, 1);

        // Very tall board: a single column spanning the full height
        let rect = fit_playfield(Rect::new(0, 0, 80, 40), 1, 1_000_000);
        assert_eq!(rect.width, 1);
        assert_eq!(rect.height, 40);

        let rect = fit_playfield(Rect::new(0, 0, u16::MAX, u16::MAX), i32::MAX, i32::MAX);
        assert!(rect.width <= u16::MAX && rect.height <= u16::MAX);
    }

    #[test]
    fn test_fit_playfield_empty_area() {
        let rect = fit_playfield(Rect::new(5, 5, 0, 10), 360, 640);
        assert_eq!(rect.width, 0);
        assert_eq!(rect.height, 0);
    }
}
