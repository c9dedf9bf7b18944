//! Frame drawing: board grid, score line, help overlay, and banners.
//!
//! Every function here is a pure view over game state, so the whole module
//! is exercised against ratatui's `TestBackend`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use wurm_core::game::Game;
use wurm_core::geometry::Point;

/// Draw one full frame: score line, board grid, key hints, and the help
/// overlay while the game is paused.
pub fn draw(frame: &mut Frame, game: &Game) {
    let [header, board, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(game.height() as u16),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(score_line(game), header);
    frame.render_widget(board_grid(game), board);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "arrows/wasd steer   h help   1/2/3 swap   q quit",
            Style::new().fg(Color::DarkGray),
        )),
        footer,
    );
    if game.help_active() {
        help_overlay(frame, board);
    }
}

/// Draw an end-of-game banner in a centered box.
pub fn banner(frame: &mut Frame, title: &str, color: Color) {
    let rect = centered(frame.area(), 24, 6);
    frame.render_widget(Clear, rect);
    let lines = vec![
        Line::styled(
            title.to_string(),
            Style::new().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw("press any key"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        rect,
    );
}

fn score_line(game: &Game) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            "wurm",
            Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   score {}", game.score())),
    ];
    if game.help_active() {
        spans.push(Span::styled("   [paused]", Style::new().fg(Color::Yellow)));
    }
    Paragraph::new(Line::from(spans))
}

fn board_grid(game: &Game) -> Paragraph<'static> {
    let mut lines = Vec::with_capacity(game.height() as usize);
    for y in 0..game.height() {
        let spans: Vec<Span> = (0..game.width())
            .map(|x| cell(game, Point::new(x, y)))
            .collect();
        lines.push(Line::from(spans));
    }
    Paragraph::new(lines)
}

fn cell(game: &Game, p: Point) -> Span<'static> {
    let snake = game.snake();
    // Head before border: the final frame of a wall crash still shows it.
    if snake.head() == p {
        return Span::styled(
            "■ ",
            Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
    }
    if p.x == 0 || p.y == 0 || p.x == game.width() - 1 || p.y == game.height() - 1 {
        return Span::styled("# ", Style::new().fg(Color::Gray));
    }
    if snake.occupies(p) {
        return Span::styled("□ ", Style::new().fg(Color::Green));
    }
    if game.food() == p {
        return Span::styled(
            "O ",
            Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
    }
    if game.obstacles().contains(&p) {
        return Span::styled("X ", Style::new().fg(Color::Magenta));
    }
    Span::styled(". ", Style::new().fg(Color::DarkGray))
}

fn help_overlay(frame: &mut Frame, area: Rect) {
    let rect = centered(area, 36, 7);
    frame.render_widget(Clear, rect);
    let lines = vec![
        Line::raw("arrows / wasd     steer"),
        Line::raw("h                 resume"),
        Line::raw("1 / 2 / 3         swap frontend"),
        Line::raw("q / esc           quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" paused ")),
        rect,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
