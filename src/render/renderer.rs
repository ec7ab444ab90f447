use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, GameConfig, Scene};
use crate::metrics::GameMetrics;

pub struct Renderer {
    grid_width: i32,
    grid_height: i32,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
        }
    }

    pub fn render(&self, frame: &mut Frame, scene: &Scene, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Score bar
            ])
            .split(frame.area());

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[0])[1];

        let grid = self.render_grid(game_area, scene);
        frame.render_widget(grid, game_area);

        // Score bar below the grid
        let score_bar = self.render_score_bar(chunks[1], scene, metrics);
        frame.render_widget(score_bar, chunks[1]);
    }

    fn render_grid(&self, _area: Rect, scene: &Scene) -> Paragraph<'_> {
        let head = scene.snake.last().copied();
        let mut lines = Vec::new();

        // Cells sitting at the wrap boundary (x == grid_width or
        // y == grid_height) fall outside the drawn grid for that one tick.
        for y in 0..self.grid_height {
            let mut spans = Vec::new();

            for x in 0..self.grid_width {
                let pos = Cell::new(x, y);

                let cell = if head == Some(pos) {
                    // Snake head - distinct color
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if scene.snake.contains(&pos) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == scene.food {
                    // Food
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_score_bar(
        &self,
        _area: Rect,
        scene: &Scene,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                format!("Score: {}", scene.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
