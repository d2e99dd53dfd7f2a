use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Phase, Position};

const BACKGROUND: Color = Color::Black;
const SNAKE: Color = Color::Rgb(50, 205, 50);
const FOOD: Color = Color::Rgb(255, 165, 0);
const TEXT: Color = Color::Rgb(0, 255, 0);

/// Terminal columns per grid cell, so cells come out roughly square
const CELL_WIDTH: u16 = 2;

pub const START_PROMPT: &str = "Press \"s\" to start new game";
pub const DIFFICULTY_PROMPT: &str = "Press \"+\" or \"-\" to change difficulty";

/// HUD text, one entry per line
pub fn hud_lines(state: &GameState) -> [String; 3] {
    [
        format!("Score: {}", state.score),
        format!("Timer: {}", state.counter),
        format!("Level: {}", state.difficulty.level()),
    ]
}

/// Overlay text for the current phase; `None` while the game runs.
/// Empty strings are spacer lines.
pub fn overlay_lines(state: &GameState) -> Option<Vec<String>> {
    match state.phase {
        Phase::Running => None,
        Phase::Menu => Some(vec![
            "Welcome!".to_string(),
            String::new(),
            START_PROMPT.to_string(),
            String::new(),
            DIFFICULTY_PROMPT.to_string(),
        ]),
        Phase::Paused => Some(vec![
            "Paused!".to_string(),
            String::new(),
            format!("Your score: {}", state.score),
        ]),
        Phase::GameOver => Some(vec![
            format!("Gameover! Your score: {}", state.score),
            String::new(),
            START_PROMPT.to_string(),
        ]),
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(BACKGROUND)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // HUD
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(area);

        frame.render_widget(self.render_hud(state), chunks[0]);

        let board_area = centered(
            chunks[1],
            bordered(state.grid.cols(), CELL_WIDTH),
            bordered(state.grid.rows(), 1),
        );
        frame.render_widget(self.render_board(state, board_area), board_area);

        if let Some(lines) = overlay_lines(state) {
            let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            let popup = centered(board_area, bordered(widest + 2, 1), bordered(lines.len(), 1));
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_overlay(state.phase, lines), popup);
        }

        frame.render_widget(self.render_controls(state.phase), chunks[2]);
    }

    fn render_hud(&self, state: &GameState) -> Paragraph<'static> {
        let lines: Vec<Line> = hud_lines(state)
            .into_iter()
            .map(|text| Line::from(Span::styled(text, Style::default().fg(TEXT))))
            .collect();

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    /// Only the cells that fit inside `area` are built
    fn render_board(&self, state: &GameState, area: Rect) -> Paragraph<'static> {
        let blank = " ".repeat(CELL_WIDTH as usize);
        let rows = state.grid.rows().min(area.height.saturating_sub(2) as usize);
        let cols = state
            .grid
            .cols()
            .min((area.width.saturating_sub(2) / CELL_WIDTH) as usize);
        let mut lines = Vec::with_capacity(rows);

        for y in 0..rows {
            let spans: Vec<Span> = (0..cols)
                .map(|x| {
                    let pos = Position::new(x as i32, y as i32);
                    let fill = if state.is_occupied_by_snake(pos) {
                        SNAKE
                    } else if state.food == Some(pos) {
                        FOOD
                    } else {
                        BACKGROUND
                    };
                    Span::styled(blank.clone(), Style::default().bg(fill))
                })
                .collect();

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_overlay(&self, phase: Phase, lines: Vec<String>) -> Paragraph<'static> {
        let border = if phase == Phase::GameOver {
            Color::Red
        } else {
            TEXT
        };
        let text: Vec<Line> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == 0 {
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(TEXT)
                };
                Line::from(Span::styled(line, style))
            })
            .collect();

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .style(Style::default().bg(BACKGROUND)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'static> {
        let hint = match phase {
            Phase::Running => " to steer | P to pause | Q for menu | Esc to exit",
            Phase::Paused => " | P to resume | Q for menu | Esc to exit",
            Phase::Menu | Phase::GameOver => " | S to start | +/- difficulty | Esc to exit",
        };
        let lead = if phase == Phase::Running { "↑↓←→" } else { "" };

        let text = Line::from(vec![
            Span::styled(lead, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::Gray)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Terminal extent of `count` items `unit` columns wide plus a border,
/// saturating at the largest terminal coordinate
fn bordered(count: usize, unit: u16) -> u16 {
    u16::try_from(count)
        .unwrap_or(u16::MAX)
        .saturating_mul(unit)
        .saturating_add(2)
}

/// A `width` x `height` rect centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Difficulty, Grid, Snake, Velocity};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn state(phase: Phase) -> GameState {
        GameState {
            phase,
            snake: Snake::from_segments(vec![Position::new(3, 2), Position::new(2, 2)]).unwrap(),
            velocity: Velocity::ZERO,
            food: Some(Position::new(7, 4)),
            score: 30,
            counter: 12,
            difficulty: Difficulty::new(1),
            grid: Grid::new(30, 20),
        }
    }

    fn draw(state: &GameState) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, state))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn contains(buffer: &Buffer, text: &str) -> bool {
        rows(buffer).iter().any(|row| row.contains(text))
    }

    #[test]
    fn test_hud_lines() {
        assert_eq!(
            hud_lines(&state(Phase::Running)),
            [
                "Score: 30".to_string(),
                "Timer: 12".to_string(),
                "Level: 1".to_string()
            ]
        );
    }

    #[test]
    fn test_overlay_text_per_phase() {
        assert_eq!(overlay_lines(&state(Phase::Running)), None);

        let menu = overlay_lines(&state(Phase::Menu)).unwrap();
        assert!(menu.contains(&START_PROMPT.to_string()));
        assert!(menu.contains(&DIFFICULTY_PROMPT.to_string()));

        let paused = overlay_lines(&state(Phase::Paused)).unwrap();
        assert_eq!(paused[0], "Paused!");
        assert!(paused.contains(&"Your score: 30".to_string()));

        let over = overlay_lines(&state(Phase::GameOver)).unwrap();
        assert_eq!(over[0], "Gameover! Your score: 30");
        assert!(over.contains(&START_PROMPT.to_string()));
    }

    #[test]
    fn test_running_frame_shows_hud_and_cells() {
        let state = state(Phase::Running);
        let buffer = draw(&state);

        assert!(contains(&buffer, "Score: 30"));
        assert!(contains(&buffer, "Timer: 12"));
        assert!(contains(&buffer, "Level: 1"));
        assert!(!contains(&buffer, "Welcome!"));

        // Board is 62x22, centred in the 80x26 middle chunk below the HUD
        let origin_x = (80 - 62) / 2 + 1;
        let origin_y = 3 + (26 - 22) / 2 + 1;
        let cell = |pos: Position| (origin_x + pos.x as u16 * CELL_WIDTH, origin_y + pos.y as u16);

        assert_eq!(buffer[cell(Position::new(3, 2))].bg, SNAKE);
        assert_eq!(buffer[cell(Position::new(2, 2))].bg, SNAKE);
        assert_eq!(buffer[cell(Position::new(7, 4))].bg, FOOD);
        assert_eq!(buffer[cell(Position::new(0, 0))].bg, BACKGROUND);
    }

    #[test]
    fn test_menu_frame_shows_prompts() {
        let buffer = draw(&state(Phase::Menu));

        assert!(contains(&buffer, "Welcome!"));
        assert!(contains(&buffer, START_PROMPT));
        assert!(contains(&buffer, DIFFICULTY_PROMPT));
    }

    #[test]
    fn test_game_over_frame() {
        let buffer = draw(&state(Phase::GameOver));

        assert!(contains(&buffer, "Gameover! Your score: 30"));
        assert!(contains(&buffer, START_PROMPT));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal
            .draw(|frame| Renderer::new().render(frame, &state(Phase::Menu)))
            .unwrap();
    }

    #[test]
    fn test_oversized_grid_is_clipped_to_terminal() {
        let state = GameState {
            grid: Grid::new(40_000, 70_000),
            ..state(Phase::Menu)
        };
        let buffer = draw(&state);

        assert!(contains(&buffer, "Score: 30"));
        assert!(contains(&buffer, START_PROMPT));
        // Board fills the whole 80x26 middle chunk; (3,2) is a snake cell
        assert_eq!(buffer[(1 + 3 * CELL_WIDTH, 4 + 2)].bg, SNAKE);
    }

    #[test]
    fn test_bordered_saturates() {
        assert_eq!(bordered(30, CELL_WIDTH), 62);
        assert_eq!(bordered(20, 1), 22);
        assert_eq!(bordered(40_000, CELL_WIDTH), u16::MAX);
        assert_eq!(bordered(usize::MAX, 1), u16::MAX);
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(centered(area, 4, 2), Rect::new(5, 4, 4, 2));
        assert_eq!(centered(area, 50, 50), area);
    }
}
