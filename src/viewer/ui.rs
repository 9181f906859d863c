use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

use super::app::ViewerApp;
use crate::utils::gap_between;

pub struct UI;

impl UI {
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    pub fn restore_terminal() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    pub fn render(frame: &mut Frame, app: &mut ViewerApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        Self::render_header(frame, chunks[0], app);
        app.render_list(frame, chunks[1]);
        Self::render_footer(frame, chunks[2], app);

        if app.help_modal().is_visible() {
            let modal_area = Self::centered_area(frame.area(), 70, 80);
            app.help_modal().render(frame, modal_area);
        }
    }

    fn centered_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    fn render_header(frame: &mut Frame, area: Rect, app: &ViewerApp) {
        let items = app.accordion().items();
        let expanded = app
            .accordion()
            .view()
            .expanded()
            .map(|entry| format!("Open: #{}", entry.id))
            .unwrap_or_else(|| "Open: none".to_string());

        let title = vec![
            Span::styled(
                " FAQVIEW ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("| "),
            Span::styled(
                format!("{} questions ", items.len()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("| "),
            Span::styled(expanded, Style::default().fg(Color::Green)),
        ];

        let header = Paragraph::new(Line::from(title)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(header, area);
    }

    fn render_footer(frame: &mut Frame, area: Rect, app: &ViewerApp) {
        let left = match app.message() {
            Some(message) => message.to_string(),
            None => "?: Help | Enter: Toggle | q: Quit".to_string(),
        };
        let right = match app.selected() {
            Some(i) => format!("{}/{}", i + 1, app.accordion().items().len()),
            None => "0/0".to_string(),
        };
        let gap = gap_between(&left, &right, area.width.saturating_sub(2) as usize);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled(left, Style::default().fg(Color::Yellow)),
            Span::raw(" ".repeat(gap)),
            Span::styled(right, Style::default().fg(Color::Gray)),
        ]))
        .block(Block::default().borders(Borders::ALL));

        frame.render_widget(footer, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::ItemList;
    use ratatui::backend::TestBackend;

    fn screen(app: &mut ViewerApp, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| UI::render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn render_shows_header_list_and_footer() {
        let mut app = ViewerApp::new(Config::default(), ItemList::new(crate::data::sample_items()).unwrap());
        let text = screen(&mut app, 80, 20);
        assert!(text.contains("FAQVIEW"));
        assert!(text.contains("What is faqview?"));
        assert!(text.contains("1/5"));
    }

    #[test]
    fn render_empty_list_shows_placeholder_and_zero_position() {
        let mut app = ViewerApp::new(Config::default(), ItemList::empty());
        let text = screen(&mut app, 60, 12);
        assert!(text.contains("No items to show."));
        assert!(text.contains("0/0"));
    }

    #[test]
    fn centered_area_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let area = UI::centered_area(parent, 70, 80);
        assert!(area.x >= parent.x && area.right() <= parent.right());
        assert!(area.y >= parent.y && area.bottom() <= parent.bottom());
        assert_eq!(area.width, 70);
    }
}
