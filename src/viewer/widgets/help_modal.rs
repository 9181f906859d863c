use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct HelpModal {
    visible: bool,
}

impl HelpModal {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Help ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));

        let paragraph = Paragraph::new(self.build_help_lines()).block(block);
        frame.render_widget(paragraph, area);
    }

    fn build_help_lines(&self) -> Vec<Line<'static>> {
        vec![
            Self::section_title("Keyboard Shortcuts"),
            Line::from(""),
            Self::subsection_title("Navigation"),
            Self::key_line("j / \u{2193}", "Next question"),
            Self::key_line("k / \u{2191}", "Previous question"),
            Self::key_line("g / Home", "First question"),
            Self::key_line("G / End", "Last question"),
            Line::from(""),
            Self::subsection_title("Answers"),
            Self::key_line("Enter / Space", "Expand or collapse the selected question"),
            Self::key_line("Esc", "Collapse the open answer"),
            Self::key_line("Mouse Click", "Select and toggle the clicked question"),
            Line::from(""),
            Self::subsection_title("Global"),
            Self::key_line("? / Ctrl+H", "Toggle this help"),
            Self::key_line("q / Ctrl+C / Ctrl+Q", "Quit"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Esc / Enter / q", Style::default().fg(Color::Yellow)),
                Span::styled(": Close help", Style::default().fg(Color::Gray)),
            ]),
        ]
    }

    fn section_title(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn subsection_title(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!("  {}", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn key_line(key: &str, description: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("    {:<22}", key), Style::default().fg(Color::Green)),
            Span::raw(description.to_string()),
        ])
    }
}

impl Default for HelpModal {
    fn default() -> Self {
        Self::new()
    }
}
