use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::accordion::ListView;
use crate::config::Config;
use crate::utils::{gap_between, truncate_str, wrap_text};

const HIGHLIGHT_SYMBOL: &str = "> ";
const ANSWER_INDENT: &str = "  ";

/// Terminal rendering of the accordion plus the cursor over its rows.
///
/// Holds no accordion state itself; every frame is built from a [`ListView`].
pub struct AccordionView {
    state: ListState,
    heights: Vec<u16>,
}

impl AccordionView {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            heights: Vec::new(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Keep the cursor on a valid row after the item count is known.
    pub fn sync_len(&mut self, len: usize) {
        let selected = match (len, self.state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.state.select(selected);
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn first(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn last(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    /// Map a terminal row inside `area` to the item drawn there, using the
    /// scroll offset and row heights from the last render.
    pub fn item_at_row(&self, area: Rect, row: u16) -> Option<usize> {
        let inner_top = area.y.saturating_add(1);
        let inner_bottom = area.y + area.height.saturating_sub(1);
        if row < inner_top || row >= inner_bottom {
            return None;
        }

        let mut y = inner_top;
        for (index, height) in self.heights.iter().enumerate().skip(self.state.offset()) {
            if row < y + height {
                return Some(index);
            }
            y += height;
        }
        None
    }

    pub fn build_items(view: &ListView<'_>, config: &Config, width: u16) -> Vec<ListItem<'static>> {
        let content_width = (width as usize).saturating_sub(HIGHLIGHT_SYMBOL.len());
        let question_style = Style::default()
            .fg(config.colors.question_color())
            .add_modifier(Modifier::BOLD);
        let answer_style = Style::default().fg(config.colors.answer_color());
        let indicator_style = Style::default().fg(config.colors.indicator_color());

        view.entries()
            .iter()
            .map(|entry| {
                let indicator = config.indicator.glyph(entry.state);
                let question = truncate_str(entry.question, content_width.saturating_sub(2));
                let gap = gap_between(&question, indicator, content_width);

                let mut lines = vec![Line::from(vec![
                    Span::styled(question, question_style),
                    Span::raw(" ".repeat(gap)),
                    Span::styled(indicator, indicator_style),
                ])];

                if let Some(answer) = entry.answer {
                    let wrap_width = content_width.saturating_sub(ANSWER_INDENT.len());
                    lines.extend(wrap_text(answer, wrap_width).into_iter().map(|text| {
                        Line::from(vec![
                            Span::raw(ANSWER_INDENT),
                            Span::styled(text, answer_style),
                        ])
                    }));
                }

                ListItem::new(lines)
            })
            .collect()
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, view: &ListView<'_>, config: &Config) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Questions ");

        if view.is_placeholder() {
            self.heights.clear();
            let placeholder = Paragraph::new(Line::from(Span::styled(
                config.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let inner_width = area.width.saturating_sub(2);
        let items = Self::build_items(view, config, inner_width);
        self.heights = items.iter().map(|item| item.height() as u16).collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

impl Default for AccordionView {
    fn default() -> Self {
        Self::new()
    }
}
