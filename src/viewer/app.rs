use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};
use std::time::Duration;

use crate::accordion::ExpandableList;
use crate::config::Config;
use crate::models::{ItemList, ItemState};

use super::ui::UI;
use super::widgets::{AccordionView, HelpModal};

/// How long to wait for input before redrawing.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

pub struct ViewerApp {
    config: Config,
    accordion: ExpandableList,
    accordion_view: AccordionView,
    help_modal: HelpModal,

    running: bool,
    message: Option<String>,
    list_area: Rect,
}

impl ViewerApp {
    pub fn new(config: Config, items: ItemList) -> Self {
        let mut accordion_view = AccordionView::new();
        accordion_view.sync_len(items.len());

        Self {
            config,
            accordion: ExpandableList::new(items),
            accordion_view,
            help_modal: HelpModal::new(),
            running: true,
            message: None,
            list_area: Rect::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_message(&mut self, msg: String) {
        self.message = Some(msg);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn accordion(&self) -> &ExpandableList {
        &self.accordion
    }

    pub fn help_modal(&self) -> &HelpModal {
        &self.help_modal
    }

    pub fn selected(&self) -> Option<usize> {
        self.accordion_view.selected()
    }

    fn len(&self) -> usize {
        self.accordion.items().len()
    }

    pub fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        self.list_area = area;
        let view = self.accordion.view();
        self.accordion_view.render(frame, area, &view, &self.config);
    }

    pub fn toggle_selected(&mut self) {
        let Some(item) = self
            .accordion_view
            .selected()
            .and_then(|i| self.accordion.items().get_index(i))
        else {
            return;
        };
        let id = item.id;

        let verb = match self.accordion.toggle(id) {
            ItemState::Expanded => "Expanded",
            ItemState::Collapsed => "Collapsed",
        };
        self.set_message(format!("{} item {}", verb, id));
    }

    pub fn collapse_expanded(&mut self) {
        if let Some(id) = self.accordion.expanded_id() {
            self.accordion.toggle(id);
            self.set_message(format!("Collapsed item {}", id));
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        tracing::debug!("Key pressed: {:?} ({:?})", code, modifiers);
        self.clear_message();

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Char('h') => {
                    self.help_modal.toggle();
                    return;
                }
                _ => {}
            }
        }

        if self.help_modal.is_visible() {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.help_modal.hide();
                }
                _ => {}
            }
            return;
        }

        let len = self.len();
        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.help_modal.toggle(),
            KeyCode::Down | KeyCode::Char('j') => self.accordion_view.next(len),
            KeyCode::Up | KeyCode::Char('k') => self.accordion_view.prev(len),
            KeyCode::Home | KeyCode::Char('g') => self.accordion_view.first(len),
            KeyCode::End | KeyCode::Char('G') => self.accordion_view.last(len),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Esc => self.collapse_expanded(),
            _ => {}
        }
    }

    pub fn handle_mouse_click(&mut self, column: u16, row: u16) {
        if self.help_modal.is_visible() || !Self::point_in_rect((column, row), self.list_area) {
            return;
        }
        if let Some(index) = self.accordion_view.item_at_row(self.list_area, row) {
            self.accordion_view.select(Some(index));
            self.toggle_selected();
        }
    }

    fn point_in_rect(pos: (u16, u16), rect: Rect) -> bool {
        let (x, y) = pos;
        x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
    }

    pub async fn handle_events(&mut self) -> Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key.code, key.modifiers);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                self.handle_mouse_click(mouse.column, mouse.row);
            }
            _ => {}
        }
        Ok(())
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = UI::setup_terminal()?;
        tracing::info!("Viewer started with {} items", self.len());

        let result = async {
            while self.is_running() {
                terminal.draw(|frame| UI::render(frame, self))?;
                self.handle_events().await?;
            }
            Ok::<(), anyhow::Error>(())
        }
        .await;

        UI::restore_terminal()?;
        tracing::info!("Viewer stopped");
        result
    }
}
