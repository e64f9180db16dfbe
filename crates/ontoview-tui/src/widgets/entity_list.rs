//! Entity list widget: flat listing for the non-class sections
//! (individuals and the three property kinds).

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ontoview_core::NamedEntity;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

#[derive(Debug, Default)]
pub struct EntityListState {
    pub cursor: usize,
}

impl EntityListState {
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        match event {
            AppEvent::TreeNav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::TreeNav(Direction::Down) => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            _ => {}
        }
    }
}

pub struct EntityList<'a> {
    title: &'a str,
    entities: &'a [NamedEntity],
    state: &'a EntityListState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> EntityList<'a> {
    pub fn new(
        title: &'a str,
        entities: &'a [NamedEntity],
        state: &'a EntityListState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            title,
            entities,
            state,
            focused,
            theme,
        }
    }
}

impl Widget for EntityList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title(self.title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .entities
            .iter()
            .map(|e| {
                let mut spans = vec![Span::styled(e.display_name().to_string(), self.theme.tree_leaf)];
                if e.label.is_some() {
                    spans.push(Span::styled(format!("  ({})", e.name), self.theme.border_unfocused));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let selected = (!self.entities.is_empty())
            .then_some(self.state.cursor.min(self.entities.len().saturating_sub(1)));
        let list = List::new(items).highlight_style(self.theme.tree_cursor);
        let mut list_state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}
