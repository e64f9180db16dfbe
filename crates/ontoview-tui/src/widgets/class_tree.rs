//! Class tree widget: collapsible, searchable class hierarchy in the left pane.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible rows.
//! - `Enter` clicks the focused class: parents toggle, leaves do nothing.
//! - `→`/`l` expands a collapsed parent; `←`/`h` collapses an expanded one.
//!
//! All tree state lives in a [`TreeSession`]; this module only adds a cursor
//! and paints the session's render tree.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ontoview_core::render::flatten;
use ontoview_core::{Forest, RenderNode, TreeEvent, TreeSession};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// Tree state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ClassTreeState {
    pub session: TreeSession,
    /// Index into the currently-visible (flattened) rows.
    pub cursor: usize,
}

impl ClassTreeState {
    pub fn new(forest: Forest) -> Self {
        Self {
            session: TreeSession::new(forest),
            cursor: 0,
        }
    }

    /// Flattened visible rows, cloned out of the render tree.
    pub fn rows(&self) -> Vec<RenderNode> {
        let tree = self.session.visible_tree();
        flatten(&tree).into_iter().cloned().collect()
    }

    fn cursor_row(&self) -> Option<RenderNode> {
        self.rows().into_iter().nth(self.cursor)
    }

    /// Handle an [`AppEvent`], mutating state as appropriate.
    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::TreeNav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "tree: cursor up");
            }
            AppEvent::TreeNav(Direction::Down) => {
                let max = self.rows().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "tree: cursor down");
            }
            AppEvent::TreeNav(Direction::Right) => {
                if let Some(row) = self.cursor_row() {
                    if row.has_children && !row.is_expanded {
                        self.session.on_toggle_node(&row.name);
                    }
                }
            }
            AppEvent::TreeNav(Direction::Left) => {
                if let Some(row) = self.cursor_row() {
                    if row.has_children && row.is_expanded {
                        self.session.on_toggle_node(&row.name);
                        self.clamp_cursor();
                    }
                }
            }
            AppEvent::Enter => {
                if let Some(intent) = self.cursor_row().and_then(|row| row.click()) {
                    self.session.handle(intent.into());
                    self.clamp_cursor();
                }
            }
            _ => {}
        }
    }

    /// Forward a new search term to the session.
    pub fn set_search_term(&mut self, term: &str) {
        self.session.handle(TreeEvent::SearchTermChanged(term.to_string()));
        self.clamp_cursor();
    }

    /// Swap in a fresh forest from the ontology service.
    pub fn replace_forest(&mut self, forest: Forest) {
        self.session.handle(TreeEvent::ForestReplaced(forest));
        self.cursor = 0;
    }

    fn clamp_cursor(&mut self) {
        let max = self.rows().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ClassTree<'a> {
    state: &'a ClassTreeState,
    focused: bool,
    indent_width: usize,
    theme: &'a Theme,
}

impl<'a> ClassTree<'a> {
    pub fn new(
        state: &'a ClassTreeState,
        focused: bool,
        indent_width: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            focused,
            indent_width,
            theme,
        }
    }

    fn row_line(&self, row: &RenderNode) -> Line<'static> {
        let indent = " ".repeat(row.depth * self.indent_width);
        let toggle = match (row.has_children, row.is_expanded) {
            (false, _) => "  ",
            (true, true) => "▼ ",
            (true, false) => "▶ ",
        };
        let base = if row.has_children {
            self.theme.tree_parent
        } else {
            self.theme.tree_leaf
        };
        let name_style = if row.is_match_highlighted {
            base.patch(self.theme.search_highlight)
        } else {
            base
        };
        Line::from(vec![
            Span::raw(format!("{indent}{toggle}")),
            Span::styled(row.name.clone(), name_style),
        ])
    }
}

impl Widget for ClassTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let session = &self.state.session;
        let title = if session.term().is_empty() {
            "Classes".to_string()
        } else {
            format!("Classes ({} match(es))", session.annotated().match_count())
        };

        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.state.rows();
        let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(self.row_line(row))).collect();

        let list = List::new(items).highlight_style(self.theme.tree_cursor);
        let selected = (!rows.is_empty()).then_some(self.state.cursor);
        let mut list_state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use ontoview_core::ClassNode;
    use pretty_assertions::assert_eq;

    /// Animal → [Bird, Mammal → [Cat, Dog]], Plant
    fn zoo() -> Forest {
        Forest::new(vec![
            ClassNode::new("Animal").with_children(vec![
                ClassNode::new("Bird"),
                ClassNode::new("Mammal").with_children(vec![
                    ClassNode::new("Cat"),
                    ClassNode::new("Dog"),
                ]),
            ]),
            ClassNode::new("Plant"),
        ])
    }

    fn names(state: &ClassTreeState) -> Vec<String> {
        state.rows().into_iter().map(|r| r.name).collect()
    }

    #[test]
    fn starts_collapsed() {
        let state = ClassTreeState::new(zoo());
        assert_eq!(names(&state), vec!["Animal", "Plant"]);
    }

    #[test]
    fn enter_toggles_parent() {
        let mut state = ClassTreeState::new(zoo());
        state.handle(&AppEvent::Enter);
        assert_eq!(names(&state), vec!["Animal", "Bird", "Mammal", "Plant"]);
        state.handle(&AppEvent::Enter);
        assert_eq!(names(&state), vec!["Animal", "Plant"]);
    }

    #[test]
    fn enter_on_leaf_does_nothing() {
        let mut state = ClassTreeState::new(zoo());
        state.handle(&AppEvent::TreeNav(Direction::Down));
        state.handle(&AppEvent::Enter);
        assert!(state.session.expansion().is_empty());
    }

    #[test]
    fn right_expands_left_collapses() {
        let mut state = ClassTreeState::new(zoo());
        state.handle(&AppEvent::TreeNav(Direction::Right));
        state.handle(&AppEvent::TreeNav(Direction::Right));
        assert!(state.session.expansion().contains("Animal"));
        state.handle(&AppEvent::TreeNav(Direction::Left));
        assert!(!state.session.expansion().contains("Animal"));
    }

    #[test]
    fn search_reveals_match_and_clamps_cursor() {
        let mut state = ClassTreeState::new(zoo());
        state.cursor = 1;
        state.set_search_term("do");
        assert_eq!(names(&state), vec!["Animal", "Mammal", "Dog"]);
        state.set_search_term("zzz");
        assert!(names(&state).is_empty());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn replacing_forest_collapses_everything() {
        let mut state = ClassTreeState::new(zoo());
        state.handle(&AppEvent::Enter);
        state.cursor = 2;
        state.replace_forest(zoo());
        assert_eq!(state.cursor, 0);
        assert_eq!(names(&state), vec!["Animal", "Plant"]);
    }
}
