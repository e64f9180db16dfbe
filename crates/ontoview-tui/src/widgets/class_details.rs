//! Details pane for the class under the tree cursor.

use crate::theme::Theme;
use ontoview_core::Forest;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct ClassDetails<'a> {
    forest: &'a Forest,
    selected: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> ClassDetails<'a> {
    pub fn new(forest: &'a Forest, selected: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            forest,
            selected,
            theme,
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let Some(name) = self.selected else {
            return vec![Line::from(Span::styled(
                "no class selected",
                Style::default().add_modifier(Modifier::DIM),
            ))];
        };

        let parents = self.forest.parents_of(name);
        let children: Vec<&str> = self
            .forest
            .find(name)
            .map(|n| n.children.iter().map(|c| c.name.as_str()).collect())
            .unwrap_or_default();

        let mut lines = vec![
            Line::from(Span::styled(
                name.to_string(),
                self.theme.tree_parent.add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.push(field("superclasses", &parents, self.theme));
        lines.push(field("subclasses", &children, self.theme));
        lines
    }
}

fn field<'a>(label: &'a str, names: &[&str], theme: &Theme) -> Line<'a> {
    let value = if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    };
    Line::from(vec![
        Span::styled(format!("{label:<13}"), theme.border_unfocused),
        Span::styled(value, theme.tree_leaf),
    ])
}

impl Widget for ClassDetails<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Details ")
            .border_style(self.theme.border_unfocused);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
