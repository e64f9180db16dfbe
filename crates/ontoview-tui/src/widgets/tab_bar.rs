//! Tab bar widget: the strip of ontology sections at the top of the screen.

use crate::app::OntologyTab;
use crate::theme::Theme;
use ontoview_core::OntologySnapshot;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line section strip with per-section counts.
///
/// Keybinding hints (`q:quit  ?:help`) are right-aligned in the same row.
pub struct TabBar<'a> {
    snapshot: &'a OntologySnapshot,
    active: OntologyTab,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(snapshot: &'a OntologySnapshot, active: OntologyTab, theme: &'a Theme) -> Self {
        Self {
            snapshot,
            active,
            theme,
        }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = OntologyTab::ALL
            .iter()
            .map(|tab| Line::from(format!(" {} ({}) ", tab.title(), tab.count(self.snapshot))))
            .collect();

        Tabs::new(labels)
            .select(self.active.index())
            .highlight_style(self.theme.border_focused.add_modifier(Modifier::REVERSED))
            .divider("")
            .render(area, buf);

        let hint = " q:quit  ?:help ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
