//! One-row transient status line under the search bar.

use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, text::Span, widgets::Widget};
use std::time::{Duration, Instant};

/// Outcome of the last service call, shown until it expires.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    pub at: Instant,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            at: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            at: Instant::now(),
        }
    }

    /// Errors stay until replaced; info messages fade after `timeout`.
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        !self.is_error && now.saturating_duration_since(self.at) >= timeout
    }
}

pub struct StatusLine<'a> {
    message: Option<&'a StatusMessage>,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(msg) = self.message else { return };
        let style = if msg.is_error {
            self.theme.status_error
        } else {
            self.theme.status_info
        };
        let span = Span::styled(format!(" {}", msg.text), style);
        buf.set_span(area.x, area.y, &span, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_expires_error_sticks() {
        let info = StatusMessage::info("saved");
        let err = StatusMessage::error("boom");
        let later = info.at + Duration::from_secs(10);
        let timeout = Duration::from_secs(3);
        assert!(info.is_expired(later, timeout));
        assert!(!info.is_expired(info.at, timeout));
        assert!(!err.is_expired(later, timeout));
    }
}
