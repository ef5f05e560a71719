use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, PRIMARY_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, hints: &str, width: u16) -> Paragraph<'static> {
        let version = format!("v{VERSION} ");

        // Pad with char count, not byte count, so the version stays flush
        // right with unicode hint separators.
        let content_width = width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(hints.to_string(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Key hints for the inventory screen.
pub const INVENTORY_HINTS: &str =
    " ↑↓: Select │ +/-: Qty │ a: Add │ Enter: Edit │ d: Delete │ /: Search │ t: Tag │ s: Sort │ g: Layout │ Ctrl+L: Logout │ Ctrl+Q: Quit";

/// Key hints for the login screen.
pub const LOGIN_HINTS: &str = " Enter: Submit │ Tab: Field │ Ctrl+R: Register │ Ctrl+Q: Quit";
