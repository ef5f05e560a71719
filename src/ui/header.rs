use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::config::LayoutMode;
use crate::model::TAG_ALL;
use crate::ui::inventory::{InputMode, InventoryListState, SortOrder};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// Title bar with the active query and layout summary.
    pub fn widget(&self, list: Option<&InventoryListState>, email: &str) -> Paragraph<'static> {
        let mut spans = vec![Span::styled(
            " Stockpile ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )];

        if let Some(list) = list {
            spans.push(Span::styled(
                format!("│ {} items ", list.item_count()),
                Style::default().fg(PRIMARY_TEXT),
            ));
            if !list.query.tag.eq_ignore_ascii_case(TAG_ALL) {
                spans.push(Span::styled(
                    format!("│ tag: {} ", list.query.tag),
                    Style::default().fg(PRIMARY_TEXT),
                ));
            }
            if list.input_mode == InputMode::Search || !list.query.search.is_empty() {
                spans.push(Span::styled(
                    format!("│ search: {}_ ", list.query.search),
                    Style::default().fg(ACCENT),
                ));
            }
            if let Some(order) = list.query.sort {
                let arrow = match order {
                    SortOrder::Ascending => "name ↑",
                    SortOrder::Descending => "name ↓",
                };
                spans.push(Span::styled(
                    format!("│ sort: {arrow} "),
                    Style::default().fg(PRIMARY_TEXT),
                ));
            }
            let layout = match list.layout {
                LayoutMode::List => "list",
                LayoutMode::Grid => "grid",
            };
            spans.push(Span::styled(
                format!("│ {layout} "),
                Style::default().fg(DIM_TEXT),
            ));
        }

        if !email.is_empty() {
            spans.push(Span::styled(
                format!("│ {email} "),
                Style::default().fg(DIM_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
