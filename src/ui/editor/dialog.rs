//! Rendering for the add/edit item dialog.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::editor::state::{EditorDialogState, EditorField, EditorMode};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, DIM_TEXT, POPUP_BORDER, PRIMARY_TEXT, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 52;
const DIALOG_HEIGHT: u16 = 12;

const FIELDS: [EditorField; 4] = [
    EditorField::Name,
    EditorField::Description,
    EditorField::Quantity,
    EditorField::Tag,
];

pub fn render_editor_dialog(frame: &mut Frame, state: &EditorDialogState) {
    let EditorDialogState::Visible {
        mode,
        fields,
        focused,
        error,
    } = state
    else {
        return;
    };

    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let title = match mode {
        EditorMode::Add => " Add New Item ",
        EditorMode::Edit { .. } => " Edit Item ",
    };
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::from("")];
    for field in FIELDS {
        let is_focused = field == *focused;
        let marker = if is_focused { "> " } else { "  " };
        let label_style = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        let value = fields.get(field);
        let cursor = if is_focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!(" {marker}{:<12}", field.label()), label_style),
            Span::styled(
                format!("{value}{cursor}"),
                Style::default().fg(PRIMARY_TEXT),
            ),
        ]));
    }

    lines.push(Line::from(""));
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(STATUS_ERROR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Enter: save   Tab: next field   Esc: cancel",
            Style::default().fg(DIM_TEXT),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
