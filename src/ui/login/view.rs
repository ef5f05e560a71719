//! Login screen rendering.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect;
use crate::ui::login::state::{LoginField, LoginScreenState};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT, STATUS_ERROR, STATUS_OK};

const FORM_WIDTH: u16 = 46;
const FORM_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, state: &LoginScreenState) {
    let form = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);

    let block = Block::default()
        .title(format!(" {} ", state.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(form);
    frame.render_widget(block, form);

    let masked: String = "•".repeat(state.password.chars().count());
    let mut lines = vec![
        Line::from(""),
        field_line("Email", &state.email, state.focused == LoginField::Email),
        Line::from(""),
        field_line("Password", &masked, state.focused == LoginField::Password),
        Line::from(""),
    ];

    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    } else if let Some(info) = &state.info {
        lines.push(Line::from(Span::styled(
            format!("  {info}"),
            Style::default().fg(STATUS_OK),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  Enter: submit   Tab: field   Ctrl+R: register",
            Style::default().fg(DIM_TEXT),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &'static str, value: &str, focused: bool) -> Line<'static> {
    let marker = if focused { "> " } else { "  " };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_TEXT)
    };
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!(" {marker}{label:<10}"), label_style),
        Span::styled(format!("{value}{cursor}"), Style::default().fg(PRIMARY_TEXT)),
    ])
}
