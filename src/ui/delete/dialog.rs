//! Rendering for the delete confirmation dialog.

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::delete::state::{DeleteChoice, DeleteDialogState};
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, POPUP_BORDER, PRIMARY_TEXT, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

pub fn render_delete_dialog(frame: &mut Frame, state: &DeleteDialogState) {
    let DeleteDialogState::Pending { item, choice, .. } = state else {
        return;
    };

    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Item ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Delete '", Style::default().fg(PRIMARY_TEXT)),
            Span::styled(
                item.name.clone(),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ),
            Span::styled("'?", Style::default().fg(PRIMARY_TEXT)),
        ]),
        Line::from(""),
        buttons(*choice),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn buttons(choice: DeleteChoice) -> Line<'static> {
    let focused = Style::default()
        .fg(PRIMARY_TEXT)
        .bg(ACTIVE_HIGHLIGHT)
        .add_modifier(Modifier::BOLD);
    let idle = Style::default().fg(PRIMARY_TEXT);

    let (yes_style, no_style) = match choice {
        DeleteChoice::Yes => (focused, idle),
        DeleteChoice::No => (idle, focused),
    };

    Line::from(vec![
        Span::raw("          "),
        Span::styled(" Yes ", yes_style),
        Span::raw("      "),
        Span::styled(" No ", no_style),
    ])
}
