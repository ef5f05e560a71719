//! Top-level frame composition.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::app::{App, Screen, StatusKind};
use crate::ui::delete::render_delete_dialog;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::{Footer, INVENTORY_HINTS, LOGIN_HINTS};
use crate::ui::header::Header;
use crate::ui::layout::screen_areas;
use crate::ui::theme::{STATUS_OK, STATUS_WARN};
use crate::ui::{inventory, login};

pub fn draw(frame: &mut Frame, app: &App) {
    let areas = screen_areas(frame.area());

    let (list, hints) = match app.screen() {
        Screen::Login => (None, LOGIN_HINTS),
        Screen::Inventory => (Some(app.list()), INVENTORY_HINTS),
    };

    frame.render_widget(
        Header::new().widget(list, &app.session().email),
        areas.header,
    );
    frame.render_widget(Footer::new().widget(hints, areas.footer.width), areas.footer);
    render_status(frame, areas.status, app);

    match app.screen() {
        Screen::Login => login::view::render(frame, areas.body, app.login()),
        Screen::Inventory => {
            inventory::view::render(frame, areas.body, app.list());
            render_editor_dialog(frame, app.editor());
            render_delete_dialog(frame, app.delete_dialog());
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let Some(status) = app.status() else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => crate::ui::theme::DIM_TEXT,
        StatusKind::Ok => STATUS_OK,
        StatusKind::Warn => STATUS_WARN,
    };
    let line = Line::from(Span::styled(
        format!(" {}", status.text),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
