//! Inventory body rendering: list and grid layouts.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::LayoutMode;
use crate::ui::inventory::state::{InventoryListState, RowBinding};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT};

const GRID_CELL_WIDTH: u16 = 26;

pub fn render(frame: &mut Frame, area: Rect, state: &InventoryListState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.item_count() == 0 {
        let empty = Paragraph::new("No items. Press 'a' to add one.")
            .style(Style::default().fg(DIM_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    match state.layout {
        LayoutMode::List => render_list(frame, inner, state),
        LayoutMode::Grid => render_grid(frame, inner, state),
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &InventoryListState) {
    let visible = area.height.saturating_sub(1) as usize;
    if visible == 0 {
        return;
    }
    let first = scroll_offset(state.selected, state.item_count(), visible);

    let mut lines = vec![heading(area.width)];
    for row in first..(first + visible).min(state.item_count()) {
        if let Some(binding) = state.bind(row) {
            lines.push(list_row(&binding, area.width));
        }
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn heading(width: u16) -> Line<'static> {
    let name_width = name_column_width(width);
    let text = format!(
        " {:<name_width$} {:>5}  {:<12} {}",
        "Item Name", "Qty", "Tag", "Description",
    );
    Line::from(Span::styled(
        text,
        Style::default().fg(DIM_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn list_row(binding: &RowBinding<'_>, width: u16) -> Line<'static> {
    let name_width = name_column_width(width);
    let item = binding.item;
    let text = format!(
        " {:<name_width$} {:>5}  {:<12} {}",
        truncate(&item.name, name_width),
        item.quantity,
        truncate(&item.tag, 12),
        item.description,
    );
    let style = row_style(binding);
    Line::from(Span::styled(text, style))
}

fn render_grid(frame: &mut Frame, area: Rect, state: &InventoryListState) {
    let columns = (area.width / GRID_CELL_WIDTH).max(1) as usize;
    let visible_rows = area.height as usize;
    if visible_rows == 0 {
        return;
    }
    let selected_row = state.selected / columns;
    let first_row = scroll_offset(
        selected_row,
        state.item_count().div_ceil(columns),
        visible_rows,
    );

    let mut lines = Vec::new();
    for grid_row in first_row..first_row + visible_rows {
        let mut spans = Vec::new();
        for column in 0..columns {
            let index = grid_row * columns + column;
            let Some(binding) = state.bind(index) else {
                break;
            };
            let cell = format!(
                " {:<20} {:>3} ",
                truncate(&binding.item.name, 20),
                binding.item.quantity,
            );
            spans.push(Span::styled(cell, row_style(&binding)));
            spans.push(Span::raw(" "));
        }
        if spans.is_empty() {
            break;
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn row_style(binding: &RowBinding<'_>) -> Style {
    let mut style = Style::default().fg(if binding.item.quantity == 0 {
        crate::ui::theme::STATUS_ERROR
    } else {
        PRIMARY_TEXT
    });
    if binding.selected {
        style = style.bg(ACTIVE_HIGHLIGHT).fg(ACCENT).add_modifier(Modifier::BOLD);
    }
    style
}

fn name_column_width(width: u16) -> usize {
    (width as usize).saturating_sub(30).clamp(12, 32)
}

/// First visible row so that `selected` stays on screen.
fn scroll_offset(selected: usize, total: usize, visible: usize) -> usize {
    if total <= visible || selected < visible {
        0
    } else {
        (selected + 1 - visible).min(total - visible)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
