//! Screen partitioning helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Header, body, status line, footer.
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);
    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
        footer: chunks[3],
    }
}

/// Centered rect of a given size, clamped to `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_cover_the_screen() {
        let areas = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.body.height, 24 - 3 - 3 - 1);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(50, 50, area);
        assert!(rect.width <= 20 && rect.height <= 10);
    }
}
