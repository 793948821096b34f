use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const FOOTER_HEIGHT: u16 = 1;

/// Splits the screen into the scrolling body and a one-line footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect) {
    let footer_height = FOOTER_HEIGHT.min(area.height);
    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    (body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).0
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_takes_last_row() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(body, Rect::new(0, 0, 80, 23));
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn zero_height_area_is_all_empty() {
        let (body, footer) = layout_regions(Rect::new(0, 0, 80, 0));
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }
}
