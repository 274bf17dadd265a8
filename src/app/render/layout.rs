use ratatui::layout::Rect;

/// Inset a rect horizontally by padding on each side.
pub(super) fn inset_horizontal(area: Rect, padding: u16) -> Rect {
    if area.width <= padding * 2 {
        return area;
    }
    Rect {
        x: area.x + padding,
        width: area.width - padding * 2,
        ..area
    }
}

/// Create a centered rect with given percentage width and a fixed height.
pub(super) fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_width = (u32::from(r.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let popup_height = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(popup_width)) / 2;
    let y = r.y + (r.height.saturating_sub(popup_height)) / 2;
    Rect::new(x, y, popup_width, popup_height)
}
