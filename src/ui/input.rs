use crate::ui::app::App;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

const WHEEL_STEP: i32 = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Esc => {
            if app.viewer().has_notice() {
                app.dismiss_notice();
            } else if app.viewer().focused_link.is_some() {
                app.clear_focus();
            } else {
                app.request_quit();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_home(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_end(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Enter => app.activate_focused(),
        KeyCode::Char('y') => app.copy_link(),
        _ => {}
    }
}

/// `body` is where the page is drawn; clicks outside it are ignored.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, body: Rect) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.scroll_by(-WHEEL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            let inside = mouse.column >= body.x
                && mouse.column < body.x + body.width
                && mouse.row >= body.y
                && mouse.row < body.y + body.height;
            if inside {
                app.click(mouse.row - body.y);
            }
        }
        _ => {}
    }
}
