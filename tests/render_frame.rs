mod common;

use common::{app_with, FailingOpener, RecordingOpener};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use resume_tui::ui::app::App;
use resume_tui::ui::render::draw;
use std::sync::Arc;

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol().to_string())
        .collect()
}

fn screen_text(buffer: &Buffer) -> String {
    (0..buffer.area.height)
        .map(|y| row_text(buffer, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn first_screen_shows_name_and_footer() {
    let app = app_with(Arc::new(RecordingOpener::default()));
    let buffer = render(&app, 80, 24);
    let text = screen_text(&buffer);

    assert!(text.contains("Vanessa Matias"));
    assert!(text.contains("Estudante"));
    let footer = row_text(&buffer, 23);
    assert!(footer.contains("q: Quit"));
    assert!(footer.contains(concat!("v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn scrolling_to_the_end_reaches_experience() {
    let mut app = app_with(Arc::new(RecordingOpener::default()));
    app.scroll_end();
    let text = screen_text(&render(&app, 80, 24));
    assert!(text.contains("Projeto Chico no Clima (Premiado)"));
    assert!(!text.contains("Vanessa Matias"));
}

#[test]
fn notice_is_drawn_over_the_page() {
    let mut app = app_with(Arc::new(FailingOpener));
    app.activate_link(0);
    let text = screen_text(&render(&app, 80, 24));
    assert!(text.contains("Notice"));
    assert!(text.contains("Esc: Dismiss"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app_with(Arc::new(RecordingOpener::default()));
    app.on_resize((3, 2), (3, 1));
    let _ = render(&app, 3, 2);
    app.on_resize((0, 0), (0, 0));
    let _ = render(&app, 1, 1);
}
