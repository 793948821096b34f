use crate::ui::mvi::Intent;
use crate::ui::viewer::state::Notice;

#[derive(Debug, Clone)]
pub enum ViewerIntent {
    /// Scroll by `delta` rows, clamped to `0..=max`.
    ScrollBy { delta: i32, max: u16 },
    ScrollHome,
    ScrollEnd { max: u16 },
    /// Re-clamp after the page or viewport changed size.
    Clamp { max: u16 },
    FocusNext { count: usize },
    FocusPrev { count: usize },
    FocusLink { index: usize },
    ClearFocus,
    /// Scroll just enough for `line` to be inside a `viewport`-tall window.
    Reveal { line: usize, viewport: u16, max: u16 },
    ShowNotice(Notice),
    DismissNotice,
}

impl Intent for ViewerIntent {}
