use crate::ui::mvi::UiState;

/// Transient message drawn over the page until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    /// Link the notice is about, offered for copying.
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub scroll: u16,
    pub focused_link: Option<usize>,
    pub notice: Option<Notice>,
}

impl UiState for ViewerState {}

impl ViewerState {
    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }
}
