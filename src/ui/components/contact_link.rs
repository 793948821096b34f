use crate::links::{LinkError, UrlOpener};
use crate::profile::ContactTarget;
use crate::ui::icons::glyph;
use crate::ui::theme::Theme;
use crate::ui::wrap::{display_width, wrap_rows};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Activatable icon + label row for one contact target.
pub struct ContactLink<'a> {
    target: &'a ContactTarget,
}

impl<'a> ContactLink<'a> {
    pub fn new(target: &'a ContactTarget) -> Self {
        Self { target }
    }

    /// Icon and label, the label wrapped to `width` with continuation rows
    /// aligned under it.
    pub fn lines(&self, theme: &Theme, width: u16, focused: bool) -> Vec<Line<'static>> {
        let icon_style = Style::default().fg(theme.palette.primary);
        let mut label_style = icon_style.add_modifier(Modifier::UNDERLINED);
        if focused {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }
        let icon = glyph(self.target.kind.icon(), theme.icons);
        let lead = display_width(icon) + 1;

        wrap_rows(&self.target.label, (width as usize).saturating_sub(lead))
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let prefix = if index == 0 {
                    Span::styled(icon, icon_style)
                } else {
                    Span::raw(" ".repeat(lead - 1))
                };
                Line::from(vec![prefix, Span::raw(" "), Span::styled(row, label_style)])
            })
            .collect()
    }

    /// Hands the target URL, unmodified, to `opener`.
    ///
    /// Failures are returned to the caller.
    pub fn activate(&self, opener: &dyn UrlOpener) -> Result<(), LinkError> {
        tracing::debug!(
            kind = ?self.target.kind,
            url = %self.target.url,
            "Activating contact link"
        );
        opener.open(&self.target.url)
    }
}
