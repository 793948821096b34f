use super::{Card, CardStyle};
use crate::profile::ExperienceEntry;
use crate::ui::theme::Theme;
use ratatui::text::Line;

/// One entry of the experience list, drawn as a raised card.
pub struct ExperienceItem<'a> {
    entry: &'a ExperienceEntry,
}

impl<'a> ExperienceItem<'a> {
    pub fn new(entry: &'a ExperienceEntry) -> Self {
        Self { entry }
    }

    /// `"<company> | <duration>"` on a single line.
    pub fn subtitle(&self) -> String {
        format!("{} | {}", self.entry.company, self.entry.duration)
    }

    pub fn card(&self) -> Card<'a> {
        Card::new(
            self.entry.icon,
            &self.entry.title,
            self.subtitle(),
            &self.entry.description,
        )
        .with_style(CardStyle::Raised)
    }

    pub fn lines(&self, theme: &Theme, width: u16) -> Vec<Line<'static>> {
        self.card().lines(theme, width)
    }
}
