use super::{blank_like, filled};
use crate::profile::{EducationRecord, Icon};
use crate::ui::icons::glyph;
use crate::ui::theme::Theme;
use crate::ui::wrap::{display_width, wrap};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStyle {
    /// Plain tinted block.
    Flat,
    /// Tinted block with an accent edge on the left.
    Raised,
}

/// Tinted block with an icon in the top-left corner and a text stack
/// (title, subtitle, body) beside it.
pub struct Card<'a> {
    icon: Icon,
    title: &'a str,
    subtitle: String,
    body: &'a str,
    style: CardStyle,
}

impl<'a> Card<'a> {
    pub fn new(icon: Icon, title: &'a str, subtitle: String, body: &'a str) -> Self {
        Self {
            icon,
            title,
            subtitle,
            body,
            style: CardStyle::Flat,
        }
    }

    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    /// The education block: course, institution, duration.
    pub fn education(record: &'a EducationRecord) -> Self {
        Self::new(
            Icon::BookOpen,
            &record.course,
            record.institution.clone(),
            &record.duration,
        )
    }

    pub fn title(&self) -> &str {
        self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn body(&self) -> &str {
        self.body
    }

    pub fn lines(&self, theme: &Theme, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let fill = Style::default().bg(theme.palette.secondary);
        let icon = glyph(self.icon, theme.icons);
        let edge = match self.style {
            CardStyle::Raised => 1,
            CardStyle::Flat => 0,
        };
        // edge, left pad, icon, gap, text, right pad
        let text_width = width.saturating_sub(edge + 1 + display_width(icon) + 1 + 1);

        let title_style = fill
            .fg(theme.palette.text)
            .add_modifier(Modifier::BOLD);
        let subtitle_style = fill.fg(theme.palette.detail);
        let body_style = fill.fg(theme.palette.text);

        let rows = wrap(self.title, text_width)
            .into_iter()
            .map(|row| (row, title_style))
            .chain(
                wrap(&self.subtitle, text_width)
                    .into_iter()
                    .map(|row| (row, subtitle_style)),
            )
            .chain(
                wrap(self.body, text_width)
                    .into_iter()
                    .map(|row| (row, body_style)),
            );

        let mut lines = vec![self.row(theme, width, Vec::new())];
        for (index, (text, style)) in rows.enumerate() {
            let lead = if index == 0 {
                Span::styled(icon, fill.fg(theme.palette.primary))
            } else {
                Span::styled(blank_like(icon), fill)
            };
            lines.push(self.row(
                theme,
                width,
                vec![
                    Span::styled(" ", fill),
                    lead,
                    Span::styled(" ", fill),
                    Span::styled(text, style),
                ],
            ));
        }
        lines.push(self.row(theme, width, Vec::new()));
        lines
    }

    fn row(&self, theme: &Theme, width: usize, content: Vec<Span<'static>>) -> Line<'static> {
        let fill = Style::default().bg(theme.palette.secondary);
        let mut spans = Vec::with_capacity(content.len() + 2);
        if self.style == CardStyle::Raised {
            spans.push(Span::styled("▌", fill.fg(theme.palette.primary)));
        }
        spans.extend(content);
        filled(spans, width, fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::IconStyle;

    fn ascii_theme() -> Theme {
        Theme {
            icons: IconStyle::Ascii,
            ..Theme::default()
        }
    }

    #[test]
    fn card_rows_are_padded_to_width() {
        let card = Card::new(Icon::Code, "Title", "Org | 2024".to_string(), "Body text");
        let lines = card.lines(&ascii_theme(), 30);
        assert!(lines.iter().all(|line| line.width() == 30));
        // padding, title, subtitle, body, padding
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1].to_string().trim_end(), " [<>] Title");
        assert_eq!(lines[2].to_string().trim_end(), "      Org | 2024");
    }

    #[test]
    fn raised_cards_carry_an_accent_edge() {
        let theme = ascii_theme();
        let card = Card::new(Icon::Code, "Title", String::new(), "")
            .with_style(CardStyle::Raised);
        let lines = card.lines(&theme, 20);
        assert!(lines.iter().all(|line| line.to_string().starts_with('▌')));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn education_card_maps_record_fields() {
        let record = EducationRecord {
            course: "Curso".to_string(),
            institution: "Faculdade".to_string(),
            duration: "2025 - Presente".to_string(),
        };
        let card = Card::education(&record);
        assert_eq!(card.title(), "Curso");
        assert_eq!(card.subtitle(), "Faculdade");
        assert_eq!(card.body(), "2025 - Presente");
    }
}
