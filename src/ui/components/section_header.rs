use crate::profile::Icon;
use crate::ui::icons::glyph;
use crate::ui::theme::Theme;
use crate::ui::wrap::{display_width, wrap_rows};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Icon and title opening a section, underlined by a thin rule.
pub struct SectionHeader<'a> {
    title: &'a str,
    icon: Icon,
}

impl<'a> SectionHeader<'a> {
    pub fn new(title: &'a str, icon: Icon) -> Self {
        Self { title, icon }
    }

    /// Title rows (wrapped to `width`, continuation rows aligned under the
    /// title) followed by the rule.
    pub fn lines(&self, theme: &Theme, width: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let accent = Style::default().fg(theme.palette.primary);
        let icon = glyph(self.icon, theme.icons);
        let lead = display_width(icon) + 1;

        let mut lines: Vec<Line<'static>> = wrap_rows(self.title, width.saturating_sub(lead))
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let prefix = if index == 0 {
                    Span::styled(icon, accent)
                } else {
                    Span::raw(" ".repeat(lead - 1))
                };
                Line::from(vec![
                    prefix,
                    Span::raw(" "),
                    Span::styled(row, accent.add_modifier(Modifier::BOLD)),
                ])
            })
            .collect();
        lines.push(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(theme.palette.secondary),
        )));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::IconStyle;

    #[test]
    fn header_is_glyph_then_title_then_rule() {
        let theme = Theme {
            icons: IconStyle::Ascii,
            ..Theme::default()
        };
        let lines = SectionHeader::new("Contato", Icon::Smartphone).lines(&theme, 12);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "[#] Contato");
        assert_eq!(lines[1].to_string(), "─".repeat(12));
        assert_eq!(lines[0].spans[2].style.fg, Some(theme.palette.primary));
    }

    #[test]
    fn long_title_wraps_under_itself() {
        let theme = Theme {
            icons: IconStyle::Ascii,
            ..Theme::default()
        };
        let lines =
            SectionHeader::new("Habilidades Técnicas (Skills)", Icon::Code).lines(&theme, 16);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(
            text,
            vec![
                "[<>] Habilidades".to_string(),
                "     Técnicas".to_string(),
                "     (Skills)".to_string(),
                "─".repeat(16),
            ]
        );
        assert!(lines.iter().all(|line| line.width() <= 16));
    }
}
