use super::centered;
use crate::photo::PhotoView;
use crate::profile::Profile;
use crate::ui::theme::Theme;
use crate::ui::wrap::wrap_rows;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Photo, name and title on a tinted band across the top of the page.
pub struct ProfileHeader<'a> {
    profile: &'a Profile,
    photo: &'a PhotoView,
}

impl<'a> ProfileHeader<'a> {
    pub fn new(profile: &'a Profile, photo: &'a PhotoView) -> Self {
        Self { profile, photo }
    }

    pub fn lines(&self, theme: &Theme, width: u16, viewport_rows: u16) -> Vec<Line<'static>> {
        let width = width as usize;
        let fill = Style::default().bg(theme.palette.secondary);
        let blank = || centered(Vec::new(), width, fill);

        let mut lines = Vec::new();
        for _ in 0..theme.spacing.header_top_padding(viewport_rows) {
            lines.push(blank());
        }

        match self.photo.image() {
            Some(image) => lines.extend(
                image
                    .lines()
                    .into_iter()
                    .map(|row| centered(row.spans, width, fill)),
            ),
            None => lines.extend(
                self.badge(theme)
                    .into_iter()
                    .map(|row| centered(row, width, fill)),
            ),
        }

        lines.push(blank());
        let name_style = fill.fg(theme.palette.text).add_modifier(Modifier::BOLD);
        for row in wrap_rows(&self.profile.name, width) {
            lines.push(centered(vec![Span::styled(row, name_style)], width, fill));
        }
        let title_style = fill.fg(theme.palette.detail);
        for row in wrap_rows(&self.profile.title, width) {
            lines.push(centered(vec![Span::styled(row, title_style)], width, fill));
        }
        lines.push(blank());
        lines
    }

    /// Framed placeholder the size of the photo, with the initials inside.
    fn badge(&self, theme: &Theme) -> Vec<Vec<Span<'static>>> {
        let columns = theme.spacing.photo_columns.max(4) as usize;
        let rows = theme.spacing.photo_rows.max(3) as usize;
        let inner = columns - 2;
        let frame = Style::default()
            .bg(theme.palette.secondary)
            .fg(theme.palette.primary);

        let label = match self.photo {
            PhotoView::Loading => "···".to_string(),
            _ => self.profile.initials(),
        };
        let label_width = Span::raw(label.as_str()).width().min(inner);
        let left = (inner - label_width) / 2;
        let right = inner - label_width - left;
        let middle = rows / 2;

        (0..rows)
            .map(|row| {
                if row == 0 {
                    vec![Span::styled(format!("╭{}╮", "─".repeat(inner)), frame)]
                } else if row == rows - 1 {
                    vec![Span::styled(format!("╰{}╯", "─".repeat(inner)), frame)]
                } else if row == middle {
                    vec![
                        Span::styled(format!("│{}", " ".repeat(left)), frame),
                        Span::styled(label.clone(), frame.add_modifier(Modifier::BOLD)),
                        Span::styled(format!("{}│", " ".repeat(right)), frame),
                    ]
                } else {
                    vec![Span::styled(format!("│{}│", " ".repeat(inner)), frame)]
                }
            })
            .collect()
    }
}
