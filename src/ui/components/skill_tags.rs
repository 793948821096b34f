use crate::ui::theme::Theme;
use crate::ui::wrap::{clip, display_width};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Where a tag landed inside the flow block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagPlacement {
    pub row: usize,
    pub column: usize,
    pub label: String,
}

/// Skills as pill-shaped tags, flowing left to right and wrapping.
pub struct SkillTags<'a> {
    skills: &'a [String],
}

impl<'a> SkillTags<'a> {
    pub fn new(skills: &'a [String]) -> Self {
        Self { skills }
    }

    /// One tag per skill, in order. Duplicates are kept.
    ///
    /// A tag wider than `width` takes a row of its own and is clipped.
    pub fn layout(&self, theme: &Theme, width: u16) -> (Vec<Line<'static>>, Vec<TagPlacement>) {
        let width = width as usize;
        let gap = theme.spacing.tag_gap as usize;
        let tag_style = Style::default()
            .bg(theme.palette.primary)
            .fg(theme.palette.background);

        let mut rows: Vec<Vec<Span<'static>>> = Vec::new();
        let mut placements = Vec::with_capacity(self.skills.len());
        let mut current: Vec<Span<'static>> = Vec::new();
        let mut column = 0;

        for skill in self.skills {
            let text = clip(&format!(" {} ", skill), width);
            let tag_width = display_width(&text);

            if column > 0 && column + gap + tag_width > width {
                rows.push(std::mem::take(&mut current));
                column = 0;
            }
            if column > 0 && gap > 0 {
                current.push(Span::raw(" ".repeat(gap)));
                column += gap;
            }

            placements.push(TagPlacement {
                row: rows.len(),
                column,
                label: skill.clone(),
            });
            current.push(Span::styled(text, tag_style));
            column += tag_width;
        }

        if !current.is_empty() {
            rows.push(current);
        }

        (rows.into_iter().map(Line::from).collect(), placements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tags_flow_and_wrap() {
        let skills = skills(&["Python", "SQL", "R", "Excel"]);
        let (lines, placed) = SkillTags::new(&skills).layout(&Theme::default(), 16);
        // " Python " (8) + gap + " SQL " (5) = 14; " R " would need 18
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), " Python   SQL ");
        assert_eq!(lines[1].to_string(), " R   Excel ");
        let rows: Vec<(usize, usize)> = placed.iter().map(|p| (p.row, p.column)).collect();
        assert_eq!(rows, vec![(0, 0), (0, 9), (1, 0), (1, 4)]);
    }

    #[test]
    fn oversized_tag_gets_its_own_row() {
        let skills = skills(&["A", "Inovação Tecnológica", "B"]);
        let (lines, placed) = SkillTags::new(&skills).layout(&Theme::default(), 10);
        assert_eq!(lines.len(), 3);
        assert_eq!(placed[1].row, 1);
        assert_eq!(placed[1].column, 0);
        assert_eq!(placed[1].label, "Inovação Tecnológica");
        assert_eq!(lines[1].to_string(), " Inovação…");
        assert!(lines.iter().all(|line| line.width() <= 10));
    }

    #[test]
    fn no_skills_no_rows() {
        let (lines, placed) = SkillTags::new(&[]).layout(&Theme::default(), 10);
        assert!(lines.is_empty());
        assert!(placed.is_empty());
    }
}
