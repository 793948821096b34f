//! Stateless presentational pieces of the résumé page.
//!
//! Each component maps a slice of the [`crate::profile::Profile`] plus a
//! [`crate::ui::theme::Theme`] to styled lines. None of them hold state.

mod card;
mod contact_link;
mod experience_item;
mod profile_header;
mod section_header;
mod skill_tags;

pub use card::{Card, CardStyle};
pub use contact_link::ContactLink;
pub use experience_item::ExperienceItem;
pub use profile_header::ProfileHeader;
pub use section_header::SectionHeader;
pub use skill_tags::{SkillTags, TagPlacement};

use crate::ui::wrap::{display_width, truncate};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Fits `spans` to exactly `width` cells: cut on the right, or padded with
/// `fill`-styled spaces.
fn filled(spans: Vec<Span<'static>>, width: usize, fill: Style) -> Line<'static> {
    let mut spans = clip_spans(spans, width);
    let used: usize = spans.iter().map(Span::width).sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), fill));
    }
    Line::from(spans)
}

/// Centres `spans` in a row of `width` cells filled with `fill`.
fn centered(spans: Vec<Span<'static>>, width: usize, fill: Style) -> Line<'static> {
    let used: usize = spans.iter().map(Span::width).sum();
    let left = width.saturating_sub(used) / 2;
    let mut row = Vec::with_capacity(spans.len() + 2);
    if left > 0 {
        row.push(Span::styled(" ".repeat(left), fill));
    }
    row.extend(spans);
    filled(row, width, fill)
}

/// Drops whatever of `spans` lies beyond `width` cells.
fn clip_spans(spans: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let mut used = 0;
    let mut kept = Vec::with_capacity(spans.len());
    for span in spans {
        let span_width = span.width();
        if used + span_width <= width {
            used += span_width;
            kept.push(span);
            continue;
        }
        let rest = truncate(&span.content, width - used);
        if !rest.is_empty() {
            kept.push(Span::styled(rest, span.style));
        }
        break;
    }
    kept
}

/// Blank spaces as wide as `text`.
fn blank_like(text: &str) -> String {
    " ".repeat(display_width(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_rows_are_exactly_as_wide_as_asked() {
        let spans = vec![Span::raw("abcdef"), Span::raw("ghij")];
        let line = filled(spans, 8, Style::default());
        assert_eq!(line.to_string(), "abcdefgh");

        let line = filled(vec![Span::raw("ab")], 4, Style::default());
        assert_eq!(line.to_string(), "ab  ");
    }

    #[test]
    fn centered_overflow_is_cut() {
        let line = centered(vec![Span::raw("0123456789")], 6, Style::default());
        assert_eq!(line.width(), 6);
        assert_eq!(line.to_string(), "012345");
    }
}
