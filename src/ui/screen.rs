//! Assembles the résumé page from the leaf components.
//!
//! [`compose`] is a pure function of the profile, the theme and the
//! [`ScreenContext`]; the host calls it again whenever width, photo or link
//! focus change.

use crate::photo::PhotoView;
use crate::profile::{ContactTarget, Icon, Profile};
use crate::ui::components::{
    Card, ContactLink, ExperienceItem, ProfileHeader, SectionHeader, SkillTags,
};
use crate::ui::platform::HostPlatform;
use crate::ui::theme::Theme;
use crate::ui::wrap::wrap;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use std::ops::Range;

pub const ABOUT_TITLE: &str = "Objetivo / Resumo";
pub const CONTACT_TITLE: &str = "Contato e Perfis";
pub const EDUCATION_TITLE: &str = "Formação Acadêmica";
pub const SKILLS_TITLE: &str = "Habilidades Técnicas (Skills)";
pub const EXPERIENCE_TITLE: &str = "Experiências e Projetos";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Header,
    About,
    Contact,
    Education,
    Skills,
    Experience,
}

/// Everything [`compose`] needs besides the profile and theme.
#[derive(Clone, Copy, Debug)]
pub struct ScreenContext<'a> {
    pub width: u16,
    pub viewport_height: u16,
    pub platform: HostPlatform,
    pub photo: &'a PhotoView,
    pub focused_link: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegion {
    pub kind: SectionKind,
    /// First line of the section.
    pub line: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKey {
    Education,
    Experience(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRegion {
    pub key: CardKey,
    pub lines: Range<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagRegion {
    pub line: usize,
    /// Column from the left edge of the page.
    pub column: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkRegion {
    /// Rows the link occupies; long labels wrap.
    pub lines: Range<usize>,
    pub target: ContactTarget,
}

/// The composed page: styled lines plus where each piece landed.
#[derive(Clone, Debug, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub sections: Vec<SectionRegion>,
    pub cards: Vec<CardRegion>,
    pub tags: Vec<TagRegion>,
    pub links: Vec<LinkRegion>,
}

impl Page {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn section(&self, kind: SectionKind) -> Option<&SectionRegion> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Link drawn on `line`, if any.
    pub fn link_at(&self, line: usize) -> Option<(usize, &LinkRegion)> {
        self.links
            .iter()
            .enumerate()
            .find(|(_, l)| l.lines.contains(&line))
    }

    /// Plain text of the lines in `range`.
    pub fn text(&self, range: Range<usize>) -> Vec<String> {
        self.lines[range].iter().map(|line| line.to_string()).collect()
    }

    /// Plain text of the whole page.
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.to_string().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

struct PageBuilder<'t> {
    theme: &'t Theme,
    page: Page,
}

impl<'t> PageBuilder<'t> {
    fn indent(&self) -> Span<'static> {
        Span::raw(" ".repeat(self.theme.spacing.section_padding as usize))
    }

    fn next_line(&self) -> usize {
        self.page.lines.len()
    }

    fn push_raw(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.page.lines.extend(lines);
    }

    fn push_indented(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        for line in lines {
            let mut spans = Vec::with_capacity(line.spans.len() + 1);
            spans.push(self.indent());
            spans.extend(line.spans);
            self.page.lines.push(Line::from(spans).style(line.style));
        }
    }

    fn blank(&mut self, rows: u16) {
        for _ in 0..rows {
            self.page.lines.push(Line::default());
        }
    }

    fn begin_section(&mut self, kind: SectionKind, title: &str, icon: Icon, width: u16) {
        let line = self.next_line();
        self.page.sections.push(SectionRegion { kind, line });
        let header = SectionHeader::new(title, icon).lines(self.theme, width);
        self.push_indented(header);
    }

    fn end_section(&mut self) {
        self.blank(self.theme.spacing.section_gap);
    }
}

/// Lays out the full page in its fixed order: header, about, contact,
/// education, skills, experience, bottom spacer.
pub fn compose(profile: &Profile, theme: &Theme, ctx: &ScreenContext<'_>) -> Page {
    let inner = ctx
        .width
        .saturating_sub(theme.spacing.section_padding * 2)
        .max(1);
    let mut b = PageBuilder {
        theme,
        page: Page::default(),
    };

    // Header
    b.page.sections.push(SectionRegion {
        kind: SectionKind::Header,
        line: 0,
    });
    let header =
        ProfileHeader::new(profile, ctx.photo).lines(theme, ctx.width, ctx.viewport_height);
    b.push_raw(header);
    b.end_section();

    // About
    b.begin_section(SectionKind::About, ABOUT_TITLE, Icon::User, inner);
    let about_style = Style::default().fg(theme.palette.text);
    let about = wrap(&profile.about, inner as usize)
        .into_iter()
        .map(|row| Line::from(Span::styled(row, about_style)));
    b.push_indented(about);
    b.end_section();

    // Contact
    b.begin_section(SectionKind::Contact, CONTACT_TITLE, Icon::Smartphone, inner);
    for (index, target) in profile.contact.targets().into_iter().enumerate() {
        let focused = ctx.focused_link == Some(index);
        let start = b.next_line();
        b.push_indented(ContactLink::new(&target).lines(theme, inner, focused));
        b.page.links.push(LinkRegion {
            lines: start..b.next_line(),
            target,
        });
    }
    b.end_section();

    // Education
    b.begin_section(SectionKind::Education, EDUCATION_TITLE, Icon::BookOpen, inner);
    let start = b.next_line();
    b.push_indented(Card::education(&profile.education).lines(theme, inner));
    b.page.cards.push(CardRegion {
        key: CardKey::Education,
        lines: start..b.next_line(),
    });
    b.end_section();

    // Skills
    b.begin_section(SectionKind::Skills, SKILLS_TITLE, Icon::Code, inner);
    let (tag_lines, placements) = SkillTags::new(&profile.skills).layout(theme, inner);
    let first = b.next_line();
    let padding = theme.spacing.section_padding as usize;
    b.page
        .tags
        .extend(placements.into_iter().map(|placed| TagRegion {
            line: first + placed.row,
            column: padding + placed.column,
            label: placed.label,
        }));
    b.push_indented(tag_lines);
    b.end_section();

    // Experience
    b.begin_section(SectionKind::Experience, EXPERIENCE_TITLE, Icon::Briefcase, inner);
    for (index, entry) in profile.experience.iter().enumerate() {
        if index > 0 {
            b.blank(theme.spacing.list_gap);
        }
        let start = b.next_line();
        b.push_indented(ExperienceItem::new(entry).lines(theme, inner));
        b.page.cards.push(CardRegion {
            key: CardKey::Experience(entry.id),
            lines: start..b.next_line(),
        });
    }
    b.end_section();

    b.blank(theme.spacing.bottom_spacer(ctx.platform));

    tracing::debug!(
        width = ctx.width,
        lines = b.page.lines.len(),
        cards = b.page.cards.len(),
        "Composed page"
    );
    b.page
}
