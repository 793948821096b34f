use serde::{Deserialize, Serialize};

/// Named reference into the fixed glyph set.
///
/// Resolved to a drawable glyph by [`crate::ui::icons::glyph`]. Profile files
/// spell these in snake_case; an unknown name fails to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    User,
    Smartphone,
    Mail,
    Linkedin,
    Github,
    BookOpen,
    Code,
    Briefcase,
    Link,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::User,
        Icon::Smartphone,
        Icon::Mail,
        Icon::Linkedin,
        Icon::Github,
        Icon::BookOpen,
        Icon::Code,
        Icon::Briefcase,
        Icon::Link,
    ];
}
