//! Glyph lookup table for [`Icon`] selectors.

use crate::profile::Icon;
use crate::ui::theme::IconStyle;

struct GlyphEntry {
    emoji: &'static str,
    ascii: &'static str,
}

const fn entry(icon: Icon) -> GlyphEntry {
    match icon {
        Icon::User => GlyphEntry { emoji: "👤", ascii: "[@]" },
        Icon::Smartphone => GlyphEntry { emoji: "📱", ascii: "[#]" },
        Icon::Mail => GlyphEntry { emoji: "📧", ascii: "[m]" },
        Icon::Linkedin => GlyphEntry { emoji: "🌐", ascii: "[in]" },
        Icon::Github => GlyphEntry { emoji: "🐙", ascii: "[gh]" },
        Icon::BookOpen => GlyphEntry { emoji: "📖", ascii: "[=]" },
        Icon::Code => GlyphEntry { emoji: "💻", ascii: "[<>]" },
        Icon::Briefcase => GlyphEntry { emoji: "💼", ascii: "[+]" },
        Icon::Link => GlyphEntry { emoji: "🔗", ascii: "[~]" },
    }
}

/// Drawable text for `icon` in the given style.
pub fn glyph(icon: Icon, style: IconStyle) -> &'static str {
    let entry = entry(icon);
    match style {
        IconStyle::Emoji => entry.emoji,
        IconStyle::Ascii => entry.ascii,
    }
}
