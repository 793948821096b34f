//! Shared test fixtures and fake host adapters.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use resume_tui::links::{LinkError, UrlOpener};
use resume_tui::photo::PhotoView;
use resume_tui::profile::{ExperienceEntry, Icon, Profile};
use resume_tui::ui::app::App;
use resume_tui::ui::platform::HostPlatform;
use resume_tui::ui::screen::{compose, Page, ScreenContext};
use resume_tui::ui::theme::{IconStyle, Theme};
use std::sync::Arc;

/// Records every URL it is asked to open.
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Mutex<Vec<String>>,
}

impl UrlOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        self.opened.lock().push(url.to_string());
        Ok(())
    }
}

/// Refuses every URL as if no handler were installed.
pub struct FailingOpener;

impl UrlOpener for FailingOpener {
    fn open(&self, url: &str) -> Result<(), LinkError> {
        Err(LinkError::SpawnFailed {
            program: "xdg-open".to_string(),
            url: url.to_string(),
            error: "No such file or directory".to_string(),
        })
    }
}

pub fn ascii_theme() -> Theme {
    Theme {
        icons: IconStyle::Ascii,
        ..Theme::default()
    }
}

pub fn entry(
    id: u32,
    title: &str,
    company: &str,
    duration: &str,
    description: &str,
) -> ExperienceEntry {
    ExperienceEntry {
        id,
        title: title.to_string(),
        company: company.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
        icon: Icon::Briefcase,
    }
}

pub fn compose_with(profile: &Profile, photo: &PhotoView, width: u16) -> Page {
    let ctx = ScreenContext {
        width,
        viewport_height: 24,
        platform: HostPlatform::Other,
        photo,
        focused_link: None,
    };
    compose(profile, &ascii_theme(), &ctx)
}

/// Collapses whitespace so wrapped text can be compared with its source.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn app_with(opener: Arc<dyn UrlOpener>) -> App {
    let mut app = App::new(
        Profile::builtin(),
        ascii_theme(),
        HostPlatform::Other,
        PhotoView::Disabled,
        opener,
    );
    app.on_resize((80, 24), (80, 23));
    app
}
